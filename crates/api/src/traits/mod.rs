//! Trait definitions for the ffsig library

pub mod provider;
pub mod signature;

pub use provider::{KeyType, OperationKind, ProviderKind};
pub use signature::Signature;
