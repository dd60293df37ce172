//! Public API traits and types for the ffsig library
//!
//! This crate provides the public API surface for the ffsig ecosystem:
//! the signature trait implemented by every engine, the provider/dispatch
//! vocabulary, and the error taxonomy shared by all crates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::provider::{KeyType, OperationKind, ProviderKind};
pub use traits::Signature;

// Re-export trait modules for direct access
pub use traits::{provider, signature};
