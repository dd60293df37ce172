//! Shared functionality for the ffsig library
//!
//! This crate provides the secret-material containers used across
//! multiple ffsig components.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
#[cfg(feature = "alloc")]
pub use security::secret::SecretVec;
