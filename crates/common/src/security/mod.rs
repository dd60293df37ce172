//! Security-sensitive data handling

pub mod secret;

#[cfg(feature = "alloc")]
pub use secret::SecretVec;
