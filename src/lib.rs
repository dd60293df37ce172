//! # ffsig
//!
//! A pure-Rust finite-field DSA library: FIPS 186-4 style domain-parameter
//! generation, key-pair generation, signing, and verification behind a
//! pluggable provider layer.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ffsig = "0.4"
//! ```
//!
//! Signing and verification operate on digests the caller has already
//! computed; ffsig never hashes messages itself.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`ffsig-api`]: Traits, provider vocabulary, and error types
//! - [`ffsig-common`]: Secret-material containers
//! - [`ffsig-internal`]: Constant-time helpers
//! - [`ffsig-params`]: Approved sizes and search bounds
//! - [`ffsig-dsa`]: The signature engine and provider registry

// Core re-exports (always available)
pub use ffsig_api as api;
pub use ffsig_common as common;
pub use ffsig_dsa as dsa;
pub use ffsig_internal as internal;
pub use ffsig_params as params;

/// Common imports for ffsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and the dispatch vocabulary
    pub use crate::api::{KeyType, OperationKind, ProviderKind, Signature};

    // Re-export the engine types
    pub use crate::dsa::{
        DigestAlgorithm, DomainParameters, Dsa, DsaEngine, DsaKeyPair, DsaPublicKey,
        DsaSignature, EngineRegistry, GenerationConfig, GenerationEvidence,
    };

    // Re-export security types
    pub use crate::common::SecretVec;
}
