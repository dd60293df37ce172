//! Finite-field Digital Signature Algorithm
//!
//! This crate implements the DSA asymmetric-signature engine: domain
//! parameter generation in the FIPS 186-4 style, key-pair generation,
//! signing, and verification, all dispatched through a provider registry
//! so that the default, restricted-mode, and hardware-offload
//! implementations are interchangeable behind one contract.
//!
//! Signing and verification operate on prehashed digests; hashing the
//! message is the caller's job.

pub mod arith;
pub mod domain;
pub mod keypair;
pub mod providers;
pub mod sign;
pub mod signature;
pub mod verify;

pub use domain::{
    DigestAlgorithm, DomainParameters, GenerationConfig, GenerationEvent, GenerationEvidence,
    GenerationObserver,
};
pub use keypair::{DsaKeyPair, DsaPublicKey};
pub use providers::{DefaultEngine, DsaEngine, EngineRegistry, FipsEngine};
pub use signature::DsaSignature;

use ffsig_api::{Result, Signature as SignatureTrait};
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

/// DSA signature scheme routed through the global provider registry
///
/// Call sites written against this type keep working unchanged when the
/// active provider is swapped (for example to the restricted-mode
/// implementation).
pub struct Dsa;

impl SignatureTrait for Dsa {
    type ParameterConfig = GenerationConfig;
    type Parameters = Arc<DomainParameters>;
    type PublicKey = DsaPublicKey;
    type KeyPair = DsaKeyPair;
    type SignatureData = DsaSignature;

    fn name() -> &'static str {
        "DSA"
    }

    fn generate_parameters<R: CryptoRng + RngCore>(
        config: &Self::ParameterConfig,
        rng: &mut R,
    ) -> Result<Self::Parameters> {
        let (params, _evidence) = providers::generate_parameters(config, rng, None)?;
        Ok(Arc::new(params))
    }

    fn keypair<R: CryptoRng + RngCore>(
        params: &Self::Parameters,
        rng: &mut R,
    ) -> Result<Self::KeyPair> {
        providers::generate_keypair(params, rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public().clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        digest: &[u8],
        keypair: &Self::KeyPair,
        rng: &mut R,
    ) -> Result<Self::SignatureData> {
        providers::sign_digest(keypair, digest, rng)
    }

    fn verify(
        digest: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()> {
        providers::verify_digest(public_key, digest, signature)
    }
}
