//! Default software provider

use std::sync::Arc;

use ffsig_api::{ProviderKind, Result};
use rand_core::CryptoRngCore;

use crate::domain::{
    self, DomainParameters, GenerationConfig, GenerationEvidence, GenerationObserver,
};
use crate::keypair::{DsaKeyPair, DsaPublicKey};
use crate::signature::DsaSignature;
use crate::{sign, verify};

use super::DsaEngine;

/// The default software implementation
///
/// Accepts every approved parameter size, including the legacy
/// (1024, 160) pair kept for verifying old signatures.
#[derive(Debug)]
pub struct DefaultEngine;

impl DsaEngine for DefaultEngine {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Default
    }

    fn generate_parameters(
        &self,
        config: &GenerationConfig,
        rng: &mut dyn CryptoRngCore,
        observer: Option<&dyn GenerationObserver>,
    ) -> Result<(DomainParameters, GenerationEvidence)> {
        domain::generate(config, rng, observer)
    }

    fn generate_keypair(
        &self,
        params: &Arc<DomainParameters>,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<DsaKeyPair> {
        DsaKeyPair::generate(Arc::clone(params), rng)
    }

    fn sign_digest(
        &self,
        keypair: &DsaKeyPair,
        digest: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<DsaSignature> {
        sign::sign_digest(keypair, digest, rng)
    }

    fn verify_digest(
        &self,
        public_key: &DsaPublicKey,
        digest: &[u8],
        signature: &DsaSignature,
    ) -> Result<()> {
        verify::verify_digest(public_key, digest, signature)
    }
}
