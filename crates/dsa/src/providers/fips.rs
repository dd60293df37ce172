//! Restricted-mode (FIPS-validated) provider
//!
//! Same core arithmetic as the default engine, with the operating
//! envelope narrowed to what FIPS 186-4 approves for new material:
//! parameter and key generation and signing are refused at (1024, 160),
//! and every freshly generated key pair must pass a sign/verify pairwise
//! consistency test before it is released. Verification is permitted at
//! all approved sizes so legacy signatures remain checkable.

use std::sync::Arc;

use ffsig_api::{Error, ProviderKind, Result};
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha256};

use ffsig_params::is_fips_generation_size;

use crate::domain::{
    self, DomainParameters, GenerationConfig, GenerationEvidence, GenerationObserver,
};
use crate::keypair::{DsaKeyPair, DsaPublicKey};
use crate::signature::DsaSignature;
use crate::{sign, verify};

use super::DsaEngine;

/// The validated/restricted-mode implementation
#[derive(Debug)]
pub struct FipsEngine;

impl FipsEngine {
    fn approve_sizes(&self, l: usize, n: usize) -> Result<()> {
        if !is_fips_generation_size(l, n) {
            return Err(Error::UnsupportedParameters {
                context: "restricted-mode provider",
                l,
                n,
            });
        }
        Ok(())
    }

    /// Sign and verify a fixed digest with the fresh key pair
    ///
    /// A key pair that cannot round-trip its own signature is discarded
    /// rather than released.
    fn pairwise_consistency_check(
        &self,
        keypair: &DsaKeyPair,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<()> {
        let digest = Sha256::digest(b"pairwise consistency check");
        let signature = sign::sign_digest(keypair, &digest, rng)?;
        verify::verify_digest(keypair.public(), &digest, &signature).map_err(|_| {
            Error::InvalidKey {
                context: "pairwise consistency check",
                message: "generated key pair failed its sign/verify self-test".into(),
            }
        })
    }
}

impl DsaEngine for FipsEngine {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Fips
    }

    fn generate_parameters(
        &self,
        config: &GenerationConfig,
        rng: &mut dyn CryptoRngCore,
        observer: Option<&dyn GenerationObserver>,
    ) -> Result<(DomainParameters, GenerationEvidence)> {
        self.approve_sizes(config.l(), config.n())?;
        domain::generate(config, rng, observer)
    }

    fn generate_keypair(
        &self,
        params: &Arc<DomainParameters>,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<DsaKeyPair> {
        let (l, n) = params.size();
        self.approve_sizes(l, n)?;
        let keypair = DsaKeyPair::generate(Arc::clone(params), rng)?;
        self.pairwise_consistency_check(&keypair, rng)?;
        Ok(keypair)
    }

    fn sign_digest(
        &self,
        keypair: &DsaKeyPair,
        digest: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<DsaSignature> {
        let (l, n) = keypair.public().params().size();
        self.approve_sizes(l, n)?;
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
