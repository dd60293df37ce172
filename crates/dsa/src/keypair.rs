//! DSA key pairs
//!
//! A key pair borrows its domain parameters through a shared `Arc` and
//! owns the private exponent exclusively. The exponent is wiped when the
//! key pair is dropped and is never exposed except through an explicitly
//! secret-typed export.

use core::fmt;
use std::sync::Arc;

use ffsig_api::{Error, Result};
use ffsig_common::SecretVec;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::arith::random_in_range;
use crate::domain::DomainParameters;

/// A DSA public key: shared domain parameters plus the public value y
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DsaPublicKey {
    params: Arc<DomainParameters>,
    y: BigUint,
}

impl DsaPublicKey {
    /// Build a public key, validating y against the parameters
    ///
    /// Checks 2 <= y <= p-2 and that y lies in the order-q subgroup
    /// (y^q = 1 mod p), the partial public-key validation of SP 800-89.
    pub fn new(params: Arc<DomainParameters>, y: BigUint) -> Result<Self> {
        let one = BigUint::one();
        let p_minus_one = params.p() - &one;

        if y <= one || y >= p_minus_one {
            return Err(Error::InvalidKey {
                context: "DSA public key",
                message: "public value outside (1, p-1)".into(),
            });
        }
        if !y.modpow(params.q(), params.p()).is_one() {
            return Err(Error::InvalidKey {
                context: "DSA public key",
                message: "public value not in the order-q subgroup".into(),
            });
        }

        Ok(Self { params, y })
    }

    /// The shared domain parameters
    pub fn params(&self) -> &Arc<DomainParameters> {
        &self.params
    }

    /// The public value y = g^x mod p
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

/// A DSA key pair: the public half plus the secret exponent x
///
/// Not `Clone`: the private exponent has exactly one owner, and it is
/// zeroized when that owner is dropped.
pub struct DsaKeyPair {
    public: DsaPublicKey,
    x: BigUint,
}

impl DsaKeyPair {
    /// Generate a key pair under the given domain parameters
    ///
    /// Draws x uniformly from (0, q); an RNG failure is
    /// `EntropyUnavailable` and never degrades to a weaker source.
    pub fn generate(
        params: Arc<DomainParameters>,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Self> {
        let x = random_in_range(params.q(), rng, "DSA key generation")?;
        let y = params.g().modpow(&x, params.p());
        let public = DsaPublicKey::new(params, y)?;
        Ok(Self { public, x })
    }

    /// Rebuild a key pair from an imported private exponent
    ///
    /// The public value is recomputed from x rather than trusted from the
    /// caller, so the pair is consistent by construction.
    pub fn from_private_exponent(
        params: Arc<DomainParameters>,
        x: BigUint,
    ) -> Result<Self> {
        if x.is_zero() || &x >= params.q() {
            return Err(Error::InvalidKey {
                context: "DSA private exponent",
                message: "exponent outside (0, q)".into(),
            });
        }
        let y = params.g().modpow(&x, params.p());
        let public = DsaPublicKey::new(params, y)?;
        Ok(Self { public, x })
    }

    /// The public half of the key pair
    pub fn public(&self) -> &DsaPublicKey {
        &self.public
    }

    /// Export the private exponent as big-endian bytes
    ///
    /// The returned buffer zeroizes itself on drop; it exists only as the
    /// hand-off point to an external serialization layer.
    pub fn private_exponent_bytes(&self) -> SecretVec {
        SecretVec::new(self.x.to_bytes_be())
    }

    pub(crate) fn x(&self) -> &BigUint {
        &self.x
    }
}

impl Zeroize for DsaKeyPair {
    fn zeroize(&mut self) {
        self.x.zeroize();
    }
}

impl Drop for DsaKeyPair {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for DsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DsaKeyPair")
            .field("public", &self.public)
            .field("x", &"[REDACTED]")
            .finish()
    }
}
