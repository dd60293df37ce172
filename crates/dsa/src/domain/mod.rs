//! DSA domain parameters
//!
//! A parameter set (p, q, g) is generated once and then shared, read-only,
//! by every key pair derived from it. The struct is immutable after
//! construction and is normally handed around as `Arc<DomainParameters>`.

mod generate;
mod observer;

pub use generate::{
    generate, validate_generation, DigestAlgorithm, GenerationConfig, GenerationEvidence,
};
pub use observer::{GenerationEvent, GenerationObserver};

use ffsig_api::{Error, Result};
use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

use ffsig_params::MILLER_RABIN_ROUNDS;

/// DSA domain parameters: prime modulus p, prime subgroup order q with
/// q | p-1, and generator g of the order-q subgroup mod p
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainParameters {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl DomainParameters {
    /// Assemble domain parameters from their components, checking the
    /// algebraic invariants
    ///
    /// Verifies that q divides p-1, that g generates a subgroup of order
    /// q (g != 1, g^q = 1 mod p), and that the components are ordered
    /// sanely. Primality is not re-tested here; use
    /// [`DomainParameters::check_primality`] when importing parameters
    /// from an untrusted source.
    pub fn from_components(p: BigUint, q: BigUint, g: BigUint) -> Result<Self> {
        let one = BigUint::one();

        if q <= one || p <= q {
            return Err(Error::InvalidKey {
                context: "DSA domain parameters",
                message: "require 1 < q < p".into(),
            });
        }

        let p_minus_one = &p - &one;
        if !(&p_minus_one % &q).is_zero() {
            return Err(Error::InvalidKey {
                context: "DSA domain parameters",
                message: "q does not divide p-1".into(),
            });
        }

        if g <= one || g >= p {
            return Err(Error::InvalidKey {
                context: "DSA domain parameters",
                message: "generator outside (1, p)".into(),
            });
        }

        if !g.modpow(&q, &p).is_one() {
            return Err(Error::InvalidKey {
                context: "DSA domain parameters",
                message: "generator does not have order q".into(),
            });
        }

        Ok(Self { p, q, g })
    }

    /// Prime modulus p
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Prime subgroup order q
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Generator g of the order-q subgroup
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Bit lengths (L, N) of the modulus and subgroup order
    pub fn size(&self) -> (usize, usize) {
        (self.p.bits(), self.q.bits())
    }

    /// Probabilistically test p and q for primality at the configured
    /// confidence level
    ///
    /// Expensive at real parameter sizes; intended for validating
    /// imported parameter sets rather than freshly generated ones (the
    /// generator has already tested every emitted candidate).
    pub fn check_primality(&self) -> Result<()> {
        if !probably_prime(&self.q, MILLER_RABIN_ROUNDS) {
            return Err(Error::InvalidKey {
                context: "DSA domain parameters",
                message: "q failed primality testing".into(),
            });
        }
        if !probably_prime(&self.p, MILLER_RABIN_ROUNDS) {
            return Err(Error::InvalidKey {
                context: "DSA domain parameters",
                message: "p failed primality testing".into(),
            });
        }
        Ok(())
    }
}
