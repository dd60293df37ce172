//! DSA signature generation
//!
//! Implements signature generation as specified in FIPS 186-4, Section 4.6.
//!
//! Algorithm, for a digest reduced to z:
//! 1. Draw a secret nonce k uniformly from (0, q), fresh for every call
//! 2. r = (g^k mod p) mod q; if r = 0, discard k and redraw
//! 3. s = k^-1 (z + x*r) mod q; if s = 0, discard k and redraw
//! 4. Return (r, s)
//!
//! Reusing k across two signatures under the same key leaks the private
//! exponent outright, so every iteration draws independently from the
//! caller's secure RNG. The modexp exponent is padded to a fixed width
//! before use so its running time does not depend on k, and k together
//! with every nonce-derived intermediate is wiped on each exit path.

use ffsig_api::{Error, Result};
use num_traits::Zero;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use ffsig_params::MAX_SIGNING_RETRIES;

use crate::arith::{digest_to_scalar, fixed_width_nonce_exponent, mod_inverse, random_in_range};
use crate::keypair::DsaKeyPair;
use crate::signature::DsaSignature;

/// Sign a prehashed digest with the given key pair
///
/// The digest is treated as an opaque byte string; its leftmost
/// min(N, |digest|) bits become the integer z.
pub fn sign_digest(
    keypair: &DsaKeyPair,
    digest: &[u8],
    rng: &mut dyn CryptoRngCore,
) -> Result<DsaSignature> {
    let params = keypair.public().params();
    let (p, q, g) = (params.p(), params.q(), params.g());
    let z = digest_to_scalar(digest, q);

    for _ in 0..MAX_SIGNING_RETRIES {
        let mut k = random_in_range(q, rng, "DSA signing nonce")?;

        let mut exponent = fixed_width_nonce_exponent(&k, q);
        let r = g.modpow(&exponent, p) % q;
        exponent.zeroize();

        if r.is_zero() {
            k.zeroize();
            continue;
        }

        let mut k_inv = match mod_inverse(&k, q) {
            Some(inverse) => inverse,
            None => {
                // cannot happen for 0 < k < q with q prime
                k.zeroize();
                return Err(Error::Internal {
                    context: "DSA signing",
                    message: "nonce not invertible modulo the subgroup order".into(),
                });
            }
        };
        k.zeroize();

        let mut xr = (keypair.x() * &r) % q;
        let s = (&k_inv * &((&z + &xr) % q)) % q;
        k_inv.zeroize();
        xr.zeroize();

        if s.is_zero() {
            continue;
        }

        return Ok(DsaSignature::from_components(r, s));
    }

    Err(Error::GenerationFailed {
        context: "DSA signing",
        attempts: MAX_SIGNING_RETRIES,
    })
}
