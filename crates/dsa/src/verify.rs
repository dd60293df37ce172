//! DSA signature verification
//!
//! Implements signature verification as specified in FIPS 186-4,
//! Section 4.7. Verification has no secret inputs, so it does not need
//! to run in constant time; what matters here is the classification of
//! failures. Components outside [1, q-1] are rejected as malformed
//! before any arithmetic, and only a well-formed signature that fails
//! the final congruence is reported as invalid.

use ffsig_api::{Error, Result};
use ffsig_internal::constant_time::ct_eq;
use num_traits::Zero;

use crate::arith::{digest_to_scalar, mod_inverse};
use crate::keypair::DsaPublicKey;
use crate::signature::DsaSignature;

/// Verify a signature over a prehashed digest
///
/// Algorithm:
/// 1. Reject unless 0 < r < q and 0 < s < q (`MalformedSignature`)
/// 2. w = s^-1 mod q
/// 3. u1 = z*w mod q, u2 = r*w mod q
/// 4. v = (g^u1 * y^u2 mod p) mod q
/// 5. Accept iff v = r; a mismatch is `InvalidSignature`
pub fn verify_digest(
    public_key: &DsaPublicKey,
    digest: &[u8],
    signature: &DsaSignature,
) -> Result<()> {
    let params = public_key.params();
    let (p, q, g) = (params.p(), params.q(), params.g());
    let (r, s) = (signature.r(), signature.s());

    if r.is_zero() || r >= q {
        return Err(Error::MalformedSignature {
            context: "DSA verify",
            message: "r outside [1, q-1]".into(),
        });
    }
    if s.is_zero() || s >= q {
        return Err(Error::MalformedSignature {
            context: "DSA verify",
            message: "s outside [1, q-1]".into(),
        });
    }

    let w = match mod_inverse(s, q) {
        Some(w) => w,
        // unreachable once s is in [1, q-1] for prime q; classified as
        // malformed input rather than an internal fault because s came
        // from the caller
        None => {
            return Err(Error::MalformedSignature {
                context: "DSA verify",
                message: "s not invertible modulo the subgroup order".into(),
            })
        }
    };

    let z = digest_to_scalar(digest, q);
    let u1 = (&z * &w) % q;
    let u2 = (r * &w) % q;

    let v = ((g.modpow(&u1, p) * public_key.y().modpow(&u2, p)) % p) % q;

    if ct_eq(v.to_bytes_be(), r.to_bytes_be()) {
        Ok(())
    } else {
        Err(Error::InvalidSignature { context: "DSA verify" })
    }
}
