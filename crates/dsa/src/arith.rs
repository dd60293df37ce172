//! Shared modular-arithmetic helpers for the signing and verification paths

use ffsig_api::error::ResultExt;
use ffsig_api::{Error, Result};
use ffsig_common::SecretVec;
use num_bigint_dig::{BigUint, ModInverse};
use num_traits::Zero;
use rand_core::CryptoRngCore;

use ffsig_params::MAX_SAMPLING_ATTEMPTS;

/// Reduce a digest to an integer of the subgroup-order bit length
///
/// Uses the leftmost min(N, |digest|) bits of the digest; a digest wider
/// than q is truncated, a narrower one is used whole. The result may
/// still exceed q; the modular arithmetic downstream absorbs that.
pub fn digest_to_scalar(digest: &[u8], q: &BigUint) -> BigUint {
    let n = q.bits();
    let digest_bits = digest.len() * 8;
    let z = BigUint::from_bytes_be(digest);
    if digest_bits > n {
        z >> (digest_bits - n)
    } else {
        z
    }
}

/// Draw a uniform integer in (0, bound) by rejection sampling
///
/// Bytes are drawn through `try_fill_bytes` so a failing randomness
/// source surfaces as `EntropyUnavailable` instead of panicking, and the
/// sampling buffer is wiped when the call returns. Each draw is accepted
/// with probability at least one half, so the attempt ceiling is
/// unreachable with a functioning source.
pub fn random_in_range(
    bound: &BigUint,
    rng: &mut dyn CryptoRngCore,
    context: &'static str,
) -> Result<BigUint> {
    let bits = bound.bits();
    let len = (bits + 7) / 8;
    let top_mask: u8 = if bits % 8 == 0 {
        0xFF
    } else {
        (1u8 << (bits % 8)) - 1
    };

    let mut buf = SecretVec::zeroed(len);
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        rng.try_fill_bytes(buf.as_mut_slice())
            .wrap_err(|| Error::EntropyUnavailable { context })?;
        buf.as_mut_slice()[0] &= top_mask;

        let candidate = BigUint::from_bytes_be(buf.as_slice());
        if !candidate.is_zero() && &candidate < bound {
            return Ok(candidate);
        }
    }

    Err(Error::GenerationFailed {
        context,
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}

/// Modular inverse of a mod m, if gcd(a, m) = 1
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    a.mod_inverse(m).and_then(|inverse| inverse.to_biguint())
}

/// Pad the nonce into a fixed-width modexp exponent
///
/// Adds q (twice when the first addition produces no carry into bit N)
/// so the exponent is always exactly N+1 bits. Since g^q = 1 mod p the
/// result of the exponentiation is unchanged, but its running time no
/// longer depends on the bit length of the secret nonce.
pub fn fixed_width_nonce_exponent(k: &BigUint, q: &BigUint) -> BigUint {
    let mut exponent = k + q;
    if exponent.bits() <= q.bits() {
        exponent += q;
    }
    exponent
}
