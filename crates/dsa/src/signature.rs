//! DSA signature components (r, s)

use num_bigint_dig::BigUint;

/// A DSA signature: the pair (r, s), each in [1, q-1] when valid
///
/// Purely a value type. Construction performs no range checks; the
/// verification engine classifies out-of-range components as malformed,
/// so signatures read from untrusted bytes can be represented as-is.
/// The byte accessors are the hand-off point to an external
/// serialization layer; this crate does not define a wire encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DsaSignature {
    r: BigUint,
    s: BigUint,
}

impl DsaSignature {
    /// Assemble a signature from its components
    pub fn from_components(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Assemble a signature from big-endian component bytes
    pub fn from_be_bytes(r: &[u8], s: &[u8]) -> Self {
        Self {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        }
    }

    /// The r component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The s component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Big-endian bytes of r (no leading zeros)
    pub fn r_bytes(&self) -> Vec<u8> {
        self.r.to_bytes_be()
    }

    /// Big-endian bytes of s (no leading zeros)
    pub fn s_bytes(&self) -> Vec<u8> {
        self.s.to_bytes_be()
    }
}
