//! Digital signature traits for ffsig
//!
//! This module defines the trait that all signature schemes must implement.
//! The design prioritizes security by not providing any way to extract or
//! mutate secret key material through the trait surface.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for domain-parameterized digital signature schemes
///
/// Unlike schemes with fixed curves, finite-field schemes derive every key
/// pair from a set of domain parameters generated (or imported) up front,
/// so key generation takes `&Self::Parameters` and parameter generation is
/// part of the trait contract.
///
/// # Type Safety
///
/// There is no secret-key accessor: the key pair owns the private exponent,
/// wipes it on drop, and is the only value the signing operation accepts.
/// This prevents secret material from outliving its container.
///
/// # Digests
///
/// Signing and verification operate on a message digest the caller has
/// already computed; the scheme never hashes messages itself. The digest
/// is treated as an opaque byte string reduced to the bit length of the
/// subgroup order.
pub trait Signature {
    /// Configuration accepted by parameter generation (bit lengths, seed)
    type ParameterConfig;

    /// Domain parameter type, shared by all key pairs derived from it
    type Parameters: Clone;

    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Key pair type - must wipe secret material when zeroized
    ///
    /// # Security Note
    ///
    /// This type deliberately does not require `Clone`: the private
    /// exponent has exactly one owner for its whole lifetime.
    type KeyPair: Zeroize;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this signature scheme
    fn name() -> &'static str;

    /// Generate a fresh set of domain parameters
    ///
    /// # Security Requirements
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation, and must fail rather than degrade
    /// when it cannot supply randomness.
    fn generate_parameters<R: CryptoRng + RngCore>(
        config: &Self::ParameterConfig,
        rng: &mut R,
    ) -> Result<Self::Parameters>;

    /// Generate a new key pair under the given domain parameters
    fn keypair<R: CryptoRng + RngCore>(
        params: &Self::Parameters,
        rng: &mut R,
    ) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Sign a message digest with the given key pair
    ///
    /// # Security Requirements
    ///
    /// - A fresh, independent nonce must be drawn from `rng` on every call
    /// - Must not leak information about the secret key through timing
    fn sign<R: CryptoRng + RngCore>(
        digest: &[u8],
        keypair: &Self::KeyPair,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message digest and public key
    ///
    /// # Security Requirements
    ///
    /// - Components outside their permitted range must be rejected before
    ///   any further computation
    /// - A mismatch is reported distinctly from a malformed input
    fn verify(
        digest: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}
