//! Constants for the Digital Signature Algorithm (DSA)

/// DSA with 1024-bit modulus and 160-bit subgroup (legacy verification only)
pub const DSA_1024_160: (usize, usize) = (1024, 160);

/// DSA with 2048-bit modulus and 224-bit subgroup
pub const DSA_2048_224: (usize, usize) = (2048, 224);

/// DSA with 2048-bit modulus and 256-bit subgroup
pub const DSA_2048_256: (usize, usize) = (2048, 256);

/// DSA with 3072-bit modulus and 256-bit subgroup
pub const DSA_3072_256: (usize, usize) = (3072, 256);

/// All (L, N) pairs the library understands
pub const APPROVED_PARAMETER_SIZES: [(usize, usize); 4] =
    [DSA_1024_160, DSA_2048_224, DSA_2048_256, DSA_3072_256];

/// The subset of pairs approved for generating new parameters and keys
///
/// FIPS 186-4 permits 1024/160 only for verifying signatures produced
/// under pre-existing parameters, so the restricted-mode provider refuses
/// to generate or sign at that size.
pub const FIPS_GENERATION_SIZES: [(usize, usize); 3] =
    [DSA_2048_224, DSA_2048_256, DSA_3072_256];

/// Returns true when (l, n) is an approved parameter-size pair
pub const fn is_approved_size(l: usize, n: usize) -> bool {
    (l == 1024 && n == 160)
        || (l == 2048 && n == 224)
        || (l == 2048 && n == 256)
        || (l == 3072 && n == 256)
}

/// Returns true when (l, n) may be used for new generation in restricted mode
pub const fn is_fips_generation_size(l: usize, n: usize) -> bool {
    is_approved_size(l, n) && l >= 2048
}

/// Miller-Rabin rounds for every primality decision
///
/// 64 rounds bound the per-candidate error at 2^-128, past the 2^-100
/// confidence required of the highest supported security tier. The same
/// count is used at every parameter size.
pub const MILLER_RABIN_ROUNDS: usize = 64;

/// Ceiling on hash-derived q candidates per generation call
pub const MAX_Q_CANDIDATES: u32 = 4096;

/// The p-candidate ceiling is `P_CANDIDATE_MULTIPLIER * L` for modulus
/// bit length L, matching the 4L-iteration search of FIPS 186-4 A.1.1.2
pub const P_CANDIDATE_MULTIPLIER: usize = 4;

/// Ceiling on generator candidates h = 2, 3, ...
///
/// The first h with h^((p-1)/q) != 1 mod p is accepted; for prime p the
/// search ends within a handful of iterations, the ceiling exists so the
/// loop is provably bounded.
pub const MAX_GENERATOR_CANDIDATES: u32 = 4096;

/// Ceiling on nonce redraws when signing hits r = 0 or s = 0
///
/// Each zero outcome has probability about 2^-N per draw.
pub const MAX_SIGNING_RETRIES: usize = 32;

/// Ceiling on rejection-sampling draws for a uniform value below a bound
///
/// Each draw lands below the bound with probability at least one half.
pub const MAX_SAMPLING_ATTEMPTS: usize = 1024;
