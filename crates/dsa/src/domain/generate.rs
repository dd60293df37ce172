//! Domain-parameter generation
//!
//! Follows the FIPS 186-4 A.1.1.2 construction: the subgroup order q and
//! the modulus p are both derived from a seed by hashing, so that a
//! verifier holding the seed can replay the search and confirm the
//! resulting triple. All searches are bounded; exhausting a bound is a
//! `GenerationFailed` error and the caller may retry with a fresh seed.

use ffsig_api::error::ResultExt;
use ffsig_api::{Error, Result};
use log::debug;
use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha224, Sha256};

use ffsig_params::{
    is_approved_size, MAX_GENERATOR_CANDIDATES, MAX_Q_CANDIDATES, MILLER_RABIN_ROUNDS,
    P_CANDIDATE_MULTIPLIER,
};

use super::observer::{GenerationEvent, GenerationObserver};
use super::DomainParameters;

// Domain-separation tags keeping q-derivation and p-derivation hash
// inputs disjoint under a shared seed.
const TAG_Q: u8 = 0x00;
const TAG_P: u8 = 0x01;

/// Digest used to derive candidates from the seed
///
/// The digest output must be at least as wide as the subgroup order N so
/// that a q candidate is a single hash block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha224,
    Sha256,
}

impl DigestAlgorithm {
    /// Output width in bits
    pub fn output_bits(self) -> usize {
        match self {
            Self::Sha224 => 224,
            Self::Sha256 => 256,
        }
    }

    fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha224 => Sha224::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
        }
    }
}

/// Configuration for one parameter-generation call
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    l: usize,
    n: usize,
    seed: Option<Vec<u8>>,
    digest: DigestAlgorithm,
}

impl GenerationConfig {
    /// Target bit lengths: L for the modulus, N for the subgroup order
    pub fn new(l: usize, n: usize) -> Self {
        Self {
            l,
            n,
            seed: None,
            digest: DigestAlgorithm::Sha256,
        }
    }

    /// Use a caller-provided seed instead of drawing a fresh one
    ///
    /// The same seed, digest, and sizes reproduce the same (p, q, g)
    /// bit for bit.
    pub fn with_seed(mut self, seed: Vec<u8>) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Select the candidate-derivation digest
    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    pub fn l(&self) -> usize {
        self.l
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn digest_algorithm(&self) -> DigestAlgorithm {
        self.digest
    }
}

/// The seed and counters a generation run used
///
/// Enough for an independent verifier to replay the derivation with
/// [`validate_generation`] and confirm it lands on the same triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationEvidence {
    /// Seed the candidates were derived from
    pub seed: Vec<u8>,
    /// Digest used for derivation
    pub digest: DigestAlgorithm,
    /// Counter at which the modulus candidate was accepted
    pub counter: u32,
    /// Base h whose power became the generator
    pub h: u32,
}

/// Per-call search state: counters plus the optional observer
struct GenerationContext<'a> {
    observer: Option<&'a dyn GenerationObserver>,
    q_counter: u32,
    p_counter: u32,
}

impl<'a> GenerationContext<'a> {
    fn new(observer: Option<&'a dyn GenerationObserver>) -> Self {
        Self {
            observer,
            q_counter: 0,
            p_counter: 0,
        }
    }

    fn emit(&self, event: GenerationEvent) {
        if let Some(observer) = self.observer {
            observer.on_event(event);
        }
    }
}

/// Generate a fresh set of domain parameters
///
/// When `config` carries no seed an N-bit seed is drawn from `rng`;
/// failure to obtain randomness is `EntropyUnavailable` and is never
/// worked around. The returned evidence permits independent replay.
pub fn generate(
    config: &GenerationConfig,
    rng: &mut dyn CryptoRngCore,
    observer: Option<&dyn GenerationObserver>,
) -> Result<(DomainParameters, GenerationEvidence)> {
    let (l, n) = (config.l, config.n);
    check_sizes(config)?;

    let seed = match &config.seed {
        Some(seed) => {
            if seed.len() * 8 < n {
                return Err(Error::InvalidLength {
                    context: "DSA generation seed",
                    expected: n / 8,
                    actual: seed.len(),
                });
            }
            seed.clone()
        }
        None => {
            let mut seed = vec![0u8; n / 8];
            rng.try_fill_bytes(&mut seed).wrap_err(|| Error::EntropyUnavailable {
                context: "DSA generation seed",
            })?;
            seed
        }
    };

    derive(&seed, l, n, config.digest, observer)
}

/// Replay a previous generation from its evidence and confirm it yields
/// the same parameters
///
/// Returns `Ok(false)` when the replay converges on a different triple or
/// different counters; errors are reserved for configuration problems.
pub fn validate_generation(
    params: &DomainParameters,
    evidence: &GenerationEvidence,
) -> Result<bool> {
    let (l, n) = params.size();
    let (replayed, replayed_evidence) = derive(&evidence.seed, l, n, evidence.digest, None)?;
    Ok(replayed == *params
        && replayed_evidence.counter == evidence.counter
        && replayed_evidence.h == evidence.h)
}

fn check_sizes(config: &GenerationConfig) -> Result<()> {
    let (l, n) = (config.l, config.n);
    if !is_approved_size(l, n) {
        return Err(Error::UnsupportedParameters {
            context: "DSA parameter generation",
            l,
            n,
        });
    }
    if config.digest.output_bits() < n {
        return Err(Error::UnsupportedParameters {
            context: "derivation digest narrower than subgroup order",
            l,
            n,
        });
    }
    Ok(())
}

/// Deterministic part of generation: everything after the seed is fixed
fn derive(
    seed: &[u8],
    l: usize,
    n: usize,
    digest: DigestAlgorithm,
    observer: Option<&dyn GenerationObserver>,
) -> Result<(DomainParameters, GenerationEvidence)> {
    let mut ctx = GenerationContext::new(observer);

    let q = search_q(seed, digest, n, &mut ctx)?;
    let p = search_p(seed, digest, l, &q, &mut ctx)?;
    let (g, h) = search_generator(&p, &q, &mut ctx)?;

    debug!(
        "DSA domain parameters L={} N={} derived (q counter {}, p counter {}, h {})",
        l, n, ctx.q_counter, ctx.p_counter, h
    );

    let params = DomainParameters::from_components(p, q, g)?;
    let evidence = GenerationEvidence {
        seed: seed.to_vec(),
        digest,
        counter: ctx.p_counter,
        h,
    };
    Ok((params, evidence))
}

/// Derive the subgroup order q
///
/// Each candidate is a hash of the seed and a counter, masked to exactly
/// N bits with the top and bottom bits forced so the candidate has the
/// right width and is odd.
fn search_q(
    seed: &[u8],
    digest: DigestAlgorithm,
    n: usize,
    ctx: &mut GenerationContext<'_>,
) -> Result<BigUint> {
    let top_bit = BigUint::one() << (n - 1);

    for counter in 0..MAX_Q_CANDIDATES {
        let block = hash_block(digest, seed, TAG_Q, counter);
        let mut q = truncate_bits(BigUint::from_bytes_be(&block), n);
        q = &q | &top_bit;
        q = &q | &BigUint::one();

        let prime = probably_prime(&q, MILLER_RABIN_ROUNDS);
        ctx.emit(GenerationEvent::QCandidateTested { counter, prime });
        if prime {
            ctx.q_counter = counter;
            debug!("subgroup order found after {} candidate(s)", counter + 1);
            return Ok(q);
        }
    }

    Err(Error::GenerationFailed {
        context: "DSA subgroup-order search",
        attempts: MAX_Q_CANDIDATES as usize,
    })
}

/// Search for the modulus p with q | p-1
///
/// Candidates are assembled from chained hash blocks, forced to exactly
/// L bits, then snapped onto the arithmetic progression 1 mod 2q by
/// subtracting `(X mod 2q) - 1`.
fn search_p(
    seed: &[u8],
    digest: DigestAlgorithm,
    l: usize,
    q: &BigUint,
    ctx: &mut GenerationContext<'_>,
) -> Result<BigUint> {
    let outlen = digest.output_bits();
    let blocks = (l + outlen - 1) / outlen;
    let ceiling = P_CANDIDATE_MULTIPLIER * l;

    let one = BigUint::one();
    let top_bit = &one << (l - 1);
    let two_q = q << 1usize;

    for counter in 0..ceiling {
        let mut w = BigUint::zero();
        for j in 0..blocks {
            let block_index = (counter * blocks + j) as u32;
            let block = hash_block(digest, seed, TAG_P, block_index);
            w = &w | &(BigUint::from_bytes_be(&block) << (j * outlen));
        }

        let x = &truncate_bits(w, l - 1) | &top_bit;
        let c = &x % &two_q;
        let p = (&x - &c) + &one;

        if p.bits() < l {
            ctx.emit(GenerationEvent::PCandidateTested {
                counter: counter as u32,
                prime: false,
            });
            continue;
        }

        let prime = probably_prime(&p, MILLER_RABIN_ROUNDS);
        ctx.emit(GenerationEvent::PCandidateTested {
            counter: counter as u32,
            prime,
        });
        if prime {
            ctx.p_counter = counter as u32;
            debug!("modulus found after {} candidate(s)", counter + 1);
            return Ok(p);
        }
    }

    Err(Error::GenerationFailed {
        context: "DSA modulus search",
        attempts: ceiling,
    })
}

/// Find a generator of the order-q subgroup
///
/// e = (p-1)/q; the first h = 2, 3, ... with h^e mod p != 1 wins. For a
/// prime modulus this terminates within a handful of iterations.
fn search_generator(
    p: &BigUint,
    q: &BigUint,
    ctx: &mut GenerationContext<'_>,
) -> Result<(BigUint, u32)> {
    let e = (p - &BigUint::one()) / q;

    for h in 2..MAX_GENERATOR_CANDIDATES {
        let g = BigUint::from(h).modpow(&e, p);
        let accepted = !g.is_one();
        ctx.emit(GenerationEvent::GeneratorTested { h, accepted });
        if accepted {
            return Ok((g, h));
        }
    }

    Err(Error::GenerationFailed {
        context: "DSA generator search",
        attempts: MAX_GENERATOR_CANDIDATES as usize,
    })
}

fn hash_block(digest: DigestAlgorithm, seed: &[u8], tag: u8, counter: u32) -> Vec<u8> {
    let mut input = Vec::with_capacity(seed.len() + 5);
    input.extend_from_slice(seed);
    input.push(tag);
    input.extend_from_slice(&counter.to_be_bytes());
    digest.digest(&input)
}

fn truncate_bits(value: BigUint, bits: usize) -> BigUint {
    let mask = (BigUint::one() << bits) - BigUint::one();
    &value & &mask
}
