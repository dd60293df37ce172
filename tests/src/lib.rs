//! Shared helpers for the ffsig integration tests

use std::sync::atomic::{AtomicUsize, Ordering};

use ffsig_dsa::{GenerationEvent, GenerationObserver};
use rand::{CryptoRng, Error as RngError, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible test runs
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// An RNG that emits one constant byte forever
///
/// Exists to force nonce reuse in the catastrophic-failure regression
/// test. Deliberately not cryptographic; the `CryptoRng` marker is a lie
/// this test suite tells on purpose.
pub struct ConstantRng(pub u8);

impl RngCore for ConstantRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_le_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_le_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ConstantRng {}

/// An RNG whose fallible interface always fails
///
/// Drives the entropy-exhaustion paths: every draw must surface
/// `EntropyUnavailable`, never fall back to weaker randomness.
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("FailingRng used through the infallible interface");
    }

    fn next_u64(&mut self) -> u64 {
        panic!("FailingRng used through the infallible interface");
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("FailingRng used through the infallible interface");
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), RngError> {
        Err(RngError::new("test entropy source is disabled"))
    }
}

impl CryptoRng for FailingRng {}

/// Observer that counts the events of a generation run
#[derive(Default)]
pub struct CountingObserver {
    pub q_tested: AtomicUsize,
    pub q_accepted: AtomicUsize,
    pub p_tested: AtomicUsize,
    pub p_accepted: AtomicUsize,
    pub generator_tested: AtomicUsize,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GenerationObserver for CountingObserver {
    fn on_event(&self, event: GenerationEvent) {
        match event {
            GenerationEvent::QCandidateTested { prime, .. } => {
                self.q_tested.fetch_add(1, Ordering::Relaxed);
                if prime {
                    self.q_accepted.fetch_add(1, Ordering::Relaxed);
                }
            }
            GenerationEvent::PCandidateTested { prime, .. } => {
                self.p_tested.fetch_add(1, Ordering::Relaxed);
                if prime {
                    self.p_accepted.fetch_add(1, Ordering::Relaxed);
                }
            }
            GenerationEvent::GeneratorTested { .. } => {
                self.generator_tested.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
