//! Progress observation during parameter generation
//!
//! Generation can examine thousands of candidates before it converges.
//! An observer receives one event per candidate examined; it is purely
//! observational and has no way to influence the search.

/// A single step of the generation search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationEvent {
    /// A subgroup-order candidate was primality-tested
    QCandidateTested {
        /// Derivation counter of the candidate
        counter: u32,
        /// Whether the candidate passed
        prime: bool,
    },
    /// A modulus candidate was primality-tested
    PCandidateTested {
        /// Derivation counter of the candidate
        counter: u32,
        /// Whether the candidate passed
        prime: bool,
    },
    /// A generator candidate h was raised to (p-1)/q and checked
    GeneratorTested {
        /// The candidate base h
        h: u32,
        /// Whether h^((p-1)/q) mod p was a usable generator
        accepted: bool,
    },
}

/// Sink for [`GenerationEvent`]s
pub trait GenerationObserver {
    /// Called once per candidate examined
    fn on_event(&self, event: GenerationEvent);
}
