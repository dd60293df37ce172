//! Error type definitions for signature operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for signature operations
///
/// The taxonomy deliberately separates `InvalidSignature` (a well-formed
/// signature that does not verify) from `MalformedSignature` (components
/// outside their permitted range). Both mean "do not trust this
/// signature", but callers auditing rejected inputs need the distinction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unsupported or inconsistent parameter sizes
    ///
    /// Detected before any computation begins; retrying cannot help.
    UnsupportedParameters {
        context: &'static str,
        /// Requested modulus bit length
        l: usize,
        /// Requested subgroup-order bit length
        n: usize,
    },

    /// A bounded candidate search exhausted its retry ceiling
    ///
    /// The caller may retry the whole operation, ideally with a fresh seed.
    GenerationFailed {
        context: &'static str,
        /// Number of candidates examined before giving up
        attempts: usize,
    },

    /// The secure randomness source failed
    ///
    /// Fatal for the call. Implementations must never substitute a weaker
    /// source of randomness for this condition.
    EntropyUnavailable {
        context: &'static str,
    },

    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A well-formed signature that does not verify
    InvalidSignature {
        context: &'static str,
    },

    /// Signature components out of range or otherwise unusable
    MalformedSignature {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// No implementation registered for the requested operation/key-type pair
    NotSupported {
        operation: &'static str,
        key_type: &'static str,
    },

    /// Arithmetic contract violation that valid inputs cannot produce
    Internal {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::UnsupportedParameters { l, n, .. } => Self::UnsupportedParameters { context, l, n },
            Self::GenerationFailed { attempts, .. } => Self::GenerationFailed { context, attempts },
            Self::EntropyUnavailable { .. } => Self::EntropyUnavailable { context },
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
            Self::MalformedSignature { .. } => Self::MalformedSignature {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::NotSupported { operation, key_type } => Self::NotSupported { operation, key_type },
            Self::Internal { .. } => Self::Internal {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::MalformedSignature { context, .. } => Self::MalformedSignature { context, message },
            Self::Internal { context, .. } => Self::Internal { context, message },
            other => other,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedParameters { context, l, n } => {
                write!(f, "{}: unsupported parameter sizes L={}, N={}", context, l, n)
            }
            Self::GenerationFailed { context, attempts } => {
                write!(f, "{}: generation failed after {} attempts", context, attempts)
            }
            Self::EntropyUnavailable { context } => {
                write!(f, "{}: secure randomness source unavailable", context)
            }
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidKey { context } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InvalidSignature { context } => {
                write!(f, "Invalid signature: {}", context)
            }
            #[cfg(feature = "std")]
            Self::MalformedSignature { context, message } => {
                write!(f, "Malformed signature: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::MalformedSignature { context } => {
                write!(f, "Malformed signature: {}", context)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            Self::NotSupported { operation, key_type } => {
                write!(f, "no provider for {} on {} keys", operation, key_type)
            }
            #[cfg(feature = "std")]
            Self::Internal { context, message } => {
                write!(f, "internal error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Internal { context } => {
                write!(f, "internal error: {}", context)
            }
        }
    }
}
