//! Provider dispatch vocabulary
//!
//! The dispatch layer routes each operation to one of a closed set of
//! interchangeable implementations. These enums are that closed set: a
//! registry maps `(ProviderKind, OperationKind, KeyType)` to an engine,
//! and swapping the active provider never changes caller-side code.

use core::fmt;

/// The operations a provider can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Domain-parameter generation
    ParameterGeneration,
    /// Key-pair generation
    KeyGeneration,
    /// Signature generation over a prehashed digest
    Sign,
    /// Signature verification over a prehashed digest
    Verify,
}

impl OperationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParameterGeneration => "parameter-generation",
            Self::KeyGeneration => "key-generation",
            Self::Sign => "sign",
            Self::Verify => "verify",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key families the dispatch layer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Finite-field DSA keys
    Dsa,
}

impl KeyType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dsa => "dsa",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of provider implementations
///
/// `Hardware` is a reserved slot: nothing is registered under it unless an
/// integrator installs an offload engine at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Default software implementation
    Default,
    /// Validated/restricted-mode implementation
    Fips,
    /// Hardware-offload implementation
    Hardware,
}

impl ProviderKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Fips => "fips-validated",
            Self::Hardware => "hardware",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
