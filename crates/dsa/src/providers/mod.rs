//! Provider dispatch for the DSA engine
//!
//! A registry maps `(provider, operation, key type)` to a concrete engine.
//! Registration happens during initialization; after that the registry is
//! read-concurrently by every operation, so it uses a reader-writer lock
//! and resolution clones an `Arc` out without holding the lock across the
//! operation itself. The registry holds routing metadata only - never key
//! material.
//!
//! The provider set is closed (`ProviderKind`): the default software
//! engine and the restricted-mode engine ship built in, while the
//! hardware slot stays empty until an integrator registers an offload
//! engine at startup. Resolving an empty slot is `NotSupported`.

mod default;
mod fips;

pub use default::DefaultEngine;
pub use fips::FipsEngine;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use ffsig_api::{Error, KeyType, OperationKind, ProviderKind, Result};
use once_cell::sync::Lazy;
use rand::{CryptoRng, RngCore};
use rand_core::CryptoRngCore;

use crate::domain::{DomainParameters, GenerationConfig, GenerationEvidence, GenerationObserver};
use crate::keypair::{DsaKeyPair, DsaPublicKey};
use crate::signature::DsaSignature;

/// One interchangeable DSA implementation
///
/// Engines own whatever internal state they need; the dispatch layer only
/// routes to them. Randomness always comes in from the caller so engines
/// cannot silently substitute their own source.
pub trait DsaEngine: Send + Sync + core::fmt::Debug {
    /// Which provider slot this engine implements
    fn kind(&self) -> ProviderKind;

    /// Generate domain parameters
    fn generate_parameters(
        &self,
        config: &GenerationConfig,
        rng: &mut dyn CryptoRngCore,
        observer: Option<&dyn GenerationObserver>,
    ) -> Result<(DomainParameters, GenerationEvidence)>;

    /// Generate a key pair under existing parameters
    fn generate_keypair(
        &self,
        params: &Arc<DomainParameters>,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<DsaKeyPair>;

    /// Sign a prehashed digest
    fn sign_digest(
        &self,
        keypair: &DsaKeyPair,
        digest: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<DsaSignature>;

    /// Verify a signature over a prehashed digest
    fn verify_digest(
        &self,
        public_key: &DsaPublicKey,
        digest: &[u8],
        signature: &DsaSignature,
    ) -> Result<()>;
}

type RegistryKey = (ProviderKind, OperationKind, KeyType);

const ALL_OPERATIONS: [OperationKind; 4] = [
    OperationKind::ParameterGeneration,
    OperationKind::KeyGeneration,
    OperationKind::Sign,
    OperationKind::Verify,
];

/// Registry of engines, keyed by provider, operation, and key type
pub struct EngineRegistry {
    entries: RwLock<HashMap<RegistryKey, Arc<dyn DsaEngine>>>,
    active: RwLock<ProviderKind>,
}

impl EngineRegistry {
    /// An empty registry with the default provider selected
    pub fn empty() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            active: RwLock::new(ProviderKind::Default),
        }
    }

    /// A registry pre-populated with the built-in engines
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        // infallible on a registry nothing else can be touching yet
        let _ = registry.install(Arc::new(DefaultEngine));
        let _ = registry.install(Arc::new(FipsEngine));
        registry
    }

    /// The process-wide registry, built once on first use
    pub fn global() -> &'static EngineRegistry {
        static REGISTRY: Lazy<EngineRegistry> = Lazy::new(EngineRegistry::with_builtins);
        &REGISTRY
    }

    /// Register one engine for every operation on DSA keys
    pub fn install(&self, engine: Arc<dyn DsaEngine>) -> Result<()> {
        let kind = engine.kind();
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        for operation in ALL_OPERATIONS {
            entries.insert((kind, operation, KeyType::Dsa), Arc::clone(&engine));
        }
        Ok(())
    }

    /// Register an engine for a single operation/key-type slot
    ///
    /// Offload engines typically cover only `Sign` and `Verify`; the
    /// remaining operations of that provider stay `NotSupported` unless
    /// registered too.
    pub fn register(
        &self,
        operation: OperationKind,
        key_type: KeyType,
        engine: Arc<dyn DsaEngine>,
    ) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert((engine.kind(), operation, key_type), engine);
        Ok(())
    }

    /// Select the provider consulted by [`EngineRegistry::resolve`]
    pub fn set_active(&self, kind: ProviderKind) -> Result<()> {
        let mut active = self.active.write().map_err(|_| poisoned())?;
        *active = kind;
        Ok(())
    }

    /// The currently selected provider
    pub fn active(&self) -> ProviderKind {
        self.active.read().map(|kind| *kind).unwrap_or(ProviderKind::Default)
    }

    /// Resolve an operation against the active provider
    pub fn resolve(
        &self,
        operation: OperationKind,
        key_type: KeyType,
    ) -> Result<Arc<dyn DsaEngine>> {
        let kind = self.active();
        self.resolve_with(kind, operation, key_type)
    }

    /// Resolve an operation against an explicit provider
    pub fn resolve_with(
        &self,
        kind: ProviderKind,
        operation: OperationKind,
        key_type: KeyType,
    ) -> Result<Arc<dyn DsaEngine>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        entries
            .get(&(kind, operation, key_type))
            .cloned()
            .ok_or(Error::NotSupported {
                operation: operation.as_str(),
                key_type: key_type.as_str(),
            })
    }
}

fn poisoned() -> Error {
    Error::Internal {
        context: "provider registry",
        message: "registry lock poisoned".into(),
    }
}

/// Generate domain parameters through the active provider
pub fn generate_parameters<R: CryptoRng + RngCore>(
    config: &GenerationConfig,
    rng: &mut R,
    observer: Option<&dyn GenerationObserver>,
) -> Result<(DomainParameters, GenerationEvidence)> {
    EngineRegistry::global()
        .resolve(OperationKind::ParameterGeneration, KeyType::Dsa)?
        .generate_parameters(config, rng, observer)
}

/// Generate a key pair through the active provider
pub fn generate_keypair<R: CryptoRng + RngCore>(
    params: &Arc<DomainParameters>,
    rng: &mut R,
) -> Result<DsaKeyPair> {
    EngineRegistry::global()
        .resolve(OperationKind::KeyGeneration, KeyType::Dsa)?
        .generate_keypair(params, rng)
}

/// Sign a prehashed digest through the active provider
pub fn sign_digest<R: CryptoRng + RngCore>(
    keypair: &DsaKeyPair,
    digest: &[u8],
    rng: &mut R,
) -> Result<DsaSignature> {
    EngineRegistry::global()
        .resolve(OperationKind::Sign, KeyType::Dsa)?
        .sign_digest(keypair, digest, rng)
}

/// Verify a signature through the active provider
pub fn verify_digest(
    public_key: &DsaPublicKey,
    digest: &[u8],
    signature: &DsaSignature,
) -> Result<()> {
    EngineRegistry::global()
        .resolve(OperationKind::Verify, KeyType::Dsa)?
        .verify_digest(public_key, digest, signature)
}
