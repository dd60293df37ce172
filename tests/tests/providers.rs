//! Provider dispatch behavior

use std::sync::Arc;
use std::thread;

use ffsig_api::{Error, KeyType, OperationKind, ProviderKind};
use ffsig_dsa::domain::{
    generate, DomainParameters, GenerationConfig, GenerationEvidence, GenerationObserver,
};
use ffsig_dsa::providers::{self, DefaultEngine, DsaEngine, EngineRegistry};
use ffsig_dsa::{DsaKeyPair, DsaPublicKey, DsaSignature};
use ffsig_tests::test_rng;
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha256};

fn shared_params() -> Arc<DomainParameters> {
    let seed = hex::decode("77aa0f2d4c94e1b8530c6de2a17f85bd9e64c301").expect("valid hex");
    let config = GenerationConfig::new(1024, 160).with_seed(seed);
    let mut rng = test_rng(70);
    let (params, _) = generate(&config, &mut rng, None).expect("generation succeeds");
    Arc::new(params)
}

#[test]
fn global_registry_routes_the_whole_lifecycle() {
    let mut rng = test_rng(71);
    let config = GenerationConfig::new(1024, 160)
        .with_seed(hex::decode("99d2c40b8e1fa6537cd0124be98a7f6c53b10e44").unwrap());

    let (params, _evidence) = providers::generate_parameters(&config, &mut rng, None).unwrap();
    let params = Arc::new(params);
    let keypair = providers::generate_keypair(&params, &mut rng).unwrap();

    let digest = Sha256::digest(b"routed through the registry");
    let signature = providers::sign_digest(&keypair, &digest, &mut rng).unwrap();
    providers::verify_digest(keypair.public(), &digest, &signature).unwrap();
}

#[test]
fn unregistered_hardware_slot_reports_not_supported() {
    let err = EngineRegistry::global()
        .resolve_with(ProviderKind::Hardware, OperationKind::Sign, KeyType::Dsa)
        .unwrap_err();
    match err {
        Error::NotSupported { operation, key_type } => {
            assert_eq!(operation, "sign");
            assert_eq!(key_type, "dsa");
        }
        other => panic!("expected NotSupported, got {:?}", other),
    }
}

#[test]
fn swapping_the_active_provider_keeps_call_sites_unchanged() {
    // a signature produced by one provider must verify under another:
    // the contract is identical regardless of which implementation runs
    let registry = EngineRegistry::with_builtins();
    let params = shared_params();
    let mut rng = test_rng(72);

    let keypair = registry
        .resolve(OperationKind::KeyGeneration, KeyType::Dsa)
        .unwrap()
        .generate_keypair(&params, &mut rng)
        .unwrap();
    let digest = Sha256::digest(b"provider swap");
    let signature = registry
        .resolve(OperationKind::Sign, KeyType::Dsa)
        .unwrap()
        .sign_digest(&keypair, &digest, &mut rng)
        .unwrap();

    registry.set_active(ProviderKind::Fips).unwrap();
    let verifier = registry.resolve(OperationKind::Verify, KeyType::Dsa).unwrap();
    assert_eq!(verifier.kind(), ProviderKind::Fips);
    verifier
        .verify_digest(keypair.public(), &digest, &signature)
        .unwrap();
}

#[test]
fn restricted_mode_refuses_legacy_generation_sizes() {
    let registry = EngineRegistry::with_builtins();
    registry.set_active(ProviderKind::Fips).unwrap();

    let mut rng = test_rng(73);
    let engine = registry
        .resolve(OperationKind::ParameterGeneration, KeyType::Dsa)
        .unwrap();
    let err = engine
        .generate_parameters(&GenerationConfig::new(1024, 160), &mut rng, None)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedParameters { l: 1024, n: 160, .. }
    ));
}

/// Forwarding engine standing in for an offload backend: integrators
/// register their own implementation under the hardware slot, usually
/// for the data-path operations only.
#[derive(Debug)]
struct OffloadStub(DefaultEngine);

impl DsaEngine for OffloadStub {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Hardware
    }

    fn generate_parameters(
        &self,
        config: &GenerationConfig,
        rng: &mut dyn CryptoRngCore,
        observer: Option<&dyn GenerationObserver>,
    ) -> ffsig_api::Result<(DomainParameters, GenerationEvidence)> {
        self.0.generate_parameters(config, rng, observer)
    }

    fn generate_keypair(
        &self,
        params: &Arc<DomainParameters>,
        rng: &mut dyn CryptoRngCore,
    ) -> ffsig_api::Result<DsaKeyPair> {
        self.0.generate_keypair(params, rng)
    }

    fn sign_digest(
        &self,
        keypair: &DsaKeyPair,
        digest: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> ffsig_api::Result<DsaSignature> {
        self.0.sign_digest(keypair, digest, rng)
    }

    fn verify_digest(
        &self,
        public_key: &DsaPublicKey,
        digest: &[u8],
        signature: &DsaSignature,
    ) -> ffsig_api::Result<()> {
        self.0.verify_digest(public_key, digest, signature)
    }
}

#[test]
fn integrators_can_register_an_offload_engine() {
    let registry = EngineRegistry::with_builtins();
    let offload: Arc<dyn DsaEngine> = Arc::new(OffloadStub(DefaultEngine));
    registry
        .register(OperationKind::Sign, KeyType::Dsa, Arc::clone(&offload))
        .unwrap();
    registry
        .register(OperationKind::Verify, KeyType::Dsa, offload)
        .unwrap();
    registry.set_active(ProviderKind::Hardware).unwrap();

    let params = shared_params();
    let mut rng = test_rng(74);
    // key generation was not registered for the hardware slot
    assert!(matches!(
        registry.resolve(OperationKind::KeyGeneration, KeyType::Dsa),
        Err(Error::NotSupported { .. })
    ));

    // but the data path is served by the offload engine
    let keypair = registry
        .resolve_with(ProviderKind::Default, OperationKind::KeyGeneration, KeyType::Dsa)
        .unwrap()
        .generate_keypair(&params, &mut rng)
        .unwrap();
    let digest = Sha256::digest(b"offloaded");
    let signer = registry.resolve(OperationKind::Sign, KeyType::Dsa).unwrap();
    assert_eq!(signer.kind(), ProviderKind::Hardware);
    let signature = signer.sign_digest(&keypair, &digest, &mut rng).unwrap();
    registry
        .resolve(OperationKind::Verify, KeyType::Dsa)
        .unwrap()
        .verify_digest(keypair.public(), &digest, &signature)
        .unwrap();
}

#[test]
fn concurrent_signing_draws_independent_nonces() {
    let params = shared_params();
    let mut rng = test_rng(75);
    let keypair = Arc::new(
        providers::generate_keypair(&params, &mut rng).expect("key generation succeeds"),
    );
    let digest = Sha256::digest(b"concurrent signing");

    let mut handles = Vec::new();
    for thread_index in 0..8u64 {
        let keypair = Arc::clone(&keypair);
        handles.push(thread::spawn(move || {
            let mut rng = test_rng(1000 + thread_index);
            let mut r_values = Vec::new();
            for _ in 0..25 {
                let signature = providers::sign_digest(&keypair, &digest, &mut rng).unwrap();
                providers::verify_digest(keypair.public(), &digest, &signature).unwrap();
                r_values.push(signature.r_bytes());
            }
            r_values
        }));
    }

    let mut seen = std::collections::HashSet::new();
    for handle in handles {
        for r in handle.join().expect("signing thread panicked") {
            assert!(seen.insert(r), "nonce collision across threads");
        }
    }
}
