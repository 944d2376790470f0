use std::cell::Cell;
use std::collections::HashMap;
use anchor_lang::error::Error;
use crate::error::RedPacketError;
use crate::utils::{DomainKeyLookup, Groth16Proof, ProofVerifier, PublicSignals};

pub mod test_claim;
pub mod test_packet;
pub mod test_share;

pub const TEST_DOMAIN: &str = "tencent.com";
pub const TEST_KEY_COMMITMENT: &str =
    "181ab950d973ee53838532ecb1b8b11528f6ea7ab08e2868fb3218464052f953";
pub const TEST_IDENTITY_SALT: &str =
    "000000000000000000000000000000000039306e6f69746174535f6563617053";

pub fn hex32(hex: &str) -> [u8; 32] {
    assert_eq!(hex.len(), 64, "expected 32 hex encoded bytes");
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap();
    }
    out
}

/// Fails unless `result` is the program error `expected`
pub fn assert_error<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: RedPacketError) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

/// Verifier with a fixed answer that counts its invocations
pub struct MockVerifier {
    pub accept: bool,
    pub calls: Cell<u32>,
}

impl MockVerifier {
    pub fn accepting() -> Self {
        Self { accept: true, calls: Cell::new(0) }
    }

    pub fn rejecting() -> Self {
        Self { accept: false, calls: Cell::new(0) }
    }
}

impl ProofVerifier for MockVerifier {
    fn verify(&self, _proof: &Groth16Proof, _signals: &[[u8; 32]; 3]) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.accept
    }
}

/// In-memory domain registry
#[derive(Default)]
pub struct MockRegistry(pub HashMap<String, [u8; 32]>);

impl MockRegistry {
    pub fn with(domain: &str, commitment: [u8; 32]) -> Self {
        let mut keys = HashMap::new();
        keys.insert(domain.to_string(), commitment);
        Self(keys)
    }
}

impl DomainKeyLookup for MockRegistry {
    fn key_commitment(&self, domain: &str) -> Option<[u8; 32]> {
        self.0.get(domain).copied()
    }
}

pub fn dummy_proof() -> Groth16Proof {
    Groth16Proof {
        a: [0u8; 64],
        b: [0u8; 128],
        c: [0u8; 64],
    }
}

/// Signals of the test identity, bound to `destination`
pub fn signals_for(destination: &anchor_lang::prelude::Pubkey) -> PublicSignals {
    PublicSignals {
        domain_key_commitment: hex32(TEST_KEY_COMMITMENT),
        identity_salt: hex32(TEST_IDENTITY_SALT),
        destination_commitment: crate::utils::destination_commitment(destination),
    }
}
