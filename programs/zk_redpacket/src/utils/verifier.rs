use groth16_solana::groth16::{Groth16Verifier, Groth16Verifyingkey};
use crate::constants::NUM_PUBLIC_SIGNALS;
use crate::state::VerifierConfig;
use crate::utils::Groth16Proof;

/// Zero-knowledge proof verification capability consumed by claims and withdrawals
pub trait ProofVerifier {
    /// True iff `proof` is valid for the ordered public `signals`
    fn verify(&self, proof: &Groth16Proof, signals: &[[u8; 32]; NUM_PUBLIC_SIGNALS]) -> bool;
}

/// Groth16 over BN254 through the alt_bn128 syscalls, keyed by the stored verifying key
impl ProofVerifier for VerifierConfig {
    fn verify(&self, proof: &Groth16Proof, signals: &[[u8; 32]; NUM_PUBLIC_SIGNALS]) -> bool {
        let verifying_key = Groth16Verifyingkey {
            nr_pubinputs: NUM_PUBLIC_SIGNALS,
            vk_alpha_g1: self.vk.alpha_g1,
            vk_beta_g2: self.vk.beta_g2,
            vk_gamme_g2: self.vk.gamma_g2,
            vk_delta_g2: self.vk.delta_g2,
            vk_ic: &self.vk.ic,
        };

        // Malformed points and out-of-field signals surface as errors, not panics
        match Groth16Verifier::new(&proof.a, &proof.b, &proof.c, signals, &verifying_key) {
            Ok(mut verifier) => verifier.verify().is_ok(),
            Err(_) => false,
        }
    }
}
