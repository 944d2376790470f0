use anchor_lang::prelude::*;
use crate::constants::NUM_PUBLIC_SIGNALS;
use crate::error::*;

/// Groth16 verifying key over BN254, points in uncompressed big-endian form
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKeyData {
    pub alpha_g1: [u8; 64],
    pub beta_g2: [u8; 128],
    pub gamma_g2: [u8; 128],
    pub delta_g2: [u8; 128],
    /// Constant term followed by one point per public signal
    pub ic: [[u8; 64]; 4],
}

impl VerifyingKeyData {
    /// Reject keys with an identity component; they make the pairing check trivial
    pub fn validate(&self) -> Result<()> {
        let zero_g1 = |p: &[u8; 64]| p.iter().all(|b| *b == 0);
        let zero_g2 = |p: &[u8; 128]| p.iter().all(|b| *b == 0);
        require!(
            !zero_g1(&self.alpha_g1)
                && !zero_g2(&self.beta_g2)
                && !zero_g2(&self.gamma_g2)
                && !zero_g2(&self.delta_g2)
                && !self.ic.iter().any(zero_g1),
            RedPacketError::InvalidVerifyingKey
        );
        Ok(())
    }
}

/**
 * Verifying key account of the claim circuit
 *
 * Derivation: ["verifier", authority]
 */
#[account]
#[derive(Debug)]
pub struct VerifierConfig {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Account allowed to replace the verifying key
    pub authority: Pubkey,

    pub vk: VerifyingKeyData,
}

impl VerifierConfig {
    pub const LEN: usize =
        8 + 1 + 32 + 64 + 128 * 3 + 64 * (NUM_PUBLIC_SIGNALS + 1);
}
