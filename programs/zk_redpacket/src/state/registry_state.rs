use anchor_lang::prelude::*;
use crate::constants::*;

/**
 * Domain key registry account
 *
 * Maps email domains to the commitment of their currently registered DKIM
 * signing key. Only the authority can register, rotate or revoke keys.
 *
 * Derivation: ["registry", authority]
 */
#[account]
#[derive(Default, Debug)]
pub struct KeyRegistry {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Account allowed to change key commitments
    pub authority: Pubkey,

    /// Number of domains ever registered
    pub domain_count: u32,
}

impl KeyRegistry {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<KeyRegistry>();
}

/**
 * Key commitment of one domain
 *
 * Derivation: ["domain_key", registry, keccak(domain)]
 *
 * A zero commitment means the key was revoked and nothing verifies against it.
 */
#[account]
#[derive(Default, Debug)]
pub struct DomainKey {
    pub bump: u8,
    pub registry: Pubkey,
    pub commitment: [u8; 32],
    pub updated_at: i64,
    pub domain: String,
}

impl DomainKey {
    pub const LEN: usize = 8 + 1 + 32 + 32 + 8 + 4 + MAX_DOMAIN_LEN;
}
