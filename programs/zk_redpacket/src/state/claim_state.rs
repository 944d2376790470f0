use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Identity claim record
 *
 * Marks an identity salt as spent within its claim scope.
 *
 * Derivation: ["claim", scope_key, identity_salt]
 *
 * Lifecycle:
 * 1. Allocated on the first claim attempt (using init_if_needed)
 * 2. Filled in once the claim is authorized
 * 3. Never modified or closed afterwards
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Set once the identity has claimed; never cleared
    pub claimed: bool,

    /// Packet the identity claimed from
    pub packet: Pubkey,

    /// Destination that received the share
    pub destination: Pubkey,

    /// Amount transferred by the claim
    pub amount: u64,

    /// Unix timestamp of the claim
    pub claimed_at: i64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    pub fn ensure_unused(&self) -> Result<()> {
        require!(!self.claimed, RedPacketError::IdentityAlreadyUsed);
        Ok(())
    }

    pub fn record(
        &mut self,
        bump: u8,
        packet: Pubkey,
        destination: Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        self.ensure_unused()?;
        self.bump = bump;
        self.claimed = true;
        self.packet = packet;
        self.destination = destination;
        self.amount = amount;
        self.claimed_at = now;
        Ok(())
    }

    /// Amount this identity received from `packet`
    pub fn claimed_amount_for(&self, packet: &Pubkey) -> u64 {
        if self.claimed && self.packet == *packet {
            self.amount
        } else {
            0
        }
    }
}
