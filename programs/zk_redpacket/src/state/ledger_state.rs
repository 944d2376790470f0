use anchor_lang::prelude::*;
use crate::constants::*;

/// Scope within which an identity salt may claim only once
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClaimScope {
    /// One claim per identity across every packet of the ledger
    #[default]
    Global,
    /// One claim per identity per packet
    PerPacket,
}

impl ClaimScope {
    /// Key mixed into the claim record seeds for this scope
    pub fn scope_key(self, ledger: Pubkey, packet: Pubkey) -> Pubkey {
        match self {
            ClaimScope::Global => ledger,
            ClaimScope::PerPacket => packet,
        }
    }
}

/**
 * Packet ledger configuration account
 *
 * Owns the packet id sequence and binds every packet it creates to one
 * proof verifier, one domain key registry, one mailbox factory and the email
 * domain whose signing key must back each claim.
 *
 * Derivation: ["ledger", authority]
 */
#[account]
#[derive(Default, Debug)]
pub struct PacketLedger {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Account that initialized the ledger
    pub authority: Pubkey,

    /// Verifying key account consulted on every claim
    pub verifier: Pubkey,

    /// Domain key registry consulted on every claim
    pub registry: Pubkey,

    /// Mailbox factory used to resolve deterministic destinations
    pub factory: Pubkey,

    /// Uniqueness scope of identity claims
    pub claim_scope: ClaimScope,

    /// Id of the most recently created packet
    /// - Packet ids start at 1 and never repeat
    pub packet_count: u64,

    /// Email domain whose key commitment claims are checked against
    pub domain: String,
}

impl PacketLedger {
    pub const LEN: usize = 8 + 1 + 32 * 4 + 1 + 8 + 4 + MAX_DOMAIN_LEN;

    /// Reserve the next packet id
    pub fn next_packet_id(&mut self) -> Result<u64> {
        let id = self
            .packet_count
            .checked_add(1)
            .ok_or(crate::error::RedPacketError::ArithmeticOverflow)?;
        self.packet_count = id;
        Ok(id)
    }
}
