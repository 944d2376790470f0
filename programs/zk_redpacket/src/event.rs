use anchor_lang::prelude::*;

/// Event emitted when a domain key registry is initialized
#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub authority: Pubkey,
}

/// Event emitted when a domain's signing key commitment is registered or rotated
#[event]
pub struct KeyCommitmentSet {
    /// The registry the domain belongs to
    pub registry: Pubkey,
    /// Domain name, lower case
    pub domain: String,
    /// Commitment that replaced the previous one (zero when first registered)
    pub previous_commitment: [u8; 32],
    /// Newly registered commitment
    pub commitment: [u8; 32],
}

/// Event emitted when a domain's key commitment is revoked
#[event]
pub struct KeyCommitmentRevoked {
    pub registry: Pubkey,
    pub domain: String,
    pub revoked_commitment: [u8; 32],
}

/// Event emitted when a Groth16 verifying key is stored or replaced
#[event]
pub struct VerifierConfigured {
    pub verifier: Pubkey,
    pub authority: Pubkey,
}

/// Event emitted when a mailbox factory is initialized
#[event]
pub struct FactoryInitialized {
    pub factory: Pubkey,
    pub verifier: Pubkey,
    pub registry: Pubkey,
    pub domain: String,
}

/// Event emitted when a packet ledger is initialized
#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub authority: Pubkey,
    pub factory: Pubkey,
    /// True when identity uniqueness spans every packet of the ledger
    pub global_claim_scope: bool,
}

/// Event emitted when a new packet is created
#[event]
pub struct CreationSuccess {
    /// Sequential packet id within the ledger
    pub id: u64,
    /// The packet account public key
    pub packet: Pubkey,
    /// Creator who funded the packet
    pub creator: Pubkey,
    /// Token mint, or the default key for the native asset
    pub asset_address: Pubkey,
    pub total_amount: u64,
    pub share_count: u32,
    pub is_random: bool,
    pub expires_at: i64,
}

/// Event emitted when a share is claimed
#[event]
pub struct ClaimSuccess {
    pub id: u64,
    pub packet: Pubkey,
    /// Address that received the share (a wallet or an identity mailbox)
    pub destination: Pubkey,
    /// Amount transferred in this claim
    pub amount: u64,
    pub asset_address: Pubkey,
    /// Shares claimed so far, including this one
    pub claimed_shares: u32,
}

/// Event emitted when the remainder of an expired packet is returned
#[event]
pub struct RefundSuccess {
    pub id: u64,
    pub packet: Pubkey,
    pub asset_address: Pubkey,
    pub amount: u64,
}

/// Event emitted when a settled packet is closed
#[event]
pub struct PacketClosed {
    pub id: u64,
    pub packet: Pubkey,
    pub creator: Pubkey,
}

/// Event emitted when an identity mailbox is deployed
#[event]
pub struct MailboxDeployed {
    /// Mailbox address, equal to the precomputed derivation for the salt
    pub address: Pubkey,
    pub factory: Pubkey,
    pub salt: [u8; 32],
}

/// Event emitted when a mailbox releases an asset balance
#[event]
pub struct MailboxWithdrawn {
    pub mailbox: Pubkey,
    pub asset_address: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
