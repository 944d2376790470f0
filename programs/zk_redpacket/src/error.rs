use anchor_lang::prelude::*;

#[error_code]
pub enum RedPacketError {
    // Packet lifecycle errors
    #[msg("Packet not found")]
    NotFound,
    #[msg("Packet has expired")]
    Expired,
    #[msg("Packet has not expired yet")]
    NotExpired,
    #[msg("No shares left in this packet")]
    OutOfStock,
    #[msg("Nothing left to withdraw")]
    NothingLeft,
    #[msg("Packet still holds claimable value")]
    PacketNotSettled,

    // Claim authorization errors
    #[msg("Destination commitment does not match the resolved destination")]
    InvalidRecipient,
    #[msg("Domain key commitment does not match the registry")]
    InvalidDomain,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Identity has already been used to claim")]
    IdentityAlreadyUsed,
    #[msg("Identity salt does not belong to this mailbox")]
    IdentityMismatch,

    // Mailbox errors
    #[msg("Mailbox already deployed for this salt")]
    AlreadyDeployed,
    #[msg("Mailbox has not been deployed")]
    MailboxNotDeployed,

    // Parameter validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid share count")]
    InvalidShareCount,
    #[msg("Invalid packet duration")]
    InvalidDuration,
    #[msg("Display name is too long")]
    NameTooLong,
    #[msg("Message is too long")]
    MessageTooLong,
    #[msg("Invalid domain name")]
    InvalidDomainName,
    #[msg("Key commitment must not be zero")]
    InvalidCommitment,
    #[msg("Invalid verifying key")]
    InvalidVerifyingKey,

    // Access control errors
    #[msg("Only the packet creator can perform this action")]
    OnlyCreator,
    #[msg("Only the registry authority can perform this action")]
    OnlyRegistryAuthority,
    #[msg("Only the verifier authority can perform this action")]
    OnlyVerifierAuthority,
    #[msg("Account does not match the configured ledger or factory")]
    ConfigMismatch,

    // Asset account errors
    #[msg("Token accounts are required for a fungible asset")]
    MissingTokenAccounts,
    #[msg("Token mint does not match the packet's asset")]
    TokenMintMismatch,
    #[msg("Token account is not controlled by the expected authority")]
    InvalidVault,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
