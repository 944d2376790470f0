use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seeds, limits and the fixed mailbox initialization template used throughout
 * the red packet program.
 */

/// ===== TIMING CONSTANTS =====

/// Longest lifetime a packet may be created with (30 days)
/// - Claims are accepted while now <= expires_at
/// - Refund opens once now > expires_at
#[constant]
pub const MAX_DURATION: i64 = 30 * 24 * 60 * 60;

/// ===== PACKET LIMITS =====

/// Upper bound on the number of shares in one packet
#[constant]
pub const MAX_SHARE_COUNT: u32 = 10_000;

/// Maximum length in bytes of a packet display name
#[constant]
pub const MAX_DISPLAY_NAME_LEN: usize = 32;

/// Maximum length in bytes of a packet message
#[constant]
pub const MAX_MESSAGE_LEN: usize = 128;

/// Maximum length in bytes of a registered domain name
#[constant]
pub const MAX_DOMAIN_LEN: usize = 64;

/// ===== PROOF CONSTANTS =====

/// Number of public signals bound by the claim circuit:
/// [domain_key_commitment, identity_salt, destination_commitment]
pub const NUM_PUBLIC_SIGNALS: usize = 3;

/// Fixed initialization payload of an identity mailbox
/// - Hashed together with (verifier, registry, salt) to form the init code hash
/// - Changing it moves every precomputed mailbox address
pub const MAILBOX_INIT_CODE: &[u8] = b"zk_redpacket/identity_mailbox/v1";

/// ===== PDA SEED CONSTANTS =====

/// Seed for the packet ledger PDA
/// - Used in: ["ledger", authority]
#[constant]
pub const LEDGER_SEED: &str = "ledger";

/// Seed for packet PDAs
/// - Used in: ["packet", ledger, id]
/// - id is the ledger's monotonically increasing packet counter (little endian)
#[constant]
pub const PACKET_SEED: &str = "packet";

/// Seed for the token vault of a fungible packet
/// - Used in: ["vault", packet]
/// - The vault authority is the packet PDA
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDAs
/// - Used in: ["claim", scope_key, identity_salt]
/// - scope_key is the packet (per-packet scope) or the ledger (global scope)
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// Seed for the domain key registry PDA
/// - Used in: ["registry", authority]
#[constant]
pub const REGISTRY_SEED: &str = "registry";

/// Seed for domain key records
/// - Used in: ["domain_key", registry, keccak(domain)]
#[constant]
pub const DOMAIN_KEY_SEED: &str = "domain_key";

/// Seed for the verifying key account
/// - Used in: ["verifier", authority]
#[constant]
pub const VERIFIER_SEED: &str = "verifier";

/// Seed for the mailbox factory PDA
/// - Used in: ["factory", authority]
#[constant]
pub const FACTORY_SEED: &str = "factory";

/// Seed for identity mailbox PDAs
/// - Used in: ["mailbox", factory, init_code_hash]
#[constant]
pub const MAILBOX_SEED: &str = "mailbox";
