use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::utils::{mailbox_init_code_hash, PublicSignals};

/**
 * Mailbox factory configuration account
 *
 * Fixes the verifier and registry every mailbox it deploys is initialized
 * with. Both are part of the mailbox init code hash, so the factory key plus
 * an identity salt determine a mailbox address before it exists.
 *
 * Derivation: ["factory", authority]
 */
#[account]
#[derive(Default, Debug)]
pub struct MailboxFactory {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Account that initialized the factory
    pub authority: Pubkey,

    /// Verifying key account baked into every mailbox
    pub verifier: Pubkey,

    /// Domain key registry baked into every mailbox
    pub registry: Pubkey,

    /// Number of mailboxes deployed so far
    pub deployed_count: u64,

    /// Email domain withdrawals are checked against
    pub domain: String,
}

impl MailboxFactory {
    pub const LEN: usize = 8 + 1 + 32 * 3 + 8 + 4 + MAX_DOMAIN_LEN;

    pub fn record_deployment(&mut self) -> Result<()> {
        self.deployed_count = self
            .deployed_count
            .checked_add(1)
            .ok_or(RedPacketError::ArithmeticOverflow)?;
        Ok(())
    }
}

/**
 * Identity mailbox account
 *
 * Holds value routed to an identity before or after the mailbox is deployed.
 * Funds leave only through a withdrawal proven for the same identity salt.
 *
 * Derivation: ["mailbox", factory, init_code_hash]
 * where init_code_hash = keccak(MAILBOX_INIT_CODE || verifier || registry || salt)
 */
#[account]
#[derive(Default, Debug)]
pub struct IdentityMailbox {
    /// Bump seed for PDA derivation
    /// - Saved so the mailbox can sign token transfers
    pub bump: u8,

    /// Set by deploy_mailbox; a second deployment is rejected
    pub deployed: bool,

    /// Factory that deployed the mailbox
    pub factory: Pubkey,

    /// Verifying key account withdrawals are checked with
    pub verifier: Pubkey,

    /// Domain key registry withdrawals are checked against
    pub registry: Pubkey,

    /// Identity salt the mailbox belongs to
    pub salt: [u8; 32],

    /// Init code hash used as the address seed
    pub init_code_hash: [u8; 32],

    /// Unix timestamp of deployment
    pub deployed_at: i64,
}

impl IdentityMailbox {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<IdentityMailbox>();

    pub fn ensure_undeployed(&self) -> Result<()> {
        require!(!self.deployed, RedPacketError::AlreadyDeployed);
        Ok(())
    }

    /// Bind the mailbox to `factory`'s configuration and the identity `salt`
    pub fn deploy(
        &mut self,
        bump: u8,
        factory_key: Pubkey,
        factory: &MailboxFactory,
        salt: [u8; 32],
        now: i64,
    ) -> Result<()> {
        self.ensure_undeployed()?;

        self.bump = bump;
        self.deployed = true;
        self.factory = factory_key;
        self.verifier = factory.verifier;
        self.registry = factory.registry;
        self.salt = salt;
        self.init_code_hash = mailbox_init_code_hash(&factory.verifier, &factory.registry, &salt);
        self.deployed_at = now;
        Ok(())
    }

    /// Checks that precede proof verification on a withdrawal
    pub fn ensure_withdrawable(&self, signals: &PublicSignals) -> Result<()> {
        require!(self.deployed, RedPacketError::MailboxNotDeployed);
        require!(
            signals.identity_salt == self.salt,
            RedPacketError::IdentityMismatch
        );
        Ok(())
    }

    /// Whole balance of one asset, which must be non-zero
    pub fn withdrawal_amount(available: u64) -> Result<u64> {
        require!(available > 0, RedPacketError::NothingLeft);
        Ok(available)
    }
}
