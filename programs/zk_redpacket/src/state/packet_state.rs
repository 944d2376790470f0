use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::utils::share;

/// Kind of value a packet holds
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetKind {
    /// Lamports held directly on the packet account
    #[default]
    Native,
    /// SPL Token / Token 2022 units held in the packet's token vault
    Fungible,
}

/// Creator supplied parameters of a new packet
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CreatePacketParams {
    /// Number of redeemable shares
    pub share_count: u32,
    /// Random share sizes when true, equal shares otherwise
    pub is_random: bool,
    /// Seconds until the packet expires
    pub duration: i64,
    /// Creator entropy for random share sizing
    pub seed: [u8; 32],
    pub display_name: String,
    pub message: String,
    /// Total amount locked into the packet
    pub total_amount: u64,
}

impl CreatePacketParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.share_count > 0 && self.share_count <= MAX_SHARE_COUNT,
            RedPacketError::InvalidShareCount
        );
        require!(self.total_amount > 0, RedPacketError::InvalidAmount);
        // Every share must be worth at least one base unit
        require!(
            self.total_amount >= u64::from(self.share_count),
            RedPacketError::InvalidAmount
        );
        require!(
            self.duration > 0 && self.duration <= MAX_DURATION,
            RedPacketError::InvalidDuration
        );
        require!(
            self.display_name.len() <= MAX_DISPLAY_NAME_LEN,
            RedPacketError::NameTooLong
        );
        require!(
            self.message.len() <= MAX_MESSAGE_LEN,
            RedPacketError::MessageTooLong
        );
        Ok(())
    }
}

/// Read-only snapshot returned by check_availability
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Availability {
    /// Amount still held for claims or refund
    pub balance: u64,
    pub share_count: u32,
    pub claimed_shares: u32,
    pub expired: bool,
    /// Amount the queried identity claimed from this packet
    pub claimed_amount: u64,
}

/**
 * Red packet state account
 *
 * A pool of value split into a fixed number of shares. Each share can be
 * redeemed once per identity by a claimer presenting a proof bound to a
 * registered email domain. Whatever is left after expiry returns to the
 * creator.
 *
 * Derivation: ["packet", ledger, id]
 *
 * Lifecycle:
 * 1. Created and funded by create_native_packet / create_token_packet
 * 2. Active: claims decrement remaining_amount and increment claimed_shares
 * 3. Terminal: fully claimed (remaining_amount == 0) or refunded after expiry
 * 4. Optionally closed by the creator once terminal
 */
#[account]
#[derive(Default, Debug)]
pub struct RedPacket {
    /// Bump seed for PDA derivation
    /// - Saved so the packet can sign vault transfers
    pub bump: u8,

    /// Sequential id assigned by the ledger
    pub id: u64,

    /// Ledger that created this packet
    pub ledger: Pubkey,

    /// Creator of the packet
    /// - The only account allowed to refund or close it
    pub creator: Pubkey,

    /// Native lamports or a fungible token
    pub asset_kind: AssetKind,

    /// Token mint for fungible packets, default key for native packets
    pub asset_mint: Pubkey,

    /// Token vault PDA for fungible packets, default key for native packets
    /// - Derived from: ["vault", packet]
    pub token_vault: Pubkey,

    /// Amount locked at creation
    pub total_amount: u64,

    /// Amount still held for claims or refund
    /// - Never exceeds total_amount
    /// - Strictly decreases with each claim
    pub remaining_amount: u64,

    /// Total number of redeemable shares
    pub share_count: u32,

    /// Number of shares already redeemed
    /// - Never exceeds share_count
    pub claimed_shares: u32,

    /// Share sizing mode
    pub is_random: bool,

    /// Set once the creator has taken the remainder back
    pub refunded: bool,

    /// Unix timestamp of creation
    pub created_at: i64,

    /// Unix timestamp after which claims stop and refund opens
    /// - Immutable after creation
    pub expires_at: i64,

    /// Creator entropy for random share sizing
    pub seed: [u8; 32],

    pub display_name: String,

    pub message: String,
}

impl RedPacket {
    pub const LEN: usize = 8
        + 1
        + 8
        + 32 * 4
        + 1
        + 8 * 2
        + 4 * 2
        + 1
        + 1
        + 8 * 2
        + 32
        + 4
        + MAX_DISPLAY_NAME_LEN
        + 4
        + MAX_MESSAGE_LEN;

    /// Fill the economic fields of a freshly allocated packet
    pub fn open(&mut self, params: &CreatePacketParams, now: i64) -> Result<()> {
        params.validate()?;

        self.total_amount = params.total_amount;
        self.remaining_amount = params.total_amount;
        self.share_count = params.share_count;
        self.claimed_shares = 0;
        self.is_random = params.is_random;
        self.refunded = false;
        self.created_at = now;
        self.expires_at = now
            .checked_add(params.duration)
            .ok_or(RedPacketError::ArithmeticOverflow)?;
        self.seed = params.seed;
        self.display_name = params.display_name.clone();
        self.message = params.message.clone();
        Ok(())
    }

    /// Mint for fungible packets, the default key for native packets
    pub fn asset_address(&self) -> Pubkey {
        match self.asset_kind {
            AssetKind::Native => Pubkey::default(),
            AssetKind::Fungible => self.asset_mint,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }

    pub fn remaining_shares(&self) -> u32 {
        self.share_count.saturating_sub(self.claimed_shares)
    }

    /// Time and stock checks that precede any claim authorization
    pub fn ensure_claimable(&self, now: i64) -> Result<()> {
        require!(!self.is_expired(now), RedPacketError::Expired);
        require!(
            self.claimed_shares < self.share_count && self.remaining_amount > 0,
            RedPacketError::OutOfStock
        );
        Ok(())
    }

    /// Size of the next share given the current packet state
    pub fn next_share(&self) -> Result<u64> {
        if self.is_random {
            share::random_share(
                &self.seed,
                self.id,
                self.claimed_shares,
                self.remaining_amount,
                self.remaining_shares(),
            )
        } else {
            share::fixed_share(self.total_amount, self.share_count, self.remaining_amount)
        }
    }

    /// Commit a claim of `amount` against the packet counters
    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        require!(
            self.claimed_shares < self.share_count,
            RedPacketError::OutOfStock
        );
        self.remaining_amount = self
            .remaining_amount
            .checked_sub(amount)
            .ok_or(RedPacketError::OutOfStock)?;
        self.claimed_shares = self
            .claimed_shares
            .checked_add(1)
            .ok_or(RedPacketError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Zero the remainder of an expired packet and return the amount owed to the creator
    pub fn take_refund(&mut self, now: i64) -> Result<u64> {
        require!(self.is_expired(now), RedPacketError::NotExpired);
        require!(self.remaining_amount > 0, RedPacketError::NothingLeft);

        let amount = self.remaining_amount;
        self.remaining_amount = 0;
        self.refunded = true;
        Ok(amount)
    }

    /// True once nothing redeemable or refundable remains
    pub fn is_settled(&self) -> bool {
        self.remaining_amount == 0
    }

    pub fn availability(&self, now: i64, claimed_amount: u64) -> Availability {
        Availability {
            balance: self.remaining_amount,
            share_count: self.share_count,
            claimed_shares: self.claimed_shares,
            expired: self.is_expired(now),
            claimed_amount,
        }
    }
}
