use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{domain_hash, validate_domain_name};

/**
 * Account context for registering or rotating a domain's key commitment
 *
 * Access Control: Registry authority only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(domain: String)]
pub struct SetKeyCommitment<'info> {
    #[account(
        mut,
        has_one = authority @ RedPacketError::OnlyRegistryAuthority
    )]
    pub registry: Account<'info, KeyRegistry>,

    /// Key record of the domain
    /// - Derived from: ["domain_key", registry, keccak(domain)]
    #[account(
        init_if_needed,
        payer = authority,
        space = DomainKey::LEN,
        seeds = [DOMAIN_KEY_SEED.as_bytes(), registry.key().as_ref(), domain_hash(&domain).as_ref()],
        bump
    )]
    pub domain_key: Account<'info, DomainKey>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/**
 * Sets the key commitment of `domain`
 *
 * @param domain - Lower case domain name, e.g. "tencent.com"
 * @param commitment - Commitment of the domain's DKIM public key, non-zero
 */
pub fn handle_set_key_commitment(
    ctx: Context<SetKeyCommitment>,
    domain: String,
    commitment: [u8; 32],
) -> Result<()> {
    validate_domain_name(&domain)?;
    require!(commitment != [0u8; 32], RedPacketError::InvalidCommitment);

    let registry = &mut ctx.accounts.registry;
    let domain_key = &mut ctx.accounts.domain_key;

    // A fresh record still carries the default registry key
    if domain_key.registry == Pubkey::default() {
        registry.domain_count = registry
            .domain_count
            .checked_add(1)
            .ok_or(RedPacketError::ArithmeticOverflow)?;
        domain_key.bump = ctx.bumps.domain_key;
        domain_key.registry = registry.key();
        domain_key.domain = domain.clone();
    }

    let previous_commitment = domain_key.commitment;
    domain_key.commitment = commitment;
    domain_key.updated_at = Clock::get()?.unix_timestamp;

    emit_cpi!(KeyCommitmentSet {
        registry: registry.key(),
        domain,
        previous_commitment,
        commitment,
    });

    Ok(())
}
