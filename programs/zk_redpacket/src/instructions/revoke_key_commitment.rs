use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::domain_hash;

/**
 * Account context for revoking a domain's key commitment
 *
 * Access Control: Registry authority only
 *
 * The record is kept with a zero commitment so the domain can later be
 * registered again with a rotated key.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(domain: String)]
pub struct RevokeKeyCommitment<'info> {
    #[account(has_one = authority @ RedPacketError::OnlyRegistryAuthority)]
    pub registry: Account<'info, KeyRegistry>,

    #[account(
        mut,
        seeds = [DOMAIN_KEY_SEED.as_bytes(), registry.key().as_ref(), domain_hash(&domain).as_ref()],
        bump = domain_key.bump,
        constraint = domain_key.registry == registry.key() @ RedPacketError::ConfigMismatch
    )]
    pub domain_key: Account<'info, DomainKey>,

    pub authority: Signer<'info>,
}

pub fn handle_revoke_key_commitment(ctx: Context<RevokeKeyCommitment>, domain: String) -> Result<()> {
    let domain_key = &mut ctx.accounts.domain_key;
    require!(
        domain_key.commitment != [0u8; 32],
        RedPacketError::InvalidCommitment
    );

    let revoked_commitment = domain_key.commitment;
    domain_key.commitment = [0u8; 32];
    domain_key.updated_at = Clock::get()?.unix_timestamp;

    emit_cpi!(KeyCommitmentRevoked {
        registry: ctx.accounts.registry.key(),
        domain,
        revoked_commitment,
    });

    Ok(())
}
