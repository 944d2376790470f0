use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a domain key registry
 *
 * Access Control: Anyone; the signer becomes the registry authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// Registry PDA
    /// - Derived from: ["registry", authority]
    #[account(
        init,
        payer = authority,
        space = KeyRegistry::LEN,
        seeds = [REGISTRY_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, KeyRegistry>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.bump = ctx.bumps.registry;
    registry.authority = ctx.accounts.authority.key();
    registry.domain_count = 0;

    emit_cpi!(RegistryInitialized {
        registry: registry.key(),
        authority: registry.authority,
    });

    Ok(())
}
