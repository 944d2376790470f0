use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::validate_domain_name;

/**
 * Account context for creating a mailbox factory
 *
 * The factory pins the verifier, registry and domain every mailbox it deploys
 * is bound to. Those three values are part of each mailbox's address
 * derivation and cannot change afterwards.
 *
 * Access Control: Anyone; the signer becomes the factory authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    /// Factory PDA
    /// - Derived from: ["factory", authority]
    #[account(
        init,
        payer = authority,
        space = MailboxFactory::LEN,
        seeds = [FACTORY_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub factory: Account<'info, MailboxFactory>,

    pub verifier: Account<'info, VerifierConfig>,

    pub registry: Account<'info, KeyRegistry>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_factory(ctx: Context<InitializeFactory>, domain: String) -> Result<()> {
    validate_domain_name(&domain)?;

    let factory = &mut ctx.accounts.factory;
    factory.bump = ctx.bumps.factory;
    factory.authority = ctx.accounts.authority.key();
    factory.verifier = ctx.accounts.verifier.key();
    factory.registry = ctx.accounts.registry.key();
    factory.deployed_count = 0;
    factory.domain = domain;

    emit_cpi!(FactoryInitialized {
        factory: factory.key(),
        verifier: factory.verifier,
        registry: factory.registry,
        domain: factory.domain.clone(),
    });

    Ok(())
}
