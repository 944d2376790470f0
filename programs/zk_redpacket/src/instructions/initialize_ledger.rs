use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a packet ledger
 *
 * The ledger inherits verifier, registry and domain from the factory so that
 * claims routed to a mailbox are later withdrawable under the same rules.
 *
 * Access Control: Anyone; the signer becomes the ledger authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    /// Ledger PDA
    /// - Derived from: ["ledger", authority]
    #[account(
        init,
        payer = authority,
        space = PacketLedger::LEN,
        seeds = [LEDGER_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, PacketLedger>,

    #[account(
        constraint = factory.verifier == verifier.key() @ RedPacketError::ConfigMismatch,
        constraint = factory.registry == registry.key() @ RedPacketError::ConfigMismatch
    )]
    pub factory: Account<'info, MailboxFactory>,

    pub verifier: Account<'info, VerifierConfig>,

    pub registry: Account<'info, KeyRegistry>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/**
 * Initializes a packet ledger
 *
 * @param claim_scope - Whether an identity claims once per packet or once per ledger
 */
pub fn handle_initialize_ledger(ctx: Context<InitializeLedger>, claim_scope: ClaimScope) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.bump = ctx.bumps.ledger;
    ledger.authority = ctx.accounts.authority.key();
    ledger.verifier = ctx.accounts.verifier.key();
    ledger.registry = ctx.accounts.registry.key();
    ledger.factory = ctx.accounts.factory.key();
    ledger.claim_scope = claim_scope;
    ledger.packet_count = 0;
    ledger.domain = ctx.accounts.factory.domain.clone();

    emit_cpi!(LedgerInitialized {
        ledger: ledger.key(),
        authority: ledger.authority,
        factory: ledger.factory,
        global_claim_scope: claim_scope == ClaimScope::Global,
    });

    Ok(())
}
