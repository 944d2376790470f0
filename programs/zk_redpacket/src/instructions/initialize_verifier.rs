use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for storing the claim circuit's verifying key
 *
 * Access Control: Anyone; the signer becomes the verifier authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeVerifier<'info> {
    /// Verifying key PDA
    /// - Derived from: ["verifier", authority]
    #[account(
        init,
        payer = authority,
        space = VerifierConfig::LEN,
        seeds = [VERIFIER_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub verifier: Account<'info, VerifierConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_verifier(
    ctx: Context<InitializeVerifier>,
    verifying_key: VerifyingKeyData,
) -> Result<()> {
    verifying_key.validate()?;

    let verifier = &mut ctx.accounts.verifier;
    verifier.bump = ctx.bumps.verifier;
    verifier.authority = ctx.accounts.authority.key();
    verifier.vk = verifying_key;

    emit_cpi!(VerifierConfigured {
        verifier: verifier.key(),
        authority: verifier.authority,
    });

    Ok(())
}
