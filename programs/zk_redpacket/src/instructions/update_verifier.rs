use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for replacing the verifying key after a circuit upgrade
 *
 * Access Control: Verifier authority only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateVerifier<'info> {
    #[account(
        mut,
        has_one = authority @ RedPacketError::OnlyVerifierAuthority
    )]
    pub verifier: Account<'info, VerifierConfig>,

    pub authority: Signer<'info>,
}

pub fn handle_update_verifier(
    ctx: Context<UpdateVerifier>,
    verifying_key: VerifyingKeyData,
) -> Result<()> {
    verifying_key.validate()?;

    let verifier = &mut ctx.accounts.verifier;
    verifier.vk = verifying_key;

    emit_cpi!(VerifierConfigured {
        verifier: verifier.key(),
        authority: verifier.authority,
    });

    Ok(())
}
