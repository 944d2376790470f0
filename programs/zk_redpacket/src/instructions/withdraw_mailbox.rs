use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::*;

/**
 * Account context for withdrawing from an identity mailbox
 *
 * Funds may have reached the mailbox from any number of packets or senders.
 * Each withdrawal proves control of the identity with a proof whose
 * destination commitment binds the chosen destination. A proof already seen
 * on chain can be submitted again, but only moves funds to that destination.
 *
 * Access Control: Anyone holding a valid proof for the mailbox's identity
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawMailbox<'info> {
    #[account(
        mut,
        seeds = [MAILBOX_SEED.as_bytes(), mailbox.factory.as_ref(), mailbox.init_code_hash.as_ref()],
        bump = mailbox.bump
    )]
    pub mailbox: Account<'info, IdentityMailbox>,

    #[account(address = mailbox.factory @ RedPacketError::ConfigMismatch)]
    pub factory: Account<'info, MailboxFactory>,

    #[account(address = mailbox.verifier @ RedPacketError::ConfigMismatch)]
    pub verifier: Account<'info, VerifierConfig>,

    /// Key record of the factory's domain
    /// CHECK: Read through RegistryAccountLookup, which validates address and owner
    pub domain_key: UncheckedAccount<'info>,

    /// Destination chosen at withdrawal time
    /// CHECK: Bound to the proof through the destination commitment
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,

    /// Mailbox token account of the asset, fungible withdrawals only
    #[account(mut)]
    pub mailbox_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Token account owned by the destination, fungible withdrawals only
    #[account(mut)]
    pub destination_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    pub token_mint: Option<InterfaceAccount<'info, Mint>>,

    pub caller: Signer<'info>,

    pub token_program: Option<Interface<'info, TokenInterface>>,
}

/**
 * Authorization of a mailbox withdrawal, without the value transfer
 *
 * The circuit binds only the domain key, the identity salt and the
 * destination, so a proof stays valid for later withdrawals to the same
 * destination. Reusing it can only ever pay that destination.
 */
pub fn authorize_withdrawal<R, V>(
    mailbox: &IdentityMailbox,
    signals: &PublicSignals,
    proof: &Groth16Proof,
    destination: &Pubkey,
    domain: &str,
    registry: &R,
    verifier: &V,
) -> Result<()>
where
    R: DomainKeyLookup + ?Sized,
    V: ProofVerifier + ?Sized,
{
    mailbox.ensure_withdrawable(signals)?;
    authorize(signals, proof, destination, domain, registry, verifier)
}

/**
 * Withdraws the mailbox's entire balance of one asset
 *
 * @param asset_address - Token mint, or the default key for native lamports
 * @param proof - Groth16 proof for the mailbox's identity
 * @param signals - identity_salt must equal the mailbox salt and
 *                  destination_commitment must bind `destination`
 */
pub fn handle_withdraw_mailbox(
    ctx: Context<WithdrawMailbox>,
    asset_address: Pubkey,
    proof: Groth16Proof,
    signals: PublicSignals,
) -> Result<()> {
    let mailbox = &ctx.accounts.mailbox;
    let mailbox_key = mailbox.key();
    let destination = ctx.accounts.destination.key();

    // ===== VALIDATION PHASE =====

    let registry = RegistryAccountLookup::new(mailbox.registry, ctx.accounts.domain_key.as_ref());
    authorize_withdrawal(
        mailbox,
        &signals,
        &proof,
        &destination,
        &ctx.accounts.factory.domain,
        &registry,
        &*ctx.accounts.verifier,
    )?;

    // ===== INTERACTIONS PHASE (Value Transfer) =====

    let amount = if asset_address == Pubkey::default() {
        let mailbox_info = ctx.accounts.mailbox.to_account_info();
        let amount = IdentityMailbox::withdrawal_amount(spendable_lamports(&mailbox_info)?)?;

        release_lamports(&mailbox_info, &ctx.accounts.destination.to_account_info(), amount)?;
        amount
    } else {
        let token_transfer = TokenTransfer::resolve(
            &ctx.accounts.mailbox_token_account,
            &ctx.accounts.destination_token_account,
            &ctx.accounts.token_mint,
            &ctx.accounts.token_program,
            &asset_address,
            &mailbox_key,
            &destination,
        )?;
        let amount = IdentityMailbox::withdrawal_amount(token_transfer.available)?;

        let seeds = &[
            MAILBOX_SEED.as_bytes(),
            mailbox.factory.as_ref(),
            mailbox.init_code_hash.as_ref(),
            &[mailbox.bump],
        ];
        let signer = &[&seeds[..]];

        token_transfer.transfer(mailbox.to_account_info(), amount, Some(signer))?;
        amount
    };

    emit_cpi!(MailboxWithdrawn {
        mailbox: mailbox_key,
        asset_address,
        destination,
        amount,
    });

    Ok(())
}
