use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::mailbox_init_code_hash;

/**
 * Account context for deploying an identity mailbox
 *
 * The mailbox lands at ["mailbox", factory, init_code_hash(verifier, registry, salt)],
 * the same address derive_mailbox_address returns off-chain. Claims may have
 * funded that address already. The payer always funds the full rent of the
 * mailbox on top of whatever the address holds, so every pre-funded lamport
 * stays withdrawable.
 *
 * Access Control: Anyone; deployment grants no control over the funds
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(salt: [u8; 32])]
pub struct DeployMailbox<'info> {
    #[account(mut)]
    pub factory: Account<'info, MailboxFactory>,

    /// Mailbox PDA, created by the handler
    /// CHECK: Address pinned by seeds; a program owned account is an existing mailbox
    #[account(
        mut,
        seeds = [
            MAILBOX_SEED.as_bytes(),
            factory.key().as_ref(),
            mailbox_init_code_hash(&factory.verifier, &factory.registry, &salt).as_ref()
        ],
        bump
    )]
    pub mailbox: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/**
 * Deploys the mailbox of `salt`
 *
 * @param salt - Identity salt, the same value claims carry as their second signal
 */
pub fn handle_deploy_mailbox(ctx: Context<DeployMailbox>, salt: [u8; 32]) -> Result<()> {
    let factory_key = ctx.accounts.factory.key();
    let mailbox_info = ctx.accounts.mailbox.to_account_info();
    let bump = ctx.bumps.mailbox;

    // ===== VALIDATION PHASE =====

    if mailbox_info.owner == &crate::ID {
        let data = mailbox_info.try_borrow_data()?;
        let existing = IdentityMailbox::try_deserialize(&mut &data[..])?;
        existing.ensure_undeployed()?;
    }

    let mut mailbox = IdentityMailbox::default();
    mailbox.deploy(
        bump,
        factory_key,
        &ctx.accounts.factory,
        salt,
        Clock::get()?.unix_timestamp,
    )?;
    ctx.accounts.factory.record_deployment()?;

    // ===== INTERACTIONS PHASE (Account Creation) =====

    let rent = Rent::get()?.minimum_balance(IdentityMailbox::LEN);
    let space = IdentityMailbox::LEN as u64;
    let seeds = &[
        MAILBOX_SEED.as_bytes(),
        factory_key.as_ref(),
        mailbox.init_code_hash.as_ref(),
        &[bump],
    ];
    let signer = &[&seeds[..]];
    let system_program_info = ctx.accounts.system_program.to_account_info();
    let payer_info = ctx.accounts.payer.to_account_info();

    if mailbox_info.lamports() == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program_info,
                system_program::CreateAccount {
                    from: payer_info,
                    to: mailbox_info.clone(),
                },
                signer,
            ),
            rent,
            space,
            &crate::ID,
        )?;
    } else {
        // Pre-funded by claims: add the rent, keep the claimed balance spendable
        system_program::transfer(
            CpiContext::new(
                system_program_info.clone(),
                system_program::Transfer {
                    from: payer_info,
                    to: mailbox_info.clone(),
                },
            ),
            rent,
        )?;
        system_program::allocate(
            CpiContext::new_with_signer(
                system_program_info.clone(),
                system_program::Allocate {
                    account_to_allocate: mailbox_info.clone(),
                },
                signer,
            ),
            space,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_program_info,
                system_program::Assign {
                    account_to_assign: mailbox_info.clone(),
                },
                signer,
            ),
            &crate::ID,
        )?;
    }

    {
        let mut data = mailbox_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        mailbox.try_serialize(&mut writer)?;
    }

    emit_cpi!(MailboxDeployed {
        address: mailbox_info.key(),
        factory: factory_key,
        salt,
    });

    Ok(())
}
