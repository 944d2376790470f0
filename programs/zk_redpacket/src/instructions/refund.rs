use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{release_lamports, TokenTransfer};

/**
 * Account context for refunding an expired packet
 *
 * Access Control: Packet creator only
 *
 * Business Logic:
 * - Only after expiry (current_time > expires_at)
 * - Returns the whole remaining amount to the creator
 * - A second refund finds remaining_amount == 0 and fails with NothingLeft
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Refund<'info> {
    #[account(
        mut,
        constraint = creator.key() == packet.creator @ RedPacketError::OnlyCreator
    )]
    pub packet: Account<'info, RedPacket>,

    /// Packet token vault, fungible packets only
    #[account(mut)]
    pub token_vault: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Creator's token account receiving the remainder, fungible packets only
    #[account(mut)]
    pub creator_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    pub token_mint: Option<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Option<Interface<'info, TokenInterface>>,
}

pub fn handle_refund(ctx: Context<Refund>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let packet_key = ctx.accounts.packet.key();
    let creator_key = ctx.accounts.creator.key();

    // ===== VALIDATION PHASE =====

    let token_transfer = match ctx.accounts.packet.asset_kind {
        AssetKind::Native => None,
        AssetKind::Fungible => {
            let token_transfer = TokenTransfer::resolve(
                &ctx.accounts.token_vault,
                &ctx.accounts.creator_token_account,
                &ctx.accounts.token_mint,
                &ctx.accounts.token_program,
                &ctx.accounts.packet.asset_mint,
                &packet_key,
                &creator_key,
            )?;
            require_keys_eq!(
                *token_transfer.from.key,
                ctx.accounts.packet.token_vault,
                RedPacketError::InvalidVault
            );
            Some(token_transfer)
        }
    };

    // ===== EFFECTS PHASE (State Updates) =====

    let packet = &mut ctx.accounts.packet;
    let amount = packet.take_refund(current_time)?;

    let id = packet.id;
    let ledger_key = packet.ledger;
    let packet_bump = packet.bump;
    let asset_address = packet.asset_address();

    // ===== INTERACTIONS PHASE (Value Transfer) =====

    match token_transfer {
        None => release_lamports(
            &ctx.accounts.packet.to_account_info(),
            &ctx.accounts.creator.to_account_info(),
            amount,
        )?,
        Some(token_transfer) => {
            let id_bytes = id.to_le_bytes();
            let seeds = &[
                PACKET_SEED.as_bytes(),
                ledger_key.as_ref(),
                id_bytes.as_ref(),
                &[packet_bump],
            ];
            let signer = &[&seeds[..]];

            token_transfer.transfer(ctx.accounts.packet.to_account_info(), amount, Some(signer))?;
        }
    }

    emit_cpi!(RefundSuccess {
        id,
        packet: packet_key,
        asset_address,
        amount,
    });

    Ok(())
}
