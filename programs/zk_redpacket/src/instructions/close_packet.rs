use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{close_token_account_with_pda, TokenTransfer};

/**
 * Account context for closing a settled packet
 *
 * Access Control: Packet creator only
 *
 * Business Logic:
 * - Allowed once remaining_amount == 0 (fully claimed or refunded)
 * - Tokens sent to the vault outside of the packet's accounting are swept to the creator
 * - Closes the token vault and the packet account, returning rent to the creator
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClosePacket<'info> {
    #[account(
        mut,
        close = creator,
        constraint = creator.key() == packet.creator @ RedPacketError::OnlyCreator
    )]
    pub packet: Account<'info, RedPacket>,

    /// Packet token vault, fungible packets only
    #[account(mut)]
    pub token_vault: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Creator's token account receiving any vault dust, fungible packets only
    #[account(mut)]
    pub creator_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    pub token_mint: Option<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Option<Interface<'info, TokenInterface>>,
}

pub fn handle_close_packet(ctx: Context<ClosePacket>) -> Result<()> {
    let packet = &ctx.accounts.packet;
    require!(packet.is_settled(), RedPacketError::PacketNotSettled);

    if packet.asset_kind == AssetKind::Fungible {
        let packet_key = packet.key();
        let token_transfer = TokenTransfer::resolve(
            &ctx.accounts.token_vault,
            &ctx.accounts.creator_token_account,
            &ctx.accounts.token_mint,
            &ctx.accounts.token_program,
            &packet.asset_mint,
            &packet_key,
            &ctx.accounts.creator.key(),
        )?;
        require_keys_eq!(
            *token_transfer.from.key,
            packet.token_vault,
            RedPacketError::InvalidVault
        );

        let id_bytes = packet.id.to_le_bytes();
        let seeds = &[
            PACKET_SEED.as_bytes(),
            packet.ledger.as_ref(),
            id_bytes.as_ref(),
            &[packet.bump],
        ];
        let signer = &[&seeds[..]];

        if token_transfer.available > 0 {
            token_transfer.transfer(
                packet.to_account_info(),
                token_transfer.available,
                Some(signer),
            )?;
        }

        close_token_account_with_pda(
            token_transfer.from.clone(),
            ctx.accounts.creator.to_account_info(),
            packet.to_account_info(),
            token_transfer.token_program.clone(),
            signer,
        )?;
    }

    emit_cpi!(PacketClosed {
        id: ctx.accounts.packet.id,
        packet: ctx.accounts.packet.key(),
        creator: ctx.accounts.creator.key(),
    });

    // The packet account itself is closed by the close = creator constraint
    Ok(())
}
