use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{deposit_lamports, ensure_deposit_delta};

/**
 * Account context for creating a packet funded with native lamports
 *
 * - Reserves the next packet id from the ledger
 * - Creates the packet PDA, which itself escrows the lamports
 * - Moves total_amount lamports from the creator into the packet
 *
 * Access Control: Anyone; the signer becomes the packet creator
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateNativePacket<'info> {
    #[account(mut)]
    pub ledger: Account<'info, PacketLedger>,

    /// The packet account (PDA)
    /// - Derived from: ["packet", ledger, packet_count + 1]
    #[account(
        init,
        payer = creator,
        space = RedPacket::LEN,
        seeds = [
            PACKET_SEED.as_bytes(),
            ledger.key().as_ref(),
            (ledger.packet_count + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub packet: Account<'info, RedPacket>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/**
 * Creates a native packet
 *
 * @param params - Share count, distribution mode, duration, seed, texts and total amount
 */
pub fn handle_create_native_packet(
    ctx: Context<CreateNativePacket>,
    params: CreatePacketParams,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();
    let id = ctx.accounts.ledger.next_packet_id()?;

    let packet = &mut ctx.accounts.packet;
    packet.open(&params, now)?;
    packet.bump = ctx.bumps.packet;
    packet.id = id;
    packet.ledger = ledger_key;
    packet.creator = ctx.accounts.creator.key();
    packet.asset_kind = AssetKind::Native;
    packet.asset_mint = Pubkey::default();
    packet.token_vault = Pubkey::default();

    let balance_before = ctx.accounts.packet.to_account_info().lamports();
    deposit_lamports(
        ctx.accounts.creator.to_account_info(),
        ctx.accounts.packet.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        params.total_amount,
    )?;

    ensure_deposit_delta(
        balance_before,
        ctx.accounts.packet.to_account_info().lamports(),
        params.total_amount,
    )?;

    emit_cpi!(CreationSuccess {
        id,
        packet: ctx.accounts.packet.key(),
        creator: ctx.accounts.creator.key(),
        asset_address: Pubkey::default(),
        total_amount: params.total_amount,
        share_count: params.share_count,
        is_random: params.is_random,
        expires_at: ctx.accounts.packet.expires_at,
    });

    Ok(())
}
