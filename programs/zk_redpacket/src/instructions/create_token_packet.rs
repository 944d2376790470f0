use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{ensure_deposit_delta, transfer_token};

/**
 * Account context for creating a packet funded with a fungible token
 *
 * - Reserves the next packet id from the ledger
 * - Creates the packet PDA and its token vault PDA
 * - Transfers total_amount tokens from the creator to the vault
 *
 * Access Control: Anyone; the signer becomes the packet creator
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateTokenPacket<'info> {
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

    /// Token vault account (PDA) that holds the packet's tokens
    /// - Controlled by the packet PDA as token authority
    /// - Derived from: ["vault", packet]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = packet,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), packet.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Creator's token account funding the packet
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
        token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a fungible token packet
 *
 * @param params - Share count, distribution mode, duration, seed, texts and total amount
 *
 * The vault balance must grow by exactly total_amount; mints that
 * withhold a transfer fee are rejected with InvalidAmount.
 */
pub fn handle_create_token_packet(
    ctx: Context<CreateTokenPacket>,
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
    packet.asset_kind = AssetKind::Fungible;
    packet.asset_mint = ctx.accounts.token_mint.key();
    packet.token_vault = ctx.accounts.token_vault.key();

    let balance_before = ctx.accounts.token_vault.amount;
    transfer_token(
        ctx.accounts.creator.to_account_info(),
        ctx.accounts.creator_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        params.total_amount,
        ctx.accounts.token_mint.decimals,
        None, // Creator signs the deposit
    )?;

    ctx.accounts.token_vault.reload()?;
    ensure_deposit_delta(
        balance_before,
        ctx.accounts.token_vault.amount,
        params.total_amount,
    )?;

    emit_cpi!(CreationSuccess {
        id,
        packet: ctx.accounts.packet.key(),
        creator: ctx.accounts.creator.key(),
        asset_address: ctx.accounts.token_mint.key(),
        total_amount: params.total_amount,
        share_count: params.share_count,
        is_random: params.is_random,
        expires_at: ctx.accounts.packet.expires_at,
    });

    Ok(())
}
