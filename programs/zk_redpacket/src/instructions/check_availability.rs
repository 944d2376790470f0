use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::*;

/**
 * Account context for the read-only availability view
 *
 * The claim record may not exist yet; its address is pinned by seeds and an
 * empty account reads as "nothing claimed".
 */
#[derive(Accounts)]
#[instruction(identity_salt: [u8; 32])]
pub struct CheckAvailability<'info> {
    pub ledger: Account<'info, PacketLedger>,

    #[account(has_one = ledger @ RedPacketError::NotFound)]
    pub packet: Account<'info, RedPacket>,

    /// CHECK: Address verified by seeds, contents deserialized only if owned by this program
    #[account(
        seeds = [
            CLAIM_SEED.as_bytes(),
            ledger.claim_scope.scope_key(ledger.key(), packet.key()).as_ref(),
            identity_salt.as_ref()
        ],
        bump
    )]
    pub claim_record: UncheckedAccount<'info>,
}

/**
 * Returns remaining balance, share counters, expiry and the amount the
 * identity already claimed from this packet. Never mutates state.
 */
pub fn handle_check_availability(
    ctx: Context<CheckAvailability>,
    _identity_salt: [u8; 32],
) -> Result<Availability> {
    let current_time = Clock::get()?.unix_timestamp;
    let packet = &ctx.accounts.packet;
    let record_info = &ctx.accounts.claim_record;

    let claimed_amount = if record_info.data_len() != 0 && record_info.owner == &crate::ID {
        let record_data = record_info.try_borrow_data()?;
        let record = ClaimRecord::try_deserialize(&mut record_data.as_ref())?;
        record.claimed_amount_for(&packet.key())
    } else {
        0
    };

    Ok(packet.availability(current_time, claimed_amount))
}
