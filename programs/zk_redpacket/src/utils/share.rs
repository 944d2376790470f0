use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use crate::error::*;

/// Equal share: total / share_count, never more than what is left
///
/// The integer division remainder stays in the packet and returns with the refund.
pub fn fixed_share(total_amount: u64, share_count: u32, remaining_amount: u64) -> Result<u64> {
    require!(share_count > 0, RedPacketError::InvalidShareCount);
    let share = total_amount / u64::from(share_count);
    Ok(share.min(remaining_amount))
}

/// Random share drawn from [1, 2 * remaining / remaining_shares], clamped to remaining
///
/// The draw is keyed by (seed, packet_id, claimed_shares), so replaying the same
/// claim sequence reproduces the same amounts.
pub fn random_share(
    seed: &[u8; 32],
    packet_id: u64,
    claimed_shares: u32,
    remaining_amount: u64,
    remaining_shares: u32,
) -> Result<u64> {
    require!(remaining_shares > 0, RedPacketError::OutOfStock);
    require!(remaining_amount > 0, RedPacketError::OutOfStock);

    let upper = (u128::from(remaining_amount) * 2 / u128::from(remaining_shares)).max(1);
    let draw = u128::from(share_entropy(seed, packet_id, claimed_shares)) % upper + 1;

    // draw <= upper <= 2 * u64::MAX, the clamp brings it back into u64
    let amount = u64::try_from(draw.min(u128::from(remaining_amount)))
        .map_err(|_| RedPacketError::ArithmeticOverflow)?;
    Ok(amount)
}

fn share_entropy(seed: &[u8; 32], packet_id: u64, claimed_shares: u32) -> u64 {
    let digest = keccak::hashv(&[
        seed.as_ref(),
        &packet_id.to_le_bytes(),
        &claimed_shares.to_le_bytes(),
    ])
    .to_bytes();
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(word)
}
