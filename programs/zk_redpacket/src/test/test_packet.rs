#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use crate::constants::*;
    use crate::error::RedPacketError;
    use crate::state::*;
    use crate::test::assert_error;

    const NOW: i64 = 1_700_000_000;
    const ONE_SOL: u64 = 1_000_000_000;

    fn params(share_count: u32, total_amount: u64, duration: i64) -> CreatePacketParams {
        CreatePacketParams {
            share_count,
            is_random: false,
            duration,
            seed: [3u8; 32],
            display_name: "alice".to_string(),
            message: "happy new year".to_string(),
            total_amount,
        }
    }

    fn open_packet(share_count: u32, total_amount: u64, duration: i64) -> RedPacket {
        let mut packet = RedPacket {
            id: 1,
            ledger: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            ..Default::default()
        };
        packet
            .open(&params(share_count, total_amount, duration), NOW)
            .unwrap();
        packet
    }

    fn claim_next(packet: &mut RedPacket, now: i64) -> Result<u64> {
        packet.ensure_claimable(now)?;
        let amount = packet.next_share()?;
        packet.record_claim(amount)?;
        Ok(amount)
    }

    #[test]
    fn test_open_sets_counters() {
        let packet = open_packet(10, ONE_SOL, 1800);
        assert_eq!(packet.remaining_amount, ONE_SOL);
        assert_eq!(packet.claimed_shares, 0);
        assert_eq!(packet.expires_at, NOW + 1800);
        assert!(!packet.refunded);
        assert_eq!(packet.asset_address(), Pubkey::default());
    }

    #[test]
    fn test_fixed_claim_then_refund() {
        let mut packet = open_packet(10, ONE_SOL, 1800);

        let amount = claim_next(&mut packet, NOW + 10).unwrap();
        assert_eq!(amount, ONE_SOL / 10);
        assert_eq!(packet.claimed_shares, 1);
        assert_eq!(packet.remaining_amount, 900_000_000);

        // Advance past expiry
        let later = NOW + 1801;
        assert_error(claim_next(&mut packet, later), RedPacketError::Expired);

        let refunded = packet.take_refund(later).unwrap();
        assert_eq!(refunded, 900_000_000);
        assert_eq!(packet.remaining_amount, 0);
        assert!(packet.refunded);
        assert!(packet.is_settled());

        assert_error(packet.take_refund(later), RedPacketError::NothingLeft);
    }

    #[test]
    fn test_expiry_is_exclusive() {
        let packet = open_packet(1, ONE_SOL, 60);
        assert!(!packet.is_expired(NOW + 60));
        assert!(packet.is_expired(NOW + 61));
    }

    #[test]
    fn test_refund_before_expiry_fails() {
        let mut packet = open_packet(2, ONE_SOL, 60);
        assert_error(packet.take_refund(NOW + 60), RedPacketError::NotExpired);
        assert_eq!(packet.remaining_amount, ONE_SOL);
    }

    #[test]
    fn test_single_share_runs_out() {
        let mut packet = open_packet(1, ONE_SOL, 60);
        assert_eq!(claim_next(&mut packet, NOW).unwrap(), ONE_SOL);
        assert!(packet.is_settled());
        assert_error(claim_next(&mut packet, NOW), RedPacketError::OutOfStock);
    }

    #[test]
    fn test_share_count_bounds_claims() {
        let mut packet = open_packet(3, 10, 60);
        let total: u64 = (0..3).map(|_| claim_next(&mut packet, NOW).unwrap()).sum();
        assert_eq!(total, 9);
        assert_eq!(packet.claimed_shares, 3);
        assert_eq!(packet.remaining_amount, 1);
        assert_error(claim_next(&mut packet, NOW), RedPacketError::OutOfStock);

        // The division remainder comes back with the refund
        assert_eq!(packet.take_refund(NOW + 61).unwrap(), 1);
    }

    #[test]
    fn test_random_packet_conserves_value() {
        let mut packet = RedPacket {
            id: 7,
            ..Default::default()
        };
        let mut random = params(20, ONE_SOL, 600);
        random.is_random = true;
        packet.open(&random, NOW).unwrap();

        let mut claimed = 0u64;
        while packet.ensure_claimable(NOW).is_ok() {
            let amount = claim_next(&mut packet, NOW).unwrap();
            assert!(amount >= 1);
            claimed += amount;
            assert!(packet.claimed_shares <= packet.share_count);
            assert!(packet.remaining_amount <= packet.total_amount);
        }
        assert_eq!(claimed + packet.remaining_amount, ONE_SOL);
    }

    #[test]
    fn test_availability_snapshot() {
        let mut packet = open_packet(4, 400, 60);
        claim_next(&mut packet, NOW).unwrap();

        let view = packet.availability(NOW, 100);
        assert_eq!(
            view,
            Availability {
                balance: 300,
                share_count: 4,
                claimed_shares: 1,
                expired: false,
                claimed_amount: 100,
            }
        );
        assert!(packet.availability(NOW + 61, 0).expired);
    }

    #[test]
    fn test_params_validation() {
        params(1, 1, 1).validate().unwrap();
        params(MAX_SHARE_COUNT, u64::from(MAX_SHARE_COUNT), MAX_DURATION)
            .validate()
            .unwrap();

        assert_error(params(0, 100, 60).validate(), RedPacketError::InvalidShareCount);
        assert_error(
            params(MAX_SHARE_COUNT + 1, u64::MAX, 60).validate(),
            RedPacketError::InvalidShareCount,
        );
        assert_error(params(1, 0, 60).validate(), RedPacketError::InvalidAmount);
        assert_error(params(10, 9, 60).validate(), RedPacketError::InvalidAmount);
        assert_error(params(1, 100, 0).validate(), RedPacketError::InvalidDuration);
        assert_error(
            params(1, 100, MAX_DURATION + 1).validate(),
            RedPacketError::InvalidDuration,
        );

        let mut long_name = params(1, 100, 60);
        long_name.display_name = "n".repeat(MAX_DISPLAY_NAME_LEN + 1);
        assert_error(long_name.validate(), RedPacketError::NameTooLong);

        let mut long_message = params(1, 100, 60);
        long_message.message = "m".repeat(MAX_MESSAGE_LEN + 1);
        assert_error(long_message.validate(), RedPacketError::MessageTooLong);
    }

    #[test]
    fn test_packet_space_fits_largest_packet() {
        let mut packet = RedPacket::default();
        let mut largest = params(1, 100, 60);
        largest.display_name = "n".repeat(MAX_DISPLAY_NAME_LEN);
        largest.message = "m".repeat(MAX_MESSAGE_LEN);
        packet.open(&largest, NOW).unwrap();

        let mut data = Vec::new();
        packet.try_serialize(&mut data).unwrap();
        assert!(data.len() <= RedPacket::LEN);
    }

    #[test]
    fn test_ledger_issues_sequential_ids() {
        let mut ledger = PacketLedger::default();
        assert_eq!(ledger.next_packet_id().unwrap(), 1);
        assert_eq!(ledger.next_packet_id().unwrap(), 2);
        assert_eq!(ledger.packet_count, 2);

        ledger.packet_count = u64::MAX;
        assert_error(ledger.next_packet_id(), RedPacketError::ArithmeticOverflow);
    }

    #[test]
    fn test_claim_scope_key() {
        let ledger = Pubkey::new_unique();
        let packet = Pubkey::new_unique();
        assert_eq!(ClaimScope::default(), ClaimScope::Global);
        assert_eq!(ClaimScope::Global.scope_key(ledger, packet), ledger);
        assert_eq!(ClaimScope::PerPacket.scope_key(ledger, packet), packet);
    }

    #[test]
    fn test_claim_record_is_single_use() {
        let packet = Pubkey::new_unique();
        let destination = Pubkey::new_unique();
        let mut record = ClaimRecord::default();
        record.ensure_unused().unwrap();

        record.record(254, packet, destination, 100, NOW).unwrap();
        assert!(record.claimed);
        assert_eq!(record.claimed_amount_for(&packet), 100);
        assert_eq!(record.claimed_amount_for(&Pubkey::new_unique()), 0);

        assert_error(record.ensure_unused(), RedPacketError::IdentityAlreadyUsed);
        assert_error(
            record.record(254, packet, destination, 100, NOW),
            RedPacketError::IdentityAlreadyUsed,
        );
        assert_eq!(record.amount, 100);
    }
}
