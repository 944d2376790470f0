#[cfg(test)]
mod tests {
    use crate::error::RedPacketError;
    use crate::test::assert_error;
    use crate::utils::share::{fixed_share, random_share};

    const SEED: [u8; 32] = [7u8; 32];

    #[test]
    fn test_fixed_share_is_equal_split() {
        assert_eq!(fixed_share(1_000_000_000, 10, 1_000_000_000).unwrap(), 100_000_000);
        assert_eq!(fixed_share(1_000_000_000, 10, 100_000_000).unwrap(), 100_000_000);
    }

    #[test]
    fn test_fixed_share_leaves_division_remainder() {
        // 10 / 3 = 3, one unit stays for the refund
        let total = 10;
        let mut remaining = total;
        for _ in 0..3 {
            let share = fixed_share(total, 3, remaining).unwrap();
            assert_eq!(share, 3);
            remaining -= share;
        }
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_fixed_share_clamped_to_remaining() {
        assert_eq!(fixed_share(100, 2, 20).unwrap(), 20);
    }

    #[test]
    fn test_fixed_share_rejects_zero_shares() {
        assert_error(fixed_share(100, 0, 100), RedPacketError::InvalidShareCount);
    }

    #[test]
    fn test_random_share_within_bounds() {
        let remaining = 1_000_000u64;
        let remaining_shares = 10u32;
        let upper = remaining * 2 / u64::from(remaining_shares);
        for claimed in 0..64u32 {
            let share = random_share(&SEED, 1, claimed, remaining, remaining_shares).unwrap();
            assert!(share >= 1, "share {} below one unit", share);
            assert!(share <= upper, "share {} above {}", share, upper);
        }
    }

    #[test]
    fn test_random_share_is_deterministic() {
        let a = random_share(&SEED, 42, 3, 500_000, 5).unwrap();
        let b = random_share(&SEED, 42, 3, 500_000, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_share_varies_with_inputs() {
        let draws: std::collections::HashSet<u64> = (0..16u32)
            .map(|claimed| random_share(&SEED, 9, claimed, u64::MAX / 4, 1_000).unwrap())
            .collect();
        assert!(draws.len() > 1, "random shares should not all be equal");
    }

    #[test]
    fn test_random_share_clamped_to_remaining() {
        // One share left: upper bound is twice the remainder, the clamp keeps it at most remaining
        for claimed in 0..32u32 {
            let share = random_share(&SEED, 1, claimed, 3, 1).unwrap();
            assert!((1..=3).contains(&share));
        }
        assert_eq!(random_share(&SEED, 1, 0, 1, 5).unwrap(), 1);
    }

    #[test]
    fn test_random_shares_never_exceed_total() {
        let total = 1_000_000_000u64;
        let share_count = 50u32;
        let mut remaining = total;
        let mut claimed = 0u32;
        while claimed < share_count && remaining > 0 {
            let share =
                random_share(&SEED, 3, claimed, remaining, share_count - claimed).unwrap();
            assert!(share >= 1 && share <= remaining);
            remaining -= share;
            claimed += 1;
        }
        assert!(remaining <= total);
        println!("claimed {} shares, {} left for refund", claimed, remaining);
    }

    #[test]
    fn test_random_share_rejects_exhausted_packet() {
        assert_error(random_share(&SEED, 1, 0, 100, 0), RedPacketError::OutOfStock);
        assert_error(random_share(&SEED, 1, 0, 0, 3), RedPacketError::OutOfStock);
    }

    #[test]
    fn test_random_share_handles_large_amounts() {
        let share = random_share(&SEED, 1, 0, u64::MAX, 1).unwrap();
        assert!(share >= 1);
    }
}
