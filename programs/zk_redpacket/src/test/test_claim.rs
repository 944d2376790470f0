#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use anchor_lang::prelude::*;
    use crate::error::RedPacketError;
    use crate::instructions::apply_claim;
    use crate::state::*;
    use crate::test::*;
    use crate::utils::{derive_mailbox_address, destination_commitment, PublicSignals};

    const NOW: i64 = 1_700_000_000;
    const ONE_SOL: u64 = 1_000_000_000;

    struct Harness {
        packet: RedPacket,
        packet_key: Pubkey,
        registry: MockRegistry,
        verifier: MockVerifier,
    }

    impl Harness {
        fn new(share_count: u32, total_amount: u64) -> Self {
            let mut packet = RedPacket {
                id: 1,
                ledger: Pubkey::new_unique(),
                creator: Pubkey::new_unique(),
                ..Default::default()
            };
            packet
                .open(
                    &CreatePacketParams {
                        share_count,
                        is_random: false,
                        duration: 1800,
                        seed: [0u8; 32],
                        display_name: String::new(),
                        message: String::new(),
                        total_amount,
                    },
                    NOW,
                )
                .unwrap();
            Self {
                packet,
                packet_key: Pubkey::new_unique(),
                registry: MockRegistry::with(TEST_DOMAIN, hex32(TEST_KEY_COMMITMENT)),
                verifier: MockVerifier::accepting(),
            }
        }

        fn claim(
            &mut self,
            record: &mut ClaimRecord,
            signals: &PublicSignals,
            destination: &Pubkey,
            now: i64,
        ) -> Result<u64> {
            apply_claim(
                &mut self.packet,
                self.packet_key,
                record,
                250,
                signals,
                &dummy_proof(),
                destination,
                TEST_DOMAIN,
                &self.registry,
                &self.verifier,
                now,
            )
        }
    }

    #[test]
    fn test_claim_pays_fixed_share() {
        let mut h = Harness::new(10, ONE_SOL);
        let recipient = Pubkey::new_unique();
        let mut record = ClaimRecord::default();

        let amount = h
            .claim(&mut record, &signals_for(&recipient), &recipient, NOW + 1)
            .unwrap();

        assert_eq!(amount, 100_000_000);
        assert_eq!(h.packet.claimed_shares, 1);
        assert_eq!(h.packet.remaining_amount, 900_000_000);
        assert!(record.claimed);
        assert_eq!(record.bump, 250);
        assert_eq!(record.packet, h.packet_key);
        assert_eq!(record.destination, recipient);
        assert_eq!(record.amount, amount);
        assert_eq!(record.claimed_at, NOW + 1);
    }

    #[test]
    fn test_identity_cannot_claim_twice() {
        let mut h = Harness::new(10, ONE_SOL);
        let recipient = Pubkey::new_unique();
        let signals = signals_for(&recipient);
        let mut record = ClaimRecord::default();

        h.claim(&mut record, &signals, &recipient, NOW).unwrap();
        assert_error(
            h.claim(&mut record, &signals, &recipient, NOW),
            RedPacketError::IdentityAlreadyUsed,
        );

        // Failed replay leaves the packet untouched
        assert_eq!(h.packet.claimed_shares, 1);
        assert_eq!(h.packet.remaining_amount, 900_000_000);
    }

    #[test]
    fn test_expired_packet_rejected_first() {
        let mut h = Harness::new(10, ONE_SOL);
        let recipient = Pubkey::new_unique();
        let mut record = ClaimRecord::default();

        // Wrong destination as well, expiry still wins
        assert_error(
            h.claim(&mut record, &signals_for(&Pubkey::new_unique()), &recipient, NOW + 1801),
            RedPacketError::Expired,
        );
        assert_eq!(h.verifier.calls.get(), 0);
    }

    #[test]
    fn test_sold_out_packet_rejected() {
        let mut h = Harness::new(1, ONE_SOL);
        let first = Pubkey::new_unique();
        h.claim(&mut ClaimRecord::default(), &signals_for(&first), &first, NOW)
            .unwrap();

        let second = Pubkey::new_unique();
        assert_error(
            h.claim(&mut ClaimRecord::default(), &signals_for(&second), &second, NOW),
            RedPacketError::OutOfStock,
        );
    }

    #[test]
    fn test_rejected_claims_leave_no_trace() {
        let mut h = Harness::new(10, ONE_SOL);
        let recipient = Pubkey::new_unique();
        let mut record = ClaimRecord::default();

        let mut wrong_key = signals_for(&recipient);
        wrong_key.domain_key_commitment = [5u8; 32];
        assert_error(
            h.claim(&mut record, &wrong_key, &recipient, NOW),
            RedPacketError::InvalidDomain,
        );

        h.verifier = MockVerifier::rejecting();
        assert_error(
            h.claim(&mut record, &signals_for(&recipient), &recipient, NOW),
            RedPacketError::InvalidProof,
        );

        assert!(!record.claimed);
        assert_eq!(h.packet.claimed_shares, 0);
        assert_eq!(h.packet.remaining_amount, ONE_SOL);
    }

    #[test]
    fn test_proof_cannot_be_redirected() {
        let mut h = Harness::new(10, ONE_SOL);
        let bound = Pubkey::new_unique();
        let thief = Pubkey::new_unique();
        let mut record = ClaimRecord::default();

        assert_error(
            h.claim(&mut record, &signals_for(&bound), &thief, NOW),
            RedPacketError::InvalidRecipient,
        );
        assert_eq!(h.verifier.calls.get(), 0);
        assert!(!record.claimed);
    }

    #[test]
    fn test_claim_into_undeployed_mailbox() {
        let mut h = Harness::new(4, 4 * ONE_SOL);
        let factory = Pubkey::new_unique();
        let verifier_key = Pubkey::new_unique();
        let registry_key = Pubkey::new_unique();
        let salt = hex32(TEST_IDENTITY_SALT);

        // Claimer commits to the precomputed mailbox, no deployment needed
        let (mailbox, _) =
            derive_mailbox_address(&crate::ID, &factory, &verifier_key, &registry_key, &salt);
        let signals = PublicSignals {
            domain_key_commitment: hex32(TEST_KEY_COMMITMENT),
            identity_salt: salt,
            destination_commitment: destination_commitment(&mailbox),
        };
        let mut record = ClaimRecord::default();

        let amount = h.claim(&mut record, &signals, &mailbox, NOW).unwrap();
        assert_eq!(amount, ONE_SOL);
        assert_eq!(record.destination, mailbox);
    }

    #[test]
    fn test_distinct_identities_share_packet() {
        let mut h = Harness::new(3, 300);
        let mut total = 0;
        for _ in 0..3 {
            let recipient = Pubkey::new_unique();
            total += h
                .claim(&mut ClaimRecord::default(), &signals_for(&recipient), &recipient, NOW)
                .unwrap();
        }
        assert_eq!(total, 300);
        assert!(h.packet.is_settled());
        assert_eq!(h.verifier.calls.get(), 3);
    }

    /// Claim records keyed the way the claim instruction derives their address
    fn claim_under_scope(
        scope: ClaimScope,
        ledger: Pubkey,
        packets: &mut [Harness],
        recipient: &Pubkey,
    ) -> Vec<Result<u64>> {
        let mut records: HashMap<Pubkey, ClaimRecord> = HashMap::new();
        let signals = signals_for(recipient);
        packets
            .iter_mut()
            .map(|h| {
                let scope_key = scope.scope_key(ledger, h.packet_key);
                let record = records.entry(scope_key).or_default();
                h.claim(record, &signals, recipient, NOW)
            })
            .collect()
    }

    #[test]
    fn test_global_scope_allows_one_claim_per_ledger() {
        let ledger = Pubkey::new_unique();
        let mut packets = [Harness::new(2, 200), Harness::new(2, 200)];
        let recipient = Pubkey::new_unique();

        let mut results = claim_under_scope(ClaimScope::Global, ledger, &mut packets, &recipient).into_iter();
        assert_eq!(results.next().unwrap().unwrap(), 100);
        assert_error(results.next().unwrap(), RedPacketError::IdentityAlreadyUsed);

        assert_eq!(packets[0].packet.claimed_shares, 1);
        assert_eq!(packets[1].packet.claimed_shares, 0);
        assert_eq!(packets[1].packet.remaining_amount, 200);
    }

    #[test]
    fn test_per_packet_scope_allows_one_claim_per_packet() {
        let ledger = Pubkey::new_unique();
        let mut packets = [Harness::new(2, 200), Harness::new(2, 200)];
        let recipient = Pubkey::new_unique();

        for result in claim_under_scope(ClaimScope::PerPacket, ledger, &mut packets, &recipient) {
            assert_eq!(result.unwrap(), 100);
        }
        assert_eq!(packets[0].packet.claimed_shares, 1);
        assert_eq!(packets[1].packet.claimed_shares, 1);
    }
}
