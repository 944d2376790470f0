use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use crate::constants::NUM_PUBLIC_SIGNALS;
use crate::error::*;
use crate::utils::{DomainKeyLookup, ProofVerifier};

/// Groth16 proof blob as produced by the off-chain prover
/// - `a` is expected negated, points in uncompressed big-endian form
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Groth16Proof {
    pub a: [u8; 64],
    pub b: [u8; 128],
    pub c: [u8; 64],
}

/// Public signals of the claim circuit, each a big-endian BN254 scalar
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PublicSignals {
    /// Commitment of the DKIM key that signed the email
    pub domain_key_commitment: [u8; 32],
    /// Pseudonymous identity derived from the email address
    pub identity_salt: [u8; 32],
    /// Commitment of the address the proof releases funds to
    pub destination_commitment: [u8; 32],
}

impl PublicSignals {
    /// Ordered verifier inputs
    pub fn to_inputs(&self) -> [[u8; 32]; NUM_PUBLIC_SIGNALS] {
        [
            self.domain_key_commitment,
            self.identity_salt,
            self.destination_commitment,
        ]
    }
}

/// Left-padded digest of an address: 0x00 || keccak(address)[1..32]
///
/// The zero high byte keeps the value below the BN254 scalar modulus.
pub fn destination_commitment(destination: &Pubkey) -> [u8; 32] {
    let mut commitment = keccak::hash(destination.as_ref()).to_bytes();
    commitment[0] = 0;
    commitment
}

/**
 * Checks that a proof authorizes a release of funds to `destination`
 *
 * Validation order:
 * 1. destination commitment binds `destination`
 * 2. domain key commitment equals the registry's current key for `domain`
 * 3. proof verifies against the signals
 *
 * The verifier only runs once the cheap checks have passed.
 */
pub fn authorize<R, V>(
    signals: &PublicSignals,
    proof: &Groth16Proof,
    destination: &Pubkey,
    domain: &str,
    registry: &R,
    verifier: &V,
) -> Result<()>
where
    R: DomainKeyLookup + ?Sized,
    V: ProofVerifier + ?Sized,
{
    require!(
        signals.destination_commitment == destination_commitment(destination),
        RedPacketError::InvalidRecipient
    );

    let registered = registry.key_commitment(domain);
    if registered != Some(signals.domain_key_commitment) {
        msg!("Domain key commitment rejected for domain {}", domain);
        return err!(RedPacketError::InvalidDomain);
    }

    require!(
        verifier.verify(proof, &signals.to_inputs()),
        RedPacketError::InvalidProof
    );
    Ok(())
}
