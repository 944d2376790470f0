use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use crate::constants::*;
use crate::error::*;
use crate::state::DomainKey;

/// Read access to the currently registered key commitment of a domain
pub trait DomainKeyLookup {
    /// None when the domain was never registered or its key was revoked
    fn key_commitment(&self, domain: &str) -> Option<[u8; 32]>;
}

pub fn domain_hash(domain: &str) -> [u8; 32] {
    keccak::hash(domain.as_bytes()).to_bytes()
}

/// Address of the key record of `domain` in `registry`
pub fn domain_key_address(registry: &Pubkey, domain: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            DOMAIN_KEY_SEED.as_bytes(),
            registry.as_ref(),
            domain_hash(domain).as_ref(),
        ],
        &crate::ID,
    )
}

/// Domains are stored lower case: 1..=MAX_DOMAIN_LEN bytes of [a-z0-9.-]
pub fn validate_domain_name(domain: &str) -> Result<()> {
    require!(
        !domain.is_empty() && domain.len() <= MAX_DOMAIN_LEN,
        RedPacketError::InvalidDomainName
    );
    require!(
        domain
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'-'),
        RedPacketError::InvalidDomainName
    );
    require!(
        !domain.starts_with('.') && !domain.ends_with('.'),
        RedPacketError::InvalidDomainName
    );
    Ok(())
}

/// Registry lookup over a caller supplied domain key account
///
/// The account is trusted only if it sits at the expected PDA, is owned by
/// this program and deserializes as a DomainKey of `registry`. Anything else
/// reads as "not registered".
pub struct RegistryAccountLookup<'a, 'info> {
    pub registry: Pubkey,
    pub account: &'a AccountInfo<'info>,
}

impl<'a, 'info> RegistryAccountLookup<'a, 'info> {
    pub fn new(registry: Pubkey, account: &'a AccountInfo<'info>) -> Self {
        Self { registry, account }
    }
}

impl DomainKeyLookup for RegistryAccountLookup<'_, '_> {
    fn key_commitment(&self, domain: &str) -> Option<[u8; 32]> {
        let (expected, _) = domain_key_address(&self.registry, domain);
        if *self.account.key != expected
            || self.account.owner != &crate::ID
            || self.account.data_is_empty()
        {
            return None;
        }

        let data = self.account.try_borrow_data().ok()?;
        let record = DomainKey::try_deserialize(&mut data.as_ref()).ok()?;
        if record.registry != self.registry || record.domain != domain {
            return None;
        }
        if record.commitment == [0u8; 32] {
            return None;
        }
        Some(record.commitment)
    }
}
