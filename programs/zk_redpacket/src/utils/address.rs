use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use crate::constants::*;

/// Hash of the mailbox initialization payload for one identity
///
/// keccak(MAILBOX_INIT_CODE || verifier || registry || salt)
pub fn mailbox_init_code_hash(verifier: &Pubkey, registry: &Pubkey, salt: &[u8; 32]) -> [u8; 32] {
    keccak::hashv(&[
        MAILBOX_INIT_CODE,
        verifier.as_ref(),
        registry.as_ref(),
        salt.as_ref(),
    ])
    .to_bytes()
}

/// Address an identity mailbox occupies once deployed by `factory` for `salt`
///
/// Pure: anyone holding the factory address, its configuration and the salt
/// computes the same address, whether or not the mailbox exists yet.
pub fn derive_mailbox_address(
    program_id: &Pubkey,
    factory: &Pubkey,
    verifier: &Pubkey,
    registry: &Pubkey,
    salt: &[u8; 32],
) -> (Pubkey, u8) {
    let init_code_hash = mailbox_init_code_hash(verifier, registry, salt);
    Pubkey::find_program_address(
        &[MAILBOX_SEED.as_bytes(), factory.as_ref(), init_code_hash.as_ref()],
        program_id,
    )
}
