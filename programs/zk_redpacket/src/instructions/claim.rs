use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::*;

/// How the claim resolves the address the proof must be bound to
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimRoute {
    /// The recipient account itself
    Direct,
    /// The identity mailbox precomputed for the identity salt
    Mailbox,
}

/**
 * Account context for claiming a share
 *
 * A claimer presents a proof that an email from the ledger's domain was
 * signed by the registered key, bound to an identity salt and a destination
 * commitment. The share is transferred to the destination, which is either a
 * recipient wallet or the (possibly not yet deployed) identity mailbox.
 *
 * Access Control: Anyone holding a valid proof; the signer only pays fees and rent
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(proof: Groth16Proof, signals: PublicSignals)]
pub struct Claim<'info> {
    #[account(
        has_one = verifier @ RedPacketError::ConfigMismatch,
        has_one = factory @ RedPacketError::ConfigMismatch
    )]
    pub ledger: Account<'info, PacketLedger>,

    /// The packet being claimed
    /// - Must belong to the ledger
    #[account(
        mut,
        has_one = ledger @ RedPacketError::NotFound
    )]
    pub packet: Account<'info, RedPacket>,

    /// Claim record of the identity within the ledger's claim scope
    /// - Derived from: ["claim", scope_key, identity_salt]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [
            CLAIM_SEED.as_bytes(),
            ledger.claim_scope.scope_key(ledger.key(), packet.key()).as_ref(),
            signals.identity_salt.as_ref()
        ],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    pub verifier: Account<'info, VerifierConfig>,

    pub factory: Account<'info, MailboxFactory>,

    /// Key record of the ledger's domain
    /// CHECK: Read through RegistryAccountLookup, which validates address and owner
    pub domain_key: UncheckedAccount<'info>,

    /// Destination of the share
    /// CHECK: Bound to the proof through the destination commitment
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    /// Packet token vault, fungible packets only
    #[account(mut)]
    pub token_vault: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Token account owned by the destination, fungible packets only
    #[account(mut)]
    pub recipient_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    pub token_mint: Option<InterfaceAccount<'info, Mint>>,

    /// Pays for the claim record
    #[account(mut)]
    pub claimant: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Option<Interface<'info, TokenInterface>>,
}

impl<'info> Claim<'info> {
    /// Address the destination commitment has to bind for `route`
    fn resolve_destination(&self, route: ClaimRoute, identity_salt: &[u8; 32]) -> Result<Pubkey> {
        let recipient = self.recipient.key();
        if route == ClaimRoute::Mailbox {
            let (mailbox, _) = derive_mailbox_address(
                &crate::ID,
                &self.factory.key(),
                &self.factory.verifier,
                &self.factory.registry,
                identity_salt,
            );
            require_keys_eq!(recipient, mailbox, RedPacketError::InvalidRecipient);
        }
        Ok(recipient)
    }
}

/**
 * Authorization and effects of a claim, without the value transfer
 *
 * Runs steps 1-7 of a claim against in-memory state and returns the share
 * amount. All counters and the claim record are updated before the caller
 * moves any value.
 */
pub fn apply_claim<R, V>(
    packet: &mut RedPacket,
    packet_key: Pubkey,
    claim_record: &mut ClaimRecord,
    claim_record_bump: u8,
    signals: &PublicSignals,
    proof: &Groth16Proof,
    destination: &Pubkey,
    domain: &str,
    registry: &R,
    verifier: &V,
    current_time: i64,
) -> Result<u64>
where
    R: DomainKeyLookup + ?Sized,
    V: ProofVerifier + ?Sized,
{
    packet.ensure_claimable(current_time)?;

    authorize(signals, proof, destination, domain, registry, verifier)?;

    claim_record.ensure_unused()?;

    let amount = packet.next_share()?;

    packet.record_claim(amount)?;
    claim_record.record(
        claim_record_bump,
        packet_key,
        *destination,
        amount,
        current_time,
    )?;

    Ok(amount)
}

/**
 * Processes a claim
 *
 * @param proof - Groth16 proof of the email identity
 * @param signals - [domain_key_commitment, identity_salt, destination_commitment]
 * @param route - Direct recipient or precomputed identity mailbox
 *
 * Validation Process:
 * 1. Packet is not expired and still has shares and balance
 * 2. Destination commitment binds the resolved destination
 * 3. Domain key commitment matches the registry
 * 4. Proof verifies
 * 5. Identity has not claimed within the scope
 * 6. Share size is computed from the packet state
 * 7. Counters and claim record are committed, then value moves
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    proof: Groth16Proof,
    signals: PublicSignals,
    route: ClaimRoute,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let packet_key = ctx.accounts.packet.key();

    // ===== VALIDATION PHASE =====

    ctx.accounts.packet.ensure_claimable(current_time)?;

    let destination = ctx
        .accounts
        .resolve_destination(route, &signals.identity_salt)?;

    let token_transfer = match ctx.accounts.packet.asset_kind {
        AssetKind::Native => None,
        AssetKind::Fungible => {
            let token_transfer = TokenTransfer::resolve(
                &ctx.accounts.token_vault,
                &ctx.accounts.recipient_token_account,
                &ctx.accounts.token_mint,
                &ctx.accounts.token_program,
                &ctx.accounts.packet.asset_mint,
                &packet_key,
                &destination,
            )?;
            require_keys_eq!(
                *token_transfer.from.key,
                ctx.accounts.packet.token_vault,
                RedPacketError::InvalidVault
            );
            Some(token_transfer)
        }
    };

    // ===== AUTHORIZATION + EFFECTS PHASE =====

    let registry = RegistryAccountLookup::new(
        ctx.accounts.ledger.registry,
        ctx.accounts.domain_key.as_ref(),
    );
    let amount = apply_claim(
        &mut ctx.accounts.packet,
        packet_key,
        &mut ctx.accounts.claim_record,
        ctx.bumps.claim_record,
        &signals,
        &proof,
        &destination,
        &ctx.accounts.ledger.domain,
        &registry,
        &*ctx.accounts.verifier,
        current_time,
    )?;

    let packet = &ctx.accounts.packet;
    let id = packet.id;
    let ledger_key = packet.ledger;
    let packet_bump = packet.bump;
    let asset_address = packet.asset_address();
    let claimed_shares = packet.claimed_shares;

    // ===== INTERACTIONS PHASE (Value Transfer) =====

    match token_transfer {
        None => release_lamports(
            &ctx.accounts.packet.to_account_info(),
            &ctx.accounts.recipient.to_account_info(),
            amount,
        )?,
        Some(token_transfer) => {
            let id_bytes = id.to_le_bytes();
            let seeds = &[
                PACKET_SEED.as_bytes(),
                ledger_key.as_ref(),
                id_bytes.as_ref(),
                &[packet_bump],
            ];
            let signer = &[&seeds[..]];

            token_transfer.transfer(
                ctx.accounts.packet.to_account_info(),
                amount,
                Some(signer), // Packet PDA signs for its vault
            )?;
        }
    }

    emit_cpi!(ClaimSuccess {
        id,
        packet: packet_key,
        destination,
        amount,
        asset_address,
        claimed_shares,
    });

    Ok(())
}
