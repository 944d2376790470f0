use anchor_lang::prelude::*;

declare_id!("H3hZ13CddRkJMBC1yNccibnWhHfCMcnT6heTCET9aT1X");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::*;
use utils::{Groth16Proof, PublicSignals};

/**
 * ZK Red Packet Program
 *
 * Red packets whose shares can only be redeemed by holders of a verified email
 * identity. A claimer proves with a Groth16 proof that an email from the
 * configured domain was signed by the domain's registered DKIM key; the email
 * address itself never appears on chain.
 *
 * Key Features:
 * - Native SOL or SPL Token / Token 2022 packets
 * - Equal or random share sizes
 * - One claim per identity, scoped per packet or across the whole ledger
 * - Proofs bound to a destination commitment, so a proof cannot be redirected
 * - Deterministic identity mailboxes that can receive value before they exist
 * - Refund of the remainder to the creator after expiry
 *
 * Architecture:
 * - Key Registry PDA + Domain Key PDAs: DKIM key commitments per domain
 * - Verifier Config PDA: Groth16 verifying key of the claim circuit
 * - Mailbox Factory PDA: fixes the derivation inputs of identity mailboxes
 * - Packet Ledger PDA: packet id sequence and claim configuration
 * - Packet PDAs (+ Token Vault PDAs): escrowed value and share accounting
 * - Claim Record PDAs: spent identities
 * - Identity Mailbox PDAs: per-identity holding accounts
 *
 * Workflow:
 * 1. Operators set up registry, verifier, factory and ledger
 * 2. Creator creates and funds a packet
 * 3. Claimers claim with proofs, directly or into their identity mailbox
 * 4. Mailbox owners deploy their mailbox and withdraw with an identity proof
 * 5. Creator refunds the remainder after expiry and may close the packet
 */
#[program]
pub mod zk_redpacket {
    use super::*;

    /**
     * Creates a domain key registry owned by the signer
     *
     * Access Control: Anyone
     */
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        handle_initialize_registry(ctx)
    }

    /**
     * Registers or rotates the DKIM key commitment of a domain
     *
     * @param domain - Lower case domain name
     * @param commitment - Non-zero key commitment
     *
     * Access Control: Registry authority only
     */
    pub fn set_key_commitment(
        ctx: Context<SetKeyCommitment>,
        domain: String,
        commitment: [u8; 32],
    ) -> Result<()> {
        handle_set_key_commitment(ctx, domain, commitment)
    }

    /**
     * Revokes the key commitment of a domain
     *
     * Access Control: Registry authority only
     */
    pub fn revoke_key_commitment(ctx: Context<RevokeKeyCommitment>, domain: String) -> Result<()> {
        handle_revoke_key_commitment(ctx, domain)
    }

    /**
     * Stores the Groth16 verifying key of the claim circuit
     *
     * Access Control: Anyone; the signer becomes the verifier authority
     */
    pub fn initialize_verifier(
        ctx: Context<InitializeVerifier>,
        verifying_key: VerifyingKeyData,
    ) -> Result<()> {
        handle_initialize_verifier(ctx, verifying_key)
    }

    /**
     * Replaces the verifying key
     *
     * Access Control: Verifier authority only
     */
    pub fn update_verifier(ctx: Context<UpdateVerifier>, verifying_key: VerifyingKeyData) -> Result<()> {
        handle_update_verifier(ctx, verifying_key)
    }

    /**
     * Creates a mailbox factory bound to a verifier, a registry and a domain
     *
     * Access Control: Anyone
     */
    pub fn initialize_factory(ctx: Context<InitializeFactory>, domain: String) -> Result<()> {
        handle_initialize_factory(ctx, domain)
    }

    /**
     * Creates a packet ledger on top of a factory
     *
     * @param claim_scope - Per-packet or global identity uniqueness
     *
     * Access Control: Anyone
     */
    pub fn initialize_ledger(ctx: Context<InitializeLedger>, claim_scope: ClaimScope) -> Result<()> {
        handle_initialize_ledger(ctx, claim_scope)
    }

    /**
     * Creates a packet funded with native lamports
     *
     * Access Control: Anyone; the signer becomes the creator
     */
    pub fn create_native_packet(
        ctx: Context<CreateNativePacket>,
        params: CreatePacketParams,
    ) -> Result<()> {
        handle_create_native_packet(ctx, params)
    }

    /**
     * Creates a packet funded with an SPL Token / Token 2022 mint
     *
     * Access Control: Anyone; the signer becomes the creator
     */
    pub fn create_token_packet(
        ctx: Context<CreateTokenPacket>,
        params: CreatePacketParams,
    ) -> Result<()> {
        handle_create_token_packet(ctx, params)
    }

    /**
     * Claims one share with an email identity proof
     *
     * @param proof - Groth16 proof
     * @param signals - [domain_key_commitment, identity_salt, destination_commitment]
     * @param route - Direct recipient or precomputed identity mailbox
     *
     * Access Control: Any holder of a valid proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        proof: Groth16Proof,
        signals: PublicSignals,
        route: ClaimRoute,
    ) -> Result<()> {
        handle_claim(ctx, proof, signals, route)
    }

    /**
     * Returns the remainder of an expired packet to its creator
     *
     * Access Control: Creator only
     */
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        handle_refund(ctx)
    }

    /**
     * Read-only view of a packet and of one identity's claim on it
     */
    pub fn check_availability(
        ctx: Context<CheckAvailability>,
        identity_salt: [u8; 32],
    ) -> Result<Availability> {
        handle_check_availability(ctx, identity_salt)
    }

    /**
     * Closes a settled packet and its vault, returning rent to the creator
     *
     * Access Control: Creator only
     */
    pub fn close_packet(ctx: Context<ClosePacket>) -> Result<()> {
        handle_close_packet(ctx)
    }

    /**
     * Deploys the identity mailbox of a salt at its precomputed address
     *
     * Access Control: Anyone
     */
    pub fn deploy_mailbox(ctx: Context<DeployMailbox>, salt: [u8; 32]) -> Result<()> {
        handle_deploy_mailbox(ctx, salt)
    }

    /**
     * Withdraws a mailbox's balance of one asset with an identity proof
     *
     * @param asset_address - Token mint, or the default key for lamports
     *
     * Access Control: Any holder of a valid proof for the mailbox identity
     */
    pub fn withdraw_mailbox(
        ctx: Context<WithdrawMailbox>,
        asset_address: Pubkey,
        proof: Groth16Proof,
        signals: PublicSignals,
    ) -> Result<()> {
        handle_withdraw_mailbox(ctx, asset_address, proof, signals)
    }
}
