pub mod initialize_registry;
pub mod set_key_commitment;
pub mod revoke_key_commitment;
pub mod initialize_verifier;
pub mod update_verifier;
pub mod initialize_factory;
pub mod initialize_ledger;
pub mod create_native_packet;
pub mod create_token_packet;
pub mod claim;
pub mod refund;
pub mod check_availability;
pub mod close_packet;
pub mod deploy_mailbox;
pub mod withdraw_mailbox;

pub use initialize_registry::*;
pub use set_key_commitment::*;
pub use revoke_key_commitment::*;
pub use initialize_verifier::*;
pub use update_verifier::*;
pub use initialize_factory::*;
pub use initialize_ledger::*;
pub use create_native_packet::*;
pub use create_token_packet::*;
pub use claim::*;
pub use refund::*;
pub use check_availability::*;
pub use close_packet::*;
pub use deploy_mailbox::*;
pub use withdraw_mailbox::*;
