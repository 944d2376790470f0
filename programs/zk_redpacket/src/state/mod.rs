pub mod ledger_state;
pub mod packet_state;
pub mod claim_state;
pub mod mailbox_state;
pub mod registry_state;
pub mod verifier_state;

pub use ledger_state::*;
pub use packet_state::*;
pub use claim_state::*;
pub use mailbox_state::*;
pub use registry_state::*;
pub use verifier_state::*;
