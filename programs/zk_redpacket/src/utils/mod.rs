pub mod address;
pub mod registry;
pub mod share;
pub mod signals;
pub mod token;
pub mod verifier;

pub use address::*;
pub use registry::*;
pub use signals::*;
pub use token::*;
pub use verifier::*;
