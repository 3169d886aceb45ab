//! Types shared between stylelift rules and the hosts that run them
pub mod diagnostic;
mod fixes;

pub use self::diagnostic::*;
pub use self::fixes::*;
