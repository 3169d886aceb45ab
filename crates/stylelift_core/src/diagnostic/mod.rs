mod diagnostic;
mod location;
mod reporter;
mod suggested_fix;

pub use self::diagnostic::*;
pub use self::location::*;
pub use self::reporter::*;
pub use self::suggested_fix::*;
