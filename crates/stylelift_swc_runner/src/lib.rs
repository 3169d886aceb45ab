pub mod runner;
pub mod test_utils;

pub use runner::{ParseError, SourceUnit};
