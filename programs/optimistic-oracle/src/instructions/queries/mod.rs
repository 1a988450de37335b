pub mod read_assertion;

pub use read_assertion::*;
