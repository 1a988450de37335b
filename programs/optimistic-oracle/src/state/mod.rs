pub mod assertion;

pub use assertion::*;
