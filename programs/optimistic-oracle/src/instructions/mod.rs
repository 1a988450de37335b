pub mod assertion;
pub mod queries;

pub use assertion::*;
pub use queries::*;
