pub mod claim;
pub mod betting;
pub mod resolution;

pub use claim::*;
pub use betting::*;
pub use resolution::*;
