pub mod make_assertion;
pub mod challenge_assertion;
pub mod finalise_assertion;

pub use make_assertion::*;
pub use challenge_assertion::*;
pub use finalise_assertion::*;
