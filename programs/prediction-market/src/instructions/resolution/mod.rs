pub mod close_market;
pub mod finalise_outcome;

pub use close_market::*;
pub use finalise_outcome::*;
