pub mod propose_claim;

pub use propose_claim::*;
