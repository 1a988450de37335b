pub mod escalation;
pub mod lamports;
pub mod settlement;
