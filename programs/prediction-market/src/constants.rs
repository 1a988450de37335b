pub const CLAIM_SEED: &[u8] = b"claim";
pub const VAULT_SEED: &[u8] = b"vault";

// Amounts are in base units of the claim's collateral mint
pub const MIN_PROPOSAL_STAKE: u64 = 100;
pub const MIN_BET: u64 = 10;

pub const MAX_BETS: usize = 64;

/// A claim is asserted verbatim on the oracle, so it shares the statement cap.
pub const MAX_PREDICTION_LEN: usize = optimistic_oracle::constants::MAX_STATEMENT_LEN;
