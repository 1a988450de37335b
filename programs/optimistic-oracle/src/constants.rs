pub const ASSERTION_SEED: &[u8] = b"assertion";

/// Smallest bond (lamports) accepted for a new assertion.
pub const MINIMUM_BOND: u64 = 100_000_000; // 0.1 SOL

/// Each challenge posts `bond * DISPUTE_MINIMUM_MULTIPLE * (k + 1)` where `k`
/// is the number of earlier challenges.
pub const DISPUTE_MINIMUM_MULTIPLE: u64 = 2;

/// Length of a challenge window in seconds.
pub const CHALLENGE_WINDOW: i64 = 86_400; // 1 day

/// Share of the asserter's bond paid to whoever finalises, in basis points.
pub const FINALISER_BONUS_BPS: u64 = 100; // 1%
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const MAX_STATEMENT_LEN: usize = 256;
pub const MAX_DISPUTERS: usize = 16;
