use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Invalid timestamps")]
    InvalidTimestamps,
    #[msg("Betting period has not ended")]
    WindowNotElapsed,
    #[msg("Stake below minimum")]
    InsufficientStake,
    #[msg("Operation not allowed in the current claim state")]
    StaleTransition,
    #[msg("Claim already resolved")]
    AlreadyResolved,
    #[msg("Assertion does not belong to this claim")]
    AssertionMismatch,
    #[msg("Prediction too long (max 256)")]
    PredictionTooLong,
    #[msg("Prediction does not hash to the supplied id")]
    StatementMismatch,
    #[msg("Maximum number of bets reached")]
    TooManyBets,
    #[msg("Payout account does not match the recorded bettor")]
    PayoutAccountMismatch,
    #[msg("Token account mint does not match claim collateral")]
    InvalidMint,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
