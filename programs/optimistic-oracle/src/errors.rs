use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("Assertion not found")]
    NotFound,
    #[msg("Assertion already finalised")]
    AlreadyFinalized,
    #[msg("Assertion is not finalised yet")]
    NotFinalised,
    #[msg("Challenge window is still open")]
    WindowStillOpen,
    #[msg("Challenge window has closed")]
    WindowClosed,
    #[msg("Payment below required bond")]
    InsufficientStake,
    #[msg("Operation not allowed in the current assertion state")]
    StaleTransition,
    #[msg("Value transfer failed")]
    TransferFailed,
    #[msg("Statement too long (max 256)")]
    StatementTooLong,
    #[msg("Statement does not hash to the supplied id")]
    StatementMismatch,
    #[msg("Maximum number of disputers reached")]
    TooManyDisputers,
    #[msg("Payout account does not match the recorded party")]
    PayoutAccountMismatch,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
