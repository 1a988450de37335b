//! Read-only queries over assertion records.
//!
//! Consumers such as the prediction market link against these helpers to
//! inspect an assertion account they were handed without going through CPI.

use anchor_lang::prelude::*;
use crate::errors::OracleError;
use crate::state::Assertion;

/// Deserializes an assertion account, failing with `NotFound` when the
/// account was never created by this program.
pub fn load(info: &AccountInfo) -> Result<Assertion> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return err!(OracleError::NotFound);
    }
    let data = info.try_borrow_data()?;
    Assertion::try_deserialize(&mut &data[..]).map_err(|_| error!(OracleError::NotFound))
}

pub fn has_assertion(info: &AccountInfo) -> bool {
    load(info).is_ok()
}

pub fn is_finalised(assertion: &Assertion) -> bool {
    assertion.finalised
}

pub fn resolved_outcome(assertion: &Assertion) -> Result<bool> {
    require!(assertion.finalised, OracleError::NotFinalised);
    Ok(assertion.outcome)
}

pub fn due_time(assertion: &Assertion) -> i64 {
    assertion.due
}
