use anchor_lang::prelude::*;
use crate::errors::OracleError;

/// Moves lamports out of an account owned by this program.
pub fn transfer_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let debited = from.lamports().checked_sub(amount).ok_or(OracleError::TransferFailed)?;
    let credited = to.lamports().checked_add(amount).ok_or(OracleError::MathOverflow)?;

    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}
