use anchor_lang::prelude::*;
use crate::constants::ASSERTION_SEED;
use crate::state::Assertion;
use crate::events::{AssertionFinalised, BondPaid};
use crate::errors::OracleError;
use crate::utils::lamports::transfer_lamports;
use crate::utils::settlement::plan_settlement;

#[derive(Accounts)]
pub struct FinaliseAssertion<'info> {
    #[account(
        mut,
        seeds = [ASSERTION_SEED, assertion.statement_id.as_ref()],
        bump = assertion.bump,
    )]
    pub assertion: Account<'info, Assertion>,

    /// CHECK: Receives the asserter's refund, pinned to the recorded asserter
    #[account(
        mut,
        address = assertion.asserter @ OracleError::PayoutAccountMismatch
    )]
    pub asserter: UncheckedAccount<'info>,

    #[account(mut)]
    pub finaliser: Signer<'info>,
    // remaining_accounts: every disputer, writable, in challenge order
}

pub fn process_finalise_assertion<'info>(
    ctx: Context<'_, '_, 'info, 'info, FinaliseAssertion<'info>>,
) -> Result<()> {
    let assertion = &mut ctx.accounts.assertion;
    let disputer_accounts = ctx.remaining_accounts;
    let finaliser = ctx.accounts.finaliser.key();
    let clock = Clock::get()?;

    // Guards
    require!(
        disputer_accounts.len() == assertion.disputers.len(),
        OracleError::PayoutAccountMismatch
    );
    for (info, disputer) in disputer_accounts.iter().zip(assertion.disputers.iter()) {
        require_keys_eq!(info.key(), *disputer, OracleError::PayoutAccountMismatch);
        require!(info.is_writable, OracleError::PayoutAccountMismatch);
    }

    // Terminal from here on
    assertion.mark_finalised(clock.unix_timestamp)?;

    let settlement = plan_settlement(assertion, &finaliser)?;
    let source = assertion.to_account_info();

    for payout in &settlement.payouts {
        let recipient = if payout.recipient == finaliser {
            ctx.accounts.finaliser.to_account_info()
        } else if payout.recipient == assertion.asserter {
            ctx.accounts.asserter.to_account_info()
        } else {
            disputer_accounts
                .iter()
                .find(|info| info.key() == payout.recipient)
                .cloned()
                .ok_or(OracleError::PayoutAccountMismatch)?
        };
        transfer_lamports(&source, &recipient, payout.amount)?;

        emit!(BondPaid {
            statement_id: assertion.statement_id,
            recipient: payout.recipient,
            amount: payout.amount,
        });
    }

    if settlement.retained > 0 {
        msg!("Assertion keeps {} lamports of rounding remainder", settlement.retained);
    }

    emit!(AssertionFinalised {
        statement_id: assertion.statement_id,
        finaliser,
        outcome: assertion.outcome,
        disputes: assertion.disputers.len() as u8,
        total_paid: settlement.total_paid(),
        retained: settlement.retained,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
