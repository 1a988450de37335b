use anchor_lang::prelude::*;
use crate::constants::ASSERTION_SEED;
use crate::views;

#[derive(Accounts)]
#[instruction(statement_id: [u8; 32])]
pub struct ReadAssertion<'info> {
    /// CHECK: May not exist; existence is part of what is being queried
    #[account(
        seeds = [ASSERTION_SEED, statement_id.as_ref()],
        bump,
    )]
    pub assertion: UncheckedAccount<'info>,
}

pub fn process_has_assertion(ctx: Context<ReadAssertion>, _statement_id: [u8; 32]) -> Result<bool> {
    Ok(views::has_assertion(&ctx.accounts.assertion.to_account_info()))
}

pub fn process_is_finalised(ctx: Context<ReadAssertion>, _statement_id: [u8; 32]) -> Result<bool> {
    let assertion = views::load(&ctx.accounts.assertion.to_account_info())?;
    Ok(views::is_finalised(&assertion))
}

pub fn process_resolved_outcome(ctx: Context<ReadAssertion>, _statement_id: [u8; 32]) -> Result<bool> {
    let assertion = views::load(&ctx.accounts.assertion.to_account_info())?;
    views::resolved_outcome(&assertion)
}

pub fn process_due_time(ctx: Context<ReadAssertion>, _statement_id: [u8; 32]) -> Result<i64> {
    let assertion = views::load(&ctx.accounts.assertion.to_account_info())?;
    Ok(views::due_time(&assertion))
}
