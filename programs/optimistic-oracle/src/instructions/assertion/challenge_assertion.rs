use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::constants::ASSERTION_SEED;
use crate::state::Assertion;
use crate::events::AssertionChallenged;
use crate::errors::OracleError;

#[derive(Accounts)]
pub struct ChallengeAssertion<'info> {
    #[account(
        mut,
        seeds = [ASSERTION_SEED, assertion.statement_id.as_ref()],
        bump = assertion.bump,
    )]
    pub assertion: Account<'info, Assertion>,

    #[account(mut)]
    pub disputer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_challenge_assertion(ctx: Context<ChallengeAssertion>, max_bond: u64) -> Result<()> {
    let assertion = &mut ctx.accounts.assertion;
    let clock = Clock::get()?;

    // Guards
    assertion.ensure_challengeable(clock.unix_timestamp)?;
    let bond = assertion.next_dispute_bond()?;
    // max_bond protects the disputer from a challenge landing just before theirs
    require!(bond <= max_bond, OracleError::InsufficientStake);

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.disputer.to_account_info(),
                to: assertion.to_account_info(),
            },
        ),
        bond,
    )?;

    let disputer = ctx.accounts.disputer.key();
    let posted = assertion.record_challenge(disputer, clock.unix_timestamp)?;
    require!(posted == bond, OracleError::StaleTransition);

    emit!(AssertionChallenged {
        statement_id: assertion.statement_id,
        disputer,
        dispute_index: (assertion.disputers.len() - 1) as u8,
        bond,
        outcome: assertion.outcome,
        due: assertion.due,
    });

    Ok(())
}
