use anchor_lang::prelude::*;
use optimistic_oracle::constants::ASSERTION_SEED;
use optimistic_oracle::cpi::accounts::MakeAssertion;
use optimistic_oracle::program::OptimisticOracle;
use optimistic_oracle::views;
use crate::constants::CLAIM_SEED;
use crate::state::{Claim, ExistingAssertion};
use crate::events::MarketClosed;

#[derive(Accounts)]
pub struct CloseMarketAndAssertOutcome<'info> {
    #[account(
        mut,
        seeds = [CLAIM_SEED, claim.claim_id.as_ref()],
        bump = claim.bump,
    )]
    pub claim: Box<Account<'info, Claim>>,

    /// CHECK: Oracle record for the claim text; created through CPI below,
    /// or adopted / treated as void when it already exists. Address pinned by
    /// the oracle's seeds.
    #[account(
        mut,
        seeds = [ASSERTION_SEED, claim.claim_id.as_ref()],
        bump,
        seeds::program = optimistic_oracle::ID,
    )]
    pub assertion: UncheckedAccount<'info>,

    /// Becomes the asserter and posts the oracle bond
    #[account(mut)]
    pub closer: Signer<'info>,

    pub oracle_program: Program<'info, OptimisticOracle>,
    pub system_program: Program<'info, System>,
}

pub fn process_close_market_and_assert_outcome(
    ctx: Context<CloseMarketAndAssertOutcome>,
    bond: u64,
) -> Result<()> {
    let claim = &mut ctx.accounts.claim;
    let clock = Clock::get()?;
    let assertion_info = ctx.accounts.assertion.to_account_info();

    // Guards
    claim.ensure_closable(clock.unix_timestamp)?;

    let mut adopted = false;
    let mut voided = false;
    if views::has_assertion(&assertion_info) {
        let existing = views::load(&assertion_info)?;
        match claim.check_existing_assertion(&existing)? {
            ExistingAssertion::Adopt => {
                msg!("Adopting existing assertion {}", assertion_info.key());
                adopted = true;
            }
            ExistingAssertion::Void => {
                msg!("Assertion {} predates close, claim will be refunded", assertion_info.key());
                voided = true;
            }
        }
    } else {
        optimistic_oracle::cpi::make_assertion(
            CpiContext::new(
                ctx.accounts.oracle_program.to_account_info(),
                MakeAssertion {
                    assertion: assertion_info.clone(),
                    asserter: ctx.accounts.closer.to_account_info(),
                    system_program: ctx.accounts.system_program.to_account_info(),
                },
            ),
            claim.claim_id,
            claim.prediction.clone(),
            bond,
        )?;
    }

    if voided {
        claim.void(assertion_info.key(), clock.unix_timestamp)?;
    } else {
        claim.begin_finalising(assertion_info.key(), clock.unix_timestamp)?;
    }

    emit!(MarketClosed {
        claim_id: claim.claim_id,
        closer: ctx.accounts.closer.key(),
        assertion: assertion_info.key(),
        adopted,
        voided,
    });

    Ok(())
}
