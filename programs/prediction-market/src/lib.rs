use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;

declare_id!("CX2MiSBcJtZz8Rcxcab8qC6CX6SjR8BUGFR8q9YCu2Us");

#[program]
pub mod prediction_market {
    use super::*;

    pub fn propose_claim(
        ctx: Context<ProposeClaim>,
        claim_id: [u8; 32],
        prediction: String,
        start_time: i64,
        end_time: i64,
        stake: u64,
    ) -> Result<()> {
        instructions::claim::propose_claim::process_propose_claim(ctx, claim_id, prediction, start_time, end_time, stake)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, claim_is_true: bool, amount: u64) -> Result<()> {
        instructions::betting::place_bet::process_place_bet(ctx, claim_is_true, amount)
    }

    pub fn close_market_and_assert_outcome(ctx: Context<CloseMarketAndAssertOutcome>, bond: u64) -> Result<()> {
        instructions::resolution::close_market::process_close_market_and_assert_outcome(ctx, bond)
    }

    pub fn finalise_outcome<'info>(
        ctx: Context<'_, '_, 'info, 'info, FinaliseOutcome<'info>>,
    ) -> Result<()> {
        instructions::resolution::finalise_outcome::process_finalise_outcome(ctx)
    }
}
