use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;
pub mod views;

use instructions::*;

declare_id!("CvE4pygbpbHgmLpyMYbL4nPsY7h1wjHLFfunqiqUdNri");

#[program]
pub mod optimistic_oracle {
    use super::*;

    pub fn make_assertion(
        ctx: Context<MakeAssertion>,
        statement_id: [u8; 32],
        statement: String,
        bond: u64,
    ) -> Result<()> {
        instructions::assertion::make_assertion::process_make_assertion(ctx, statement_id, statement, bond)
    }

    pub fn challenge_assertion(ctx: Context<ChallengeAssertion>, max_bond: u64) -> Result<()> {
        instructions::assertion::challenge_assertion::process_challenge_assertion(ctx, max_bond)
    }

    pub fn finalise_assertion<'info>(
        ctx: Context<'_, '_, 'info, 'info, FinaliseAssertion<'info>>,
    ) -> Result<()> {
        instructions::assertion::finalise_assertion::process_finalise_assertion(ctx)
    }

    pub fn has_assertion(ctx: Context<ReadAssertion>, statement_id: [u8; 32]) -> Result<bool> {
        instructions::queries::read_assertion::process_has_assertion(ctx, statement_id)
    }

    pub fn is_finalised(ctx: Context<ReadAssertion>, statement_id: [u8; 32]) -> Result<bool> {
        instructions::queries::read_assertion::process_is_finalised(ctx, statement_id)
    }

    pub fn resolved_outcome(ctx: Context<ReadAssertion>, statement_id: [u8; 32]) -> Result<bool> {
        instructions::queries::read_assertion::process_resolved_outcome(ctx, statement_id)
    }

    pub fn due_time(ctx: Context<ReadAssertion>, statement_id: [u8; 32]) -> Result<i64> {
        instructions::queries::read_assertion::process_due_time(ctx, statement_id)
    }
}
