use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::constants::ASSERTION_SEED;
use crate::state::Assertion;
use crate::events::AssertionMade;

#[derive(Accounts)]
#[instruction(statement_id: [u8; 32])]
pub struct MakeAssertion<'info> {
    // `init` fails if the statement was already asserted, so records are never overwritten
    #[account(
        init,
        seeds = [ASSERTION_SEED, statement_id.as_ref()],
        bump,
        payer = asserter,
        space = Assertion::LEN
    )]
    pub assertion: Account<'info, Assertion>,

    #[account(mut)]
    pub asserter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_make_assertion(
    ctx: Context<MakeAssertion>,
    statement_id: [u8; 32],
    statement: String,
    bond: u64,
) -> Result<()> {
    let assertion = &mut ctx.accounts.assertion;
    let clock = Clock::get()?;

    assertion.open(
        statement_id,
        statement,
        ctx.accounts.asserter.key(),
        bond,
        clock.unix_timestamp,
        ctx.bumps.assertion,
    )?;

    // Bond is held on top of the rent-exempt balance of the record itself
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.asserter.to_account_info(),
                to: assertion.to_account_info(),
            },
        ),
        bond,
    )?;

    emit!(AssertionMade {
        statement_id,
        asserter: assertion.asserter,
        bond,
        due: assertion.due,
    });

    Ok(())
}
