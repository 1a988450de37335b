use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use optimistic_oracle::views;
use crate::constants::{CLAIM_SEED, VAULT_SEED};
use crate::state::Claim;
use crate::events::{ClaimResolved, WinningsPaid};
use crate::errors::MarketError;
use crate::utils::math::{check_payout_target, plan_payouts};

#[derive(Accounts)]
pub struct FinaliseOutcome<'info> {
    #[account(
        mut,
        seeds = [CLAIM_SEED, claim.claim_id.as_ref()],
        bump = claim.bump,
    )]
    pub claim: Box<Account<'info, Claim>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, claim.key().as_ref()],
        bump = claim.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: Read through the oracle's views; must be the record linked at close.
    /// Not read when the claim was voided.
    #[account(
        constraint = claim.assertion == Some(assertion.key()) @ MarketError::AssertionMismatch
    )]
    pub assertion: UncheckedAccount<'info>,

    pub resolver: Signer<'info>,

    pub token_program: Program<'info, Token>,
    // remaining_accounts: one collateral token account per bet, in bet order
}

pub fn process_finalise_outcome<'info>(
    ctx: Context<'_, '_, 'info, 'info, FinaliseOutcome<'info>>,
) -> Result<()> {
    let claim = &mut ctx.accounts.claim;
    let payout_accounts = ctx.remaining_accounts;
    let clock = Clock::get()?;

    // Oracle must have settled the statement, unless the claim is being refunded
    let outcome = if claim.voided {
        false
    } else {
        let record = views::load(&ctx.accounts.assertion.to_account_info())?;
        views::resolved_outcome(&record)?
    };

    claim.ensure_payout_accounts(payout_accounts.len())?;

    claim.resolve(outcome, clock.unix_timestamp)?;
    let plan = plan_payouts(claim, outcome)?;
    if claim.voided {
        msg!("Claim voided, refunding {} bets", plan.payouts.len());
    } else if plan.refunded {
        msg!("No stake on the winning side, refunding {} bets", plan.payouts.len());
    }

    // Claim PDA is the vault authority
    let claim_id = claim.claim_id;
    let bump = [claim.bump];
    let seeds: &[&[u8]] = &[CLAIM_SEED, claim_id.as_ref(), &bump];
    let signer = &[seeds];

    for winnings in &plan.payouts {
        let destination = &payout_accounts[winnings.bet_index];
        let account = TokenAccount::try_deserialize(&mut &destination.data.borrow()[..])?;
        check_payout_target(claim, winnings, account.owner, account.mint)?;

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: destination.clone(),
                    authority: claim.to_account_info(),
                },
                signer,
            ),
            winnings.amount,
        )?;

        emit!(WinningsPaid {
            claim_id,
            bettor: winnings.bettor,
            bet_index: winnings.bet_index as u8,
            amount: winnings.amount,
        });
    }

    emit!(ClaimResolved {
        claim_id,
        outcome,
        total_pool: claim.total_pool().ok_or(MarketError::MathOverflow)?,
        total_paid: plan.total_paid(),
        refunded: plan.refunded,
        voided: claim.voided,
    });

    Ok(())
}
