use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{CLAIM_SEED, VAULT_SEED};
use crate::state::Claim;
use crate::events::BetPlaced;
use crate::errors::MarketError;

#[derive(Accounts)]
pub struct PlaceBet<'info> {
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

    #[account(
        mut,
        constraint = bettor_ata.mint == claim.collateral_mint @ MarketError::InvalidMint,
        constraint = bettor_ata.owner == bettor.key() @ MarketError::PayoutAccountMismatch,
    )]
    pub bettor_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_place_bet(ctx: Context<PlaceBet>, claim_is_true: bool, amount: u64) -> Result<()> {
    let claim = &mut ctx.accounts.claim;
    let clock = Clock::get()?;
    let bettor = ctx.accounts.bettor.key();

    // Guards + pool update
    claim.record_bet(bettor, amount, claim_is_true, clock.unix_timestamp)?;

    // Bettor -> Vault
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.bettor_ata.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.bettor.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(BetPlaced {
        claim_id: claim.claim_id,
        bettor,
        claim_is_true,
        amount,
        new_pool_true: claim.pool_true,
        new_pool_false: claim.pool_false,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
