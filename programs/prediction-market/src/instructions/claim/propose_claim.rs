use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, Mint, TokenAccount, Transfer};
use crate::constants::{CLAIM_SEED, VAULT_SEED};
use crate::state::Claim;
use crate::events::ClaimProposed;

#[derive(Accounts)]
#[instruction(claim_id: [u8; 32])] // claim_id = sha256(prediction), checked in the handler
pub struct ProposeClaim<'info> {
    #[account(
        init,
        seeds = [CLAIM_SEED, claim_id.as_ref()],
        bump,
        payer = proposer,
        space = Claim::LEN
    )]
    pub claim: Box<Account<'info, Claim>>,

    #[account(
        init,
        seeds = [VAULT_SEED, claim.key().as_ref()],
        bump,
        payer = proposer,
        token::mint = collateral_mint,
        token::authority = claim,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub proposer: Signer<'info>,

    /// Proposer's collateral token account, source of the opening stake
    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = proposer,
    )]
    pub proposer_ata: Account<'info, TokenAccount>,

    pub collateral_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn process_propose_claim(
    ctx: Context<ProposeClaim>,
    claim_id: [u8; 32],
    prediction: String,
    start_time: i64,
    end_time: i64,
    stake: u64,
) -> Result<()> {
    let claim = &mut ctx.accounts.claim;
    let clock = Clock::get()?;

    claim.propose(
        claim_id,
        prediction,
        ctx.accounts.proposer.key(),
        ctx.accounts.collateral_mint.key(),
        ctx.accounts.vault.key(),
        start_time,
        end_time,
        stake,
        clock.unix_timestamp,
    )?;
    claim.bump = ctx.bumps.claim;
    claim.vault_bump = ctx.bumps.vault;

    // Proposer -> Vault (opening stake on `true`)
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.proposer_ata.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.proposer.to_account_info(),
            },
        ),
        stake,
    )?;

    emit!(ClaimProposed {
        claim_id,
        proposer: claim.proposer,
        prediction: claim.prediction.clone(),
        start_time,
        end_time,
        stake,
    });

    Ok(())
}
