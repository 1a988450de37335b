use anchor_lang::prelude::*;
use optimistic_oracle::state::{statement_id_of, Assertion};
use crate::constants::{MAX_BETS, MAX_PREDICTION_LEN, MIN_BET, MIN_PROPOSAL_STAKE};
use crate::errors::MarketError;

#[account]
pub struct Claim {
    pub claim_id: [u8; 32],         // sha256(prediction), shared with the oracle record
    pub prediction: String,         // max 256 chars
    pub proposer: Pubkey,
    pub collateral_mint: Pubkey,
    pub vault: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub finalising: bool,
    pub resolved: bool,
    pub voided: bool,               // settled by refund, oracle outcome ignored
    pub outcome: bool,              // meaningful once resolved and not voided
    pub assertion: Option<Pubkey>,  // oracle record linked at close
    pub bets: Vec<Bet>,             // insertion order, max 64
    pub pool_true: u64,
    pub pool_false: u64,
    pub resolved_at: Option<i64>,
    pub bump: u8,
    pub vault_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bet {
    pub bettor: Pubkey,
    pub amount: u64,
    pub claim_is_true: bool,
}

impl Bet {
    pub const LEN: usize = 32 + 8 + 1;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClaimPhase {
    Open,
    Betting,
    BettingClosed,
    AwaitingResolution,
    Resolved,
}

/// What close does with an oracle record that already exists for the claim text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExistingAssertion {
    /// Asserted after betting closed, so it can settle the claim.
    Adopt,
    /// Asserted while bets were still being taken. The claim is refunded.
    Void,
}

impl Claim {
    // 8 (discriminator)
    // 32 (claim_id) + 4 + 256 (prediction)
    // 32 (proposer) + 32 (collateral_mint) + 32 (vault)
    // 8 (start) + 8 (end)
    // 1 (finalising) + 1 (resolved) + 1 (voided) + 1 (outcome)
    // 1+32 (assertion option)
    // 4 + 41 * 64 (bets)
    // 8 (pool_true) + 8 (pool_false)
    // 1+8 (resolved_at option)
    // 1 (bump) + 1 (vault_bump)
    pub const LEN: usize = 8 + 32 + (4 + MAX_PREDICTION_LEN) + 32 * 3 + 8 * 2 + 1 + 1 + 1 + 1 + 33 + (4 + Bet::LEN * MAX_BETS) + 8 * 2 + 9 + 1 + 1;

    #[allow(clippy::too_many_arguments)]
    pub fn propose(
        &mut self,
        claim_id: [u8; 32],
        prediction: String,
        proposer: Pubkey,
        collateral_mint: Pubkey,
        vault: Pubkey,
        start_time: i64,
        end_time: i64,
        stake: u64,
        now: i64,
    ) -> Result<()> {
        require!(prediction.len() <= MAX_PREDICTION_LEN, MarketError::PredictionTooLong);
        require!(statement_id_of(&prediction) == claim_id, MarketError::StatementMismatch);
        require!(start_time < end_time, MarketError::InvalidTimestamps);
        require!(now < end_time, MarketError::InvalidTimestamps);
        require!(stake >= MIN_PROPOSAL_STAKE, MarketError::InsufficientStake);

        self.claim_id = claim_id;
        self.prediction = prediction;
        self.proposer = proposer;
        self.collateral_mint = collateral_mint;
        self.vault = vault;
        self.start_time = start_time;
        self.end_time = end_time;
        self.finalising = false;
        self.resolved = false;
        self.voided = false;
        self.outcome = false;
        self.assertion = None;
        // The proposer's stake is the first bet on `true`
        self.bets = vec![Bet { bettor: proposer, amount: stake, claim_is_true: true }];
        self.pool_true = stake;
        self.pool_false = 0;
        self.resolved_at = None;
        Ok(())
    }

    pub fn phase(&self, now: i64) -> ClaimPhase {
        if self.resolved {
            ClaimPhase::Resolved
        } else if self.finalising {
            ClaimPhase::AwaitingResolution
        } else if now < self.start_time {
            ClaimPhase::Open
        } else if now < self.end_time {
            ClaimPhase::Betting
        } else {
            ClaimPhase::BettingClosed
        }
    }

    pub fn total_pool(&self) -> Option<u64> {
        self.pool_true.checked_add(self.pool_false)
    }

    pub fn record_bet(&mut self, bettor: Pubkey, amount: u64, claim_is_true: bool, now: i64) -> Result<()> {
        require!(self.phase(now) == ClaimPhase::Betting, MarketError::StaleTransition);
        require!(amount >= MIN_BET, MarketError::InsufficientStake);
        require!(self.bets.len() < MAX_BETS, MarketError::TooManyBets);

        self.total_pool()
            .and_then(|total| total.checked_add(amount))
            .ok_or(MarketError::MathOverflow)?;

        let pool = if claim_is_true { &mut self.pool_true } else { &mut self.pool_false };
        *pool = pool.checked_add(amount).ok_or(MarketError::MathOverflow)?;

        self.bets.push(Bet { bettor, amount, claim_is_true });
        Ok(())
    }

    pub fn ensure_closable(&self, now: i64) -> Result<()> {
        require!(!self.resolved, MarketError::AlreadyResolved);
        require!(!self.finalising, MarketError::StaleTransition);
        require!(now > self.end_time, MarketError::WindowNotElapsed);
        Ok(())
    }

    pub fn begin_finalising(&mut self, assertion: Pubkey, now: i64) -> Result<()> {
        self.ensure_closable(now)?;
        self.finalising = true;
        self.assertion = Some(assertion);
        Ok(())
    }

    pub fn check_existing_assertion(&self, existing: &Assertion) -> Result<ExistingAssertion> {
        require!(existing.statement_id == self.claim_id, MarketError::AssertionMismatch);
        if existing.asserted_at > self.end_time {
            Ok(ExistingAssertion::Adopt)
        } else {
            Ok(ExistingAssertion::Void)
        }
    }

    /// Closes the market without an oracle outcome; every bet is refunded on finalise.
    pub fn void(&mut self, assertion: Pubkey, now: i64) -> Result<()> {
        self.begin_finalising(assertion, now)?;
        self.voided = true;
        Ok(())
    }

    /// One payout account per bet, in bet order.
    pub fn ensure_payout_accounts(&self, supplied: usize) -> Result<()> {
        require!(supplied == self.bets.len(), MarketError::PayoutAccountMismatch);
        Ok(())
    }

    pub fn resolve(&mut self, outcome: bool, now: i64) -> Result<()> {
        require!(!self.resolved, MarketError::AlreadyResolved);
        require!(self.finalising, MarketError::StaleTransition);
        require!(now > self.end_time, MarketError::WindowNotElapsed);

        self.finalising = false;
        self.resolved = true;
        self.outcome = outcome;
        self.resolved_at = Some(now);
        Ok(())
    }
}
