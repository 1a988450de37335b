use anchor_lang::prelude::*;
use crate::constants::{BPS_DENOMINATOR, FINALISER_BONUS_BPS};
use crate::errors::OracleError;
use crate::state::Assertion;
use crate::utils::escalation::{implied_vote, required_dispute_bond};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Settlement {
    pub payouts: Vec<Payout>,
    /// Rounding remainder left in the assertion account.
    pub retained: u64,
}

impl Settlement {
    pub fn total_paid(&self) -> u64 {
        self.payouts.iter().map(|p| p.amount).sum()
    }
}

struct Stake {
    party: Pubkey,
    vote: bool,
    amount: u64,
}

pub fn finaliser_bonus(bond: u64) -> Option<u64> {
    let bonus = (bond as u128)
        .checked_mul(FINALISER_BONUS_BPS as u128)?
        .checked_div(BPS_DENOMINATOR as u128)?;
    u64::try_from(bonus).ok()
}

/// Works out who gets paid once `assertion` is finalised by `finaliser`.
///
/// The asserter's stake (bond less the finaliser bonus) backs `true`; each
/// disputer backs its implied vote with the bond it posted. Every stake on the
/// winning side is returned with a share of the losing side proportional to
/// its size. The finaliser bonus is listed first, then the winning stakes in
/// record order (asserter, then disputers by challenge index).
pub fn plan_settlement(assertion: &Assertion, finaliser: &Pubkey) -> Result<Settlement> {
    let bonus = if *finaliser == assertion.asserter {
        0
    } else {
        finaliser_bonus(assertion.bond).ok_or(OracleError::MathOverflow)?
    };
    let asserter_stake = assertion.bond.checked_sub(bonus).ok_or(OracleError::MathOverflow)?;

    let mut stakes = Vec::with_capacity(assertion.disputers.len() + 1);
    stakes.push(Stake { party: assertion.asserter, vote: true, amount: asserter_stake });
    for (index, disputer) in assertion.disputers.iter().enumerate() {
        let amount = required_dispute_bond(assertion.bond, index).ok_or(OracleError::MathOverflow)?;
        stakes.push(Stake { party: *disputer, vote: implied_vote(index), amount });
    }

    let mut winning_total: u128 = 0;
    let mut losing_total: u128 = 0;
    for stake in &stakes {
        let side = if stake.vote == assertion.outcome { &mut winning_total } else { &mut losing_total };
        *side = side.checked_add(stake.amount as u128).ok_or(OracleError::MathOverflow)?;
    }
    // The asserter backs `true` and the first disputer backs `false`, so the
    // standing outcome always has at least one stake behind it.
    require!(winning_total > 0, OracleError::StaleTransition);

    let mut payouts = Vec::with_capacity(stakes.len() + 1);
    if bonus > 0 {
        payouts.push(Payout { recipient: *finaliser, amount: bonus });
    }
    for stake in stakes.iter().filter(|s| s.vote == assertion.outcome) {
        let share = (stake.amount as u128)
            .checked_mul(losing_total)
            .and_then(|v| v.checked_div(winning_total))
            .and_then(|v| u64::try_from(v).ok())
            .ok_or(OracleError::MathOverflow)?;
        let amount = stake.amount.checked_add(share).ok_or(OracleError::MathOverflow)?;
        payouts.push(Payout { recipient: stake.party, amount });
    }

    let paid = payouts
        .iter()
        .try_fold(0u64, |acc, p| acc.checked_add(p.amount))
        .ok_or(OracleError::MathOverflow)?;
    let retained = assertion.escrowed.checked_sub(paid).ok_or(OracleError::TransferFailed)?;

    Ok(Settlement { payouts, retained })
}
