use anchor_lang::prelude::*;
use crate::errors::MarketError;
use crate::state::Claim;

/// Share of the whole pool owed to a winning bet of `amount`.
pub fn pari_mutuel_payout(amount: u64, total_pool: u64, winning_pool: u64) -> Option<u64> {
    if winning_pool == 0 {
        return None;
    }
    let payout = (amount as u128)
        .checked_mul(total_pool as u128)?
        .checked_div(winning_pool as u128)?;
    u64::try_from(payout).ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Winnings {
    pub bet_index: usize,
    pub bettor: Pubkey,
    pub amount: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PayoutPlan {
    pub payouts: Vec<Winnings>,
    /// Every bet is returned at face value: the claim was voided or nobody
    /// backed the winning side.
    pub refunded: bool,
    /// Rounding remainder left in the vault.
    pub retained: u64,
}

impl PayoutPlan {
    pub fn total_paid(&self) -> u64 {
        self.payouts.iter().map(|w| w.amount).sum()
    }
}

pub fn plan_payouts(claim: &Claim, outcome: bool) -> Result<PayoutPlan> {
    let total_pool = claim.total_pool().ok_or(MarketError::MathOverflow)?;
    let winning_pool = if outcome { claim.pool_true } else { claim.pool_false };

    let refunded = claim.voided || winning_pool == 0;
    let mut payouts = Vec::with_capacity(claim.bets.len());
    for (bet_index, bet) in claim.bets.iter().enumerate() {
        let amount = if refunded {
            bet.amount
        } else if bet.claim_is_true == outcome {
            pari_mutuel_payout(bet.amount, total_pool, winning_pool).ok_or(MarketError::MathOverflow)?
        } else {
            continue;
        };
        payouts.push(Winnings { bet_index, bettor: bet.bettor, amount });
    }

    let paid = payouts
        .iter()
        .try_fold(0u64, |acc, w| acc.checked_add(w.amount))
        .ok_or(MarketError::MathOverflow)?;
    let retained = total_pool.checked_sub(paid).ok_or(MarketError::MathOverflow)?;

    Ok(PayoutPlan { payouts, refunded, retained })
}

/// Checks the token account supplied for `winnings` before anything is sent to it.
pub fn check_payout_target(claim: &Claim, winnings: &Winnings, owner: Pubkey, mint: Pubkey) -> Result<()> {
    require_keys_eq!(owner, winnings.bettor, MarketError::PayoutAccountMismatch);
    require_keys_eq!(mint, claim.collateral_mint, MarketError::InvalidMint);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use crate::state::claim::tests::{proposed, END, START};

    #[test]
    fn winner_takes_proportional_share() {
        assert_eq!(pari_mutuel_payout(30, 400, 300), Some(40));
        assert_eq!(pari_mutuel_payout(1, 3, 2), Some(1));
        assert_eq!(pari_mutuel_payout(10, 10, 0), None);
    }

    #[test]
    fn payout_does_not_overflow_on_large_pools() {
        assert_eq!(pari_mutuel_payout(u64::MAX / 2, u64::MAX, u64::MAX / 2), Some(u64::MAX));
    }

    #[test]
    fn only_winning_bets_are_paid() {
        // pool_true = 300, pool_false = 100
        let mut claim = proposed(270);
        let backer = Pubkey::new_unique();
        let doubter = Pubkey::new_unique();
        claim.record_bet(backer, 30, true, START).unwrap();
        claim.record_bet(doubter, 100, false, START).unwrap();

        let plan = plan_payouts(&claim, true).unwrap();
        assert!(!plan.refunded);
        assert_eq!(
            plan.payouts,
            vec![
                Winnings { bet_index: 0, bettor: claim.proposer, amount: 360 },
                Winnings { bet_index: 1, bettor: backer, amount: 40 },
            ]
        );
        assert_eq!(plan.retained, 0);
    }

    #[test]
    fn rounding_stays_in_vault() {
        let mut claim = proposed(100);
        for _ in 0..2 {
            claim.record_bet(Pubkey::new_unique(), 10, false, START).unwrap();
        }
        claim.record_bet(Pubkey::new_unique(), 11, false, START).unwrap();

        // total 131 split over a false pool of 31
        let plan = plan_payouts(&claim, false).unwrap();
        let amounts: Vec<u64> = plan.payouts.iter().map(|w| w.amount).collect();
        assert_eq!(amounts, vec![42, 42, 46]);
        assert_eq!(plan.retained, 1);
        assert_eq!(plan.total_paid() + plan.retained, claim.total_pool().unwrap());
    }

    #[test]
    fn empty_winning_side_refunds_everyone() {
        let mut claim = proposed(100);
        claim.record_bet(Pubkey::new_unique(), 25, true, START).unwrap();

        let plan = plan_payouts(&claim, false).unwrap();
        assert!(plan.refunded);
        let amounts: Vec<u64> = plan.payouts.iter().map(|w| w.amount).collect();
        assert_eq!(amounts, vec![100, 25]);
        assert_eq!(plan.retained, 0);
    }

    #[test]
    fn payouts_never_exceed_pool() {
        let mut claim = proposed(137);
        for (i, amount) in [13u64, 29, 71, 10, 58, 33].into_iter().enumerate() {
            claim.record_bet(Pubkey::new_unique(), amount, i % 3 == 0, START).unwrap();
        }
        for outcome in [true, false] {
            let plan = plan_payouts(&claim, outcome).unwrap();
            assert!(plan.total_paid() <= claim.total_pool().unwrap());
            assert_eq!(plan.total_paid() + plan.retained, claim.total_pool().unwrap());
        }
    }

    #[test]
    fn voided_claim_refunds_at_face_value() {
        let mut claim = proposed(100);
        let doubter = Pubkey::new_unique();
        claim.record_bet(doubter, 40, false, START).unwrap();
        claim.void(Pubkey::new_unique(), END + 1).unwrap();

        // the true side is funded, but a void ignores the outcome
        let plan = plan_payouts(&claim, true).unwrap();
        assert!(plan.refunded);
        assert_eq!(
            plan.payouts,
            vec![
                Winnings { bet_index: 0, bettor: claim.proposer, amount: 100 },
                Winnings { bet_index: 1, bettor: doubter, amount: 40 },
            ]
        );
        assert_eq!(plan.retained, 0);
    }

    #[test]
    fn payout_target_must_match_bettor_and_mint() {
        let claim = proposed(100);
        let winnings = Winnings { bet_index: 0, bettor: claim.proposer, amount: 100 };

        assert!(check_payout_target(&claim, &winnings, claim.proposer, claim.collateral_mint).is_ok());

        let err = check_payout_target(&claim, &winnings, Pubkey::new_unique(), claim.collateral_mint).unwrap_err();
        assert_eq!(err, Error::from(MarketError::PayoutAccountMismatch));

        let err = check_payout_target(&claim, &winnings, claim.proposer, Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, Error::from(MarketError::InvalidMint));
    }
}
