use crate::constants::DISPUTE_MINIMUM_MULTIPLE;

/// Bond the challenger following `prior_disputes` earlier challenges must post.
///
/// Grows linearly with the number of challenges: the first challenger posts
/// `bond * DISPUTE_MINIMUM_MULTIPLE`, the second twice that, and so on.
pub fn required_dispute_bond(asserter_bond: u64, prior_disputes: usize) -> Option<u64> {
    let step = (prior_disputes as u128).checked_add(1)?;
    let required = (asserter_bond as u128)
        .checked_mul(DISPUTE_MINIMUM_MULTIPLE as u128)?
        .checked_mul(step)?;
    u64::try_from(required).ok()
}

/// Outcome argued by the challenger at `index`.
///
/// The asserter argues `true`; the first challenger argues `false` and every
/// later challenger argues against the one right before them.
pub fn implied_vote(index: usize) -> bool {
    index % 2 == 1
}

/// Outcome standing after `disputes` challenges.
pub fn outcome_after(disputes: usize) -> bool {
    disputes % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_challenge_costs_a_multiple_of_the_bond() {
        assert_eq!(required_dispute_bond(1_000, 0), Some(2_000));
    }

    #[test]
    fn bond_grows_linearly() {
        let bonds: Vec<u64> = (0..4)
            .map(|k| required_dispute_bond(1_000, k).unwrap())
            .collect();
        assert_eq!(bonds, vec![2_000, 4_000, 6_000, 8_000]);
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(required_dispute_bond(u64::MAX, 0), None);
        assert_eq!(required_dispute_bond(u64::MAX / 4, 3), None);
    }

    #[test]
    fn votes_alternate_starting_false() {
        let votes: Vec<bool> = (0..3).map(implied_vote).collect();
        assert_eq!(votes, vec![false, true, false]);
    }

    #[test]
    fn last_challenger_always_holds_the_standing_outcome() {
        assert!(outcome_after(0));
        for disputes in 1..10 {
            assert_eq!(implied_vote(disputes - 1), outcome_after(disputes));
        }
    }
}
