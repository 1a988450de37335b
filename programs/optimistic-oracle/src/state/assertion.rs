use anchor_lang::prelude::*;
use solana_sha256_hasher::hash;
use crate::constants::{CHALLENGE_WINDOW, MAX_DISPUTERS, MAX_STATEMENT_LEN, MINIMUM_BOND};
use crate::errors::OracleError;
use crate::utils::escalation;

#[account]
#[derive(Debug)]
pub struct Assertion {
    pub statement_id: [u8; 32],     // sha256(statement), PDA seed
    pub statement: String,          // max 256 chars
    pub asserter: Pubkey,
    pub bond: u64,
    pub escrowed: u64,              // asserter bond + every dispute bond
    pub due: i64,                   // close of the current challenge window
    pub disputers: Vec<Pubkey>,     // challenge order, max 16
    pub outcome: bool,
    pub finalised: bool,
    pub asserted_at: i64,
    pub finalised_at: Option<i64>,
    pub bump: u8,
}

impl Assertion {
    // 8 (discriminator)
    // 32 (statement_id) + 4 + 256 (statement)
    // 32 (asserter) + 8 (bond) + 8 (escrowed) + 8 (due)
    // 4 + 32 * 16 (disputers)
    // 1 (outcome) + 1 (finalised)
    // 8 (asserted_at) + 1+8 (finalised_at option)
    // 1 (bump)
    pub const LEN: usize = 8 + 32 + (4 + MAX_STATEMENT_LEN) + 32 + 8 * 3 + (4 + 32 * MAX_DISPUTERS) + 1 + 1 + 8 + 9 + 1;

    pub fn open(
        &mut self,
        statement_id: [u8; 32],
        statement: String,
        asserter: Pubkey,
        bond: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(statement.len() <= MAX_STATEMENT_LEN, OracleError::StatementTooLong);
        require!(statement_id_of(&statement) == statement_id, OracleError::StatementMismatch);
        require!(bond >= MINIMUM_BOND, OracleError::InsufficientStake);

        self.statement_id = statement_id;
        self.statement = statement;
        self.asserter = asserter;
        self.bond = bond;
        self.escrowed = bond;
        self.due = now.checked_add(CHALLENGE_WINDOW).ok_or(OracleError::MathOverflow)?;
        self.disputers = Vec::new();
        self.outcome = true;
        self.finalised = false;
        self.asserted_at = now;
        self.finalised_at = None;
        self.bump = bump;
        Ok(())
    }

    pub fn is_window_open(&self, now: i64) -> bool {
        now < self.due
    }

    pub fn ensure_challengeable(&self, now: i64) -> Result<()> {
        require!(!self.finalised, OracleError::AlreadyFinalized);
        require!(self.is_window_open(now), OracleError::WindowClosed);
        require!(self.disputers.len() < MAX_DISPUTERS, OracleError::TooManyDisputers);
        Ok(())
    }

    /// Bond the next challenger has to post.
    pub fn next_dispute_bond(&self) -> Result<u64> {
        escalation::required_dispute_bond(self.bond, self.disputers.len())
            .ok_or_else(|| error!(OracleError::MathOverflow))
    }

    /// Appends `disputer`, flips the outcome and re-opens the window.
    /// Returns the bond taken into custody for this challenge.
    pub fn record_challenge(&mut self, disputer: Pubkey, now: i64) -> Result<u64> {
        self.ensure_challengeable(now)?;
        let bond = self.next_dispute_bond()?;

        self.escrowed = self.escrowed.checked_add(bond).ok_or(OracleError::MathOverflow)?;
        self.disputers.push(disputer);
        self.outcome = !self.outcome;
        let extended = now.checked_add(CHALLENGE_WINDOW).ok_or(OracleError::MathOverflow)?;
        self.due = self.due.max(extended);
        Ok(bond)
    }

    pub fn mark_finalised(&mut self, now: i64) -> Result<()> {
        require!(!self.finalised, OracleError::AlreadyFinalized);
        require!(!self.is_window_open(now), OracleError::WindowStillOpen);

        self.finalised = true;
        self.finalised_at = Some(now);
        Ok(())
    }
}

/// Ledger key of a statement.
pub fn statement_id_of(statement: &str) -> [u8; 32] {
    hash(statement.as_bytes()).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const NOW: i64 = 1_700_000_000;
    const STATEMENT: &str = "ETH closed above 3000 USD on 2024-01-01";

    fn fresh(asserter: Pubkey) -> Assertion {
        let mut assertion = Assertion {
            statement_id: [0; 32],
            statement: String::new(),
            asserter: Pubkey::default(),
            bond: 0,
            escrowed: 0,
            due: 0,
            disputers: Vec::new(),
            outcome: false,
            finalised: false,
            asserted_at: 0,
            finalised_at: None,
            bump: 0,
        };
        assertion
            .open(statement_id_of(STATEMENT), STATEMENT.to_string(), asserter, MINIMUM_BOND, NOW, 254)
            .unwrap();
        assertion
    }

    #[test]
    fn open_sets_initial_state() {
        let asserter = Pubkey::new_unique();
        let assertion = fresh(asserter);

        assert_eq!(assertion.asserter, asserter);
        assert_eq!(assertion.bond, MINIMUM_BOND);
        assert_eq!(assertion.escrowed, MINIMUM_BOND);
        assert_eq!(assertion.due, NOW + CHALLENGE_WINDOW);
        assert!(assertion.outcome);
        assert!(!assertion.finalised);
        assert!(assertion.disputers.is_empty());
    }

    #[test]
    fn open_rejects_bond_below_minimum() {
        let asserter = Pubkey::new_unique();
        let mut assertion = fresh(asserter);
        let err = assertion
            .open(statement_id_of(STATEMENT), STATEMENT.to_string(), Pubkey::new_unique(), MINIMUM_BOND - 1, NOW + 60, 1)
            .unwrap_err();
        assert_eq!(err, Error::from(OracleError::InsufficientStake));

        // record untouched
        assert_eq!(assertion.asserter, asserter);
        assert_eq!(assertion.bond, MINIMUM_BOND);
        assert_eq!(assertion.escrowed, MINIMUM_BOND);
        assert_eq!(assertion.due, NOW + CHALLENGE_WINDOW);
        assert_eq!(assertion.asserted_at, NOW);
        assert_eq!(assertion.bump, 254);
    }

    #[test]
    fn open_rejects_mismatched_statement_id() {
        let mut assertion = fresh(Pubkey::new_unique());
        let err = assertion
            .open([7; 32], STATEMENT.to_string(), Pubkey::new_unique(), MINIMUM_BOND, NOW, 1)
            .unwrap_err();
        assert_eq!(err, Error::from(OracleError::StatementMismatch));
    }

    #[test]
    fn open_rejects_long_statement() {
        let mut assertion = fresh(Pubkey::new_unique());
        let long = "x".repeat(MAX_STATEMENT_LEN + 1);
        let err = assertion
            .open(statement_id_of(&long), long, Pubkey::new_unique(), MINIMUM_BOND, NOW, 1)
            .unwrap_err();
        assert_eq!(err, Error::from(OracleError::StatementTooLong));
    }

    #[test]
    fn challenge_flips_outcome_and_extends_window() {
        let mut assertion = fresh(Pubkey::new_unique());
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();

        let bond = assertion.record_challenge(first, NOW + 10).unwrap();
        assert_eq!(bond, MINIMUM_BOND * 2);
        assert!(!assertion.outcome);
        assert_eq!(assertion.due, NOW + 10 + CHALLENGE_WINDOW);

        let bond = assertion.record_challenge(second, NOW + 20).unwrap();
        assert_eq!(bond, MINIMUM_BOND * 4);
        assert!(assertion.outcome);
        assert_eq!(assertion.disputers, vec![first, second]);
        assert_eq!(assertion.escrowed, MINIMUM_BOND * 7);
    }

    #[test]
    fn due_never_decreases() {
        let mut assertion = fresh(Pubkey::new_unique());
        let mut last_due = assertion.due;
        for offset in [5, 5, 100, 3_600] {
            assertion.record_challenge(Pubkey::new_unique(), NOW + offset).unwrap();
            assert!(assertion.due >= last_due);
            last_due = assertion.due;
        }
    }

    #[test]
    fn challenge_after_window_is_rejected() {
        let mut assertion = fresh(Pubkey::new_unique());
        let err = assertion
            .record_challenge(Pubkey::new_unique(), NOW + CHALLENGE_WINDOW)
            .unwrap_err();
        assert_eq!(err, Error::from(OracleError::WindowClosed));
        assert!(assertion.disputers.is_empty());
        assert!(assertion.outcome);
    }

    #[test]
    fn challenge_is_capped() {
        let mut assertion = fresh(Pubkey::new_unique());
        for _ in 0..MAX_DISPUTERS {
            assertion.record_challenge(Pubkey::new_unique(), NOW + 1).unwrap();
        }
        let err = assertion.record_challenge(Pubkey::new_unique(), NOW + 1).unwrap_err();
        assert_eq!(err, Error::from(OracleError::TooManyDisputers));
    }

    #[test]
    fn finalise_waits_for_window() {
        let mut assertion = fresh(Pubkey::new_unique());
        let err = assertion.mark_finalised(NOW + CHALLENGE_WINDOW - 1).unwrap_err();
        assert_eq!(err, Error::from(OracleError::WindowStillOpen));
        assert!(!assertion.finalised);

        assertion.mark_finalised(NOW + CHALLENGE_WINDOW).unwrap();
        assert!(assertion.finalised);
        assert_eq!(assertion.finalised_at, Some(NOW + CHALLENGE_WINDOW));
    }

    #[test]
    fn finalise_only_once() {
        let mut assertion = fresh(Pubkey::new_unique());
        assertion.mark_finalised(NOW + CHALLENGE_WINDOW).unwrap();
        let err = assertion.mark_finalised(NOW + CHALLENGE_WINDOW + 1).unwrap_err();
        assert_eq!(err, Error::from(OracleError::AlreadyFinalized));
        assert_eq!(assertion.finalised_at, Some(NOW + CHALLENGE_WINDOW));
    }

    #[test]
    fn finalised_assertion_cannot_be_challenged() {
        let mut assertion = fresh(Pubkey::new_unique());
        assertion.mark_finalised(NOW + CHALLENGE_WINDOW).unwrap();
        let err = assertion.record_challenge(Pubkey::new_unique(), NOW).unwrap_err();
        assert_eq!(err, Error::from(OracleError::AlreadyFinalized));
    }
}
