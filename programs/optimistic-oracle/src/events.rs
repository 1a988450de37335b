use anchor_lang::prelude::*;

#[event]
pub struct AssertionMade {
    pub statement_id: [u8; 32],
    pub asserter: Pubkey,
    pub bond: u64,
    pub due: i64,
}

#[event]
pub struct AssertionChallenged {
    pub statement_id: [u8; 32],
    pub disputer: Pubkey,
    pub dispute_index: u8,
    pub bond: u64,
    pub outcome: bool,
    pub due: i64,
}

#[event]
pub struct AssertionFinalised {
    pub statement_id: [u8; 32],
    pub finaliser: Pubkey,
    pub outcome: bool,
    pub disputes: u8,
    pub total_paid: u64,
    pub retained: u64,
    pub timestamp: i64,
}

#[event]
pub struct BondPaid {
    pub statement_id: [u8; 32],
    pub recipient: Pubkey,
    pub amount: u64,
}
