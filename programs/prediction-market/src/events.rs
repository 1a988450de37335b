use anchor_lang::prelude::*;

#[event]
pub struct ClaimProposed {
    pub claim_id: [u8; 32],
    pub proposer: Pubkey,
    pub prediction: String,
    pub start_time: i64,
    pub end_time: i64,
    pub stake: u64,
}

#[event]
pub struct BetPlaced {
    pub claim_id: [u8; 32],
    pub bettor: Pubkey,
    pub claim_is_true: bool,
    pub amount: u64,
    pub new_pool_true: u64,
    pub new_pool_false: u64,
    pub timestamp: i64,
}

#[event]
pub struct MarketClosed {
    pub claim_id: [u8; 32],
    pub closer: Pubkey,
    pub assertion: Pubkey,
    pub adopted: bool,
    pub voided: bool,
}

#[event]
pub struct ClaimResolved {
    pub claim_id: [u8; 32],
    pub outcome: bool,
    pub total_pool: u64,
    pub total_paid: u64,
    pub refunded: bool,
    pub voided: bool,
}

#[event]
pub struct WinningsPaid {
    pub claim_id: [u8; 32],
    pub bettor: Pubkey,
    pub bet_index: u8,
    pub amount: u64,
}
