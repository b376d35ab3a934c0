// Events are the only history of past rounds: the lottery account keeps the
// latest winner alone and clears its entrants on every payout.

use anchor_lang::prelude::*;

use crate::state::RandomnessParams;

/// A paid entry was accepted.
#[event]
pub struct LotteryEntered {
    pub participant: Pubkey,
    pub amount: u64,
    pub entrant_count: u32,
}

/// The lottery moved to drawing and is waiting for `request_id`.
#[event]
pub struct DrawRequested {
    pub request_id: u64,
    pub entrant_count: u32,
    pub pot: u64,
}

/// Emitted by the coordinator adapter. The off-chain coordinator answers it
/// with `fulfill_random_words`.
#[event]
pub struct RandomWordsRequested {
    pub request_id: u64,
    pub lottery: Pubkey,
    pub params: RandomnessParams,
}

/// A stale request was replaced by a fresh one.
#[event]
pub struct DrawReissued {
    pub previous_request_id: u64,
    pub request_id: u64,
}

/// Round settled and the pot was paid out.
#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub prize: u64,
    pub request_id: u64,
    pub round: u64,
}
