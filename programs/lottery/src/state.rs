use anchor_lang::prelude::*;

use crate::constants::MAX_ENTRANTS;

/// Parameters forwarded to the randomness provider with every request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct RandomnessParams {
    /// Key identifying the provider's proving key or feed.
    pub key_hash: [u8; 32],

    /// Subscription or billing account at the provider.
    pub subscription_id: u64,

    /// Compute budget the provider should attach to its fulfillment.
    pub callback_compute_units: u32,

    /// Confirmations the provider waits for before answering.
    pub request_confirmations: u16,

    /// Number of random words per request.
    pub num_words: u32,
}

/// Which oracle answers the lottery's randomness requests.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RandomnessProvider {
    /// An off-chain VRF coordinator that signs `fulfill_random_words`.
    Coordinator,
    /// A Switchboard on-demand randomness account committed before the trigger.
    Switchboard,
}

/// Settings fixed when the lottery is created.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct LotteryConfig {
    /// Minimum payment for one entry, in lamports.
    pub entrance_fee: u64,

    /// Seconds that must pass between draws.
    pub interval: i64,

    /// Seconds after which the authority may re-issue an unanswered request.
    pub draw_timeout: i64,

    pub randomness: RandomnessParams,

    pub provider: RandomnessProvider,
}

/// Discrete mode of the lottery. The pending request lives inside `Drawing`
/// so a second outstanding request cannot be represented.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Phase {
    Open,
    Drawing { request_id: u64 },
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Account that created the lottery. Only it may re-issue a stale request.
    pub authority: Pubkey,

    pub config: LotteryConfig,

    pub phase: Phase,

    /// One element per paid entry, in entry order. This order is the index
    /// space of the winner selection.
    #[max_len(MAX_ENTRANTS)]
    pub entrants: Vec<Pubkey>,

    /// Lamports collected since the last payout. Held by this account on top
    /// of its rent-exempt reserve.
    pub pot: u64,

    /// UNIX timestamp of creation or of the most recent completed draw.
    pub last_draw_timestamp: i64,

    /// UNIX timestamp of the pending request, `0` while open.
    pub draw_requested_at: i64,

    /// Winner of the most recent completed draw.
    pub recent_winner: Option<Pubkey>,

    /// Number of completed draws.
    pub round: u64,
}

/// Program-side ledger of the randomness port: who may answer, and which
/// identifier comes next.
#[account]
#[derive(InitSpace)]
pub struct RandomnessQueue {
    pub bump: u8,

    /// Signer allowed to deliver random words for the coordinator provider.
    pub coordinator: Pubkey,

    /// Identifier returned by the next request.
    pub next_request_id: u64,

    /// Switchboard account bound to the pending request, if any.
    pub bound_randomness_account: Option<Pubkey>,
}

/// Sub-conditions evaluated by the upkeep check, returned to keepers so they
/// can tell which one failed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub is_open: bool,
    pub interval_elapsed: bool,
    pub has_entrants: bool,
    pub has_balance: bool,
    pub pot: u64,
    pub entrant_count: u32,
    pub seconds_since_last_draw: i64,
}
