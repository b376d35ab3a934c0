use anchor_lang::prelude::*;
use solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the singleton lottery PDA.
#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Seed of the randomness request ledger PDA.
#[constant]
pub const QUEUE_SEED: &[u8] = b"randomness_queue";

/// Random words requested per draw. Only the first one picks the winner.
#[constant]
pub const NUM_WORDS: u32 = 1;

/// Upper bound on entries per round, sized so the lottery account stays
/// well under the 10KiB limit for accounts created through CPI.
pub const MAX_ENTRANTS: usize = 200;

/// First identifier handed out by the request ledger. Zero is never issued.
pub const FIRST_REQUEST_ID: u64 = 1;

/// Suggested entrance fee for clients that do not pick one (0.01 SOL).
#[constant]
pub const DEFAULT_ENTRANCE_FEE: u64 = LAMPORTS_PER_SOL / 100;

/// Suggested draw interval in seconds.
#[constant]
pub const DEFAULT_INTERVAL_SECONDS: i64 = 30;

/// Suggested age in seconds after which an unanswered request may be re-issued.
#[constant]
pub const DEFAULT_DRAW_TIMEOUT_SECONDS: i64 = 60 * 60;

/// Suggested compute budget for the oracle's fulfillment transaction.
#[constant]
pub const DEFAULT_CALLBACK_COMPUTE_UNITS: u32 = 500_000;

/// Suggested confirmation depth before the oracle answers.
#[constant]
pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;
