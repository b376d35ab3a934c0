//! Seams between the lottery state machine and the outside world.
//!
//! The lottery never talks to an oracle or moves lamports itself. It asks a
//! [`RandomnessPort`] for a request identifier when a draw starts and hands
//! the prize to a [`PayoutSink`] when the draw settles.

use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::{RandomnessParams, RandomnessProvider, RandomnessQueue};

pub mod coordinator;
pub mod payout;
pub mod switchboard;

pub use coordinator::CoordinatorPort;
pub use payout::LamportPayout;
pub use switchboard::SwitchboardPort;

/// Outbound half of the randomness protocol. The inbound half is a separate
/// instruction carrying the returned identifier and the random words.
pub trait RandomnessPort {
    fn request(&mut self, params: &RandomnessParams) -> Result<u64>;
}

/// Destination of the prize when a draw settles.
pub trait PayoutSink {
    fn transfer(&mut self, winner: Pubkey, amount: u64) -> Result<()>;
}

/// Builds the adapter for the configured provider and hands it to `f`.
/// The Switchboard provider needs the freshly committed randomness account.
pub fn with_randomness_port<'info, T>(
    provider: RandomnessProvider,
    queue: &mut RandomnessQueue,
    lottery: Pubkey,
    randomness_account: Option<&AccountInfo<'info>>,
    clock: &Clock,
    f: impl FnOnce(&mut dyn RandomnessPort) -> Result<T>,
) -> Result<T> {
    match provider {
        RandomnessProvider::Coordinator => f(&mut CoordinatorPort::new(queue, lottery)),
        RandomnessProvider::Switchboard => {
            let randomness_account =
                randomness_account.ok_or(LotteryError::IncorrectRandomnessAccount)?;
            f(&mut SwitchboardPort::new(queue, randomness_account, clock))
        }
    }
}

impl RandomnessQueue {
    /// Hands out the next request identifier.
    pub fn issue(&mut self) -> Result<u64> {
        let request_id = self.next_request_id;
        self.next_request_id = request_id
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(request_id)
    }
}
