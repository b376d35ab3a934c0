use anchor_lang::prelude::*;

use super::RandomnessPort;
use crate::events::RandomWordsRequested;
use crate::state::{RandomnessParams, RandomnessQueue};

/// Requests randomness from an off-chain VRF coordinator.
///
/// The request is an event: the coordinator indexes `RandomWordsRequested`,
/// waits `request_confirmations` slots and answers with a signed
/// `fulfill_random_words` carrying the same identifier.
pub struct CoordinatorPort<'a> {
    queue: &'a mut RandomnessQueue,
    lottery: Pubkey,
}

impl<'a> CoordinatorPort<'a> {
    pub fn new(queue: &'a mut RandomnessQueue, lottery: Pubkey) -> Self {
        Self { queue, lottery }
    }
}

impl RandomnessPort for CoordinatorPort<'_> {
    fn request(&mut self, params: &RandomnessParams) -> Result<u64> {
        let request_id = self.queue.issue()?;

        emit!(RandomWordsRequested {
            request_id,
            lottery: self.lottery,
            params: params.clone(),
        });

        msg!(
            "Requested {} random word(s), request id {}, coordinator {}",
            params.num_words,
            request_id,
            self.queue.coordinator
        );

        Ok(request_id)
    }
}
