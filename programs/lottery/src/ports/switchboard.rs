use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use super::RandomnessPort;
use crate::error::LotteryError;
use crate::state::{RandomnessParams, RandomnessQueue};

/// Binds a Switchboard on-demand randomness account to the draw.
///
/// The keeper commits the randomness account in the slot before the trigger.
/// The account key is stored in the queue and is the only source accepted
/// when the draw is revealed.
pub struct SwitchboardPort<'a, 'info> {
    queue: &'a mut RandomnessQueue,
    randomness_account: &'a AccountInfo<'info>,
    clock: &'a Clock,
}

impl<'a, 'info> SwitchboardPort<'a, 'info> {
    pub fn new(
        queue: &'a mut RandomnessQueue,
        randomness_account: &'a AccountInfo<'info>,
        clock: &'a Clock,
    ) -> Self {
        Self {
            queue,
            randomness_account,
            clock,
        }
    }
}

impl RandomnessPort for SwitchboardPort<'_, '_> {
    fn request(&mut self, _params: &RandomnessParams) -> Result<u64> {
        let seed_slot = RandomnessAccountData::parse(self.randomness_account.data.borrow())
            .map_err(|_| LotteryError::IncorrectRandomnessAccount)?
            .seed_slot;

        // a commit from any earlier slot may already be revealed
        if seed_slot != self.clock.slot.saturating_sub(1) {
            msg!("Seed slot: {}", seed_slot);
            msg!("Current slot: {}", self.clock.slot);
            return err!(LotteryError::RandomnessAlreadyRevealed);
        }

        let request_id = self.queue.issue()?;
        self.queue.bound_randomness_account = Some(*self.randomness_account.key);

        msg!(
            "Bound randomness account {} to request id {}",
            self.randomness_account.key,
            request_id
        );

        Ok(request_id)
    }
}

/// Reads the word from the account bound to the pending draw and releases the
/// binding, so the same reveal cannot settle a later draw.
pub fn reveal_bound_word(
    queue: &mut RandomnessQueue,
    randomness_account: &AccountInfo,
    clock: &Clock,
) -> Result<u64> {
    require!(
        queue.bound_randomness_account == Some(*randomness_account.key),
        LotteryError::IncorrectRandomnessAccount
    );
    let word = revealed_word(randomness_account, clock)?;
    queue.bound_randomness_account = None;
    Ok(word)
}

/// Reads the revealed value of a randomness account as one random word.
pub fn revealed_word(randomness_account: &AccountInfo, clock: &Clock) -> Result<u64> {
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| LotteryError::IncorrectRandomnessAccount)?;
    let revealed_random_value = randomness_data
        .get_value(clock)
        .map_err(|_| LotteryError::RandomnessNotResolved)?;

    msg!("Randomness result: {}", revealed_random_value[0]);

    let mut word = [0u8; 8];
    word.copy_from_slice(&revealed_random_value[..8]);
    Ok(u64::from_le_bytes(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIRST_REQUEST_ID;
    use anchor_lang::solana_program::hash::hash;

    // Field offsets inside the account body, after the 8 byte discriminator.
    const SEED_SLOT_OFFSET: usize = 96;
    const REVEAL_SLOT_OFFSET: usize = 136;
    const VALUE_OFFSET: usize = 144;

    const SLOT: u64 = 50;

    struct Fixture {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl Fixture {
        fn committed(seed_slot: u64, reveal_slot: u64, value: [u8; 32]) -> Self {
            let mut data = vec![0u8; 8 + std::mem::size_of::<RandomnessAccountData>()];
            data[..8].copy_from_slice(&hash(b"account:RandomnessAccountData").to_bytes()[..8]);
            let body = &mut data[8..];
            body[SEED_SLOT_OFFSET..SEED_SLOT_OFFSET + 8].copy_from_slice(&seed_slot.to_le_bytes());
            body[REVEAL_SLOT_OFFSET..REVEAL_SLOT_OFFSET + 8]
                .copy_from_slice(&reveal_slot.to_le_bytes());
            body[VALUE_OFFSET..VALUE_OFFSET + 32].copy_from_slice(&value);

            Self {
                key: Pubkey::new_unique(),
                owner: Pubkey::new_unique(),
                lamports: 1_000_000,
                data,
            }
        }

        fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                false,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    fn queue() -> RandomnessQueue {
        RandomnessQueue {
            bump: 255,
            coordinator: Pubkey::new_unique(),
            next_request_id: FIRST_REQUEST_ID,
            bound_randomness_account: None,
        }
    }

    fn params() -> RandomnessParams {
        RandomnessParams {
            key_hash: [0u8; 32],
            subscription_id: 0,
            callback_compute_units: 0,
            request_confirmations: 0,
            num_words: 1,
        }
    }

    fn clock_at(slot: u64) -> Clock {
        Clock {
            slot,
            ..Clock::default()
        }
    }

    fn value() -> [u8; 32] {
        let mut value = [0u8; 32];
        for (i, byte) in value.iter_mut().enumerate() {
            *byte = i as u8 + 1;
        }
        value
    }

    fn assert_err<T: std::fmt::Debug>(result: Result<T>, expected: LotteryError) {
        match result {
            Err(anchor_lang::error::Error::AnchorError(e)) => {
                assert_eq!(e.error_code_number, u32::from(expected))
            }
            other => panic!("expected {:?}, got {:?}", expected, other),
        }
    }

    #[test]
    fn fresh_commit_binds_account_and_issues_id() {
        let mut account = Fixture::committed(SLOT - 1, 0, [0u8; 32]);
        let key = account.key;
        let info = account.info();
        let clock = clock_at(SLOT);
        let mut queue = queue();

        let request_id = SwitchboardPort::new(&mut queue, &info, &clock)
            .request(&params())
            .unwrap();

        assert_eq!(request_id, FIRST_REQUEST_ID);
        assert_eq!(queue.next_request_id, FIRST_REQUEST_ID + 1);
        assert_eq!(queue.bound_randomness_account, Some(key));
    }

    #[test]
    fn stale_commit_is_rejected_without_issuing() {
        let clock = clock_at(SLOT);
        for seed_slot in [SLOT - 2, SLOT] {
            let mut account = Fixture::committed(seed_slot, 0, [0u8; 32]);
            let info = account.info();
            let mut queue = queue();

            assert_err(
                SwitchboardPort::new(&mut queue, &info, &clock).request(&params()),
                LotteryError::RandomnessAlreadyRevealed,
            );
            assert_eq!(queue.next_request_id, FIRST_REQUEST_ID);
            assert_eq!(queue.bound_randomness_account, None);
        }
    }

    #[test]
    fn rejects_account_that_is_not_randomness() {
        let mut account = Fixture::committed(SLOT - 1, 0, [0u8; 32]);
        account.data[..8].copy_from_slice(&[0u8; 8]);
        let info = account.info();
        let clock = clock_at(SLOT);
        let mut queue = queue();

        assert_err(
            SwitchboardPort::new(&mut queue, &info, &clock).request(&params()),
            LotteryError::IncorrectRandomnessAccount,
        );
        assert_eq!(queue.next_request_id, FIRST_REQUEST_ID);
    }

    #[test]
    fn revealed_word_is_first_eight_bytes_little_endian() {
        let value = value();
        let mut account = Fixture::committed(SLOT - 1, SLOT + 2, value);
        let info = account.info();

        let mut expected = [0u8; 8];
        expected.copy_from_slice(&value[..8]);
        assert_eq!(
            revealed_word(&info, &clock_at(SLOT + 2)).unwrap(),
            u64::from_le_bytes(expected)
        );
    }

    #[test]
    fn unrevealed_value_is_not_resolved() {
        let mut account = Fixture::committed(SLOT - 1, SLOT + 2, value());
        let info = account.info();

        assert_err(
            revealed_word(&info, &clock_at(SLOT)),
            LotteryError::RandomnessNotResolved,
        );
    }

    #[test]
    fn reveal_releases_the_binding() {
        let mut account = Fixture::committed(SLOT - 1, SLOT + 2, value());
        let info = account.info();
        let mut queue = queue();
        SwitchboardPort::new(&mut queue, &info, &clock_at(SLOT))
            .request(&params())
            .unwrap();

        let word = reveal_bound_word(&mut queue, &info, &clock_at(SLOT + 2)).unwrap();

        assert_eq!(word, revealed_word(&info, &clock_at(SLOT + 2)).unwrap());
        assert_eq!(queue.bound_randomness_account, None);
        assert_err(
            reveal_bound_word(&mut queue, &info, &clock_at(SLOT + 2)),
            LotteryError::IncorrectRandomnessAccount,
        );
    }

    #[test]
    fn reveal_keeps_binding_until_value_resolves() {
        let mut account = Fixture::committed(SLOT - 1, SLOT + 2, value());
        let key = account.key;
        let info = account.info();
        let mut queue = queue();
        queue.bound_randomness_account = Some(key);

        assert_err(
            reveal_bound_word(&mut queue, &info, &clock_at(SLOT + 1)),
            LotteryError::RandomnessNotResolved,
        );
        assert_eq!(queue.bound_randomness_account, Some(key));
    }
}
