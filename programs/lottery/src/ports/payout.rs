use anchor_lang::prelude::*;

use super::PayoutSink;
use crate::error::LotteryError;

/// Pays the prize by moving lamports from the program-owned lottery account
/// to the winner's account.
///
/// Any mismatch between the winner picked on-chain and the account supplied
/// by the caller surfaces as `PayoutFailed`, which leaves the draw pending so
/// it can be resubmitted with the right account.
pub struct LamportPayout<'a, 'info> {
    vault: &'a AccountInfo<'info>,
    recipient: &'a AccountInfo<'info>,
    /// Lamports the vault must keep to stay rent exempt.
    reserve: u64,
}

impl<'a, 'info> LamportPayout<'a, 'info> {
    pub fn new(
        vault: &'a AccountInfo<'info>,
        recipient: &'a AccountInfo<'info>,
        reserve: u64,
    ) -> Self {
        Self {
            vault,
            recipient,
            reserve,
        }
    }
}

impl PayoutSink for LamportPayout<'_, '_> {
    fn transfer(&mut self, winner: Pubkey, amount: u64) -> Result<()> {
        if *self.recipient.key != winner {
            msg!("Winner: {}", winner);
            msg!("Recipient: {}", self.recipient.key);
            return err!(LotteryError::PayoutFailed);
        }
        if !self.recipient.is_writable {
            return err!(LotteryError::PayoutFailed);
        }

        let available = self.vault.lamports().saturating_sub(self.reserve);
        if available < amount {
            msg!("Vault holds {} lamports above reserve, prize is {}", available, amount);
            return err!(LotteryError::PayoutFailed);
        }
        let credited = self
            .recipient
            .lamports()
            .checked_add(amount)
            .ok_or(LotteryError::PayoutFailed)?;

        // both balances are borrowed before either is written
        let mut vault_lamports = self.vault.try_borrow_mut_lamports()?;
        let mut recipient_lamports = self.recipient.try_borrow_mut_lamports()?;
        **vault_lamports -= amount;
        **recipient_lamports = credited;

        Ok(())
    }
}
