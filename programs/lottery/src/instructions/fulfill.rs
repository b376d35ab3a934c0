use anchor_lang::prelude::*;

use crate::constants::{LOTTERY_SEED, QUEUE_SEED};
use crate::error::LotteryError;
use crate::events::WinnerPicked;
use crate::lottery::DrawOutcome;
use crate::ports::switchboard::reveal_bound_word;
use crate::ports::LamportPayout;
use crate::state::{Lottery, RandomnessProvider, RandomnessQueue};

/// Accounts required for the coordinator to deliver random words.
///
/// Ensures:
/// 1. Only the configured coordinator can fulfill.
/// 2. The winner account supplied is the one the random word selects,
///    otherwise the payout fails and the draw stays pending.
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The VRF coordinator identity recorded in the request ledger.
    pub coordinator: Signer<'info>,

    /// The main lottery state account. Pays the prize.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        seeds = [QUEUE_SEED],
        bump = randomness_queue.bump,
        has_one = coordinator @ LotteryError::Unauthorized,
    )]
    pub randomness_queue: Account<'info, RandomnessQueue>,

    /// Receives the pot.
    /// CHECK: Compared against the drawn winner before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Accounts required to settle a draw from a revealed Switchboard account.
/// Anyone may submit the reveal; the randomness itself comes from the account
/// bound when the draw was triggered.
#[derive(Accounts)]
pub struct RevealSwitchboardDraw<'info> {
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// The randomness account bound to the pending request.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [QUEUE_SEED],
        bump = randomness_queue.bump,
        constraint = randomness_queue.bound_randomness_account == Some(randomness_account.key())
            @ LotteryError::IncorrectRandomnessAccount,
    )]
    pub randomness_queue: Account<'info, RandomnessQueue>,

    /// Receives the pot.
    /// CHECK: Compared against the drawn winner before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

pub fn process_fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<u64>,
) -> Result<()> {
    require!(
        ctx.accounts.lottery.config.provider == RandomnessProvider::Coordinator,
        LotteryError::ProviderMismatch
    );

    let outcome = settle(
        &mut ctx.accounts.lottery,
        &ctx.accounts.winner,
        request_id,
        &random_words,
    )?;
    announce(&outcome);

    Ok(())
}

pub fn process_reveal_switchboard_draw(
    ctx: Context<RevealSwitchboardDraw>,
    request_id: u64,
) -> Result<()> {
    require!(
        ctx.accounts.lottery.config.provider == RandomnessProvider::Switchboard,
        LotteryError::ProviderMismatch
    );

    let clock = Clock::get()?;
    let word = reveal_bound_word(
        &mut ctx.accounts.randomness_queue,
        &ctx.accounts.randomness_account,
        &clock,
    )?;

    let outcome = settle(
        &mut ctx.accounts.lottery,
        &ctx.accounts.winner,
        request_id,
        &[word],
    )?;
    announce(&outcome);

    Ok(())
}

/// Runs the fulfillment against a lamport payout from the lottery account.
fn settle<'info>(
    lottery: &mut Account<'info, Lottery>,
    winner: &AccountInfo<'info>,
    request_id: u64,
    random_words: &[u64],
) -> Result<DrawOutcome> {
    let clock = Clock::get()?;
    let vault = lottery.to_account_info();
    let reserve = Rent::get()?.minimum_balance(vault.data_len());

    let mut sink = LamportPayout::new(&vault, winner, reserve);
    lottery.fulfill(request_id, random_words, clock.unix_timestamp, &mut sink)
}

fn announce(outcome: &DrawOutcome) {
    msg!(
        "Round {} won by {} for {} lamports",
        outcome.round,
        outcome.winner,
        outcome.prize
    );

    emit!(WinnerPicked {
        winner: outcome.winner,
        prize: outcome.prize,
        request_id: outcome.request_id,
        round: outcome.round,
    });
}
