use anchor_lang::prelude::*;

use crate::constants::{LOTTERY_SEED, QUEUE_SEED};
use crate::events::DrawRequested;
use crate::ports::with_randomness_port;
use crate::state::{Lottery, RandomnessQueue, UpkeepStatus};

/// Read-only view used by keepers to decide whether to trigger a draw.
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,
}

/// Accounts required to start a draw. Anyone may trigger one.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The keeper paying for the transaction.
    pub keeper: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        mut,
        seeds = [QUEUE_SEED],
        bump = randomness_queue.bump
    )]
    pub randomness_queue: Account<'info, RandomnessQueue>,

    /// Randomness account committed in the previous slot. Required only for
    /// the Switchboard provider.
    /// CHECK: The account's data is validated manually by the Switchboard port.
    pub randomness_account: Option<UncheckedAccount<'info>>,
}

/// Reports every draw condition. Never mutates state.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
    let clock = Clock::get()?;
    let status = ctx.accounts.lottery.upkeep_status(clock.unix_timestamp);

    msg!("Upkeep needed: {}", status.upkeep_needed);

    Ok(status)
}

/// Moves the lottery into drawing and requests randomness from the
/// configured provider. Fails with `UpkeepNotNeeded` unless the interval has
/// passed and the lottery is open with at least one paid entry.
pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery_key = ctx.accounts.lottery.key();
    let lottery = &mut ctx.accounts.lottery;

    let request_id = with_randomness_port(
        lottery.config.provider,
        &mut ctx.accounts.randomness_queue,
        lottery_key,
        ctx.accounts.randomness_account.as_deref(),
        &clock,
        |port| lottery.trigger_draw(clock.unix_timestamp, port),
    )?;

    emit!(DrawRequested {
        request_id,
        entrant_count: lottery.entrant_count(),
        pot: lottery.pot(),
    });

    Ok(())
}
