use anchor_lang::prelude::*;

use crate::constants::{FIRST_REQUEST_ID, LOTTERY_SEED, QUEUE_SEED};
use crate::events::DrawReissued;
use crate::ports::with_randomness_port;
use crate::state::{Lottery, LotteryConfig, RandomnessQueue};

/// Accounts required to create the lottery and its randomness ledger.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// The account paying for account creation. Becomes the lottery authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The lottery state account. Also holds the pot.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Request ledger of the randomness provider.
    #[account(
        init,
        payer = payer,
        space = 8 + RandomnessQueue::INIT_SPACE,
        seeds = [QUEUE_SEED],
        bump
    )]
    pub randomness_queue: Account<'info, RandomnessQueue>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to replace a randomness request that was never answered.
#[derive(Accounts)]
pub struct ReissueDraw<'info> {
    /// Must be the lottery authority.
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        mut,
        seeds = [QUEUE_SEED],
        bump = randomness_queue.bump,
    )]
    pub randomness_queue: Account<'info, RandomnessQueue>,

    /// Freshly committed Switchboard randomness account. Only read when the
    /// lottery uses the Switchboard provider.
    /// CHECK: The account's data is validated manually by the Switchboard port.
    pub randomness_account: Option<UncheckedAccount<'info>>,
}

/// Creates the lottery, open for entries, with its interval clock started now.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeLottery accounts
/// * `config` - Fee, interval, timeout and randomness settings, fixed from here on
/// * `coordinator` - Signer allowed to deliver random words for the coordinator provider
pub fn process_initialize_lottery(
    ctx: Context<InitializeLottery>,
    config: LotteryConfig,
    coordinator: Pubkey,
) -> Result<()> {
    let clock = Clock::get()?;

    let lottery = Lottery::open(
        ctx.bumps.lottery,
        ctx.accounts.payer.key(),
        config,
        clock.unix_timestamp,
    )?;
    msg!(
        "Lottery open: fee={} interval={}s provider={:?}",
        lottery.config.entrance_fee,
        lottery.config.interval,
        lottery.config.provider
    );
    ctx.accounts.lottery.set_inner(lottery);

    ctx.accounts.randomness_queue.set_inner(RandomnessQueue {
        bump: ctx.bumps.randomness_queue,
        coordinator,
        next_request_id: FIRST_REQUEST_ID,
        bound_randomness_account: None,
    });

    Ok(())
}

/// Issues a fresh randomness request for a draw whose request has been
/// pending longer than the configured timeout. The old identifier is
/// rejected from then on.
pub fn process_reissue_draw(ctx: Context<ReissueDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery_key = ctx.accounts.lottery.key();
    let authority = ctx.accounts.authority.key();
    let lottery = &mut ctx.accounts.lottery;

    let (previous_request_id, request_id) = with_randomness_port(
        lottery.config.provider,
        &mut ctx.accounts.randomness_queue,
        lottery_key,
        ctx.accounts.randomness_account.as_deref(),
        &clock,
        |port| lottery.reissue_request(authority, clock.unix_timestamp, port),
    )?;

    emit!(DrawReissued {
        previous_request_id,
        request_id,
    });

    Ok(())
}
