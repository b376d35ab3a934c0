use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::LotteryEntered;
use crate::state::Lottery;

/// Accounts required to buy one entry.
#[derive(Accounts)]
pub struct EnterLottery<'info> {
    /// The account paying for, and recorded as, the entry.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Lottery state account. Receives the payment.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program for the lamport transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller once, paying `amount` lamports into the pot.
///
/// Steps performed:
/// 1. Check the lottery is open and `amount` covers the entrance fee.
/// 2. Record the entry and grow the pot.
/// 3. Transfer `amount` from the player to the lottery account.
pub fn process_enter_lottery(ctx: Context<EnterLottery>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.lottery.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(LotteryEntered {
        participant: player,
        amount,
        entrant_count: ctx.accounts.lottery.entrant_count(),
    });

    Ok(())
}
