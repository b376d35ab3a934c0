#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;
use state::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod lottery;
pub mod ports;
pub mod state;

declare_id!("5k1hNzo1Uc6XigZcujxAyk5ptTNa99bJvHF8rBFoiR8r");

#[program]
pub mod interval_lottery {
    use super::*;

    pub fn initialize_lottery(
        ctx: Context<InitializeLottery>,
        config: LotteryConfig,
        coordinator: Pubkey,
    ) -> Result<()> {
        process_initialize_lottery(ctx, config, coordinator)
    }

    pub fn enter_lottery(ctx: Context<EnterLottery>, amount: u64) -> Result<()> {
        process_enter_lottery(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        process_perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<()> {
        process_fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn reveal_switchboard_draw(
        ctx: Context<RevealSwitchboardDraw>,
        request_id: u64,
    ) -> Result<()> {
        process_reveal_switchboard_draw(ctx, request_id)
    }

    pub fn reissue_draw(ctx: Context<ReissueDraw>) -> Result<()> {
        process_reissue_draw(ctx)
    }
}
