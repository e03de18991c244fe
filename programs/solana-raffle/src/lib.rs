use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;

declare_id!("Bzbkdqd9dPUUBvXf4k4qoZFuhty9kW6NmyMZDW6kj6de");

#[program]
pub mod solana_raffle {
    use super::*;

    pub fn init_raffle(ctx: Context<InitRaffle>, params: InitRaffleParams) -> Result<()> {
        instructions::admin::init_raffle::process_init_raffle(ctx, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, fee: u64) -> Result<()> {
        instructions::player::enter_raffle::process_enter_raffle(ctx, fee)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
        instructions::upkeep::check_upkeep::process_check_upkeep(ctx)
    }

    pub fn perform_upkeep<'info>(ctx: Context<'_, '_, 'info, 'info, PerformUpkeep<'info>>) -> Result<()> {
        instructions::upkeep::perform_upkeep::process_perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::oracle::fulfill_random_words::process_fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn force_reset(ctx: Context<ForceReset>) -> Result<()> {
        instructions::admin::force_reset::process_force_reset(ctx)
    }

    pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
        instructions::queries::get_player::process_get_player(ctx, index)
    }

    pub fn get_summary(ctx: Context<GetSummary>) -> Result<RaffleSummary> {
        instructions::queries::get_summary::process_get_summary(ctx)
    }
}
