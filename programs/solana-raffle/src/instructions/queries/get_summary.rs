use anchor_lang::prelude::*;
use crate::state::{Raffle, RaffleState, RAFFLE_SEED, VAULT_SEED};

#[derive(Accounts)]
pub struct GetSummary<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: SystemAccount<'info>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleSummary {
    pub entrance_fee: u64,
    pub interval: i64,
    pub state: RaffleState,
    pub num_players: u64,
    pub last_timestamp: i64,
    pub recent_winner: Option<Pubkey>,
    pub pending_request: Option<u64>,
    pub round: u64,
    pub pool_balance: u64,
}

impl RaffleSummary {
    pub fn new(raffle: &Raffle, pool_balance: u64) -> Self {
        Self {
            entrance_fee: raffle.entrance_fee(),
            interval: raffle.interval,
            state: raffle.raffle_state(),
            num_players: raffle.num_players() as u64,
            last_timestamp: raffle.last_timestamp(),
            recent_winner: raffle.recent_winner(),
            pending_request: raffle.pending_request(),
            round: raffle.round,
            pool_balance,
        }
    }
}

/// Everything but the player list, which can exceed the return data limit;
/// read it from the account or page through `get_player`.
pub fn process_get_summary(ctx: Context<GetSummary>) -> Result<RaffleSummary> {
    Ok(RaffleSummary::new(&ctx.accounts.raffle, ctx.accounts.vault.lamports()))
}
