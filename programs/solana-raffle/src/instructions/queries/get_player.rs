use anchor_lang::prelude::*;
use crate::state::{Raffle, RAFFLE_SEED};
use crate::errors::RaffleError;

#[derive(Accounts)]
pub struct GetPlayer<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,
}

pub fn process_get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
    usize::try_from(index)
        .ok()
        .and_then(|index| ctx.accounts.raffle.player(index))
        .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfBounds))
}
