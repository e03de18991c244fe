use anchor_lang::prelude::*;
use crate::state::{Raffle, RAFFLE_SEED};
use crate::events::DrawReset;
use crate::errors::RaffleError;

#[derive(Accounts)]
pub struct ForceReset<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        constraint = raffle.admin == admin.key() @ RaffleError::Unauthorized
    )]
    pub raffle: Box<Account<'info, Raffle>>,
    pub admin: Signer<'info>,
}

/// Reopens a raffle stuck in `Calculating` because the coordinator never
/// called back. Does not request randomness again; the next keeper upkeep
/// does that. A late callback for the dropped request is rejected.
pub fn process_force_reset(ctx: Context<ForceReset>) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;
    let request_id = raffle.abandon_draw()?;

    msg!(
        "Draw reset by admin: request={:?}, players kept={}",
        request_id,
        raffle.num_players()
    );

    emit!(DrawReset {
        admin: ctx.accounts.admin.key(),
        request_id,
        round: raffle.round,
    });

    Ok(())
}
