use anchor_lang::prelude::*;
use crate::state::{Raffle, RAFFLE_SEED, VAULT_SEED};
use crate::events::WinnerPicked;
use crate::errors::RaffleError;
use crate::utils::payout::transfer_all;

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// Coordinator authority. Anything else is rejected before the handler runs.
    #[account(
        address = raffle.vrf.coordinator_authority @ RaffleError::OnlyCoordinatorCanFulfill
    )]
    pub coordinator: Signer<'info>,

    /// CHECK: Compared against the drawn player in the handler
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    // Round is reset before any lamports move
    let winner = raffle.settle_draw(
        request_id,
        &random_words,
        ctx.accounts.winner.key(),
        clock.unix_timestamp,
    )?;

    let prize = ctx.accounts.vault.lamports();

    msg!("Winner picked: {} round={} prize={}", winner, raffle.round, prize);

    emit!(WinnerPicked {
        winner,
        request_id,
        round: raffle.round,
        prize,
    });

    let raffle_key = raffle.key();
    let vault_bump = [raffle.vault_bump];
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, raffle_key.as_ref(), &vault_bump];

    transfer_all(
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.winner.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        vault_seeds,
    )?;

    Ok(())
}
