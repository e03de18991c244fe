use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::state::{Raffle, RAFFLE_SEED, VAULT_SEED};
use crate::events::PlayerEntered;

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
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

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_enter_raffle(ctx: Context<EnterRaffle>, fee: u64) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;
    let player = ctx.accounts.player.key();
    let clock = Clock::get()?;

    raffle.enter(player, fee, clock.unix_timestamp)?;

    // Player -> Vault
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        fee,
    )?;

    msg!("Player {} entered, {} entries this round", player, raffle.num_players());

    emit!(PlayerEntered {
        player,
        round: raffle.round,
        fee,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
