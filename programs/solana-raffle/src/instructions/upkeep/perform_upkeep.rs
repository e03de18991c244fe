use anchor_lang::prelude::*;
use crate::state::{Raffle, RAFFLE_SEED, VAULT_SEED};
use crate::events::WinnerRequested;
use crate::errors::RaffleError;
use crate::utils::vrf::{request_random_words, RequestRandomWordsArgs};

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// Keeper paying the coordinator's request fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Pinned to the coordinator program stored in the raffle config
    #[account(
        executable,
        address = raffle.vrf.coordinator_program @ RaffleError::InvalidCoordinator
    )]
    pub coordinator_program: UncheckedAccount<'info>,
}

/// Starts a draw. Any extra accounts the coordinator needs (subscription,
/// request account, system program) are passed through `remaining_accounts`.
pub fn process_perform_upkeep<'info>(
    ctx: Context<'_, '_, 'info, 'info, PerformUpkeep<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let pool_balance = ctx.accounts.vault.lamports();
    let raffle = &mut ctx.accounts.raffle;

    raffle.begin_draw(clock.unix_timestamp, pool_balance)?;

    let args = RequestRandomWordsArgs::from_config(&raffle.vrf);
    let bump = [raffle.bump];
    let consumer_seeds: &[&[u8]] = &[RAFFLE_SEED, &bump];

    let request_id = request_random_words(
        &ctx.accounts.coordinator_program.to_account_info(),
        &raffle.to_account_info(),
        &ctx.accounts.payer.to_account_info(),
        ctx.remaining_accounts,
        &args,
        consumer_seeds,
    )?;

    raffle.record_request(request_id);

    msg!(
        "Requested random words: request={} players={} pool={}",
        request_id,
        raffle.num_players(),
        pool_balance
    );

    emit!(WinnerRequested {
        request_id,
        round: raffle.round,
        num_players: raffle.num_players() as u64,
    });

    Ok(())
}
