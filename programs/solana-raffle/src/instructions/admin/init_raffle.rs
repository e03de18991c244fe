use anchor_lang::prelude::*;
use crate::state::{Raffle, RaffleState, VrfConfig, RAFFLE_SEED, VAULT_SEED};
use crate::events::RaffleInitialized;
use crate::errors::RaffleError;

#[derive(Accounts)]
pub struct InitRaffle<'info> {
    #[account(
        init,
        seeds = [RAFFLE_SEED],
        bump,
        payer = admin,
        space = Raffle::LEN
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// Lamport-only PDA holding the pool. Created by the first deposit.
    #[account(
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitRaffleParams {
    pub entrance_fee: u64,
    pub interval: i64,
    pub vrf: VrfConfig,
}

pub fn process_init_raffle(ctx: Context<InitRaffle>, params: InitRaffleParams) -> Result<()> {
    require!(params.interval > 0, RaffleError::InvalidInterval);
    // first deposit creates the vault, so a single entry must cover its rent
    let vault_rent = Rent::get()?.minimum_balance(0);
    require!(params.entrance_fee >= vault_rent, RaffleError::EntranceFeeBelowRentMinimum);
    require!(
        params.vrf.coordinator_program != Pubkey::default()
            && params.vrf.coordinator_authority != Pubkey::default(),
        RaffleError::InvalidCoordinator
    );

    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;
    raffle.admin = ctx.accounts.admin.key();
    raffle.entrance_fee = params.entrance_fee;
    raffle.interval = params.interval;
    raffle.state = RaffleState::Open;
    raffle.last_timestamp = clock.unix_timestamp;
    raffle.recent_winner = None;
    raffle.players = Vec::new();
    raffle.pending_request = None;
    raffle.round = 0;
    raffle.vrf = params.vrf;
    raffle.bump = ctx.bumps.raffle;
    raffle.vault_bump = ctx.bumps.vault;

    msg!(
        "Raffle initialized: fee={} interval={}s coordinator={}",
        raffle.entrance_fee,
        raffle.interval,
        raffle.vrf.coordinator_program
    );

    emit!(RaffleInitialized {
        admin: raffle.admin,
        entrance_fee: raffle.entrance_fee,
        interval: raffle.interval,
        coordinator_program: raffle.vrf.coordinator_program,
    });

    Ok(())
}
