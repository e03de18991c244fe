use anchor_lang::prelude::*;
use crate::state::{Raffle, RAFFLE_SEED, VAULT_SEED};

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
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
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    /// Always empty.
    pub perform_data: Vec<u8>,
}

/// Read-only. Keepers simulate this to decide when to send `perform_upkeep`.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
    let clock = Clock::get()?;
    let upkeep_needed = ctx
        .accounts
        .raffle
        .check_upkeep(clock.unix_timestamp, ctx.accounts.vault.lamports());

    Ok(UpkeepStatus {
        upkeep_needed,
        perform_data: Vec::new(),
    })
}
