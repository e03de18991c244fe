use anchor_lang::prelude::*;

#[event]
pub struct RaffleInitialized {
    pub admin: Pubkey,
    pub entrance_fee: u64,
    pub interval: i64,
    pub coordinator_program: Pubkey,
}

#[event]
pub struct PlayerEntered {
    pub player: Pubkey,
    pub round: u64,
    pub fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct WinnerRequested {
    pub request_id: u64,
    pub round: u64,
    pub num_players: u64,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub request_id: u64,
    pub round: u64,
    pub prize: u64,
}

#[event]
pub struct DrawReset {
    pub admin: Pubkey,
    pub request_id: Option<u64>,
    pub round: u64,
}
