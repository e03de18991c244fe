use anchor_lang::prelude::*;
use crate::errors::RaffleError;
use crate::utils::math::winner_index;

pub const RAFFLE_SEED: &[u8] = b"raffle";
pub const VAULT_SEED: &[u8] = b"vault";

/// Upper bound on entries per round, keeps `Raffle::LEN` under the CPI
/// account allocation limit.
pub const MAX_PLAYERS: usize = 250;

/// Random words requested per draw. Only the first one is consumed.
pub const NUM_WORDS: u32 = 1;

#[account]
pub struct Raffle {
    pub admin: Pubkey,
    pub entrance_fee: u64,          // lamports
    pub interval: i64,              // seconds
    pub state: RaffleState,
    pub last_timestamp: i64,        // last entry or reset
    pub recent_winner: Option<Pubkey>,
    pub players: Vec<Pubkey>,       // max MAX_PLAYERS, one element per entry
    pub pending_request: Option<u64>,
    pub round: u64,                 // resolved rounds so far
    pub vrf: VrfConfig,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Raffle {
    // 8 (discriminator)
    // 32 (admin) + 8 (entrance_fee) + 8 (interval) + 1 (state)
    // 8 (last_timestamp) + 1+32 (recent_winner option)
    // 4 + 32 * MAX_PLAYERS (players)
    // 1+8 (pending_request option) + 8 (round)
    // VrfConfig::LEN + 1 (bump) + 1 (vault_bump)
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1 + 8 + 33 + (4 + 32 * MAX_PLAYERS) + 9 + 8 + VrfConfig::LEN + 1 + 1;
}

/// Static coordinator wiring, fixed at initialization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VrfConfig {
    /// Program that accepts `request_random_words`.
    pub coordinator_program: Pubkey,
    /// The only signer allowed to deliver random words back.
    pub coordinator_authority: Pubkey,
    /// Selects the oracle key / gas lane on the coordinator side.
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
}

impl VrfConfig {
    pub const LEN: usize = 32 + 32 + 32 + 8 + 2 + 4;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default, InitSpace)]
pub enum RaffleState {
    #[default]
    Open,
    Calculating,
    /// Reserved. Nothing in the round lifecycle transitions here.
    Closed,
}

/// Values logged when a draw is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepDiagnostics {
    pub pool_balance: u64,
    pub num_players: u64,
    pub state: RaffleState,
}

impl Raffle {
    pub fn interval_elapsed(&self, now: i64) -> bool {
        now.saturating_sub(self.last_timestamp) > self.interval
    }

    /// True when a draw may be triggered: interval strictly passed, round
    /// open, at least one entry and a funded pool.
    pub fn check_upkeep(&self, now: i64, pool_balance: u64) -> bool {
        let is_open = self.state == RaffleState::Open;
        let has_players = !self.players.is_empty();
        let has_balance = pool_balance > 0;

        self.interval_elapsed(now) && is_open && has_players && has_balance
    }

    pub fn diagnostics(&self, pool_balance: u64) -> UpkeepDiagnostics {
        UpkeepDiagnostics {
            pool_balance,
            num_players: self.players.len() as u64,
            state: self.state,
        }
    }

    /// Admits one entry. Nothing is mutated unless every check passes.
    pub fn enter(&mut self, player: Pubkey, fee: u64, now: i64) -> Result<()> {
        require!(fee >= self.entrance_fee, RaffleError::InsufficientFee);
        require!(self.state == RaffleState::Open, RaffleError::RaffleNotOpen);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        self.players.push(player);
        self.last_timestamp = now;
        Ok(())
    }

    /// Moves the round into `Calculating`. The caller records the request id
    /// once the coordinator has accepted the request.
    pub fn begin_draw(&mut self, now: i64, pool_balance: u64) -> Result<()> {
        if !self.interval_elapsed(now) || !self.check_upkeep(now, pool_balance) {
            let diagnostics = self.diagnostics(pool_balance);
            msg!(
                "Upkeep not needed: balance={}, players={}, state={:?}",
                diagnostics.pool_balance,
                diagnostics.num_players,
                diagnostics.state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        self.state = RaffleState::Calculating;
        Ok(())
    }

    pub fn record_request(&mut self, request_id: u64) {
        self.pending_request = Some(request_id);
    }

    /// Player picked by `random_words` for the outstanding request. Read-only.
    pub fn draw_winner(&self, request_id: u64, random_words: &[[u8; 32]]) -> Result<Pubkey> {
        require!(self.state == RaffleState::Calculating, RaffleError::RaffleNotCalculating);
        require!(self.pending_request == Some(request_id), RaffleError::UnknownRequest);

        let word = random_words.first().ok_or(RaffleError::EmptyRandomWords)?;
        let index = winner_index(word, self.players.len()).ok_or(RaffleError::NoPlayers)?;
        let winner = self.players.get(index).copied().ok_or(RaffleError::NoPlayers)?;
        Ok(winner)
    }

    /// Resolves the outstanding draw and resets the round. `winner_account`
    /// is the account the payout will go to and must be the drawn player.
    /// Returns the winner; paying them out is left to the caller.
    pub fn settle_draw(
        &mut self,
        request_id: u64,
        random_words: &[[u8; 32]],
        winner_account: Pubkey,
        now: i64,
    ) -> Result<Pubkey> {
        let winner = self.draw_winner(request_id, random_words)?;
        require_keys_eq!(winner_account, winner, RaffleError::WinnerAccountMismatch);
        let next_round = self.round.checked_add(1).ok_or(RaffleError::MathOverflow)?;

        self.state = RaffleState::Open;
        self.players.clear();
        self.last_timestamp = now;
        self.recent_winner = Some(winner);
        self.pending_request = None;
        self.round = next_round;

        Ok(winner)
    }

    /// Abandons a draw whose callback never arrived. Entries and pool are
    /// kept so the next upkeep can draw again.
    pub fn abandon_draw(&mut self) -> Result<Option<u64>> {
        require!(self.state == RaffleState::Calculating, RaffleError::RaffleNotCalculating);

        self.state = RaffleState::Open;
        Ok(self.pending_request.take())
    }

    pub fn entrance_fee(&self) -> u64 {
        self.entrance_fee
    }

    pub fn raffle_state(&self) -> RaffleState {
        self.state
    }

    pub fn players(&self) -> &[Pubkey] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<Pubkey> {
        self.players.get(index).copied()
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner
    }

    pub fn pending_request(&self) -> Option<u64> {
        self.pending_request
    }

    pub fn request_confirmations(&self) -> u16 {
        self.vrf.request_confirmations
    }

    pub fn num_words() -> u32 {
        NUM_WORDS
    }
}
