use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Entry fee below the raffle entrance fee")]
    InsufficientFee,
    #[msg("Raffle is not open")]
    RaffleNotOpen,
    #[msg("Raffle has reached the maximum number of entries")]
    RaffleFull,
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,
    #[msg("Raffle is not calculating a winner")]
    RaffleNotCalculating,
    #[msg("Randomness request does not match the outstanding request")]
    UnknownRequest,
    #[msg("Randomness callback carried no random words")]
    EmptyRandomWords,
    #[msg("Raffle has no players")]
    NoPlayers,
    #[msg("Player index out of bounds")]
    PlayerIndexOutOfBounds,
    #[msg("Interval must be greater than 0")]
    InvalidInterval,
    #[msg("Entrance fee must cover the rent-exempt minimum of the vault")]
    EntranceFeeBelowRentMinimum,
    #[msg("Only the VRF coordinator can fulfill randomness")]
    OnlyCoordinatorCanFulfill,
    #[msg("Coordinator does not match raffle configuration")]
    InvalidCoordinator,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Winner account does not match the drawn player")]
    WinnerAccountMismatch,
    #[msg("Coordinator did not return a request id")]
    RandomnessRequestFailed,
    #[msg("Transfer to winner failed")]
    TransferFailed,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
