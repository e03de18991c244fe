pub mod init_raffle;
pub mod force_reset;

pub use init_raffle::*;
pub use force_reset::*;
