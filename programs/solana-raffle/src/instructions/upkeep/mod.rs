pub mod check_upkeep;
pub mod perform_upkeep;

pub use check_upkeep::*;
pub use perform_upkeep::*;
