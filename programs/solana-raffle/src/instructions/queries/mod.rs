pub mod get_player;
pub mod get_summary;

pub use get_player::*;
pub use get_summary::*;
