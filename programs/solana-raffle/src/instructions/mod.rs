pub mod admin;
pub mod player;
pub mod upkeep;
pub mod oracle;
pub mod queries;

pub use admin::*;
pub use player::*;
pub use upkeep::*;
pub use oracle::*;
pub use queries::*;
