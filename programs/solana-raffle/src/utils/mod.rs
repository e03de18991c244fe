pub mod math;
pub mod payout;
pub mod vrf;
