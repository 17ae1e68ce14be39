pub mod delivery;
pub mod provision;
