//! Runtime module boundary over the publication contract crate.

pub use bulletin_core::contract;
pub use bulletin_core::limits;
