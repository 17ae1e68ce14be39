//! Shared bulletin publication primitives.
//!
//! This crate owns the publication contract: queue settings, the bulletin
//! message and its typed attributes, validation against the queueing
//! service's documented bounds, and deterministic fingerprints for log
//! correlation. It has no AWS SDK or Lambda runtime dependencies.

pub mod contract;
pub mod limits;
