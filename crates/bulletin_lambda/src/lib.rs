//! AWS-oriented adapters and handler for bulletin publication.
//!
//! This crate owns runtime integration details (the Lambda entry point, queue
//! provisioning, and message delivery adapters) and exposes a single runtime
//! module boundary for the publication contract primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
