//! Resilience helpers shared by the network clients.
//!
//! # Design Decisions
//! - Every external call has a deadline (enforced by the callers with `tokio::time::timeout`)
//! - Polling loops back off exponentially with jitter
//! - No retries of state-changing calls; submission failures surface to the caller

pub mod backoff;

pub use backoff::{calculate_backoff, PollSchedule};
