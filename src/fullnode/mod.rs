//! Fullnode integration.
//!
//! # Data Flow
//! ```text
//! FullnodeConfig + Network
//!     → client.rs (JSON-RPC over HTTP, timeout per call, failover)
//!     → execute signed bytes / look up digests / wait for finality
//! ```

pub mod client;
pub mod types;

pub use client::FullnodeClient;
pub use types::{FullnodeError, FullnodeResult};
