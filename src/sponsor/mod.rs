//! Sponsor service client.
//!
//! # Protocol
//! ```text
//! POST {base}/sponsored {network, txBytes, sender, allowedAddresses?} → {bytes, digest}
//! POST {base}/execute   {digest, signature}                           → ExecutionResult
//! ```

pub mod client;
pub mod types;

pub use client::{HttpSponsorClient, SponsorService};
pub use types::{ExecuteRequest, SponsorError, SponsorRequest, SponsorResponse, SponsorResult};
