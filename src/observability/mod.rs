//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! chain, sponsor, fullnode produce:
//!     → logging.rs (structured log events, execution_id fields)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Prometheus scrape (optional)
//! ```

pub mod logging;
pub mod metrics;
