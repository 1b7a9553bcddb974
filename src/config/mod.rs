//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse, APP_NETWORK override)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → network registry, fullnode client, sponsor client, executors
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::ExecutionConfig;
pub use schema::FullnodeConfig;
pub use schema::ObservabilityConfig;
pub use schema::SponsorConfig;
