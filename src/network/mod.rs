//! Network configuration provider.
//!
//! # Data Flow
//! ```text
//! [networks.*] tables in config + *_PACKAGE_ID env overrides
//!     → registry.rs (parse keys, validate package ids)
//!     → NetworkRegistry::lookup(network) → NetworkVariables
//!     → handed to transaction builders
//! ```
//!
//! Lookups are pure and synchronous; nothing here touches the network.

pub mod registry;
pub mod types;

pub use registry::NetworkRegistry;
pub use types::{Network, NetworkError, NetworkVariables};
