//! Wallet signer capability.
//!
//! # Data Flow
//! ```text
//! TransactionIntent
//!     → signer.rs   WalletSigner (what chains call)
//!     → connected.rs ConnectedWallet = TransactionSigner (keys) + FullnodeClient (submit, poll)
//! ```
//!
//! # Security Constraints
//! - Key material never leaves the `TransactionSigner` implementation
//! - Only signatures and public addresses are logged

pub mod connected;
pub mod signer;
pub mod types;

pub use connected::ConnectedWallet;
pub use signer::{TransactionSigner, WalletSigner};
pub use types::{WalletError, WalletResult};
