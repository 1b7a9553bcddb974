//! Transaction chains: fluent lifecycle hooks around wallet submission.
//!
//! # Data Flow
//! ```text
//! TransactionExecutor::chain(args)           SponsoredExecutor::chain(SponsoredArgs)
//!     .before_execute(..)                        .on_success(..)
//!     .on_success(..) .on_error(..)              .on_error(..) .on_settled(..)
//!     .on_settled(..)                            .execute()
//!     .execute()                                     → sponsor → wallet.sign → sponsor.execute
//!         → wallet.sign_and_execute
//!         → wallet.wait_for_transaction (optional)
//!                      ↓
//!        on_success | on_error  →  on_settled  →  busy flag cleared
//! ```
//!
//! # Guarantees
//! - Exactly one of `on_success` / `on_error` fires per execution, then `on_settled`
//! - `before_execute` resolves before any signer call
//! - Errors never escape `execute`; they are routed to `on_error`
//! - A direct `execute` while the executor is busy is a silent no-op

pub mod direct;
mod hooks;
pub mod sponsored;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use direct::{TransactionChain, TransactionExecutor};
pub use sponsored::{SponsoredArgs, SponsoredChain, SponsoredExecutor};
pub use state::ChainState;
pub use types::{BoxError, ExecutionOptions, TxError};
