//! Transaction lifecycle helpers for wallet-connected front-ends.

pub mod chain;
pub mod config;
pub mod fullnode;
pub mod net;
pub mod network;
pub mod observability;
pub mod resilience;
pub mod sponsor;
pub mod transaction;
pub mod wallet;

pub use chain::{
    ExecutionOptions, SponsoredArgs, SponsoredExecutor, TransactionChain, TransactionExecutor,
    TxError,
};
pub use config::AppConfig;
pub use network::{Network, NetworkRegistry, NetworkVariables};
pub use transaction::{ExecutionResult, TransactionBuilder, TransactionIntent};
pub use wallet::WalletSigner;
