//! Wallet error definitions.

use thiserror::Error;

use crate::fullnode::FullnodeError;
use crate::transaction::TransactionError;

/// Errors surfaced by wallet signers.
#[derive(Debug, Clone, Error)]
pub enum WalletError {
    /// The user (or wallet policy) declined to sign.
    #[error("{0}")]
    Rejected(String),

    /// Signing failed for a reason other than rejection.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The intent could not be turned into signable bytes.
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// Submission or finality lookup failed at the node.
    #[error(transparent)]
    Fullnode(#[from] FullnodeError),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;
