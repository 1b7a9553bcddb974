//! Chain error type and execution options.

use thiserror::Error;

use crate::sponsor::SponsorError;
use crate::transaction::TransactionError;
use crate::wallet::WalletError;

/// Boxed error returned by user-supplied builders and hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Uniform error handed to `on_error`.
///
/// Every failure inside `execute` is normalized to one of these; none is
/// returned to the caller of `execute`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TxError {
    /// The transaction builder failed, or the built transaction could not be serialized.
    #[error("Failed to build transaction: {0}")]
    Build(String),

    /// The `before_execute` hook returned an error.
    #[error("Pre-execution hook failed: {0}")]
    BeforeExecute(String),

    /// Signing or submission was rejected.
    #[error("{0}")]
    Signer(String),

    /// Submission succeeded but waiting for finality failed.
    #[error("Finality wait failed: {0}")]
    Finality(String),

    /// The sponsor service failed or returned something unusable.
    #[error("Sponsor error: {0}")]
    Sponsor(String),
}

impl TxError {
    /// Underlying message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            TxError::Build(m)
            | TxError::BeforeExecute(m)
            | TxError::Signer(m)
            | TxError::Finality(m)
            | TxError::Sponsor(m) => m,
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            TxError::Build(_) => "build",
            TxError::BeforeExecute(_) => "before_execute",
            TxError::Signer(_) => "signer",
            TxError::Finality(_) => "finality",
            TxError::Sponsor(_) => "sponsor",
        }
    }

    pub(crate) fn signer(err: WalletError) -> Self {
        TxError::Signer(err.to_string())
    }

    pub(crate) fn finality(err: WalletError) -> Self {
        TxError::Finality(err.to_string())
    }
}

impl From<TransactionError> for TxError {
    fn from(err: TransactionError) -> Self {
        TxError::Build(err.to_string())
    }
}

impl From<SponsorError> for TxError {
    fn from(err: SponsorError) -> Self {
        TxError::Sponsor(err.to_string())
    }
}

/// Per-executor execution switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Wait for finality before `on_success` fires.
    pub wait_for_finality: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            wait_for_finality: true,
        }
    }
}

impl From<&crate::config::ExecutionConfig> for ExecutionOptions {
    fn from(config: &crate::config::ExecutionConfig) -> Self {
        Self {
            wait_for_finality: config.wait_for_finality,
        }
    }
}
