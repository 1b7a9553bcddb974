//! Signer capabilities consumed by the transaction chains.

use async_trait::async_trait;
use std::sync::Arc;

use crate::transaction::{ExecutionResult, SignedTransaction, TransactionIntent};
use crate::wallet::types::WalletResult;

/// Full wallet capability: sign, sign-and-submit, submit raw, wait for finality.
///
/// Implementations must be safe to share between concurrently executing chains.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Sign without submitting, for the given chain identifier (`sui:testnet`).
    async fn sign_transaction(
        &self,
        intent: &TransactionIntent,
        chain: &str,
    ) -> WalletResult<SignedTransaction>;

    /// Sign and submit in one step.
    async fn sign_and_execute(&self, intent: &TransactionIntent) -> WalletResult<ExecutionResult>;

    /// Submit already-signed bytes.
    async fn execute_signed(&self, signed: &SignedTransaction) -> WalletResult<ExecutionResult>;

    /// Resolve once `digest` is final.
    async fn wait_for_transaction(&self, digest: &str) -> WalletResult<()>;
}

#[async_trait]
impl<T: WalletSigner + ?Sized> WalletSigner for Arc<T> {
    async fn sign_transaction(
        &self,
        intent: &TransactionIntent,
        chain: &str,
    ) -> WalletResult<SignedTransaction> {
        (**self).sign_transaction(intent, chain).await
    }

    async fn sign_and_execute(&self, intent: &TransactionIntent) -> WalletResult<ExecutionResult> {
        (**self).sign_and_execute(intent).await
    }

    async fn execute_signed(&self, signed: &SignedTransaction) -> WalletResult<ExecutionResult> {
        (**self).execute_signed(signed).await
    }

    async fn wait_for_transaction(&self, digest: &str) -> WalletResult<()> {
        (**self).wait_for_transaction(digest).await
    }
}

/// Sign-only capability: a keystore, hardware device, or browser wallet bridge.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Account address the signatures belong to.
    fn address(&self) -> String;

    /// Sign serialized transaction bytes, returning a base64 signature.
    async fn sign(&self, tx_bytes: &[u8], chain: &str) -> WalletResult<String>;
}
