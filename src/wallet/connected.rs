//! Wallet assembled from a sign-only signer and a fullnode connection.

use async_trait::async_trait;

use crate::fullnode::FullnodeClient;
use crate::transaction::{encode_base64, ExecutionResult, SignedTransaction, TransactionIntent};
use crate::wallet::signer::{TransactionSigner, WalletSigner};
use crate::wallet::types::WalletResult;

/// Signs locally through `S`, submits and polls through the fullnode.
#[derive(Debug, Clone)]
pub struct ConnectedWallet<S> {
    signer: S,
    fullnode: FullnodeClient,
    /// Chain identifier used by `sign_and_execute`.
    chain: String,
}

impl<S: TransactionSigner> ConnectedWallet<S> {
    pub fn new(signer: S, fullnode: FullnodeClient, chain: impl Into<String>) -> Self {
        Self {
            signer,
            fullnode,
            chain: chain.into(),
        }
    }

    pub fn address(&self) -> String {
        self.signer.address()
    }

    pub fn fullnode(&self) -> &FullnodeClient {
        &self.fullnode
    }
}

#[async_trait]
impl<S: TransactionSigner> WalletSigner for ConnectedWallet<S> {
    async fn sign_transaction(
        &self,
        intent: &TransactionIntent,
        chain: &str,
    ) -> WalletResult<SignedTransaction> {
        let bytes = intent.to_signing_bytes(&self.signer.address())?;
        let signature = self.signer.sign(&bytes, chain).await?;
        Ok(SignedTransaction {
            bytes: encode_base64(&bytes),
            signature,
        })
    }

    async fn sign_and_execute(&self, intent: &TransactionIntent) -> WalletResult<ExecutionResult> {
        let signed = self.sign_transaction(intent, &self.chain).await?;
        self.execute_signed(&signed).await
    }

    async fn execute_signed(&self, signed: &SignedTransaction) -> WalletResult<ExecutionResult> {
        let result = self
            .fullnode
            .execute_transaction_block(&signed.bytes, std::slice::from_ref(&signed.signature))
            .await?;
        tracing::info!(digest = %result.digest, "Transaction submitted");
        Ok(result)
    }

    async fn wait_for_transaction(&self, digest: &str) -> WalletResult<()> {
        self.fullnode.wait_for_transaction(digest).await?;
        Ok(())
    }
}
