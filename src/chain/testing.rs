//! In-memory fakes for chain tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::chain::types::BoxError;
use crate::network::NetworkVariables;
use crate::sponsor::{
    ExecuteRequest, SponsorError, SponsorRequest, SponsorResponse, SponsorResult, SponsorService,
};
use crate::transaction::{
    encode_base64, ExecutionResult, SignedTransaction, TransactionBuilder, TransactionIntent,
};
use crate::wallet::{WalletError, WalletResult, WalletSigner};

/// Ordered record of what happened, shared between fakes and hooks.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub(crate) fn push(&self, event: String) {
        self.0.lock().unwrap().push(event);
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Builds a one-call transaction; zero amounts are rejected.
pub(crate) fn intent_builder(
    vars: &NetworkVariables,
    amount: &u64,
) -> Result<TransactionIntent, BoxError> {
    if *amount == 0 {
        return Err("amount must be positive".into());
    }
    let mut tx = TransactionBuilder::new();
    let stake = tx.pure_u64(*amount);
    tx.move_call(&format!("{}::game::play", vars.package), vec![], vec![stake])?;
    Ok(tx.build()?.into())
}

pub(crate) struct FakeWallet {
    log: EventLog,
    execute_result: Result<ExecutionResult, WalletError>,
    wait_result: Result<(), WalletError>,
    sign_result: Result<String, WalletError>,
    gate: Option<(Notify, Notify)>,
}

impl FakeWallet {
    pub(crate) fn new(log: EventLog) -> Self {
        Self {
            log,
            execute_result: Err(WalletError::Signing("not configured".to_string())),
            wait_result: Ok(()),
            sign_result: Ok("sig1".to_string()),
            gate: None,
        }
    }

    pub(crate) fn executes(mut self, digest: &str) -> Self {
        self.execute_result = Ok(ExecutionResult::new(digest));
        self
    }

    pub(crate) fn fails_execute(mut self, err: WalletError) -> Self {
        self.execute_result = Err(err);
        self
    }

    pub(crate) fn fails_wait(mut self, err: WalletError) -> Self {
        self.wait_result = Err(err);
        self
    }

    pub(crate) fn signs(mut self, result: Result<String, WalletError>) -> Self {
        self.sign_result = result;
        self
    }

    /// Block `sign_and_execute` until [`FakeWallet::release`].
    pub(crate) fn gated(mut self) -> Self {
        self.gate = Some((Notify::new(), Notify::new()));
        self
    }

    pub(crate) async fn wait_until_entered(&self) {
        if let Some((entered, _)) = &self.gate {
            entered.notified().await;
        }
    }

    pub(crate) fn release(&self) {
        if let Some((_, release)) = &self.gate {
            release.notify_one();
        }
    }
}

#[async_trait]
impl WalletSigner for FakeWallet {
    async fn sign_transaction(
        &self,
        intent: &TransactionIntent,
        chain: &str,
    ) -> WalletResult<SignedTransaction> {
        let bytes = intent.to_signing_bytes("0xfake")?;
        self.log
            .push(format!("sign:{}:{}", chain, String::from_utf8_lossy(&bytes)));
        let signature = self.sign_result.clone()?;
        Ok(SignedTransaction {
            bytes: encode_base64(&bytes),
            signature,
        })
    }

    async fn sign_and_execute(&self, _intent: &TransactionIntent) -> WalletResult<ExecutionResult> {
        self.log.push("sign_and_execute".to_string());
        if let Some((entered, release)) = &self.gate {
            entered.notify_one();
            release.notified().await;
        }
        self.execute_result.clone()
    }

    async fn execute_signed(&self, _signed: &SignedTransaction) -> WalletResult<ExecutionResult> {
        self.log.push("execute_signed".to_string());
        self.execute_result.clone()
    }

    async fn wait_for_transaction(&self, digest: &str) -> WalletResult<()> {
        self.log.push(format!("wait:{}", digest));
        self.wait_result.clone()
    }
}

pub(crate) struct FakeSponsor {
    log: EventLog,
    sponsor_result: Result<SponsorResponse, SponsorError>,
    execute_result: Result<ExecutionResult, SponsorError>,
    pub(crate) requests: Mutex<Vec<SponsorRequest>>,
    pub(crate) executions: Mutex<Vec<ExecuteRequest>>,
    gate: Option<(Notify, Notify)>,
}

impl FakeSponsor {
    pub(crate) fn new(log: EventLog) -> Self {
        Self {
            log,
            sponsor_result: Ok(SponsorResponse {
                bytes: "QUJD".to_string(),
                digest: "spn1".to_string(),
            }),
            execute_result: Ok(ExecutionResult::new("final1")),
            requests: Mutex::new(Vec::new()),
            executions: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub(crate) fn fails_sponsor(mut self, err: SponsorError) -> Self {
        self.sponsor_result = Err(err);
        self
    }

    pub(crate) fn returns_bytes(mut self, bytes: &str) -> Self {
        if let Ok(resp) = &mut self.sponsor_result {
            resp.bytes = bytes.to_string();
        }
        self
    }

    pub(crate) fn fails_execute(mut self, err: SponsorError) -> Self {
        self.execute_result = Err(err);
        self
    }

    /// Block `sponsor` until [`FakeSponsor::release`].
    pub(crate) fn gated(mut self) -> Self {
        self.gate = Some((Notify::new(), Notify::new()));
        self
    }

    pub(crate) async fn wait_until_entered(&self) {
        if let Some((entered, _)) = &self.gate {
            entered.notified().await;
        }
    }

    pub(crate) fn release(&self) {
        if let Some((_, release)) = &self.gate {
            release.notify_one();
        }
    }
}

#[async_trait]
impl SponsorService for FakeSponsor {
    async fn sponsor(&self, request: &SponsorRequest) -> SponsorResult<SponsorResponse> {
        self.log.push("sponsor".to_string());
        self.requests.lock().unwrap().push(request.clone());
        if let Some((entered, release)) = &self.gate {
            entered.notify_one();
            release.notified().await;
        }
        self.sponsor_result.clone()
    }

    async fn execute(&self, request: &ExecuteRequest) -> SponsorResult<ExecutionResult> {
        self.log.push(format!("execute:{}:{}", request.digest, request.signature));
        self.executions.lock().unwrap().push(request.clone());
        self.execute_result.clone()
    }
}
