//! Direct submission path: the wallet signs and submits.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::chain::hooks::{before_execute_hook, BeforeExecuteHook, OutcomeHooks};
use crate::chain::state::{ChainState, ExecutionTracker};
use crate::chain::types::{BoxError, ExecutionOptions, TxError};
use crate::network::NetworkVariables;
use crate::observability::metrics;
use crate::transaction::{ExecutionResult, TransactionIntent};
use crate::wallet::WalletSigner;

type BuildFn<A> =
    Box<dyn Fn(&NetworkVariables, &A) -> Result<TransactionIntent, BoxError> + Send + Sync>;

struct Shared<A> {
    signer: Arc<dyn WalletSigner>,
    variables: NetworkVariables,
    build: BuildFn<A>,
    tracker: ExecutionTracker,
}

/// Reusable handle for one kind of transaction.
///
/// Every chain created from the same executor shares its busy flag, so a
/// second `execute` while one is in flight is ignored.
pub struct TransactionExecutor<A> {
    shared: Arc<Shared<A>>,
    options: ExecutionOptions,
}

impl<A> Clone for TransactionExecutor<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            options: self.options,
        }
    }
}

impl<A: Send + Sync + 'static> TransactionExecutor<A> {
    /// Create an executor around a transaction builder.
    pub fn new<F>(signer: Arc<dyn WalletSigner>, variables: NetworkVariables, build: F) -> Self
    where
        F: Fn(&NetworkVariables, &A) -> Result<TransactionIntent, BoxError> + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                signer,
                variables,
                build: Box::new(build),
                tracker: ExecutionTracker::default(),
            }),
            options: ExecutionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExecutionOptions) -> Self {
        self.options = options;
        self
    }

    /// Start a chain for one set of builder arguments.
    pub fn chain(&self, args: A) -> TransactionChain<A> {
        TransactionChain {
            executor: self.clone(),
            args,
            before_execute: None,
            hooks: OutcomeHooks::default(),
        }
    }

    /// Whether an execution is in flight.
    pub fn is_executing(&self) -> bool {
        self.shared.tracker.is_busy()
    }

    pub fn state(&self) -> ChainState {
        self.shared.tracker.state()
    }

    pub fn options(&self) -> ExecutionOptions {
        self.options
    }
}

/// Fluent chain: register hooks, then `execute`.
pub struct TransactionChain<A> {
    executor: TransactionExecutor<A>,
    args: A,
    before_execute: Option<BeforeExecuteHook>,
    hooks: OutcomeHooks,
}

impl<A: Send + Sync + 'static> TransactionChain<A> {
    /// Awaited after the transaction is built and before signing starts.
    /// An error aborts the execution and is routed to `on_error`.
    pub fn before_execute<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        self.before_execute = Some(before_execute_hook(f));
        self
    }

    pub fn on_success<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(ExecutionResult) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.hooks.set_on_success(f);
        self
    }

    pub fn on_error<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(TxError) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.hooks.set_on_error(f);
        self
    }

    /// Fires after `on_success` / `on_error`, with the result or `None`.
    pub fn on_settled<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Option<ExecutionResult>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.hooks.set_on_settled(f);
        self
    }

    /// Build, sign, submit, optionally wait, then fire hooks.
    ///
    /// No-op if the executor is already running a chain.
    pub async fn execute(&self) {
        let tracker = &self.executor.shared.tracker;
        let Some(_guard) = tracker.try_acquire() else {
            tracing::debug!("Execution already in flight, ignoring execute()");
            return;
        };

        let span = tracing::info_span!("execute", execution_id = %Uuid::new_v4(), path = "direct");
        async {
            let started = Instant::now();
            let outcome = self.run(tracker).await;
            let label = self.hooks.settle(outcome, tracker).await;
            metrics::record_execution("direct", label, started.elapsed());
        }
        .instrument(span)
        .await
    }

    async fn run(&self, tracker: &ExecutionTracker) -> Result<ExecutionResult, TxError> {
        let shared = &self.executor.shared;

        tracker.transition(ChainState::Building);
        let intent = (shared.build)(&shared.variables, &self.args)
            .map_err(|e| TxError::Build(e.to_string()))?;

        if let Some(hook) = &self.before_execute {
            tracker.transition(ChainState::BeforeExecute);
            hook().await.map_err(|e| TxError::BeforeExecute(e.to_string()))?;
        }

        tracker.transition(ChainState::Submitting);
        let result = shared
            .signer
            .sign_and_execute(&intent)
            .await
            .map_err(TxError::signer)?;

        if self.executor.options.wait_for_finality {
            tracing::debug!(digest = %result.digest, "Waiting for finality");
            shared
                .signer
                .wait_for_transaction(&result.digest)
                .await
                .map_err(TxError::finality)?;
        }

        Ok(result)
    }
}
