//! Sponsored submission path: a third party pays gas.
//!
//! ```text
//! build intent → kind-only bytes → POST /sponsored → {bytes, digest}
//!     → wallet signs sponsor bytes (sign only) → POST /execute {digest, signature}
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::chain::hooks::OutcomeHooks;
use crate::chain::state::{ChainState, ExecutionTracker};
use crate::chain::types::{BoxError, TxError};
use crate::network::{Network, NetworkRegistry, NetworkVariables};
use crate::observability::metrics;
use crate::sponsor::{ExecuteRequest, SponsorRequest, SponsorService};
use crate::transaction::{encode_base64, ExecutionResult, TransactionIntent};
use crate::wallet::WalletSigner;

type BuildFn<A> =
    Box<dyn Fn(&NetworkVariables, &A) -> Result<TransactionIntent, BoxError> + Send + Sync>;

/// Per-call inputs of a sponsored execution.
#[derive(Debug, Clone)]
pub struct SponsoredArgs<A> {
    pub network: Network,
    /// Address that signs as sender.
    pub sender: String,
    /// Addresses the sponsor may let the transaction touch.
    pub allowed_addresses: Option<Vec<String>>,
    /// Builder arguments.
    pub args: A,
}

impl<A> SponsoredArgs<A> {
    pub fn new(network: Network, sender: impl Into<String>, args: A) -> Self {
        Self {
            network,
            sender: sender.into(),
            allowed_addresses: None,
            args,
        }
    }

    pub fn with_allowed_addresses(mut self, addresses: Vec<String>) -> Self {
        self.allowed_addresses = Some(addresses);
        self
    }
}

struct Shared<A> {
    signer: Arc<dyn WalletSigner>,
    sponsor: Arc<dyn SponsorService>,
    networks: NetworkRegistry,
    build: BuildFn<A>,
    tracker: ExecutionTracker,
}

/// Reusable handle for one kind of sponsored transaction.
pub struct SponsoredExecutor<A> {
    shared: Arc<Shared<A>>,
}

impl<A> Clone for SponsoredExecutor<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A: Send + Sync + 'static> SponsoredExecutor<A> {
    /// The builder receives the variables of the network named in each call.
    pub fn new<F>(
        signer: Arc<dyn WalletSigner>,
        sponsor: Arc<dyn SponsorService>,
        networks: NetworkRegistry,
        build: F,
    ) -> Self
    where
        F: Fn(&NetworkVariables, &A) -> Result<TransactionIntent, BoxError> + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                signer,
                sponsor,
                networks,
                build: Box::new(build),
                tracker: ExecutionTracker::default(),
            }),
        }
    }

    pub fn chain(&self, args: SponsoredArgs<A>) -> SponsoredChain<A> {
        SponsoredChain {
            executor: self.clone(),
            args,
            hooks: OutcomeHooks::default(),
        }
    }

    pub fn is_executing(&self) -> bool {
        self.shared.tracker.is_busy()
    }

    pub fn state(&self) -> ChainState {
        self.shared.tracker.state()
    }
}

/// Fluent chain for the sponsored path.
pub struct SponsoredChain<A> {
    executor: SponsoredExecutor<A>,
    args: SponsoredArgs<A>,
    hooks: OutcomeHooks,
}

impl<A: Send + Sync + 'static> SponsoredChain<A> {
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

    pub fn on_settled<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Option<ExecutionResult>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.hooks.set_on_settled(f);
        self
    }

    /// Run the sponsor protocol, then fire hooks. Never fails to the caller.
    pub async fn execute(&self) {
        let tracker = &self.executor.shared.tracker;
        let _guard = tracker.acquire();

        let span = tracing::info_span!(
            "execute",
            execution_id = %Uuid::new_v4(),
            path = "sponsored",
            network = %self.args.network,
        );
        async {
            let started = Instant::now();
            let outcome = self.run(tracker).await;
            let label = self.hooks.settle(outcome, tracker).await;
            metrics::record_execution("sponsored", label, started.elapsed());
        }
        .instrument(span)
        .await
    }

    async fn run(&self, tracker: &ExecutionTracker) -> Result<ExecutionResult, TxError> {
        let shared = &self.executor.shared;
        let args = &self.args;

        tracker.transition(ChainState::Building);
        let variables = shared
            .networks
            .lookup(args.network)
            .map_err(|e| TxError::Build(e.to_string()))?;
        let intent =
            (shared.build)(variables, &args.args).map_err(|e| TxError::Build(e.to_string()))?;
        let kind_bytes = intent.to_kind_bytes()?;

        tracker.transition(ChainState::Submitting);
        let request = SponsorRequest {
            network: args.network,
            tx_bytes: encode_base64(&kind_bytes),
            sender: args.sender.clone(),
            allowed_addresses: args.allowed_addresses.clone(),
        };

        tracker.transition(ChainState::AwaitingSponsor);
        let sponsored = shared.sponsor.sponsor(&request).await?;
        tracing::debug!(sponsor_digest = %sponsored.digest, "Sponsorship granted");

        tracker.transition(ChainState::AwaitingSignature);
        let sponsored_intent = TransactionIntent::from_base64(&sponsored.bytes)
            .map_err(|e| TxError::Sponsor(e.to_string()))?;
        let signed = shared
            .signer
            .sign_transaction(&sponsored_intent, &args.network.chain_identifier())
            .await
            .map_err(TxError::signer)?;

        tracker.transition(ChainState::Finalizing);
        let result = shared
            .sponsor
            .execute(&ExecuteRequest {
                digest: sponsored.digest,
                signature: signed.signature,
            })
            .await?;

        Ok(result)
    }
}
