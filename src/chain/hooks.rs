//! Lifecycle hook slots shared by both chain variants.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::future::Future;

use crate::chain::state::{ChainState, ExecutionTracker};
use crate::chain::types::{BoxError, TxError};
use crate::transaction::ExecutionResult;

pub(crate) type BeforeExecuteHook =
    Box<dyn Fn() -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync>;
pub(crate) type SuccessHook = Box<dyn Fn(ExecutionResult) -> BoxFuture<'static, ()> + Send + Sync>;
pub(crate) type ErrorHook = Box<dyn Fn(TxError) -> BoxFuture<'static, ()> + Send + Sync>;
pub(crate) type SettledHook =
    Box<dyn Fn(Option<ExecutionResult>) -> BoxFuture<'static, ()> + Send + Sync>;

pub(crate) fn before_execute_hook<F, Fut>(f: F) -> BeforeExecuteHook
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
{
    Box::new(move || f().boxed())
}

/// The success / error / settled slots. Last registration per slot wins.
#[derive(Default)]
pub(crate) struct OutcomeHooks {
    on_success: Option<SuccessHook>,
    on_error: Option<ErrorHook>,
    on_settled: Option<SettledHook>,
}

impl OutcomeHooks {
    pub(crate) fn set_on_success<F, Fut>(&mut self, f: F)
    where
        F: Fn(ExecutionResult) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.on_success = Some(Box::new(move |result| f(result).boxed()));
    }

    pub(crate) fn set_on_error<F, Fut>(&mut self, f: F)
    where
        F: Fn(TxError) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.on_error = Some(Box::new(move |err| f(err).boxed()));
    }

    pub(crate) fn set_on_settled<F, Fut>(&mut self, f: F)
    where
        F: Fn(Option<ExecutionResult>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.on_settled = Some(Box::new(move |result| f(result).boxed()));
    }

    /// Fire exactly one of success/error, then settled. Returns the outcome label.
    pub(crate) async fn settle(
        &self,
        outcome: Result<ExecutionResult, TxError>,
        tracker: &ExecutionTracker,
    ) -> &'static str {
        let (settled, label) = match outcome {
            Ok(result) => {
                tracker.transition(ChainState::Succeeded);
                tracing::info!(digest = %result.digest, "Transaction succeeded");
                if let Some(hook) = &self.on_success {
                    hook(result.clone()).await;
                }
                (Some(result), "success")
            }
            Err(err) => {
                tracker.transition(ChainState::Failed);
                tracing::warn!(kind = err.kind(), error = %err, "Transaction failed");
                if let Some(hook) = &self.on_error {
                    hook(err).await;
                }
                (None, "error")
            }
        };

        tracker.transition(ChainState::Settled);
        if let Some(hook) = &self.on_settled {
            hook(settled).await;
        }
        label
    }
}

impl std::fmt::Debug for OutcomeHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutcomeHooks")
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_settled", &self.on_settled.is_some())
            .finish()
    }
}
