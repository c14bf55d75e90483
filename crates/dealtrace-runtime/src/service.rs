use async_trait::async_trait;
use dealtrace_types::EvaluationStatus;

/// Remote evaluation backend that grades completed runs.
///
/// Both calls go over the network in production, so they are fallible and
/// must never be assumed cheap. The coordinator retries nothing on its own;
/// a failed call surfaces as an event and the next poll or user action tries
/// again.
#[async_trait]
pub trait EvaluationService: Send + Sync {
    /// Coverage counters for the whole store.
    async fn evaluation_status(&self) -> anyhow::Result<EvaluationStatus>;

    /// Ask the backend to evaluate every run that still lacks an assessment.
    ///
    /// Acknowledgement means the backfill was accepted, not that it finished;
    /// completion is observed through [`Self::evaluation_status`].
    async fn start_backfill(&self) -> anyhow::Result<()>;
}
