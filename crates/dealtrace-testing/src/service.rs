//! Scripted stand-in for the evaluation backend.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use dealtrace_runtime::EvaluationService;
use dealtrace_types::EvaluationStatus;

/// An [`EvaluationService`] driven entirely by a test script.
///
/// Statuses are served from a queue: each poll pops the next entry until one
/// remains, which then repeats forever. Triggers acknowledge unless a failure
/// was queued with [`Self::fail_next_trigger`]. Call counters record how
/// often the coordinator actually reached for the backend.
#[derive(Default)]
pub struct ScriptedEvaluationService {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    statuses: VecDeque<EvaluationStatus>,
    trigger_failures: VecDeque<String>,
    status_calls: usize,
    trigger_calls: usize,
}

impl ScriptedEvaluationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next status snapshot to serve.
    pub fn push_status(&self, status: EvaluationStatus) {
        self.lock().statuses.push_back(status);
    }

    /// Make the next trigger call fail with the given reason.
    pub fn fail_next_trigger(&self, reason: &str) {
        self.lock().trigger_failures.push_back(reason.to_string());
    }

    /// How many times `evaluation_status` was called.
    pub fn status_calls(&self) -> usize {
        self.lock().status_calls
    }

    /// How many times `start_backfill` was called.
    pub fn trigger_calls(&self) -> usize {
        self.lock().trigger_calls
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("scripted service lock poisoned")
    }
}

#[async_trait]
impl EvaluationService for ScriptedEvaluationService {
    async fn evaluation_status(&self) -> anyhow::Result<EvaluationStatus> {
        let mut inner = self.lock();
        inner.status_calls += 1;
        match inner.statuses.len() {
            0 => Err(anyhow::anyhow!("no scripted status available")),
            1 => Ok(inner.statuses[0]),
            _ => Ok(inner.statuses.pop_front().expect("checked non-empty")),
        }
    }

    async fn start_backfill(&self) -> anyhow::Result<()> {
        let mut inner = self.lock();
        inner.trigger_calls += 1;
        match inner.trigger_failures.pop_front() {
            Some(reason) => Err(anyhow::anyhow!(reason)),
            None => Ok(()),
        }
    }
}
