use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::Stream;

use crate::error::Result;

// Re-export event types for convenient use in examples/client code
pub use dealtrace_runtime::{BackfillEvent, BackfillPhase, CoordinatorState};

/// A running backfill presented as an event stream.
///
/// Wraps a coordinator handle so dashboard code can drive the backfill and
/// consume its events through one value. Dropping the stream stops the
/// coordinator and its polling.
pub struct BackfillStream {
    handle: dealtrace_runtime::CoordinatorHandle,
}

impl BackfillStream {
    pub(crate) fn new(handle: dealtrace_runtime::CoordinatorHandle) -> Self {
        Self { handle }
    }

    /// Fetch fresh counters once, in any phase.
    pub fn refresh(&self) -> Result<()> {
        self.handle.refresh().map_err(Into::into)
    }

    /// Start a backfill for every run that still lacks an evaluation.
    pub fn trigger(&self) -> Result<()> {
        self.handle.trigger().map_err(Into::into)
    }

    /// Snapshot of the current phase and last known counters.
    pub fn state(&self) -> CoordinatorState {
        self.handle.state()
    }

    /// Poll for the next event (non-blocking).
    ///
    /// Returns `None` if no event is available immediately.
    pub fn try_next(&mut self) -> Option<BackfillEvent> {
        self.handle.try_next_event()
    }
}

impl Stream for BackfillStream {
    type Item = BackfillEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.handle.poll_next_event(cx)
    }
}
