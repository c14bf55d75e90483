//! Backfill coordination.
//!
//! The coordinator owns a two-phase state machine around the evaluation
//! service: `idle` (no periodic traffic) and `backfilling` (fast polling
//! until the pending count reaches zero). It runs as one tokio task; the
//! dashboard talks to it through [`CoordinatorHandle`] and never waits on
//! the service directly.

use std::sync::Arc;

use dealtrace_types::EvaluationStatus;
use futures::future::OptionFuture;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::warn;

use crate::config::PollConfig;
use crate::error::{Error, Result};
use crate::service::EvaluationService;

/// Events emitted by the backfill coordinator.
#[derive(Debug, Clone)]
pub enum BackfillEvent {
    /// Fresh counters arrived from the evaluation service.
    StatusUpdated { status: EvaluationStatus },
    /// The service acknowledged a backfill; `pending` is the count at
    /// trigger time.
    BackfillStarted { pending: u64 },
    /// A poll observed that nothing needs evaluation anymore.
    BackfillCompleted { status: EvaluationStatus },
    /// The service rejected the backfill trigger.
    TriggerFailed { reason: String },
    /// A status poll failed; the previous snapshot stays in effect.
    StatusFetchFailed { reason: String },
    /// The coordinator returned to idle.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackfillPhase {
    #[default]
    Idle,
    Backfilling,
}

/// Last known coordinator state, published through a watch channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinatorState {
    pub phase: BackfillPhase,
    pub last_status: Option<EvaluationStatus>,
}

#[derive(Debug)]
enum Command {
    Refresh,
    Trigger,
}

pub struct BackfillCoordinator {
    service: Arc<dyn EvaluationService>,
    poll: PollConfig,
    phase: BackfillPhase,
    last_status: Option<EvaluationStatus>,
    commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<BackfillEvent>,
    state: watch::Sender<CoordinatorState>,
}

impl BackfillCoordinator {
    /// Spawn the coordinator onto the current tokio runtime.
    pub fn spawn(service: Arc<dyn EvaluationService>, poll: PollConfig) -> CoordinatorHandle {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(CoordinatorState::default());

        let coordinator = Self {
            service,
            poll,
            phase: BackfillPhase::Idle,
            last_status: None,
            commands: command_rx,
            events: event_tx,
            state: state_tx,
        };
        let task = tokio::spawn(coordinator.run());

        CoordinatorHandle {
            commands: command_tx,
            events: event_rx,
            state: state_rx,
            task,
        }
    }

    async fn run(mut self) {
        let mut fast_poll = tokio::time::interval(self.poll.fast_poll());
        fast_poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // One extra check shortly after a trigger, so the pending count
        // moves before the first full interval elapses.
        let mut early_recheck: Option<Instant> = None;

        // Consumers want counters at startup, not at the first poll.
        self.fetch_status().await;

        loop {
            let recheck = OptionFuture::from(early_recheck.map(tokio::time::sleep_until));

            tokio::select! {
                command = self.commands.recv() => {
                    match command {
                        Some(Command::Refresh) => self.fetch_status().await,
                        Some(Command::Trigger) => {
                            if self.trigger().await {
                                fast_poll.reset();
                                early_recheck =
                                    Some(Instant::now() + self.poll.early_recheck());
                            }
                        }
                        // Handle dropped; nothing can reach us anymore.
                        None => break,
                    }
                }

                Some(()) = recheck => {
                    early_recheck = None;
                    self.fetch_status().await;
                }

                _ = fast_poll.tick(), if self.phase == BackfillPhase::Backfilling => {
                    self.fetch_status().await;
                }
            }
        }
    }

    /// Ask the service to start a backfill. Returns true on acknowledgement.
    async fn trigger(&mut self) -> bool {
        if self.phase == BackfillPhase::Backfilling {
            // One backfill at a time; repeated triggers are no-ops.
            return false;
        }

        self.set_phase(BackfillPhase::Backfilling);
        match self.service.start_backfill().await {
            Ok(()) => {
                let pending = self
                    .last_status
                    .map(|status| status.needing_evaluation)
                    .unwrap_or(0);
                self.emit(BackfillEvent::BackfillStarted { pending });
                true
            }
            Err(err) => {
                warn!(error = %err, "backfill trigger rejected");
                self.set_phase(BackfillPhase::Idle);
                self.emit(BackfillEvent::TriggerFailed {
                    reason: err.to_string(),
                });
                self.emit(BackfillEvent::Idle);
                false
            }
        }
    }

    async fn fetch_status(&mut self) {
        match self.service.evaluation_status().await {
            Ok(status) => {
                self.last_status = Some(status);
                self.push_state();
                self.emit(BackfillEvent::StatusUpdated { status });
                if self.phase == BackfillPhase::Backfilling && status.is_complete() {
                    self.emit(BackfillEvent::BackfillCompleted { status });
                    self.set_phase(BackfillPhase::Idle);
                    self.emit(BackfillEvent::Idle);
                }
            }
            Err(err) => {
                warn!(error = %err, "evaluation status poll failed");
                self.emit(BackfillEvent::StatusFetchFailed {
                    reason: err.to_string(),
                });
            }
        }
    }

    fn set_phase(&mut self, phase: BackfillPhase) {
        self.phase = phase;
        self.push_state();
    }

    fn push_state(&mut self) {
        self.state.send_replace(CoordinatorState {
            phase: self.phase,
            last_status: self.last_status,
        });
    }

    fn emit(&self, event: BackfillEvent) {
        let _ = self.events.send(event);
    }
}

/// Owner handle for a running coordinator.
///
/// Dropping the handle aborts the task, so tearing a dashboard down cannot
/// leak a polling loop.
pub struct CoordinatorHandle {
    commands: mpsc::UnboundedSender<Command>,
    events: mpsc::UnboundedReceiver<BackfillEvent>,
    state: watch::Receiver<CoordinatorState>,
    task: JoinHandle<()>,
}

impl CoordinatorHandle {
    /// Fetch fresh counters once, in any phase.
    pub fn refresh(&self) -> Result<()> {
        self.send(Command::Refresh)
    }

    /// Start a backfill for every run that still lacks an evaluation.
    pub fn trigger(&self) -> Result<()> {
        self.send(Command::Trigger)
    }

    /// Next coordinator event, `None` once the coordinator stopped.
    pub async fn next_event(&mut self) -> Option<BackfillEvent> {
        self.events.recv().await
    }

    /// Poll for the next event without waiting.
    pub fn try_next_event(&mut self) -> Option<BackfillEvent> {
        self.events.try_recv().ok()
    }

    /// Poll the event channel; used by stream adapters over the handle.
    pub fn poll_next_event(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<BackfillEvent>> {
        self.events.poll_recv(cx)
    }

    /// Snapshot of the current phase and last known counters.
    pub fn state(&self) -> CoordinatorState {
        *self.state.borrow()
    }

    /// Watch receiver for phase and status changes.
    pub fn state_receiver(&self) -> watch::Receiver<CoordinatorState> {
        self.state.clone()
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands.send(command).map_err(|_| {
            Error::InvalidOperation("backfill coordinator is no longer running".to_string())
        })
    }
}

impl Drop for CoordinatorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
