//! Backfill watching example: Drive the evaluation backfill coordinator
//!
//! This example demonstrates:
//! - Implementing EvaluationService against your evaluation backend
//! - Spawning the coordinator through the client
//! - Consuming coordinator events as a futures Stream
//!
//! The demo backend simulates evaluation work: after a trigger, every status
//! poll reports two more runs evaluated. With the default cadence the whole
//! backfill takes a few seconds of wall-clock time.
//!
//! Run with: cargo run -p dealtrace-sdk --example backfill_watch

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use dealtrace_sdk::types::EvaluationStatus;
use dealtrace_sdk::{BackfillEvent, Client, EvaluationService, SnapshotStore};
use futures::StreamExt;

/// Stand-in for a real evaluation backend.
struct DemoBackend {
    total: u64,
    evaluated: AtomicU64,
    running: AtomicBool,
}

#[async_trait]
impl EvaluationService for DemoBackend {
    async fn evaluation_status(&self) -> anyhow::Result<EvaluationStatus> {
        if self.running.load(Ordering::SeqCst) {
            let done = (self.evaluated.load(Ordering::SeqCst) + 2).min(self.total);
            self.evaluated.store(done, Ordering::SeqCst);
            if done == self.total {
                self.running.store(false, Ordering::SeqCst);
            }
        }
        Ok(EvaluationStatus::new(
            self.total,
            self.evaluated.load(Ordering::SeqCst),
        ))
    }

    async fn start_backfill(&self) -> anyhow::Result<()> {
        self.running.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Backfill coordination never reads the archive store; an empty one
    // keeps the demo self-contained.
    let client = Client::with_store(Arc::new(SnapshotStore::from_archives(Vec::new())));

    let service = Arc::new(DemoBackend {
        total: 10,
        evaluated: AtomicU64::new(4),
        running: AtomicBool::new(false),
    });

    let mut stream = client.backfill_stream(service);

    // The coordinator fetches counters once at startup, then stays quiet
    // until asked. Kick off a backfill right away.
    stream.trigger()?;

    while let Some(event) = stream.next().await {
        match event {
            BackfillEvent::StatusUpdated { status } => {
                println!(
                    "  {} of {} evaluated ({:.0}%)",
                    status.evaluated, status.total, status.evaluation_rate
                );
            }
            BackfillEvent::BackfillStarted { pending } => {
                println!("Backfill started, {pending} run(s) pending");
            }
            BackfillEvent::BackfillCompleted { status } => {
                println!("Backfill complete: {} run(s) evaluated", status.evaluated);
            }
            BackfillEvent::TriggerFailed { reason } => {
                eprintln!("Trigger rejected: {reason}");
                break;
            }
            BackfillEvent::StatusFetchFailed { reason } => {
                eprintln!("Status poll failed: {reason}");
            }
            BackfillEvent::Idle => {
                println!("Coordinator idle again");
                break;
            }
        }
    }

    Ok(())
}
