//! Backfill Tests
//!
//! Drives the evaluation backfill coordinator through the client surface:
//! raw handles from [`Client::backfill_with`] and the event stream wrapper
//! from [`Client::backfill_stream`]. Paused tokio time stands in for the
//! polling clock.

use std::sync::Arc;

use dealtrace_sdk::types::{BackfillEvent, BackfillPhase, EvaluationStatus, PollConfig};
use dealtrace_sdk::{Client, SnapshotStore};
use dealtrace_testing::ScriptedEvaluationService;
use futures::StreamExt;

/// Backfill coordination never touches the run store, so an empty one does.
fn empty_client() -> Client {
    Client::with_store(Arc::new(SnapshotStore::from_archives(Vec::new())))
}

#[tokio::test(start_paused = true)]
async fn test_backfill_handle_runs_to_completion() {
    let client = empty_client();
    let service = Arc::new(ScriptedEvaluationService::new());
    service.push_status(EvaluationStatus::new(4, 1));
    service.push_status(EvaluationStatus::new(4, 4));

    let mut handle = client.backfill_with(service.clone(), PollConfig::default());

    let startup = handle.next_event().await.unwrap();
    assert!(matches!(
        startup,
        BackfillEvent::StatusUpdated { status } if status.needing_evaluation == 3
    ));
    assert_eq!(handle.state().phase, BackfillPhase::Idle);

    handle.trigger().unwrap();
    assert!(matches!(
        handle.next_event().await.unwrap(),
        BackfillEvent::BackfillStarted { pending: 3 }
    ));
    assert_eq!(handle.state().phase, BackfillPhase::Backfilling);

    // The next poll observes completion and the coordinator winds down.
    assert!(matches!(
        handle.next_event().await.unwrap(),
        BackfillEvent::StatusUpdated { status } if status.is_complete()
    ));
    assert!(matches!(
        handle.next_event().await.unwrap(),
        BackfillEvent::BackfillCompleted { .. }
    ));
    assert!(matches!(
        handle.next_event().await.unwrap(),
        BackfillEvent::Idle
    ));
    assert_eq!(handle.state().phase, BackfillPhase::Idle);
    assert_eq!(service.trigger_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_backfill_stream_yields_the_same_protocol() {
    let client = empty_client();
    let service = Arc::new(ScriptedEvaluationService::new());
    service.push_status(EvaluationStatus::new(2, 0));
    service.push_status(EvaluationStatus::new(2, 2));

    let mut stream = client.backfill_stream(service);

    assert!(matches!(
        stream.next().await.unwrap(),
        BackfillEvent::StatusUpdated { status } if status.needing_evaluation == 2
    ));

    stream.trigger().unwrap();
    assert!(matches!(
        stream.next().await.unwrap(),
        BackfillEvent::BackfillStarted { pending: 2 }
    ));
    assert_eq!(stream.state().phase, BackfillPhase::Backfilling);

    assert!(matches!(
        stream.next().await.unwrap(),
        BackfillEvent::StatusUpdated { status } if status.is_complete()
    ));
    assert!(matches!(
        stream.next().await.unwrap(),
        BackfillEvent::BackfillCompleted { .. }
    ));
    assert!(matches!(stream.next().await.unwrap(), BackfillEvent::Idle));
    assert_eq!(stream.state().phase, BackfillPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_rejected_trigger_surfaces_and_reverts_to_idle() {
    let client = empty_client();
    let service = Arc::new(ScriptedEvaluationService::new());
    service.push_status(EvaluationStatus::new(6, 1));
    service.fail_next_trigger("evaluation backend unavailable");

    let mut stream = client.backfill_stream(service);
    stream.next().await.unwrap();

    stream.trigger().unwrap();
    match stream.next().await.unwrap() {
        BackfillEvent::TriggerFailed { reason } => assert!(reason.contains("unavailable")),
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(matches!(stream.next().await.unwrap(), BackfillEvent::Idle));
    assert_eq!(stream.state().phase, BackfillPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_refresh_fetches_counters_without_starting_a_backfill() {
    let client = empty_client();
    let service = Arc::new(ScriptedEvaluationService::new());
    service.push_status(EvaluationStatus::new(3, 3));

    let mut stream = client.backfill_stream(service.clone());
    stream.next().await.unwrap();

    stream.refresh().unwrap();
    assert!(matches!(
        stream.next().await.unwrap(),
        BackfillEvent::StatusUpdated { .. }
    ));
    assert_eq!(service.status_calls(), 2);
    assert_eq!(service.trigger_calls(), 0);
}
