use std::sync::Arc;
use std::time::Duration;

use dealtrace_runtime::{BackfillCoordinator, BackfillEvent, BackfillPhase, PollConfig};
use dealtrace_testing::ScriptedEvaluationService;
use dealtrace_types::EvaluationStatus;

fn poll_config() -> PollConfig {
    PollConfig {
        fast_poll_ms: 5_000,
        early_recheck_ms: 1_500,
    }
}

#[tokio::test(start_paused = true)]
async fn backfill_polls_fast_until_pending_hits_zero() {
    let service = Arc::new(ScriptedEvaluationService::new());
    service.push_status(EvaluationStatus::new(5, 2));
    service.push_status(EvaluationStatus::new(5, 4));
    service.push_status(EvaluationStatus::new(5, 5));

    let mut handle = BackfillCoordinator::spawn(service.clone(), poll_config());

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

    // Early re-check lands before the first full interval.
    assert!(matches!(
        handle.next_event().await.unwrap(),
        BackfillEvent::StatusUpdated { status } if status.needing_evaluation == 1
    ));

    // The 5s interval then observes completion.
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
async fn failed_trigger_reverts_to_idle_immediately() {
    let service = Arc::new(ScriptedEvaluationService::new());
    service.push_status(EvaluationStatus::new(4, 1));
    service.fail_next_trigger("evaluation backend unavailable");

    let mut handle = BackfillCoordinator::spawn(service.clone(), poll_config());
    handle.next_event().await.unwrap();

    handle.trigger().unwrap();
    match handle.next_event().await.unwrap() {
        BackfillEvent::TriggerFailed { reason } => assert!(reason.contains("unavailable")),
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(matches!(
        handle.next_event().await.unwrap(),
        BackfillEvent::Idle
    ));
    assert_eq!(handle.state().phase, BackfillPhase::Idle);

    // The failure armed no timers: an hour later the service has still
    // only seen the startup fetch.
    tokio::time::advance(Duration::from_secs(3_600)).await;
    tokio::task::yield_now().await;
    assert_eq!(service.status_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn idle_coordinator_fetches_only_on_demand() {
    let service = Arc::new(ScriptedEvaluationService::new());
    service.push_status(EvaluationStatus::new(2, 2));

    let mut handle = BackfillCoordinator::spawn(service.clone(), poll_config());
    handle.next_event().await.unwrap();

    tokio::time::advance(Duration::from_secs(120)).await;
    tokio::task::yield_now().await;
    assert_eq!(service.status_calls(), 1);

    handle.refresh().unwrap();
    assert!(matches!(
        handle.next_event().await.unwrap(),
        BackfillEvent::StatusUpdated { .. }
    ));
    assert_eq!(service.status_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn second_trigger_while_backfilling_is_ignored() {
    let service = Arc::new(ScriptedEvaluationService::new());
    service.push_status(EvaluationStatus::new(3, 0));

    let mut handle = BackfillCoordinator::spawn(service.clone(), poll_config());
    handle.next_event().await.unwrap();

    handle.trigger().unwrap();
    assert!(matches!(
        handle.next_event().await.unwrap(),
        BackfillEvent::BackfillStarted { .. }
    ));

    handle.trigger().unwrap();
    tokio::task::yield_now().await;
    assert_eq!(service.trigger_calls(), 1);
}
