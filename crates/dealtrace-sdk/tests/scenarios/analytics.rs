//! Analytics Tests
//!
//! Verifies per-negotiation summaries and offer convergence through the
//! client surface, including not-found behavior for unknown ids.

use std::sync::Arc;

use anyhow::Result;
use dealtrace_sdk::types::{NegotiationId, RunId, RunOutcome, RunStatus};
use dealtrace_sdk::utils::NegotiationArchive;
use dealtrace_sdk::{Client, Error, SnapshotStore};
use dealtrace_testing::{NegotiationBuilder, RunBuilder};

/// One negotiation with two completed runs and one failed run, built
/// in memory to keep the expected aggregates obvious.
fn seeded_client() -> Client {
    let record = NegotiationBuilder::new("neg-frame")
        .title("Nordic frame agreement")
        .company("Norddeutsche Stahl")
        .run_counts(3, 2)
        .build();

    let runs = vec![
        RunBuilder::new("run-1")
            .negotiation("neg-frame")
            .run_number(1)
            .outcome(RunOutcome::DealAccepted)
            .deal_value(150_000.0)
            .total_rounds(6)
            .technique("Reciprocity")
            .tactic("Good Cop")
            .personality("Analytical")
            .evaluation(8.0, 7.0)
            .dimension_final("Preis", 1450.0, true)
            .dimension_final("Lieferzeit", 14.0, false)
            .product_price("Stahltraeger", 1450.0, true)
            .build(),
        RunBuilder::new("run-2")
            .negotiation("neg-frame")
            .run_number(2)
            .outcome(RunOutcome::DealAccepted)
            .deal_value(162_500.0)
            .total_rounds(4)
            .technique("Reciprocity")
            .tactic("Mirroring")
            .personality("Dominant")
            .evaluation(6.0, 9.0)
            .dimension_final("Preis", 1390.0, true)
            .product_price("Stahltraeger", 1390.0, false)
            .turn_with_offer(1, "buyer", &[("Preis", 1500.0)])
            .turn_with_offer(2, "seller", &[("Preis", 1460.0)])
            .turn_with_offer(3, "buyer", &[("Preis", 1420.0)])
            .build(),
        RunBuilder::new("run-3")
            .negotiation("neg-frame")
            .run_number(3)
            .status(RunStatus::Failed)
            .technique("Scarcity")
            .build(),
    ];

    let store = SnapshotStore::from_archives(vec![NegotiationArchive { record, runs }]);
    Client::with_store(Arc::new(store))
}

#[test]
fn test_dimension_and_product_summaries_pool_all_runs() -> Result<()> {
    let client = seeded_client();
    let analytics = client.analytics(&NegotiationId::from("neg-frame"));

    let dimensions = analytics.dimension_summaries()?;
    assert_eq!(dimensions.len(), 2);
    assert_eq!(dimensions[0].name, "Preis");
    assert_eq!(dimensions[0].total, 2);
    assert_eq!(dimensions[0].achieved, 2);
    assert_eq!(dimensions[1].name, "Lieferzeit");
    assert_eq!(dimensions[1].rate, 0.0);

    let products = analytics.product_summaries()?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].in_zopa, 1);
    assert_eq!(products[0].avg_price, 1420.0);

    Ok(())
}

#[test]
fn test_strategy_summaries_group_by_reference_name() -> Result<()> {
    let client = seeded_client();
    let analytics = client.analytics(&NegotiationId::from("neg-frame"));

    let techniques = analytics.technique_summaries()?;
    assert_eq!(techniques.len(), 2);

    let reciprocity = &techniques[0];
    assert_eq!(reciprocity.name, "Reciprocity");
    assert_eq!(reciprocity.runs, 2);
    assert_eq!(reciprocity.completed, 2);
    assert_eq!(reciprocity.avg_deal_value, 156_250.0);
    assert_eq!(reciprocity.avg_influencing_score, Some(7.0));

    let scarcity = &techniques[1];
    assert_eq!(scarcity.name, "Scarcity");
    assert_eq!(scarcity.completion_rate, 0.0);

    // Tactics and personalities bucket independently of techniques.
    assert_eq!(analytics.tactic_summaries()?.len(), 2);
    assert_eq!(analytics.personality_summaries()?.len(), 2);

    Ok(())
}

#[test]
fn test_run_convergence_reads_the_conversation_log() -> Result<()> {
    let client = seeded_client();
    let analytics = client.analytics(&NegotiationId::from("neg-frame"));

    let assessment = analytics.run_convergence(&RunId::from("run-2"))?;
    assert_eq!(assessment.compared_pairs, 2);
    assert_eq!(assessment.converging_pairs, 2);
    assert!(assessment.closing_gap);

    // A run without offers still assesses, just to zero.
    let empty = analytics.run_convergence(&RunId::from("run-1"))?;
    assert_eq!(empty.compared_pairs, 0);
    assert!(!empty.closing_gap);

    Ok(())
}

#[test]
fn test_unknown_negotiation_is_reported_as_not_found() {
    let client = seeded_client();
    let analytics = client.analytics(&NegotiationId::from("neg-unknown"));

    let err = analytics.dimension_summaries().unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("neg-unknown"));
}

#[test]
fn test_unknown_run_is_reported_as_not_found() {
    let client = seeded_client();
    let analytics = client.analytics(&NegotiationId::from("neg-frame"));

    let err = analytics
        .run_convergence(&RunId::from("run-missing"))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("run-missing"));
}
