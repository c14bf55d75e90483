//! Comparison Tests
//!
//! Verifies radar building and comparison summaries over an explicit run
//! selection, including the strict not-found behavior for unknown run ids.

use std::sync::Arc;

use anyhow::Result;
use dealtrace_sdk::types::{RunId, RunOutcome};
use dealtrace_sdk::utils::NegotiationArchive;
use dealtrace_sdk::{Client, Error, SnapshotStore};
use dealtrace_testing::{NegotiationBuilder, RunBuilder};

/// Two comparable runs of one negotiation plus an unrelated third run,
/// so selections can span and exclude freely.
fn seeded_client() -> Client {
    let frame = NegotiationArchive {
        record: NegotiationBuilder::new("neg-frame")
            .title("Nordic frame agreement")
            .build(),
        runs: vec![
            RunBuilder::new("run-1")
                .negotiation("neg-frame")
                .outcome(RunOutcome::DealAccepted)
                .deal_value(160_000.0)
                .total_rounds(6)
                .dimension_final("Lieferzeit", 2.0, true)
                .dimension_final("Preis", 1450.0, true)
                .product_price("Stahltraeger", 1450.0, true)
                .build(),
            RunBuilder::new("run-2")
                .negotiation("neg-frame")
                .outcome(RunOutcome::DealAccepted)
                .deal_value(165_000.0)
                .total_rounds(9)
                .dimension_final("Lieferzeit", 3.0, false)
                .product_price("Stahltraeger", 1390.0, false)
                .build(),
        ],
    };
    let spot = NegotiationArchive {
        record: NegotiationBuilder::new("neg-spot").title("Spot buy").build(),
        runs: vec![
            RunBuilder::new("run-spot")
                .negotiation("neg-spot")
                .deal_value(40_000.0)
                .total_rounds(3)
                .build(),
        ],
    };

    let store = SnapshotStore::from_archives(vec![frame, spot]);
    Client::with_store(Arc::new(store))
}

fn selection(ids: &[&str]) -> Vec<RunId> {
    ids.iter().map(|id| RunId::from(*id)).collect()
}

#[test]
fn test_radar_normalizes_against_the_selection_maximum() -> Result<()> {
    let client = seeded_client();
    let comparison = client.comparison(&selection(&["run-1", "run-2"]));

    let radar = comparison.radar()?;
    let deal = radar.iter().find(|p| p.metric == "Deal Value").unwrap();
    assert_eq!(deal.value(&RunId::from("run-2")), Some(100.0));
    assert_eq!(deal.value(&RunId::from("run-1")), Some(97.0));

    // The shorter run wins the efficiency axis.
    let efficiency = radar
        .iter()
        .find(|p| p.metric == "Efficiency (Rounds)")
        .unwrap();
    assert_eq!(efficiency.value(&RunId::from("run-1")), Some(100.0));

    for point in &radar {
        for value in point.values.values() {
            assert!((0.0..=100.0).contains(value), "{}: {value}", point.metric);
        }
    }

    Ok(())
}

#[test]
fn test_actual_values_keep_literal_numbers_per_run() -> Result<()> {
    let client = seeded_client();
    let comparison = client.comparison(&selection(&["run-1", "run-2"]));

    let rows = comparison.actual_values()?;
    let deal = rows.iter().find(|p| p.metric == "Deal Value (€)").unwrap();
    assert_eq!(deal.value(&RunId::from("run-1")), Some(160_000.0));
    assert_eq!(deal.value(&RunId::from("run-2")), Some(165_000.0));

    let lieferzeit = rows.iter().find(|p| p.metric == "Lieferzeit").unwrap();
    assert_eq!(lieferzeit.value(&RunId::from("run-1")), Some(2.0));
    assert_eq!(lieferzeit.value(&RunId::from("run-2")), Some(3.0));

    // run-2 never recorded a Preis result, so the literal row skips it.
    let preis = rows.iter().find(|p| p.metric == "Preis").unwrap();
    assert_eq!(preis.value(&RunId::from("run-2")), None);

    Ok(())
}

#[test]
fn test_summary_pools_across_negotiations() -> Result<()> {
    let client = seeded_client();
    let comparison = client.comparison(&selection(&["run-1", "run-2", "run-spot"]));

    let summary = comparison.summary()?;
    assert_eq!(summary.avg_deal_value, 365_000.0 / 3.0);
    assert_eq!(summary.avg_rounds, 6.0);
    // Three pooled dimension results, two achieved.
    assert_eq!(summary.success_share, 66.7);

    Ok(())
}

#[test]
fn test_unknown_run_in_selection_is_reported_as_not_found() {
    let client = seeded_client();
    let comparison = client.comparison(&selection(&["run-1", "run-ghost"]));

    let err = comparison.radar().unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("run-ghost"));
}

#[test]
fn test_empty_selection_yields_empty_results() -> Result<()> {
    let client = seeded_client();
    let comparison = client.comparison(&[]);

    assert!(comparison.radar()?.is_empty());
    assert!(comparison.actual_values()?.is_empty());

    let summary = comparison.summary()?;
    assert_eq!(summary.avg_deal_value, 0.0);
    assert_eq!(summary.avg_rounds, 0.0);
    assert_eq!(summary.success_share, 0.0);

    Ok(())
}
