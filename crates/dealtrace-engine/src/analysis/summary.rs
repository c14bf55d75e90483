//! Dimension and product summaries across a run set.
//!
//! Results are pooled across every supplied run and grouped by name. Groups
//! appear in first-seen order and only when at least one result exists, so
//! consumers never see a fabricated 0% row.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use dealtrace_types::SimulationRun;

use super::percentage;

/// Achievement statistics for one negotiation dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSummary {
    pub name: String,
    /// Dimension results observed across all runs.
    pub total: u64,
    /// Results whose achieved-target flag was true.
    pub achieved: u64,
    /// achieved / total, as a percentage with one decimal.
    pub rate: f64,
}

/// ZOPA and price statistics for one product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub name: String,
    pub total: u64,
    pub in_zopa: u64,
    pub zopa_rate: f64,
    /// Mean agreed price over results that carry one; 0 when none do.
    pub avg_price: f64,
}

#[derive(Default)]
struct DimensionAcc {
    total: u64,
    achieved: u64,
}

#[derive(Default)]
struct ProductAcc {
    total: u64,
    in_zopa: u64,
    price_sum: f64,
    priced: u64,
}

/// Group every dimension result across the run set by dimension name.
pub fn summarize_dimensions(runs: &[SimulationRun]) -> Vec<DimensionSummary> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, DimensionAcc> = HashMap::new();

    for run in runs {
        for result in &run.dimension_results {
            if !groups.contains_key(&result.name) {
                order.push(result.name.clone());
            }
            let acc = groups.entry(result.name.clone()).or_default();
            acc.total += 1;
            if result.achieved_target == Some(true) {
                acc.achieved += 1;
            }
        }
    }

    order
        .into_iter()
        .map(|name| {
            let acc = &groups[&name];
            DimensionSummary {
                total: acc.total,
                achieved: acc.achieved,
                rate: percentage(acc.achieved, acc.total),
                name,
            }
        })
        .collect()
}

/// Group every product result across the run set by product name.
///
/// Results without a parsed agreed price still count toward `total` and
/// `zopa_rate` but stay out of the average's denominator.
pub fn summarize_products(runs: &[SimulationRun]) -> Vec<ProductSummary> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, ProductAcc> = HashMap::new();

    for run in runs {
        for result in &run.product_results {
            if !groups.contains_key(&result.name) {
                order.push(result.name.clone());
            }
            let acc = groups.entry(result.name.clone()).or_default();
            acc.total += 1;
            if result.in_zopa == Some(true) {
                acc.in_zopa += 1;
            }
            if let Some(price) = result.agreed_price {
                acc.price_sum += price;
                acc.priced += 1;
            }
        }
    }

    order
        .into_iter()
        .map(|name| {
            let acc = &groups[&name];
            ProductSummary {
                total: acc.total,
                in_zopa: acc.in_zopa,
                zopa_rate: percentage(acc.in_zopa, acc.total),
                avg_price: if acc.priced == 0 {
                    0.0
                } else {
                    acc.price_sum / acc.priced as f64
                },
                name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealtrace_types::{DimensionResult, ProductResult, RunStatus};

    fn run(id: &str) -> SimulationRun {
        SimulationRun {
            id: id.into(),
            negotiation_id: "neg-1".into(),
            status: RunStatus::Completed,
            technique: None,
            tactic: None,
            personality: None,
            role: None,
            deal_value: None,
            total_rounds: 0,
            run_number: None,
            zopa_achieved: None,
            outcome: None,
            outcome_reason: None,
            started_at: None,
            completed_at: None,
            dimension_results: Vec::new(),
            product_results: Vec::new(),
            conversation: Vec::new(),
            evaluation: None,
        }
    }

    fn dim(name: &str, achieved: Option<bool>) -> DimensionResult {
        DimensionResult {
            name: name.to_string(),
            achieved_target: achieved,
            ..DimensionResult::default()
        }
    }

    fn product(name: &str, price: Option<f64>, in_zopa: Option<bool>) -> ProductResult {
        ProductResult {
            name: name.to_string(),
            agreed_price: price,
            in_zopa,
            ..ProductResult::default()
        }
    }

    #[test]
    fn dimension_totals_cover_every_result() {
        let mut a = run("a");
        a.dimension_results = vec![dim("Lieferzeit", Some(true)), dim("Preis", Some(false))];
        let mut b = run("b");
        b.dimension_results = vec![dim("Lieferzeit", Some(false)), dim("Garantie", None)];

        let runs = vec![a, b];
        let summaries = summarize_dimensions(&runs);

        let summed: u64 = summaries.iter().map(|s| s.total).sum();
        let expected: usize = runs.iter().map(|r| r.dimension_results.len()).sum();
        assert_eq!(summed, expected as u64);
    }

    #[test]
    fn two_results_one_achieved_is_fifty_percent() {
        let mut a = run("a");
        a.dimension_results = vec![dim("Lieferzeit", Some(true))];
        let mut b = run("b");
        b.dimension_results = vec![dim("Lieferzeit", Some(false))];

        let summaries = summarize_dimensions(&[a, b]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].rate, 50.0);
        assert_eq!(summaries[0].achieved, 1);
    }

    #[test]
    fn rates_stay_within_bounds_and_zero_groups_are_absent() {
        let mut a = run("a");
        a.dimension_results = vec![
            dim("Preis", Some(true)),
            dim("Preis", Some(true)),
            dim("Lieferzeit", None),
        ];

        let summaries = summarize_dimensions(&[a]);
        assert_eq!(summaries.len(), 2);
        for s in &summaries {
            assert!(s.rate >= 0.0 && s.rate <= 100.0);
            assert!(s.total > 0);
        }
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let mut a = run("a");
        a.dimension_results = vec![dim("Preis", None), dim("Lieferzeit", None)];
        let mut b = run("b");
        b.dimension_results = vec![dim("Garantie", None), dim("Preis", None)];

        let names: Vec<String> = summarize_dimensions(&[a, b])
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Preis", "Lieferzeit", "Garantie"]);
    }

    #[test]
    fn missing_prices_stay_out_of_the_average_denominator() {
        let mut a = run("a");
        a.product_results = vec![
            product("Stahltraeger", Some(1200.0), Some(true)),
            product("Stahltraeger", None, Some(false)),
            product("Stahltraeger", Some(1000.0), Some(true)),
        ];

        let summaries = summarize_products(&[a]);
        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.total, 3);
        assert_eq!(s.in_zopa, 2);
        assert_eq!(s.zopa_rate, 66.7);
        assert_eq!(s.avg_price, 1100.0);
    }

    #[test]
    fn all_prices_missing_yields_zero_average_not_nan() {
        let mut a = run("a");
        a.product_results = vec![product("Schrauben", None, None)];

        let summaries = summarize_products(&[a]);
        assert_eq!(summaries[0].avg_price, 0.0);
        assert!(summaries[0].avg_price.is_finite());
    }

    #[test]
    fn empty_input_yields_empty_summaries() {
        assert!(summarize_dimensions(&[]).is_empty());
        assert!(summarize_products(&[]).is_empty());
    }
}
