//! Conversion from raw archive structs into the canonical domain model.
//!
//! Mapping is total: anything that cannot be interpreted collapses to a
//! deterministic fallback (unknown negotiation status reads as planned,
//! unknown run status as pending, unparsable scalars as absent). The only
//! hard requirement is the negotiation id; runs and per-run result rows
//! without an id or name are dropped.

use chrono::{DateTime, Utc};
use dealtrace_types::{
    CompanyProfile, ConversationTurn, CounterpartProfile, DimensionResult, DimensionTarget,
    MarketProfile, MetricValue, NegotiationId, NegotiationRecord, NegotiationStatus,
    OfferSnapshot, PartyRole, ProductResult, RunEvaluation, RunId, RunOutcome, RunStatus,
    Scenario, SimulationRun, SimulationStats, StrategyRef,
};

use crate::error::{Error, Result};
use crate::schema::{
    RawArchive, RawConversationTurn, RawDimensionResult, RawDimensionTarget, RawNegotiation,
    RawProductResult, RawRun, RawScenario, RawStats, RawStrategy,
};

pub(crate) fn map_archive(raw: RawArchive) -> Result<(NegotiationRecord, Vec<SimulationRun>)> {
    let record = map_negotiation(raw.negotiation)?;
    let runs = raw
        .runs
        .into_iter()
        .filter_map(|run| map_run(run, &record.id))
        .collect();
    Ok((record, runs))
}

fn map_negotiation(raw: RawNegotiation) -> Result<NegotiationRecord> {
    let id = non_blank(raw.id)
        .ok_or_else(|| Error::Archive("negotiation without an id".to_string()))?;
    let status = raw
        .status
        .as_deref()
        .and_then(NegotiationStatus::from_label)
        .unwrap_or(NegotiationStatus::Planned);

    Ok(NegotiationRecord {
        id: NegotiationId::new(id),
        title: non_blank(raw.title).unwrap_or_else(|| "Untitled negotiation".to_string()),
        status,
        created_at: non_blank(raw.created_at),
        summary: non_blank(raw.summary),
        scenario: map_scenario(raw.scenario),
        stats: map_stats(raw.stats, status),
    })
}

fn map_scenario(raw: RawScenario) -> Scenario {
    Scenario {
        company: raw.company.map(|p| CompanyProfile {
            name: non_blank(p.name),
            industry: non_blank(p.industry),
        }),
        counterpart: raw.counterpart.map(|p| CounterpartProfile {
            name: non_blank(p.name),
            attitude: non_blank(p.attitude),
        }),
        market: raw.market.map(|p| MarketProfile {
            name: non_blank(p.name),
            region: non_blank(p.region),
        }),
        technique: strategy_ref(raw.technique),
        tactic: strategy_ref(raw.tactic),
        role: raw.role.as_deref().and_then(PartyRole::from_label),
        dimension_targets: raw
            .dimensions
            .into_iter()
            .filter_map(map_dimension_target)
            .collect(),
    }
}

fn map_dimension_target(raw: RawDimensionTarget) -> Option<DimensionTarget> {
    Some(DimensionTarget {
        name: non_blank(raw.name)?,
        target: raw.target_value.as_number(),
        min: raw.min_value.as_number(),
        max: raw.max_value.as_number(),
        unit: non_blank(raw.unit),
        priority: small_count(&raw.priority),
    })
}

fn map_stats(raw: RawStats, status: NegotiationStatus) -> SimulationStats {
    SimulationStats {
        total_runs: count(&raw.total_runs),
        completed_runs: count(&raw.completed_runs),
        running_runs: count(&raw.running_runs),
        failed_runs: count(&raw.failed_runs),
        pending_runs: count(&raw.pending_runs),
        success_rate: raw.success_rate.as_number(),
        is_planned: raw
            .is_planned
            .as_flag()
            .unwrap_or(status == NegotiationStatus::Planned),
    }
}

fn map_run(raw: RawRun, negotiation: &NegotiationId) -> Option<SimulationRun> {
    let id = non_blank(raw.id)?;
    let conversation: Vec<ConversationTurn> = raw
        .conversation_log
        .into_iter()
        .enumerate()
        .map(|(index, turn)| map_turn(turn, index))
        .collect();
    // Older exporters dropped the round counter; the conversation log still
    // tells us how far the negotiation got.
    let total_rounds = match count_u32(&raw.total_rounds) {
        Some(rounds) if rounds > 0 => rounds,
        _ => conversation.iter().map(|turn| turn.round).max().unwrap_or(0),
    };

    Some(SimulationRun {
        id: RunId::new(id),
        negotiation_id: non_blank(raw.negotiation_id)
            .map(NegotiationId::new)
            .unwrap_or_else(|| negotiation.clone()),
        status: raw
            .status
            .as_deref()
            .and_then(RunStatus::from_label)
            .unwrap_or(RunStatus::Pending),
        technique: strategy_ref(raw.technique),
        tactic: strategy_ref(raw.tactic),
        personality: strategy_ref(raw.personality),
        role: raw.role.as_deref().and_then(PartyRole::from_label),
        deal_value: raw.deal_value.as_number(),
        total_rounds,
        run_number: count_u32(&raw.run_number),
        zopa_achieved: raw.zopa_achieved.as_flag(),
        outcome: raw.outcome.as_deref().and_then(RunOutcome::from_label),
        outcome_reason: non_blank(raw.outcome_reason),
        started_at: parse_timestamp(raw.started_at.as_deref()),
        completed_at: parse_timestamp(raw.completed_at.as_deref()),
        dimension_results: raw
            .dimension_results
            .into_iter()
            .filter_map(map_dimension_result)
            .collect(),
        product_results: raw
            .product_results
            .into_iter()
            .filter_map(map_product_result)
            .collect(),
        conversation,
        evaluation: map_evaluation(
            raw.tactical_summary,
            &raw.technique_effectiveness_score,
            &raw.tactic_effectiveness_score,
        ),
    })
}

fn map_dimension_result(raw: RawDimensionResult) -> Option<DimensionResult> {
    Some(DimensionResult {
        name: non_blank(raw.name)?,
        target: raw.target_value.as_number(),
        min: raw.min_value.as_number(),
        max: raw.max_value.as_number(),
        final_value: raw.final_value.as_number(),
        achieved_target: raw.achieved_target.as_flag(),
        priority: small_count(&raw.priority),
        improvement_over_batna: raw.improvement_over_batna.as_number(),
    })
}

fn map_product_result(raw: RawProductResult) -> Option<ProductResult> {
    Some(ProductResult {
        name: non_blank(raw.name)?,
        agreed_price: raw.agreed_price.as_number(),
        target_price: raw.target_price.as_number(),
        min_max_price: raw.min_max_price.as_number(),
        estimated_volume: raw.estimated_volume.as_number(),
        subtotal: raw.subtotal.as_number(),
        performance_score: raw.performance_score.as_number(),
        zopa_utilization: raw.zopa_utilization.as_number(),
        in_zopa: raw.within_zopa.as_flag(),
    })
}

fn map_turn(raw: RawConversationTurn, index: usize) -> ConversationTurn {
    ConversationTurn {
        round: count_u32(&raw.round).unwrap_or(index as u32 + 1),
        speaker: non_blank(raw.agent).unwrap_or_default(),
        message: raw.message.unwrap_or_default(),
        action: non_blank(raw.action),
        offer: raw.offer.map(|offer| OfferSnapshot {
            values: offer.dimension_values,
            confidence: offer.confidence.as_number(),
            reasoning: non_blank(offer.reasoning),
        }),
    }
}

fn map_evaluation(
    summary: Option<String>,
    technique_score: &MetricValue,
    tactic_score: &MetricValue,
) -> Option<RunEvaluation> {
    let evaluation = RunEvaluation {
        tactical_summary: non_blank(summary),
        influencing_score: technique_score.as_number(),
        tactic_score: tactic_score.as_number(),
    };
    if evaluation == RunEvaluation::default() {
        None
    } else {
        Some(evaluation)
    }
}

fn strategy_ref(raw: Option<RawStrategy>) -> Option<StrategyRef> {
    match raw? {
        RawStrategy::Label(name) => non_blank(Some(name)).map(StrategyRef::new),
        RawStrategy::Detailed(detail) => Some(StrategyRef {
            name: non_blank(detail.name)?,
            description: non_blank(detail.description),
        }),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// Non-negative whole number read from a tolerant scalar, 0 when absent.
fn count(value: &MetricValue) -> u64 {
    value
        .as_number()
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u64)
        .unwrap_or(0)
}

fn count_u32(value: &MetricValue) -> Option<u32> {
    value
        .as_number()
        .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n.round() as u32)
}

fn small_count(value: &MetricValue) -> Option<u8> {
    value
        .as_number()
        .filter(|n| *n >= 0.0 && *n <= u8::MAX as f64)
        .map(|n| n.round() as u8)
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value?.trim())
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
