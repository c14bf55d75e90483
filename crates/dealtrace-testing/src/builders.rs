//! Fluent builders for domain values.
//!
//! Defaults are chosen so a bare `build()` is already a valid value: a
//! completed run with no results, a completed negotiation with an empty
//! scenario. Tests set only the fields they assert on.

use dealtrace_types::{
    CompanyProfile, ConversationTurn, CounterpartProfile, DimensionResult, MarketProfile,
    MetricValue, NegotiationId, NegotiationRecord, NegotiationStatus, OfferSnapshot, PartyRole,
    ProductResult, RunEvaluation, RunId, RunOutcome, RunStatus, Scenario, SimulationRun,
    SimulationStats, StrategyRef,
};

/// Builder for [`SimulationRun`] values.
///
/// # Example
/// ```
/// use dealtrace_testing::RunBuilder;
///
/// let run = RunBuilder::new("run-1")
///     .deal_value(120000.0)
///     .dimension_final("Preis", 1450.0, true)
///     .build();
/// assert_eq!(run.deal_value, Some(120000.0));
/// ```
pub struct RunBuilder {
    run: SimulationRun,
}

impl RunBuilder {
    pub fn new(id: impl Into<RunId>) -> Self {
        Self {
            run: SimulationRun {
                id: id.into(),
                negotiation_id: NegotiationId::from("neg-1"),
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
            },
        }
    }

    pub fn negotiation(mut self, id: impl Into<NegotiationId>) -> Self {
        self.run.negotiation_id = id.into();
        self
    }

    pub fn status(mut self, status: RunStatus) -> Self {
        self.run.status = status;
        self
    }

    pub fn outcome(mut self, outcome: RunOutcome) -> Self {
        self.run.outcome = Some(outcome);
        self
    }

    pub fn role(mut self, role: PartyRole) -> Self {
        self.run.role = Some(role);
        self
    }

    pub fn deal_value(mut self, value: f64) -> Self {
        self.run.deal_value = Some(value);
        self
    }

    pub fn total_rounds(mut self, rounds: u32) -> Self {
        self.run.total_rounds = rounds;
        self
    }

    pub fn run_number(mut self, number: u32) -> Self {
        self.run.run_number = Some(number);
        self
    }

    pub fn zopa_achieved(mut self, achieved: bool) -> Self {
        self.run.zopa_achieved = Some(achieved);
        self
    }

    pub fn technique(mut self, name: &str) -> Self {
        self.run.technique = Some(StrategyRef::new(name));
        self
    }

    pub fn tactic(mut self, name: &str) -> Self {
        self.run.tactic = Some(StrategyRef::new(name));
        self
    }

    pub fn personality(mut self, name: &str) -> Self {
        self.run.personality = Some(StrategyRef::new(name));
        self
    }

    /// Attach an evaluation with the two effectiveness scores.
    pub fn evaluation(mut self, influencing: f64, tactic: f64) -> Self {
        self.run.evaluation = Some(RunEvaluation {
            tactical_summary: None,
            influencing_score: Some(influencing),
            tactic_score: Some(tactic),
        });
        self
    }

    /// Append a dimension result carrying a final value and a verdict.
    pub fn dimension_final(mut self, name: &str, final_value: f64, achieved: bool) -> Self {
        self.run.dimension_results.push(DimensionResult {
            name: name.to_string(),
            final_value: Some(final_value),
            achieved_target: Some(achieved),
            ..DimensionResult::default()
        });
        self
    }

    /// Append a fully specified dimension result.
    pub fn dimension_result(mut self, result: DimensionResult) -> Self {
        self.run.dimension_results.push(result);
        self
    }

    /// Append a product result carrying an agreed price and a ZOPA verdict.
    pub fn product_price(mut self, name: &str, agreed_price: f64, in_zopa: bool) -> Self {
        self.run.product_results.push(ProductResult {
            name: name.to_string(),
            agreed_price: Some(agreed_price),
            in_zopa: Some(in_zopa),
            ..ProductResult::default()
        });
        self
    }

    /// Append a fully specified product result.
    pub fn product_result(mut self, result: ProductResult) -> Self {
        self.run.product_results.push(result);
        self
    }

    /// Append a conversation turn whose offer carries the given numeric
    /// dimension values.
    pub fn turn_with_offer(mut self, round: u32, speaker: &str, values: &[(&str, f64)]) -> Self {
        let values = values
            .iter()
            .map(|(name, value)| (name.to_string(), MetricValue::from(*value)))
            .collect();
        self.run.conversation.push(ConversationTurn {
            round,
            speaker: speaker.to_string(),
            message: String::new(),
            action: None,
            offer: Some(OfferSnapshot {
                values,
                confidence: None,
                reasoning: None,
            }),
        });
        self
    }

    pub fn build(self) -> SimulationRun {
        self.run
    }
}

/// Builder for [`NegotiationRecord`] values.
pub struct NegotiationBuilder {
    record: NegotiationRecord,
}

impl NegotiationBuilder {
    pub fn new(id: impl Into<NegotiationId>) -> Self {
        Self {
            record: NegotiationRecord {
                id: id.into(),
                title: "Negotiation".to_string(),
                status: NegotiationStatus::Completed,
                created_at: None,
                summary: None,
                scenario: Scenario::default(),
                stats: SimulationStats::default(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.record.title = title.to_string();
        self
    }

    pub fn status(mut self, status: NegotiationStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn created_at(mut self, timestamp: &str) -> Self {
        self.record.created_at = Some(timestamp.to_string());
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.record.summary = Some(summary.to_string());
        self
    }

    pub fn role(mut self, role: PartyRole) -> Self {
        self.record.scenario.role = Some(role);
        self
    }

    pub fn company(mut self, name: &str) -> Self {
        self.record.scenario.company = Some(CompanyProfile {
            name: Some(name.to_string()),
            industry: None,
        });
        self
    }

    pub fn counterpart(mut self, name: &str) -> Self {
        self.record.scenario.counterpart = Some(CounterpartProfile {
            name: Some(name.to_string()),
            attitude: None,
        });
        self
    }

    pub fn market(mut self, name: &str) -> Self {
        self.record.scenario.market = Some(MarketProfile {
            name: Some(name.to_string()),
            region: None,
        });
        self
    }

    pub fn technique(mut self, name: &str) -> Self {
        self.record.scenario.technique = Some(StrategyRef::new(name));
        self
    }

    pub fn tactic(mut self, name: &str) -> Self {
        self.record.scenario.tactic = Some(StrategyRef::new(name));
        self
    }

    pub fn stats(mut self, stats: SimulationStats) -> Self {
        self.record.stats = stats;
        self
    }

    /// Set the run counters most report assertions care about.
    pub fn run_counts(mut self, total: u64, completed: u64) -> Self {
        self.record.stats.total_runs = total;
        self.record.stats.completed_runs = completed;
        self
    }

    pub fn build(self) -> NegotiationRecord {
        self.record
    }
}
