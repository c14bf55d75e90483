use dealtrace_types::{
    MetricValue, NegotiationRecord, NegotiationStatus, ReportEntry, SimulationRun,
};

#[test]
fn minimal_negotiation_parses_with_defaults() {
    let json = r#"{
        "id": "neg-1",
        "title": "Steel frame contract",
        "status": "planned"
    }"#;

    let record: NegotiationRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id.as_str(), "neg-1");
    assert_eq!(record.status, NegotiationStatus::Planned);
    assert!(record.scenario.company.is_none());
    assert!(record.scenario.dimension_targets.is_empty());
    assert_eq!(record.stats.total_runs, 0);
}

#[test]
fn run_round_trips_with_partial_data() {
    let json = r#"{
        "id": "run-7",
        "negotiation_id": "neg-1",
        "status": "completed",
        "deal_value": 160000.0,
        "total_rounds": 6,
        "outcome": "deal_accepted",
        "dimension_results": [
            {"name": "Lieferzeit", "target": 14.0, "final_value": 12.0, "achieved_target": true}
        ],
        "conversation": [
            {
                "round": 1,
                "speaker": "BUYER",
                "message": "Opening offer",
                "offer": {"values": {"Preis": "1450.50", "Zahlungsziel": "Net 30"}}
            }
        ]
    }"#;

    let run: SimulationRun = serde_json::from_str(json).unwrap();
    assert_eq!(run.deal_value, Some(160000.0));
    assert_eq!(run.success_score(), 1.0);

    let offer = run.conversation[0].offer.as_ref().unwrap();
    assert_eq!(offer.values["Preis"].as_number(), Some(1450.5));
    assert_eq!(offer.values["Zahlungsziel"].as_number(), None);
    assert_eq!(offer.values["Zahlungsziel"], MetricValue::from("Net 30"));

    let back = serde_json::to_string(&run).unwrap();
    let reparsed: SimulationRun = serde_json::from_str(&back).unwrap();
    assert_eq!(reparsed, run);
}

#[test]
fn report_entries_speak_the_dashboard_dialect() {
    let json = r#"{
        "id": "neg-2",
        "title": "Nordic expansion",
        "status": "completed",
        "role": "seller",
        "company": "Acme GmbH",
        "counterpart": "counterpart open",
        "market": "market open",
        "createdAt": "2025-11-02T09:30:00Z",
        "totalRuns": 12,
        "completedRuns": 10,
        "successRate": 83.3,
        "isPlanned": false
    }"#;

    let entry: ReportEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.total_runs, 12);
    assert_eq!(entry.created_at.as_deref(), Some("2025-11-02T09:30:00Z"));

    let out = serde_json::to_string(&entry).unwrap();
    assert!(out.contains("\"createdAt\""));
    assert!(out.contains("\"isPlanned\""));
    assert!(!out.contains("created_at"));
}
