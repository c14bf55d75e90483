//! Report Tests
//!
//! Verifies that report listing, filtering and CSV export work end to end
//! over an archive directory on disk.

use anyhow::Result;
use chrono::NaiveDate;
use dealtrace_sdk::types::NegotiationStatus;
use dealtrace_sdk::{Client, ReportFilter};
use dealtrace_testing::ArchiveDir;

/// Helper seeding three archives: a completed deal with a full scenario,
/// a running deal with a partial one, and a planned deal with none.
fn seeded_client() -> Result<(ArchiveDir, Client)> {
    let dir = ArchiveDir::new();

    dir.write_archive(
        "nordic-frame.json",
        r#"{
            "negotiation": {
                "id": "neg-frame",
                "title": "Nordic frame agreement",
                "status": "completed",
                "createdAt": "2025-03-12T08:00:00Z",
                "summary": "Annual steel frame agreement.",
                "scenario": {
                    "company": {"name": "Norddeutsche Stahl"},
                    "counterpart": {"name": "Baltic Components"},
                    "market": {"name": "Nordic industrial"},
                    "role": "buyer",
                    "technique": "Reciprocity"
                },
                "stats": {"totalRuns": 2, "completedRuns": 2, "successRate": 50.0}
            },
            "runs": [
                {"id": "run-frame-1", "runNumber": 1, "status": "completed",
                 "outcome": "DEAL_ACCEPTED", "dealValue": 160000, "totalRounds": 5},
                {"id": "run-frame-2", "runNumber": 2, "status": "completed",
                 "outcome": "walk_away", "totalRounds": 9}
            ]
        }"#,
    );

    dir.write_archive(
        "spot-buy.json",
        r#"{
            "negotiation": {
                "id": "neg-spot",
                "title": "Spot purchase steel coils",
                "status": "running",
                "createdAt": "2025-06-01T10:30:00Z",
                "scenario": {"company": {"name": "Hanse Metall"}, "role": "seller"}
            },
            "runs": [{"id": "run-spot-1", "status": "running"}]
        }"#,
    );

    dir.write_archive(
        "planned-pilot.json",
        r#"{
            "negotiation": {
                "id": "neg-pilot",
                "title": "Pilot warranty extension",
                "status": "planned",
                "createdAt": "2025-07-20T09:00:00Z"
            }
        }"#,
    );

    let client = Client::open(dir.root())?;
    Ok((dir, client))
}

#[test]
fn test_reports_cover_every_archive_with_resolved_labels() -> Result<()> {
    let (_dir, client) = seeded_client()?;

    let entries = client.reports().all()?;
    assert_eq!(entries.len(), 3, "one report row per archive");

    let frame = &entries[0];
    assert_eq!(frame.id.as_str(), "neg-frame");
    assert_eq!(frame.company, "Norddeutsche Stahl");
    assert_eq!(frame.technique.as_deref(), Some("Reciprocity"));
    assert_eq!(frame.total_runs, 2);
    assert_eq!(frame.success_rate, Some(50.0));

    // Missing profiles resolve to display fallbacks, not empty strings.
    let pilot = entries.iter().find(|e| e.id.as_str() == "neg-pilot").unwrap();
    assert_eq!(pilot.company, "company unresolved");
    assert_eq!(pilot.counterpart, "counterpart open");
    assert_eq!(pilot.market, "market open");
    assert_eq!(pilot.status, NegotiationStatus::Planned);

    Ok(())
}

#[test]
fn test_reports_filter_by_search_across_fields() -> Result<()> {
    let (_dir, client) = seeded_client()?;

    // "nordic" hits the title of one deal and the market of the same deal
    // only; the other two stay out.
    let filter = ReportFilter {
        search: Some("nordic".to_string()),
        ..ReportFilter::default()
    };
    let matched = client.reports().filtered(&filter)?;
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id.as_str(), "neg-frame");

    Ok(())
}

#[test]
fn test_reports_filter_by_status_and_date_window() -> Result<()> {
    let (_dir, client) = seeded_client()?;

    let filter = ReportFilter {
        statuses: vec![NegotiationStatus::Running, NegotiationStatus::Planned],
        from: NaiveDate::from_ymd_opt(2025, 6, 1),
        to: NaiveDate::from_ymd_opt(2025, 6, 30),
        ..ReportFilter::default()
    };
    let matched = client.reports().filtered(&filter)?;

    assert_eq!(matched.len(), 1, "June window keeps only the spot purchase");
    assert_eq!(matched[0].id.as_str(), "neg-spot");

    Ok(())
}

#[test]
fn test_csv_export_is_rectangular() -> Result<()> {
    let (_dir, client) = seeded_client()?;

    let csv = client.reports().csv_string()?;
    let lines: Vec<&str> = csv.trim_end().lines().collect();
    assert_eq!(lines.len(), 4, "header plus one row per negotiation");
    assert!(lines[0].starts_with("id,title,status,role"));

    let columns = lines[0].split(',').count();
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), columns, "ragged row: {line}");
    }

    Ok(())
}

#[test]
fn test_export_csv_writes_into_any_writer() -> Result<()> {
    let (_dir, client) = seeded_client()?;

    let mut buf = Vec::new();
    client.reports().export_csv(&mut buf)?;
    assert_eq!(String::from_utf8(buf)?, client.reports().csv_string()?);

    Ok(())
}
