//! Tests for a full smoke run.

use super::*;

/// Tests a smoke run against a healthy service.
///
/// Verifies that health, tool listing, every requested tool and the operational data
/// endpoint are called exactly once, in order.
///
/// Expected: 4 passing outcomes and every mock called once
#[tokio::test]
async fn passes_against_healthy_service() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_envelope_endpoint(
            "GET",
            "/api/tools",
            json!({"success": true, "result": ["search_flights", "get_quote"]}),
            1,
        )
        .with_envelope_endpoint(
            "POST",
            "/api/tools/search_flights",
            json!({"success": true, "result": {"flights": [], "total": 0}}),
            1,
        )
        .with_envelope_endpoint(
            "POST",
            "/api/operational-data",
            json!({"success": true, "result": null}),
            1,
        )
        .build()
        .await?;
    let health = test.charter().create_health_endpoint(200, 1);

    let checks = SmokeChecks {
        tools: vec!["search_flights".to_string()],
        ..SmokeChecks::default()
    };
    let report = client(&test.url()).run(&checks).await;

    let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "GET /health",
            "GET /api/tools",
            "POST /api/tools/search_flights",
            "POST /api/operational-data",
        ]
    );
    assert!(report.all_passed(), "{}", report);
    assert_eq!(report.outcomes[1].detail, "2 items");
    assert_eq!(report.outcomes[2].detail, "2 fields");
    assert_eq!(report.outcomes[3].detail, "no result");
    assert!(report.to_string().ends_with("4/4 checks passed"));

    health.assert();
    test.assert_mocks();

    Ok(())
}

/// Tests a smoke run against an unreachable service.
///
/// Expected: every check fails without an HTTP status
#[tokio::test]
async fn fails_without_status_when_unreachable() -> Result<(), TestError> {
    let report = client("http://127.0.0.1:1").run(&SmokeChecks::default()).await;

    assert_eq!(report.outcomes.len(), 3);
    assert!(report.outcomes.iter().all(|o| !o.passed && o.status.is_none()));
    assert!(report.to_string().ends_with("0/3 checks passed"));

    Ok(())
}

/// Tests that an unhealthy service does not stop the remaining checks.
///
/// Expected: health fails with its status, the tool listing still runs and passes
#[tokio::test]
async fn continues_after_failed_health_check() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_envelope_endpoint("GET", "/api/tools", json!({"success": true, "result": []}), 1)
        .with_envelope_endpoint(
            "POST",
            "/api/operational-data",
            json!({"success": true}),
            1,
        )
        .build()
        .await?;
    let health = test.charter().create_health_endpoint(503, 1);

    let report = client(&test.url()).run(&SmokeChecks::default()).await;

    assert!(!report.outcomes[0].passed);
    assert_eq!(report.outcomes[0].status, Some(503));
    assert!(report.outcomes[1].passed);
    assert_eq!(report.outcomes[1].detail, "0 items");
    assert!(!report.all_passed());

    health.assert();
    test.assert_mocks();

    Ok(())
}
