//! Tests for judging response envelopes.

use mockito::Matcher;

use super::*;

/// Tests a 2xx response whose envelope reports failure.
///
/// Expected: the check fails with the envelope's error message
#[tokio::test]
async fn fails_on_unsuccessful_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_envelope_endpoint(
            "POST",
            "/api/tools/get_quote",
            json!({"success": false, "error": "aircraft not found"}),
            1,
        )
        .build()
        .await?;

    let outcome = client(&test.url())
        .call_tool("get_quote", &json!({"aircraft_id": "missing"}))
        .await;

    assert!(!outcome.passed);
    assert_eq!(outcome.status, Some(200));
    assert_eq!(outcome.detail, "aircraft not found");
    assert_eq!(
        outcome.to_string(),
        "[FAIL] POST /api/tools/get_quote (200) aircraft not found"
    );

    test.assert_mocks();

    Ok(())
}

/// Tests an unsuccessful envelope without an error message.
///
/// Expected: the check fails with a generic detail
#[tokio::test]
async fn fails_on_unsuccessful_envelope_without_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_envelope_endpoint("GET", "/api/tools", json!({"success": false}), 1)
        .build()
        .await?;

    let outcome = client(&test.url()).list_tools().await;

    assert!(!outcome.passed);
    assert_eq!(outcome.detail, "success = false");

    Ok(())
}

/// Tests an error status carrying an error envelope.
///
/// Expected: the check fails with the status and the envelope's error message
#[tokio::test]
async fn reports_error_envelope_of_failed_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let _mock = test.charter().create_envelope_endpoint(
        "POST",
        "/api/operational-data",
        500,
        &json!({"success": false, "error": "database unavailable"}),
        1,
    )?;

    let outcome = client(&test.url())
        .post_operational_data(&json!({}))
        .await;

    assert!(!outcome.passed);
    assert_eq!(outcome.status, Some(500));
    assert_eq!(outcome.detail, "database unavailable");

    test.assert_mocks();

    Ok(())
}

/// Tests an error status with a body that is not an envelope.
///
/// Expected: the check fails with the status's reason phrase
#[tokio::test]
async fn falls_back_to_reason_phrase() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/tools")
                .with_status(404)
                .with_body("<html>not found</html>")
                .create()
        })
        .build()
        .await?;

    let outcome = client(&test.url()).list_tools().await;

    assert_eq!(outcome.status, Some(404));
    assert_eq!(outcome.detail, "Not Found");

    Ok(())
}

/// Tests a 2xx response that is not JSON.
///
/// Expected: the check fails and names the invalid envelope
#[tokio::test]
async fn fails_on_invalid_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/tools")
                .with_status(200)
                .with_body("ok")
                .create()
        })
        .build()
        .await?;

    let outcome = client(&test.url()).list_tools().await;

    assert!(!outcome.passed);
    assert!(outcome.detail.starts_with("invalid envelope"), "{}", outcome.detail);

    Ok(())
}

/// Tests that tool calls send the configured JSON body.
///
/// Expected: the mock matches the body and the check passes
#[tokio::test]
async fn sends_tool_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/tools/search_flights")
                .match_header("content-type", "application/json")
                .match_body(Matcher::Json(json!({"origin": "KTEB"})))
                .with_status(200)
                .with_body(r#"{"success": true, "result": "ok"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let outcome = client(&test.url())
        .call_tool("search_flights", &json!({"origin": "KTEB"}))
        .await;

    assert!(outcome.passed, "{}", outcome);
    assert_eq!(outcome.detail, "\"ok\"");

    test.assert_mocks();

    Ok(())
}

/// Tests calling a tool whose name is not a plain path segment.
///
/// Verifies that the name is percent-encoded into a single segment.
///
/// Expected: the encoded endpoint is called once and the check passes
#[tokio::test]
async fn encodes_tool_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_envelope_endpoint(
            "POST",
            "/api/tools/fleet%2Fstatus%20report",
            json!({"success": true, "result": []}),
            1,
        )
        .build()
        .await?;

    let outcome = client(&test.url())
        .call_tool("fleet/status report", &json!({}))
        .await;

    assert!(outcome.passed, "{}", outcome);
    assert_eq!(outcome.name, "POST /api/tools/fleet/status report");

    test.assert_mocks();

    Ok(())
}

/// Tests an unsuccessful envelope whose error is an object.
///
/// Expected: the check fails with the error rendered as JSON
#[tokio::test]
async fn reports_structured_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_envelope_endpoint(
            "POST",
            "/api/tools/get_quote",
            json!({"success": false, "error": {"code": "NO_AIRCRAFT"}}),
            1,
        )
        .build()
        .await?;

    let outcome = client(&test.url())
        .call_tool("get_quote", &json!({}))
        .await;

    assert!(!outcome.passed);
    assert_eq!(outcome.detail, r#"{"code":"NO_AIRCRAFT"}"#);

    test.assert_mocks();

    Ok(())
}
