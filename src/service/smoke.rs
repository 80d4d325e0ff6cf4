//! HTTP smoke checks against a deployed marketplace service.
//!
//! Each check sends exactly one request and never retries. Health only needs a 2xx status;
//! every API endpoint must additionally answer with an [`ApiEnvelope`] whose `success`
//! flag is set.

use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;

use crate::{
    error::truncate_message,
    model::{
        api::ApiEnvelope,
        report::{SmokeOutcome, SmokeReport},
    },
};

/// Maximum length of a failure detail.
const MAX_DETAIL_CHARS: usize = 200;

/// Requests of a smoke run beyond the fixed health and tool listing checks.
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeChecks {
    /// Tools to call through `POST /api/tools/<name>`
    pub tools: Vec<String>,
    /// Body sent to every tool
    pub tool_body: Value,
    /// Body sent to `POST /api/operational-data`
    pub operational_body: Value,
}

impl Default for SmokeChecks {
    fn default() -> Self {
        Self {
            tools: Vec::new(),
            tool_body: Value::Object(Default::default()),
            operational_body: Value::Object(Default::default()),
        }
    }
}

/// Sends the smoke checks to a service.
pub struct SmokeClient {
    http: Client,
    base_url: String,
}

impl SmokeClient {
    /// Creates a new instance of [`SmokeClient`]
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run every check in order.
    pub async fn run(&self, checks: &SmokeChecks) -> SmokeReport {
        let mut report = SmokeReport::default();

        report.outcomes.push(self.health().await);
        report.outcomes.push(self.list_tools().await);
        for tool in &checks.tools {
            report
                .outcomes
                .push(self.call_tool(tool, &checks.tool_body).await);
        }
        report
            .outcomes
            .push(self.post_operational_data(&checks.operational_body).await);

        for outcome in &report.outcomes {
            if outcome.passed {
                tracing::info!("{}", outcome);
            } else {
                tracing::warn!("{}", outcome);
            }
        }

        report
    }

    /// `GET /health`, passing on any 2xx status.
    pub async fn health(&self) -> SmokeOutcome {
        let name = "GET /health".to_string();

        match self.http.get(self.url("/health")).send().await {
            Ok(response) => {
                let status = response.status();
                SmokeOutcome {
                    name,
                    passed: status.is_success(),
                    status: Some(status.as_u16()),
                    detail: status
                        .canonical_reason()
                        .unwrap_or_default()
                        .to_string(),
                }
            }
            Err(e) => transport_failure(name, &e),
        }
    }

    /// `GET /api/tools`
    pub async fn list_tools(&self) -> SmokeOutcome {
        envelope_check(
            "GET /api/tools".to_string(),
            self.http.get(self.url("/api/tools")),
        )
        .await
    }

    /// The URL of a tool, with its name percent-encoded as a single path segment.
    fn tool_url(&self, tool: &str) -> Result<Url, String> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| format!("invalid base URL: {}", e))?;
        url.path_segments_mut()
            .map_err(|_| format!("invalid base URL: {}", self.base_url))?
            .pop_if_empty()
            .extend(["api", "tools", tool]);
        Ok(url)
    }

    /// `POST /api/tools/<name>` with a JSON body.
    pub async fn call_tool(&self, tool: &str, body: &Value) -> SmokeOutcome {
        let name = format!("POST /api/tools/{}", tool);

        match self.tool_url(tool) {
            Ok(url) => envelope_check(name, self.http.post(url).json(body)).await,
            Err(detail) => SmokeOutcome {
                name,
                passed: false,
                status: None,
                detail: truncate_message(&detail, MAX_DETAIL_CHARS),
            },
        }
    }

    /// `POST /api/operational-data` with a JSON body.
    pub async fn post_operational_data(&self, body: &Value) -> SmokeOutcome {
        envelope_check(
            "POST /api/operational-data".to_string(),
            self.http.post(self.url("/api/operational-data")).json(body),
        )
        .await
    }
}

/// Send a request and judge its response envelope.
async fn envelope_check(name: String, request: RequestBuilder) -> SmokeOutcome {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => return transport_failure(name, &e),
    };

    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return transport_failure(name, &e),
    };

    let (passed, detail) = if !status.is_success() {
        let detail = serde_json::from_str::<ApiEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.error_message())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
        (false, detail)
    } else {
        match serde_json::from_str::<ApiEnvelope>(&body) {
            Ok(envelope) if envelope.success => (true, summarize(envelope.result.as_ref())),
            Ok(envelope) => (
                false,
                envelope
                    .error_message()
                    .unwrap_or_else(|| "success = false".to_string()),
            ),
            Err(e) => (false, format!("invalid envelope: {}", e)),
        }
    };

    SmokeOutcome {
        name,
        passed,
        status: Some(status.as_u16()),
        detail: truncate_message(&detail, MAX_DETAIL_CHARS),
    }
}

fn transport_failure(name: String, err: &reqwest::Error) -> SmokeOutcome {
    SmokeOutcome {
        name,
        passed: false,
        status: None,
        detail: truncate_message(&err.to_string(), MAX_DETAIL_CHARS),
    }
}

/// A short description of a successful result payload.
fn summarize(result: Option<&Value>) -> String {
    match result {
        None | Some(Value::Null) => "no result".to_string(),
        Some(Value::Array(items)) => format!("{} items", items.len()),
        Some(Value::Object(fields)) => format!("{} fields", fields.len()),
        Some(other) => truncate_message(&other.to_string(), 60),
    }
}
