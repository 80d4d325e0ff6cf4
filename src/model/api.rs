//! Wire types of the marketplace API.

use serde::{Deserialize, Serialize};

/// The JSON envelope returned by the marketplace API.
///
/// Successful calls carry `success: true` and a `result` payload, failed calls carry
/// `success: false` and an `error`, usually a message but sometimes a structured object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiEnvelope {
    /// Whether the call succeeded
    pub success: bool,
    /// The payload of a successful call
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// The error of a failed call
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ApiEnvelope {
    /// The error as display text: strings as they are, other values as compact JSON.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }
}
