//! Mock endpoints answering with the charter service JSON envelope.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, fixtures::charter::CharterFixtures};

impl<'a> CharterFixtures<'a> {
    /// Create a mock endpoint returning `envelope` with the given status.
    ///
    /// # Arguments
    /// - `method` - HTTP method
    /// - `path` - Request path
    /// - `status` - HTTP status code of the response
    /// - `envelope` - JSON body, usually `{"success": .., "result" | "error": ..}`
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Ok(Mock)` - The created mock endpoint
    /// - `Err(TestError::JsonError)` - The envelope could not be serialized
    pub fn create_envelope_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        envelope: &Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(envelope)?)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock health endpoint returning a plain body.
    pub fn create_health_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/health")
            .with_status(status)
            .with_body("ok")
            .expect(expected_requests)
            .create()
    }
}
