//! Blocking HTTP transport backed by ureq.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Production transport. One agent (and its connection pool) is shared by
/// every request of a run.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Transport with no timeout: a hung server blocks the caller forever.
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    /// Transport whose whole round-trip is bounded by `timeout`, if given.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        // 4xx/5xx come back as data; `TodoistClient` interprets the status.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::transport(&request.url, e))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| ApiError::transport(&request.url, e))?;

        Ok(HttpResponse { status, body })
    }
}
