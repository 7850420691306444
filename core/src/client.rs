//! Authenticated request construction and response handling for the Todoist API.
//!
//! # Design
//! `TodoistClient` owns the credential, the base URL and one `Transport`.
//! Each call is split into `build_request` (pure), the transport round-trip,
//! and `check_response` (pure), so the I/O boundary stays explicit. The
//! client never retries and never inspects the body of a failed response.

use std::fmt;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::transport::UreqTransport;

/// Base endpoint of the Todoist REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/api/v1";

/// Read-only client for the Todoist API.
///
/// The API token is supplied once at construction and only ever leaves the
/// client inside the `Authorization` header.
#[derive(Clone)]
pub struct TodoistClient<T = UreqTransport> {
    token: String,
    base_url: String,
    transport: T,
}

impl TodoistClient<UreqTransport> {
    /// Client against the public API using a transport without timeout.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_transport(token, DEFAULT_BASE_URL, UreqTransport::new())
    }
}

impl<T: Transport> TodoistClient<T> {
    pub fn with_transport(token: impl Into<String>, base_url: &str, transport: T) -> Self {
        Self {
            token: token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Describe a request to `endpoint` without sending it.
    pub fn build_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}/{}", self.base_url, endpoint.trim_start_matches('/')),
            headers: vec![
                ("Authorization".to_string(), format!("Bearer {}", self.token)),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            query: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Send an authenticated request and return the raw body of a 2xx reply.
    pub fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        let request = self.build_request(method, endpoint, params);
        let response = self.transport.execute(&request)?;
        debug!(
            "Request: {} {} - {} ({} bytes)",
            request.method.as_str(),
            request.url,
            response.status,
            response.body.len()
        );
        check_response(response)
    }

    /// `request` followed by JSON decoding into `D`.
    pub(crate) fn get_json<D: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        what: &'static str,
    ) -> Result<D> {
        let body = self.request(HttpMethod::Get, endpoint, params)?;
        decode(&body, what)
    }
}

impl<T> fmt::Debug for TodoistClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoistClient")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Hand back the body of a 2xx response; any other status becomes
/// `ApiError::Status` and the body is dropped unread.
pub fn check_response(response: HttpResponse) -> Result<Vec<u8>> {
    if response.is_success() {
        Ok(response.body)
    } else {
        Err(ApiError::Status {
            status: response.status,
        })
    }
}

pub(crate) fn decode<D: DeserializeOwned>(body: &[u8], what: &'static str) -> Result<D> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode { what, source })
}
