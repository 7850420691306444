//! Error types for the Todoist API client.
//!
//! # Design
//! Three failure classes reach the caller: the round-trip never completed
//! (`Transport`), the server answered with a non-2xx status (`Status`), or the
//! body did not have the expected JSON shape (`Decode`). A project that does
//! not exist is not an error at all; lookups return `Ok(None)`.

use thiserror::Error;

/// Boxed underlying cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `TodoistClient` operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or its response could not be read.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The server answered with a non-2xx status. The body is discarded.
    #[error("API returned status code {status}")]
    Status { status: u16 },

    /// The response body could not be deserialized into the expected shape.
    #[error("unmarshaling {what}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ApiError::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    /// HTTP status carried by this error, if the server was reached.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
