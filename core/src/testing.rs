//! In-memory `Transport` used by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

enum Canned {
    Response(HttpResponse),
    Failure(String),
}

/// Replays canned responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: RefCell<VecDeque<Canned>>,
    seen: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn respond(self, status: u16, body: &[u8]) -> Self {
        self.replies.borrow_mut().push_back(Canned::Response(HttpResponse {
            status,
            body: body.to_vec(),
        }));
        self
    }

    pub fn respond_json(self, body: serde_json::Value) -> Self {
        let bytes = serde_json::to_vec(&body).unwrap();
        self.respond(200, &bytes)
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Canned::Failure(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.borrow_mut().push(request.clone());
        match self.replies.borrow_mut().pop_front() {
            Some(Canned::Response(response)) => Ok(response),
            Some(Canned::Failure(message)) => Err(ApiError::transport(&request.url, message)),
            None => panic!("no canned response left for {}", request.url),
        }
    }
}
