//! Axum framework adapters for the HTTP abstraction.
//!
//! `AuthRequest` and `AuthResponseBuilder` are implemented for Axum's types
//! through newtype wrappers, which sidesteps the orphan rule at no runtime cost.

use axum::body::Body;
use axum::extract::Request as AxumExtractRequest;
use axum::http::{Response, StatusCode, request::Parts};
use warden_core::{AuthRequest, AuthResponseBuilder};

/// Newtype wrapper around the head of an Axum request.
///
/// The body is dropped on conversion: the credential flows only read
/// headers, and `Parts` is `Sync` where a streaming body is not.
#[repr(transparent)]
pub struct AxumRequest(pub Parts);

impl From<AxumExtractRequest> for AxumRequest {
    fn from(req: AxumExtractRequest) -> Self {
        let (parts, _) = req.into_parts();
        AxumRequest(parts)
    }
}

impl AuthRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers.get(name)?.to_str().ok()
    }
}

/// Response builder producing `axum::http::Response<Body>`.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            // an invalid status or header name reached the builder
            tracing::error!(error = %e, "failed to build response");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

/// Fresh Axum response builder for a route handler.
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
