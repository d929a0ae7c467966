//! Framework-agnostic HTTP abstraction traits.
//!
//! The credential flows only need to read a few request headers and emit a
//! status, an optional JSON body and a handful of headers. Web frameworks
//! implement these traits on newtype wrappers of their own request and
//! response types, so the handlers in `warden_adapters` stay independent of
//! any particular framework.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  warden_core: AuthRequest,               │
//! │               AuthResponseBuilder        │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  warden_axum: AxumRequest(Parts)         │
//! │               AxumResponseBuilder        │
//! └──────────────────────────────────────────┘
//! ```

/// Read access to an incoming HTTP request.
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Lookup must be case-insensitive. Returns `None` if the header is absent
    /// or not valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// The raw `Authorization` header, if any.
    fn authorization(&self) -> Option<&str> {
        self.header("authorization")
    }
}

/// Builder for outgoing HTTP responses.
///
/// ```ignore
/// builder
///     .status(200)
///     .json_body(json!({ "accessToken": token }))
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body and the matching Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Shorthands for the responses the credential flows emit.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    /// A JSON response with the given status
    fn json(self, code: u16, body: serde_json::Value) -> Self::Response {
        self.status(code).json_body(body).build()
    }

    /// A response carrying only a status code
    fn empty(self, code: u16) -> Self::Response {
        self.status(code).build()
    }
}

impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}
