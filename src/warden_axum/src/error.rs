use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use warden_adapters::http::AuthApiError;

use crate::adapters::response_builder;

/// Axum rendering of [`AuthApiError`].
#[derive(Debug)]
pub struct AxumAuthError(pub AuthApiError);

impl From<AuthApiError> for AxumAuthError {
    fn from(error: AuthApiError) -> Self {
        Self(error)
    }
}

/// A body that fails to extract is reported like any other unexpected
/// failure of the flow.
impl From<JsonRejection> for AxumAuthError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::error!(error = %rejection.body_text(), "request body rejected");
        Self(AuthApiError::Internal)
    }
}

impl IntoResponse for AxumAuthError {
    fn into_response(self) -> Response {
        self.0.into_response_with(response_builder())
    }
}
