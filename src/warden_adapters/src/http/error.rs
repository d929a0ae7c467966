use thiserror::Error;
use warden_application::{LoginError, RefreshError, SignupError};
use warden_core::{AuthResponseBuilder, AuthResponseHelpers};

/// Error code reported alongside a duplicate-key conflict.
pub const DUPLICATE_KEY_ERR_CODE: &str = "DUPLICATE_KEY";

/// Outcome of a failed credential flow, as seen by an HTTP client.
///
/// Each variant maps to exactly one status code. Only `Conflict` carries a
/// body; every other response is empty.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthApiError {
    #[error("'{value}' already exist. Select another {field}.")]
    Conflict { field: String, value: String },
    #[error("Not found")]
    NotFound,
    #[error("Forbidden")]
    Forbidden,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Internal server error")]
    Internal,
}

impl AuthApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            AuthApiError::Conflict { .. } => 409,
            AuthApiError::NotFound => 404,
            AuthApiError::Forbidden => 403,
            AuthApiError::Unauthorized => 401,
            AuthApiError::Internal => 500,
        }
    }

    /// Render the error with any framework's response builder.
    pub fn into_response_with<B: AuthResponseBuilder>(self, builder: B) -> B::Response {
        let status = self.status_code();
        match self {
            conflict @ AuthApiError::Conflict { .. } => builder.json(
                status,
                serde_json::json!({
                    "errCode": DUPLICATE_KEY_ERR_CODE,
                    "errMessage": conflict.to_string(),
                }),
            ),
            _ => builder.empty(status),
        }
    }
}

impl From<SignupError> for AuthApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::Conflict { field, value } => {
                tracing::warn!(%field, "signup rejected: duplicate key");
                AuthApiError::Conflict { field, value }
            }
            other => {
                tracing::error!(error = %other, "signup failed");
                AuthApiError::Internal
            }
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::AccountNotFound => {
                tracing::warn!("login rejected: account not found");
                AuthApiError::NotFound
            }
            LoginError::IncorrectPassword => {
                tracing::warn!("login rejected: incorrect password");
                AuthApiError::Forbidden
            }
            other => {
                tracing::error!(error = %other, "login failed");
                AuthApiError::Internal
            }
        }
    }
}

impl From<RefreshError> for AuthApiError {
    fn from(error: RefreshError) -> Self {
        match &error {
            RefreshError::TokenError(_) => tracing::error!(error = %error, "refresh failed"),
            _ => tracing::warn!(error = %error, "refresh rejected"),
        }
        AuthApiError::Unauthorized
    }
}
