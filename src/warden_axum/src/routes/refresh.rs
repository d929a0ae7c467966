//! Axum-specific refresh route.

use axum::{
    extract::{Request, State},
    response::Response,
};
use warden_adapters::handlers;
use warden_core::TokenIssuer;

use crate::{
    adapters::{AxumRequest, response_builder},
    error::AxumAuthError,
};

/// Reads the refresh token from the `Authorization: Bearer` header; the body is ignored.
#[tracing::instrument(name = "Refresh", skip_all)]
pub async fn refresh<T>(
    State(token_issuer): State<T>,
    request: Request,
) -> Result<Response, AxumAuthError>
where
    T: TokenIssuer + Clone,
{
    let request = AxumRequest::from(request);

    handlers::handle_refresh(&token_issuer, &request, response_builder())
        .await
        .map_err(AxumAuthError::from)
}
