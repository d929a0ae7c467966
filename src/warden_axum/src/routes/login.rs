//! Axum-specific login route.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use secrecy::Secret;
use serde::Deserialize;
use warden_adapters::handlers::{self, LoginData};
use warden_core::{AccountStore, CredentialHasher, TokenIssuer};

use crate::{adapters::response_builder, error::AxumAuthError};

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, T>(
    State((account_store, hasher, token_issuer)): State<(U, H, T)>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AxumAuthError>
where
    U: AccountStore + Clone,
    H: CredentialHasher + Clone,
    T: TokenIssuer + Clone,
{
    let Json(request) = payload?;

    let data = LoginData {
        email: request.email,
        password: request.password,
    };

    handlers::handle_login(
        &account_store,
        &hasher,
        &token_issuer,
        data,
        response_builder(),
    )
    .await
    .map_err(AxumAuthError::from)
}
