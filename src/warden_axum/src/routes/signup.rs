//! Axum-specific signup route.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use secrecy::Secret;
use serde::Deserialize;
use warden_adapters::handlers::{self, SignupData};
use warden_core::{AccountStore, CredentialHasher};

use crate::{adapters::response_builder, error::AxumAuthError};

/// Request body for signup
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<U, H>(
    State((account_store, hasher)): State<(U, H)>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Response, AxumAuthError>
where
    U: AccountStore + Clone,
    H: CredentialHasher + Clone,
{
    let Json(request) = payload?;

    let data = SignupData {
        name: request.name,
        email: request.email,
        password: request.password,
    };

    handlers::handle_signup(&account_store, &hasher, data, response_builder())
        .await
        .map_err(AxumAuthError::from)
}
