//! Framework-agnostic login handler.

use secrecy::Secret;
use warden_application::LoginUseCase;
use warden_core::{
    AccountStore, AuthResponseBuilder, AuthResponseHelpers, CredentialHasher, TokenIssuer,
};

use crate::http::AuthApiError;

/// Raw login credentials, already deserialized from the request body.
pub struct LoginData {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Verify credentials and respond `200` with `{accessToken, refreshToken}`.
///
/// Unknown email is `404`, a wrong password `403`, everything else `500`.
pub async fn handle_login<U, H, T, B>(
    account_store: &U,
    hasher: &H,
    token_issuer: &T,
    data: LoginData,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    U: AccountStore,
    H: CredentialHasher,
    T: TokenIssuer,
    B: AuthResponseBuilder,
{
    let pair = LoginUseCase::new(account_store, hasher, token_issuer)
        .execute(data.email, data.password)
        .await?;

    let body = serde_json::to_value(&pair).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize token pair");
        AuthApiError::Internal
    })?;

    Ok(builder.json(200, body))
}
