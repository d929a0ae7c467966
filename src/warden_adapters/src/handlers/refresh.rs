//! Framework-agnostic refresh handler.

use serde_json::json;
use warden_application::RefreshUseCase;
use warden_core::{AuthRequest, AuthResponseBuilder, AuthResponseHelpers, TokenIssuer};

use crate::http::AuthApiError;

/// Exchange the bearer refresh token for a new access token.
///
/// Responds `200` with `{accessToken}`; any failure is `401`.
pub async fn handle_refresh<T, R, B>(
    token_issuer: &T,
    request: &R,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    T: TokenIssuer,
    R: AuthRequest,
    B: AuthResponseBuilder,
{
    let access_token = RefreshUseCase::new(token_issuer)
        .execute(request.authorization())
        .await?;

    Ok(builder.json(200, json!({ "accessToken": access_token })))
}
