use warden_core::{
    AccessToken, BearerError, TokenError, TokenIssuer, TokenPayload, is_expired, parse_bearer,
};

/// Error types specific to refresh use case
///
/// Every variant ends in the same unauthorized response; the distinction
/// only exists for logging.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Bearer header rejected: {0}")]
    MalformedHeader(#[from] BearerError),
    #[error("Refresh token is invalid")]
    InvalidToken,
    #[error("Refresh token has expired")]
    Expired,
    #[error("Failed to issue access token: {0}")]
    TokenError(TokenError),
}

impl From<TokenError> for RefreshError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InvalidToken => RefreshError::InvalidToken,
            TokenError::Expired => RefreshError::Expired,
            other => RefreshError::TokenError(other),
        }
    }
}

/// Refresh use case - exchanges a refresh token for a new access token
///
/// The payload of the new access token is rebuilt from the refresh token
/// itself, not from the account store, and the refresh token is not rotated.
pub struct RefreshUseCase<'a, T>
where
    T: TokenIssuer,
{
    token_issuer: &'a T,
}

impl<'a, T> RefreshUseCase<'a, T>
where
    T: TokenIssuer,
{
    pub fn new(token_issuer: &'a T) -> Self {
        Self { token_issuer }
    }

    /// Execute the refresh use case
    ///
    /// # Arguments
    /// * `authorization` - Raw `Authorization` header value, if present
    #[tracing::instrument(name = "RefreshUseCase::execute", skip_all)]
    pub async fn execute(&self, authorization: Option<&str>) -> Result<AccessToken, RefreshError> {
        let token = parse_bearer(authorization)?;

        let decoded = self.token_issuer.verify_refresh_token(token)?;
        if is_expired(decoded.expires_at) {
            return Err(RefreshError::Expired);
        }

        let payload = TokenPayload::build(&decoded.payload);
        let access_token = self.token_issuer.issue_access_token(&payload)?;

        Ok(access_token)
    }
}
