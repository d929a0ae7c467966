use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::{HashedPassword, Password},
    token::{AccessToken, DecodedToken, RefreshToken, TokenPayload},
};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Hashing error: {0}")]
pub struct HashingError(pub String);

/// One-way password hashing.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, HashingError>;

    /// Returns `Ok(false)` on mismatch. Errors only when the stored hash is
    /// malformed or the primitive fails.
    async fn verify(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, HashingError>;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token has expired")]
    Expired,
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Issues and verifies signed access and refresh tokens.
pub trait TokenIssuer: Send + Sync {
    fn issue_access_token(&self, payload: &TokenPayload) -> Result<AccessToken, TokenError>;

    fn issue_refresh_token(&self, payload: &TokenPayload) -> Result<RefreshToken, TokenError>;

    /// Check signature and structure of a refresh token. Expiry is left to
    /// the caller so an expired but authentic token still decodes.
    fn verify_refresh_token(&self, token: &str) -> Result<DecodedToken, TokenError>;
}
