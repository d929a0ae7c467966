use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use warden_core::{
    AccessToken, DecodedToken, RefreshToken, TokenError, TokenIssuer, TokenPayload,
};

/// Signing secret and lifetime for one kind of token.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn new(secret: Secret<String>, token_ttl_in_seconds: i64) -> Self {
        Self {
            secret,
            token_ttl_in_seconds,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// HS256 JWT issuer.
///
/// Access and refresh tokens are signed with separate secrets, so a token of
/// one kind never verifies as the other.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    access: JwtConfig,
    refresh: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(access: JwtConfig, refresh: JwtConfig) -> Self {
        Self { access, refresh }
    }

    /// Fully validate an access token, expiry included.
    ///
    /// Downstream services holding the access secret authorize requests this way.
    pub fn verify_access_token(&self, token: &str) -> Result<DecodedToken, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode_token(token, &self.access, &validation)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    #[tracing::instrument(name = "Issue access token", skip_all)]
    fn issue_access_token(&self, payload: &TokenPayload) -> Result<AccessToken, TokenError> {
        generate_token(payload, &self.access).map(AccessToken::new)
    }

    #[tracing::instrument(name = "Issue refresh token", skip_all)]
    fn issue_refresh_token(&self, payload: &TokenPayload) -> Result<RefreshToken, TokenError> {
        generate_token(payload, &self.refresh).map(RefreshToken::new)
    }

    #[tracing::instrument(name = "Verify refresh token", skip_all)]
    fn verify_refresh_token(&self, token: &str) -> Result<DecodedToken, TokenError> {
        // exp must be present but is compared by the caller
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        decode_token(token, &self.refresh, &validation)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(flatten)]
    pub payload: TokenPayload,
    pub iat: i64,
    pub exp: i64,
}

// Create a signed JWT for the payload using the config's secret and lifetime
fn generate_token(payload: &TokenPayload, config: &JwtConfig) -> Result<String, TokenError> {
    let delta = chrono::Duration::try_seconds(config.token_ttl_in_seconds).ok_or(
        TokenError::Signing("Failed to create token duration".to_string()),
    )?;

    let now = Utc::now();
    let exp = now
        .checked_add_signed(delta)
        .ok_or(TokenError::Signing("Duration out of range".to_string()))?
        .timestamp();

    let claims = Claims {
        payload: payload.clone(),
        iat: now.timestamp(),
        exp,
    };

    create_token(&claims, config.as_bytes())
}

// Encode claims using the secret
fn create_token(claims: &Claims, secret: &[u8]) -> Result<String, TokenError> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret))
        .map_err(|e| TokenError::Signing(e.to_string()))
}

fn decode_token(
    token: &str,
    config: &JwtConfig,
    validation: &Validation,
) -> Result<DecodedToken, TokenError> {
    let claims = decode::<Claims>(token, &DecodingKey::from_secret(config.as_bytes()), validation)
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::InvalidToken,
            }
        })?;

    Ok(DecodedToken {
        payload: claims.payload,
        issued_at: claims.iat,
        expires_at: claims.exp,
    })
}
