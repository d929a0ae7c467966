use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Anything a token payload can be projected from.
///
/// Accounts loaded at login and payloads decoded from a refresh token both
/// implement this, so payload construction is identical on every path.
pub trait TokenSubject {
    fn subject_id(&self) -> String;
    fn subject_name(&self) -> &str;
    fn subject_role(&self) -> Role;
}

/// Identity projection embedded in every token. Never carries secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    #[serde(rename = "sub")]
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl TokenPayload {
    pub fn build<S: TokenSubject + ?Sized>(subject: &S) -> Self {
        Self {
            id: subject.subject_id(),
            name: subject.subject_name().to_string(),
            role: subject.subject_role(),
        }
    }
}

impl TokenSubject for TokenPayload {
    fn subject_id(&self) -> String {
        self.id.clone()
    }

    fn subject_name(&self) -> &str {
        &self.name
    }

    fn subject_role(&self) -> Role {
        self.role
    }
}

/// A refresh token whose signature and structure have been verified.
/// Expiry has not been checked yet.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub payload: TokenPayload,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Signed short-lived access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

/// Signed long-lived refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

macro_rules! token_string {
    ($name:ident) => {
        impl $name {
            pub fn new(token: String) -> Self {
                Self(token)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self(token)
            }
        }
    };
}

token_string!(AccessToken);
token_string!(RefreshToken);

/// Token pair handed out on a successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
}

/// Whether a token expiring at `expires_at` (unix seconds) is expired now.
pub fn is_expired(expires_at: i64) -> bool {
    is_expired_at(expires_at, Utc::now().timestamp())
}

/// Clock-free variant of [`is_expired`]. A token is expired from its `exp` second on.
pub fn is_expired_at(expires_at: i64, now: i64) -> bool {
    expires_at <= now
}
