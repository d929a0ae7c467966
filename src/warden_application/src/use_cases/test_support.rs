//! In-memory doubles for the ports, shared by the use case tests.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use uuid::Uuid;
use warden_core::{
    AccessToken, Account, AccountName, AccountStore, AccountStoreError, CredentialHasher,
    DecodedToken, Email, HashedPassword, HashingError, NewAccount, Password, RefreshToken,
    TokenError, TokenIssuer, TokenPayload,
};

#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
    pub fail_unexpectedly: bool,
}

impl MockAccountStore {
    /// A store whose every call fails as if the backend went away.
    pub fn failing() -> Self {
        Self {
            fail_unexpectedly: true,
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        if self.fail_unexpectedly {
            return Err(AccountStoreError::UnexpectedError("connection reset".into()));
        }
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(AccountStoreError::DuplicateKey {
                field: "email".to_string(),
                value: account.email.as_str().to_string(),
            });
        }
        let account = account.into_account(Uuid::new_v4());
        accounts.insert(account.email().clone(), account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        if self.fail_unexpectedly {
            return Err(AccountStoreError::UnexpectedError("connection reset".into()));
        }
        self.accounts
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(AccountStoreError::NotFound)
    }
}

/// Stores passwords as `plain$<password>`; a stored hash of `broken` is malformed.
#[derive(Clone, Default)]
pub struct PlainHasher {
    pub fail_hashing: bool,
}

#[async_trait::async_trait]
impl CredentialHasher for PlainHasher {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, HashingError> {
        if self.fail_hashing {
            return Err(HashingError("out of memory".into()));
        }
        Ok(HashedPassword::new(Secret::new(format!(
            "plain${}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, HashingError> {
        let stored = hash.as_ref().expose_secret();
        let Some(plain) = stored.strip_prefix("plain$") else {
            return Err(HashingError("malformed hash".into()));
        };
        Ok(plain == password.as_ref().expose_secret())
    }
}

/// Tokens are `<kind>|<exp>|<payload json>`, unsigned.
#[derive(Clone)]
pub struct MockTokenIssuer {
    pub refresh_ttl_seconds: i64,
}

impl Default for MockTokenIssuer {
    fn default() -> Self {
        Self {
            refresh_ttl_seconds: 3600,
        }
    }
}

impl MockTokenIssuer {
    fn encode(kind: &str, ttl: i64, payload: &TokenPayload) -> String {
        let exp = Utc::now().timestamp() + ttl;
        let json = serde_json::to_string(payload).expect("payload serializes");
        format!("{kind}|{exp}|{json}")
    }

    pub fn decode_access(token: &AccessToken) -> TokenPayload {
        let json = token.as_str().splitn(3, '|').nth(2).expect("access token");
        serde_json::from_str(json).expect("access payload")
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue_access_token(&self, payload: &TokenPayload) -> Result<AccessToken, TokenError> {
        Ok(AccessToken::new(Self::encode("access", 900, payload)))
    }

    fn issue_refresh_token(&self, payload: &TokenPayload) -> Result<RefreshToken, TokenError> {
        Ok(RefreshToken::new(Self::encode(
            "refresh",
            self.refresh_ttl_seconds,
            payload,
        )))
    }

    fn verify_refresh_token(&self, token: &str) -> Result<DecodedToken, TokenError> {
        let mut parts = token.splitn(3, '|');
        if parts.next() != Some("refresh") {
            return Err(TokenError::InvalidToken);
        }
        let expires_at = parts
            .next()
            .and_then(|exp| exp.parse::<i64>().ok())
            .ok_or(TokenError::InvalidToken)?;
        let payload = parts
            .next()
            .and_then(|json| serde_json::from_str(json).ok())
            .ok_or(TokenError::InvalidToken)?;
        Ok(DecodedToken {
            payload,
            issued_at: expires_at - self.refresh_ttl_seconds,
            expires_at,
        })
    }
}

pub fn email(raw: &str) -> Email {
    Email::parse(raw).unwrap()
}

pub fn name(raw: &str) -> AccountName {
    AccountName::parse(raw).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}
