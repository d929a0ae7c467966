use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount},
    email::Email,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Duplicate value for {field}")]
    DuplicateKey { field: String, value: String },
    #[error("Account not found")]
    NotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::DuplicateKey { field, value },
                Self::DuplicateKey {
                    field: other_field,
                    value: other_value,
                },
            ) => field == other_field && value == other_value,
            (Self::NotFound, Self::NotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account. A uniqueness violation is reported as
    /// `DuplicateKey` naming the colliding field and value.
    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError>;

    /// Look an account up by its (normalized) email.
    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError>;
}
