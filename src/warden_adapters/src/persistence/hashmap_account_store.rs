use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use warden_core::{Account, AccountStore, AccountStoreError, Email, NewAccount};

/// In-memory account store keyed by normalized email.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    #[tracing::instrument(name = "Adding account to in-memory store", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
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

    #[tracing::instrument(name = "Retrieving account from in-memory store", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(email)
            .cloned()
            .ok_or(AccountStoreError::NotFound)
    }
}
