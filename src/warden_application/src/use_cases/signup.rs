use warden_core::{
    Account, AccountName, AccountStore, AccountStoreError, CredentialHasher, Email, HashingError,
    NewAccount, Password,
};

/// Validated signup input
#[derive(Debug)]
pub struct SignupRequest {
    pub name: AccountName,
    pub email: Email,
    pub password: Password,
}

/// Error types specific to signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("'{value}' already exist. Select another {field}.")]
    Conflict { field: String, value: String },
    #[error("Failed to hash password: {0}")]
    HashingError(#[from] HashingError),
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
}

impl From<AccountStoreError> for SignupError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::DuplicateKey { field, value } => {
                SignupError::Conflict { field, value }
            }
            other => SignupError::AccountStoreError(other),
        }
    }
}

/// Signup use case - handles account registration
pub struct SignupUseCase<'a, U, H>
where
    U: AccountStore,
    H: CredentialHasher,
{
    account_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> SignupUseCase<'a, U, H>
where
    U: AccountStore,
    H: CredentialHasher,
{
    pub fn new(account_store: &'a U, hasher: &'a H) -> Self {
        Self {
            account_store,
            hasher,
        }
    }

    /// Execute the signup use case
    ///
    /// The password is hashed before anything touches the store; a hashing
    /// failure aborts the signup with nothing persisted.
    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(&self, request: SignupRequest) -> Result<Account, SignupError> {
        let password_hash = self.hasher.hash(&request.password).await?;

        let account = NewAccount::new(request.email, request.name, password_hash);
        let account = self.account_store.create(account).await?;

        tracing::info!(account_id = %account.id(), "account created");
        Ok(account)
    }
}
