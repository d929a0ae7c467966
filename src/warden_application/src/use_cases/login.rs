use secrecy::Secret;
use warden_core::{
    AccountStore, AccountStoreError, CredentialHasher, Email, HashingError, Password,
    TokenError, TokenIssuer, TokenPair, TokenPayload,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Failed to verify password: {0}")]
    HashingError(#[from] HashingError),
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Failed to issue token: {0}")]
    TokenError(#[from] TokenError),
}

impl From<AccountStoreError> for LoginError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::NotFound => LoginError::AccountNotFound,
            other => LoginError::AccountStoreError(other),
        }
    }
}

/// Login use case - verifies credentials and issues a token pair
pub struct LoginUseCase<'a, U, H, T>
where
    U: AccountStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    account_store: &'a U,
    hasher: &'a H,
    token_issuer: &'a T,
}

impl<'a, U, H, T> LoginUseCase<'a, U, H, T>
where
    U: AccountStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(account_store: &'a U, hasher: &'a H, token_issuer: &'a T) -> Self {
        Self {
            account_store,
            hasher,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// Credentials arrive raw. An email that does not parse cannot belong to
    /// any account and is reported as `AccountNotFound`; an empty password
    /// can never match and is reported as `IncorrectPassword` once the
    /// account is known to exist.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<TokenPair, LoginError> {
        let email = Email::try_from(email).map_err(|_| LoginError::AccountNotFound)?;
        let account = self.account_store.find_by_email(&email).await?;

        let password = Password::try_from(password).map_err(|_| LoginError::IncorrectPassword)?;
        if !self
            .hasher
            .verify(&password, account.password_hash())
            .await?
        {
            return Err(LoginError::IncorrectPassword);
        }

        let payload = TokenPayload::build(&account);
        let access_token = self.token_issuer.issue_access_token(&payload)?;
        let refresh_token = self.token_issuer.issue_refresh_token(&payload)?;

        tracing::info!(account_id = %account.id(), "login succeeded");
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
