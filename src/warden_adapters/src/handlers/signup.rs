//! Framework-agnostic signup handler.

use secrecy::Secret;
use warden_application::{SignupRequest, SignupUseCase};
use warden_core::{
    AccountName, AccountStore, AuthResponseBuilder, AuthResponseHelpers, CredentialHasher, Email,
    Password,
};

use crate::http::AuthApiError;

/// Raw signup input, already deserialized from the request body.
pub struct SignupData {
    pub name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

impl TryFrom<SignupData> for SignupRequest {
    type Error = AuthApiError;

    fn try_from(data: SignupData) -> Result<Self, Self::Error> {
        let name = AccountName::parse(&data.name).map_err(|e| {
            tracing::error!(error = %e, "signup failed: invalid name");
            AuthApiError::Internal
        })?;
        let email = Email::try_from(data.email).map_err(|e| {
            tracing::error!(error = %e, "signup failed: invalid email");
            AuthApiError::Internal
        })?;
        let password = Password::try_from(data.password).map_err(|e| {
            tracing::error!(error = %e, "signup failed: invalid password");
            AuthApiError::Internal
        })?;

        Ok(SignupRequest {
            name,
            email,
            password,
        })
    }
}

/// Register a new account.
///
/// Responds `201` with an empty body. A duplicate email is a `409` conflict
/// naming the colliding value. Input that does not parse is an internal
/// error, like any other failure outside the conflict case.
pub async fn handle_signup<U, H, B>(
    account_store: &U,
    hasher: &H,
    data: SignupData,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    U: AccountStore,
    H: CredentialHasher,
    B: AuthResponseBuilder,
{
    let request = SignupRequest::try_from(data)?;

    SignupUseCase::new(account_store, hasher)
        .execute(request)
        .await?;

    Ok(builder.empty(201))
}
