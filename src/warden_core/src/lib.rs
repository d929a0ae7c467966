pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, NewAccount},
    account_name::{AccountName, AccountNameError},
    bearer::{BearerError, parse_bearer},
    email::{Email, EmailError},
    password::{HashedPassword, Password, PasswordError},
    role::{Role, UnknownRole},
    token::{
        AccessToken, DecodedToken, RefreshToken, TokenPair, TokenPayload, TokenSubject,
        is_expired, is_expired_at,
    },
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{CredentialHasher, HashingError, TokenError, TokenIssuer},
};

pub use http_abstraction::{AuthRequest, AuthResponseBuilder, AuthResponseHelpers};
