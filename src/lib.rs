//! # Warden - credential issuance and session renewal
//!
//! This is a facade crate that re-exports the public APIs of the warden
//! components. Use it to embed the signup / login / refresh service in an
//! axum application, or to reuse the hasher, token issuer and stores alone.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `TokenPayload`, etc.
//! - **Ports**: `AccountStore`, `CredentialHasher`, `TokenIssuer`
//! - **Use cases**: `SignupUseCase`, `LoginUseCase`, `RefreshUseCase`
//! - **Adapters**: `Argon2Hasher`, `JwtTokenIssuer`, `HashMapAccountStore`, `PostgresAccountStore`
//! - **Service**: `AuthService` - the axum router for the three routes
//!
//! ## Usage
//!
//! ```ignore
//! use warden::{AuthService, Argon2Hasher, HashMapAccountStore, JwtTokenIssuer};
//!
//! let service = AuthService::new(HashMapAccountStore::new(), Argon2Hasher::default(), issuer);
//! let app = axum::Router::new().nest("/auth", service.as_nested_router(None));
//! ```

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use warden_core::*;
}

pub use warden_core::{
    AccessToken, Account, AccountName, DecodedToken, Email, HashedPassword, NewAccount, Password,
    RefreshToken, Role, TokenPair, TokenPayload,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use warden_core::{
        AccountStore, AccountStoreError, CredentialHasher, HashingError, TokenError, TokenIssuer,
    };
}

pub use ports::{
    AccountStore, AccountStoreError, CredentialHasher, HashingError, TokenError, TokenIssuer,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::*;
}

pub use warden_application::{LoginUseCase, RefreshUseCase, SignupUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    pub use warden_adapters::{config, handlers, hashing, http, persistence, tokens};
}

pub use warden_adapters::{
    config::{AllowedOrigins, AuthServiceSetting},
    hashing::Argon2Hasher,
    http::AuthApiError,
    persistence::{HashMapAccountStore, PostgresAccountStore},
    tokens::{JwtConfig, JwtTokenIssuer},
};

/// Axum adapters and routes
pub mod axum_routes {
    pub use warden_axum::*;
}

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use warden_auth_service::{
    AuthService, DatabaseSetupError, configure_postgresql, get_postgres_pool, run_migrations,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
