//! Infrastructure adapters for the warden ports.
//!
//! - `hashing`: Argon2id [`CredentialHasher`](warden_core::CredentialHasher)
//! - `tokens`: HS256 JWT [`TokenIssuer`](warden_core::TokenIssuer)
//! - `persistence`: in-memory and PostgreSQL [`AccountStore`](warden_core::AccountStore)
//! - `handlers`: framework-agnostic signup / login / refresh handlers
//! - `http`: mapping of use case errors onto HTTP statuses
//! - `config`: layered service configuration

pub mod config;
pub mod handlers;
pub mod hashing;
pub mod http;
pub mod persistence;
pub mod tokens;
