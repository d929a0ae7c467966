//! HTTP assembly of the warden credential service.
//!
//! [`AuthService`] wires an account store, a credential hasher and a token
//! issuer into an axum [`Router`](axum::Router) with request tracing and
//! optional CORS. [`helpers`] prepares the PostgreSQL pool.

pub mod auth_service;
pub mod helpers;
mod tracing;

pub use auth_service::AuthService;
pub use helpers::{DatabaseSetupError, configure_postgresql, get_postgres_pool, run_migrations};
