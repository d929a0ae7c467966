//! Axum integration for the warden credential service.
//!
//! This crate provides zero-cost Axum adapters for the framework-agnostic
//! handlers defined in `warden_adapters`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  warden_core: HTTP trait definitions     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  warden_axum: Axum implementations       │
//! │  - AxumRequest newtype wrapper           │
//! │  - AxumResponseBuilder                   │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use warden_axum::routes;
//!
//! let app = Router::new()
//!     .route("/refresh", post(routes::refresh::<JwtTokenIssuer>))
//!     .with_state(token_issuer);
//! ```

pub mod adapters;
pub mod error;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
pub use error::AxumAuthError;
