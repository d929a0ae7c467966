//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers, and convert results to Axum responses.

pub mod login;
pub mod refresh;
pub mod signup;

pub use login::login;
pub use refresh::refresh;
pub use signup::signup;
