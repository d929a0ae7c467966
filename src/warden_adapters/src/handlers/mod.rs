//! Framework-agnostic credential handlers.
//!
//! These handlers contain the request flows without any framework dependencies.
//! Framework-specific routes extract data from requests, call these handlers,
//! and render the result (or the `AuthApiError`) with their own response builder.

pub mod login;
pub mod refresh;
pub mod signup;

pub use login::{LoginData, handle_login};
pub use refresh::handle_refresh;
pub use signup::{SignupData, handle_signup};
