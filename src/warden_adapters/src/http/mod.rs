pub mod error;

pub use error::{AuthApiError, DUPLICATE_KEY_ERR_CODE};
// Re-export HTTP traits from warden_core for convenience
pub use warden_core::{AuthRequest, AuthResponseBuilder, AuthResponseHelpers};
