use thiserror::Error;

const BEARER_SCHEME: &str = "bearer";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Missing authorization header")]
    Missing,
    #[error("Authorization header is not a bearer credential")]
    Malformed,
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively and exactly one non-empty token
/// must follow it.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, BearerError> {
    let header = header.ok_or(BearerError::Missing)?;
    let mut parts = header.split_whitespace();

    let scheme = parts.next().ok_or(BearerError::Malformed)?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(BearerError::Malformed);
    }

    let token = parts.next().ok_or(BearerError::Malformed)?;
    if parts.next().is_some() {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
