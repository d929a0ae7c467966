use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountNameError {
    #[error("Name is empty")]
    Empty,
}

/// Display name of an account. Trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    pub fn parse(raw: &str) -> Result<Self, AccountNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AccountNameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
