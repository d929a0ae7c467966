pub mod login;
pub mod refresh;
pub mod signup;

#[cfg(test)]
pub(crate) mod test_support;
