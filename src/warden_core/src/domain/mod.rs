pub mod account;
pub mod account_name;
pub mod bearer;
pub mod email;
pub mod password;
pub mod role;
pub mod token;
