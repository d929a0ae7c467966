mod helpers;
mod login;
mod postgres_store;
mod refresh;
mod signup;
