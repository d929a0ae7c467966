pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const ACCESS_TOKEN_SECRET_ENV_VAR: &str = "ACCESS_TOKEN_SECRET";
    pub const REFRESH_TOKEN_SECRET_ENV_VAR: &str = "REFRESH_TOKEN_SECRET";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "WARDEN_ALLOWED_ORIGINS";

    /// Prefix for structured overrides, e.g. `WARDEN__AUTH__ACCESS_TOKEN__TIME_TO_LIVE`.
    pub const ENV_PREFIX: &str = "WARDEN";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const SETTINGS_FILE: &str = "config/settings";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 15 * 60;
    pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
