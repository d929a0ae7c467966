use ::config::{Config, ConfigError, Environment, File, FileFormat, Map};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{SETTINGS_FILE, env, prod};
use crate::tokens::JwtConfig;

#[derive(Debug, Deserialize)]
pub struct AuthServiceSetting {
    pub app_address: String,
    pub postgres: PostgresSetting,
    pub auth: AuthSetting,
}

#[derive(Debug, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuthSetting {
    pub access_token: TokenSetting,
    pub refresh_token: TokenSetting,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Deserialize)]
pub struct TokenSetting {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

impl TokenSetting {
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig::new(self.secret.clone(), self.time_to_live)
    }
}

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn contains(&self, origin: impl AsRef<[u8]>) -> bool {
        let origin = origin.as_ref();
        self.0.iter().any(|allowed| allowed.as_bytes() == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for AllowedOrigins {
    fn from(origins: Vec<String>) -> Self {
        Self(
            origins
                .into_iter()
                .map(|origin| origin.trim().trim_end_matches('/').to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }
}

impl AuthServiceSetting {
    /// Load settings from defaults, `config/settings.json`, a `.env` file and
    /// the process environment, later sources winning.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from_env(std::env::vars().collect())
    }

    /// Same as [`load`](Self::load) with an explicit environment.
    pub fn load_from_env(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let origins = vars.get(env::ALLOWED_ORIGINS_ENV_VAR).map(|raw| {
            raw.split(',')
                .map(str::to_string)
                .collect::<Vec<String>>()
        });

        let settings = Config::builder()
            .set_default("app_address", prod::APP_ADDRESS)?
            .set_default(
                "auth.access_token.time_to_live",
                prod::ACCESS_TOKEN_TTL_SECONDS,
            )?
            .set_default(
                "auth.refresh_token.time_to_live",
                prod::REFRESH_TOKEN_TTL_SECONDS,
            )?
            .add_source(
                File::with_name(SETTINGS_FILE)
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("postgres.url", vars.get(env::DATABASE_URL_ENV_VAR).cloned())?
            .set_override_option(
                "auth.access_token.secret",
                vars.get(env::ACCESS_TOKEN_SECRET_ENV_VAR).cloned(),
            )?
            .set_override_option(
                "auth.refresh_token.secret",
                vars.get(env::REFRESH_TOKEN_SECRET_ENV_VAR).cloned(),
            )?
            .set_override_option("auth.allowed_origins", origins)?
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, token) in [
            ("access_token", &self.auth.access_token),
            ("refresh_token", &self.auth.refresh_token),
        ] {
            if token.time_to_live <= 0 {
                return Err(ConfigError::Message(format!(
                    "auth.{name}.time_to_live must be positive"
                )));
            }
        }
        Ok(())
    }
}
