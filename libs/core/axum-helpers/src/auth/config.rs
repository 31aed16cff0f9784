use core_config::{ConfigError, FromEnv, env_parse_or, env_required};

use super::jwt::{DEFAULT_ACCESS_TOKEN_TTL, DEFAULT_REFRESH_TOKEN_TTL};

const MIN_SECRET_LEN: usize = 32;

/// JWT signing configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required, at least 32 characters)
/// - `JWT_ACCESS_TTL_SECS` (default 300)
/// - `JWT_REFRESH_TTL_SECS` (default 86400)
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,
}

impl JwtConfig {
    /// Config with default lifetimes. Fails on secrets shorter than 32 characters.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        check_secret(&secret)?;
        Ok(Self {
            secret,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL,
        })
    }

    pub fn with_ttls(mut self, access_secs: i64, refresh_secs: i64) -> Self {
        self.access_token_ttl_secs = access_secs;
        self.refresh_token_ttl_secs = refresh_secs;
        self
    }
}

fn check_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {MIN_SECRET_LEN} characters (got {}). Generate one with: openssl rand -base64 32",
                secret.len()
            ),
        });
    }
    Ok(())
}

fn positive_ttl(key: &str, default: i64) -> Result<i64, ConfigError> {
    let ttl = env_parse_or(key, default)?;
    if ttl <= 0 {
        return Err(ConfigError::ParseError {
            key: key.to_string(),
            details: format!("must be a positive number of seconds (got {ttl})"),
        });
    }
    Ok(ttl)
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        check_secret(&secret)?;

        Ok(Self {
            secret,
            access_token_ttl_secs: positive_ttl("JWT_ACCESS_TTL_SECS", DEFAULT_ACCESS_TOKEN_TTL)?,
            refresh_token_ttl_secs: positive_ttl(
                "JWT_REFRESH_TTL_SECS",
                DEFAULT_REFRESH_TOKEN_TTL,
            )?,
        })
    }
}
