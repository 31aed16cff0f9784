use axum_helpers::{CorsConfig, JwtConfig};
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Server configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080
        let jwt = JwtConfig::from_env()?; // JWT_SECRET is required
        let cors = CorsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            jwt,
            cors,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "config-test-secret-with-enough-length";

    #[test]
    fn test_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/todo")),
                ("JWT_SECRET", Some(SECRET)),
                ("APP_ENV", None),
                ("PORT", None),
                ("HOST", None),
                ("CORS_ALLOWED_ORIGIN", None),
                ("JWT_ACCESS_TTL_SECS", None),
                ("JWT_REFRESH_TTL_SECS", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "todo_api");
                assert_eq!(config.server.address(), "0.0.0.0:8080");
                assert_eq!(config.jwt.access_token_ttl_secs, 300);
                assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_from_env_requires_jwt_secret() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/todo")),
                ("JWT_SECRET", None::<&str>),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_from_env_requires_database_url() {
        temp_env::with_vars(
            [("DATABASE_URL", None::<&str>), ("JWT_SECRET", Some(SECRET))],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
