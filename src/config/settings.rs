//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use common::{AppError, AppResult, CorsConfig, DatabaseConfig, ServerConfig, SessionConfig};

use super::constants::{
    DEFAULT_CORS_ORIGIN, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_MIN_CONNECTIONS,
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SESSION_EXPIRATION_HOURS, DEV_SESSION_SECRET, MIN_SESSION_SECRET_LENGTH,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub cors: CorsConfig,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.database.max_connections)
            .field("min_connections", &self.database.min_connections)
            .field("server", &self.server)
            .field("session", &self.session)
            .field("cors", &self.cors)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` when present).
    ///
    /// Fails when SESSION_SECRET is missing in a release build or too short.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let secret = match env::var("SESSION_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, using insecure default for development");
                DEV_SESSION_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "SESSION_SECRET environment variable must be set in production",
                ))
            }
        };

        if secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "SESSION_SECRET must be at least {} characters long",
                MIN_SESSION_SECRET_LENGTH
            )));
        }

        Ok(Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS),
                min_connections: parse_or("DATABASE_MIN_CONNECTIONS", DEFAULT_DATABASE_MIN_CONNECTIONS),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: parse_or("SERVER_PORT", DEFAULT_SERVER_PORT),
            },
            session: SessionConfig {
                secret,
                expiration_hours: parse_or(
                    "SESSION_EXPIRATION_HOURS",
                    DEFAULT_SESSION_EXPIRATION_HOURS,
                ),
            },
            cors: CorsConfig {
                allowed_origin: env::var("CORS_ORIGIN")
                    .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            },
        })
    }

    /// Get session secret bytes for token signing/verification.
    pub fn session_secret_bytes(&self) -> &[u8] {
        self.session.secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgres://admin:hunter2@db/hotels".to_string(),
                max_connections: 5,
                min_connections: 1,
            },
            server: ServerConfig::default(),
            session: SessionConfig {
                secret: "a-very-long-session-secret-for-tests".to_string(),
                expiration_hours: 24,
            },
            cors: CorsConfig::default(),
        }
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let printed = format!("{:?}", sample());
        assert!(!printed.contains("hunter2"));
        assert!(!printed.contains("a-very-long-session-secret-for-tests"));
    }

    #[test]
    fn server_addr_joins_host_and_port() {
        let mut config = sample();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9000;
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
    }
}
