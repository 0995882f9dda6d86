//! Database configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; unset or empty values fall back to the documented default.
//!
//! - `DB_HOST` - `PostgreSQL` host (default: postgres)
//! - `DB_PORT` - `PostgreSQL` port (default: 5432)
//! - `DB_USER` - database user (default: postgres)
//! - `DB_PASSWORD` - database password (default: postgres123)
//! - `DB_NAME` - database name (default: ordersdb)
//!
//! Values are substituted, not validated: a malformed port or bad credential
//! only surfaces when the connection is attempted (see [`crate::db::connect`]).

use secrecy::SecretString;

const DEFAULT_HOST: &str = "postgres";
const DEFAULT_PORT: &str = "5432";
const DEFAULT_USER: &str = "postgres";
const DEFAULT_PASSWORD: &str = "postgres123";
const DEFAULT_DATABASE: &str = "ordersdb";

/// Connection parameters for the order database.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,
    /// Database port, kept as a string until connect time.
    pub port: String,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: SecretString,
    /// Database name.
    pub database: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .finish()
    }
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Never
    /// fails: every field has a default.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            host: get("DB_HOST", DEFAULT_HOST),
            port: get("DB_PORT", DEFAULT_PORT),
            user: get("DB_USER", DEFAULT_USER),
            password: SecretString::from(get("DB_PASSWORD", DEFAULT_PASSWORD)),
            database: get("DB_NAME", DEFAULT_DATABASE),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = DatabaseConfig::from_lookup(|_| None);

        assert_eq!(config.host, "postgres");
        assert_eq!(config.port, "5432");
        assert_eq!(config.user, "postgres");
        assert_eq!(config.password.expose_secret(), "postgres123");
        assert_eq!(config.database, "ordersdb");
    }

    #[test]
    fn test_each_field_overridden_independently() {
        let config = DatabaseConfig::from_lookup(|key| match key {
            "DB_HOST" => Some("db.internal".to_string()),
            "DB_NAME" => Some("orders_test".to_string()),
            _ => None,
        });

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.database, "orders_test");
        // Untouched fields keep their defaults
        assert_eq!(config.port, "5432");
        assert_eq!(config.user, "postgres");
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        let config = DatabaseConfig::from_lookup(|key| match key {
            "DB_HOST" => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.host, "postgres");
    }

    #[test]
    fn test_malformed_port_is_accepted_at_load_time() {
        // Validation is deferred to connect time
        let config = DatabaseConfig::from_lookup(|key| match key {
            "DB_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });

        assert_eq!(config.port, "not-a-port");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DatabaseConfig::from_lookup(|key| match key {
            "DB_PASSWORD" => Some("super_secret_db_password".to_string()),
            _ => None,
        });

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_db_password"));
    }
}
