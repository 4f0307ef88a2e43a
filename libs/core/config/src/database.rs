use crate::{ConfigError, FromEnv, env_or_default, env_required};

/// Which backing store holds event records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Memory,
    Postgres,
}

impl std::str::FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StoreKind::Memory),
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            other => Err(ConfigError::ParseError {
                key: "EVENT_STORE".to_string(),
                details: format!("unknown store '{}', expected 'memory' or 'postgres'", other),
            }),
        }
    }
}

/// Store selection plus the connection URL when Postgres is used
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub store: StoreKind,
    pub url: Option<String>,
}

impl DatabaseConfig {
    pub fn memory() -> Self {
        Self {
            store: StoreKind::Memory,
            url: None,
        }
    }
}

impl FromEnv for DatabaseConfig {
    /// EVENT_STORE defaults to `memory`; DATABASE_URL is required for `postgres`
    fn from_env() -> Result<Self, ConfigError> {
        let store: StoreKind = env_or_default("EVENT_STORE", "memory").parse()?;
        let url = match store {
            StoreKind::Memory => None,
            StoreKind::Postgres => Some(env_required("DATABASE_URL")?),
        };

        Ok(Self { store, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_memory_without_url() {
        temp_env::with_vars(
            [("EVENT_STORE", None::<&str>), ("DATABASE_URL", None)],
            || {
                let config = DatabaseConfig::from_env().unwrap();
                assert_eq!(config.store, StoreKind::Memory);
                assert!(config.url.is_none());
            },
        );
    }

    #[test]
    fn test_postgres_requires_database_url() {
        temp_env::with_vars(
            [("EVENT_STORE", Some("postgres")), ("DATABASE_URL", None)],
            || {
                let err = DatabaseConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DATABASE_URL"));
            },
        );
    }

    #[test]
    fn test_postgres_with_url() {
        temp_env::with_vars(
            [
                ("EVENT_STORE", Some("Postgres")),
                ("DATABASE_URL", Some("postgres://localhost/events")),
            ],
            || {
                let config = DatabaseConfig::from_env().unwrap();
                assert_eq!(config.store, StoreKind::Postgres);
                assert_eq!(config.url.as_deref(), Some("postgres://localhost/events"));
            },
        );
    }

    #[test]
    fn test_unknown_store_is_rejected() {
        temp_env::with_var("EVENT_STORE", Some("mongodb"), || {
            let err = DatabaseConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("EVENT_STORE"));
        });
    }
}
