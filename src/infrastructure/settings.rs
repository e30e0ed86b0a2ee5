use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub http_addr: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub log_level: String,
}

impl Settings {
    /// Read settings from the process environment (after `.env` has been loaded)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let http_addr = lookup("HTTP_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let db_max_connections = parse_u32(&lookup, "DB_MAX_CONNECTIONS", 10)?;
        let db_min_connections = parse_u32(&lookup, "DB_MIN_CONNECTIONS", 1)?;
        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                message: format!("must not exceed DB_MAX_CONNECTIONS ({db_max_connections})"),
            });
        }

        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());

        Ok(Self {
            database_url,
            http_addr,
            db_max_connections,
            db_min_connections,
            log_level,
        })
    }
}

fn parse_u32<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    let value = raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
        key,
        message: e.to_string(),
    })?;
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            message: "must be > 0".to_string(),
        });
    }
    Ok(value)
}
