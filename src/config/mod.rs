use serde::Deserialize;
use std::env;
use thiserror::Error;
use validator::Validate;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    pub app: AppConfig,
    #[validate(nested)]
    pub hall: HallConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Настройки зала и показов, которые заводятся при старте
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HallConfig {
    #[validate(length(min = 1, message = "hall name must not be empty"))]
    pub name: String,
    #[validate(range(min = 1, max = 100))]
    pub rows: usize,
    #[validate(range(min = 1, max = 100))]
    pub cols: usize,
    #[validate(nested)]
    pub shows: Vec<ShowConfig>,
}

#[derive(Debug, Clone, Deserialize, Validate, PartialEq, Eq)]
pub struct ShowConfig {
    #[validate(length(min = 1, message = "show id must not be empty"))]
    pub id: String,
    pub title: String,
    pub time: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a valid number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("HALL_SHOWS entry '{0}' must look like 'id|title|time'")]
    InvalidShow(String),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

pub const DEFAULT_SHOWS: &str = "101|Movie A|7:00 PM;102|Movie B|9:00 PM";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to
    /// defaults for missing keys, then validates it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = Config {
            app: AppConfig {
                environment: var("ENVIRONMENT", "development"),
                rust_log: var("RUST_LOG", "cinema_booking=warn"),
            },
            hall: HallConfig {
                name: var("HALL_NAME", "Hall 1"),
                rows: parse_number("HALL_ROWS", &var("HALL_ROWS", "10"))?,
                cols: parse_number("HALL_COLS", &var("HALL_COLS", "15"))?,
                shows: parse_shows(&var("HALL_SHOWS", DEFAULT_SHOWS))?,
            },
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

// "id|title|time;id|title|time", пустые записи пропускаем
fn parse_shows(value: &str) -> Result<Vec<ShowConfig>, ConfigError> {
    value
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let fields: Vec<&str> = entry.split('|').map(str::trim).collect();
            match fields.as_slice() {
                [id, title, time] => Ok(ShowConfig {
                    id: id.to_string(),
                    title: title.to_string(),
                    time: time.to_string(),
                }),
                _ => Err(ConfigError::InvalidShow(entry.to_string())),
            }
        })
        .collect()
}
