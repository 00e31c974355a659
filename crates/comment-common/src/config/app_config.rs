//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present).

use serde::Deserialize;
use std::env;
use std::sync::atomic::{AtomicI32, Ordering};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub snowflake: SnowflakeConfig,
    /// Initial flags-allowed threshold; becomes a [`ModerationSettings`]
    #[serde(default)]
    pub flags_allowed: i32,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

/// Live moderation settings, shared across the process
///
/// The flags-allowed threshold is read on every `is_flagged` evaluation
/// and every listing query, so changing it takes effect immediately.
/// Zero (the default) disables flag-based hiding.
#[derive(Debug, Default)]
pub struct ModerationSettings {
    flags_allowed: AtomicI32,
}

impl ModerationSettings {
    /// Create settings with the given initial threshold
    pub fn new(flags_allowed: i32) -> Self {
        Self {
            flags_allowed: AtomicI32::new(flags_allowed),
        }
    }

    /// Current flags-allowed threshold
    pub fn flags_allowed(&self) -> i32 {
        self.flags_allowed.load(Ordering::Relaxed)
    }

    /// Replace the flags-allowed threshold
    pub fn set_flags_allowed(&self, value: i32) {
        self.flags_allowed.store(value, Ordering::Relaxed);
    }
}

// Default value functions
fn default_app_name() -> String {
    "comment-engine".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            snowflake: SnowflakeConfig {
                worker_id: env::var("SNOWFLAKE_WORKER_ID")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0),
            },
            flags_allowed: env::var("COMMENT_FLAGS_ALLOWED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        })
    }

    /// Build the shared moderation settings from this config
    pub fn moderation_settings(&self) -> ModerationSettings {
        ModerationSettings::new(self.flags_allowed)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_predicates() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Production.is_development());
        assert!(Environment::Development.is_development());
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn test_moderation_settings_default_off() {
        let settings = ModerationSettings::default();
        assert_eq!(settings.flags_allowed(), 0);
    }

    #[test]
    fn test_moderation_settings_updates_are_visible() {
        let settings = ModerationSettings::new(0);
        settings.set_flags_allowed(2);
        assert_eq!(settings.flags_allowed(), 2);
        settings.set_flags_allowed(0);
        assert_eq!(settings.flags_allowed(), 0);
    }
}
