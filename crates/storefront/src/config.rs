//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `JACARE_STORAGE_DIR` - Directory backing local storage (default: `.jacare`)
//! - `JACARE_CART_KEY` - Storage key for the cart (default: `jacare_autopecas_carrinho`)
//! - `JACARE_NOTIFICATION_TTL_MS` - Toast lifetime in milliseconds (default: 3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;

use chrono::TimeDelta;
use thiserror::Error;

use crate::cart::CART_STORAGE_KEY;
use crate::page::notifications::{DEFAULT_TTL_MS, MAX_TTL_MS};

const DEFAULT_STORAGE_DIR: &str = ".jacare";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding persisted key-value entries
    pub storage_dir: PathBuf,
    /// Key the cart snapshot is stored under
    pub cart_key: String,
    /// How long toasts stay on screen
    pub notification_ttl: TimeDelta,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            cart_key: CART_STORAGE_KEY.to_string(),
            notification_ttl: TimeDelta::milliseconds(DEFAULT_TTL_MS),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_dir = non_empty(&lookup, "JACARE_STORAGE_DIR")
            .map_or(defaults.storage_dir, PathBuf::from);

        let cart_key = match non_empty(&lookup, "JACARE_CART_KEY") {
            Some(key) => validate_key("JACARE_CART_KEY", key)?,
            None => defaults.cart_key,
        };

        let notification_ttl = match non_empty(&lookup, "JACARE_NOTIFICATION_TTL_MS") {
            Some(raw) => parse_ttl("JACARE_NOTIFICATION_TTL_MS", &raw)?,
            None => defaults.notification_ttl,
        };

        Ok(Self {
            storage_dir,
            cart_key,
            notification_ttl,
            sentry_dsn: non_empty(&lookup, "SENTRY_DSN"),
            sentry_environment: non_empty(&lookup, "SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating blank values as unset.
fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Storage keys become file names, so keep them to a safe alphabet.
fn validate_key(var: &str, key: String) -> Result<String, ConfigError> {
    let valid = !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(key)
    } else {
        Err(ConfigError::InvalidEnvVar(
            var.to_string(),
            format!("{key:?} may only contain letters, digits, '_', '-' and '.'"),
        ))
    }
}

fn parse_ttl(var: &str, raw: &str) -> Result<TimeDelta, ConfigError> {
    let ms = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::InvalidEnvVar(var.to_string(), e.to_string()))?;
    if !(1..=MAX_TTL_MS).contains(&ms) {
        return Err(ConfigError::InvalidEnvVar(
            var.to_string(),
            format!("must be between 1 and {MAX_TTL_MS}"),
        ));
    }
    Ok(TimeDelta::milliseconds(ms))
}
