//! Runtime configuration
//!
//! Settings are read from environment variables with built-in fallbacks,
//! so the app runs with no configuration at all.

use crate::auth::Credentials;
use crate::engine::HIGH_QUANTITY_THRESHOLD;

/// Application settings resolved at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub high_quantity_threshold: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            high_quantity_threshold: HIGH_QUANTITY_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from the environment (with defaults)
    ///
    /// Recognized variables:
    /// * `INVENTORY_DESK_USERNAME` / `INVENTORY_DESK_PASSWORD`
    /// * `INVENTORY_DESK_HIGH_QTY_THRESHOLD`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let username = std::env::var("INVENTORY_DESK_USERNAME")
            .unwrap_or(defaults.credentials.username);
        let password = std::env::var("INVENTORY_DESK_PASSWORD")
            .unwrap_or(defaults.credentials.password);

        let high_quantity_threshold = std::env::var("INVENTORY_DESK_HIGH_QTY_THRESHOLD")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.high_quantity_threshold);

        Self {
            credentials: Credentials::new(username, password),
            high_quantity_threshold,
        }
    }
}
