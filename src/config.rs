//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// API key used when `API_KEY` is not set.
pub const DEFAULT_API_KEY: &str = "secret-key";

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PORT` (optional): HTTP server port, defaults to 3000
/// - `API_KEY` (optional): shared secret for write endpoints, defaults to `secret-key`
/// - `SEED_DATA` (optional): load the demo catalog at startup, defaults to true
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_api_key")]
    pub api_key: String,

    #[serde(default = "default_seed_data")]
    pub seed_data: bool,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_seed_data() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into the expected type (e.g. `PORT=abc`).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: api_key -> API_KEY
        envy::from_env::<Config>()
    }

    /// Whether the write endpoints are protected by the well-known default key.
    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}
