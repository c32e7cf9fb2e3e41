//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Configuration Methods
//!
//! ### Method 1: Full listen address
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ### Method 2: Individual components
//!
//! ```bash
//! export API_HOST="0.0.0.0"
//! export API_PORT="3000"
//! ```
//!
//! If `LISTEN` is not set, it is constructed from `API_HOST` and `API_PORT`.
//!
//! ## Optional Variables
//!
//! - `DATA_FILE` - Path to the JSON persistence file (enables the file-backed
//!   store if set; otherwise objects live in memory only)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When set, objects are persisted to this JSON file across restarts.
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let data_file = env::var("DATA_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            listen_addr,
            log_level,
            log_format,
            data_file,
        }
    }

    /// Loads the listen address with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. Constructed from `API_HOST` and `API_PORT`
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT").unwrap_or_else(|_| "3000".to_string());
        format!("{}:{}", host, port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(path) = &self.data_file
            && path.as_os_str().is_empty()
        {
            anyhow::bail!("DATA_FILE must not be empty when set");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.data_file {
            Some(path) => tracing::info!("  Storage: file ({})", path.display()),
            None => tracing::info!("  Storage: in-memory"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
