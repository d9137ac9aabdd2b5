use std::path::{Path, PathBuf};

use config::{Config as ConfigLoader, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Search area shown on the shifts header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Street address the distance filter is measured from
    pub address: String,
    /// Search radius in miles
    pub radius_miles: u32,
    /// Total postings within the radius (marketplace-wide, not just the
    /// mock page)
    pub total_results: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            address: "2972 Westheimer Rd. Santa Ana, Illinois 85486".to_string(),
            radius_miles: 23,
            total_results: 223,
        }
    }
}

/// The signed-in worker's identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Brooklyn Simmons".to_string(),
            email: "brooklyn.simmons@example.com".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Event-loop tick interval in milliseconds
    pub tick_rate_ms: u64,
    /// Simulated fetch latency in milliseconds
    pub fetch_latency_ms: u64,
    pub search: SearchConfig,
    pub profile: ProfileConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            fetch_latency_ms: 500,
            search: SearchConfig::default(),
            profile: ProfileConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, merging (highest precedence last): built-in
    /// defaults, an optional TOML file, then `SHIFTDECK_*` environment
    /// variables (e.g. `SHIFTDECK_TICK_RATE_MS=50`).
    pub fn load(file: Option<&Path>) -> Result<Self, Error> {
        let mut builder = ConfigLoader::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).map_err(to_config_err)?);

        let file = file
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path);
        if let Some(path) = file {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("SHIFTDECK").separator("__"));

        let settings = builder.build().map_err(to_config_err)?;
        settings.try_deserialize().map_err(to_config_err)
    }

    /// Default config file location: `~/.shiftdeck/config.toml`
    fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".shiftdeck").join("config.toml"))
    }

    /// Fetch latency as a chrono duration
    pub fn fetch_latency(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.fetch_latency_ms as i64)
    }
}

fn to_config_err(err: config::ConfigError) -> Error {
    Error::Config(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load_without_a_file() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.fetch_latency_ms, 500);
        assert_eq!(config.search.radius_miles, 23);
        assert_eq!(config.profile.name, "Brooklyn Simmons");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "fetch_latency_ms = 50\n\n[profile]\nname = \"Jane Doe\"\nemail = \"jane@example.com\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.fetch_latency_ms, 50);
        assert_eq!(config.profile.name, "Jane Doe");
        // Untouched sections keep their defaults
        assert_eq!(config.tick_rate_ms, 100);
    }
}
