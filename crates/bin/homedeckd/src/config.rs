//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homedeck.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use homedeck_adapter_http_axum::dashboard::{DashboardSettings, WeatherSnapshot};
use homedeck_domain::registry::LogPolicy;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Who is using the dashboard.
    pub household: HouseholdConfig,
    /// Action log settings.
    pub history: HistoryConfig,
    /// Page rendering settings.
    pub dashboard: DashboardConfig,
    /// Static weather card contents.
    pub weather: WeatherSnapshot,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `127.0.0.1`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// The single user of this dashboard.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HouseholdConfig {
    /// Identity recorded in every action log entry.
    pub user: String,
}

/// Action log configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Start with a few demo entries from earlier today.
    pub seed: bool,
    /// Record toggles.
    pub log_toggles: bool,
    /// Record slider value changes.
    pub log_value_changes: bool,
}

/// Dashboard page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Name shown under the greeting.
    pub resident_name: String,
    /// Auto-reload interval in seconds.
    pub refresh_seconds: u32,
}

impl Config {
    /// Load configuration from `homedeck.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homedeck.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("HOMEDECK_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("HOMEDECK_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("HOMEDECK_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("HOMEDECK_USER") {
            self.household.user = val;
        }
        if let Some(val) = lookup("HOMEDECK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.household.user.is_empty() {
            return Err(ConfigError::Validation(
                "household user must not be empty".to_string(),
            ));
        }
        if self.dashboard.refresh_seconds == 0 {
            return Err(ConfigError::Validation(
                "refresh_seconds must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Which registry operations append to the action log.
    #[must_use]
    pub fn log_policy(&self) -> LogPolicy {
        LogPolicy {
            toggles: self.history.log_toggles,
            value_changes: self.history.log_value_changes,
        }
    }

    /// Settings handed to the dashboard pages.
    #[must_use]
    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            resident_name: self.dashboard.resident_name.clone(),
            refresh_seconds: self.dashboard.refresh_seconds,
            weather: self.weather.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homedeckd=info,homedeck=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for HouseholdConfig {
    fn default() -> Self {
        Self {
            user: "Amrit".to_string(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        let policy = LogPolicy::default();
        Self {
            seed: true,
            log_toggles: policy.toggles,
            log_value_changes: policy.value_changes,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let settings = DashboardSettings::default();
        Self {
            resident_name: settings.resident_name,
            refresh_seconds: settings.refresh_seconds,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
