//! Configuration management.
//!
//! Configuration comes from an optional TOML file, then environment
//! variables, then command-line flags.
//!
//! ```toml
//! data_dir = "/home/me/.local/share/catfacts"
//! storage_key = "catfacts"
//!
//! [api]
//! endpoint = "https://catfact.ninja/fact"
//! timeout_ms = 10000
//! connect_timeout_ms = 3000
//!
//! [logging]
//! level = "info"
//! format = "json"
//! file = "/tmp/catfacts.log"
//!
//! [metrics]
//! enabled = true
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default key the fact list is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "catfacts";

/// Default fact API endpoint.
pub const DEFAULT_API_ENDPOINT: &str = "https://catfact.ninja/fact";

/// Main configuration for catfacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatfactsConfig {
    /// Directory holding the key-value store files.
    pub data_dir: PathBuf,
    /// Key the saved fact list is stored under.
    pub storage_key: String,
    /// Fact API settings.
    pub api: ApiConfig,
    /// Logging settings.
    pub logging: LoggingSettings,
    /// Metrics settings.
    pub metrics: MetricsSettings,
}

/// Fact API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// URL of the random-fact endpoint.
    pub endpoint: String,
    /// Request timeout in milliseconds (0 to disable).
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds (0 to disable).
    pub connect_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_ms: 10_000,
            connect_timeout_ms: 3_000,
        }
    }
}

/// Logging section, shared by the config file and runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Level filter, e.g. `info` or `catfacts=debug`.
    pub level: Option<String>,
    /// `pretty` or `json`.
    pub format: Option<String>,
    /// Log file path; stderr when unset.
    pub file: Option<PathBuf>,
}

/// Metrics section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MetricsSettings {
    /// Record counters and print them after each command.
    pub enabled: Option<bool>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Data directory.
    pub data_dir: Option<String>,
    /// Storage key.
    pub storage_key: Option<String>,
    /// API section.
    pub api: Option<ConfigFileApi>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
    /// Metrics section.
    pub metrics: Option<MetricsSettings>,
}

/// API section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileApi {
    /// Endpoint URL.
    pub endpoint: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: Option<u64>,
}

impl Default for CatfactsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            api: ApiConfig::default(),
            logging: LoggingSettings::default(),
            metrics: MetricsSettings::default(),
        }
    }
}

impl CatfactsConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid config file.
    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/catfacts/` on macOS)
    /// 2. XDG config dir (`~/.config/catfacts/`)
    ///
    /// Returns default configuration if no readable config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = config_candidates(base_dirs.config_dir(), base_dirs.home_dir());

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
                },
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `CatfactsConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(data_dir) = file.data_dir {
            config.data_dir = PathBuf::from(data_dir);
        }
        if let Some(key) = file.storage_key {
            config.storage_key = key;
        }
        if let Some(api) = file.api {
            if let Some(endpoint) = api.endpoint {
                config.api.endpoint = endpoint;
            }
            if let Some(timeout_ms) = api.timeout_ms {
                config.api.timeout_ms = timeout_ms;
            }
            if let Some(connect_timeout_ms) = api.connect_timeout_ms {
                config.api.connect_timeout_ms = connect_timeout_ms;
            }
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }
        if let Some(metrics) = file.metrics {
            config.metrics = metrics;
        }

        config
    }

    /// Applies `CATFACTS_*` environment variable overrides.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from a variable lookup.
    ///
    /// Empty values are ignored, as are timeouts that do not parse.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = var("CATFACTS_DATA_DIR") {
            self.data_dir = PathBuf::from(v);
        }
        if let Some(v) = var("CATFACTS_STORAGE_KEY") {
            self.storage_key = v;
        }
        if let Some(v) = var("CATFACTS_API_URL") {
            self.api.endpoint = v;
        }
        if let Some(timeout_ms) = var("CATFACTS_HTTP_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.api.timeout_ms = timeout_ms;
        }
        if let Some(connect_timeout_ms) =
            var("CATFACTS_HTTP_CONNECT_TIMEOUT_MS").and_then(|v| v.parse().ok())
        {
            self.api.connect_timeout_ms = connect_timeout_ms;
        }
        if let Some(v) = var("CATFACTS_LOG_LEVEL") {
            self.logging.level = Some(v);
        }
        if let Some(v) = var("CATFACTS_LOG_FORMAT") {
            self.logging.format = Some(v);
        }
        if let Some(v) = var("CATFACTS_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(v));
        }
        if let Some(enabled) = var("CATFACTS_METRICS_ENABLED").map(|v| parse_bool(&v)) {
            self.metrics.enabled = Some(enabled);
        }

        self
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = path.into();
        self
    }

    /// Enables metrics recording.
    #[must_use]
    pub fn with_metrics_enabled(mut self, enabled: bool) -> Self {
        self.metrics.enabled = Some(enabled);
        self
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl fmt::Display for CatfactsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "data_dir = {}", self.data_dir.display())?;
        writeln!(f, "storage_key = {}", self.storage_key)?;
        writeln!(f, "api.endpoint = {}", self.api.endpoint)?;
        writeln!(f, "api.timeout_ms = {}", self.api.timeout_ms)?;
        writeln!(f, "api.connect_timeout_ms = {}", self.api.connect_timeout_ms)?;
        writeln!(
            f,
            "logging.level = {}",
            self.logging.level.as_deref().unwrap_or("(default)")
        )?;
        writeln!(
            f,
            "logging.format = {}",
            self.logging.format.as_deref().unwrap_or("pretty")
        )?;
        writeln!(
            f,
            "logging.file = {}",
            self.logging
                .file
                .as_ref()
                .map_or_else(|| "(stderr)".to_string(), |p| p.display().to_string())
        )?;
        write!(
            f,
            "metrics.enabled = {}",
            self.metrics.enabled.unwrap_or(false)
        )
    }
}

/// Config file locations to try, in order, without repeats.
///
/// On Linux the platform config dir already is `~/.config`.
fn config_candidates(config_dir: &Path, home_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![config_dir.join("catfacts").join("config.toml")];
    let xdg = home_dir.join(".config").join("catfacts").join("config.toml");
    if !candidates.contains(&xdg) {
        candidates.push(xdg);
    }
    candidates
}

fn parse_bool(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value == "true" || value == "1" || value == "yes"
}

/// Returns the platform data directory for catfacts, or `.catfacts` when it
/// cannot be determined.
fn default_data_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from(".catfacts"),
        |b| b.data_local_dir().join("catfacts"),
    )
}
