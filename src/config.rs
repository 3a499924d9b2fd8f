use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Ranking behavior knobs
///
/// Factor weights are deliberately not configurable: they are fixed product
/// constants summing to 100, and changing them would change every score.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_threshold")]
    pub default_threshold: u8,
    #[serde(default = "default_max_postings")]
    pub max_postings: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            max_postings: default_max_postings(),
        }
    }
}

fn default_threshold() -> u8 { 40 }
fn default_max_postings() -> usize { 500 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl LoggingSettings {
    /// Effective level: an env var value overrides the configured one
    pub fn level_with_override(&self, env_value: Option<String>) -> String {
        env_value.unwrap_or_else(|| self.level.clone())
    }

    /// Effective format: an env var value overrides the configured one
    pub fn format_with_override(&self, env_value: Option<String>) -> String {
        env_value.unwrap_or_else(|| self.format.clone())
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HIRELINK_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HIRELINK__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HIRELINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HIRELINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching_settings() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_threshold, 40);
        assert_eq!(matching.max_postings, 500);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_logging_env_override() {
        let logging = LoggingSettings {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        };

        // Configured values win when no env var is set
        assert_eq!(logging.level_with_override(None), "warn");
        assert_eq!(logging.format_with_override(None), "pretty");

        // Env vars take precedence
        assert_eq!(
            logging.level_with_override(Some("debug".to_string())),
            "debug"
        );
        assert_eq!(
            logging.format_with_override(Some("json".to_string())),
            "json"
        );
    }
}
