//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `trapcam.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use trapcam_app::services::gallery_controller::GallerySource;
use trapcam_domain::error::TrapcamError;
use trapcam_domain::gallery::{GALLERY, GalleryRegistry, INFERENCE};
use trapcam_domain::status::CaptureSchedule;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Station backend settings.
    pub backend: BackendConfig,
    /// Status polling and capture schedule.
    pub status: StatusConfig,
    /// Galleries to show, in display order.
    pub galleries: Vec<GalleryConfig>,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Station backend location.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Root URL of the backend (e.g. `http://station.local:5000`).
    pub base_url: String,
}

/// Status polling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Delay between two status polls, in milliseconds.
    pub poll_interval_ms: u64,
    /// Hour of the morning capture (0–23).
    pub morning_hour: u32,
    /// Hour of the evening capture (0–23).
    pub evening_hour: u32,
}

/// One gallery and the endpoint publishing its images.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    pub id: String,
    pub endpoint: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `trapcam.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("trapcam.toml")?;
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
        if let Ok(val) = std::env::var("TRAPCAM_BASE_URL") {
            self.backend.base_url = val;
        }
        if let Ok(val) = std::env::var("TRAPCAM_POLL_INTERVAL_MS") {
            if let Ok(interval) = val.parse() {
                self.status.poll_interval_ms = interval;
            }
        }
        if let Ok(val) = std::env::var("TRAPCAM_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "backend base_url must not be empty".to_string(),
            ));
        }
        if self.status.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll_interval_ms must be non-zero".to_string(),
            ));
        }
        if self.galleries.is_empty() {
            return Err(ConfigError::Validation(
                "at least one gallery must be configured".to_string(),
            ));
        }
        self.schedule()?;
        self.registry()?;
        Ok(())
    }

    /// Delay between two status polls.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.status.poll_interval_ms)
    }

    /// Capture schedule built from the configured hours.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Domain`] if an hour is out of range.
    pub fn schedule(&self) -> Result<CaptureSchedule, ConfigError> {
        Ok(CaptureSchedule::new(
            self.status.morning_hour,
            self.status.evening_hour,
        )?)
    }

    /// Empty registry holding every configured gallery.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Domain`] if a gallery id is empty or repeated.
    pub fn registry(&self) -> Result<GalleryRegistry, ConfigError> {
        let builder = self
            .galleries
            .iter()
            .fold(GalleryRegistry::builder(), |builder, gallery| {
                builder.gallery(gallery.id.clone())
            });
        Ok(builder.build()?)
    }

    /// Gallery ids paired with the endpoints to load them from.
    #[must_use]
    pub fn gallery_sources(&self) -> Vec<GallerySource> {
        self.galleries
            .iter()
            .map(|gallery| GallerySource::new(gallery.id.clone(), gallery.endpoint.clone()))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            status: StatusConfig::default(),
            galleries: vec![
                GalleryConfig {
                    id: GALLERY.to_string(),
                    endpoint: "/images".to_string(),
                },
                GalleryConfig {
                    id: INFERENCE.to_string(),
                    endpoint: "/inference-images".to_string(),
                },
            ],
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            morning_hour: 7,
            evening_hour: 20,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "trapcam=info,trapcam_app=info,trapcam_adapter_http_reqwest=info".to_string(),
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
    /// A value rejected by the domain (gallery ids, capture hours).
    #[error("invalid configuration")]
    Domain(#[from] TrapcamError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.galleries.len(), 2);
        assert_eq!(config.galleries[0].id, "gallery");
        assert_eq!(config.galleries[1].id, "inference");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.status.poll_interval_ms, 1000);
        assert_eq!(config.galleries.len(), 2);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [backend]
            base_url = 'http://station.local:5000'

            [status]
            poll_interval_ms = 5000
            morning_hour = 6
            evening_hour = 19

            [[galleries]]
            id = 'daylight'
            endpoint = '/api/daylight'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.base_url, "http://station.local:5000");
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.schedule().unwrap(), CaptureSchedule::new(6, 19).unwrap());
        assert_eq!(
            config.gallery_sources(),
            vec![GallerySource::new("daylight", "/api/daylight")]
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.status.poll_interval_ms, 1000);
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = Config::default();
        config.status.poll_interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_empty_base_url() {
        let mut config = Config::default();
        config.backend.base_url = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_empty_gallery_list() {
        let mut config = Config::default();
        config.galleries.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_duplicate_gallery_ids() {
        let mut config = Config::default();
        config.galleries[1].id = "gallery".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Domain(_))));
    }

    #[test]
    fn should_reject_out_of_range_capture_hour() {
        let mut config = Config::default();
        config.status.evening_hour = 25;
        assert!(matches!(config.validate(), Err(ConfigError::Domain(_))));
    }

    #[test]
    fn should_build_registry_in_configured_order() {
        let registry = Config::default().registry().unwrap();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec!["gallery", "inference"]);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
