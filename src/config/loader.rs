//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading display
//! settings from a YAML file and resolving them to concrete zones.

use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use tracing::debug;

use crate::calculation::TimeFormat;
use crate::error::{CoverageError, CoverageResult};

use super::types::DisplayConfig;

/// Loads display settings and exposes them in resolved form.
///
/// # File Format
///
/// ```text
/// display_zone: America/Chicago   # IANA name or "local"
/// schedule_zone: America/New_York # optional, defaults to display_zone
/// clock: twelve_hour              # or twenty_four_hour
/// show_zone_suffix: false
/// ```
///
/// # Example
///
/// ```
/// use schedule_coverage::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_yaml_str("display_zone: America/Chicago").unwrap();
/// assert_eq!(loader.display_zone(), chrono_tz::America::Chicago);
/// assert_eq!(loader.schedule_zone(), chrono_tz::America::Chicago);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DisplayConfig,
    display_zone: Tz,
    schedule_zone: Tz,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML, an unknown field, or an unknown zone
    pub fn load<P: AsRef<Path>>(path: P) -> CoverageResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CoverageError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Loads configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> CoverageResult<Self> {
        Self::parse(yaml, "<inline>")
    }

    fn parse(content: &str, path: &str) -> CoverageResult<Self> {
        let config: DisplayConfig =
            serde_yaml::from_str(content).map_err(|e| CoverageError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from_config(config))
    }

    /// Resolves an already-deserialized configuration.
    pub fn from_config(config: DisplayConfig) -> Self {
        let display_zone = config.display_zone.resolve();
        let schedule_zone = config
            .schedule_zone
            .map(|z| z.resolve())
            .unwrap_or(display_zone);

        debug!(
            display_zone = display_zone.name(),
            schedule_zone = schedule_zone.name(),
            "Resolved display configuration"
        );

        Self {
            config,
            display_zone,
            schedule_zone,
        }
    }

    /// Returns the configuration as written.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The resolved zone times are displayed in.
    pub fn display_zone(&self) -> Tz {
        self.display_zone
    }

    /// The resolved zone schedule rules are written in.
    pub fn schedule_zone(&self) -> Tz {
        self.schedule_zone
    }

    /// The time format described by the configuration.
    pub fn time_format(&self) -> TimeFormat {
        TimeFormat {
            clock: self.config.clock,
            zone_suffix: self.config.show_zone_suffix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockStyle;

    fn config_path() -> &'static str {
        "./config/display.yaml"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.display_zone(), chrono_tz::America::Chicago);
        assert_eq!(loader.schedule_zone(), chrono_tz::America::New_York);
        assert_eq!(loader.time_format().clock, ClockStyle::TwelveHour);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/display.yaml") {
            Err(CoverageError::ConfigNotFound { path }) => {
                assert!(path.contains("display.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_zone_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("display_zone: Mars/Olympus_Mons");
        match result {
            Err(CoverageError::ConfigParseError { path, message }) => {
                assert_eq!(path, "<inline>");
                assert!(message.contains("Mars/Olympus_Mons"), "{message}");
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("display_zone: UTC\ncolour: blue");
        assert!(matches!(result, Err(CoverageError::ConfigParseError { .. })));
    }

    #[test]
    fn test_time_format_from_config() {
        let loader = ConfigLoader::from_yaml_str(
            "display_zone: UTC\nclock: twenty_four_hour\nshow_zone_suffix: true",
        )
        .unwrap();

        let format = loader.time_format();
        assert_eq!(format.clock, ClockStyle::TwentyFourHour);
        assert!(format.zone_suffix);
    }

    #[test]
    fn test_schedule_zone_defaults_to_display_zone() {
        let loader = ConfigLoader::from_yaml_str("display_zone: Asia/Tokyo").unwrap();
        assert_eq!(loader.schedule_zone(), chrono_tz::Asia::Tokyo);
    }
}
