//! Error types for the schedule coverage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every fallible constructor and loader in the crate. The list and
//! summary operations themselves are total and never return these.

use thiserror::Error;

/// The main error type for the schedule coverage engine.
///
/// # Example
///
/// ```
/// use schedule_coverage::error::CoverageError;
///
/// let error = CoverageError::UnknownTimeZone {
///     zone: "Mars/Olympus_Mons".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown time zone: Mars/Olympus_Mons");
/// ```
#[derive(Debug, Error)]
pub enum CoverageError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A zone name is not a known IANA time zone.
    #[error("Unknown time zone: {zone}")]
    UnknownTimeZone {
        /// The zone name as given.
        zone: String,
    },

    /// A clock time was not of the form `HH:MM`.
    #[error("Invalid clock time '{value}': expected HH:MM")]
    InvalidClockTime {
        /// The rejected value.
        value: String,
    },

    /// A timestamp could not be parsed as RFC 3339.
    #[error("Invalid timestamp '{value}': {message}")]
    InvalidTimestamp {
        /// The rejected value.
        value: String,
        /// A description of the parse error.
        message: String,
    },

    /// An interval ends before it starts.
    #[error("Invalid interval: end {end} is before start {start}")]
    InvalidInterval {
        /// The interval start, RFC 3339.
        start: String,
        /// The interval end, RFC 3339.
        end: String,
    },

    /// Input records could not be decoded.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of the decode error.
        message: String,
    },
}

/// A type alias for Results that return CoverageError.
pub type CoverageResult<T> = Result<T, CoverageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = CoverageError::ConfigNotFound {
            path: "/missing/display.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/display.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = CoverageError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_clock_time_displays_value() {
        let error = CoverageError::InvalidClockTime {
            value: "25:99".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid clock time '25:99': expected HH:MM"
        );
    }

    #[test]
    fn test_invalid_interval_displays_bounds() {
        let error = CoverageError::InvalidInterval {
            start: "2021-08-13T02:00:00Z".to_string(),
            end: "2021-08-13T01:00:00Z".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid interval: end 2021-08-13T01:00:00Z is before start 2021-08-13T02:00:00Z"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CoverageError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_zone() -> CoverageResult<()> {
            Err(CoverageError::UnknownTimeZone {
                zone: "Nowhere".to_string(),
            })
        }

        fn propagates_error() -> CoverageResult<()> {
            returns_unknown_zone()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
