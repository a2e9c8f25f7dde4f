//! Configuration types for display settings.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::Deserialize;
use tracing::warn;

use crate::error::{CoverageError, CoverageResult};

/// Parses an IANA time zone name.
///
/// # Example
///
/// ```
/// use schedule_coverage::config::parse_zone;
///
/// assert_eq!(parse_zone("America/Chicago").unwrap(), chrono_tz::America::Chicago);
/// assert!(parse_zone("local").is_err());
/// ```
pub fn parse_zone(name: &str) -> CoverageResult<Tz> {
    name.parse::<Tz>().map_err(|_| CoverageError::UnknownTimeZone {
        zone: name.to_string(),
    })
}

/// A configured zone: either a named IANA zone or the running system's zone.
///
/// The `local` sentinel only exists at this layer; it is resolved to a
/// concrete zone before anything is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ZoneSetting {
    /// The running system's zone.
    #[default]
    Local,
    /// A named IANA zone.
    Named(Tz),
}

impl ZoneSetting {
    /// Resolves the setting to a concrete zone.
    ///
    /// `Local` is read from the `TZ` environment variable, falling back to
    /// UTC when it is unset or not an IANA name.
    pub fn resolve(&self) -> Tz {
        match self {
            ZoneSetting::Named(tz) => *tz,
            ZoneSetting::Local => resolve_local_zone(),
        }
    }
}

fn resolve_local_zone() -> Tz {
    match std::env::var("TZ") {
        Ok(value) => {
            let name = value.trim_start_matches(':');
            parse_zone(name).unwrap_or_else(|_| {
                warn!(tz = %value, "TZ is not an IANA zone name, using UTC");
                Tz::UTC
            })
        }
        Err(_) => {
            warn!("TZ is not set, using UTC as the local zone");
            Tz::UTC
        }
    }
}

impl FromStr for ZoneSetting {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("local") {
            Ok(ZoneSetting::Local)
        } else {
            parse_zone(s).map(ZoneSetting::Named)
        }
    }
}

impl TryFrom<String> for ZoneSetting {
    type Error = CoverageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSetting::Local => write!(f, "local"),
            ZoneSetting::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// How clock times are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    /// `1:00 PM`
    #[default]
    TwelveHour,
    /// `13:00`
    TwentyFourHour,
}

/// Display configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// The zone times are displayed in.
    #[serde(default)]
    pub display_zone: ZoneSetting,
    /// The zone schedule rules are written in. Defaults to the display zone.
    #[serde(default)]
    pub schedule_zone: Option<ZoneSetting>,
    /// 12- or 24-hour clock.
    #[serde(default)]
    pub clock: ClockStyle,
    /// Whether formatted times carry a zone abbreviation.
    #[serde(default)]
    pub show_zone_suffix: bool,
}
