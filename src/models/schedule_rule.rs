//! Weekly schedule rules: clock times and weekday filters.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CoverageError;

/// A time of day without a date, written `HH:MM`.
///
/// Parsing is strict: hours must be 0-23 and minutes 0-59, so values such
/// as `25:99` are rejected instead of producing an invalid date-time later.
///
/// # Example
///
/// ```
/// use schedule_coverage::models::ClockTime;
///
/// let t: ClockTime = "09:30".parse().unwrap();
/// assert_eq!(t.to_string(), "09:30");
/// assert!("25:99".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Creates a clock time from hours and minutes.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// The hour, 0-23.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// The minute, 0-59.
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// The clock time as a [`NaiveTime`].
    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoverageError::InvalidClockTime {
            value: s.to_string(),
        };

        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        let is_field = |f: &str| (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit());
        if !is_field(hours) || minutes.len() != 2 || !is_field(minutes) {
            return Err(invalid());
        }

        let hour: u32 = hours.parse().map_err(|_| invalid())?;
        let minute: u32 = minutes.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = CoverageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Which days of the week a rule applies to, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdayFilter(pub [bool; 7]);

impl WeekdayFilter {
    /// A filter with every day enabled.
    pub const EVERY_DAY: WeekdayFilter = WeekdayFilter([true; 7]);

    /// Builds a filter from a list of enabled days.
    pub fn from_days(days: &[Weekday]) -> Self {
        let mut filter = [false; 7];
        for day in days {
            filter[day.num_days_from_sunday() as usize] = true;
        }
        Self(filter)
    }

    /// Returns true if the rule applies on `day`.
    pub fn includes(&self, day: Weekday) -> bool {
        self.0[day.num_days_from_sunday() as usize]
    }

    /// Returns true if no day is enabled.
    pub fn is_never(&self) -> bool {
        self.0.iter().all(|d| !d)
    }

    /// Returns true if every day is enabled.
    pub fn is_every_day(&self) -> bool {
        self.0.iter().all(|d| *d)
    }
}

/// A recurring weekly rule, in the schedule's own time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRule {
    /// Clock time the rule starts each enabled day.
    pub start: ClockTime,
    /// Clock time the rule ends.
    pub end: ClockTime,
    /// Days the rule is enabled.
    pub weekday_filter: WeekdayFilter,
}

impl ScheduleRule {
    /// Returns true if the rule covers all times on every day.
    pub fn is_always(&self) -> bool {
        self.weekday_filter.is_every_day() && self.start == self.end
    }
}
