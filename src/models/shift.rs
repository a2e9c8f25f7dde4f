//! Shift model.
//!
//! A shift is a span of on-call coverage attributed to one user, as returned
//! by the schedule query.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Span;

/// Represents one user's on-call shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// The ID of the user on call.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// The start of the shift.
    pub start: DateTime<Utc>,
    /// The end of the shift.
    pub end: DateTime<Utc>,
    /// True if the real start or end was cut off by the query window.
    #[serde(default)]
    pub truncated: bool,
    /// The start before clamping, when it differs from `start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_start: Option<DateTime<Utc>>,
}

impl Shift {
    /// Creates an untruncated shift.
    pub fn new(user_id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            start,
            end,
            truncated: false,
            display_start: None,
        }
    }

    /// Calculates the length of the shift in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_coverage::models::Shift;
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::new(
    ///     "alice",
    ///     Utc.with_ymd_and_hms(2021, 8, 13, 9, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2021, 8, 13, 17, 30, 0).unwrap(),
    /// );
    /// assert_eq!(shift.hours(), Decimal::new(85, 1)); // 8.5 hours
    /// ```
    pub fn hours(&self) -> Decimal {
        let minutes = (self.end - self.start).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }
}

impl Span for Shift {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }

    fn with_bounds(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }
}
