//! Decoding of schedule query results.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{CoverageError, CoverageResult};

use super::{Interval, ScheduleRule, Shift, TemporarySchedule, UserOverride};

/// Everything the schedule query returns for one window.
///
/// # Example
///
/// ```
/// use schedule_coverage::models::ScheduleSnapshot;
///
/// let snapshot = ScheduleSnapshot::from_json(r#"{
///     "start": "2021-08-13T00:00:00Z",
///     "end": "2021-08-14T00:00:00Z",
///     "shifts": [{"userID": "alice", "start": "2021-08-13T00:00:00Z", "end": "2021-08-13T08:00:00Z"}]
/// }"#).unwrap();
/// assert_eq!(snapshot.shifts.len(), 1);
/// assert!(snapshot.rules.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    /// The start of the queried window.
    pub start: DateTime<Utc>,
    /// The end of the queried window.
    pub end: DateTime<Utc>,
    /// Shifts computed for the window.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// Temporary schedules overlapping the window.
    #[serde(default)]
    pub temporary_schedules: Vec<TemporarySchedule>,
    /// User overrides overlapping the window.
    #[serde(default)]
    pub user_overrides: Vec<UserOverride>,
    /// The schedule's weekly rules.
    #[serde(default)]
    pub rules: Vec<ScheduleRule>,
}

impl ScheduleSnapshot {
    /// Decodes a snapshot from a JSON query result.
    pub fn from_json(json: &str) -> CoverageResult<Self> {
        serde_json::from_str(json).map_err(|e| CoverageError::InvalidInput {
            message: e.to_string(),
        })
    }

    /// The queried window in `zone`.
    pub fn window(&self, zone: Tz) -> Interval {
        Interval::from_utc(self.start, self.end, zone)
    }
}
