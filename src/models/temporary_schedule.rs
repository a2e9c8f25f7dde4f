//! Temporary schedule model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Shift, Span};

/// A span during which a fixed roster of shifts replaces the normal
/// scheduling rules.
///
/// Ordinary shifts are trimmed against temporary schedules before display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporarySchedule {
    /// The start of the temporary schedule.
    pub start: DateTime<Utc>,
    /// The end of the temporary schedule.
    pub end: DateTime<Utc>,
    /// The fixed shifts in effect, in roster order.
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Span for TemporarySchedule {
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
            shifts: self.shifts.clone(),
        }
    }
}
