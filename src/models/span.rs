//! The [`Span`] trait shared by every timed record.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::Interval;

/// A record covering a `[start, end)` range of time.
///
/// Implementors can be rebuilt with new bounds, which lets span trimming
/// split a record into pieces while carrying its other fields along.
pub trait Span: Clone {
    /// The inclusive start of the span.
    fn start(&self) -> DateTime<Utc>;

    /// The exclusive end of the span.
    fn end(&self) -> DateTime<Utc>;

    /// Returns a copy of the record with `start` and `end` replaced.
    fn with_bounds(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self;

    /// The span as an [`Interval`] expressed in `zone`.
    fn interval(&self, zone: Tz) -> Interval {
        Interval::from_utc(self.start(), self.end(), zone)
    }
}
