//! Half-open time intervals and the set operations over them.
//!
//! Every list, calendar and coverage computation in the crate is expressed
//! in terms of [`Interval`]: merging (union of a set), difference against a
//! set, and splitting at a list of instants.

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::error::{CoverageError, CoverageResult};

/// A half-open interval `[start, end)` anchored in a time zone.
///
/// An interval is valid when `start <= end`. Zero-length intervals are valid
/// and empty. Invalid intervals can be constructed so that callers can check
/// validity separately; the list operations treat them as producing nothing.
///
/// # Example
///
/// ```
/// use schedule_coverage::models::Interval;
/// use chrono::TimeZone;
/// use chrono_tz::America::New_York;
///
/// let a = Interval::new(
///     New_York.with_ymd_and_hms(2021, 8, 13, 0, 0, 0).unwrap(),
///     New_York.with_ymd_and_hms(2021, 8, 13, 3, 0, 0).unwrap(),
/// );
/// let b = Interval::new(
///     New_York.with_ymd_and_hms(2021, 8, 13, 1, 0, 0).unwrap(),
///     New_York.with_ymd_and_hms(2021, 8, 13, 2, 0, 0).unwrap(),
/// );
/// assert_eq!(a.difference(&[b]).len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// The inclusive start of the interval.
    pub start: DateTime<Tz>,
    /// The exclusive end of the interval.
    pub end: DateTime<Tz>,
}

impl Interval {
    /// Creates an interval without checking that `start <= end`.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self { start, end }
    }

    /// Creates an interval, rejecting reversed bounds.
    pub fn try_new(start: DateTime<Tz>, end: DateTime<Tz>) -> CoverageResult<Self> {
        let interval = Self::new(start, end);
        if interval.is_valid() {
            Ok(interval)
        } else {
            Err(CoverageError::InvalidInterval {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            })
        }
    }

    /// Creates an interval from UTC instants, expressed in `zone`.
    pub fn from_utc(start: DateTime<Utc>, end: DateTime<Utc>, zone: Tz) -> Self {
        Self::new(start.with_timezone(&zone), end.with_timezone(&zone))
    }

    /// Returns true when `start <= end`.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Returns true for zero-length intervals.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The zone the interval's start is expressed in.
    pub fn zone(&self) -> Tz {
        self.start.timezone()
    }

    /// The length of the interval.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Re-expresses both bounds in `zone`. The instants are unchanged.
    pub fn with_zone(&self, zone: Tz) -> Self {
        Self::new(self.start.with_timezone(&zone), self.end.with_timezone(&zone))
    }

    /// Returns true if `at` falls within `[start, end)`.
    pub fn contains(&self, at: DateTime<Tz>) -> bool {
        self.start <= at && at < self.end
    }

    /// Returns true if the two intervals share any instant.
    ///
    /// Zero-length intervals contain no instant and overlap nothing.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < self.end
            && other.start < other.end
            && self.end > other.start
            && self.start < other.end
    }

    /// The overlapping portion of the two intervals, if it is non-empty.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        self.overlaps(other).then(|| {
            let zone = self.zone();
            Interval::new(
                self.start.max(other.start.with_timezone(&zone)),
                self.end.min(other.end.with_timezone(&zone)),
            )
        })
    }

    /// The smallest interval covering both intervals.
    pub fn union(&self, other: &Interval) -> Interval {
        let zone = self.zone();
        Interval::new(
            self.start.min(other.start.with_timezone(&zone)),
            self.end.max(other.end.with_timezone(&zone)),
        )
    }

    /// Merges a set of intervals into a sorted list of disjoint intervals.
    ///
    /// Overlapping and touching intervals become one. Invalid intervals are
    /// ignored.
    pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
        let mut sorted: Vec<Interval> = intervals.iter().filter(|i| i.is_valid()).copied().collect();
        sorted.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

        let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
        for interval in sorted {
            if let Some(last) = merged.last_mut() {
                if interval.start <= last.end {
                    *last = last.union(&interval);
                    continue;
                }
            }
            merged.push(interval);
        }
        merged
    }

    /// The portions of this interval not covered by any of `others`.
    ///
    /// Pieces are returned in order and are never empty. An invalid or
    /// zero-length interval has no difference.
    pub fn difference(&self, others: &[Interval]) -> Vec<Interval> {
        if !self.is_valid() {
            return Vec::new();
        }

        let zone = self.zone();
        let mut pieces = Vec::new();
        let mut cursor = self.start;

        for other in Interval::merge(others) {
            if other.end <= cursor {
                continue;
            }
            if other.start >= self.end {
                break;
            }
            if other.start > cursor {
                pieces.push(Interval::new(cursor, other.start.with_timezone(&zone)));
            }
            cursor = cursor.max(other.end.with_timezone(&zone));
        }

        if cursor < self.end {
            pieces.push(Interval::new(cursor, self.end));
        }
        pieces
    }

    /// Splits the interval at each of `points` lying strictly inside it.
    ///
    /// Points outside the interval or on its bounds are ignored. An invalid
    /// interval yields nothing.
    pub fn split_at(&self, points: &[DateTime<Tz>]) -> Vec<Interval> {
        if !self.is_valid() {
            return Vec::new();
        }

        let zone = self.zone();
        let mut cuts: Vec<DateTime<Tz>> = points
            .iter()
            .map(|p| p.with_timezone(&zone))
            .filter(|p| *p > self.start && *p < self.end)
            .collect();
        cuts.sort();
        cuts.dedup();

        let mut pieces = Vec::with_capacity(cuts.len() + 1);
        let mut cursor = self.start;
        for cut in cuts {
            pieces.push(Interval::new(cursor, cut));
            cursor = cut;
        }
        pieces.push(Interval::new(cursor, self.end));
        pieces
    }
}
