//! Splitting intervals at local midnight.

use chrono::{DateTime, Days};
use chrono_tz::Tz;

use crate::models::Interval;

use super::week::start_of_day;

/// Splits an interval at every local midnight strictly inside it.
///
/// Midnights are taken in the interval's own zone. The first piece starts at
/// the interval's start and the last ends at its end; every internal boundary
/// is the start of a local day.
///
/// # Returns
///
/// - `[interval]` for a same-day or zero-length interval
/// - one piece per calendar day touched otherwise
/// - nothing for an invalid interval
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::split_at_midnight;
/// use schedule_coverage::models::Interval;
/// use chrono::TimeZone;
/// use chrono_tz::America::Chicago;
///
/// let interval = Interval::new(
///     Chicago.with_ymd_and_hms(2021, 8, 13, 22, 0, 0).unwrap(),
///     Chicago.with_ymd_and_hms(2021, 8, 15, 6, 0, 0).unwrap(),
/// );
/// let days = split_at_midnight(&interval);
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[1].start, Chicago.with_ymd_and_hms(2021, 8, 14, 0, 0, 0).unwrap());
/// ```
pub fn split_at_midnight(interval: &Interval) -> Vec<Interval> {
    if !interval.is_valid() {
        return Vec::new();
    }
    if interval.is_empty() {
        return vec![*interval];
    }

    let zone = interval.zone();
    let mut midnights: Vec<DateTime<Tz>> = Vec::new();
    let mut day = interval.start.date_naive().checked_add_days(Days::new(1));
    while let Some(date) = day {
        let midnight = start_of_day(date, zone);
        if midnight >= interval.end {
            break;
        }
        midnights.push(midnight);
        day = date.checked_add_days(Days::new(1));
    }

    interval.split_at(&midnights)
}
