//! Per-day subheaders for the shift list.

use chrono_tz::Tz;
use tracing::debug;

use crate::models::{Interval, Shift};

use super::format::format_day_label;
use super::list_items::{SubheaderItem, display_bounds};
use super::midnight::split_at_midnight;
use super::week::start_of_day;

/// Produces one heading per local day the list displays.
///
/// The displayed range is the schedule interval widened to include every
/// shift. Each heading is anchored at the start of its day and labelled like
/// "Friday, August 13".
///
/// # Returns
///
/// - nothing for an invalid schedule interval
/// - nothing for a zero-length schedule interval with no valid shifts
/// - otherwise one item per day, in order
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::{get_subheader_items, parse_iso_interval};
/// use chrono_tz::America::Chicago;
///
/// let sched = parse_iso_interval(
///     "2021-08-13T00:00:00-05:00",
///     "2021-08-14T01:00:00-05:00",
///     Chicago,
/// ).unwrap();
/// let labels: Vec<String> = get_subheader_items(&sched, &[], Chicago)
///     .into_iter()
///     .map(|item| item.label)
///     .collect();
/// assert_eq!(labels, vec!["Friday, August 13", "Saturday, August 14"]);
/// ```
pub fn get_subheader_items(sched: &Interval, shifts: &[Shift], zone: Tz) -> Vec<SubheaderItem> {
    if !sched.is_valid() {
        debug!(start = %sched.start, end = %sched.end, "Invalid schedule interval, no subheaders");
        return Vec::new();
    }
    if sched.is_empty() && shifts.iter().all(|s| s.start > s.end) {
        return Vec::new();
    }

    let (lower, upper) = display_bounds(sched, shifts, zone);
    split_at_midnight(&Interval::new(lower, upper))
        .into_iter()
        .map(|day| {
            let at = start_of_day(day.start.date_naive(), zone);
            SubheaderItem {
                id: format!("header_{}", at.to_rfc3339()),
                at,
                label: format_day_label(&at),
            }
        })
        .collect()
}
