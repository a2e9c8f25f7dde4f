//! Coverage gap detection.
//!
//! A coverage gap is any part of the schedule interval that no shift
//! covers. Gaps are reported per local day so they line up under the day
//! subheaders.

use chrono_tz::Tz;
use tracing::debug;

use crate::models::{Interval, Shift, Span};

use super::format::{TimeFormat, format_time};
use super::list_items::{CoverageGapItem, GapAction};
use super::midnight::split_at_midnight;
use super::week::{next_day_start, start_of_day};

/// Finds the uncovered portions of the schedule interval.
///
/// Uses the default 12-hour [`TimeFormat`]. See
/// [`coverage_gap_items_with_format`].
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::{get_coverage_gap_items, parse_iso_interval};
/// use schedule_coverage::models::Shift;
/// use chrono_tz::America::New_York;
///
/// let sched = parse_iso_interval(
///     "2021-08-13T00:00:00-04:00",
///     "2021-08-13T03:00:00-04:00",
///     New_York,
/// ).unwrap();
/// let shift: Shift = serde_json::from_str(r#"{
///     "userID": "alice",
///     "start": "2021-08-13T01:00:00-04:00",
///     "end": "2021-08-13T02:00:00-04:00"
/// }"#).unwrap();
///
/// let gaps = get_coverage_gap_items(&sched, &[shift], New_York, None);
/// let messages: Vec<&str> = gaps.iter().map(|g| g.message.as_str()).collect();
/// assert_eq!(messages, vec!["No coverage until 1:00 AM", "No coverage from 2:00 AM to 3:00 AM"]);
/// ```
pub fn get_coverage_gap_items(
    sched: &Interval,
    shifts: &[Shift],
    zone: Tz,
    on_click: Option<GapAction>,
) -> Vec<CoverageGapItem> {
    coverage_gap_items_with_format(sched, shifts, zone, on_click, &TimeFormat::default())
}

/// Finds the uncovered portions of the schedule interval, formatting times
/// with `format`.
///
/// The gaps are `sched` minus every shift, split at local midnight in
/// `zone`. Each item is anchored at its gap's start and described as:
///
/// - "No coverage" for a whole day
/// - "No coverage until T" when the gap starts at the start of the day
/// - "No coverage after T" when the gap runs to the end of the day
/// - "No coverage from T1 to T2" otherwise
///
/// An invalid or zero-length schedule interval has no gaps.
pub fn coverage_gap_items_with_format(
    sched: &Interval,
    shifts: &[Shift],
    zone: Tz,
    on_click: Option<GapAction>,
    format: &TimeFormat,
) -> Vec<CoverageGapItem> {
    if !sched.is_valid() {
        debug!(start = %sched.start, end = %sched.end, "Invalid schedule interval, no coverage gaps");
        return Vec::new();
    }

    let sched = sched.with_zone(zone);
    let covered: Vec<Interval> = shifts.iter().map(|s| s.interval(zone)).collect();

    sched
        .difference(&covered)
        .iter()
        .flat_map(split_at_midnight)
        .map(|gap| CoverageGapItem {
            id: format!("gap_{}", gap.start.to_rfc3339()),
            at: gap.start,
            message: gap_message(&gap, zone, format),
            gap,
            on_click: on_click.clone(),
        })
        .collect()
}

fn gap_message(gap: &Interval, zone: Tz, format: &TimeFormat) -> String {
    let starts_day = gap.start == start_of_day(gap.start.date_naive(), zone);
    let ends_day = gap.end == next_day_start(&gap.start);

    match (starts_day, ends_day) {
        (true, true) => "No coverage".to_string(),
        (true, false) => format!("No coverage until {}", format_time(&gap.end, format)),
        (false, true) => format!("No coverage after {}", format_time(&gap.start, format)),
        (false, false) => format!(
            "No coverage from {} to {}",
            format_time(&gap.start, format),
            format_time(&gap.end, format)
        ),
    }
}
