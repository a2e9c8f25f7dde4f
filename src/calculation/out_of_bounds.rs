//! Days that hold shift data but fall outside the schedule's bounds.

use chrono_tz::Tz;
use tracing::debug;

use crate::models::{Interval, Shift};

use super::list_items::{Bound, OutOfBoundsItem, display_bounds};
use super::midnight::split_at_midnight;
use super::week::start_of_day;

/// Produces one item per local day shown only because shifts extend past
/// the schedule's start or end.
///
/// The widened range is computed as for the subheaders; the portion before
/// the schedule's start and the portion after its end are split at midnight
/// and each day gets an item anchored at its start. An invalid schedule
/// interval yields nothing.
pub fn get_out_of_bounds_items(sched: &Interval, shifts: &[Shift], zone: Tz) -> Vec<OutOfBoundsItem> {
    if !sched.is_valid() {
        debug!(start = %sched.start, end = %sched.end, "Invalid schedule interval, no out-of-bounds days");
        return Vec::new();
    }

    let sched = sched.with_zone(zone);
    let (lower, upper) = display_bounds(&sched, shifts, zone);

    let before = Interval::new(lower, sched.start);
    let after = Interval::new(sched.end, upper);

    let mut items = Vec::new();
    for (bound, range) in [(Bound::BeforeStart, before), (Bound::AfterEnd, after)] {
        if range.is_empty() {
            continue;
        }
        for day in split_at_midnight(&range) {
            let at = start_of_day(day.start.date_naive(), zone);
            let (prefix, message) = match bound {
                Bound::BeforeStart => ("oob_before", "This day is before the set start date."),
                Bound::AfterEnd => ("oob_after", "This day is after the set end date."),
            };
            items.push(OutOfBoundsItem {
                id: format!("{prefix}_{}", at.to_rfc3339()),
                at,
                bound,
                message: message.to_string(),
            });
        }
    }
    items
}
