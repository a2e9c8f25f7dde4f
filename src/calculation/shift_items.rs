//! Shift, start/end and "currently active" items for the shift list.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::models::{Interval, Shift, Span};

use super::format::{TimeFormat, format_time};
use super::list_items::{ListItem, MarkerItem, ShiftItem};
use super::midnight::split_at_midnight;
use super::week::{next_day_start, start_of_day};

/// Splits each shift into one item per local day it covers.
///
/// Zero-length and reversed shifts are skipped. Each day's portion is
/// described as:
///
/// - "All day" when it covers the whole day
/// - "Active until T" when it starts at the start of the day
/// - "Active after T" when it runs to the end of the day
/// - "From T1 to T2" otherwise
pub fn get_shift_items(shifts: &[Shift], zone: Tz, format: &TimeFormat) -> Vec<ShiftItem> {
    shifts
        .iter()
        .filter(|s| s.start < s.end)
        .flat_map(|shift| {
            split_at_midnight(&shift.interval(zone))
                .into_iter()
                .map(move |day| ShiftItem {
                    id: format!(
                        "shift_{}_{}_{}",
                        shift.user_id,
                        day.start.to_rfc3339(),
                        day.end.to_rfc3339()
                    ),
                    at: day.start,
                    details: shift_details(&day, zone, format),
                    interval: day,
                    title: shift.user_id.clone(),
                    truncated: shift.truncated,
                })
        })
        .collect()
}

fn shift_details(day: &Interval, zone: Tz, format: &TimeFormat) -> String {
    let starts_day = day.start == start_of_day(day.start.date_naive(), zone);
    let ends_day = day.end == next_day_start(&day.start);

    match (starts_day, ends_day) {
        (true, true) => "All day".to_string(),
        (true, false) => format!("Active until {}", format_time(&day.end, format)),
        (false, true) => format!("Active after {}", format_time(&day.start, format)),
        (false, false) => format!(
            "From {} to {}",
            format_time(&day.start, format),
            format_time(&day.end, format)
        ),
    }
}

/// Produces the "Starts at" and "Ends at" markers for a schedule interval.
///
/// An invalid interval yields no markers.
pub fn get_boundary_items(sched: &Interval, zone: Tz, format: &TimeFormat) -> Vec<ListItem> {
    if !sched.is_valid() {
        return Vec::new();
    }

    let sched = sched.with_zone(zone);
    vec![
        ListItem::Start(MarkerItem {
            id: format!("start_{}", sched.start.to_rfc3339()),
            at: sched.start,
            title: format!("Starts at {}", format_time(&sched.start, format)),
        }),
        ListItem::End(MarkerItem {
            id: format!("end_{}", sched.end.to_rfc3339()),
            at: sched.end,
            title: format!("Ends at {}", format_time(&sched.end, format)),
        }),
    ]
}

/// Produces a "Currently active" marker at `now` if the schedule interval
/// contains it.
pub fn get_active_item(sched: &Interval, now: DateTime<Utc>, zone: Tz) -> Option<MarkerItem> {
    let now = now.with_timezone(&zone);
    (sched.is_valid() && sched.contains(now)).then(|| MarkerItem {
        id: "active".to_string(),
        at: now,
        title: "Currently active".to_string(),
    })
}
