//! Per-user shift merging.

use std::collections::HashMap;

use chrono::Utc;
use chrono_tz::Tz;
use tracing::debug;

use crate::models::{Interval, Shift, Span};

/// Merges overlapping and touching shifts of the same user.
///
/// Shifts are grouped by user ID and each group's intervals are unioned, so
/// every user ends up with a minimal list of disjoint shifts. A merged shift
/// is truncated if any shift it was built from was truncated. Shifts with
/// reversed bounds are dropped.
///
/// The order of the output is unspecified. Merging an already merged list
/// returns the same set of shifts.
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::merge_shifts;
/// use schedule_coverage::models::Shift;
/// use chrono::{TimeZone, Utc};
///
/// let at = |h| Utc.with_ymd_and_hms(2021, 8, 13, h, 0, 0).unwrap();
/// let merged = merge_shifts(&[
///     Shift::new("alice", at(1), at(3)),
///     Shift::new("alice", at(3), at(5)),
/// ]);
/// assert_eq!(merged, vec![Shift::new("alice", at(1), at(5))]);
/// ```
pub fn merge_shifts(shifts: &[Shift]) -> Vec<Shift> {
    let mut by_user: HashMap<&str, Vec<&Shift>> = HashMap::new();
    for shift in shifts {
        by_user.entry(shift.user_id.as_str()).or_default().push(shift);
    }

    let merged: Vec<Shift> = by_user
        .into_iter()
        .flat_map(|(user_id, group)| {
            let intervals: Vec<Interval> = group.iter().map(|s| s.interval(Tz::UTC)).collect();
            Interval::merge(&intervals).into_iter().map(move |interval| {
                let start = interval.start.with_timezone(&Utc);
                let end = interval.end.with_timezone(&Utc);
                let truncated = group
                    .iter()
                    .any(|s| s.truncated && s.start >= start && s.end <= end);
                Shift {
                    user_id: user_id.to_string(),
                    start,
                    end,
                    truncated,
                    display_start: None,
                }
            })
        })
        .collect();

    debug!(input = shifts.len(), output = merged.len(), "Merged shifts");
    merged
}
