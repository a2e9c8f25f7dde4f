//! Calendar events from shifts, temporary schedules and overrides.

use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::models::{Interval, OverrideKind, Shift, Span, TemporarySchedule, UserOverride};

use super::spans::trim_spans;

/// What a calendar event represents.
///
/// Events starting at the same instant are ordered by kind in declaration
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CalendarEventKind {
    /// An ordinary shift outside any temporary schedule.
    Shift,
    /// The span of a temporary schedule.
    TemporarySchedule,
    /// A fixed shift inside a temporary schedule.
    TemporaryScheduleShift,
    /// A user override.
    Override,
}

/// One entry on the schedule calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// What the event represents.
    pub kind: CalendarEventKind,
    /// When the event happens, in the display zone.
    pub interval: Interval,
    /// Event title.
    pub title: String,
}

/// Builds the calendar for a schedule.
///
/// Temporary schedules replace normal scheduling while they are active, so
/// ordinary shifts are trimmed against them and the temporary schedule's own
/// shifts are shown instead. Overrides are titled "Add X", "Remove Y" or
/// "Replace Y with X"; an override naming neither user is skipped.
///
/// Events are sorted by start, then kind, then title.
pub fn get_calendar_events(
    shifts: &[Shift],
    temporary_schedules: &[TemporarySchedule],
    overrides: &[UserOverride],
    zone: Tz,
) -> Vec<CalendarEvent> {
    let blackouts: Vec<Interval> = temporary_schedules.iter().map(|t| t.interval(zone)).collect();

    let mut events: Vec<CalendarEvent> = trim_spans(shifts, &blackouts, zone)
        .into_iter()
        .map(|shift| CalendarEvent {
            kind: CalendarEventKind::Shift,
            interval: shift.interval(zone),
            title: shift.user_id,
        })
        .collect();

    for temp in temporary_schedules {
        events.push(CalendarEvent {
            kind: CalendarEventKind::TemporarySchedule,
            interval: temp.interval(zone),
            title: "Temporary Schedule".to_string(),
        });
        events.extend(temp.shifts.iter().map(|shift| CalendarEvent {
            kind: CalendarEventKind::TemporaryScheduleShift,
            interval: shift.interval(zone),
            title: shift.user_id.clone(),
        }));
    }

    for o in overrides {
        let title = match (o.kind(), &o.add_user, &o.remove_user) {
            (Some(OverrideKind::Replace), Some(add), Some(remove)) => {
                format!("Replace {} with {}", remove.name, add.name)
            }
            (Some(OverrideKind::Add), Some(add), _) => format!("Add {}", add.name),
            (Some(OverrideKind::Remove), _, Some(remove)) => format!("Remove {}", remove.name),
            _ => {
                debug!(start = %o.start, end = %o.end, "Skipping override with no users");
                continue;
            }
        };
        events.push(CalendarEvent {
            kind: CalendarEventKind::Override,
            interval: o.interval(zone),
            title,
        });
    }

    events.sort_by(|a, b| {
        a.interval
            .start
            .cmp(&b.interval.start)
            .then(a.kind.cmp(&b.kind))
            .then_with(|| a.title.cmp(&b.title))
    });

    debug!(
        shifts = shifts.len(),
        temporary_schedules = temporary_schedules.len(),
        overrides = overrides.len(),
        events = events.len(),
        "Built calendar events"
    );
    events
}
