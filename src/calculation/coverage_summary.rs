//! Hour totals for a schedule window.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Interval, Shift, Span};

/// Scheduled, covered and uncovered hours for a schedule interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Length of the schedule interval.
    pub scheduled_hours: Decimal,
    /// Hours covered by at least one shift.
    pub covered_hours: Decimal,
    /// Hours covered by no shift.
    pub gap_hours: Decimal,
}

/// Totals how much of the schedule interval the shifts cover.
///
/// Overlapping shifts count once. An invalid interval has all totals zero.
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::{coverage_summary, parse_iso_interval};
/// use schedule_coverage::models::Shift;
/// use rust_decimal::Decimal;
///
/// let sched = parse_iso_interval("2021-08-13T00:00:00Z", "2021-08-13T10:00:00Z", chrono_tz::UTC).unwrap();
/// let shift: Shift = serde_json::from_str(
///     r#"{"userID": "a", "start": "2021-08-13T02:00:00Z", "end": "2021-08-13T09:30:00Z"}"#,
/// ).unwrap();
///
/// let summary = coverage_summary(&sched, &[shift]);
/// assert_eq!(summary.covered_hours, Decimal::new(75, 1)); // 7.5 hours
/// assert_eq!(summary.gap_hours, Decimal::new(25, 1)); // 2.5 hours
/// ```
pub fn coverage_summary(sched: &Interval, shifts: &[Shift]) -> CoverageSummary {
    if !sched.is_valid() {
        return CoverageSummary {
            scheduled_hours: Decimal::ZERO,
            covered_hours: Decimal::ZERO,
            gap_hours: Decimal::ZERO,
        };
    }

    let zone = sched.zone();
    let covered: Vec<Interval> = shifts.iter().map(|s| s.interval(zone)).collect();

    let scheduled_hours = calculate_hours(sched);
    let gap_hours: Decimal = sched.difference(&covered).iter().map(calculate_hours).sum();

    CoverageSummary {
        scheduled_hours,
        covered_hours: scheduled_hours - gap_hours,
        gap_hours,
    }
}

/// Calculates the length of an interval in hours, to the minute.
fn calculate_hours(interval: &Interval) -> Decimal {
    let duration_minutes = interval.duration().num_minutes();
    Decimal::new(duration_minutes, 0) / Decimal::new(60, 0)
}
