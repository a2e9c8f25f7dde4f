//! Human-readable summaries of weekly schedule rules.
//!
//! Rules are stored as clock times in the schedule's zone. To show them in
//! another zone each clock time is pinned to a concrete Sunday, converted,
//! and the weekday filter is rotated by however many days the conversion
//! moved it.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::models::{ClockTime, ScheduleRule};

use super::format::{TimeFormat, format_time};
use super::week::resolve_local;
use super::weekday::{align_weekday_filter, weekday_summary};

/// Pins a clock time to this week's Sunday in `zone`.
///
/// See [`parse_clock_at`].
pub fn parse_clock(clock: ClockTime, zone: Tz) -> DateTime<Tz> {
    parse_clock_at(clock, zone, Utc::now())
}

/// Pins a clock time to the Sunday ending the ISO week that contains `now`
/// in `zone`.
///
/// If that Sunday's UTC offset differs from the zone's offset at `now` (a
/// DST change falls in between), the Sunday one week earlier is tried, then
/// one week later, and the first with a matching offset wins. When none
/// match the original Sunday is kept. A clock time skipped by DST resolves
/// to the first existing instant after it.
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::parse_clock_at;
/// use schedule_coverage::models::ClockTime;
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::America::New_York;
///
/// // Wednesday 2021-03-10 is still EST; the Sunday after it is EDT.
/// let now = Utc.with_ymd_and_hms(2021, 3, 10, 17, 0, 0).unwrap();
/// let clock: ClockTime = "09:00".parse().unwrap();
/// let pinned = parse_clock_at(clock, New_York, now);
/// assert_eq!(pinned.to_rfc3339(), "2021-03-07T09:00:00-05:00");
/// ```
pub fn parse_clock_at(clock: ClockTime, zone: Tz, now: DateTime<Utc>) -> DateTime<Tz> {
    let today = now.with_timezone(&zone).date_naive();
    let to_sunday = Days::new(u64::from(7 - today.weekday().number_from_monday()));
    let sunday = today.checked_add_days(to_sunday).unwrap_or(today);

    let expected = zone.offset_from_utc_datetime(&now.naive_utc()).fix();
    pin_near_sunday(clock, zone, sunday, expected)
}

/// Pins `clock` to `sunday`, or to the Sunday a week either side of it,
/// whichever first carries the `expected` offset. Falls back to `sunday`.
fn pin_near_sunday(
    clock: ClockTime,
    zone: Tz,
    sunday: NaiveDate,
    expected: FixedOffset,
) -> DateTime<Tz> {
    let pin = |date: NaiveDate| resolve_local(date.and_time(clock.as_naive_time()), zone);
    let anchored = pin(sunday);

    if anchored.offset().fix() == expected {
        return anchored;
    }

    let candidates = [
        sunday.checked_sub_days(Days::new(7)),
        sunday.checked_add_days(Days::new(7)),
    ];
    for date in candidates.into_iter().flatten() {
        let candidate = pin(date);
        if candidate.offset().fix() == expected {
            debug!(%clock, zone = %zone, anchor = %candidate, "Moved clock anchor one week for DST");
            return candidate;
        }
    }
    anchored
}

/// Summarizes rules for display in `display_zone`.
///
/// See [`rule_summary_at`].
pub fn rule_summary(rules: &[ScheduleRule], schedule_zone: Tz, display_zone: Tz) -> String {
    rule_summary_at(rules, schedule_zone, display_zone, Utc::now())
}

/// Summarizes rules for display in `display_zone`, anchoring clock times
/// relative to `now`.
///
/// Rules enabled on no day are ignored. With none left the summary is
/// "Never"; if any rule covers all times on every day it is "Always".
/// Otherwise each rule becomes one line such as
/// "M—F from 9:00 AM to 5:00 PM".
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::rule_summary_at;
/// use schedule_coverage::models::ScheduleRule;
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::America::{Chicago, New_York};
///
/// let rule: ScheduleRule = serde_json::from_str(r#"{
///     "start": "09:00",
///     "end": "17:00",
///     "weekdayFilter": [false, true, true, true, true, true, false]
/// }"#).unwrap();
/// let now = Utc.with_ymd_and_hms(2021, 8, 13, 12, 0, 0).unwrap();
///
/// assert_eq!(
///     rule_summary_at(&[rule], New_York, Chicago, now),
///     "M—F from 8:00 AM to 4:00 PM"
/// );
/// ```
pub fn rule_summary_at(
    rules: &[ScheduleRule],
    schedule_zone: Tz,
    display_zone: Tz,
    now: DateTime<Utc>,
) -> String {
    let rules: Vec<&ScheduleRule> = rules
        .iter()
        .filter(|r| !r.weekday_filter.is_never())
        .collect();

    if rules.is_empty() {
        return "Never".to_string();
    }
    if rules.iter().any(|r| r.is_always()) {
        return "Always".to_string();
    }

    let format = TimeFormat::default();
    rules
        .iter()
        .map(|rule| {
            let start = parse_clock_at(rule.start, schedule_zone, now).with_timezone(&display_zone);
            let end = parse_clock_at(rule.end, schedule_zone, now).with_timezone(&display_zone);
            let filter = align_weekday_filter(start.weekday(), &rule.weekday_filter);
            format!(
                "{} from {} to {}",
                weekday_summary(&filter),
                format_time(&start, &format),
                format_time(&end, &format)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
