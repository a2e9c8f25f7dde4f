//! Human-readable time formatting.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config::ClockStyle;

/// How times of day are written in generated messages.
///
/// The default is a 12-hour clock without a zone suffix, e.g. `1:00 AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeFormat {
    /// 12- or 24-hour clock.
    pub clock: ClockStyle,
    /// Whether to append the zone abbreviation.
    pub zone_suffix: bool,
}

/// Formats the time of day of `dt` in its own zone.
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::{format_time, TimeFormat};
/// use schedule_coverage::config::ClockStyle;
/// use chrono::TimeZone;
/// use chrono_tz::America::New_York;
///
/// let dt = New_York.with_ymd_and_hms(2021, 8, 13, 14, 5, 0).unwrap();
/// assert_eq!(format_time(&dt, &TimeFormat::default()), "2:05 PM");
///
/// let format = TimeFormat { clock: ClockStyle::TwentyFourHour, zone_suffix: true };
/// assert_eq!(format_time(&dt, &format), "14:05 EDT");
/// ```
pub fn format_time(dt: &DateTime<Tz>, format: &TimeFormat) -> String {
    let pattern = match format.clock {
        ClockStyle::TwelveHour => "%-I:%M %p",
        ClockStyle::TwentyFourHour => "%H:%M",
    };
    let mut formatted = dt.format(pattern).to_string();
    if format.zone_suffix {
        formatted.push(' ');
        formatted.push_str(&dt.format("%Z").to_string());
    }
    formatted
}

/// Formats a day heading such as `Friday, August 13`.
pub fn format_day_label(dt: &DateTime<Tz>) -> String {
    dt.format("%A, %B %-d").to_string()
}

fn format_date_time(dt: &DateTime<Tz>) -> String {
    dt.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Formats a time range in `zone`.
///
/// When both ends fall on the same local day the date is written once:
/// `Aug 13, 2021, 1:00 AM to 2:00 AM`. Otherwise both ends are written in
/// full.
pub fn format_time_range(start: DateTime<Utc>, end: DateTime<Utc>, zone: Tz) -> String {
    let start = start.with_timezone(&zone);
    let end = end.with_timezone(&zone);

    if start.date_naive() == end.date_naive() {
        format!(
            "{} to {}",
            format_date_time(&start),
            format_time(&end, &TimeFormat::default())
        )
    } else {
        format!("{} to {}", format_date_time(&start), format_date_time(&end))
    }
}
