//! Day and week boundaries in an explicit time zone.
//!
//! Weeks start on Sunday. Day starts are the first instant of a local date
//! that actually exists, which is midnight everywhere except in zones that
//! skip midnight on a daylight-saving transition.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolves a local wall time to an instant in `zone`.
///
/// Ambiguous wall times resolve to the earlier instant. Wall times skipped by
/// a DST transition resolve to the first existing wall time after them.
pub(crate) fn resolve_local(naive: NaiveDateTime, zone: Tz) -> DateTime<Tz> {
    (0..=24 * 4)
        .find_map(|step| {
            zone.from_local_datetime(&(naive + TimeDelta::minutes(15 * step)))
                .earliest()
        })
        .unwrap_or_else(|| zone.from_utc_datetime(&naive))
}

/// Returns the first instant of `date` in `zone`.
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::start_of_day;
/// use chrono::NaiveDate;
/// use chrono_tz::America::Chicago;
///
/// let date = NaiveDate::from_ymd_opt(2021, 8, 13).unwrap();
/// assert_eq!(start_of_day(date, Chicago).to_rfc3339(), "2021-08-13T00:00:00-05:00");
/// ```
pub fn start_of_day(date: NaiveDate, zone: Tz) -> DateTime<Tz> {
    resolve_local(date.and_time(NaiveTime::MIN), zone)
}

/// Returns the first instant of the local day after the one containing `dt`.
pub(crate) fn next_day_start(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let zone = dt.timezone();
    let date = dt.date_naive();
    match date.checked_add_days(Days::new(1)) {
        Some(next) => start_of_day(next, zone),
        None => *dt,
    }
}

/// Returns 00:00:00 on the Sunday on or before `dt`, in `dt`'s zone.
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::get_start_of_week;
/// use chrono::TimeZone;
/// use chrono_tz::America::Chicago;
///
/// // 2021-08-11 is a Wednesday
/// let wednesday = Chicago.with_ymd_and_hms(2021, 8, 11, 15, 30, 0).unwrap();
/// let sunday = Chicago.with_ymd_and_hms(2021, 8, 8, 0, 0, 0).unwrap();
/// assert_eq!(get_start_of_week(&wednesday), sunday);
/// ```
pub fn get_start_of_week(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let date = dt.date_naive();
    let back = Days::new(u64::from(date.weekday().num_days_from_sunday()));
    let sunday = date.checked_sub_days(back).unwrap_or(date);
    start_of_day(sunday, dt.timezone())
}

/// Returns 23:59:59.999 on the Saturday on or after `dt`, in `dt`'s zone.
pub fn get_end_of_week(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let start = get_start_of_week(dt);
    let next_sunday = start
        .date_naive()
        .checked_add_days(Days::new(7))
        .unwrap_or(start.date_naive());
    start_of_day(next_sunday, dt.timezone()) - TimeDelta::milliseconds(1)
}

/// Start of the current week in `zone`.
pub fn start_of_week_now(zone: Tz) -> DateTime<Tz> {
    get_start_of_week(&Utc::now().with_timezone(&zone))
}

/// End of the current week in `zone`.
pub fn end_of_week_now(zone: Tz) -> DateTime<Tz> {
    get_end_of_week(&Utc::now().with_timezone(&zone))
}
