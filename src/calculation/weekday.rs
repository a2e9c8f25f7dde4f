//! Weekday filter alignment and summaries.

use chrono::Weekday;

use crate::models::WeekdayFilter;

const DAYS: [(Weekday, &str); 7] = [
    (Weekday::Sun, "Sun"),
    (Weekday::Mon, "Mon"),
    (Weekday::Tue, "Tue"),
    (Weekday::Wed, "Wed"),
    (Weekday::Thu, "Thu"),
    (Weekday::Fri, "Fri"),
    (Weekday::Sat, "Sat"),
];

/// Re-expresses a Sunday-first filter so that `weekday` becomes index 0.
///
/// A rule's clock time can land on the previous or next day once converted
/// to another zone; rotating the filter moves every enabled day with it.
/// Sunday is the identity.
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::align_weekday_filter;
/// use schedule_coverage::models::WeekdayFilter;
/// use chrono::Weekday;
///
/// let sunday_only = WeekdayFilter([true, false, false, false, false, false, false]);
/// let aligned = align_weekday_filter(Weekday::Sat, &sunday_only);
/// assert_eq!(aligned, WeekdayFilter([false, false, false, false, false, false, true]));
/// ```
pub fn align_weekday_filter(weekday: Weekday, filter: &WeekdayFilter) -> WeekdayFilter {
    let n = weekday.number_from_monday() as usize;
    let mut days = filter.0;
    days.rotate_left((7 - n) % 7);
    WeekdayFilter(days)
}

/// Describes a weekday filter in words.
///
/// Common patterns get fixed phrases ("weekends", "M—F", "every day", ...).
/// Anything else lists the enabled days, with runs of three or more
/// consecutive days collapsed to a range like "Mon—Wed".
pub fn weekday_summary(filter: &WeekdayFilter) -> String {
    let pattern: String = filter.0.iter().map(|&d| if d { '1' } else { '0' }).collect();

    match pattern.as_str() {
        "1000001" => return "weekends".to_string(),
        "0000000" => return "never".to_string(),
        "0111110" => return "M—F".to_string(),
        "0111111" => return "M—F and Sat".to_string(),
        "1111110" => return "M—F and Sun".to_string(),
        "1111111" => return "every day".to_string(),
        _ => {}
    }

    let mut parts: Vec<String> = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    let mut flush = |run: &mut Vec<&str>| {
        if run.len() >= 3 {
            parts.push(format!("{}—{}", run[0], run[run.len() - 1]));
        } else {
            parts.extend(run.iter().map(|name| name.to_string()));
        }
        run.clear();
    };

    for (day, name) in DAYS {
        if filter.includes(day) {
            run.push(name);
        } else {
            flush(&mut run);
        }
    }
    flush(&mut run);

    parts.join(", ")
}
