//! Span parsing and trimming.
//!
//! Trimming removes the portions of a list of spans covered by a set of
//! blackout intervals, e.g. the parts of ordinary on-call shifts that a
//! temporary schedule replaces.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{CoverageError, CoverageResult};
use crate::models::{Interval, Span};

/// Builds the interval of a span record in `zone`.
pub fn parse_interval<S: Span>(span: &S, zone: Tz) -> Interval {
    span.interval(zone)
}

fn parse_timestamp(value: &str) -> CoverageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoverageError::InvalidTimestamp {
            value: value.to_string(),
            message: e.to_string(),
        })
}

/// Builds an interval from RFC 3339 start and end strings.
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::parse_iso_interval;
///
/// let interval = parse_iso_interval(
///     "2021-08-13T00:00:00-05:00",
///     "2021-08-13T01:00:00-05:00",
///     chrono_tz::America::Chicago,
/// ).unwrap();
/// assert_eq!(interval.duration(), chrono::TimeDelta::hours(1));
/// assert!(parse_iso_interval("soon", "later", chrono_tz::UTC).is_err());
/// ```
pub fn parse_iso_interval(start: &str, end: &str, zone: Tz) -> CoverageResult<Interval> {
    Ok(Interval::from_utc(
        parse_timestamp(start)?,
        parse_timestamp(end)?,
        zone,
    ))
}

/// Removes the portions of each span covered by `blackouts`.
///
/// Blackout intervals are merged before subtracting, so overlapping blackouts
/// apply once. Each surviving piece is a copy of its original record with new
/// bounds; spans fully covered by a blackout disappear and zero-length pieces
/// are dropped. Output keeps input order, pieces of one span in time order.
pub fn trim_spans<S: Span>(spans: &[S], blackouts: &[Interval], zone: Tz) -> Vec<S> {
    let blackouts = Interval::merge(blackouts);

    spans
        .iter()
        .flat_map(|span| {
            span.interval(zone)
                .difference(&blackouts)
                .into_iter()
                .map(move |piece| {
                    span.with_bounds(
                        piece.start.with_timezone(&Utc),
                        piece.end.with_timezone(&Utc),
                    )
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;
    use chrono::TimeZone;
    use chrono_tz::America::Chicago;

    fn utc(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 8, 13, hour, 0, 0).unwrap()
    }

    fn blackout(start: u32, end: u32) -> Interval {
        Interval::from_utc(utc(start), utc(end), Chicago)
    }

    #[test]
    fn test_parse_interval_of_shift() {
        let shift = Shift::new("alice", utc(5), utc(6));
        let interval = parse_interval(&shift, Chicago);
        assert_eq!(interval.start.to_rfc3339(), "2021-08-13T00:00:00-05:00");
        assert_eq!(interval.zone(), Chicago);
    }

    #[test]
    fn test_parse_iso_interval_reports_bad_value() {
        match parse_iso_interval("2021-08-13T00:00:00Z", "not a time", Chicago) {
            Err(CoverageError::InvalidTimestamp { value, .. }) => assert_eq!(value, "not a time"),
            other => panic!("Expected InvalidTimestamp, got {other:?}"),
        }
    }

    // ==========================================================================
    // TS-001: span with no blackouts is unchanged
    // ==========================================================================
    #[test]
    fn test_ts_001_no_blackouts() {
        let shifts = vec![Shift::new("alice", utc(1), utc(5))];
        assert_eq!(trim_spans(&shifts, &[], Chicago), shifts);
    }

    // ==========================================================================
    // TS-002: blackout in the middle splits the span
    // ==========================================================================
    #[test]
    fn test_ts_002_blackout_splits_span() {
        let mut shift = Shift::new("alice", utc(1), utc(5));
        shift.truncated = true;

        let trimmed = trim_spans(&[shift], &[blackout(2, 3)], Chicago);
        assert_eq!(trimmed.len(), 2);
        assert_eq!((trimmed[0].start, trimmed[0].end), (utc(1), utc(2)));
        assert_eq!((trimmed[1].start, trimmed[1].end), (utc(3), utc(5)));
        assert!(trimmed.iter().all(|s| s.user_id == "alice" && s.truncated));
    }

    // ==========================================================================
    // TS-003: fully covered span disappears
    // ==========================================================================
    #[test]
    fn test_ts_003_fully_covered_span_disappears() {
        let shifts = vec![
            Shift::new("alice", utc(2), utc(3)),
            Shift::new("bob", utc(6), utc(8)),
        ];
        let trimmed = trim_spans(&shifts, &[blackout(1, 4)], Chicago);
        assert_eq!(trimmed, vec![Shift::new("bob", utc(6), utc(8))]);
    }

    // ==========================================================================
    // TS-004: overlapping blackouts apply once
    // ==========================================================================
    #[test]
    fn test_ts_004_overlapping_blackouts() {
        let shifts = vec![Shift::new("alice", utc(0), utc(10))];
        let trimmed = trim_spans(&shifts, &[blackout(2, 5), blackout(4, 6)], Chicago);
        assert_eq!(
            trimmed,
            vec![
                Shift::new("alice", utc(0), utc(2)),
                Shift::new("alice", utc(6), utc(10)),
            ]
        );
    }

    #[test]
    fn test_blackout_at_edge_trims_one_side() {
        let shifts = vec![Shift::new("alice", utc(1), utc(5))];
        let trimmed = trim_spans(&shifts, &[blackout(0, 2)], Chicago);
        assert_eq!(trimmed, vec![Shift::new("alice", utc(2), utc(5))]);
    }
}
