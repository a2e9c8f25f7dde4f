//! Integration tests for the schedule coverage engine.
//!
//! This test suite covers:
//! - Day headings, coverage gaps and out-of-bounds days
//! - The combined, sorted shift list built from a decoded snapshot
//! - Weekday alignment and rule summaries
//! - Override conflict messages
//! - Week boundaries
//! - Configuration-driven zones and formatting

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::{Chicago, New_York};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use std::str::FromStr;

use schedule_coverage::calculation::{
    ItemKind, ListItem, OverrideUserValue, align_weekday_filter, coverage_gap_items_with_format,
    coverage_summary, get_active_item, get_boundary_items, get_calendar_events,
    get_coverage_gap_items, get_out_of_bounds_items, get_shift_items, get_start_of_week,
    get_subheader_items, map_override_user_error, merge_shifts, parse_iso_interval,
    rule_summary_at, sort_items, TimeFormat,
};
use schedule_coverage::config::ConfigLoader;
use schedule_coverage::models::{ScheduleSnapshot, Shift, User, UserOverride, WeekdayFilter};

// =============================================================================
// Test Helpers
// =============================================================================

fn chicago(d: u32, h: u32) -> DateTime<Tz> {
    Chicago.with_ymd_and_hms(2021, 8, d, h, 0, 0).unwrap()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Two days in Chicago with touching shifts and an afternoon without coverage.
const SNAPSHOT_JSON: &str = r#"{
    "start": "2021-08-13T00:00:00-05:00",
    "end": "2021-08-15T00:00:00-05:00",
    "shifts": [
        {"userID": "alice", "start": "2021-08-12T22:00:00-05:00", "end": "2021-08-13T08:00:00-05:00", "truncated": true},
        {"userID": "alice", "start": "2021-08-13T08:00:00-05:00", "end": "2021-08-13T12:00:00-05:00"},
        {"userID": "bob", "start": "2021-08-13T18:00:00-05:00", "end": "2021-08-14T09:00:00-05:00"}
    ],
    "temporarySchedules": [],
    "userOverrides": [],
    "rules": [
        {"start": "09:00", "end": "17:00", "weekdayFilter": [false, true, true, true, true, true, false]}
    ]
}"#;

fn load_snapshot() -> ScheduleSnapshot {
    ScheduleSnapshot::from_json(SNAPSHOT_JSON).expect("Failed to decode snapshot")
}

// =============================================================================
// SECTION 1: Documented Scenarios
// =============================================================================

#[test]
fn test_subheaders_one_hour_interval() {
    let sched = parse_iso_interval("2021-08-13T00:00:00-05:00", "2021-08-13T01:00:00-05:00", Chicago)
        .unwrap();
    let labels: Vec<String> = get_subheader_items(&sched, &[], Chicago)
        .into_iter()
        .map(|i| i.label)
        .collect();
    assert_eq!(labels, vec!["Friday, August 13"]);
}

#[test]
fn test_subheaders_twenty_five_hour_interval() {
    let sched = parse_iso_interval("2021-08-13T00:00:00-05:00", "2021-08-14T01:00:00-05:00", Chicago)
        .unwrap();
    let labels: Vec<String> = get_subheader_items(&sched, &[], Chicago)
        .into_iter()
        .map(|i| i.label)
        .collect();
    assert_eq!(labels, vec!["Friday, August 13", "Saturday, August 14"]);
}

#[test]
fn test_coverage_gaps_around_one_shift() {
    let sched = parse_iso_interval("2021-08-13T00:00:00-04:00", "2021-08-13T03:00:00-04:00", New_York)
        .unwrap();
    let shift: Shift = serde_json::from_str(
        r#"{"userID": "alice", "start": "2021-08-13T01:00:00-04:00", "end": "2021-08-13T02:00:00-04:00"}"#,
    )
    .unwrap();

    let gaps = get_coverage_gap_items(&sched, &[shift], New_York, None);
    let anchors: Vec<DateTime<Tz>> = gaps.iter().map(|g| g.at).collect();
    assert_eq!(
        anchors,
        vec![
            New_York.with_ymd_and_hms(2021, 8, 13, 0, 0, 0).unwrap(),
            New_York.with_ymd_and_hms(2021, 8, 13, 2, 0, 0).unwrap(),
        ]
    );
}

#[test]
fn test_align_sunday_only_filter_to_saturday() {
    let sunday_only = WeekdayFilter([true, false, false, false, false, false, false]);
    assert_eq!(
        align_weekday_filter(chrono::Weekday::Sat, &sunday_only),
        WeekdayFilter([false, false, false, false, false, false, true])
    );
}

#[test]
fn test_override_already_added() {
    let existing = UserOverride {
        start: Utc.with_ymd_and_hms(2021, 8, 13, 6, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2021, 8, 13, 7, 0, 0).unwrap(),
        add_user: Some(User::new("foo", "bob")),
        remove_user: None,
    };
    let value = OverrideUserValue {
        add_user_id: Some("foo".to_string()),
        remove_user_id: None,
    };

    let errors = map_override_user_error(Some(&existing), &value, Chicago);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "addUserID");
    assert_eq!(errors[0].message, "Already added from Aug 13, 2021, 1:00 AM to 2:00 AM");
}

#[test]
fn test_start_of_week() {
    // 2021-08-11 is a Wednesday
    let wednesday = chicago(11, 15);
    assert_eq!(get_start_of_week(&wednesday), chicago(8, 0));

    let sunday_midnight = chicago(15, 0);
    assert_eq!(get_start_of_week(&sunday_midnight), sunday_midnight);
}

// =============================================================================
// SECTION 2: Shift List From a Snapshot
// =============================================================================

#[test]
fn test_snapshot_shift_list_is_sorted_and_complete() {
    let snapshot = load_snapshot();
    let sched = snapshot.window(Chicago);
    let shifts = merge_shifts(&snapshot.shifts);
    let format = TimeFormat::default();

    let mut items: Vec<ListItem> = Vec::new();
    items.extend(get_subheader_items(&sched, &shifts, Chicago).into_iter().map(ListItem::from));
    items.extend(get_coverage_gap_items(&sched, &shifts, Chicago, None).into_iter().map(ListItem::from));
    items.extend(get_out_of_bounds_items(&sched, &shifts, Chicago).into_iter().map(ListItem::from));
    items.extend(get_shift_items(&shifts, Chicago, &format).into_iter().map(ListItem::from));
    items.extend(get_boundary_items(&sched, Chicago, &format));
    if let Some(active) = get_active_item(&sched, chicago(13, 15).with_timezone(&Utc), Chicago) {
        items.push(ListItem::Active(active));
    }

    let sorted = sort_items(items);
    let summary: Vec<(ItemKind, &str)> = sorted.iter().map(|i| (i.kind(), i.title())).collect();

    assert_eq!(
        summary,
        vec![
            (ItemKind::Subheader, "Thursday, August 12"),
            (ItemKind::OutOfBounds, "This day is before the set start date."),
            (ItemKind::Shift, "alice"),
            (ItemKind::Subheader, "Friday, August 13"),
            (ItemKind::Start, "Starts at 12:00 AM"),
            (ItemKind::Shift, "alice"),
            (ItemKind::Gap, "No coverage from 12:00 PM to 6:00 PM"),
            (ItemKind::Active, "Currently active"),
            (ItemKind::Shift, "bob"),
            (ItemKind::Subheader, "Saturday, August 14"),
            (ItemKind::Shift, "bob"),
            (ItemKind::Gap, "No coverage after 9:00 AM"),
            (ItemKind::End, "Ends at 12:00 AM"),
        ]
    );
}

#[test]
fn test_snapshot_merge_keeps_truncation() {
    let snapshot = load_snapshot();
    let merged = merge_shifts(&snapshot.shifts);
    let alice: Vec<_> = merged.iter().filter(|s| s.user_id == "alice").collect();

    assert_eq!(alice.len(), 1);
    assert!(alice[0].truncated);
    assert_eq!(alice[0].start, chicago(12, 22).with_timezone(&Utc));
    assert_eq!(alice[0].end, chicago(13, 12).with_timezone(&Utc));
}

#[test]
fn test_snapshot_coverage_summary() {
    let snapshot = load_snapshot();
    let summary = coverage_summary(&snapshot.window(Chicago), &snapshot.shifts);

    assert_eq!(summary.scheduled_hours, decimal("48"));
    assert_eq!(summary.covered_hours, decimal("27"));
    assert_eq!(summary.gap_hours, decimal("21"));
}

#[test]
fn test_snapshot_rule_summary() {
    let snapshot = load_snapshot();
    let now = Utc.with_ymd_and_hms(2021, 8, 13, 12, 0, 0).unwrap();
    assert_eq!(
        rule_summary_at(&snapshot.rules, New_York, Chicago, now),
        "M—F from 8:00 AM to 4:00 PM"
    );
}

#[test]
fn test_snapshot_calendar_events() {
    let snapshot = load_snapshot();
    let events = get_calendar_events(
        &snapshot.shifts,
        &snapshot.temporary_schedules,
        &snapshot.user_overrides,
        Chicago,
    );
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["alice", "alice", "bob"]);
}

// =============================================================================
// SECTION 3: Configuration
// =============================================================================

#[test]
fn test_config_drives_zone_and_format() {
    let config = ConfigLoader::load("./config/display.yaml").expect("Failed to load config");
    assert_eq!(config.display_zone(), Chicago);
    assert_eq!(config.schedule_zone(), New_York);

    let sched = parse_iso_interval("2021-08-13T00:00:00-05:00", "2021-08-13T03:00:00-05:00", config.display_zone())
        .unwrap();
    let gaps = coverage_gap_items_with_format(&sched, &[], config.display_zone(), None, &config.time_format());
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].message, "No coverage until 3:00 AM");
}

#[test]
fn test_twenty_four_hour_config() {
    let config = ConfigLoader::from_yaml_str(
        "display_zone: America/Chicago\nclock: twenty_four_hour\nshow_zone_suffix: true\n",
    )
    .unwrap();
    assert_eq!(config.schedule_zone(), Chicago);

    let sched = parse_iso_interval("2021-08-13T00:00:00-05:00", "2021-08-13T03:00:00-05:00", Chicago)
        .unwrap();
    let gaps = coverage_gap_items_with_format(&sched, &[], Chicago, None, &config.time_format());
    assert_eq!(gaps[0].message, "No coverage until 03:00 CDT");
}
