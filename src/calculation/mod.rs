//! Calculation logic for the schedule coverage engine.
//!
//! This module contains the pure functions behind the schedule views:
//! day and week boundaries in an explicit zone, midnight splitting, span
//! trimming and per-user shift merging, the shift list items (subheaders,
//! coverage gaps, out-of-bounds days, shifts and markers) and their sort
//! order, calendar events, and the rule and override summaries.

mod calendar;
mod coverage_gaps;
mod coverage_summary;
mod format;
mod list_items;
mod merge;
mod midnight;
mod out_of_bounds;
mod override_errors;
mod rule_summary;
mod shift_items;
mod spans;
mod subheaders;
mod week;
mod weekday;

pub use calendar::{CalendarEvent, CalendarEventKind, get_calendar_events};
pub use coverage_gaps::{coverage_gap_items_with_format, get_coverage_gap_items};
pub use coverage_summary::{CoverageSummary, coverage_summary};
pub use format::{TimeFormat, format_day_label, format_time, format_time_range};
pub use list_items::{
    Bound, CoverageGapItem, GapAction, ItemKind, ListItem, MarkerItem, OutOfBoundsItem,
    ShiftItem, SubheaderItem, sort_items,
};
pub use merge::merge_shifts;
pub use midnight::split_at_midnight;
pub use out_of_bounds::get_out_of_bounds_items;
pub use override_errors::{FieldError, OverrideUserValue, map_override_user_error};
pub use rule_summary::{parse_clock, parse_clock_at, rule_summary, rule_summary_at};
pub use shift_items::{get_active_item, get_boundary_items, get_shift_items};
pub use spans::{parse_interval, parse_iso_interval, trim_spans};
pub use subheaders::get_subheader_items;
pub use week::{end_of_week_now, get_end_of_week, get_start_of_week, start_of_day, start_of_week_now};
pub use weekday::{align_weekday_filter, weekday_summary};
