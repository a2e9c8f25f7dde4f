//! Core data models for the schedule coverage engine.
//!
//! This module contains the input records returned by the schedule query
//! and the [`Interval`] type the calculations are expressed in.

mod interval;
mod schedule_rule;
mod shift;
mod snapshot;
mod span;
mod temporary_schedule;
mod user_override;

pub use interval::Interval;
pub use schedule_rule::{ClockTime, ScheduleRule, WeekdayFilter};
pub use shift::Shift;
pub use snapshot::ScheduleSnapshot;
pub use span::Span;
pub use temporary_schedule::TemporarySchedule;
pub use user_override::{OverrideKind, User, UserOverride};
