//! Display items for the schedule shift list and their ordering.
//!
//! Each generator in this crate produces one kind of item anchored at an
//! instant (`at`). [`sort_items`] merges them into one deterministic,
//! chronological list.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::{Interval, Shift};

/// Kinds of list item, in tie-break priority order.
///
/// When two items share the same `at`, the kind declared first sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    /// The schedule is active now.
    Active,
    /// Day heading.
    Subheader,
    /// A day outside the schedule's start/end.
    OutOfBounds,
    /// The schedule's start marker.
    Start,
    /// A coverage gap.
    Gap,
    /// A shift.
    Shift,
    /// The schedule's end marker.
    End,
}

/// Callback invoked when a coverage gap is selected, receiving the gap.
///
/// Used to pre-fill a new shift positioned at the gap.
#[derive(Clone)]
pub struct GapAction(Arc<dyn Fn(&Interval) + Send + Sync>);

impl GapAction {
    /// Wraps a callback.
    pub fn new(action: impl Fn(&Interval) + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    /// Invokes the callback.
    pub fn call(&self, gap: &Interval) {
        (self.0)(gap)
    }
}

impl fmt::Debug for GapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GapAction(..)")
    }
}

/// A day heading such as "Friday, August 13".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubheaderItem {
    /// Unique ID, `header_<at>`.
    pub id: String,
    /// Start of the day.
    pub at: DateTime<Tz>,
    /// The heading text.
    pub label: String,
}

/// A portion of one day with no shift coverage.
#[derive(Debug, Clone)]
pub struct CoverageGapItem {
    /// Unique ID, `gap_<start>`.
    pub id: String,
    /// Start of the gap.
    pub at: DateTime<Tz>,
    /// The uncovered interval, within a single day.
    pub gap: Interval,
    /// e.g. "No coverage until 9:00 AM".
    pub message: String,
    /// Callback for selecting the gap.
    pub on_click: Option<GapAction>,
}

impl CoverageGapItem {
    /// Invokes the gap's callback, if any. Returns whether one was set.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(action) => {
                action.call(&self.gap);
                true
            }
            None => false,
        }
    }
}

/// Which side of the schedule's bounds a day falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// Before the set start date.
    BeforeStart,
    /// After the set end date.
    AfterEnd,
}

/// A day that has shift data but lies outside the schedule's bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfBoundsItem {
    /// Unique ID.
    pub id: String,
    /// Start of the day.
    pub at: DateTime<Tz>,
    /// Which bound the day is outside of.
    pub bound: Bound,
    /// Explanation for the day.
    pub message: String,
}

/// One day's portion of a shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftItem {
    /// Unique ID.
    pub id: String,
    /// Start of this day's portion.
    pub at: DateTime<Tz>,
    /// The portion of the shift on this day.
    pub interval: Interval,
    /// The user on call.
    pub title: String,
    /// e.g. "All day" or "From 9:00 AM to 5:00 PM".
    pub details: String,
    /// True if the shift was cut off by the query window.
    pub truncated: bool,
}

/// A start or end marker, or the "currently active" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerItem {
    /// Unique ID.
    pub id: String,
    /// The marked instant.
    pub at: DateTime<Tz>,
    /// e.g. "Starts at 9:00 AM".
    pub title: String,
}

/// Any item in the shift list.
#[derive(Debug, Clone)]
pub enum ListItem {
    /// See [`ItemKind::Active`].
    Active(MarkerItem),
    /// See [`ItemKind::Subheader`].
    Subheader(SubheaderItem),
    /// See [`ItemKind::OutOfBounds`].
    OutOfBounds(OutOfBoundsItem),
    /// See [`ItemKind::Start`].
    Start(MarkerItem),
    /// See [`ItemKind::Gap`].
    Gap(CoverageGapItem),
    /// See [`ItemKind::Shift`].
    Shift(ShiftItem),
    /// See [`ItemKind::End`].
    End(MarkerItem),
}

impl ListItem {
    /// The kind of item.
    pub fn kind(&self) -> ItemKind {
        match self {
            ListItem::Active(_) => ItemKind::Active,
            ListItem::Subheader(_) => ItemKind::Subheader,
            ListItem::OutOfBounds(_) => ItemKind::OutOfBounds,
            ListItem::Start(_) => ItemKind::Start,
            ListItem::Gap(_) => ItemKind::Gap,
            ListItem::Shift(_) => ItemKind::Shift,
            ListItem::End(_) => ItemKind::End,
        }
    }

    /// The instant the item is anchored at.
    pub fn at(&self) -> DateTime<Tz> {
        match self {
            ListItem::Active(m) | ListItem::Start(m) | ListItem::End(m) => m.at,
            ListItem::Subheader(s) => s.at,
            ListItem::OutOfBounds(o) => o.at,
            ListItem::Gap(g) => g.at,
            ListItem::Shift(s) => s.at,
        }
    }

    /// The item's unique ID.
    pub fn id(&self) -> &str {
        match self {
            ListItem::Active(m) | ListItem::Start(m) | ListItem::End(m) => &m.id,
            ListItem::Subheader(s) => &s.id,
            ListItem::OutOfBounds(o) => &o.id,
            ListItem::Gap(g) => &g.id,
            ListItem::Shift(s) => &s.id,
        }
    }

    /// The main text of the item.
    pub fn title(&self) -> &str {
        match self {
            ListItem::Active(m) | ListItem::Start(m) | ListItem::End(m) => &m.title,
            ListItem::Subheader(s) => &s.label,
            ListItem::OutOfBounds(o) => &o.message,
            ListItem::Gap(g) => &g.message,
            ListItem::Shift(s) => &s.title,
        }
    }
}

impl From<SubheaderItem> for ListItem {
    fn from(item: SubheaderItem) -> Self {
        ListItem::Subheader(item)
    }
}

impl From<CoverageGapItem> for ListItem {
    fn from(item: CoverageGapItem) -> Self {
        ListItem::Gap(item)
    }
}

impl From<OutOfBoundsItem> for ListItem {
    fn from(item: OutOfBoundsItem) -> Self {
        ListItem::OutOfBounds(item)
    }
}

impl From<ShiftItem> for ListItem {
    fn from(item: ShiftItem) -> Self {
        ListItem::Shift(item)
    }
}

fn compare_items(a: &ListItem, b: &ListItem) -> Ordering {
    a.at()
        .cmp(&b.at())
        .then_with(|| a.kind().cmp(&b.kind()))
        .then_with(|| match (a, b) {
            (ListItem::Shift(x), ListItem::Shift(y)) => x.title.cmp(&y.title),
            _ => Ordering::Equal,
        })
        .then_with(|| a.id().cmp(b.id()))
}

/// Sorts list items chronologically.
///
/// Items at the same instant are ordered by [`ItemKind`] priority, shifts
/// among themselves by title, and anything still tied by ID, so every
/// permutation of the same items sorts to the same list.
pub fn sort_items(mut items: Vec<ListItem>) -> Vec<ListItem> {
    items.sort_by(compare_items);
    items
}

/// The range a list must display: the schedule interval widened to include
/// every valid shift.
pub(crate) fn display_bounds(
    sched: &Interval,
    shifts: &[Shift],
    zone: Tz,
) -> (DateTime<Tz>, DateTime<Tz>) {
    let sched = sched.with_zone(zone);
    shifts
        .iter()
        .filter(|s| s.start <= s.end)
        .fold((sched.start, sched.end), |(lower, upper), s| {
            (
                lower.min(s.start.with_timezone(&zone)),
                upper.max(s.end.with_timezone(&zone)),
            )
        })
}
