//! Core data types for svitlo.
//!
//! This module defines the primary types used throughout the library:
//! - [`RegionId`] / [`QueueId`] - Opaque identifiers from the published feeds
//! - [`TimeOfDay`] - A wall-clock minute of the day, `0..=1440`
//! - [`DaySchedule`] - One published day's raw schedule
//! - [`Catalog`] - The three logical feeds as an immutable snapshot
//! - [`Segment`] / [`Timeline`] - The normalized gapless day timeline
//! - [`OutageStats`] - Aggregate outage statistics for one day
//! - [`ScheduleQuery`] / [`ScheduleResponse`] - The caller-facing query pair

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Opaque region identifier (`channel_id` in the published feeds).
///
/// Single-region deployments simply never tag their days with a region;
/// that is the degenerate case, not a separate code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RegionId(u32);

impl RegionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque queue identifier.
///
/// Published queue labels are `"1"`..`"6"` or fractional sub-queues such as
/// `"3.2"`; the engine never interprets them beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QueueId(String);

impl QueueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for QueueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A wall-clock minute of the day, in `0..=1440`.
///
/// Formats as `"HH:MM"`, with the upper bound 1440 rendered as `"24:00"`
/// (end-of-day, never `"00:00"`). Serializes as the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u16);

/// Minutes in a full day; also the exclusive upper bound of any segment.
pub const MINUTES_PER_DAY: u16 = 1440;

impl TimeOfDay {
    /// Construct from a minute count. Returns `None` above 1440.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == MINUTES_PER_DAY {
            write!(f, "24:00")
        } else {
            write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
        }
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One published day's raw data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    /// The calendar date this schedule covers.
    pub date: NaiveDate,
    /// Region the schedule belongs to; `None` in single-region feeds.
    pub region: Option<RegionId>,
    /// Whether emergency (unscheduled) outages were active that day.
    pub emergency: bool,
    /// Raw off-range strings (`"HH:MM-HH:MM"`) per queue, in published order.
    pub queues: BTreeMap<QueueId, Vec<String>>,
}

impl DaySchedule {
    /// Whether this day's data applies to the given region query.
    ///
    /// An untagged day covers every query; an unspecified query matches
    /// every day. Only a concrete mismatch excludes.
    pub fn covers(&self, region: Option<RegionId>) -> bool {
        match (self.region, region) {
            (Some(own), Some(wanted)) => own == wanted,
            _ => true,
        }
    }

    /// Raw off-ranges for one queue, if published.
    pub fn queue_ranges(&self, queue: &QueueId) -> Option<&[String]> {
        self.queues.get(queue).map(Vec::as_slice)
    }
}

/// The three logical feeds, fetched upstream and frozen into one snapshot.
///
/// The "today" entry's date is the anchor that classifies every other date
/// as past (history) or future (tomorrow). `tomorrow` and `history` are
/// optional: an unreachable optional feed degrades to absence rather than
/// failing the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub today: Option<DaySchedule>,
    pub tomorrow: Option<DaySchedule>,
    pub history: Vec<DaySchedule>,
}

/// Which logical feed a resolution came from. Diagnostic only; behavior
/// never branches on it downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Today,
    Tomorrow,
    History,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Today => write!(f, "today"),
            SourceKind::Tomorrow => write!(f, "tomorrow"),
            SourceKind::History => write!(f, "history"),
        }
    }
}

/// Whether power is on or off during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    On,
    Off,
}

/// One half-open `[start, end)` slice of the day timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    #[serde(rename = "type")]
    pub kind: SegmentKind,
}

impl Segment {
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

/// The fully normalized day: contiguous, non-overlapping segments starting
/// at `00:00` and ending at `24:00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    pub segments: Vec<Segment>,
}

/// Aggregate outage statistics derived from a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutageStats {
    /// Sum of all off-segment durations, in minutes.
    pub total_off_minutes: u32,
    /// `total_off_minutes / 1440 * 100`, rounded half-up.
    pub percentage: u8,
}

/// A caller's request for one queue's schedule on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub date: NaiveDate,
    pub region: Option<RegionId>,
    pub queue: QueueId,
}

/// Complete result of a schedule lookup.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    /// Region the answer applies to, when the feed tracks regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionId>,
    /// The queue that was requested.
    pub queue: QueueId,
    /// The date the schedule covers.
    pub day: NaiveDate,
    /// Which feed the day was resolved from.
    pub source: SourceKind,
    /// Whether emergency outages were flagged for the day.
    pub emergency_outages: bool,
    /// The normalized on/off timeline.
    pub timeline: Timeline,
    /// Aggregate outage statistics.
    pub stats: OutageStats,
}

/// Dates with published schedules, for driving a date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarInfo {
    /// The anchor date claimed by the "today" feed.
    pub today: NaiveDate,
    /// Every date with a published schedule for the region, ascending,
    /// deduplicated.
    pub available_dates: Vec<NaiveDate>,
}
