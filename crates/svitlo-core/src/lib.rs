//! # svitlo-core
//!
//! Schedule-resolution and timeline-normalization engine for electricity
//! outage schedules.
//!
//! Given a target date, a region, and a queue, the engine decides which
//! published feed (today / tomorrow / history) covers that date, extracts
//! the queue's raw `"HH:MM-HH:MM"` off-ranges, and normalizes them into a
//! complete, gapless day timeline of alternating on/off segments plus
//! aggregate outage statistics.
//!
//! ## Features
//!
//! - **Pure functions over a snapshot**: feeds are decoded once into an
//!   immutable [`Catalog`]; resolution and normalization never perform I/O
//!   and are safe to call from concurrent requests.
//! - **Interval arithmetic done carefully**: unsorted, overlapping, and
//!   duplicated off-ranges are merged without double counting; the
//!   midnight sentinel (`end == "00:00"` meaning 24:00) is handled
//!   explicitly.
//! - **Closed error set**: every failure is a [`ScheduleError`] variant;
//!   no error is ever collapsed into a default "no outage" answer.
//!
//! ## Example
//!
//! ```rust
//! use svitlo_core::prelude::*;
//!
//! let today = r#"{"2025-01-10": {"schedule": {"1": ["08:30-12:00"]}}}"#;
//! let catalog = Catalog::from_feeds(Some(today), None, None).unwrap();
//!
//! let query = ScheduleQuery {
//!     date: chrono::NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
//!     region: None,
//!     queue: QueueId::new("1"),
//! };
//! let response = fetch_schedule(&catalog, &query).unwrap();
//!
//! assert_eq!(response.stats.total_off_minutes, 210);
//! assert_eq!(response.timeline.segments.len(), 3);
//! ```

pub mod catalog;
pub mod error;
pub mod models;
pub mod parse;
pub mod query;
pub mod resolve;
pub mod timeline;

// Re-export commonly used types at the crate root
pub use catalog::{parse_daily_feed, parse_history_feed};
pub use error::{Result, ScheduleError};
pub use models::{
    CalendarInfo, Catalog, DaySchedule, OutageStats, QueueId, RegionId, ScheduleQuery,
    ScheduleResponse, Segment, SegmentKind, SourceKind, TimeOfDay, Timeline,
};
pub use query::{calendar_info, fetch_schedule};
pub use resolve::{Resolved, available_dates, resolve_source};
pub use timeline::{NormalizedDay, normalize};

/// Prelude module for convenient imports.
///
/// ```
/// use svitlo_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{parse_daily_feed, parse_history_feed};
    pub use crate::error::{Result, ScheduleError};
    pub use crate::models::*;
    pub use crate::query::{calendar_info, fetch_schedule};
    pub use crate::resolve::{Resolved, available_dates, resolve_source};
    pub use crate::timeline::{NormalizedDay, normalize};
}
