//! Feed decoding: published JSON payloads into [`Catalog`] snapshots.
//!
//! The upstream pipeline publishes three files:
//! - `schedule_today.json` / `schedule_tomorrow.json` - an object keyed by
//!   ISO date, each value carrying the day's `schedule` map plus optional
//!   `channel_id` and `emergency_outages` fields.
//! - `schedule_history.json` - an array of past days, each with an explicit
//!   `schedule_date` field and the same optional fields.
//!
//! Decoding is strict: a payload that is not valid JSON of the expected
//! shape surfaces [`ScheduleError::SourceUnavailable`] rather than being
//! repaired. Raw off-range strings are carried through untouched; the
//! normalizer owns their interpretation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Result, ScheduleError};
use crate::models::{Catalog, DaySchedule, QueueId, RegionId};

#[derive(Debug, Deserialize)]
struct RawDay {
    #[serde(default)]
    channel_id: Option<u32>,
    #[serde(default)]
    emergency_outages: bool,
    schedule: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawHistoryEntry {
    schedule_date: String,
    #[serde(default)]
    channel_id: Option<u32>,
    #[serde(default)]
    emergency_outages: bool,
    schedule: BTreeMap<String, Vec<String>>,
}

fn build_day(
    feed: &str,
    date: &str,
    region: Option<u32>,
    emergency: bool,
    schedule: BTreeMap<String, Vec<String>>,
) -> Result<DaySchedule> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        ScheduleError::SourceUnavailable(format!(
            "feed '{feed}' has entry date '{date}' not in YYYY-MM-DD form"
        ))
    })?;

    Ok(DaySchedule {
        date,
        region: region.map(RegionId::new),
        emergency,
        queues: schedule
            .into_iter()
            .map(|(queue, ranges)| (QueueId::new(queue), ranges))
            .collect(),
    })
}

/// Decode a today/tomorrow payload (object keyed by one ISO date).
///
/// `feed` names the source for error context ("today", "tomorrow"). An
/// object with no entries fails with [`ScheduleError::EmptyPayload`]; if
/// the publisher ever emits more than one date the lexicographically first
/// entry wins, which for ISO dates is the earliest.
pub fn parse_daily_feed(feed: &str, payload: &str) -> Result<DaySchedule> {
    let entries: BTreeMap<String, RawDay> = serde_json::from_str(payload).map_err(|e| {
        ScheduleError::SourceUnavailable(format!("feed '{feed}' is not decodable: {e}"))
    })?;

    let (date, raw) = entries
        .into_iter()
        .next()
        .ok_or_else(|| ScheduleError::EmptyPayload(feed.to_string()))?;

    build_day(feed, &date, raw.channel_id, raw.emergency_outages, raw.schedule)
}

/// Decode the history payload (array of date-stamped past days).
///
/// An empty array is valid: no history has accumulated yet.
pub fn parse_history_feed(payload: &str) -> Result<Vec<DaySchedule>> {
    let entries: Vec<RawHistoryEntry> = serde_json::from_str(payload).map_err(|e| {
        ScheduleError::SourceUnavailable(format!("feed 'history' is not decodable: {e}"))
    })?;

    entries
        .into_iter()
        .map(|entry| {
            build_day(
                "history",
                &entry.schedule_date,
                entry.channel_id,
                entry.emergency_outages,
                entry.schedule,
            )
        })
        .collect()
}

impl Catalog {
    /// Build a snapshot from raw feed payloads.
    ///
    /// A fetched "today" payload must decode; without it no anchor exists
    /// and every later resolution would fail anyway. The optional feeds
    /// degrade gracefully: an absent or undecodable "tomorrow" or "history"
    /// payload leaves that slot empty instead of failing the snapshot.
    pub fn from_feeds(
        today: Option<&str>,
        tomorrow: Option<&str>,
        history: Option<&str>,
    ) -> Result<Catalog> {
        let today = today.map(|p| parse_daily_feed("today", p)).transpose()?;
        let tomorrow = tomorrow.and_then(|p| parse_daily_feed("tomorrow", p).ok());
        let history = history
            .and_then(|p| parse_history_feed(p).ok())
            .unwrap_or_default();

        Ok(Catalog {
            today,
            tomorrow,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: &str = r#"{
        "2025-01-10": {
            "channel_id": 23,
            "emergency_outages": false,
            "schedule": {
                "1": ["08:30-12:00", "16:00-19:30"],
                "3.2": ["22:00-00:00"]
            }
        }
    }"#;

    const HISTORY: &str = r#"[
        {"schedule_date": "2025-01-08", "channel_id": 23, "schedule": {"1": []}},
        {"schedule_date": "2025-01-09", "channel_id": 23, "schedule": {"1": ["10:00-14:00"]}}
    ]"#;

    #[test]
    fn decode_daily_feed() {
        let day = parse_daily_feed("today", TODAY).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!(day.region, Some(RegionId::new(23)));
        assert!(!day.emergency);
        assert_eq!(
            day.queue_ranges(&QueueId::new("1")).unwrap(),
            &["08:30-12:00".to_string(), "16:00-19:30".to_string()]
        );
        assert_eq!(
            day.queue_ranges(&QueueId::new("3.2")).unwrap(),
            &["22:00-00:00".to_string()]
        );
    }

    #[test]
    fn daily_feed_optional_fields_default() {
        let day = parse_daily_feed(
            "today",
            r#"{"2025-01-10": {"schedule": {"2": ["00:00-04:00"]}}}"#,
        )
        .unwrap();
        assert_eq!(day.region, None);
        assert!(!day.emergency);
    }

    #[test]
    fn empty_daily_feed_is_empty_payload() {
        let err = parse_daily_feed("today", "{}").unwrap_err();
        assert_eq!(err.status(), "empty_payload");
    }

    #[test]
    fn invalid_json_is_source_unavailable() {
        let err = parse_daily_feed("today", "not json").unwrap_err();
        assert_eq!(err.status(), "source_unavailable");
    }

    #[test]
    fn bad_date_key_is_source_unavailable() {
        let err = parse_daily_feed("today", r#"{"10.01.2025": {"schedule": {}}}"#).unwrap_err();
        assert_eq!(err.status(), "source_unavailable");
    }

    #[test]
    fn decode_history_feed() {
        let days = parse_history_feed(HISTORY).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 1, 8).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());
    }

    #[test]
    fn empty_history_is_valid() {
        assert_eq!(parse_history_feed("[]").unwrap(), Vec::new());
    }

    #[test]
    fn from_feeds_requires_decodable_today() {
        let err = Catalog::from_feeds(Some("broken"), None, None).unwrap_err();
        assert_eq!(err.status(), "source_unavailable");
    }

    #[test]
    fn from_feeds_degrades_optional_feeds() {
        let catalog = Catalog::from_feeds(Some(TODAY), Some("broken"), Some("also broken")).unwrap();
        assert!(catalog.today.is_some());
        assert!(catalog.tomorrow.is_none());
        assert!(catalog.history.is_empty());
    }

    #[test]
    fn from_feeds_without_today_leaves_anchor_empty() {
        let catalog = Catalog::from_feeds(None, None, Some(HISTORY)).unwrap();
        assert!(catalog.today.is_none());
        assert_eq!(catalog.history.len(), 2);
    }
}
