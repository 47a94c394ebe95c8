//! Caller-facing query façade.
//!
//! Composes the source resolver and the timeline normalizer into the two
//! operations the UI layer actually asks for: a full schedule lookup and
//! the calendar of available dates.

use crate::error::{Result, ScheduleError};
use crate::models::{CalendarInfo, Catalog, RegionId, ScheduleQuery, ScheduleResponse};
use crate::resolve::{available_dates, resolve_source};
use crate::timeline::normalize;

/// Look up and normalize one queue's schedule for one date.
///
/// Resolves the covering feed, extracts the queue's raw off-ranges, and
/// returns the normalized timeline with statistics. A queue that is absent
/// from the resolved day fails with
/// [`QueueNotFound`](ScheduleError::QueueNotFound); a queue published with
/// zero off-ranges is a valid all-on day.
pub fn fetch_schedule(catalog: &Catalog, query: &ScheduleQuery) -> Result<ScheduleResponse> {
    let resolved = resolve_source(catalog, query.date, query.region)?;

    let ranges = resolved
        .day
        .queue_ranges(&query.queue)
        .ok_or_else(|| ScheduleError::QueueNotFound {
            queue: query.queue.clone(),
            date: query.date,
        })?;

    let normalized = normalize(ranges)?;

    Ok(ScheduleResponse {
        region: resolved.day.region.or(query.region),
        queue: query.queue.clone(),
        day: resolved.day.date,
        source: resolved.kind,
        emergency_outages: resolved.day.emergency,
        timeline: normalized.timeline,
        stats: normalized.stats,
    })
}

/// Calendar of dates with published schedules for the region.
pub fn calendar_info(catalog: &Catalog, region: Option<RegionId>) -> Result<CalendarInfo> {
    available_dates(catalog, region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DaySchedule, QueueId, SegmentKind, SourceKind};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn catalog() -> Catalog {
        let mut queues = BTreeMap::new();
        queues.insert(
            QueueId::new("1"),
            vec!["08:30-12:00".to_string(), "16:00-19:30".to_string()],
        );
        queues.insert(QueueId::new("2"), Vec::new());

        Catalog {
            today: Some(DaySchedule {
                date: date("2025-01-10"),
                region: Some(RegionId::new(23)),
                emergency: true,
                queues,
            }),
            tomorrow: None,
            history: Vec::new(),
        }
    }

    fn query(queue: &str) -> ScheduleQuery {
        ScheduleQuery {
            date: date("2025-01-10"),
            region: Some(RegionId::new(23)),
            queue: QueueId::new(queue),
        }
    }

    #[test]
    fn full_lookup_for_published_queue() {
        let response = fetch_schedule(&catalog(), &query("1")).unwrap();
        assert_eq!(response.day, date("2025-01-10"));
        assert_eq!(response.source, SourceKind::Today);
        assert!(response.emergency_outages);
        assert_eq!(response.stats.total_off_minutes, 420);
        assert_eq!(response.timeline.segments.len(), 5);
    }

    #[test]
    fn queue_with_no_ranges_is_all_on_day() {
        let response = fetch_schedule(&catalog(), &query("2")).unwrap();
        assert_eq!(response.stats.total_off_minutes, 0);
        assert_eq!(response.stats.percentage, 0);
        assert_eq!(response.timeline.segments.len(), 1);
        assert_eq!(response.timeline.segments[0].kind, SegmentKind::On);
    }

    #[test]
    fn missing_queue_is_queue_not_found() {
        let err = fetch_schedule(&catalog(), &query("6")).unwrap_err();
        assert_eq!(err.status(), "queue_not_found");
        assert_eq!(err.to_string(), "No data for queue 6 on 2025-01-10");
    }

    #[test]
    fn calendar_info_reports_anchor() {
        let info = calendar_info(&catalog(), None).unwrap();
        assert_eq!(info.today, date("2025-01-10"));
        assert_eq!(info.available_dates, vec![date("2025-01-10")]);
    }
}
