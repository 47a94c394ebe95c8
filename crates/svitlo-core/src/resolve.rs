//! Source resolution: which feed covers a target date.
//!
//! The "today" feed's date is the anchor. Anything equal resolves to today
//! (even when history carries a same-dated entry), anything later must come
//! from the "tomorrow" feed, anything earlier from history. The resolver
//! only reads an immutable [`Catalog`] snapshot, so it is trivially
//! testable and safe to call from concurrent requests.

use chrono::NaiveDate;

use crate::error::{Result, ScheduleError};
use crate::models::{CalendarInfo, Catalog, DaySchedule, RegionId, SourceKind};

/// A resolved day together with the feed it came from.
///
/// The [`SourceKind`] is diagnostic only; callers never branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub kind: SourceKind,
    pub day: &'a DaySchedule,
}

/// Determine which feed covers `target` for the given region.
///
/// # Errors
///
/// - [`ScheduleError::SourceUnavailable`] when the catalog has no "today"
///   entry: without an anchor no date can be classified.
/// - [`ScheduleError::NotFound`] when the classified feed is absent, dated
///   differently, or does not cover the region.
pub fn resolve_source(
    catalog: &Catalog,
    target: NaiveDate,
    region: Option<RegionId>,
) -> Result<Resolved<'_>> {
    let today = catalog.today.as_ref().ok_or_else(|| {
        ScheduleError::SourceUnavailable("no 'today' feed in catalog snapshot".to_string())
    })?;
    let anchor = today.date;

    let not_found = || ScheduleError::NotFound {
        date: target,
        region,
    };

    if target == anchor {
        // Today always wins over a same-dated history entry.
        if !today.covers(region) {
            return Err(not_found());
        }
        return Ok(Resolved {
            kind: SourceKind::Today,
            day: today,
        });
    }

    if target > anchor {
        let tomorrow = catalog.tomorrow.as_ref().ok_or_else(not_found)?;
        if tomorrow.date != target || !tomorrow.covers(region) {
            return Err(not_found());
        }
        return Ok(Resolved {
            kind: SourceKind::Tomorrow,
            day: tomorrow,
        });
    }

    catalog
        .history
        .iter()
        .find(|day| day.date == target && day.covers(region))
        .map(|day| Resolved {
            kind: SourceKind::History,
            day,
        })
        .ok_or_else(not_found)
}

/// Enumerate every date with a published schedule for the region.
///
/// Drives date-picker affordances; the anchor reported here is the same one
/// [`resolve_source`] classifies against.
pub fn available_dates(catalog: &Catalog, region: Option<RegionId>) -> Result<CalendarInfo> {
    let today = catalog.today.as_ref().ok_or_else(|| {
        ScheduleError::SourceUnavailable("no 'today' feed in catalog snapshot".to_string())
    })?;

    let mut dates = Vec::new();
    if today.covers(region) {
        dates.push(today.date);
    }
    if let Some(tomorrow) = &catalog.tomorrow {
        if tomorrow.covers(region) {
            dates.push(tomorrow.date);
        }
    }
    dates.extend(
        catalog
            .history
            .iter()
            .filter(|day| day.covers(region))
            .map(|day| day.date),
    );

    dates.sort();
    dates.dedup();

    Ok(CalendarInfo {
        today: today.date,
        available_dates: dates,
    })
}
