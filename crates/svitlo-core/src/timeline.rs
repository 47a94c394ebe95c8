//! Timeline normalization.
//!
//! Published off-ranges for a queue are not guaranteed to be sorted,
//! non-overlapping, or gap-free. This module sweeps them into a complete
//! day timeline: contiguous on/off segments covering exactly `[0, 1440)`,
//! plus aggregate outage statistics.
//!
//! Two publishing quirks are handled explicitly:
//! - An end of `"00:00"` means "through midnight" and is read as 24:00,
//!   unless the range is the literal `"00:00-00:00"`, which carries no
//!   outage at all and is dropped.
//! - Overlapping or duplicated ranges are merged; minutes already covered
//!   by an earlier off-range are never counted twice.

use crate::error::Result;
use crate::models::{MINUTES_PER_DAY, OutageStats, Segment, SegmentKind, Timeline};
use crate::parse::{parse_off_range, time_of_day};

/// A normalized day: the gapless timeline and its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDay {
    pub timeline: Timeline,
    pub stats: OutageStats,
}

/// Normalize a queue's raw off-ranges into a complete day timeline.
///
/// An empty input is valid and means "no outage that day": the result is a
/// single full-day `on` segment with zero stats. Malformed tokens fail with
/// [`MalformedInput`](crate::ScheduleError::MalformedInput).
///
/// # Examples
///
/// ```
/// use svitlo_core::timeline::normalize;
///
/// let day = normalize(&["22:00-00:00"]).unwrap();
/// assert_eq!(day.stats.total_off_minutes, 120);
/// assert_eq!(day.stats.percentage, 8);
/// ```
pub fn normalize<S: AsRef<str>>(raw_off_ranges: &[S]) -> Result<NormalizedDay> {
    let mut intervals = Vec::with_capacity(raw_off_ranges.len());
    for raw in raw_off_ranges {
        let (start, mut end) = parse_off_range(raw.as_ref())?;
        if end == 0 {
            if start == 0 {
                // Literal "00:00-00:00": no outage logged, not a full wrap.
                continue;
            }
            end = MINUTES_PER_DAY;
        }
        intervals.push((start, end));
    }

    intervals.sort_by_key(|&(start, _)| start);

    let mut segments = Vec::new();
    let mut cursor: u16 = 0;
    let mut total_off_minutes: u32 = 0;

    for (start, end) in intervals {
        if end <= start {
            // Degenerate after correction; nothing to account for.
            continue;
        }
        if start > cursor {
            segments.push(segment(cursor, start, SegmentKind::On)?);
        }
        if end > cursor {
            let clamped = start.max(cursor);
            // Off-ranges that overlap or touch the previous one describe a
            // single continuous outage; extend it instead of introducing a
            // boundary the data does not contain.
            match segments.last_mut() {
                Some(last) if last.kind == SegmentKind::Off && last.end.minutes() == clamped => {
                    last.end = time_of_day(end)?;
                }
                _ => segments.push(segment(clamped, end, SegmentKind::Off)?),
            }
            total_off_minutes += u32::from(end - clamped);
            cursor = end;
        }
    }

    if cursor < MINUTES_PER_DAY {
        segments.push(segment(cursor, MINUTES_PER_DAY, SegmentKind::On)?);
    }

    Ok(NormalizedDay {
        timeline: Timeline { segments },
        stats: OutageStats {
            total_off_minutes,
            percentage: percentage(total_off_minutes),
        },
    })
}

fn segment(start: u16, end: u16, kind: SegmentKind) -> Result<Segment> {
    Ok(Segment {
        start: time_of_day(start)?,
        end: time_of_day(end)?,
        kind,
    })
}

/// Share of the day spent off, rounded half-up.
fn percentage(total_off_minutes: u32) -> u8 {
    (f64::from(total_off_minutes) / f64::from(MINUTES_PER_DAY) * 100.0).round() as u8
}
