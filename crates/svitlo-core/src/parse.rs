//! Parsing of published time tokens.
//!
//! The feeds describe outages as `"HH:MM-HH:MM"` strings. This module turns
//! those tokens into minutes-of-day, with one quirk inherited from the
//! publishing pipeline: `"24:00"` is a legal end-of-day sentinel mapping to
//! 1440 minutes, even though no clock shows it.

use crate::error::{Result, ScheduleError};
use crate::models::{MINUTES_PER_DAY, TimeOfDay};

/// Parse a single `"HH:MM"` token into minutes-of-day.
///
/// Hours must be in `0..=23` and minutes in `0..=59`, except the literal
/// `"24:00"` which maps to 1440.
///
/// # Examples
///
/// ```
/// use svitlo_core::parse::parse_time;
///
/// assert_eq!(parse_time("08:30").unwrap(), 510);
/// assert_eq!(parse_time("24:00").unwrap(), 1440);
/// assert!(parse_time("24:01").is_err());
/// ```
pub fn parse_time(token: &str) -> Result<u16> {
    let token = token.trim();
    if token == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }

    let (hours, minutes) = token
        .split_once(':')
        .ok_or_else(|| malformed_time(token))?;
    let hours: u16 = hours.parse().map_err(|_| malformed_time(token))?;
    let minutes: u16 = minutes.parse().map_err(|_| malformed_time(token))?;

    if hours > 23 || minutes > 59 {
        return Err(malformed_time(token));
    }

    Ok(hours * 60 + minutes)
}

/// Parse one raw off-range `"HH:MM-HH:MM"` into `(start, end)` minutes.
///
/// No correction is applied here; `end` may come back as 0 for ranges that
/// cross midnight. The normalizer owns that interpretation.
pub fn parse_off_range(range: &str) -> Result<(u16, u16)> {
    let trimmed = range.trim();
    let (start, end) = trimmed.split_once('-').ok_or_else(|| {
        ScheduleError::MalformedInput(format!(
            "'{trimmed}' is not of the form 'HH:MM-HH:MM'"
        ))
    })?;

    Ok((parse_time(start)?, parse_time(end)?))
}

/// Convert minutes-of-day into a [`TimeOfDay`], failing on values past 1440.
pub fn time_of_day(minutes: u16) -> Result<TimeOfDay> {
    TimeOfDay::from_minutes(minutes).ok_or_else(|| {
        ScheduleError::MalformedInput(format!("{minutes} minutes is past end of day"))
    })
}

fn malformed_time(token: &str) -> ScheduleError {
    ScheduleError::MalformedInput(format!(
        "'{token}' is not a valid HH:MM time (00:00..=23:59, or 24:00)"
    ))
}
