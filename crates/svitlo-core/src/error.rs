//! Error types for svitlo-core.
//!
//! Every failure the engine can produce is a variant of [`ScheduleError`],
//! so callers can exhaustively match on the kind instead of inspecting
//! message strings. None of these are recoverable locally: the core never
//! retries and never substitutes a default "no outage" result.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{QueueId, RegionId};

/// The main error type for schedule operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The "today" feed is missing or undecodable; without an anchor date
    /// no resolution is possible.
    #[error("Today source unavailable: {0}")]
    SourceUnavailable(String),

    /// No source covers the requested (date, region) combination.
    #[error("No schedule published for {date}{}", region_suffix(.region))]
    NotFound {
        date: NaiveDate,
        region: Option<RegionId>,
    },

    /// The resolved day carries no entry for the requested queue.
    #[error("No data for queue {queue} on {date}")]
    QueueNotFound { queue: QueueId, date: NaiveDate },

    /// A raw off-range token failed to parse as two valid HH:MM values.
    #[error("Malformed off-range: {0}")]
    MalformedInput(String),

    /// A feed decoded successfully but contains no date-keyed entries.
    #[error("Feed '{0}' contains no schedule entries")]
    EmptyPayload(String),
}

fn region_suffix(region: &Option<RegionId>) -> String {
    match region {
        Some(r) => format!(" in region {r}"),
        None => String::new(),
    }
}

impl ScheduleError {
    /// Stable machine-readable tag for the error kind, used by callers
    /// that report failures over a wire format.
    pub fn status(&self) -> &'static str {
        match self {
            ScheduleError::SourceUnavailable(_) => "source_unavailable",
            ScheduleError::NotFound { .. } => "not_found",
            ScheduleError::QueueNotFound { .. } => "queue_not_found",
            ScheduleError::MalformedInput(_) => "malformed_input",
            ScheduleError::EmptyPayload(_) => "empty_payload",
        }
    }
}

/// Result type alias for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_region() {
        let err = ScheduleError::NotFound {
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            region: Some(RegionId::new(23)),
        };
        assert_eq!(
            err.to_string(),
            "No schedule published for 2025-01-10 in region 23"
        );
    }

    #[test]
    fn not_found_message_without_region() {
        let err = ScheduleError::NotFound {
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            region: None,
        };
        assert_eq!(err.to_string(), "No schedule published for 2025-01-10");
    }

    #[test]
    fn status_tags_are_distinct() {
        let errs = [
            ScheduleError::SourceUnavailable("x".into()),
            ScheduleError::NotFound {
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                region: None,
            },
            ScheduleError::QueueNotFound {
                queue: QueueId::new("1"),
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            },
            ScheduleError::MalformedInput("x".into()),
            ScheduleError::EmptyPayload("today".into()),
        ];
        let mut tags: Vec<_> = errs.iter().map(|e| e.status()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), errs.len());
    }
}
