use std::fs;

use chrono::NaiveDate;
use svitlo_core::{Catalog, RegionId};

use crate::cli::FeedArgs;
use crate::error::{CliError, CliResult};

pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        CliError::input(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
    })
}

pub fn region_id(region: Option<u32>) -> Option<RegionId> {
    region.map(RegionId::new)
}

fn read_feed(path: &str) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CliError::runtime(format!("Failed to read feed file '{}': {}", path, e)))
}

/// Read the feed files and freeze them into a catalog snapshot.
///
/// The today feed must exist and decode; the optional feeds must exist when
/// a path was given explicitly, but decoding failures in them degrade to
/// absence, matching how a fetch layer treats an unreachable optional feed.
pub fn load_catalog(feeds: &FeedArgs) -> CliResult<Catalog> {
    let today = read_feed(&feeds.today)?;
    let tomorrow = feeds.tomorrow.as_deref().map(read_feed).transpose()?;
    let history = feeds.history.as_deref().map(read_feed).transpose()?;

    let catalog = Catalog::from_feeds(Some(&today), tomorrow.as_deref(), history.as_deref())?;
    Ok(catalog)
}
