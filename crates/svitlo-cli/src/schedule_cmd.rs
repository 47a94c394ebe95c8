use std::process::ExitCode;

use svitlo_core::{QueueId, ScheduleQuery, SegmentKind, fetch_schedule};

use crate::cli::ScheduleArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_catalog, parse_date, region_id};

pub fn run_schedule(args: ScheduleArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let date = parse_date(&args.date)?;
    let catalog = load_catalog(&args.feeds)?;

    let query = ScheduleQuery {
        date,
        region: region_id(args.region),
        queue: QueueId::new(args.queue),
    };

    let response = fetch_schedule(&catalog, &query)?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!(
                "Queue {} on {} (source: {}{})",
                response.queue,
                response.day,
                response.source,
                if response.emergency_outages {
                    ", emergency outages active"
                } else {
                    ""
                }
            );
            for segment in &response.timeline.segments {
                let label = match segment.kind {
                    SegmentKind::On => "on",
                    SegmentKind::Off => "OFF",
                };
                println!("  {} - {}  {}", segment.start, segment.end, label);
            }
            println!(
                "Total off: {} min ({}%)",
                response.stats.total_off_minutes, response.stats.percentage
            );
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
