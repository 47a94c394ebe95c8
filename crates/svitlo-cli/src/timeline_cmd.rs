use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use svitlo_core::{NormalizedDay, SegmentKind, normalize};

use crate::cli::TimelineArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};

/// Normalize raw off-ranges read line by line.
///
/// Each non-empty input line is one day's worth of ranges, separated by
/// whitespace or commas, e.g. `08:30-12:00 16:00-19:30`.
pub fn run_timeline(args: TimelineArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let reader: Box<dyn BufRead> = if args.stdin || args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input).map_err(|e| {
            CliError::runtime(format!("Failed to open file '{}': {}", args.input, e))
        })?;
        Box::new(BufReader::new(file))
    };

    for line in reader.lines() {
        let line = line.map_err(|e| CliError::runtime(format!("Failed to read line: {}", e)))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let ranges: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let day = normalize(&ranges)?;

        match output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string(&Output::from(&day))
                    .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
                println!("{}", json);
            }
            OutputFormat::Text => {
                let rendered: Vec<String> = day
                    .timeline
                    .segments
                    .iter()
                    .map(|s| {
                        let label = match s.kind {
                            SegmentKind::On => "on",
                            SegmentKind::Off => "OFF",
                        };
                        format!("{}-{} {}", s.start, s.end, label)
                    })
                    .collect();
                println!(
                    "{} | off {} min ({}%)",
                    rendered.join(", "),
                    day.stats.total_off_minutes,
                    day.stats.percentage
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(serde::Serialize)]
struct Output<'a> {
    timeline: &'a svitlo_core::Timeline,
    stats: &'a svitlo_core::OutageStats,
}

impl<'a> From<&'a NormalizedDay> for Output<'a> {
    fn from(day: &'a NormalizedDay) -> Self {
        Self {
            timeline: &day.timeline,
            stats: &day.stats,
        }
    }
}
