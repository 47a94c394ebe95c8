use std::process::ExitCode;

use svitlo_core::calendar_info;

use crate::cli::CalendarArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_catalog, region_id};

pub fn run_calendar(args: CalendarArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let catalog = load_catalog(&args.feeds)?;
    let info = calendar_info(&catalog, region_id(args.region))?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&info)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Today: {}", info.today);
            for date in &info.available_dates {
                println!("  {}", date);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
