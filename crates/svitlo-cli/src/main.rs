use std::process::ExitCode;

use clap::Parser;

mod calendar_cmd;
mod cli;
mod error;
mod schedule_cmd;
mod shared;
mod timeline_cmd;

use calendar_cmd::run_calendar;
use cli::{Cli, Commands};
use error::{output_format_hint, parse_output_format, render_error};
use schedule_cmd::run_schedule;
use timeline_cmd::run_timeline;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_schedule(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Calendar(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_calendar(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Timeline(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_timeline(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
