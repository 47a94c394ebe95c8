use clap::{Parser, Subcommand};

/// Electricity outage schedule lookup tool
#[derive(Parser, Debug)]
#[command(name = "svitlo")]
#[command(about = "Electricity outage schedule lookup tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up and normalize one queue's schedule for a date
    Schedule(ScheduleArgs),
    /// List dates with published schedules
    Calendar(CalendarArgs),
    /// Normalize raw off-ranges directly
    Timeline(TimelineArgs),
}

#[derive(clap::Args, Debug)]
pub struct FeedArgs {
    /// Path to the published "today" feed (schedule_today.json)
    #[arg(long)]
    pub today: String,

    /// Path to the published "tomorrow" feed, if available
    #[arg(long)]
    pub tomorrow: Option<String>,

    /// Path to the published history feed, if available
    #[arg(long)]
    pub history: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub feeds: FeedArgs,

    /// Target date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Region identifier (channel id); omit for single-region feeds
    #[arg(short, long)]
    pub region: Option<u32>,

    /// Queue identifier (e.g., 1 or 3.2)
    #[arg(short, long)]
    pub queue: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub feeds: FeedArgs,

    /// Region identifier (channel id); omit for single-region feeds
    #[arg(short, long)]
    pub region: Option<u32>,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct TimelineArgs {
    /// Input file path with one day's ranges per line (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
