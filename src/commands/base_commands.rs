use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::services::aggregation::TimeGrouping;
use crate::services::projection_yaml::OutputFormat;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project daily send volume and write it to YAML or JSON
    Project {
        #[command(flatten)]
        campaign: CampaignArgs,
        #[command(flatten)]
        view: ViewArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Output file
        #[arg(short, long)]
        output: String,
    },
    /// Plot projected send volume into a PNG chart
    Plot {
        #[command(flatten)]
        campaign: CampaignArgs,
        #[command(flatten)]
        view: ViewArgs,
        /// Draw the cumulative volume as a line
        #[arg(long)]
        cumulative: bool,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Campaign parameters. Flags override values loaded from `--config`; without
/// a config file the reference campaign is the base.
#[derive(Args, Debug, Clone, Default)]
pub struct CampaignArgs {
    /// Campaign YAML file
    #[arg(short, long)]
    pub config: Option<String>,
    /// Campaign start date (YYYY-MM-DD), must be a weekday
    #[arg(short, long)]
    pub start_date: Option<String>,
    /// Number of leads to enroll
    #[arg(short = 'l', long)]
    pub total_leads: Option<u64>,
    /// Maximum emails sent per business day
    #[arg(short = 'd', long)]
    pub daily_capacity: Option<u64>,
    /// Business-day offsets of the follow-up touches, e.g. 1,3
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub offsets: Option<Vec<u32>>,
    /// Upper bound on simulated business days
    #[arg(long)]
    pub max_days: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Group daily volume by period
    #[arg(short, long, value_enum, default_value_t = TimeGrouping::Daily)]
    pub grouping: TimeGrouping,
    /// Start of the displayed window in percent
    #[arg(long, default_value_t = 0.0)]
    pub from: f64,
    /// End of the displayed window in percent
    #[arg(long, default_value_t = 100.0)]
    pub to: f64,
}
