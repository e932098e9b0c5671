use crate::core::chart::Language;
use crate::domain::model::{Gender, SizeLabel};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "scrub-sizer")]
#[command(about = "Recommends a medical scrub size from gender, height and weight")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Estimate a size and optionally report the size that actually fit
    Estimate(EstimateArgs),
    /// Print the reference size chart
    Chart(ChartArgs),
    /// Manage locally stored users
    #[command(subcommand)]
    User(UserCommand),
}

#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    /// Height in centimeters, clamped to 120-220
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms, clamped to 30-200
    #[arg(long)]
    pub weight: Option<f64>,

    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Also print the size chart with the recommendation marked
    #[arg(long)]
    pub chart: bool,

    /// The size that actually fit; submits feedback when given
    #[arg(long)]
    pub actual: Option<SizeLabel>,

    #[arg(long)]
    pub client_ip: Option<String>,

    #[arg(long)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ChartArgs {
    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    /// Size to mark in the table
    #[arg(long)]
    pub highlight: Option<SizeLabel>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum UserCommand {
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Get {
        #[arg(long, conflicts_with = "username", required_unless_present = "username")]
        id: Option<u32>,
        #[arg(long)]
        username: Option<String>,
    },
}
