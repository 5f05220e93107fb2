use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Personal portfolio site: HTML pages, JSON API, and contact form",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the web server
    Serve(ServeArgs),
    /// Verify built-in content and configuration
    Check,
    /// Print portfolio content as JSON
    Export(ExportArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// Allow cross-origin reads of the JSON API
    #[arg(long)]
    pub cors: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(default_value = "portfolio")]
    pub section: Section,
    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    Portfolio,
    Skills,
    Projects,
    Experiences,
}
