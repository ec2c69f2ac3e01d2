use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "pagefix",
    version,
    about = "Idempotent cleanup of the site's static HTML pages"
)]
pub struct Args {
    /// Directory containing the pages
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Report what would change without writing pages or backups
    #[arg(long)]
    pub dry_run: bool,

    /// Print the rule catalog and exit
    #[arg(long)]
    pub list_rules: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
