// Command-line interface definitions and parsing for gradboard

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Graduate records file to analyze (.xlsx or .csv)
    pub file: Option<String>,

    // Output & Verbosity
    /// Suppress all output except errors
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format [default: text]
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Generate HTML dashboard report
    #[arg(long, value_name = "PATH", help_heading = "Output & Verbosity")]
    pub html_dashboard: Option<String>,

    /// Write the cleaned table as CSV
    #[arg(long, value_name = "PATH", help_heading = "Output & Verbosity")]
    pub export: Option<String>,

    // Charts
    /// Universities shown in the ranking (default: 15)
    #[arg(long, value_name = "COUNT", help_heading = "Charts")]
    pub top_universities: Option<usize>,

    /// Universities followed in the enrollment trends (default: 10)
    #[arg(long, value_name = "COUNT", help_heading = "Charts")]
    pub top_university_trends: Option<usize>,

    /// Districts shown in the ranking (default: 15)
    #[arg(long, value_name = "COUNT", help_heading = "Charts")]
    pub top_districts: Option<usize>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        // Output & format
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        html_dashboard_path: cli.html_dashboard.clone(),
        export_path: cli.export.clone(),

        // Charts
        top_universities: cli.top_universities,
        top_university_trends: cli.top_university_trends,
        top_districts: cli.top_districts,

        // Configuration
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
