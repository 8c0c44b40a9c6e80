use clap::{CommandFactory, Parser};
use gradboard::analysis::{DashboardSummary, summarize};
use gradboard::cleaning::CleaningPipeline;
use gradboard::config::{CliConfig, Config};
use gradboard::core::constants::{display, output_formats};
use gradboard::core::types::Table;
use gradboard::ingest::{export_csv, load_table};
use gradboard::reporting::logging;
use gradboard::reporting::{DashboardData, HtmlDashboard};
use gradboard::ui::completion::print_completions;
use gradboard::ui::output;
use gradboard::ui::{Cli, Commands, cli_to_config};

use std::path::Path;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    // Validate that a file is provided when not using completions
    if cli.file.is_none() {
        eprintln!("Error: No file provided");
        eprintln!("\nFor more information, try '--help'.");
        std::process::exit(1);
    }

    match run_gradboard_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Load, clean, summarize and present one input file
pub fn run_gradboard_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let file = cli.file.as_deref().ok_or("No file provided")?;

    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    let cleaned = load_and_clean(Path::new(file), &config)?;

    let summary = summarize(&cleaned, &config.analysis_options())?;
    logging::log_summary(&summary);

    output::display_results(
        file,
        &summary,
        &cleaned,
        &output_settings.output_format,
        output_settings.quiet,
    )?;

    if let Some(ref export_path) = config.export_path {
        export_csv(&cleaned, Path::new(export_path)).inspect_err(|e| {
            logging::log_error(&format!("Could not export to '{export_path}'"), Some(e));
        })?;
        logging::log_file_written("cleaned table", export_path);

        if output_settings.should_show_file_info() {
            println!("{} Cleaned table exported: {export_path}", display::FILE_EMOJI);
        }
    }

    if let Some(ref dashboard_path) = config.html_dashboard_path {
        write_dashboard(file, summary, cleaned, dashboard_path)?;

        if output_settings.should_show_file_info() {
            println!("{} HTML dashboard generated: {dashboard_path}", display::CHART_EMOJI);
        }
    }

    Ok(0)
}

/// Read the input table and run the cleaning pipeline over it
pub fn load_and_clean(path: &Path, config: &Config) -> Result<Table, Box<dyn std::error::Error>> {
    let raw = load_table(path).inspect_err(|e| {
        logging::log_error(&format!("Could not load '{}'", path.display()), Some(e));
    })?;
    logging::log_table_loaded(path, &raw);

    if raw.is_empty() {
        logging::log_warning("Input file contains no data rows");
    }

    let pipeline = CleaningPipeline::new(config.name_normalizer());
    let cleaned = pipeline.run(&raw).inspect_err(|e| {
        logging::log_error("Could not clean input table", Some(e));
    })?;
    logging::log_cleaning_complete(&cleaned);

    Ok(cleaned)
}

/// Render the HTML dashboard to `dashboard_path`
pub fn write_dashboard(
    source: &str,
    summary: DashboardSummary,
    table: Table,
    dashboard_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard_data = DashboardData {
        summary,
        table,
        source: source.to_string(),
        timestamp: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    };

    HtmlDashboard::generate_dashboard(&dashboard_data, dashboard_path).inspect_err(|e| {
        logging::log_error("Failed to generate HTML dashboard", Some(e));
    })?;
    logging::log_file_written("HTML dashboard", dashboard_path);
    Ok(())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

impl OutputSettings {
    /// Notes about written files only go with the human-readable report
    pub fn should_show_file_info(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    OutputSettings {
        quiet: cli_config.quiet,
        verbose: config.verbose.unwrap_or(false),
        output_format: config
            .output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
            .to_string(),
    }
}
