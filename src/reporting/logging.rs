use crate::analysis::DashboardSummary;
use crate::config::Config;
use crate::core::types::Table;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let installed = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init()
        .is_ok();

    if installed {
        debug!("Logger initialized with level: {level:?}");
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let options = config.analysis_options();
    let format = config.output_format.as_deref().unwrap_or("text");
    let normalizer = config.name_normalizer();

    info!(
        "Configuration: format={format}, top_universities={}, top_university_trends={}, top_districts={}",
        options.top_universities, options.top_university_trends, options.top_districts
    );
    info!(
        "Aliases: country={}, university={}",
        normalizer.country_alias_count(),
        normalizer.university_alias_count()
    );
}

/// Log the table that was read from disk
pub fn log_table_loaded<P: AsRef<Path>>(path: P, table: &Table) {
    info!(
        "Loaded {} row(s) from {}",
        table.len(),
        path.as_ref().display()
    );
    debug!("  Columns: {}", table.columns().join(", "));
}

/// Log the shape of the cleaned table
pub fn log_cleaning_complete(table: &Table) {
    info!(
        "Cleaning complete: {} row(s), {} column(s)",
        table.len(),
        table.columns().len()
    );
}

/// Log the headline numbers of a summary
pub fn log_summary(summary: &DashboardSummary) {
    let metrics = &summary.metrics;
    info!(
        "Summary: graduates={}, universities={}, countries={}, years={}",
        metrics.total_graduates, metrics.universities, metrics.countries, metrics.year_range
    );
    debug!(
        "  Chart categories: years={}, zones={}, districts={}",
        summary.charts.graduation_trend.len(),
        summary.charts.gender_by_zone.row_keys.len(),
        summary.charts.top_districts.len()
    );
}

/// Log a file written by the tool
pub fn log_file_written<P: AsRef<Path>>(kind: &str, path: P) {
    info!("Wrote {kind} to {}", path.as_ref().display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisOptions, summarize};
    use crate::cleaning::CleaningPipeline;
    use crate::core::constants::columns;
    use std::io;

    fn raw_table() -> Table {
        Table::new(
            columns::REQUIRED.iter().map(|c| c.to_string()).collect(),
            vec![
                ["MIT/US", "East, Cambridge, Boston", "2021", "Male"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            ],
        )
    }

    #[test]
    fn test_logger_initialization_is_repeatable() {
        init_logger(true, false);
        init_logger(false, true);
        // quiet takes precedence
        init_logger(true, true);
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default());

        let config = Config {
            output_format: Some("json".to_string()),
            top_districts: Some(3),
            ..Default::default()
        };
        log_config_info(&config);
    }

    #[test]
    fn test_log_pipeline_stages() {
        let raw = raw_table();
        log_table_loaded("graduates.csv", &raw);

        let cleaned = CleaningPipeline::default().run(&raw).unwrap();
        log_cleaning_complete(&cleaned);

        let summary = summarize(&cleaned, &AnalysisOptions::default()).unwrap();
        log_summary(&summary);
        log_file_written("dashboard", "dashboard.html");
    }

    #[test]
    fn test_log_error_and_warning() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        log_error("Could not read input", Some(&io_error));
        log_error("Plain failure", None);
        log_warning("Something looks off");
    }
}
