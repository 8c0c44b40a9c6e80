//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::analysis::AnalysisOptions;
use crate::cleaning::NameNormalizer;
use crate::core::constants::{aliases, defaults, files, output_formats};
use crate::core::error::{GradboardError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Generate HTML dashboard report
    pub html_dashboard_path: Option<String>,

    /// Write the cleaned table as CSV
    pub export_path: Option<String>,

    /// Universities shown in the ranking chart
    pub top_universities: Option<usize>,

    /// Universities followed in the enrollment trend chart
    pub top_university_trends: Option<usize>,

    /// Districts shown in the ranking chart
    pub top_districts: Option<usize>,

    /// Extra country code mappings, applied on top of the built-in ones
    pub country_aliases: Option<BTreeMap<String, String>>,

    /// Extra university variant mappings, applied on top of the built-in ones
    pub university_aliases: Option<BTreeMap<String, String>>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GradboardError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            GradboardError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(files::CONFIG_FILE_NAME) {
            return config;
        }

        for i in 1..=files::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), files::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if let Some(ref dashboard_path) = cli_config.html_dashboard_path {
            self.html_dashboard_path = Some(dashboard_path.clone());
        }
        if let Some(ref export_path) = cli_config.export_path {
            self.export_path = Some(export_path.clone());
        }

        // Charts
        if let Some(top) = cli_config.top_universities {
            self.top_universities = Some(top);
        }
        if let Some(top) = cli_config.top_university_trends {
            self.top_university_trends = Some(top);
        }
        if let Some(top) = cli_config.top_districts {
            self.top_districts = Some(top);
        }
    }

    /// Top-N settings for the aggregation step
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            top_universities: self.top_universities.unwrap_or(defaults::TOP_UNIVERSITIES),
            top_university_trends: self
                .top_university_trends
                .unwrap_or(defaults::TOP_UNIVERSITY_TRENDS),
            top_districts: self.top_districts.unwrap_or(defaults::TOP_DISTRICTS),
        }
    }

    /// Name normalizer with the configured aliases added to the built-in ones
    pub fn name_normalizer(&self) -> NameNormalizer {
        NameNormalizer::with_aliases(
            self.country_aliases.clone().unwrap_or_default(),
            self.university_aliases.clone().unwrap_or_default(),
        )
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate output format
        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(GradboardError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        // Validate top-N settings
        for (name, value) in [
            ("top_universities", self.top_universities),
            ("top_university_trends", self.top_university_trends),
            ("top_districts", self.top_districts),
        ] {
            if let Some(top) = value
                && !(1..=defaults::MAX_TOP_N).contains(&top)
            {
                return Err(GradboardError::Config(format!(
                    "{name} of {top} is invalid. Expected a value between 1-{}.",
                    defaults::MAX_TOP_N
                )));
            }
        }

        // Validate alias tables
        if let Some(ref entries) = self.country_aliases {
            validate_aliases("country_aliases", entries, &aliases::COUNTRIES)?;
        }
        if let Some(ref entries) = self.university_aliases {
            validate_aliases("university_aliases", entries, &aliases::UNIVERSITIES)?;
        }

        Ok(())
    }
}

/// Reject empty names and canonical names that would be rewritten again.
///
/// Configured entries take precedence over the built-in ones, so a target is
/// looked up in the configured table first.
fn validate_aliases(
    table: &str,
    entries: &BTreeMap<String, String>,
    built_in: &[(&str, &str)],
) -> Result<()> {
    let lookup = |name: &str| -> Option<String> {
        entries.get(name).cloned().or_else(|| {
            built_in
                .iter()
                .find(|(from, _)| *from == name)
                .map(|(_, to)| to.to_string())
        })
    };

    for (from, to) in entries {
        if from.is_empty() || to.is_empty() {
            return Err(GradboardError::Config(format!(
                "{table} cannot contain empty names ('{from}' = '{to}')."
            )));
        }

        if let Some(next) = lookup(to)
            && next != *to
        {
            return Err(GradboardError::Config(format!(
                "{table} maps '{from}' to '{to}', which is itself mapped to '{next}'. Map '{from}' to the final name instead."
            )));
        }
    }
    Ok(())
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Output & format
    pub quiet: bool,                         // --quiet
    pub verbose: bool,                       // --verbose
    pub output_format: Option<String>,       // --format
    pub html_dashboard_path: Option<String>, // --html-dashboard
    pub export_path: Option<String>,         // --export

    // Charts
    pub top_universities: Option<usize>,      // --top-universities
    pub top_university_trends: Option<usize>, // --top-university-trends
    pub top_districts: Option<usize>,         // --top-districts

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn aliases(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output_format, None);
        assert_eq!(config.analysis_options(), AnalysisOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            b"output_format = \"json\"\n\
              top_districts = 5\n\
              \n\
              [country_aliases]\n\
              UK = \"United Kingdom\"\n\
              \n\
              [university_aliases]\n\
              \"M.I.T.\" = \"MIT\"\n",
        )?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.output_format, Some("json".to_string()));
        assert_eq!(config.top_districts, Some(5));
        assert_eq!(
            config.country_aliases,
            Some(aliases(&[("UK", "United Kingdom")]))
        );

        let normalizer = config.name_normalizer();
        assert_eq!(normalizer.normalize_country("UK"), "United Kingdom");
        assert_eq!(normalizer.normalize_country("NP"), "Nepal");
        assert_eq!(normalizer.normalize_university("M.I.T."), "MIT");

        Ok(())
    }

    #[test]
    fn test_config_load_invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"top_districts = [")?;

        let error = Config::load_from_file(file.path()).unwrap_err();
        assert!(format!("{error}").contains("Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_config_load_missing_file() {
        let error = Config::load_from_file("/definitely/missing/.gradboard.toml").unwrap_err();
        assert!(matches!(error, GradboardError::Config(_)));
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config {
            top_universities: Some(20),
            output_format: Some("json".to_string()),
            ..Default::default()
        };
        let cli_config = CliConfig {
            verbose: true,
            output_format: Some("minimal".to_string()),
            top_districts: Some(3),
            export_path: Some("out.csv".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.output_format, Some("minimal".to_string()));
        assert_eq!(config.top_universities, Some(20));
        assert_eq!(config.top_districts, Some(3));
        assert_eq!(config.export_path, Some("out.csv".to_string()));
    }

    #[test]
    fn test_analysis_options_from_config() {
        let config = Config {
            top_universities: Some(5),
            ..Default::default()
        };

        let options = config.analysis_options();
        assert_eq!(options.top_universities, 5);
        assert_eq!(options.top_university_trends, defaults::TOP_UNIVERSITY_TRENDS);
        assert_eq!(options.top_districts, defaults::TOP_DISTRICTS);
    }

    #[test]
    fn test_validate_output_format() {
        let config = Config {
            output_format: Some("xml".to_string()),
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(format!("{error}").contains("Invalid output format 'xml'"));
    }

    #[test]
    fn test_validate_top_n_bounds() {
        let zero = Config {
            top_districts: Some(0),
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let huge = Config {
            top_universities: Some(defaults::MAX_TOP_N + 1),
            ..Default::default()
        };
        assert!(huge.validate().is_err());

        let fine = Config {
            top_university_trends: Some(defaults::MAX_TOP_N),
            ..Default::default()
        };
        assert!(fine.validate().is_ok());
    }

    #[test]
    fn test_validate_alias_chain() {
        let config = Config {
            country_aliases: Some(aliases(&[("UK", "GB"), ("GB", "United Kingdom")])),
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(format!("{error}").contains("which is itself mapped to 'United Kingdom'"));
    }

    #[test]
    fn test_validate_alias_chain_through_built_in() {
        let config = Config {
            country_aliases: Some(aliases(&[("NPL", "NP")])),
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(format!("{error}").contains("which is itself mapped to 'Nepal'"));

        let overridden = Config {
            country_aliases: Some(aliases(&[("NPL", "NP"), ("NP", "NP")])),
            ..Default::default()
        };
        assert!(overridden.validate().is_ok());
    }

    #[test]
    fn test_validate_alias_self_mapping_allowed() {
        let config = Config {
            university_aliases: Some(aliases(&[("MIT", "MIT"), ("M.I.T.", "MIT")])),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_alias_empty_names() {
        let config = Config {
            country_aliases: Some(aliases(&[("", "Nowhere")])),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
