/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful, emoji-enhanced report
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain `key: value` metric lines
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Column names of the input and cleaned tables
pub mod columns {
    /// Composite `<university>/<country>` input column
    pub const UNIVERSITY_COUNTRY: &str = "University/Country";
    /// Composite `<zone>, <district>, <city>` input column
    pub const ADDRESS: &str = "Address";
    pub const PASSOUT_YEAR: &str = "Passout Year";
    pub const GENDER: &str = "Gender";

    pub const UNIVERSITY: &str = "University";
    pub const COUNTRY: &str = "Country";
    pub const ZONE: &str = "Zone";
    pub const DISTRICT: &str = "District";
    pub const CITY: &str = "City";

    /// Columns that must be present before cleaning starts
    pub const REQUIRED: [&str; 4] = [UNIVERSITY_COUNTRY, ADDRESS, PASSOUT_YEAR, GENDER];

    /// Columns appended by the field splitter, in order
    pub const SPLIT_OUTPUT: [&str; 5] = [UNIVERSITY, COUNTRY, ZONE, DISTRICT, CITY];
}

/// Delimiters of the composite input fields
pub mod delimiters {
    pub const UNIVERSITY_COUNTRY: char = '/';
    pub const ADDRESS: char = ',';
    /// University names are truncated at the first occurrence of this
    pub const UNIVERSITY_QUALIFIER: char = ',';

    /// Number of parts `University/Country` must split into
    pub const UNIVERSITY_COUNTRY_PARTS: usize = 2;
    /// Number of parts `Address` must split into
    pub const ADDRESS_PARTS: usize = 3;
}

/// Built-in canonicalization tables
pub mod aliases {
    /// Country code to full country name
    pub const COUNTRIES: [(&str, &str); 3] = [
        ("NP", "Nepal"),
        ("IN", "India"),
        ("US", "United States"),
    ];

    const VEL_TECH: &str =
        "Vel Tech Rangarajan Dr. Sagunthala R&D Institute of Science and Technology";

    /// Known spelling variants of the same institution
    pub const UNIVERSITIES: [(&str, &str); 2] = [
        ("Vel Tech Dr RR & SR Technical University", VEL_TECH),
        (
            "Vel Tech Rangarajan Dr.Sagunthala R&D Institute of Science and Technology",
            VEL_TECH,
        ),
    ];
}

/// Metric constants
pub mod metrics {
    /// Gender value counted by the "Male %" metric
    pub const MALE: &str = "Male";
    /// Sentinel shown when the year range cannot be computed
    pub const NOT_APPLICABLE: &str = "N/A";
}

/// Default configuration values
pub mod defaults {
    /// Universities shown in the ranking chart
    pub const TOP_UNIVERSITIES: usize = 15;
    /// Universities followed in the enrollment trend chart
    pub const TOP_UNIVERSITY_TRENDS: usize = 10;
    /// Districts shown in the ranking chart
    pub const TOP_DISTRICTS: usize = 15;
    /// Upper bound accepted for any top-N setting
    pub const MAX_TOP_N: usize = 1000;
}

/// File processing constants
pub mod files {
    pub const CSV_EXTENSION: &str = "csv";
    pub const XLSX_EXTENSION: &str = "xlsx";
    /// Extensions accepted by the table loader
    pub const SUPPORTED_EXTENSIONS: [&str; 2] = [XLSX_EXTENSION, CSV_EXTENSION];
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".gradboard.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Display and formatting constants
pub mod display {
    pub const GRADUATES_EMOJI: &str = "🎓";
    pub const UNIVERSITY_EMOJI: &str = "🏫";
    pub const COUNTRY_EMOJI: &str = "🌍";
    pub const GENDER_EMOJI: &str = "🎯";
    pub const CALENDAR_EMOJI: &str = "📅";
    pub const LOCATION_EMOJI: &str = "📍";
    pub const CHART_EMOJI: &str = "📊";
    pub const FILE_EMOJI: &str = "📁";
    /// Widest bar drawn in text rankings
    pub const MAX_BAR_WIDTH: usize = 30;
    /// Longest label shown before truncation in text rankings
    pub const MAX_LABEL_WIDTH: usize = 48;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_required_columns() {
        assert!(columns::REQUIRED.contains(&"University/Country"));
        assert!(columns::REQUIRED.contains(&"Address"));
        assert!(columns::REQUIRED.contains(&"Passout Year"));
        assert!(columns::REQUIRED.contains(&"Gender"));
    }

    #[test]
    fn test_split_output_order() {
        assert_eq!(
            columns::SPLIT_OUTPUT,
            ["University", "Country", "Zone", "District", "City"]
        );
    }

    #[test]
    fn test_university_aliases_share_canonical_name() {
        let targets: Vec<&str> = aliases::UNIVERSITIES.iter().map(|(_, to)| *to).collect();
        assert!(targets.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_default_top_n() {
        assert_eq!(defaults::TOP_UNIVERSITIES, 15);
        assert_eq!(defaults::TOP_UNIVERSITY_TRENDS, 10);
        assert_eq!(defaults::TOP_DISTRICTS, 15);
    }
}
