use std::fmt;

/// Comprehensive error types for gradboard operations
#[derive(Debug)]
pub enum GradboardError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// CSV reading or writing error
    Csv(csv::Error),

    /// Excel workbook error
    Spreadsheet(calamine::XlsxError),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// A required column is absent from the input table
    MissingColumn(String),

    /// A composite field did not split into the expected number of parts
    SchemaMismatch {
        column: String,
        row: usize,
        expected: usize,
        found: usize,
        value: String,
    },

    /// File not found error
    FileNotFound(String),

    /// Input file type is not supported
    UnsupportedFormat(String),

    /// Input content cannot be turned into a table
    InvalidInput(String),
}

impl fmt::Display for GradboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradboardError::Io(err) => write!(f, "IO error: {err}"),
            GradboardError::Config(msg) => write!(f, "Configuration error: {msg}"),
            GradboardError::Csv(err) => write!(f, "CSV error: {err}"),
            GradboardError::Spreadsheet(err) => write!(f, "Spreadsheet error: {err}"),
            GradboardError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            GradboardError::Json(err) => write!(f, "JSON error: {err}"),
            GradboardError::MissingColumn(column) => {
                write!(f, "Missing column: required column '{column}' not found")
            }
            GradboardError::SchemaMismatch {
                column,
                row,
                expected,
                found,
                value,
            } => write!(
                f,
                "Schema mismatch: column '{column}' at row {row} split into {found} part(s), expected {expected} (value: '{value}')"
            ),
            GradboardError::FileNotFound(path) => write!(f, "File not found: {path}"),
            GradboardError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {msg}"),
            GradboardError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for GradboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GradboardError::Io(err) => Some(err),
            GradboardError::Csv(err) => Some(err),
            GradboardError::Spreadsheet(err) => Some(err),
            GradboardError::TomlParsing(err) => Some(err),
            GradboardError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GradboardError {
    fn from(err: std::io::Error) -> Self {
        GradboardError::Io(err)
    }
}

impl From<csv::Error> for GradboardError {
    fn from(err: csv::Error) -> Self {
        GradboardError::Csv(err)
    }
}

impl From<calamine::XlsxError> for GradboardError {
    fn from(err: calamine::XlsxError) -> Self {
        GradboardError::Spreadsheet(err)
    }
}

impl From<toml::de::Error> for GradboardError {
    fn from(err: toml::de::Error) -> Self {
        GradboardError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for GradboardError {
    fn from(err: serde_json::Error) -> Self {
        GradboardError::Json(err)
    }
}

/// Type alias for Results using GradboardError
pub type Result<T> = std::result::Result<T, GradboardError>;
