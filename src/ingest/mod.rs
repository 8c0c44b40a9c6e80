//! Table loading
//!
//! This module reads the input file (CSV or Excel workbook) into
//! an in-memory [`Table`] and writes cleaned tables back out as CSV.

pub mod delimited;
pub mod workbook;

pub use delimited::{read_csv, write_csv};
pub use workbook::read_xlsx;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::constants::files;
use crate::core::error::{GradboardError, Result};
use crate::core::types::Table;

/// Input file kinds understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Xlsx,
}

impl InputFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some(files::CSV_EXTENSION) => Ok(Self::Csv),
            Some(files::XLSX_EXTENSION) => Ok(Self::Xlsx),
            _ => Err(GradboardError::UnsupportedFormat(format!(
                "'{}' is not a supported file. Expected one of: {}.",
                path.display(),
                files::SUPPORTED_EXTENSIONS.join(", ")
            ))),
        }
    }
}

/// Load the input file into a table
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(GradboardError::FileNotFound(path.display().to_string()));
    }

    match InputFormat::from_path(path)? {
        InputFormat::Csv => read_csv(BufReader::new(File::open(path)?)),
        InputFormat::Xlsx => read_xlsx(path),
    }
}

/// Write a table as CSV to `path`
pub fn export_csv(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(table, file)
}
