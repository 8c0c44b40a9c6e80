//! Data cleaning
//!
//! This module turns the raw input table into the cleaned table:
//! composite fields are split into structured columns and names are
//! canonicalized. Every stage takes a table and returns a new one.

pub mod normalizer;
pub mod splitter;

// Re-export commonly used items
pub use normalizer::NameNormalizer;
pub use splitter::{Address, SplitError, split_address, split_composite_fields, split_university_country};

use crate::core::constants::columns;
use crate::core::error::Result;
use crate::core::types::{Table, parse_year};

/// Check that every required input column is present
pub fn check_required_columns(table: &Table) -> Result<()> {
    for column in columns::REQUIRED {
        table.require_column(column)?;
    }
    Ok(())
}

/// Rewrite parsable `Passout Year` cells as plain integers.
///
/// `2020`, `2020.0` and ` 2020` become the same category. Cells that do not
/// parse are kept as they are.
pub fn canonicalize_years(table: &Table) -> Result<Table> {
    let year = table.require_column(columns::PASSOUT_YEAR)?;

    let rows = table
        .rows()
        .iter()
        .map(|row| {
            let mut row = row.clone();
            if let Some(parsed) = parse_year(&row[year]) {
                row[year] = parsed.to_string();
            }
            row
        })
        .collect();

    Ok(Table::new(table.columns().to_vec(), rows))
}

/// Schema check, field splitting, year and name normalization in one pass
#[derive(Debug, Clone, Default)]
pub struct CleaningPipeline {
    normalizer: NameNormalizer,
}

impl CleaningPipeline {
    pub fn new(normalizer: NameNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn run(&self, raw: &Table) -> Result<Table> {
        check_required_columns(raw)?;
        let split = split_composite_fields(raw)?;
        let years = canonicalize_years(&split)?;
        self.normalizer.normalize(&years)
    }
}
