use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::{Table, natural_cmp};

/// Counts of (row category, column category) pairs.
///
/// Both key lists are sorted ascending and every combination has a cell;
/// combinations that never occur hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossTab {
    pub row_label: String,
    pub column_label: String,
    pub row_keys: Vec<String>,
    pub column_keys: Vec<String>,
    /// `counts[row][column]`
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    pub fn from_pairs<'a, I>(row_label: &str, column_label: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut pair_counts: FxHashMap<(&str, &str), usize> = FxHashMap::default();
        for pair in pairs {
            *pair_counts.entry(pair).or_insert(0) += 1;
        }

        let row_keys = sorted_keys(pair_counts.keys().map(|(row, _)| *row));
        let column_keys = sorted_keys(pair_counts.keys().map(|(_, column)| *column));

        let counts = row_keys
            .iter()
            .map(|row| {
                column_keys
                    .iter()
                    .map(|column| {
                        pair_counts
                            .get(&(row.as_str(), column.as_str()))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();

        Self {
            row_label: row_label.to_string(),
            column_label: column_label.to_string(),
            row_keys,
            column_keys,
            counts,
        }
    }

    /// Cross-tabulate two table columns over rows where both are present
    pub fn of_columns(table: &Table, row_column: &str, column_column: &str) -> Result<Self> {
        Ok(Self::from_pairs(
            row_column,
            column_column,
            table.value_pairs(row_column, column_column)?,
        ))
    }

    /// Swap rows and columns
    pub fn transposed(&self) -> Self {
        let counts = (0..self.column_keys.len())
            .map(|column| self.counts.iter().map(|row| row[column]).collect())
            .collect();

        Self {
            row_label: self.column_label.clone(),
            column_label: self.row_label.clone(),
            row_keys: self.column_keys.clone(),
            column_keys: self.row_keys.clone(),
            counts,
        }
    }

    pub fn get(&self, row: &str, column: &str) -> Option<usize> {
        let row_index = self.row_keys.iter().position(|key| key == row)?;
        let column_index = self.column_keys.iter().position(|key| key == column)?;
        Some(self.counts[row_index][column_index])
    }

    /// Counts of one column category across all rows, for a chart series
    pub fn column_series(&self, column: &str) -> Option<Vec<usize>> {
        let index = self.column_keys.iter().position(|key| key == column)?;
        Some(self.counts.iter().map(|row| row[index]).collect())
    }

    pub fn row_total(&self, row: &str) -> Option<usize> {
        let index = self.row_keys.iter().position(|key| key == row)?;
        Some(self.counts[index].iter().sum())
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.row_keys.is_empty()
    }
}

fn sorted_keys<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut keys: Vec<&str> = keys.collect();
    keys.sort_by(|a, b| natural_cmp(a, b));
    keys.dedup();
    keys.into_iter().map(str::to_string).collect()
}
