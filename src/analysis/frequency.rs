use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::{Table, natural_cmp};

/// One category and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub value: String,
    pub count: usize,
}

/// Value counts of a single categorical column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    pub column: String,
    pub counts: Vec<Count>,
}

impl FrequencyTable {
    /// Count values, most frequent first; ties keep first-seen order
    pub fn from_values<'a, I>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut positions: FxHashMap<&str, usize> = FxHashMap::default();
        let mut counts: Vec<Count> = Vec::new();

        for value in values {
            match positions.get(value) {
                Some(&index) => counts[index].count += 1,
                None => {
                    positions.insert(value, counts.len());
                    counts.push(Count {
                        value: value.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // stable sort keeps first-seen order among equal counts
        counts.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            column: column.to_string(),
            counts,
        }
    }

    /// Value counts of a table column, missing cells excluded
    pub fn of_column(table: &Table, column: &str) -> Result<Self> {
        Ok(Self::from_values(column, table.present_values(column)?))
    }

    /// Reorder ascending by category, numerically where possible
    pub fn sorted_by_value(mut self) -> Self {
        self.counts.sort_by(|a, b| natural_cmp(&a.value, &b.value));
        self
    }

    /// Keep the `n` most frequent categories
    pub fn top(mut self, n: usize) -> Self {
        self.counts.sort_by(|a, b| b.count.cmp(&a.count));
        self.counts.truncate(n);
        self
    }

    pub fn get(&self, value: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.count)
    }

    pub fn values(&self) -> Vec<&str> {
        self.counts.iter().map(|entry| entry.value.as_str()).collect()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.iter().map(|entry| entry.count).sum()
    }

    /// Share of each category in percent, in table order
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.counts
            .iter()
            .map(|entry| {
                if total > 0 {
                    entry.count as f64 / total as f64 * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
