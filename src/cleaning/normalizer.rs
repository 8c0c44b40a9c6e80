use rustc_hash::FxHashMap;

use crate::core::constants::{aliases, columns, delimiters};
use crate::core::error::Result;
use crate::core::types::Table;

/// Exact-match canonicalization of country codes and university names.
///
/// Lookups are case-sensitive. A value without an entry is returned as is.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    country_aliases: FxHashMap<String, String>,
    university_aliases: FxHashMap<String, String>,
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self {
            country_aliases: to_map(&aliases::COUNTRIES),
            university_aliases: to_map(&aliases::UNIVERSITIES),
        }
    }
}

fn to_map(entries: &[(&str, &str)]) -> FxHashMap<String, String> {
    entries
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

impl NameNormalizer {
    /// Built-in tables extended (or overridden) by extra entries
    pub fn with_aliases<C, U>(country_aliases: C, university_aliases: U) -> Self
    where
        C: IntoIterator<Item = (String, String)>,
        U: IntoIterator<Item = (String, String)>,
    {
        let mut normalizer = Self::default();
        normalizer.country_aliases.extend(country_aliases);
        normalizer.university_aliases.extend(university_aliases);
        normalizer
    }

    /// Map a country code to its full name
    pub fn normalize_country(&self, value: &str) -> String {
        match self.country_aliases.get(value) {
            Some(canonical) => canonical.clone(),
            None => value.to_string(),
        }
    }

    /// Drop campus qualifiers after the first comma, then merge known variants
    pub fn normalize_university(&self, value: &str) -> String {
        let name = value
            .split(delimiters::UNIVERSITY_QUALIFIER)
            .next()
            .unwrap_or_default();

        match self.university_aliases.get(name) {
            Some(canonical) => canonical.clone(),
            None => name.to_string(),
        }
    }

    /// Rewrite the `Country` and `University` columns of a split table
    pub fn normalize(&self, table: &Table) -> Result<Table> {
        let country = table.require_column(columns::COUNTRY)?;
        let university = table.require_column(columns::UNIVERSITY)?;

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row[country] = self.normalize_country(&row[country]);
                row[university] = self.normalize_university(&row[university]);
                row
            })
            .collect();

        Ok(Table::new(table.columns().to_vec(), rows))
    }

    pub fn country_alias_count(&self) -> usize {
        self.country_aliases.len()
    }

    pub fn university_alias_count(&self) -> usize {
        self.university_aliases.len()
    }
}
