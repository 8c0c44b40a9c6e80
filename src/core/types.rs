use serde::Serialize;
use std::cmp::Ordering;

use crate::core::constants::columns;
use crate::core::error::{GradboardError, Result};

/// An in-memory table of string cells.
///
/// Every row holds exactly one cell per column. An empty cell is a missing
/// value: it is skipped by counting and grouping operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, padding short rows with empty cells and truncating long ones
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Index of a column, or `MissingColumn` if the table lacks it
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| GradboardError::MissingColumn(name.to_string()))
    }

    /// All cells of one column, in row order
    pub fn column_values(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Non-missing cells of one column, in row order
    pub fn present_values(&self, name: &str) -> Result<Vec<&str>> {
        Ok(self
            .column_values(name)?
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect())
    }

    /// Cell pairs of two columns where both cells are present
    pub fn value_pairs(&self, row_column: &str, column_column: &str) -> Result<Vec<(&str, &str)>> {
        let row_index = self.require_column(row_column)?;
        let column_index = self.require_column(column_column)?;

        Ok(self
            .rows
            .iter()
            .map(|row| (row[row_index].as_str(), row[column_index].as_str()))
            .filter(|(row_value, column_value)| !row_value.is_empty() && !column_value.is_empty())
            .collect())
    }

    /// A new table keeping only rows whose `column` value is one of `keys`
    pub fn retain_values(&self, column: &str, keys: &[&str]) -> Result<Table> {
        let index = self.require_column(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| keys.contains(&row[index].as_str()))
            .cloned()
            .collect();

        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Typed view of the cleaned table
    pub fn graduates(&self) -> Result<Vec<GraduateRecord>> {
        let university = self.require_column(columns::UNIVERSITY)?;
        let country = self.require_column(columns::COUNTRY)?;
        let zone = self.require_column(columns::ZONE)?;
        let district = self.require_column(columns::DISTRICT)?;
        let city = self.require_column(columns::CITY)?;
        let passout_year = self.require_column(columns::PASSOUT_YEAR)?;
        let gender = self.require_column(columns::GENDER)?;

        Ok(self
            .rows
            .iter()
            .map(|row| GraduateRecord {
                university: row[university].clone(),
                country: row[country].clone(),
                zone: row[zone].clone(),
                district: row[district].clone(),
                city: row[city].clone(),
                passout_year: parse_year(&row[passout_year]),
                gender: row[gender].clone(),
            })
            .collect())
    }
}

/// One graduate after cleaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraduateRecord {
    pub university: String,
    pub country: String,
    pub zone: String,
    pub district: String,
    pub city: String,
    pub passout_year: Option<i32>,
    pub gender: String,
}

/// Parse a year cell; spreadsheets may deliver integral floats like `2020.0`
pub fn parse_year(value: &str) -> Option<i32> {
    let value = value.trim();
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }

    match value.parse::<f64>() {
        Ok(year) if year.is_finite() && year.fract() == 0.0 => {
            let year = year as i64;
            i32::try_from(year).ok()
        }
        _ => None,
    }
}

/// Ascending order: numeric keys first in numeric order, then the rest lexically
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    match (numeric_key(left), numeric_key(right)) {
        (Some(l), Some(r)) => l.total_cmp(&r).then_with(|| left.cmp(right)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => left.cmp(right),
    }
}

fn numeric_key(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn cleaned_table() -> Table {
        Table::new(
            strings(&[
                "Name",
                "Passout Year",
                "Gender",
                "University",
                "Country",
                "Zone",
                "District",
                "City",
            ]),
            vec![
                strings(&["Asha", "2021", "Female", "MIT", "United States", "East", "Cambridge", "Boston"]),
                strings(&["Ravi", "2020.0", "Male", "IIT", "India", "North", "Delhi", "Delhi"]),
                strings(&["Kiran", "unknown", "Male", "", "Nepal", "West", "Kaski", "Pokhara"]),
            ],
        )
    }

    #[test]
    fn test_new_pads_and_truncates_rows() {
        let table = Table::new(
            strings(&["a", "b", "c"]),
            vec![strings(&["1"]), strings(&["1", "2", "3", "4"])],
        );

        assert_eq!(table.rows()[0], strings(&["1", "", ""]));
        assert_eq!(table.rows()[1], strings(&["1", "2", "3"]));
    }

    #[test]
    fn test_require_column_missing() {
        let table = cleaned_table();
        let error = table.require_column("Address").unwrap_err();
        assert!(matches!(error, GradboardError::MissingColumn(ref name) if name == "Address"));
    }

    #[test]
    fn test_present_values_skips_empty_cells() {
        let table = cleaned_table();
        assert_eq!(table.present_values("University").unwrap(), vec!["MIT", "IIT"]);
        assert_eq!(table.column_values("University").unwrap().len(), 3);
    }

    #[test]
    fn test_value_pairs_requires_both_cells() {
        let table = cleaned_table();
        let pairs = table.value_pairs("University", "Gender").unwrap();
        assert_eq!(pairs, vec![("MIT", "Female"), ("IIT", "Male")]);
    }

    #[test]
    fn test_retain_values() {
        let table = cleaned_table();
        let filtered = table.retain_values("Country", &["India", "Nepal"]).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.columns(), table.columns());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_graduates_view() {
        let graduates = cleaned_table().graduates().unwrap();

        assert_eq!(graduates.len(), 3);
        assert_eq!(graduates[0].university, "MIT");
        assert_eq!(graduates[0].passout_year, Some(2021));
        assert_eq!(graduates[1].passout_year, Some(2020));
        assert_eq!(graduates[2].passout_year, None);
    }

    #[test]
    fn test_graduates_view_requires_cleaned_columns() {
        let raw = Table::new(strings(&["University/Country"]), vec![]);
        assert!(matches!(
            raw.graduates(),
            Err(GradboardError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2019"), Some(2019));
        assert_eq!(parse_year(" 2019 "), Some(2019));
        assert_eq!(parse_year("2019.0"), Some(2019));
        assert_eq!(parse_year("2019.5"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("twenty"), None);
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("9", "10"), Ordering::Less);
        assert_eq!(natural_cmp("2020", "2020.0"), Ordering::Less);
        assert_eq!(natural_cmp("2020", "2020"), Ordering::Equal);
        assert_eq!(natural_cmp("East", "North"), Ordering::Less);
        assert_eq!(natural_cmp("10", "East"), Ordering::Less);
        assert_eq!(natural_cmp("NaN", "10"), Ordering::Greater);
    }
}
