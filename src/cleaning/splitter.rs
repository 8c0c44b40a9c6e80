use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::core::constants::{columns, delimiters};
use crate::core::error::{GradboardError, Result};
use crate::core::types::Table;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace pattern"));

/// A composite field split into the wrong number of parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitError {
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} part(s), found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for SplitError {}

/// Parts of a `<zone>, <district>, <city>` address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub zone: String,
    pub district: String,
    pub city: String,
}

/// Split `<university>/<country>`; exactly one `/` is accepted.
///
/// The parts are returned untouched, so joining them with `/` gives back
/// the input.
pub fn split_university_country(value: &str) -> std::result::Result<(String, String), SplitError> {
    let parts: Vec<&str> = value.split(delimiters::UNIVERSITY_COUNTRY).collect();
    match parts.as_slice() {
        [university, country] => Ok((university.to_string(), country.to_string())),
        _ => Err(SplitError {
            expected: delimiters::UNIVERSITY_COUNTRY_PARTS,
            found: parts.len(),
        }),
    }
}

/// Split `<zone>, <district>, <city>`; exactly three segments are accepted
pub fn split_address(value: &str) -> std::result::Result<Address, SplitError> {
    let parts: Vec<&str> = value.split(delimiters::ADDRESS).collect();
    match parts.as_slice() {
        [zone, district, city] => Ok(Address {
            zone: zone.trim().to_string(),
            district: remove_whitespace(district),
            city: city.trim().to_string(),
        }),
        _ => Err(SplitError {
            expected: delimiters::ADDRESS_PARTS,
            found: parts.len(),
        }),
    }
}

/// Remove every whitespace character, not only the surrounding ones
pub fn remove_whitespace(value: &str) -> String {
    WHITESPACE.replace_all(value, "").into_owned()
}

/// Replace `University/Country` and `Address` with the five structured
/// columns `University`, `Country`, `Zone`, `District` and `City`.
///
/// Input columns that already carry one of those names are dropped.
///
/// The first row that does not split fails the whole table.
pub fn split_composite_fields(table: &Table) -> Result<Table> {
    let university_country = table.require_column(columns::UNIVERSITY_COUNTRY)?;
    let address = table.require_column(columns::ADDRESS)?;

    // existing columns named like a split output are replaced
    let kept: Vec<usize> = (0..table.columns().len())
        .filter(|&index| index != university_country && index != address)
        .filter(|&index| !columns::SPLIT_OUTPUT.contains(&table.columns()[index].as_str()))
        .collect();

    let mut output_columns: Vec<String> = kept
        .iter()
        .map(|&index| table.columns()[index].clone())
        .collect();
    output_columns.extend(columns::SPLIT_OUTPUT.iter().map(|name| name.to_string()));

    let mut rows = Vec::with_capacity(table.len());
    for (position, row) in table.rows().iter().enumerate() {
        let row_number = position + 1;

        let (university, country) = split_university_country(&row[university_country])
            .map_err(|err| {
                schema_mismatch(columns::UNIVERSITY_COUNTRY, row_number, err, &row[university_country])
            })?;
        let parts = split_address(&row[address])
            .map_err(|err| schema_mismatch(columns::ADDRESS, row_number, err, &row[address]))?;

        let mut output: Vec<String> = kept.iter().map(|&index| row[index].clone()).collect();
        output.extend([university, country, parts.zone, parts.district, parts.city]);
        rows.push(output);
    }

    Ok(Table::new(output_columns, rows))
}

fn schema_mismatch(column: &str, row: usize, err: SplitError, value: &str) -> GradboardError {
    GradboardError::SchemaMismatch {
        column: column.to_string(),
        row,
        expected: err.expected,
        found: err.found,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table(rows: &[[&str; 4]]) -> Table {
        Table::new(
            ["Name", "University/Country", "Address", "Gender"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_split_university_country() {
        assert_eq!(
            split_university_country("MIT/US"),
            Ok(("MIT".to_string(), "US".to_string()))
        );
        assert_eq!(
            split_university_country("Tribhuvan University, Kirtipur/NP"),
            Ok(("Tribhuvan University, Kirtipur".to_string(), "NP".to_string()))
        );
    }

    #[test]
    fn test_split_university_country_wrong_arity() {
        assert_eq!(
            split_university_country("MIT"),
            Err(SplitError { expected: 2, found: 1 })
        );
        assert_eq!(
            split_university_country("A/B/US"),
            Err(SplitError { expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_split_university_country_keeps_spacing() {
        let (university, country) = split_university_country(" MIT / US").unwrap();
        assert_eq!(format!("{university}/{country}"), " MIT / US");
    }

    #[test]
    fn test_split_address() {
        assert_eq!(
            split_address("East, Cambridge, Boston"),
            Ok(Address {
                zone: "East".to_string(),
                district: "Cambridge".to_string(),
                city: "Boston".to_string(),
            })
        );
    }

    #[test]
    fn test_split_address_strips_all_district_whitespace() {
        let address = split_address("Bagmati ,  Kath man\tdu , Kathmandu").unwrap();
        assert_eq!(address.zone, "Bagmati");
        assert_eq!(address.district, "Kathmandu");
        assert_eq!(address.city, "Kathmandu");
    }

    #[test]
    fn test_split_address_wrong_arity() {
        assert_eq!(
            split_address("East, Cambridge"),
            Err(SplitError { expected: 3, found: 2 })
        );
        assert_eq!(
            split_address("East, Cambridge, Boston, USA"),
            Err(SplitError { expected: 3, found: 4 })
        );
    }

    #[test]
    fn test_split_composite_fields() {
        let table = raw_table(&[["Asha", "MIT/US", "East, Cambridge, Boston", "Female"]]);

        let split = split_composite_fields(&table).unwrap();

        assert_eq!(
            split.columns(),
            ["Name", "Gender", "University", "Country", "Zone", "District", "City"]
        );
        assert_eq!(
            split.rows()[0],
            ["Asha", "Female", "MIT", "US", "East", "Cambridge", "Boston"]
        );
    }

    #[test]
    fn test_split_composite_fields_fails_whole_batch() {
        let table = raw_table(&[
            ["Asha", "MIT/US", "East, Cambridge, Boston", "Female"],
            ["Ravi", "IIT/IN", "North, Delhi", "Male"],
        ]);

        match split_composite_fields(&table) {
            Err(GradboardError::SchemaMismatch {
                column,
                row,
                expected,
                found,
                value,
            }) => {
                assert_eq!(column, "Address");
                assert_eq!(row, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
                assert_eq!(value, "North, Delhi");
            }
            other => panic!("Expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_split_composite_fields_missing_separator() {
        let table = raw_table(&[["Asha", "MIT", "East, Cambridge, Boston", "Female"]]);

        assert!(matches!(
            split_composite_fields(&table),
            Err(GradboardError::SchemaMismatch { ref column, .. }) if column == "University/Country"
        ));
    }

    #[test]
    fn test_split_composite_fields_is_not_reapplicable() {
        let table = raw_table(&[["Asha", "MIT/US", "East, Cambridge, Boston", "Female"]]);
        let split = split_composite_fields(&table).unwrap();

        assert!(matches!(
            split_composite_fields(&split),
            Err(GradboardError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_split_composite_fields_empty_table() {
        let split = split_composite_fields(&raw_table(&[])).unwrap();
        assert!(split.is_empty());
        assert!(split.has_column("District"));
    }

    #[test]
    fn test_split_composite_fields_replaces_existing_output_columns() {
        let table = Table::new(
            ["Country", "University/Country", "Address", "City"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            vec![
                ["", "MIT/US", "East, Cambridge, Boston", "OLD"]
                    .iter()
                    .map(|cell| cell.to_string())
                    .collect(),
            ],
        );

        let split = split_composite_fields(&table).unwrap();

        assert_eq!(
            split.columns(),
            ["University", "Country", "Zone", "District", "City"]
        );
        assert_eq!(split.rows()[0], ["MIT", "US", "East", "Cambridge", "Boston"]);
    }
}
