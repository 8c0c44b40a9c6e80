use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::io::{Read, Write};

use crate::core::error::{GradboardError, Result};
use crate::core::types::Table;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read a comma-separated document whose first record is the header.
///
/// Cells are kept verbatim. Ragged rows are accepted and fitted to the
/// header width by [`Table::new`].
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|name| name.trim_start_matches(BYTE_ORDER_MARK).trim().to_string())
        .collect();

    if columns.iter().all(|name| name.is_empty()) {
        return Err(GradboardError::InvalidInput(
            "no header row found".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(columns, rows))
}

/// Write a table as CSV, header first
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
