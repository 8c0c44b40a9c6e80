use calamine::{Data, Reader, Xlsx, open_workbook};
use std::path::Path;

use crate::core::error::{GradboardError, Result};
use crate::core::types::Table;

/// Read the first worksheet of an `.xlsx` workbook; its first row is the header
pub fn read_xlsx(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| GradboardError::InvalidInput("workbook has no worksheet".to_string()))??;

    let mut rows = range.rows();
    let columns = header_columns(rows.next())?;

    let rows = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(Table::new(columns, rows))
}

/// Column names from the first sheet row; a missing or all-blank row is no header
fn header_columns(header: Option<&[Data]>) -> Result<Vec<String>> {
    let columns: Vec<String> = header
        .unwrap_or_default()
        .iter()
        .map(|cell| cell_to_string(cell).trim().to_string())
        .collect();

    if columns.iter().all(|name| name.is_empty()) {
        return Err(GradboardError::InvalidInput(
            "no header row found".to_string(),
        ));
    }

    Ok(columns)
}

/// Render a cell the way it reads in the sheet; `2020.0` becomes `2020`
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Float(number) if number.fract() == 0.0 && number.abs() < 1e15 => {
            format!("{}", *number as i64)
        }
        other => other.to_string(),
    }
}
