use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::SaagError;

/// Read `(label, value)` pairs from the first worksheet of an xlsx workbook.
///
/// Column A holds the label and column B the value. Leading rows without a
/// label are skipped; the first empty label after that ends the sheet.
pub fn read_xlsx_rows(bytes: &[u8]) -> Result<Vec<(String, String)>, SaagError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| SaagError::Xlsx(format!("failed to open xlsx: {e}")))?;

    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SaagError::Xlsx("workbook has no worksheets".into()))?
        .map_err(|e| SaagError::Xlsx(format!("failed to read first worksheet: {e}")))?;

    let mut rows = Vec::new();
    for row in sheet.rows() {
        let label = row.first().and_then(cell_as_string);
        match label {
            Some(label) => {
                let value = row.get(1).and_then(cell_as_string).unwrap_or_default();
                rows.push((label, value));
            }
            None if rows.is_empty() => continue,
            None => break,
        }
    }

    if rows.is_empty() {
        return Err(SaagError::Xlsx("no label/value rows found in first worksheet".into()));
    }

    tracing::debug!(rows = rows.len(), "read xlsx lab sheet");
    Ok(rows)
}

fn cell_as_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Float(f) => Some(float_to_string(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}

/// Shortest decimal rendering of a float cell, so 0.35 stays "0.35"
/// rather than picking up binary artifacts downstream.
fn float_to_string(f: f64) -> String {
    format!("{f}")
}
