//! Read lead rows from Excel files
//!
//! Only the first sheet of the workbook is read. The first row is taken
//! as the header row; every following row becomes one [`NormalizedRow`].

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use super::{NormalizedRow, normalize_header};
use crate::error::ImportError;

/// Extensions accepted before a parse is even attempted.
const ACCEPTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Read the first sheet of an Excel file into normalized rows.
///
/// Fully blank rows are skipped; blank cells under a known header are
/// kept as empty strings.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<NormalizedRow>, ImportError> {
    let path = path.as_ref();
    check_extension(path)?;

    let mut workbook = open_workbook_auto(path).map_err(|e| ImportError::Parse {
        reason: e.to_string(),
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ImportError::Parse {
            reason: "workbook has no sheets".to_string(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ImportError::Parse {
            reason: format!("failed to read sheet '{}': {}", sheet_name, e),
        })?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| normalize_header(&cell_to_string(cell)))
            .collect(),
        None => return Ok(Vec::new()),
    };
    warn_on_collisions(&headers);

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut normalized = NormalizedRow::new();
        for (col, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(col).map(cell_to_string).unwrap_or_default();
            normalized.insert(header, value);
        }
        if normalized.is_blank() {
            continue;
        }
        rows.push(normalized);
    }

    log::info!(
        "read {} rows from sheet '{}' of {}",
        rows.len(),
        sheet_name,
        path.display()
    );
    Ok(rows)
}

fn check_extension(path: &Path) -> Result<(), ImportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(ImportError::InvalidSelection {
            path: path.display().to_string(),
        })
    }
}

/// Headers that collide after normalization resolve last-column-wins;
/// surface it so a surprising import can be traced back to the sheet.
fn warn_on_collisions(headers: &[String]) {
    for (i, header) in headers.iter().enumerate() {
        if header.is_empty() {
            continue;
        }
        if headers[..i].contains(header) {
            log::warn!(
                "duplicate column '{}' after normalization; the later column wins",
                header
            );
        }
    }
}

/// Render a cell to its string form. Empty and error cells become `""`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
