//! Spreadsheet ingestion
//!
//! Turns an uploaded Excel file into validated, submission-ready rows:
//! `reader` parses the first sheet into [`NormalizedRow`]s, `validate`
//! keeps the ones carrying a usable email address.

pub mod reader;
pub mod validate;

pub use reader::read_rows;
pub use validate::{IDENTIFIER_FIELD, ValidatedRow, filter_valid, require_valid};

use std::collections::HashMap;

/// One spreadsheet row keyed by normalized field names.
///
/// Keys are always trimmed and lower-cased; values are the cell contents
/// rendered to strings, with empty cells stored as `""` rather than
/// omitted. When two source headers collide after normalization, the
/// later column wins (deterministic by column order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRow {
    fields: HashMap<String, String>,
}

impl NormalizedRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under the normalized form of `header`.
    pub fn insert(&mut self, header: &str, value: String) {
        self.fields.insert(normalize_header(header), value);
    }

    /// Look up a field by its normalized name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// True when every cell in the row is blank.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.trim().is_empty())
    }
}

/// Normalize a column header: trim surrounding whitespace, lower-case.
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}
