//! Select rows eligible for submission

use super::NormalizedRow;
use crate::error::ImportError;

/// The one field that gates whether a row can be submitted.
pub const IDENTIFIER_FIELD: &str = "email";

/// A row that passed validation.
///
/// Carries the trimmed email so downstream code never sees the raw,
/// possibly padded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRow {
    email: String,
    row: NormalizedRow,
}

impl ValidatedRow {
    /// The trimmed, non-empty contact identifier.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Look up any other field by its normalized name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.row.get(field)
    }
}

/// Keep, in original order, the rows whose email trims non-empty.
///
/// Rows without one are dropped silently; the caller decides what an
/// empty result means (see [`crate::error::ImportError::NoValidRows`]).
pub fn filter_valid(rows: Vec<NormalizedRow>) -> Vec<ValidatedRow> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let email = row
                .get(IDENTIFIER_FIELD)
                .unwrap_or_default()
                .trim()
                .to_string();
            if email.is_empty() {
                log::debug!("dropping row {}: no {}", i + 1, IDENTIFIER_FIELD);
                None
            } else {
                Some(ValidatedRow { email, row })
            }
        })
        .collect()
}

/// Validate a parsed sheet for submission: at least one row must carry
/// an email, otherwise the batch must not start.
pub fn require_valid(rows: Vec<NormalizedRow>) -> Result<Vec<ValidatedRow>, ImportError> {
    let valid = filter_valid(rows);
    if valid.is_empty() {
        return Err(ImportError::NoValidRows);
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(email: &str) -> NormalizedRow {
        let mut row = NormalizedRow::new();
        row.insert("email", email.to_string());
        row.insert("nom", "Dupont".to_string());
        row
    }

    #[test]
    fn test_keeps_rows_with_email_in_order() {
        let rows = vec![row("a@b.fr"), row("c@d.fr"), row("e@f.fr")];
        let valid = filter_valid(rows);
        let emails: Vec<_> = valid.iter().map(ValidatedRow::email).collect();
        assert_eq!(emails, vec!["a@b.fr", "c@d.fr", "e@f.fr"]);
    }

    #[test]
    fn test_drops_rows_without_email() {
        let rows = vec![row("a@b.fr"), row(""), row("c@d.fr")];
        let valid = filter_valid(rows);
        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].email(), "a@b.fr");
        assert_eq!(valid[1].email(), "c@d.fr");
    }

    #[test]
    fn test_whitespace_only_email_is_dropped() {
        let valid = filter_valid(vec![row("a@b.fr"), row("   "), row("c@d.fr")]);
        assert_eq!(valid.len(), 2);
    }

    #[test]
    fn test_missing_email_field_is_dropped() {
        let mut no_email = NormalizedRow::new();
        no_email.insert("nom", "Dupont".to_string());
        let valid = filter_valid(vec![no_email]);
        assert!(valid.is_empty());
    }

    #[test]
    fn test_email_is_trimmed() {
        let valid = filter_valid(vec![row("  jean@exemple.fr  ")]);
        assert_eq!(valid[0].email(), "jean@exemple.fr");
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let rows = vec![row("a@b.fr"), row(""), row("   "), row("c@d.fr")];
        let input_len = rows.len();
        assert!(filter_valid(rows).len() <= input_len);
    }

    #[test]
    fn test_require_valid_errors_when_nothing_validates() {
        let err = require_valid(vec![row(""), row("   ")]).unwrap_err();
        assert!(matches!(err, ImportError::NoValidRows));
    }

    #[test]
    fn test_require_valid_passes_through_valid_rows() {
        let valid = require_valid(vec![row("a@b.fr"), row("")]).unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].email(), "a@b.fr");
    }
}
