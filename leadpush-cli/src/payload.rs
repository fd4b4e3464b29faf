//! Shape validated rows into the partner intake record
//!
//! The intake endpoint expects a fixed record: every field present on
//! every submission, absent source fields defaulting to the empty
//! string. Field names are the partner's, so serialization needs no
//! renames.

use serde::Serialize;

use crate::ingest::ValidatedRow;

/// Default consent marker sent when the sheet has no `privacy` value.
pub const PRIVACY_DEFAULT: &str = "Y";

/// The record posted to the relay, one per validated row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub tel_mobile: String,
    pub votre_sexe: String,
    pub cp: String,
    pub ville: String,
    pub personne_assur: String,
    pub nbre_enfant: String,
    pub regime_social: String,
    pub profession: String,
    pub dob: String,
    pub type_contrat: String,
    pub date_contrat: String,
    pub date_anni_contrat: String,
    pub civilite: String,
    pub privacy: String,
}

impl SubmissionPayload {
    /// Build a payload from a validated row. Total: every field gets
    /// either the row's value or its default.
    pub fn from_row(row: &ValidatedRow) -> Self {
        let field = |name: &str| row.get(name).unwrap_or_default().to_string();

        let privacy = match row.get("privacy").map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => PRIVACY_DEFAULT.to_string(),
        };

        Self {
            nom: field("nom"),
            prenom: field("prenom"),
            email: row.email().to_string(),
            tel_mobile: field("tel_mobile"),
            votre_sexe: field("votre_sexe"),
            cp: field("cp"),
            ville: field("ville"),
            personne_assur: field("personne_assur"),
            nbre_enfant: field("nbre_enfant"),
            regime_social: field("regime_social"),
            profession: field("profession"),
            dob: field("dob"),
            type_contrat: field("type_contrat"),
            date_contrat: field("date_contrat"),
            date_anni_contrat: field("date_anni_contrat"),
            civilite: field("civilite"),
            privacy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{NormalizedRow, filter_valid};

    fn validated(fields: &[(&str, &str)]) -> ValidatedRow {
        let mut row = NormalizedRow::new();
        row.insert("email", "jean@exemple.fr".to_string());
        for (name, value) in fields {
            row.insert(name, value.to_string());
        }
        filter_valid(vec![row]).remove(0)
    }

    #[test]
    fn test_source_values_pass_through() {
        let row = validated(&[
            ("nom", "Dupont"),
            ("prenom", "Jean"),
            ("ville", "Lyon"),
            ("cp", "69001"),
        ]);
        let payload = SubmissionPayload::from_row(&row);

        assert_eq!(payload.email, "jean@exemple.fr");
        assert_eq!(payload.nom, "Dupont");
        assert_eq!(payload.prenom, "Jean");
        assert_eq!(payload.ville, "Lyon");
        assert_eq!(payload.cp, "69001");
    }

    #[test]
    fn test_absent_fields_default_to_empty_string() {
        let payload = SubmissionPayload::from_row(&validated(&[]));

        assert_eq!(payload.nom, "");
        assert_eq!(payload.tel_mobile, "");
        assert_eq!(payload.date_anni_contrat, "");
        assert_eq!(payload.civilite, "");
    }

    #[test]
    fn test_privacy_defaults_to_affirmative() {
        let payload = SubmissionPayload::from_row(&validated(&[]));
        assert_eq!(payload.privacy, PRIVACY_DEFAULT);

        let payload = SubmissionPayload::from_row(&validated(&[("privacy", "")]));
        assert_eq!(payload.privacy, PRIVACY_DEFAULT);

        let payload = SubmissionPayload::from_row(&validated(&[("privacy", "N")]));
        assert_eq!(payload.privacy, "N");
    }

    #[test]
    fn test_email_is_the_trimmed_identifier() {
        let mut row = NormalizedRow::new();
        row.insert("email", "  jean@exemple.fr ".to_string());
        let row = filter_valid(vec![row]).remove(0);

        let payload = SubmissionPayload::from_row(&row);
        assert_eq!(payload.email, "jean@exemple.fr");
    }

    #[test]
    fn test_serialized_payload_has_exactly_the_fixed_field_set() {
        let payload = SubmissionPayload::from_row(&validated(&[("nom", "Dupont")]));
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        let expected = [
            "nom",
            "prenom",
            "email",
            "tel_mobile",
            "votre_sexe",
            "cp",
            "ville",
            "personne_assur",
            "nbre_enfant",
            "regime_social",
            "profession",
            "dob",
            "type_contrat",
            "date_contrat",
            "date_anni_contrat",
            "civilite",
            "privacy",
        ];
        assert_eq!(object.len(), expected.len());
        for name in expected {
            assert!(object.contains_key(name), "missing field {}", name);
        }
    }

    #[test]
    fn test_unknown_source_fields_are_ignored() {
        let payload = SubmissionPayload::from_row(&validated(&[("commentaire", "vu en salon")]));
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("commentaire").is_none());
    }
}
