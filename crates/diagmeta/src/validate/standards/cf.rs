//! CF reference-data validation.

use std::collections::HashMap;

use serde::Deserialize;

use super::StandardValidator;
use crate::error::Result;
use crate::model::{Field, StandardKind};
use crate::report::{DiagnosticKind, ValidationReport};

/// One entry of the CF standard-name table.
#[derive(Debug, Clone, Deserialize)]
pub struct CfRecord {
    /// The CF standard name.
    pub standard_name: String,
    /// Canonical units for the quantity.
    pub canonical_units: String,
}

/// Validates CF synonym codes: the standard name must exist in the
/// reference table and the field's units must agree with the canonical
/// units.
pub struct CfValidator {
    records: HashMap<String, CfRecord>,
}

impl CfValidator {
    /// Build the validator from pre-parsed reference records.
    pub fn new(records: Vec<CfRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.standard_name.clone(), record))
                .collect(),
        }
    }

    /// Build the validator from the reference table's JSON form.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let records: Vec<CfRecord> = serde_json::from_str(data)?;
        Ok(Self::new(records))
    }
}

impl StandardValidator for CfValidator {
    fn standard(&self) -> StandardKind {
        StandardKind::Cf
    }

    fn validate_field(&self, field: &Field, report: &mut ValidationReport) -> bool {
        let mut valid = true;
        let codes = field
            .synonyms
            .get(&StandardKind::Cf)
            .cloned()
            .unwrap_or_default();

        for code in &codes {
            let Some(reference) = self.records.get(code) else {
                report.error(
                    DiagnosticKind::Standards,
                    field.label().to_string(),
                    format!(
                        "Field {} CF standard name '{code}' is not recognised",
                        field.label()
                    ),
                );
                valid = false;
                continue;
            };

            if field.units.as_deref() != Some(reference.canonical_units.as_str()) {
                report.warning(
                    DiagnosticKind::Standards,
                    field.label().to_string(),
                    format!(
                        "Unit does not match CF canonical units for '{code}' on field {}",
                        field.label()
                    ),
                );
                valid = false;
            }
        }

        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CfValidator {
        CfValidator::new(vec![CfRecord {
            standard_name: "air_temperature".into(),
            canonical_units: "K".into(),
        }])
    }

    #[test]
    fn test_conforming_field() {
        let mut report = ValidationReport::new();
        let mut field = Field::new("physics__boundary__meta.json");
        field.units = Some("K".into());
        field.add_synonym(StandardKind::Cf, "air_temperature");
        assert!(reference().validate_field(&field, &mut report));
        assert!(report.is_clean());
    }

    #[test]
    fn test_unknown_standard_name() {
        let mut report = ValidationReport::new();
        let mut field = Field::new("physics__boundary__meta.json");
        field.add_synonym(StandardKind::Cf, "not_a_name");
        assert!(!reference().validate_field(&field, &mut report));
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_unit_disagreement() {
        let mut report = ValidationReport::new();
        let mut field = Field::new("physics__boundary__meta.json");
        field.units = Some("degC".into());
        field.add_synonym(StandardKind::Cf, "air_temperature");
        assert!(!reference().validate_field(&field, &mut report));
        assert_eq!(report.warning_count(), 1);
    }
}
