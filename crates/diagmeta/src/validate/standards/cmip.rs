//! CMIP6 reference-data validation.

use std::collections::HashMap;

use serde::Deserialize;

use super::StandardValidator;
use crate::error::Result;
use crate::model::{Field, StandardKind};
use crate::report::{DiagnosticKind, ValidationReport};

/// One entry of the CMIP6 reference dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct CmipRecord {
    /// CMIP6 variable label, the code fields declare as a synonym.
    pub label: String,
    /// The CF standard name this variable corresponds to.
    pub cf_id: String,
    pub title: String,
    pub units: String,
    pub description: String,
    /// Unique identifier within the reference dataset.
    pub unid: String,
}

/// Validates CMIP6 synonym codes: the code must exist in the reference
/// data, units must agree, and any CF synonym on the same field must match
/// the CF id the reference data maps the CMIP6 code to.
pub struct CmipValidator {
    records: HashMap<String, CmipRecord>,
}

impl CmipValidator {
    /// Build the validator from pre-parsed reference records.
    pub fn new(records: Vec<CmipRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.label.clone(), record))
                .collect(),
        }
    }

    /// Build the validator from the reference dataset's JSON form.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let records: Vec<CmipRecord> = serde_json::from_str(data)?;
        Ok(Self::new(records))
    }
}

impl StandardValidator for CmipValidator {
    fn standard(&self) -> StandardKind {
        StandardKind::Cmip6
    }

    fn validate_field(&self, field: &Field, report: &mut ValidationReport) -> bool {
        let mut valid = true;
        let codes = field
            .synonyms
            .get(&StandardKind::Cmip6)
            .cloned()
            .unwrap_or_default();

        if codes.is_empty() {
            report.error(
                DiagnosticKind::Standards,
                field.label().to_string(),
                format!("Field {} has no CMIP6 record", field.label()),
            );
            valid = false;
        }

        for code in &codes {
            let Some(reference) = self.records.get(code) else {
                report.error(
                    DiagnosticKind::Standards,
                    field.label().to_string(),
                    format!("Field {} CMIP6 code '{code}' is not recognised", field.label()),
                );
                valid = false;
                continue;
            };

            if field.units.as_deref() != Some(reference.units.as_str()) {
                report.warning(
                    DiagnosticKind::Standards,
                    field.label().to_string(),
                    format!(
                        "Unit does not match CMIP6 {code} unit for field {}",
                        field.label()
                    ),
                );
                valid = false;
            }

            if let Some(cf_codes) = field.synonyms.get(&StandardKind::Cf) {
                if !cf_codes.contains(&reference.cf_id) {
                    report.error(
                        DiagnosticKind::Standards,
                        field.label().to_string(),
                        format!(
                            "Field {} has a different CF code to the CMIP6 standard for {code}",
                            field.label()
                        ),
                    );
                    valid = false;
                }
            }
        }

        valid
    }
}
