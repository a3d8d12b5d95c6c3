//! Mandatory-attribute and standards checks for one field.

use crate::model::Field;
use crate::report::{DiagnosticKind, ValidationReport};

use super::standards::StandardValidator;

/// Validates fields for completeness and standards conformance.
///
/// External-standard validators are injected at construction; a field is
/// only handed to a validator when it declares synonyms under that
/// standard. All checks run regardless of earlier failures so a single
/// pass reports every missing attribute.
pub struct FieldValidator {
    standards: Vec<Box<dyn StandardValidator>>,
}

impl FieldValidator {
    /// Create a validator with no external standards attached.
    pub fn new() -> Self {
        Self {
            standards: Vec::new(),
        }
    }

    /// Attach an external-standard validator.
    pub fn with_standard(mut self, validator: impl StandardValidator + 'static) -> Self {
        self.standards.push(Box::new(validator));
        self
    }

    /// Check the field, reporting each failure separately. Returns `false`
    /// when any check fails.
    pub fn validate(&self, field: &Field, report: &mut ValidationReport) -> bool {
        let mut valid = true;
        let file = field.file_name.clone();

        if field.unique_id.is_none() {
            report.error(
                DiagnosticKind::Completeness,
                file.clone(),
                format!("A unique id is missing from a field in {file}"),
            );
            valid = false;
        }
        // A field must have a standard name or a long name; it can have both.
        if field.standard_name.is_none() && field.long_name.is_none() {
            report.error(
                DiagnosticKind::Completeness,
                field.label().to_string(),
                format!(
                    "{} in {file} has neither a standard name or long name",
                    field.label()
                ),
            );
            valid = false;
        }
        if field.units.is_none() {
            report.error(
                DiagnosticKind::Completeness,
                field.label().to_string(),
                format!("A unit of measure is missing from a field in {file}"),
            );
            valid = false;
        }
        if field.function_space.is_none() {
            report.error(
                DiagnosticKind::Completeness,
                field.label().to_string(),
                format!("A function space is missing from a field in {file}"),
            );
            valid = false;
        }
        if field.trigger.is_none() {
            report.error(
                DiagnosticKind::Completeness,
                field.label().to_string(),
                format!("Triggering syntax is missing from a field in {file}"),
            );
            valid = false;
        }
        if field.description.is_none() {
            report.error(
                DiagnosticKind::Completeness,
                field.label().to_string(),
                format!("A description is missing from a field in {file}"),
            );
            valid = false;
        }
        if field.data_type.is_none() {
            report.error(
                DiagnosticKind::Completeness,
                field.label().to_string(),
                format!("A data type is missing from a field in {file}"),
            );
            valid = false;
        }
        if field.time_step.is_none() {
            report.error(
                DiagnosticKind::Completeness,
                field.label().to_string(),
                format!("A time step is missing from a field in {file}"),
            );
            valid = false;
        }
        if field.recommended_interpolation.is_none() {
            report.error(
                DiagnosticKind::Completeness,
                field.label().to_string(),
                format!(
                    "A recommended_interpolation attribute is missing from a field in {file}"
                ),
            );
            valid = false;
        }

        for validator in &self.standards {
            if field.synonyms.contains_key(&validator.standard())
                && !validator.validate_field(field, report)
            {
                valid = false;
            }
        }

        valid
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StandardKind;
    use crate::validate::standards::{CmipRecord, CmipValidator};

    fn complete_field() -> Field {
        let mut field = Field::new("physics__cloud__meta.json");
        field.set_unique_id("physics__cloud_fraction");
        field.standard_name = Some("cloud_area_fraction".into());
        field.units = Some("%".into());
        field.function_space = Some("W3".into());
        field.trigger = Some(": on".into());
        field.description = Some("Cloud fraction in each layer".into());
        field.data_type = Some("REAL".into());
        field.time_step = Some("TIMESTEP".into());
        field.recommended_interpolation = Some("LINEAR".into());
        field
    }

    #[test]
    fn test_complete_field_is_valid() {
        let mut report = ValidationReport::new();
        assert!(FieldValidator::new().validate(&complete_field(), &mut report));
        assert!(report.is_clean());
    }

    #[test]
    fn test_empty_field_reports_every_miss() {
        let mut report = ValidationReport::new();
        let field = Field::new("A File Path");
        assert!(!FieldValidator::new().validate(&field, &mut report));

        // unique_id, name, units, function_space, trigger, description,
        // data_type, time_step, recommended_interpolation
        assert_eq!(report.error_count(), 9);
    }

    #[test]
    fn test_three_missing_attributes_give_three_errors() {
        let mut report = ValidationReport::new();
        let mut field = complete_field();
        field.units = None;
        field.trigger = None;
        field.description = None;

        assert!(!FieldValidator::new().validate(&field, &mut report));
        assert_eq!(report.error_count(), 3);

        let messages: Vec<&str> = report
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert!(messages.iter().any(|m| m.contains("unit of measure")));
        assert!(messages.iter().any(|m| m.contains("Triggering syntax")));
        assert!(messages.iter().any(|m| m.contains("description")));
    }

    #[test]
    fn test_long_name_satisfies_name_requirement() {
        let mut report = ValidationReport::new();
        let mut field = complete_field();
        field.standard_name = None;
        field.long_name = Some("Cloud fraction".into());
        assert!(FieldValidator::new().validate(&field, &mut report));
    }

    #[test]
    fn test_standards_delegation_only_when_declared() {
        let validator = FieldValidator::new().with_standard(CmipValidator::new(vec![
            CmipRecord {
                label: "cl".into(),
                cf_id: "cloud_area_fraction".into(),
                title: "Cloud Fraction".into(),
                units: "1".into(),
                description: "".into(),
                unid: "cmip6-001".into(),
            },
        ]));

        // No CMIP6 synonyms declared: the standards validator never runs.
        let mut report = ValidationReport::new();
        assert!(validator.validate(&complete_field(), &mut report));

        // Declared with mismatching units: soft failure.
        let mut field = complete_field();
        field.add_synonym(StandardKind::Cmip6, "cl");
        let mut report = ValidationReport::new();
        assert!(!validator.validate(&field, &mut report));
        assert_eq!(report.warning_count(), 1);
    }
}
