//! Turns one front-end record into a candidate field.

use crate::dimension::{parse_non_spatial_dimensions, translate_vertical_dimension};
use crate::error::Result;
use crate::input::{AttrValue, FieldRecord};
use crate::model::{Field, StandardKind};
use crate::report::{DiagnosticKind, ValidationReport};

/// Sub-attributes consumed by a dimension constructor; never top-level
/// field attributes.
const IGNORED_SUB_ATTRIBUTES: &[&str] = &[
    "top",
    "bottom",
    "label_definition",
    "axis_definition",
    "dimension_name",
    "dimension_category",
    "non_spatial_units",
    "help_text",
];

const SCALAR_ATTRIBUTES: &[&str] = &[
    "unique_id",
    "standard_name",
    "long_name",
    "units",
    "function_space",
    "trigger",
    "description",
    "data_type",
    "time_step",
    "recommended_interpolation",
];

const STRUCTURED_ATTRIBUTES: &[&str] = &[
    "vertical_dimension",
    "non_spatial_dimension",
    "synonyms",
    "misc_meta_data",
];

fn is_known_attribute(key: &str) -> bool {
    SCALAR_ATTRIBUTES.contains(&key) || STRUCTURED_ATTRIBUTES.contains(&key)
}

/// Build a candidate field from one record.
///
/// Errors never abort the record: an unexpected attribute, a malformed
/// value, or a hard dimension failure marks the field invalid, is reported,
/// and processing continues with the next attribute so that one run
/// surfaces every problem.
pub fn extract_field(
    record: &FieldRecord,
    file_name: &str,
    report: &mut ValidationReport,
) -> (Field, bool) {
    let mut field = Field::new(file_name);
    let mut valid = true;

    for (key, value) in &record.attributes {
        if IGNORED_SUB_ATTRIBUTES.contains(&key.as_str()) {
            continue;
        }

        if !is_known_attribute(key) {
            report.error(
                DiagnosticKind::Attribute,
                field.label().to_string(),
                format!("Unexpected Field Property: {key}"),
            );
            valid = false;
            continue;
        }

        match apply_attribute(&mut field, key, value, report) {
            Ok(true) => {}
            Ok(false) => valid = false,
            Err(error) => {
                let scope = field.label().to_string();
                report.warning(
                    DiagnosticKind::Attribute,
                    scope,
                    format!("Attribute '{key}' in file '{file_name}' is invalid: {error}"),
                );
                valid = false;
            }
        }
    }

    (field, valid)
}

/// Apply one attribute to the field. `Ok(false)` is a reported soft
/// failure; `Err` is a hard failure the caller contains to this attribute.
fn apply_attribute(
    field: &mut Field,
    key: &str,
    value: &AttrValue,
    report: &mut ValidationReport,
) -> Result<bool> {
    match value {
        AttrValue::Scalar(text) => Ok(apply_scalar(field, key, text.clone(), report)),
        AttrValue::Concat(expr) => Ok(apply_scalar(field, key, expr.reassemble(), report)),
        AttrValue::DimensionCall(text) => {
            if key != "vertical_dimension" {
                report.error(
                    DiagnosticKind::Attribute,
                    field.label().to_string(),
                    format!("Attribute: {key} is not a valid attribute"),
                );
                return Ok(false);
            }
            field.vertical_dimension = Some(translate_vertical_dimension(text)?);
            Ok(true)
        }
        AttrValue::Records(entries) => {
            if key != "non_spatial_dimension" {
                report.error(
                    DiagnosticKind::Attribute,
                    field.label().to_string(),
                    format!("Attribute: {key} is not a valid attribute"),
                );
                return Ok(false);
            }
            let label = field.label().to_string();
            for definition in parse_non_spatial_dimensions(entries, &label)? {
                field
                    .non_spatial_dimension
                    .insert(definition.name.clone(), definition);
            }
            Ok(true)
        }
        AttrValue::Pairs(entries) => match key {
            "synonyms" => {
                let mut all_known = true;
                for (standard, code) in entries {
                    match StandardKind::parse(standard) {
                        Some(kind) => field.add_synonym(kind, code.clone()),
                        None => {
                            report.error(
                                DiagnosticKind::Attribute,
                                field.label().to_string(),
                                format!("Unknown synonym standard: {standard}"),
                            );
                            all_known = false;
                        }
                    }
                }
                Ok(all_known)
            }
            "misc_meta_data" => {
                for (inner_key, inner_value) in entries {
                    field
                        .misc_meta_data
                        .insert(inner_key.clone(), inner_value.clone());
                }
                Ok(true)
            }
            _ => {
                report.error(
                    DiagnosticKind::Attribute,
                    field.label().to_string(),
                    format!("Attribute: {key} is not a valid attribute"),
                );
                Ok(false)
            }
        },
        // Any other list shape has no top-level meaning.
        AttrValue::List(_) => {
            report.error(
                DiagnosticKind::Attribute,
                field.label().to_string(),
                format!("Attribute: {key} is not a valid attribute"),
            );
            Ok(false)
        }
    }
}

fn apply_scalar(
    field: &mut Field,
    key: &str,
    value: String,
    report: &mut ValidationReport,
) -> bool {
    match key {
        "unique_id" => {
            if !field.set_unique_id(&value) {
                report.error(
                    DiagnosticKind::Attribute,
                    field.file_name.clone(),
                    format!("Unique ID {value} does not conform to the naming standard"),
                );
                return false;
            }
            true
        }
        "standard_name" => {
            field.standard_name = Some(value);
            true
        }
        "long_name" => {
            field.long_name = Some(value);
            true
        }
        "units" => {
            field.units = Some(value);
            true
        }
        "function_space" => {
            field.function_space = Some(value);
            true
        }
        "trigger" => {
            field.trigger = Some(value);
            true
        }
        "description" => {
            field.description = Some(value);
            true
        }
        "data_type" => {
            field.data_type = Some(value);
            true
        }
        "time_step" => {
            field.time_step = Some(value);
            true
        }
        "recommended_interpolation" => {
            field.recommended_interpolation = Some(value);
            true
        }
        _ => {
            // A structured attribute given a scalar value.
            report.error(
                DiagnosticKind::Attribute,
                field.label().to_string(),
                format!("Attribute: {key} is not a valid attribute"),
            );
            false
        }
    }
}
