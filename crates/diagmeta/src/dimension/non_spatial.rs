//! Non-spatial dimension sub-record parsing.

use tracing::debug;

use crate::error::{MetaError, Result};
use crate::input::{AttrRecord, AttrValue};
use crate::model::{DimensionKind, DimensionValues, NonSpatialDimension};

/// Parse a list of structured sub-records, each describing one non-spatial
/// dimension attached to a field. `field_label` names the field in hard
/// failures: an unrecognised attribute or a missing `dimension_name` aborts
/// the record.
pub fn parse_non_spatial_dimensions(
    entries: &[AttrRecord],
    field_label: &str,
) -> Result<Vec<NonSpatialDimension>> {
    debug!("Parsing non-spatial dimensions for {field_label}");

    let mut definitions = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut name = None;
        let mut kind = None;
        let mut values = None;
        let mut help = None;
        let mut unit = None;

        for (attribute, value) in &entry.attributes {
            match (attribute.as_str(), value) {
                ("dimension_name", AttrValue::Scalar(text)) => {
                    name = Some(text.to_lowercase());
                }
                ("dimension_category", AttrValue::Scalar(category)) => {
                    kind = Some(match category.as_str() {
                        "NUMERICAL" => DimensionKind::AxisDefinition,
                        "CATEGORICAL" => DimensionKind::LabelDefinition,
                        other => {
                            return Err(MetaError::UnknownDimensionCategory {
                                category: other.to_string(),
                                field: field_label.to_string(),
                            })
                        }
                    });
                }
                ("label_definition", AttrValue::List(items)) => {
                    values = Some(DimensionValues::Labels(items.clone()));
                }
                ("axis_definition", AttrValue::List(items)) => {
                    let mut axis = Vec::with_capacity(items.len());
                    for item in items {
                        let value: f64 =
                            item.parse().map_err(|_| MetaError::InvalidAxisValue {
                                value: item.clone(),
                                field: field_label.to_string(),
                            })?;
                        axis.push(value);
                    }
                    values = Some(DimensionValues::Numeric(axis));
                }
                ("help_text", AttrValue::Scalar(text)) => help = Some(text.clone()),
                ("non_spatial_units", AttrValue::Scalar(text)) => unit = Some(text.clone()),
                (other, _) => {
                    return Err(MetaError::UnknownDimensionAttribute {
                        attribute: other.to_string(),
                        field: field_label.to_string(),
                    })
                }
            }
        }

        let name = name.ok_or_else(|| MetaError::DimensionNameRequired {
            field: field_label.to_string(),
        })?;

        definitions.push(NonSpatialDimension {
            name,
            kind,
            values,
            help,
            unit,
            fields: Vec::new(),
        });
    }

    debug!("Parsed {} non-spatial dimension definitions", definitions.len());
    Ok(definitions)
}
