//! Shared value types used across the entity model.

use serde::Serialize;

/// External metadata standards a field can declare synonyms under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardKind {
    Cf,
    Cmip6,
}

impl StandardKind {
    /// Parse a standard identifier as it appears in source records.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "CF" => Some(StandardKind::Cf),
            "CMIP6" => Some(StandardKind::Cmip6),
            _ => None,
        }
    }

    /// Human-readable label, as shown in the config-schema output.
    pub fn label(&self) -> &'static str {
        match self {
            StandardKind::Cf => "CF",
            StandardKind::Cmip6 => "CMIP6",
        }
    }
}

/// Whether a non-spatial dimension is a numeric axis or a label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
    AxisDefinition,
    LabelDefinition,
}

/// The ordered value list of a non-spatial dimension: numeric boundaries
/// for an axis, strings for a label set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DimensionValues {
    Numeric(Vec<f64>),
    Labels(Vec<String>),
}

/// Fully qualified reference to one field: section, group, field id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRef {
    pub section: String,
    pub group: String,
    pub field_id: String,
}

/// Derive a display title from an underscore-delimited name:
/// `boundary_layer` becomes `Boundary Layer`.
pub fn derive_title(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
