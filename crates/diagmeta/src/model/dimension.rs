//! Structured dimension definitions attached to fields.

use serde::Serialize;

use super::types::{DimensionKind, DimensionValues, FieldRef};

/// A field's vertical axis: either model-relative (named top/bottom level
/// markers) or fixed (explicit ascending boundaries). Units are always
/// metres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerticalDimension {
    /// `height` or `depth`.
    pub standard_name: String,
    /// `POSITIVE_UP` for height, `POSITIVE_DOWN` for depth.
    pub positive: String,
    /// Always `"m"`.
    pub units: String,
    /// Named level marker for the top of a model-relative dimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_arg: Option<String>,
    /// Named level marker for the bottom of a model-relative dimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_arg: Option<String>,
    /// Ascending level boundaries of a fixed dimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_definition: Option<Vec<f64>>,
}

/// A named axis or label dimension shared between fields. Two definitions
/// under the same name must agree structurally; `fields` records every
/// field that references the dimension and is excluded from that
/// comparison.
#[derive(Debug, Clone, Serialize)]
pub struct NonSpatialDimension {
    /// Unique dimension name (lower case).
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DimensionKind>,
    /// Literal value list, when the dimension is fully defined in source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<DimensionValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Every field that references this dimension, in registration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldRef>,
}

impl NonSpatialDimension {
    /// Create a definition with no consuming fields yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            values: None,
            help: None,
            unit: None,
            fields: Vec::new(),
        }
    }

    /// Structural identity: all attributes except the consuming-field list.
    pub fn same_definition(&self, other: &NonSpatialDimension) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.values == other.values
            && self.help == other.help
            && self.unit == other.unit
    }

    /// True when the dimension carries a literal axis or label definition
    /// and therefore needs no further configuration.
    pub fn has_definition(&self) -> bool {
        self.values.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_definition_ignores_fields() {
        let mut a = NonSpatialDimension::new("tile");
        a.kind = Some(DimensionKind::LabelDefinition);
        a.values = Some(DimensionValues::Labels(vec!["urban".into(), "lake".into()]));

        let mut b = a.clone();
        b.fields.push(FieldRef {
            section: "physics".into(),
            group: "surface".into(),
            field_id: "physics__tile_fraction".into(),
        });

        assert!(a.same_definition(&b));

        b.values = Some(DimensionValues::Labels(vec!["urban".into()]));
        assert!(!a.same_definition(&b));
    }
}
