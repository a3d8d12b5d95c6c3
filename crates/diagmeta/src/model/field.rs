//! Field: one diagnostic quantity's full metadata record.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::error;

use super::dimension::{NonSpatialDimension, VerticalDimension};
use super::types::{derive_title, StandardKind};

/// The fixed `<section>__<item>` pattern every unique id must match.
static UNIQUE_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+?__[A-Za-z0-9_]+$").expect("valid regex"));

/// Metadata for one model output field.
///
/// All attributes start unset; the value extractor fills them in from an
/// attribute-value record. Validity is tracked by the caller, not the
/// entity: a half-populated field still participates in error aggregation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Field {
    /// Basename of the source file this field was declared in.
    pub file_name: String,
    /// Two-part identity, `<section>__<item>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    /// Item part of the unique id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    /// Display title derived from the item name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_space: Option<String>,
    /// Free-text wiring expression consumed by the configuration editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_interpolation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_dimension: Option<VerticalDimension>,
    /// Ordered `name -> definition` mapping of non-spatial dimensions this
    /// field references.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub non_spatial_dimension: IndexMap<String, NonSpatialDimension>,
    /// External-standard codes, `standard -> list of codes`.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub synonyms: IndexMap<StandardKind, Vec<String>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub misc_meta_data: IndexMap<String, String>,
}

impl Field {
    /// Create an empty field carrying only its provenance file name.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    /// Set the unique id, enforcing the `<section>__<item>` pattern.
    ///
    /// A non-conforming id is logged and left unset; the caller marks the
    /// field invalid rather than rejecting it outright, so later checks
    /// still run and aggregate.
    pub fn set_unique_id(&mut self, unique_id: &str) -> bool {
        if !UNIQUE_ID_REGEX.is_match(unique_id) {
            error!(
                "Unique ID {unique_id} does not conform to the standard in {}",
                self.file_name
            );
            return false;
        }
        if let Some((_, item)) = unique_id.split_once("__") {
            self.item_name = Some(item.to_string());
            self.item_title = Some(derive_title(item));
        }
        self.unique_id = Some(unique_id.to_string());
        true
    }

    /// Append one external-standard code to the synonyms mapping.
    pub fn add_synonym(&mut self, standard: StandardKind, code: impl Into<String>) {
        self.synonyms.entry(standard).or_default().push(code.into());
    }

    /// The field id when known, otherwise the provenance file name. Used to
    /// scope diagnostics.
    pub fn label(&self) -> &str {
        self.unique_id.as_deref().unwrap_or(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_unique_id_rejected() {
        let mut field = Field::new("a_file");
        assert!(!field.set_unique_id("Bad Unique name"));
        assert!(field.unique_id.is_none());
        assert!(field.item_title.is_none());
    }

    #[test]
    fn test_good_unique_id_derives_titles() {
        let mut field = Field::new("a_file");
        assert!(field.set_unique_id("good__unique_name"));
        assert_eq!(field.unique_id.as_deref(), Some("good__unique_name"));
        assert_eq!(field.item_name.as_deref(), Some("unique_name"));
        assert_eq!(field.item_title.as_deref(), Some("Unique Name"));
    }

    #[test]
    fn test_missing_separator_rejected() {
        let mut field = Field::new("a_file");
        assert!(!field.set_unique_id("no_separator"));
    }

    #[test]
    fn test_label_falls_back_to_file_name() {
        let mut field = Field::new("physics__cloud__meta.json");
        assert_eq!(field.label(), "physics__cloud__meta.json");
        field.set_unique_id("physics__cloud_fraction");
        assert_eq!(field.label(), "physics__cloud_fraction");
    }

    #[test]
    fn test_add_synonym_appends() {
        let mut field = Field::new("a_file");
        field.add_synonym(StandardKind::Cf, "air_temperature");
        field.add_synonym(StandardKind::Cf, "surface_temperature");
        assert_eq!(field.synonyms[&StandardKind::Cf].len(), 2);
    }
}
