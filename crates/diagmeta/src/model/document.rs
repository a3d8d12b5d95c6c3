//! Root aggregate for one pipeline run.

use indexmap::IndexMap;
use serde::Serialize;

use super::dimension::NonSpatialDimension;
use super::section::Section;

/// The assembled metadata document.
///
/// Constructed empty, populated record by record by the document assembler,
/// then frozen once serialization begins. The `valid` flag never reaches
/// either output artifact.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataDocument {
    /// Sections keyed by name, in first-seen order.
    pub sections: IndexMap<String, Section>,
    /// Level-marker names read once from the enumerated-levels declaration;
    /// never mutated by field processing.
    pub standard_level_markers: Vec<String>,
    /// Shared non-spatial dimension definitions keyed by name.
    pub non_spatial_dimensions: IndexMap<String, NonSpatialDimension>,
    /// Document-wide validity; cleared by any aggregated failure.
    #[serde(skip)]
    pub valid: bool,
}

impl MetadataDocument {
    /// Create an empty, valid document carrying the level markers.
    pub fn new(standard_level_markers: Vec<String>) -> Self {
        Self {
            sections: IndexMap::new(),
            standard_level_markers,
            non_spatial_dimensions: IndexMap::new(),
            valid: true,
        }
    }

    /// Total number of fields across all sections and groups.
    pub fn field_count(&self) -> usize {
        self.sections
            .values()
            .flat_map(|s| s.groups.values())
            .map(|g| g.fields.len())
            .sum()
    }
}
