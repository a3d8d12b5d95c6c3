//! Document-wide non-spatial dimension registry.

use indexmap::IndexMap;
use tracing::error;

use crate::error::{MetaError, Result};
use crate::model::{FieldRef, NonSpatialDimension};

/// Tracks every non-spatial dimension definition seen across the run and
/// enforces cross-record consistency.
///
/// Owned exclusively by the document assembler; the first-seen definition
/// for a name wins, so registration order must stay deterministic.
#[derive(Debug, Default)]
pub struct DimensionRegistry {
    dimensions: IndexMap<String, NonSpatialDimension>,
}

impl DimensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition on behalf of one field.
    ///
    /// An unseen name is inserted with this field as its first consumer. A
    /// structurally identical re-registration appends the field reference
    /// (idempotently). A structurally different definition under a known
    /// name is a hard failure: downstream serialization cannot express two
    /// definitions under one key, and the error names every field already
    /// attached to the stored definition.
    pub fn register(
        &mut self,
        definition: &NonSpatialDimension,
        reference: FieldRef,
    ) -> Result<()> {
        match self.dimensions.get_mut(&definition.name) {
            None => {
                let mut stored = definition.clone();
                stored.fields = vec![reference];
                self.dimensions.insert(stored.name.clone(), stored);
                Ok(())
            }
            Some(stored) if stored.same_definition(definition) => {
                if !stored.fields.contains(&reference) {
                    stored.fields.push(reference);
                }
                Ok(())
            }
            Some(stored) => {
                for prior in &stored.fields {
                    error!(
                        "Non-spatial dimension '{}' for field '{}' does not match '{}' for field '{}'",
                        definition.name, reference.field_id, stored.name, prior.field_id
                    );
                }
                let existing: Vec<&str> =
                    stored.fields.iter().map(|f| f.field_id.as_str()).collect();
                Err(MetaError::DimensionConflict {
                    name: definition.name.clone(),
                    field: reference.field_id,
                    existing: existing.join(", "),
                })
            }
        }
    }

    /// Look up a stored definition.
    pub fn get(&self, name: &str) -> Option<&NonSpatialDimension> {
        self.dimensions.get(name)
    }

    /// Consume the registry, yielding the final `name -> definition` map.
    pub fn into_dimensions(self) -> IndexMap<String, NonSpatialDimension> {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DimensionKind, DimensionValues};

    fn definition(name: &str, labels: &[&str]) -> NonSpatialDimension {
        let mut dim = NonSpatialDimension::new(name);
        dim.kind = Some(DimensionKind::LabelDefinition);
        dim.values = Some(DimensionValues::Labels(
            labels.iter().map(|s| s.to_string()).collect(),
        ));
        dim
    }

    fn reference(field_id: &str) -> FieldRef {
        FieldRef {
            section: "physics".into(),
            group: "surface".into(),
            field_id: field_id.into(),
        }
    }

    #[test]
    fn test_identical_definitions_share_one_entry() {
        let mut registry = DimensionRegistry::new();
        let foo = definition("foo", &["a", "b"]);

        registry.register(&foo, reference("physics__field_a")).unwrap();
        registry.register(&foo, reference("physics__field_b")).unwrap();

        let stored = registry.get("foo").unwrap();
        assert_eq!(stored.fields.len(), 2);
        assert_eq!(stored.fields[0].field_id, "physics__field_a");
        assert_eq!(stored.fields[1].field_id, "physics__field_b");
    }

    #[test]
    fn test_re_registration_is_idempotent() {
        let mut registry = DimensionRegistry::new();
        let foo = definition("foo", &["a"]);

        registry.register(&foo, reference("physics__field_a")).unwrap();
        registry.register(&foo, reference("physics__field_a")).unwrap();

        assert_eq!(registry.get("foo").unwrap().fields.len(), 1);
    }

    #[test]
    fn test_conflict_names_prior_fields() {
        let mut registry = DimensionRegistry::new();
        let foo = definition("foo", &["a", "b"]);
        registry.register(&foo, reference("physics__field_a")).unwrap();
        registry.register(&foo, reference("physics__field_b")).unwrap();

        let other = definition("foo", &["a"]);
        let err = registry
            .register(&other, reference("physics__field_c"))
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("physics__field_a"));
        assert!(message.contains("physics__field_b"));
        assert!(message.contains("physics__field_c"));
        assert!(message.contains("'foo'"));

        // First-seen definition survives untouched.
        assert_eq!(registry.get("foo").unwrap().fields.len(), 2);
    }
}
