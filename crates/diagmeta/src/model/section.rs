//! Group and Section containers.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use super::field::Field;
use super::types::derive_title;

/// Named collection of fields sharing one source file.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub name: String,
    pub title: String,
    /// Provenance: the source file this group was declared in.
    pub file_name: String,
    /// Fields keyed by unique id, in insertion order.
    pub fields: IndexMap<String, Field>,
}

impl Group {
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: derive_title(&name),
            name,
            file_name: file_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Insert a field keyed by its unique id. A unique id may appear at
    /// most once per group; on a duplicate the first occurrence wins and
    /// the insertion is rejected. A field with no id cannot be keyed and
    /// is likewise rejected (its absence has already been reported by the
    /// field validator). Duplicates are not logged here; the caller's
    /// report entry is the single record of the event.
    pub fn add_field(&mut self, field: Field) -> bool {
        let key = match &field.unique_id {
            Some(id) => id.clone(),
            None => {
                warn!(
                    "Cannot attach a field with no unique id to group {} ({})",
                    self.name, self.file_name
                );
                return false;
            }
        };
        if self.fields.contains_key(&key) {
            return false;
        }
        self.fields.insert(key, field);
        true
    }
}

/// Named collection of groups.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub name: String,
    pub title: String,
    pub groups: IndexMap<String, Group>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: derive_title(&name),
            name,
            groups: IndexMap::new(),
        }
    }

    /// Insert a group by name; first occurrence wins on a duplicate. The
    /// caller reports the duplicate, so nothing is logged here.
    pub fn add_group(&mut self, group: Group) -> bool {
        if self.groups.contains_key(&group.name) {
            return false;
        }
        self.groups.insert(group.name.clone(), group);
        true
    }
}
