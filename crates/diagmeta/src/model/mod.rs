//! The validated domain model: sections, groups, fields, and shared
//! dimension definitions.

mod dimension;
mod document;
mod field;
mod section;
mod types;

pub use dimension::{NonSpatialDimension, VerticalDimension};
pub use document::MetadataDocument;
pub use field::Field;
pub use section::{Group, Section};
pub use types::{derive_title, DimensionKind, DimensionValues, FieldRef, StandardKind};
