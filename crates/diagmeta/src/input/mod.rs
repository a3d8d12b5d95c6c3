//! Pre-parsed attribute-value records.
//!
//! The front-end grammar that turns raw declarative source text into these
//! trees is an external collaborator; the core only ever sees the shapes
//! defined here. Each value carries an explicit shape tag so the extractor
//! can dispatch with one exhaustive match instead of inspecting node types
//! at runtime.

mod record;

pub use record::{AttrRecord, AttrValue, ConcatExpr, FieldRecord, SourceFile};
