//! # diagmeta
//!
//! Extraction, validation, and serialization of diagnostic output metadata.
//!
//! The pipeline takes pre-parsed attribute-value records grouped by source
//! file, assembles them into a section/group/field document with shared
//! non-spatial dimension definitions, validates naming, completeness, and
//! external-standard conformance, and serializes two artifacts: a
//! checksummed JSON snapshot and a declarative config-schema text file.
//!
//! ## Example
//!
//! ```no_run
//! use diagmeta::{DocumentAssembler, FieldValidator};
//!
//! let mut assembler = DocumentAssembler::new(
//!     vec!["SURFACE_LEVEL".to_string(), "TOP_LEVEL".to_string()],
//!     FieldValidator::new(),
//! );
//! assembler.process_files(Vec::new());
//! let result = assembler.finish();
//! if result.valid {
//!     let snapshot = diagmeta::snapshot::snapshot_string(&result.document)?;
//!     let schema = diagmeta::schema_conf::create_config_schema(&result.document);
//!     println!("{snapshot}{schema}");
//! }
//! # Ok::<(), diagmeta::MetaError>(())
//! ```

pub mod assemble;
pub mod dimension;
pub mod error;
pub mod extract;
pub mod input;
pub mod model;
pub mod report;
pub mod schema_conf;
pub mod snapshot;
pub mod validate;

pub use assemble::{AssemblyResult, DocumentAssembler};
pub use error::{MetaError, Result};
pub use input::{AttrRecord, AttrValue, ConcatExpr, FieldRecord, SourceFile};
pub use model::{
    Field, Group, MetadataDocument, NonSpatialDimension, Section, StandardKind,
    VerticalDimension,
};
pub use report::{Diagnostic, DiagnosticKind, Severity, ValidationReport};
pub use validate::FieldValidator;
