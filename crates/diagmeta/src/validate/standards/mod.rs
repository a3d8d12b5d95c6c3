//! Pluggable external-standard validators.
//!
//! Each validator is constructed once from a static reference dataset and
//! injected into the [`crate::validate::FieldValidator`] at pipeline start;
//! there is no hidden shared state. Findings are always soft: mismatches
//! are reported, never thrown.

mod cf;
mod cmip;

pub use cf::{CfRecord, CfValidator};
pub use cmip::{CmipRecord, CmipValidator};

use crate::model::{Field, StandardKind};
use crate::report::ValidationReport;

/// Checks one field's synonyms against an external standard's reference
/// data.
pub trait StandardValidator {
    /// The standard this validator covers.
    fn standard(&self) -> StandardKind;

    /// Validate a field, reporting any disagreement. Returns `false` when
    /// the field does not conform.
    fn validate_field(&self, field: &Field, report: &mut ValidationReport) -> bool;
}
