//! Naming, completeness, and external-standard validation.

mod field;
mod naming;
pub mod standards;

pub use field::FieldValidator;
pub use naming::{split_section_group, validate_names};
