//! Value extraction: one attribute-value record into a typed [`Field`].

mod extractor;

pub use extractor::extract_field;
