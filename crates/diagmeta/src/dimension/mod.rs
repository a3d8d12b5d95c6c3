//! Dimension translation and the document-wide shared-definition registry.

mod non_spatial;
mod registry;
mod vertical;

pub use non_spatial::parse_non_spatial_dimensions;
pub use registry::DimensionRegistry;
pub use vertical::translate_vertical_dimension;
