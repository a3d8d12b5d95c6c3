//! Vertical-dimension constructor translation.
//!
//! Turns the literal source text of a dimension-constructor call, e.g.
//! `model_height_dimension(top=TOP_LEVEL, bottom=SURFACE_LEVEL)` or
//! `fixed_depth_dimension(0.0, 2.5, 10.0)`, into a structured
//! [`VerticalDimension`].

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{MetaError, Result};
use crate::model::VerticalDimension;

static DIMENSION_TYPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<type>[A-Za-z_]+)\s*\([^)]*\)").expect("valid regex"));
static TOP_ARG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"top[\s=]*(?P<top_arg>[A-Za-z_]+)").expect("valid regex"));
static BOTTOM_ARG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"bottom[\s=]*(?P<bottom_arg>[A-Za-z_]+)").expect("valid regex"));
static LEVEL_DEF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\d.]+").expect("valid regex"));

/// Translate a dimension-constructor call into its structured form.
///
/// A constructor whose type name contains "model" must declare both `top`
/// and `bottom` level markers. Bare numeric tokens become the fixed level
/// boundaries. The type name must contain "height" or "depth" to fix the
/// positive direction.
pub fn translate_vertical_dimension(declaration: &str) -> Result<VerticalDimension> {
    debug!("Parsing vertical dimension declaration: {declaration}");

    let type_captures = DIMENSION_TYPE_REGEX
        .captures(declaration)
        .ok_or_else(|| MetaError::MalformedDimensionCall(declaration.to_string()))?;
    let dimension_type = &type_captures["type"];

    let mut top_arg = None;
    let mut bottom_arg = None;
    if dimension_type.contains("model") {
        top_arg = Some(
            TOP_ARG_REGEX
                .captures(declaration)
                .ok_or(MetaError::TopLevelNotDeclared)?["top_arg"]
                .to_string(),
        );
        bottom_arg = Some(
            BOTTOM_ARG_REGEX
                .captures(declaration)
                .ok_or(MetaError::BottomLevelNotDeclared)?["bottom_arg"]
                .to_string(),
        );
    }

    let mut level_definition = None;
    let boundaries: Vec<&str> = LEVEL_DEF_REGEX
        .find_iter(declaration)
        .map(|m| m.as_str())
        .collect();
    if !boundaries.is_empty() {
        let mut levels = Vec::with_capacity(boundaries.len());
        for boundary in boundaries {
            let level: f64 = boundary
                .parse()
                .map_err(|_| MetaError::InvalidLevelBoundary(boundary.to_string()))?;
            levels.push(level);
        }
        level_definition = Some(levels);
    }

    let (standard_name, positive) = if dimension_type.contains("height") {
        ("height", "POSITIVE_UP")
    } else if dimension_type.contains("depth") {
        ("depth", "POSITIVE_DOWN")
    } else {
        return Err(MetaError::PositiveDeclaredIncorrectly);
    };

    let parsed = VerticalDimension {
        standard_name: standard_name.to_string(),
        positive: positive.to_string(),
        units: "m".to_string(),
        top_arg,
        bottom_arg,
        level_definition,
    };
    debug!("Parsed definition: {parsed:?}");
    Ok(parsed)
}
