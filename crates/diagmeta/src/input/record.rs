//! Record and value-shape definitions for front-end output.

use serde::Deserialize;

/// The shape of one attribute value in a record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AttrValue {
    /// A scalar literal, stored verbatim.
    Scalar(String),
    /// A multi-part concatenation expression (long descriptions split
    /// across source lines).
    Concat(ConcatExpr),
    /// The literal source text of a dimension-constructor call, e.g.
    /// `model_height_dimension(top=X, bottom=Y)`.
    DimensionCall(String),
    /// An ordered list of plain literals (axis or label definitions).
    List(Vec<String>),
    /// An ordered list of `(key, value)` pairs (synonyms, misc_meta_data).
    Pairs(Vec<(String, String)>),
    /// An ordered list of structured sub-records (non-spatial dimensions).
    Records(Vec<AttrRecord>),
}

/// A right-leaning chain of binary append nodes. Each `Append` combines a
/// previously accumulated expression with one new literal segment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConcatExpr {
    /// The leaf segment of the chain.
    Literal { segment: String },
    /// One appended segment; `prefix` holds everything accumulated so far.
    Append {
        prefix: Box<ConcatExpr>,
        segment: String,
    },
}

impl ConcatExpr {
    /// Reassemble the chain into one string.
    ///
    /// Recurses to the leaf, then concatenates segments in left-to-right
    /// source order; embedded newlines collapse to single spaces. The
    /// ordering is load-bearing: reversing it silently corrupts long
    /// descriptions.
    pub fn reassemble(&self) -> String {
        self.collect().replace('\n', " ")
    }

    fn collect(&self) -> String {
        match self {
            ConcatExpr::Literal { segment } => segment.clone(),
            ConcatExpr::Append { prefix, segment } => {
                let mut value = prefix.collect();
                value.push_str(segment);
                value
            }
        }
    }
}

/// One structured sub-record (used inside non-spatial dimension lists).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttrRecord {
    pub attributes: Vec<(String, AttrValue)>,
}

/// One field-instantiation record: a flat list of attribute-value pairs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldRecord {
    pub attributes: Vec<(String, AttrValue)>,
}

/// Everything the front end derives from one source file: the four names
/// checked by the naming validator plus the field records it contains.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceFile {
    /// Basename of the source file, `<section>__<group>__meta.<ext>`.
    pub file_name: String,
    /// Module name declared within the file.
    pub module_name: String,
    /// Metadata type name declared within the file.
    pub type_name: String,
    /// Group name string declared within the file, when present.
    #[serde(default)]
    pub group_name: Option<String>,
    /// Field records in source order.
    #[serde(default)]
    pub records: Vec<FieldRecord>,
}
