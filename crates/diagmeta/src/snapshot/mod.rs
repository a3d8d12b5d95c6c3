//! Checksummed JSON snapshot of the assembled document.
//!
//! The snapshot wraps the document under a `meta_data` key with a sibling
//! `checksum`. The digest is computed over a canonical rendering (keys
//! sorted recursively, compact separators) of the whole root object with
//! the `checksum` entry removed, so the stored pretty-printed layout can
//! change without invalidating the checksum.

use std::fs;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use serde_json::Value;
use tracing::info;

use crate::error::{MetaError, Result};
use crate::model::MetadataDocument;

/// File name of the snapshot artifact.
pub const SNAPSHOT_FILE_NAME: &str = "diagnostic_meta_data.json";

/// Render a JSON value canonically: object keys in sorted order, compact
/// separators, no trailing whitespace.
fn canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                canonical(&map[key.as_str()], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                canonical(item, out);
            }
            out.push(']');
        }
        other => out.push_str(&other.to_string()),
    }
}

/// Compute the checksum line for a snapshot payload: the root object with
/// its `checksum` entry removed, i.e. `{"meta_data": ...}`.
pub fn compute_checksum(payload: &Value) -> String {
    let mut rendered = String::new();
    canonical(payload, &mut rendered);
    let digest = Md5::digest(rendered.as_bytes());
    format!("md5: {digest:x}")
}

/// Build the full snapshot value: the document under `meta_data` with its
/// `checksum` sibling. The digest covers the wrapper, not the bare
/// document, so readers recompute over the root with `checksum` removed.
pub fn snapshot_value(document: &MetadataDocument) -> Result<Value> {
    let meta_data = serde_json::to_value(document)?;
    let mut root = serde_json::Map::new();
    root.insert("meta_data".to_string(), meta_data);
    let mut root = Value::Object(root);
    let checksum = compute_checksum(&root);
    root["checksum"] = Value::String(checksum);
    Ok(root)
}

/// Serialize the snapshot to its on-disk textual form.
pub fn snapshot_string(document: &MetadataDocument) -> Result<String> {
    let mut text = serde_json::to_string_pretty(&snapshot_value(document)?)?;
    text.push('\n');
    Ok(text)
}

/// Write the snapshot into `directory` and return the path written.
pub fn write_snapshot(document: &MetadataDocument, directory: &Path) -> Result<PathBuf> {
    let path = directory.join(SNAPSHOT_FILE_NAME);
    let text = snapshot_string(document)?;
    fs::write(&path, text).map_err(|source| MetaError::Io {
        path: path.clone(),
        source,
    })?;
    info!("Wrote snapshot to {}", path.display());
    Ok(path)
}

/// Verify a snapshot's stored checksum against a recomputation over the
/// root object with the `checksum` entry removed.
pub fn verify_snapshot(text: &str) -> Result<()> {
    let mut root: Value = serde_json::from_str(text)?;
    let Some(object) = root.as_object_mut() else {
        return Err(MetaError::MissingChecksum);
    };
    let stored = match object.remove("checksum") {
        Some(Value::String(stored)) => stored,
        _ => return Err(MetaError::MissingChecksum),
    };
    if !object.contains_key("meta_data") {
        return Err(MetaError::MissingChecksum);
    }
    let computed = compute_checksum(&root);
    if stored != computed {
        return Err(MetaError::ChecksumMismatch { stored, computed });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> MetadataDocument {
        use crate::assemble::DocumentAssembler;
        use crate::input::{AttrValue, FieldRecord, SourceFile};
        use crate::validate::FieldValidator;

        let mut assembler = DocumentAssembler::new(
            vec!["SURFACE_LEVEL".to_string()],
            FieldValidator::new(),
        );
        let record = FieldRecord {
            attributes: vec![
                (
                    "unique_id".to_string(),
                    AttrValue::Scalar("physics__cloud_fraction".into()),
                ),
                ("units".to_string(), AttrValue::Scalar("%".into())),
            ],
        };
        assembler.process_file(
            "physics__cloud__meta.json",
            Ok(SourceFile {
                file_name: "physics__cloud__meta.json".to_string(),
                module_name: "physics__cloud__meta_mod".to_string(),
                type_name: "physics__cloud__meta_type".to_string(),
                group_name: Some("physics__cloud".to_string()),
                records: vec![record],
            }),
        );
        assembler.finish().document
    }

    #[test]
    fn test_canonical_sorts_keys_recursively() {
        let value = json!({"b": {"z": 1, "a": [2, {"y": 3, "x": 4}]}, "a": "s"});
        let mut out = String::new();
        canonical(&value, &mut out);
        assert_eq!(out, r#"{"a":"s","b":{"a":[2,{"x":4,"y":3}],"z":1}}"#);
    }

    #[test]
    fn test_checksum_independent_of_key_order() {
        let one = json!({"a": 1, "b": 2});
        let two = json!({"b": 2, "a": 1});
        assert_eq!(compute_checksum(&one), compute_checksum(&two));
    }

    #[test]
    fn test_snapshot_verifies() {
        let text = snapshot_string(&document()).unwrap();
        verify_snapshot(&text).unwrap();
    }

    #[test]
    fn test_checksum_covers_wrapper_not_bare_document() {
        let value = snapshot_value(&document()).unwrap();
        let stored = value["checksum"].as_str().unwrap();
        let wrapper = json!({ "meta_data": value["meta_data"].clone() });
        assert_eq!(stored, compute_checksum(&wrapper));
        assert_ne!(stored, compute_checksum(&value["meta_data"]));
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let doc = document();
        assert_eq!(
            snapshot_string(&doc).unwrap(),
            snapshot_string(&doc).unwrap()
        );
    }

    #[test]
    fn test_tampered_snapshot_is_rejected() {
        let text = snapshot_string(&document()).unwrap();
        let tampered = text.replace("\"%\"", "\"1\"");
        assert_ne!(text, tampered);
        match verify_snapshot(&tampered) {
            Err(MetaError::ChecksumMismatch { .. }) => {}
            other => panic!("expected checksum mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_checksum_is_rejected() {
        let text = r#"{"meta_data": {}}"#;
        match verify_snapshot(text) {
            Err(MetaError::MissingChecksum) => {}
            other => panic!("expected missing checksum, got {other:?}"),
        }
    }

    #[test]
    fn test_write_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(&document(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), SNAPSHOT_FILE_NAME);
        let text = std::fs::read_to_string(path).unwrap();
        verify_snapshot(&text).unwrap();
    }
}
