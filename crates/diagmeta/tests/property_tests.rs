//! Property-based tests for snapshot checksumming and determinism.

use diagmeta::input::{AttrValue, FieldRecord, SourceFile};
use diagmeta::snapshot::{compute_checksum, snapshot_string, verify_snapshot};
use diagmeta::{DocumentAssembler, FieldValidator, MetadataDocument};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,14}"
}

fn scalar(value: &str) -> AttrValue {
    AttrValue::Scalar(value.into())
}

fn field_record(section: &str, item: &str) -> FieldRecord {
    FieldRecord {
        attributes: vec![
            ("unique_id".to_string(), scalar(&format!("{section}__{item}"))),
            ("long_name".to_string(), scalar(&format!("The {item} field"))),
            ("units".to_string(), scalar("kg m-2")),
            ("function_space".to_string(), scalar("W3")),
            ("trigger".to_string(), scalar(": on")),
            ("description".to_string(), scalar("A generated field")),
            ("data_type".to_string(), scalar("REAL")),
            ("time_step".to_string(), scalar("TIMESTEP")),
            ("recommended_interpolation".to_string(), scalar("LINEAR")),
        ],
    }
}

/// A small valid document: one section/group per entry, distinct item names
/// within each group.
fn document_strategy() -> impl Strategy<Value = MetadataDocument> {
    proptest::collection::btree_map(
        (identifier(), identifier()),
        proptest::collection::btree_set(identifier(), 1..4),
        1..4,
    )
    .prop_map(|groups| {
        let mut assembler = DocumentAssembler::new(
            vec!["SURFACE_LEVEL".to_string()],
            FieldValidator::new(),
        );
        for ((section, group), items) in groups {
            let records = items
                .iter()
                .map(|item| field_record(&section, item))
                .collect();
            let file_name = format!("{section}__{group}__meta.json");
            assembler.process_file(
                &file_name.clone(),
                Ok(SourceFile {
                    file_name,
                    module_name: format!("{section}__{group}__meta_mod"),
                    type_name: format!("{section}__{group}__meta_type"),
                    group_name: Some(format!("{section}__{group}")),
                    records,
                }),
            );
        }
        assembler.finish().document
    })
}

proptest! {
    #[test]
    fn snapshot_always_verifies(document in document_strategy()) {
        let text = snapshot_string(&document).unwrap();
        prop_assert!(verify_snapshot(&text).is_ok());
    }

    #[test]
    fn checksum_matches_recomputation(document in document_strategy()) {
        let value = diagmeta::snapshot::snapshot_value(&document).unwrap();
        let stored = value["checksum"].as_str().unwrap().to_string();
        let payload = serde_json::json!({ "meta_data": value["meta_data"].clone() });
        prop_assert_eq!(stored, compute_checksum(&payload));
    }

    #[test]
    fn serialization_is_deterministic(document in document_strategy()) {
        prop_assert_eq!(
            snapshot_string(&document).unwrap(),
            snapshot_string(&document).unwrap()
        );
        prop_assert_eq!(
            diagmeta::schema_conf::create_config_schema(&document),
            diagmeta::schema_conf::create_config_schema(&document)
        );
    }

    #[test]
    fn any_payload_edit_breaks_verification(
        document in document_strategy(),
        replacement in "[a-z]{6}",
    ) {
        let text = snapshot_string(&document).unwrap();
        let tampered = text.replacen("kg m-2", &replacement, 1);
        prop_assume!(tampered != text);
        prop_assert!(verify_snapshot(&tampered).is_err());
    }
}
