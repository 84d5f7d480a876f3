use std::collections::HashMap;

use gridlink_core::{Row, Value};
use gridlink_gsheets::{
    gviz_url, index_from_letters, letters, letters_from_index, select_credentials,
    sync_mode_from_url, values_from_row, CellValue, Credentials, Field, GSheetsError, SyncMode,
};

// ===== Codec Tests =====

#[test]
fn test_codec_roundtrip() {
    for index in 0..=20_000 {
        assert_eq!(
            index_from_letters(&letters_from_index(index)).unwrap(),
            index
        );
    }
}

#[test]
fn test_codec_boundaries() {
    let labels: Vec<String> = letters(703).collect();
    assert_eq!(labels[0], "A");
    assert_eq!(labels[25], "Z");
    assert_eq!(labels[26], "AA");
    assert_eq!(labels[51], "AZ");
    assert_eq!(labels[52], "BA");
    assert_eq!(labels[701], "ZZ");
    assert_eq!(labels[702], "AAA");
}

// ===== Write-path Tests =====

/// Columns as they would be discovered from a query response, mapped to
/// letters, then used to serialize rows for a write.
#[test]
fn test_row_serialization_for_write() {
    let columns = HashMap::from([
        ("country".to_string(), Field::for_kind("string")),
        ("cnt".to_string(), Field::for_kind("number")),
        ("active".to_string(), Field::for_kind("boolean")),
    ]);
    let column_map = HashMap::from([
        ("country".to_string(), "A".to_string()),
        ("cnt".to_string(), "C".to_string()),
        ("active".to_string(), "D".to_string()),
    ]);

    let mut row = Row::new();
    row.insert("cnt".to_string(), Value::Int(10));
    row.insert("country".to_string(), Value::from("BR"));
    row.insert("active".to_string(), Value::Bool(true));

    let values = values_from_row(&row, &columns, &column_map).unwrap();
    assert_eq!(
        values,
        vec![
            CellValue::from("BR"),
            CellValue::Null,
            CellValue::Int(10),
            CellValue::Bool(true),
        ]
    );
}

#[test]
fn test_colliding_map_is_rejected() {
    let columns = HashMap::from([
        ("a".to_string(), Field::for_kind("string")),
        ("b".to_string(), Field::for_kind("string")),
    ]);
    let column_map = HashMap::from([
        ("a".to_string(), "B".to_string()),
        ("b".to_string(), "B".to_string()),
    ]);
    let row = Row::new();

    assert!(matches!(
        values_from_row(&row, &columns, &column_map),
        Err(GSheetsError::DuplicateColumnLetter { .. })
    ));
}

// ===== Data-source Resolution Tests =====

/// One pass over a configured data source: endpoint plus sync policy
/// from the same URL.
#[test]
fn test_data_source_resolution() {
    let uri = "https://docs.google.com/spreadsheets/d/1a2b3c/edit?headers=2&sync_mode=batch#gid=7";

    let endpoint = gviz_url(uri, 0, 0, None).unwrap();
    assert_eq!(
        endpoint.as_str(),
        "https://docs.google.com/spreadsheets/d/1a2b3c/gviz/tq?headers=2&gid=7"
    );

    assert_eq!(sync_mode_from_url(uri).unwrap(), Some(SyncMode::Batch));
}

#[test]
fn test_sheet_name_suppresses_gid() {
    let uri = "https://docs.google.com/spreadsheets/d/1a2b3c/edit?sheet=Inventory#gid=7";
    let endpoint = gviz_url(uri, 0, 0, None).unwrap();
    assert_eq!(
        endpoint.as_str(),
        "https://docs.google.com/spreadsheets/d/1a2b3c/gviz/tq?sheet=Inventory"
    );
}

#[test]
fn test_unset_sync_mode_is_no_preference() {
    let uri = "https://docs.google.com/spreadsheets/d/1a2b3c/edit";
    assert_eq!(sync_mode_from_url(uri).unwrap(), None);
}

// ===== Credential Tests =====

#[test]
fn test_credential_priority_chain() {
    let selected = select_credentials(None, None, None, None);
    assert_eq!(selected, None);

    let selected = select_credentials(
        Some("tok".to_string()),
        Some("/keys/sa.json".into()),
        None,
        Some("alice@example.com".to_string()),
    );
    assert_eq!(
        selected,
        Some(Credentials::AccessToken("tok".to_string()))
    );
}
