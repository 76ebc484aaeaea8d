//! End-to-end conversion of column lists.

use std::path::PathBuf;

use psql2ch::convert::{convert, ConvertError, ConvertOptions, SchemaConverter, SchemaResult};
use psql2ch::input::read_columns_file;
use psql2ch::mapping::MappingError;
use psql2ch::source::SourceColumn;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}

fn clickhouse(result: &SchemaResult) -> Vec<&str> {
    result
        .clickhouse_columns
        .iter()
        .map(|c| c.data_type.as_str())
        .collect()
}

fn athena(result: &SchemaResult) -> Vec<&str> {
    result
        .athena_columns
        .iter()
        .map(|c| c.data_type.as_str())
        .collect()
}

// ============================================================================
// Single-column scenarios
// ============================================================================

#[test]
fn test_declared_key() {
    let result = convert(&[SourceColumn::new("key", "int4").primary_key()]).unwrap();

    assert_eq!(clickhouse(&result), vec!["Int32"]);
    assert_eq!(result.primary_key, vec!["key"]);
    assert!(result.guessed_primary_key.is_empty());
    assert_eq!(result.id, "key");
}

#[test]
fn test_nullable_declared_key() {
    let column = SourceColumn::new("key_id", "int4").primary_key().nullable();
    let result = convert(&[column]).unwrap();

    assert_eq!(clickhouse(&result), vec!["Int32"]);
    assert_eq!(result.kafka_engine_columns[0].data_type, "Int32");
    assert_eq!(result.primary_key, vec!["key_id"]);
    // The name still matches the suffix, so it is also the guess
    assert_eq!(result.guessed_primary_key, vec!["key_id"]);
}

#[test]
fn test_guessed_key() {
    let result = convert(&[SourceColumn::new("phc_id", "int8").nullable()]).unwrap();

    assert_eq!(result.guessed_primary_key, vec!["phc_id"]);
    assert!(result.primary_key.is_empty());
    assert_eq!(clickhouse(&result), vec!["Int64"]);
}

#[test]
fn test_decimal_column() {
    let column = SourceColumn::new("key3_id", "numeric").with_numeric(32, 0);
    let result = convert(&[column]).unwrap();

    assert_eq!(clickhouse(&result), vec!["Decimal(32, 0)"]);
    assert_eq!(athena(&result), vec!["decimal(32,0)"]);
    assert_eq!(result.kafka_engine_columns[0].data_type, "String");
}

#[test]
fn test_timestamp_column() {
    let column = SourceColumn::new("key_date", "timestamp").with_datetime_precision(0);
    let result = convert(&[column]).unwrap();

    assert_eq!(clickhouse(&result), vec!["DateTime64(0)"]);
    assert_eq!(athena(&result), vec!["timestamp"]);
    assert_eq!(result.kafka_engine_projections, vec!["`key_date`"]);
}

#[test]
fn test_composite_declared_key() {
    let columns = vec![
        SourceColumn::new("key_id", "int4").primary_key(),
        SourceColumn::new("key2_id", "int4").primary_key(),
    ];
    let result = convert(&columns).unwrap();

    assert_eq!(result.primary_key, vec!["key_id", "key2_id"]);
    assert_eq!(result.id, "key_id_key2_id");
    assert_eq!(clickhouse(&result), vec!["Int32", "Int32"]);
}

// ============================================================================
// Fixtures
// ============================================================================

#[test]
fn test_product_history_change_fixture() {
    let columns = read_columns_file(demo("product_history_change.json")).unwrap();
    let result = convert(&columns).unwrap();

    assert_eq!(result.len(), 14);
    assert!(result.primary_key.is_empty());
    assert_eq!(result.guessed_primary_key, vec!["phc_id"]);

    assert_eq!(
        clickhouse(&result),
        vec![
            "Int64",
            "Nullable(Int64)",
            "Nullable(Int64)",
            "Nullable(Int64)",
            "Nullable(DateTime64(6))",
            "Nullable(String)",
            "Nullable(String)",
            "Nullable(String)",
            "Nullable(String)",
            "Nullable(String)",
            "Nullable(String)",
            "Nullable(String)",
            "Nullable(Int64)",
            "Nullable(DateTime64(6))",
        ]
    );
    assert_eq!(
        athena(&result),
        vec![
            "int", "int", "int", "int", "timestamp", "string", "string", "string", "string",
            "string", "string", "string", "int", "timestamp",
        ]
    );

    // No timestamptz columns, so every projection is a plain reference
    for (projection, column) in result
        .kafka_engine_projections
        .iter()
        .zip(&result.clickhouse_columns)
    {
        assert_eq!(projection, &format!("`{}`", column.name));
    }

    assert!(result.id.starts_with("phc_id_phc_u_id_"));
    assert!(result.id.ends_with("_phc_sys_created_on"));
}

#[test]
fn test_orders_fixture() {
    let columns = read_columns_file(demo("orders.toml")).unwrap();
    let result = convert(&columns).unwrap();

    assert_eq!(result.primary_key, vec!["order_id"]);
    assert_eq!(result.guessed_primary_key, vec!["order_id"]);
    assert_eq!(
        clickhouse(&result),
        vec![
            "Int64",
            "Nullable(Int64)",
            "Nullable(Decimal(12, 2))",
            "DateTime64(6)",
            "Nullable(String)",
        ]
    );

    let kafka: Vec<&str> = result
        .kafka_engine_columns
        .iter()
        .map(|c| c.data_type.as_str())
        .collect();
    assert_eq!(
        kafka,
        vec!["Int64", "Nullable(Int64)", "Nullable(String)", "String", "Nullable(String)"]
    );
    assert_eq!(
        result.kafka_engine_projections[3],
        "parseDateTime64BestEffortOrNull(`placed_at`) as `placed_at`"
    );
    assert_eq!(
        athena(&result),
        vec!["int", "int", "decimal(12,2)", "timestamp", "string"]
    );
}

// ============================================================================
// Options and errors
// ============================================================================

#[test]
fn test_guessing_disabled() {
    let columns = vec![SourceColumn::new("phc_id", "int8").nullable()];
    let options = ConvertOptions::default().with_guessing(false);
    let result = SchemaConverter::new(options).convert(&columns).unwrap();

    assert!(result.guessed_primary_key.is_empty());
    assert_eq!(clickhouse(&result), vec!["Nullable(Int64)"]);
}

#[test]
fn test_custom_suffix() {
    let columns = vec![
        SourceColumn::new("user_id", "int8").nullable(),
        SourceColumn::new("user_key", "int8").nullable(),
    ];
    let options = ConvertOptions::default().with_key_suffix("_key");
    let result = SchemaConverter::new(options).convert(&columns).unwrap();

    assert_eq!(result.guessed_primary_key, vec!["user_key"]);
    assert_eq!(clickhouse(&result), vec!["Nullable(Int64)", "Int64"]);
}

#[test]
fn test_unsupported_type_aborts() {
    let columns = vec![
        SourceColumn::new("id", "int4").primary_key(),
        SourceColumn::new("payload", "jsonb"),
        SourceColumn::new("other", "uuid"),
    ];
    let err = convert(&columns).unwrap_err();

    assert_eq!(
        err,
        ConvertError::Mapping {
            column: "payload".to_string(),
            source: MappingError::UnsupportedSourceType("jsonb".to_string()),
        }
    );
    assert_eq!(
        err.to_string(),
        "Unable to map PostgreSQL type of column 'payload': Type jsonb not implemented yet"
    );
}

#[test]
fn test_json_output_field_names() {
    let result = convert(&[SourceColumn::new("a_id", "int4")]).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    for field in [
        "id",
        "clickhouse_primarykey",
        "clickhouse_guessed_primarykey",
        "clickhouse_columns",
        "clickhouse_kafkaengine_columns",
        "clickhouse_kafkaengine_columns_mapping",
        "athena_columns",
    ] {
        assert!(value.get(field).is_some(), "missing {}", field);
    }
    assert_eq!(value["clickhouse_columns"][0]["type"], "Int32");
}
