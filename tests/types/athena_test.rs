//! ClickHouse → Athena decomposition.

use psql2ch::types::{clickhouse_to_athena, AthenaType, ClickHouseType, UNSUPPORTED_TYPE};

#[test]
fn test_base_types() {
    let cases = [
        ("Int16", "int"),
        ("Int32", "int"),
        ("Int64", "int"),
        ("String", "string"),
        ("Float32", "float"),
        ("Float64", "float"),
        ("Bool", "boolean"),
        ("Date", "date"),
    ];
    for (clickhouse, expected) in cases {
        assert_eq!(clickhouse_to_athena(clickhouse), expected, "{}", clickhouse);
    }
}

#[test]
fn test_parameterized_types() {
    assert_eq!(clickhouse_to_athena("Decimal(32, 0)"), "decimal(32,0)");
    assert_eq!(clickhouse_to_athena("Decimal(38, 19)"), "decimal(38,19)");
    assert_eq!(clickhouse_to_athena("Decimal(18)"), "decimal(18)");
    assert_eq!(clickhouse_to_athena("DateTime64(0)"), "timestamp");
    assert_eq!(clickhouse_to_athena("DateTime64(6)"), "timestamp");
}

#[test]
fn test_whitespace_inside_parentheses_is_free() {
    assert_eq!(clickhouse_to_athena("Decimal(10,2)"), "decimal(10,2)");
    assert_eq!(clickhouse_to_athena("Decimal( 10 , 2 )"), "decimal(10,2)");
    assert_eq!(clickhouse_to_athena("DateTime64( 3 )"), "timestamp");
    assert_eq!(clickhouse_to_athena("Nullable( Int64 )"), "int");
}

#[test]
fn test_trailing_text_is_rejected() {
    assert_eq!(clickhouse_to_athena("Decimal(10, 2) CODEC(ZSTD)"), UNSUPPORTED_TYPE);
    assert_eq!(clickhouse_to_athena("LowCardinality(String)"), UNSUPPORTED_TYPE);
}

#[test]
fn test_nullable_is_unwrapped() {
    assert_eq!(
        clickhouse_to_athena("Nullable(Int32)"),
        clickhouse_to_athena("Int32")
    );
    assert_eq!(
        clickhouse_to_athena("Nullable(Decimal(12, 2))"),
        "decimal(12,2)"
    );
    assert_eq!(clickhouse_to_athena("Nullable(DateTime64(6))"), "timestamp");
}

#[test]
fn test_unsupported_is_sentinel() {
    for clickhouse in ["UUID", "Array(Int32)", "int32", "", "NotImplementedType!"] {
        assert_eq!(clickhouse_to_athena(clickhouse), UNSUPPORTED_TYPE, "{}", clickhouse);
    }
}

#[test]
fn test_textual_and_structured_agree() {
    let types = [
        ClickHouseType::Int16,
        ClickHouseType::String,
        ClickHouseType::decimal(10, 2),
        ClickHouseType::DateTime64(3).into_nullable(),
        ClickHouseType::Bool.into_nullable(),
    ];
    for ty in types {
        let structured = AthenaType::from_clickhouse(&ty).unwrap().to_string();
        assert_eq!(clickhouse_to_athena(&ty.to_string()), structured);
    }
}

#[test]
fn test_deterministic() {
    let first = clickhouse_to_athena("Nullable(Decimal(38, 19))");
    let second = clickhouse_to_athena("Nullable(Decimal(38, 19))");
    assert_eq!(first, second);
}
