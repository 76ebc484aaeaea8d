//! PostgreSQL → ClickHouse type mapping.
//!
//! Two mappings share one table:
//!
//! - [`map_to_clickhouse`] is authoritative. An unsupported source type is an
//!   error and aborts the conversion.
//! - [`map_to_kafka_engine`] is best effort. `numeric` and `timestamptz` are
//!   carried as `String` because the AvroConfluent decoder cannot hold them,
//!   and an unsupported source type becomes a placeholder.
//!
//! Both apply the same nullability policy, see [`apply_nullability`].

pub mod projection;

use log::warn;

use crate::source::{SourceColumn, SourceType};
use crate::types::{
    ClickHouseType, DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SCALE, UNSUPPORTED_TYPE,
};

pub use projection::{kafka_projection, quote_identifier};

/// Errors from the authoritative ClickHouse mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("Type {0} not implemented yet")]
    UnsupportedSourceType(String),
}

impl SourceType {
    /// The ClickHouse type for this source type, before nullability.
    ///
    /// `numeric` without a precision becomes `Decimal(38, 19)`; the scale is
    /// ignored in that case.
    pub fn clickhouse_base(
        &self,
        numeric_precision: u32,
        numeric_scale: u32,
        datetime_precision: u32,
    ) -> ClickHouseType {
        match self {
            SourceType::Int2 => ClickHouseType::Int16,
            SourceType::Int4 => ClickHouseType::Int32,
            SourceType::Int8 => ClickHouseType::Int64,
            SourceType::Numeric if numeric_precision == 0 => {
                ClickHouseType::decimal(DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SCALE)
            }
            SourceType::Numeric => ClickHouseType::decimal(numeric_precision, numeric_scale),
            SourceType::Varchar | SourceType::Bpchar | SourceType::Text => ClickHouseType::String,
            SourceType::Timestamp | SourceType::Timestamptz => {
                ClickHouseType::DateTime64(datetime_precision)
            }
            SourceType::Date => ClickHouseType::Date,
            SourceType::Float4 => ClickHouseType::Float32,
            SourceType::Float8 => ClickHouseType::Float64,
            SourceType::Bool => ClickHouseType::Bool,
        }
    }

    /// The Kafka engine type for this source type, before nullability.
    pub fn kafka_engine_base(&self, datetime_precision: u32) -> ClickHouseType {
        match self {
            SourceType::Numeric | SourceType::Timestamptz => ClickHouseType::String,
            other => other.clickhouse_base(0, 0, datetime_precision),
        }
    }
}

/// Wrap `ty` in `Nullable(..)` if the column is nullable and is neither a
/// declared nor a guessed primary key.
///
/// ClickHouse sorting keys cannot be nullable, so key columns are kept plain
/// even when PostgreSQL allows NULL.
pub fn apply_nullability(
    ty: ClickHouseType,
    is_nullable: bool,
    is_primary_key: bool,
    is_guessed_primary_key: bool,
) -> ClickHouseType {
    if is_nullable && !is_primary_key && !is_guessed_primary_key {
        ty.into_nullable()
    } else {
        ty
    }
}

/// Map a source column to its ClickHouse type.
///
/// # Errors
///
/// [`MappingError::UnsupportedSourceType`] if the declared type is not in the
/// source vocabulary.
pub fn map_to_clickhouse(
    column: &SourceColumn,
    is_guessed_primary_key: bool,
) -> Result<ClickHouseType, MappingError> {
    let source_type = column
        .source_type()
        .ok_or_else(|| MappingError::UnsupportedSourceType(column.data_type.clone()))?;

    let base = source_type.clickhouse_base(
        column.numeric_precision,
        column.numeric_scale,
        column.datetime_precision,
    );

    Ok(apply_nullability(
        base,
        column.is_nullable,
        column.is_primary_key,
        is_guessed_primary_key,
    ))
}

/// Map a source column to its Kafka engine column type.
///
/// Never fails: an unsupported declared type yields [`UNSUPPORTED_TYPE`].
/// The placeholder is returned bare even for a nullable column, never as
/// `Nullable(NotImplementedType!)`, so callers can compare against it
/// directly. Inside [`crate::convert`] this never shows, because the
/// ClickHouse mapping rejects the column first.
pub fn map_to_kafka_engine(column: &SourceColumn, is_guessed_primary_key: bool) -> String {
    match column.source_type() {
        Some(source_type) => apply_nullability(
            source_type.kafka_engine_base(column.datetime_precision),
            column.is_nullable,
            column.is_primary_key,
            is_guessed_primary_key,
        )
        .to_string(),
        None => {
            warn!(
                "No Kafka engine type for column '{}' of type '{}'",
                column.name, column.data_type
            );
            UNSUPPORTED_TYPE.to_string()
        }
    }
}
