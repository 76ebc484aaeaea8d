//! # psql2ch
//!
//! Translates a PostgreSQL column schema into the column schemas needed to
//! replicate the table into ClickHouse and query it from Athena.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │               SourceColumn[] (PostgreSQL)                │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [keys]
//! ┌─────────────────────────────────────────────────────────┐
//! │        declared primary key + guessed primary key        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [mapping]
//! ┌─────────────────────────────────────────────────────────┐
//! │  ClickHouse type │ Kafka engine type │ projection expr   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [types::athena]
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Athena type                         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The ClickHouse mapping is authoritative and fails on unknown types. The
//! Kafka engine and Athena mappings are best effort and emit
//! [`types::UNSUPPORTED_TYPE`] instead of failing.

pub mod config;
pub mod convert;
pub mod input;
pub mod keys;
pub mod mapping;
pub mod render;
pub mod source;
pub mod types;

pub use convert::{
    convert, ConvertError, ConvertOptions, ConvertResult, DerivedColumn, SchemaConverter,
    SchemaResult,
};
pub use keys::{resolve_keys, KeyResolution};
pub use mapping::{kafka_projection, map_to_clickhouse, map_to_kafka_engine, MappingError};
pub use source::{SourceColumn, SourceType};
pub use types::{clickhouse_to_athena, AthenaType, ClickHouseType};
