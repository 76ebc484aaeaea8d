//! Target type systems.
//!
//! - [`clickhouse`] - ClickHouse types, used for MergeTree and Kafka engine
//!   tables
//! - [`athena`] - Athena types, derived from ClickHouse types

pub mod athena;
pub mod clickhouse;

pub use athena::{athena_type_name, clickhouse_to_athena, AthenaType};
pub use clickhouse::{ClickHouseType, DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SCALE};

/// Placeholder emitted by the best-effort mappings (Kafka engine, Athena)
/// for a column they cannot represent.
pub const UNSUPPORTED_TYPE: &str = "NotImplementedType!";

/// Returns true if `type_name` is the unsupported-type placeholder.
pub fn is_sentinel(type_name: &str) -> bool {
    type_name == UNSUPPORTED_TYPE
}
