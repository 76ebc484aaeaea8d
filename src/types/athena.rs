//! Athena (Hive DDL) column types, derived from ClickHouse types.
//!
//! Athena has no nullable wrapper and a coarser numeric vocabulary, so the
//! mapping only ever loses information. It works on the ClickHouse type, not
//! on the PostgreSQL column: any approximation made for ClickHouse carries
//! over.

use std::fmt;

use super::clickhouse::ClickHouseType;
use super::UNSUPPORTED_TYPE;

/// An Athena column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AthenaType {
    /// `int`, for every ClickHouse integer width.
    Int,
    /// `string`.
    String,
    /// `float`, for both float widths.
    Float,
    /// `boolean`.
    Boolean,
    /// `decimal(p,s)` or `decimal(p)`.
    Decimal { precision: u32, scale: Option<u32> },
    /// `timestamp`, whatever the sub-second precision.
    Timestamp,
    /// `date`.
    Date,
}

impl AthenaType {
    /// Map a ClickHouse type to Athena.
    ///
    /// One `Nullable(..)` layer is dropped. Returns `None` for types Athena
    /// has no counterpart for.
    pub fn from_clickhouse(ty: &ClickHouseType) -> Option<Self> {
        let athena = match ty.base() {
            ClickHouseType::Int16 | ClickHouseType::Int32 | ClickHouseType::Int64 => {
                AthenaType::Int
            }
            ClickHouseType::String => AthenaType::String,
            ClickHouseType::Float32 | ClickHouseType::Float64 => AthenaType::Float,
            ClickHouseType::Bool => AthenaType::Boolean,
            ClickHouseType::Decimal { precision, scale } => AthenaType::Decimal {
                precision: *precision,
                scale: *scale,
            },
            ClickHouseType::DateTime64(_) => AthenaType::Timestamp,
            ClickHouseType::Date => AthenaType::Date,
            ClickHouseType::Nullable(_) => return None,
        };
        Some(athena)
    }
}

impl fmt::Display for AthenaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AthenaType::Int => write!(f, "int"),
            AthenaType::String => write!(f, "string"),
            AthenaType::Float => write!(f, "float"),
            AthenaType::Boolean => write!(f, "boolean"),
            AthenaType::Decimal {
                precision,
                scale: Some(scale),
            } => write!(f, "decimal({},{})", precision, scale),
            AthenaType::Decimal {
                precision,
                scale: None,
            } => write!(f, "decimal({})", precision),
            AthenaType::Timestamp => write!(f, "timestamp"),
            AthenaType::Date => write!(f, "date"),
        }
    }
}

/// Render the Athena type for a ClickHouse type, or the unsupported-type
/// placeholder.
pub fn athena_type_name(ty: &ClickHouseType) -> String {
    match AthenaType::from_clickhouse(ty) {
        Some(athena) => athena.to_string(),
        None => UNSUPPORTED_TYPE.to_string(),
    }
}

/// Map a rendered ClickHouse type string to an Athena type string.
///
/// The text is parsed with [`ClickHouseType::parse`] first. Anything that
/// does not parse, or has no Athena counterpart, becomes
/// [`UNSUPPORTED_TYPE`].
///
/// The whole string must be one type, but whitespace inside the parentheses
/// is free: `Decimal(10,2)` and `Decimal( 10 , 2 )` both give
/// `decimal(10,2)`. Stricter readers that insist on the `Decimal(p, s)`
/// spelling emitted by this crate agree on every type [`crate::convert`]
/// produces.
///
/// # Examples
///
/// ```
/// use psql2ch::types::clickhouse_to_athena;
///
/// assert_eq!(clickhouse_to_athena("Nullable(Int32)"), "int");
/// assert_eq!(clickhouse_to_athena("Decimal(32, 0)"), "decimal(32,0)");
/// assert_eq!(clickhouse_to_athena("UUID"), "NotImplementedType!");
/// ```
pub fn clickhouse_to_athena(clickhouse_type: &str) -> String {
    match ClickHouseType::parse(clickhouse_type) {
        Some(ty) => athena_type_name(&ty),
        None => UNSUPPORTED_TYPE.to_string(),
    }
}
