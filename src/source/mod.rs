//! PostgreSQL source columns and the closed source type vocabulary.
//!
//! Columns are supplied by the caller, already decoded. Nothing here talks to
//! a database: `information_schema.columns` style records come in, typed
//! descriptors come out.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A column of the PostgreSQL table being translated.
///
/// Field names follow `information_schema.columns`, so a JSON export of that
/// view (with `udt_name` renamed to `type`) decodes directly. The view leaves
/// precision and length NULL where they do not apply; NULL decodes as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceColumn {
    /// Column name, copied verbatim to every derived column.
    pub name: String,

    /// Declared type name (`int4`, `numeric`, `timestamptz`, ...).
    #[serde(rename = "type")]
    pub data_type: String,

    /// Whether the column belongs to the declared primary key.
    pub is_primary_key: bool,

    /// Whether the column accepts NULL.
    pub is_nullable: bool,

    /// Precision for `numeric`. Zero means unspecified.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub numeric_precision: u32,

    /// Scale for `numeric`.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub numeric_scale: u32,

    /// Length for character types. Carried through, never used for mapping.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub character_maximum_length: u32,

    /// Sub-second precision for `timestamp` / `timestamptz`.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub datetime_precision: u32,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

impl SourceColumn {
    /// Create a non-nullable, non-key column with no precision information.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_primary_key: false,
            is_nullable: false,
            numeric_precision: 0,
            numeric_scale: 0,
            character_maximum_length: 0,
            datetime_precision: 0,
        }
    }

    /// Mark the column as part of the declared primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Mark the column as nullable.
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    /// Set numeric precision and scale.
    pub fn with_numeric(mut self, precision: u32, scale: u32) -> Self {
        self.numeric_precision = precision;
        self.numeric_scale = scale;
        self
    }

    /// Set the datetime precision.
    pub fn with_datetime_precision(mut self, precision: u32) -> Self {
        self.datetime_precision = precision;
        self
    }

    /// Set the character maximum length.
    pub fn with_max_length(mut self, length: u32) -> Self {
        self.character_maximum_length = length;
        self
    }

    /// Look up the declared type in the source vocabulary.
    pub fn source_type(&self) -> Option<SourceType> {
        SourceType::parse(&self.data_type)
    }
}

/// Supported PostgreSQL types.
///
/// The set is closed: anything not listed in [`SOURCE_TYPES`] is unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// `int2` / smallint.
    Int2,
    /// `int4` / integer.
    Int4,
    /// `int8` / bigint.
    Int8,
    /// `numeric`, arbitrary precision.
    Numeric,
    /// `varchar`.
    Varchar,
    /// `bpchar`, blank-padded fixed-length text.
    Bpchar,
    /// `text`.
    Text,
    /// `timestamp` without time zone.
    Timestamp,
    /// `timestamptz`.
    Timestamptz,
    /// `date`.
    Date,
    /// `float4` / real.
    Float4,
    /// `float8` / double precision.
    Float8,
    /// `bool`.
    Bool,
}

/// The source type table, keyed by the exact (case-sensitive) PostgreSQL
/// `udt_name`.
pub const SOURCE_TYPES: &[(&str, SourceType)] = &[
    ("int2", SourceType::Int2),
    ("int4", SourceType::Int4),
    ("int8", SourceType::Int8),
    ("numeric", SourceType::Numeric),
    ("varchar", SourceType::Varchar),
    ("text", SourceType::Text),
    ("bpchar", SourceType::Bpchar),
    ("timestamp", SourceType::Timestamp),
    ("timestamptz", SourceType::Timestamptz),
    ("date", SourceType::Date),
    ("float4", SourceType::Float4),
    ("float8", SourceType::Float8),
    ("bool", SourceType::Bool),
];

impl SourceType {
    /// Parse a declared type name. Matching is exact: `INT4` or `integer`
    /// are not recognized.
    pub fn parse(name: &str) -> Option<Self> {
        SOURCE_TYPES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, ty)| *ty)
    }

    /// The PostgreSQL name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            SourceType::Int2 => "int2",
            SourceType::Int4 => "int4",
            SourceType::Int8 => "int8",
            SourceType::Numeric => "numeric",
            SourceType::Varchar => "varchar",
            SourceType::Bpchar => "bpchar",
            SourceType::Text => "text",
            SourceType::Timestamp => "timestamp",
            SourceType::Timestamptz => "timestamptz",
            SourceType::Date => "date",
            SourceType::Float4 => "float4",
            SourceType::Float8 => "float8",
            SourceType::Bool => "bool",
        }
    }

    /// Iterate over every supported type in table order.
    pub fn all() -> impl Iterator<Item = SourceType> {
        SOURCE_TYPES.iter().map(|(_, ty)| *ty)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
