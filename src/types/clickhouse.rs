//! ClickHouse column types.
//!
//! Covers the subset of the ClickHouse type grammar that PostgreSQL columns
//! map onto, plus the `Nullable(..)` wrapper. Values render to the exact
//! strings ClickHouse accepts in `CREATE TABLE`, and rendered strings parse
//! back into values so callers holding only text can reuse the typed API.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Precision used for `numeric` columns declared without one.
pub const DEFAULT_DECIMAL_PRECISION: u32 = 38;

/// Scale paired with [`DEFAULT_DECIMAL_PRECISION`].
pub const DEFAULT_DECIMAL_SCALE: u32 = 19;

static NULLABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Nullable\((?P<inner>.+)\)$").expect("valid Nullable pattern"));

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Decimal\(\s*(?P<precision>\d+)\s*(?:,\s*(?P<scale>\d+)\s*)?\)$")
        .expect("valid Decimal pattern")
});

static DATETIME64_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^DateTime64\(\s*(?P<precision>\d+)\s*\)$").expect("valid DateTime64 pattern")
});

/// A ClickHouse column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClickHouseType {
    /// 16-bit signed integer.
    Int16,

    /// 32-bit signed integer.
    Int32,

    /// 64-bit signed integer.
    Int64,

    /// Fixed-point decimal.
    ///
    /// The converter always sets `scale`. A one-argument `Decimal(P)` only
    /// appears when parsing text written elsewhere.
    Decimal { precision: u32, scale: Option<u32> },

    /// Arbitrary bytes / text.
    String,

    /// Date and time with sub-second precision (0-9 digits).
    DateTime64(u32),

    /// Calendar date.
    Date,

    /// 32-bit float.
    Float32,

    /// 64-bit float.
    Float64,

    /// Boolean.
    Bool,

    /// A type that also accepts NULL.
    Nullable(Box<ClickHouseType>),
}

impl ClickHouseType {
    /// `Decimal(precision, scale)`.
    pub fn decimal(precision: u32, scale: u32) -> Self {
        ClickHouseType::Decimal {
            precision,
            scale: Some(scale),
        }
    }

    /// Wrap this type in `Nullable(..)`. Already-nullable types are returned
    /// unchanged, ClickHouse rejects nested wrappers.
    pub fn into_nullable(self) -> Self {
        match self {
            ClickHouseType::Nullable(_) => self,
            other => ClickHouseType::Nullable(Box::new(other)),
        }
    }

    /// Returns true if this is a `Nullable(..)` type.
    pub fn is_nullable(&self) -> bool {
        matches!(self, ClickHouseType::Nullable(_))
    }

    /// The type without its `Nullable(..)` wrapper.
    pub fn base(&self) -> &ClickHouseType {
        match self {
            ClickHouseType::Nullable(inner) => inner,
            other => other,
        }
    }

    /// Parse a rendered ClickHouse type.
    ///
    /// Accepts everything [`Display`](fmt::Display) produces, with optional
    /// whitespace inside parentheses. Only one `Nullable(..)` layer is
    /// unwrapped; nested wrappers and unknown names yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use psql2ch::types::ClickHouseType;
    ///
    /// assert_eq!(ClickHouseType::parse("Int32"), Some(ClickHouseType::Int32));
    /// assert_eq!(
    ///     ClickHouseType::parse("Nullable(Decimal(38, 19))"),
    ///     Some(ClickHouseType::decimal(38, 19).into_nullable())
    /// );
    /// assert_eq!(ClickHouseType::parse("UUID"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Some(caps) = NULLABLE_RE.captures(s) {
            return parse_base(caps["inner"].trim()).map(ClickHouseType::into_nullable);
        }

        parse_base(s)
    }
}

fn parse_base(s: &str) -> Option<ClickHouseType> {
    // Exact names first
    let simple = match s {
        "Int16" => Some(ClickHouseType::Int16),
        "Int32" => Some(ClickHouseType::Int32),
        "Int64" => Some(ClickHouseType::Int64),
        "String" => Some(ClickHouseType::String),
        "Date" => Some(ClickHouseType::Date),
        "Float32" => Some(ClickHouseType::Float32),
        "Float64" => Some(ClickHouseType::Float64),
        "Bool" => Some(ClickHouseType::Bool),
        _ => None,
    };
    if simple.is_some() {
        return simple;
    }

    if let Some(caps) = DECIMAL_RE.captures(s) {
        let precision = caps["precision"].parse().ok()?;
        let scale = match caps.name("scale") {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        return Some(ClickHouseType::Decimal { precision, scale });
    }

    if let Some(caps) = DATETIME64_RE.captures(s) {
        return caps["precision"].parse().ok().map(ClickHouseType::DateTime64);
    }

    None
}

impl fmt::Display for ClickHouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickHouseType::Int16 => write!(f, "Int16"),
            ClickHouseType::Int32 => write!(f, "Int32"),
            ClickHouseType::Int64 => write!(f, "Int64"),
            ClickHouseType::Decimal {
                precision,
                scale: Some(scale),
            } => write!(f, "Decimal({}, {})", precision, scale),
            ClickHouseType::Decimal {
                precision,
                scale: None,
            } => write!(f, "Decimal({})", precision),
            ClickHouseType::String => write!(f, "String"),
            ClickHouseType::DateTime64(precision) => write!(f, "DateTime64({})", precision),
            ClickHouseType::Date => write!(f, "Date"),
            ClickHouseType::Float32 => write!(f, "Float32"),
            ClickHouseType::Float64 => write!(f, "Float64"),
            ClickHouseType::Bool => write!(f, "Bool"),
            ClickHouseType::Nullable(inner) => write!(f, "Nullable({})", inner),
        }
    }
}
