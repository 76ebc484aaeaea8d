//! Kafka engine → MergeTree projection expressions.
//!
//! A materialized view reads the Kafka engine table and inserts into the
//! MergeTree table. Each column gets one select item. Most columns pass
//! through unchanged; `timestamptz` arrives as a string and is parsed back
//! into a `DateTime64`.

use crate::source::SourceType;

/// Quote an identifier with backticks, doubling embedded backticks.
pub fn quote_identifier(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Build the select item that moves column `name` from the Kafka engine
/// table to the MergeTree table.
///
/// The output alias is always `name`, and the expression only references
/// `name`.
///
/// # Examples
///
/// ```
/// use psql2ch::mapping::kafka_projection;
///
/// assert_eq!(kafka_projection("price", "numeric"), "`price`");
/// assert_eq!(
///     kafka_projection("created_at", "timestamptz"),
///     "parseDateTime64BestEffortOrNull(`created_at`) as `created_at`"
/// );
/// ```
pub fn kafka_projection(name: &str, data_type: &str) -> String {
    let quoted = quote_identifier(name);
    match SourceType::parse(data_type) {
        Some(SourceType::Timestamptz) => {
            format!("parseDateTime64BestEffortOrNull({quoted}) as {quoted}")
        }
        _ => quoted,
    }
}
