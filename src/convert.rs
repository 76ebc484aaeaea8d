//! End-to-end conversion of a PostgreSQL column list.
//!
//! ```text
//! SourceColumn[] → resolve keys → ClickHouse / Kafka engine / projection
//!                                        │
//!                                        ▼
//!                                     Athena
//! ```
//!
//! One forward pass over the input. Every output list has the same length
//! and order as the input.
//!
//! # Example
//!
//! ```
//! use psql2ch::convert::{convert, SchemaConverter, ConvertOptions};
//! use psql2ch::source::SourceColumn;
//!
//! let columns = vec![
//!     SourceColumn::new("order_id", "int8").nullable(),
//!     SourceColumn::new("amount", "numeric").with_numeric(12, 2).nullable(),
//! ];
//!
//! let result = convert(&columns)?;
//! assert_eq!(result.id, "order_id_amount");
//! assert_eq!(result.guessed_primary_key, vec!["order_id"]);
//! assert_eq!(result.clickhouse_columns[0].data_type, "Int64");
//! assert_eq!(result.clickhouse_columns[1].data_type, "Nullable(Decimal(12, 2))");
//! assert_eq!(result.athena_columns[1].data_type, "decimal(12,2)");
//!
//! // Without guessing the key column stays nullable
//! let options = ConvertOptions::default().with_guessing(false);
//! let result = SchemaConverter::new(options).convert(&columns)?;
//! assert_eq!(result.clickhouse_columns[0].data_type, "Nullable(Int64)");
//! # Ok::<(), psql2ch::convert::ConvertError>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::keys::{KeyAccumulator, DEFAULT_KEY_SUFFIX};
use crate::mapping::{kafka_projection, map_to_clickhouse, map_to_kafka_engine, MappingError};
use crate::source::SourceColumn;
use crate::types::{athena_type_name, ClickHouseType};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Unable to map PostgreSQL type of column '{column}': {source}")]
    Mapping {
        column: String,
        #[source]
        source: MappingError,
    },
}

impl ConvertError {
    /// Name of the column that failed.
    pub fn column(&self) -> &str {
        match self {
            ConvertError::Mapping { column, .. } => column,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

// ============================================================================
// Options
// ============================================================================

/// Options for conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Suffix marking a guessed primary key.
    pub key_suffix: String,

    /// Guess a primary key from column names.
    pub guess_primary_key: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            key_suffix: DEFAULT_KEY_SUFFIX.to_string(),
            guess_primary_key: true,
        }
    }
}

impl ConvertOptions {
    /// Set the guessed-key suffix.
    pub fn with_key_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.key_suffix = suffix.into();
        self
    }

    /// Enable or disable primary key guessing.
    pub fn with_guessing(mut self, enabled: bool) -> Self {
        self.guess_primary_key = enabled;
        self
    }

    /// Options taken from the `[inference]` section of a settings file.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            key_suffix: settings.inference.key_suffix.clone(),
            guess_primary_key: settings.inference.enabled,
        }
    }

    fn suffix(&self) -> Option<&str> {
        self.guess_primary_key.then_some(self.key_suffix.as_str())
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// A column of one of the target schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedColumn {
    /// Same as the source column name.
    pub name: String,

    /// Type in the target grammar.
    #[serde(rename = "type")]
    pub data_type: String,
}

impl DerivedColumn {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// Everything derived from one column list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaResult {
    /// Source column names joined with `_`.
    pub id: String,

    /// Declared primary key columns, in input order.
    #[serde(rename = "clickhouse_primarykey")]
    pub primary_key: Vec<String>,

    /// Guessed primary key, 0 or 1 names.
    #[serde(rename = "clickhouse_guessed_primarykey")]
    pub guessed_primary_key: Vec<String>,

    /// MergeTree table columns.
    pub clickhouse_columns: Vec<DerivedColumn>,

    /// Kafka engine table columns.
    #[serde(rename = "clickhouse_kafkaengine_columns")]
    pub kafka_engine_columns: Vec<DerivedColumn>,

    /// Select items moving each column from the Kafka engine table to the
    /// MergeTree table.
    #[serde(rename = "clickhouse_kafkaengine_columns_mapping")]
    pub kafka_engine_projections: Vec<String>,

    /// Athena table columns.
    pub athena_columns: Vec<DerivedColumn>,
}

impl SchemaResult {
    /// Number of columns converted.
    pub fn len(&self) -> usize {
        self.clickhouse_columns.len()
    }

    /// Whether no columns were converted.
    pub fn is_empty(&self) -> bool {
        self.clickhouse_columns.is_empty()
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Converts PostgreSQL column lists.
#[derive(Debug, Clone, Default)]
pub struct SchemaConverter {
    options: ConvertOptions,
}

impl SchemaConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert `columns`.
    ///
    /// Stops at the first column whose type has no ClickHouse mapping.
    pub fn convert(&self, columns: &[SourceColumn]) -> ConvertResult<SchemaResult> {
        let mut keys = KeyAccumulator::new(self.options.suffix());

        let mut names = Vec::with_capacity(columns.len());
        let mut clickhouse_types: Vec<ClickHouseType> = Vec::with_capacity(columns.len());
        let mut clickhouse_columns = Vec::with_capacity(columns.len());
        let mut kafka_engine_columns = Vec::with_capacity(columns.len());
        let mut kafka_engine_projections = Vec::with_capacity(columns.len());

        for (index, column) in columns.iter().enumerate() {
            let is_guessed = keys.push(index, column);
            names.push(column.name.as_str());

            let clickhouse_type =
                map_to_clickhouse(column, is_guessed).map_err(|source| ConvertError::Mapping {
                    column: column.name.clone(),
                    source,
                })?;
            let kafka_type = map_to_kafka_engine(column, is_guessed);

            debug!(
                "{}: {} -> {} (kafka engine: {})",
                column.name, column.data_type, clickhouse_type, kafka_type
            );

            clickhouse_columns.push(DerivedColumn::new(&column.name, clickhouse_type.to_string()));
            kafka_engine_columns.push(DerivedColumn::new(&column.name, kafka_type));
            kafka_engine_projections.push(kafka_projection(&column.name, &column.data_type));
            clickhouse_types.push(clickhouse_type);
        }

        let athena_columns = columns
            .iter()
            .zip(&clickhouse_types)
            .map(|(column, ty)| DerivedColumn::new(&column.name, athena_type_name(ty)))
            .collect();

        let keys = keys.finish();
        let guessed_primary_key = keys.guessed_list();

        Ok(SchemaResult {
            id: names.join("_"),
            primary_key: keys.primary_key,
            guessed_primary_key,
            clickhouse_columns,
            kafka_engine_columns,
            kafka_engine_projections,
            athena_columns,
        })
    }
}

/// Convert `columns` with default options.
pub fn convert(columns: &[SourceColumn]) -> ConvertResult<SchemaResult> {
    SchemaConverter::default().convert(columns)
}
