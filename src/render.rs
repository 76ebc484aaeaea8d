//! Text rendering of conversion results for the CLI.

use std::fmt::Write;

use crate::config::OutputFormat;
use crate::convert::SchemaResult;
use crate::source::SourceType;
use crate::types::athena_type_name;

/// Render `result` in `format`.
pub fn render(result: &SchemaResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(result),
        OutputFormat::Pretty => serde_json::to_string_pretty(result),
        OutputFormat::Table => Ok(render_table(result)),
    }
}

/// One row per column: name, ClickHouse, Kafka engine, projection, Athena.
pub fn render_table(result: &SchemaResult) -> String {
    let header = ["column", "clickhouse", "kafka_engine", "projection", "athena"];

    let rows: Vec<[&str; 5]> = result
        .clickhouse_columns
        .iter()
        .zip(&result.kafka_engine_columns)
        .zip(&result.kafka_engine_projections)
        .zip(&result.athena_columns)
        .map(|(((ch, kafka), projection), athena)| {
            [
                ch.name.as_str(),
                ch.data_type.as_str(),
                kafka.data_type.as_str(),
                projection.as_str(),
                athena.data_type.as_str(),
            ]
        })
        .collect();

    let mut out = format_rows(&header, &rows);

    let _ = writeln!(out);
    let _ = writeln!(out, "id: {}", result.id);
    let _ = writeln!(out, "primary key: {}", list_or_dash(&result.primary_key));
    let _ = writeln!(
        out,
        "guessed primary key: {}",
        list_or_dash(&result.guessed_primary_key)
    );
    out
}

/// Table of every supported PostgreSQL type with default parameters.
pub fn render_supported_types() -> String {
    let rendered: Vec<[String; 4]> = SourceType::all()
        .map(|ty| {
            let clickhouse = ty.clickhouse_base(0, 0, 0);
            [
                ty.name().to_string(),
                clickhouse.to_string(),
                ty.kafka_engine_base(0).to_string(),
                athena_type_name(&clickhouse),
            ]
        })
        .collect();

    let rows: Vec<[&str; 4]> = rendered
        .iter()
        .map(|row| [&*row[0], &*row[1], &*row[2], &*row[3]])
        .collect();

    format_rows(&["postgres", "clickhouse", "kafka_engine", "athena"], &rows)
}

fn format_rows<const N: usize>(header: &[&str; N], rows: &[[&str; N]]) -> String {
    let mut widths: [usize; N] = std::array::from_fn(|i| header[i].len());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(header).chain(rows) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    out
}

fn list_or_dash(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
