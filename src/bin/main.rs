//! psql2ch CLI - Convert PostgreSQL column lists to ClickHouse and Athena
//!
//! Usage:
//!   psql2ch convert [file] [--format json|pretty|table] [--key-suffix <suffix>] [--no-guess]
//!   psql2ch types
//!   psql2ch athena <clickhouse_type>
//!
//! Examples:
//!   psql2ch convert demos/product_history_change.json --format table
//!   cat columns.toml | psql2ch convert -
//!   psql2ch athena "Nullable(Decimal(18, 2))"

use clap::{Parser, Subcommand};
use log::{debug, info, LevelFilter};
use psql2ch::config::{OutputFormat, Settings};
use psql2ch::convert::{ConvertOptions, SchemaConverter};
use psql2ch::input;
use psql2ch::render;
use psql2ch::source::SourceColumn;
use psql2ch::types::{clickhouse_to_athena, is_sentinel};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "psql2ch")]
#[command(about = "psql2ch - Convert PostgreSQL column schemas to ClickHouse, Kafka engine and Athena")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to $PSQL2CH_CONFIG or ./psql2ch.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a column list
    Convert {
        /// JSON or TOML column list, stdin if omitted or "-"
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Suffix of guessed primary key columns
        #[arg(long)]
        key_suffix: Option<String>,

        /// Do not guess a primary key
        #[arg(long)]
        no_guess: bool,
    },

    /// List supported PostgreSQL types
    Types,

    /// Map one ClickHouse type to Athena
    Athena {
        /// ClickHouse type, e.g. "Nullable(Int32)"
        clickhouse_type: String,
    },
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    } else if env::var("RUST_LOG").is_err() {
        builder.filter_level(LevelFilter::Warn);
    }
    let _ = builder.format_timestamp(None).try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            file,
            format,
            key_suffix,
            no_guess,
        } => cmd_convert(cli.config, file, format, key_suffix, no_guess),
        Commands::Types => cmd_types(),
        Commands::Athena { clickhouse_type } => cmd_athena(&clickhouse_type),
    }
}

fn load_settings(path: Option<PathBuf>) -> Result<Settings, String> {
    let settings = match &path {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    settings.map_err(|e| e.to_string())
}

fn read_input(file: Option<PathBuf>) -> Result<Vec<SourceColumn>, String> {
    let columns = match &file {
        Some(path) if path.as_os_str() != "-" => {
            debug!("Reading columns from {}", path.display());
            input::read_columns_file(path)
        }
        _ => {
            debug!("Reading columns from stdin");
            input::read_columns(io::stdin().lock())
        }
    };
    columns.map_err(|e| e.to_string())
}

fn cmd_convert(
    config: Option<PathBuf>,
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    key_suffix: Option<String>,
    no_guess: bool,
) -> ExitCode {
    let settings = match load_settings(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let columns = match read_input(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading columns: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut options = ConvertOptions::from_settings(&settings);
    if let Some(suffix) = key_suffix {
        options = options.with_key_suffix(suffix);
    }
    if no_guess {
        options = options.with_guessing(false);
    }
    let format = format.unwrap_or(settings.output.format);

    let result = match SchemaConverter::new(options).convert(&columns) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Conversion error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Converted {} column(s), primary key [{}], guessed [{}]",
        result.len(),
        result.primary_key.join(", "),
        result.guessed_primary_key.join(", ")
    );

    match render::render(&result, format) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_types() -> ExitCode {
    print!("{}", render::render_supported_types());
    ExitCode::SUCCESS
}

fn cmd_athena(clickhouse_type: &str) -> ExitCode {
    let athena = clickhouse_to_athena(clickhouse_type);
    println!("{}", athena);
    if is_sentinel(&athena) {
        eprintln!("No Athena type for '{}'", clickhouse_type);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
