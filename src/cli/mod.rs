//! Command-line front end for the json2sql binary

pub mod commands;
pub mod error;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use commands::run;
pub use error::CliError;
pub use output::OutputFormat;

/// Infer a PostgreSQL schema and a Mermaid ER diagram from example JSON
#[derive(Parser, Debug)]
#[command(name = "json2sql", version, about)]
pub struct Cli {
    /// Log discovery decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the SQL schema and ER diagram
    Convert(ConvertArgs),
    /// Generate only the ER diagram
    Diagram(InputArgs),
    /// List the built-in example documents
    Examples,
    /// Pretty-print a JSON document
    Format(InputArgs),
}

/// Where to read the JSON document from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON file to read, or `-` for stdin (default)
    pub input: Option<String>,

    /// Use a built-in example instead of a file
    #[arg(short, long)]
    pub example: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// TOML file with addTimestamps / addPrimaryKey / useSnakeCase
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not add created_at / updated_at columns and indexes
    #[arg(long)]
    pub no_timestamps: bool,

    /// Do not add an id SERIAL PRIMARY KEY column
    #[arg(long)]
    pub no_primary_key: bool,

    /// Keep identifiers exactly as written in the document
    #[arg(long)]
    pub no_snake_case: bool,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Both)]
    pub output: OutputFormat,
}
