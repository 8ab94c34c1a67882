#![deny(missing_docs)]

//! # Resdoc CLI
//!
//! Command line wrapper around `resdoc-core`: reads a declarative API
//! description (YAML or JSON) and prints the derived documentation.
//!
//! The transformation itself lives entirely in the core library; this
//! binary only handles file IO and rendering.

use clap::{Parser, ValueEnum};
use resdoc_core::{build_document, ApiConfig};
use std::path::{Path, PathBuf};

mod error;

use error::{CliError, CliResult};

/// Output rendering of the derived document.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Derives API documentation from a route table and resource descriptors"
)]
struct Cli {
    /// API description file (.yaml/.yml or .json).
    input: PathBuf,

    /// Output format.
    #[clap(long, value_enum, default_value = "json")]
    format: Format,

    /// Write to a file instead of stdout.
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    run(&Cli::parse())
}

fn run(cli: &Cli) -> CliResult<()> {
    let raw = std::fs::read_to_string(&cli.input)?;
    let config = parse_config(&cli.input, &raw)?;
    let document = build_document(&config)?;

    let rendered = match cli.format {
        Format::Json => serde_json::to_string_pretty(&document)
            .map_err(|e| CliError::General(format!("failed to render JSON: {}", e)))?,
        Format::Yaml => serde_yaml::to_string(&document)
            .map_err(|e| CliError::General(format!("failed to render YAML: {}", e)))?,
    };

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn parse_config(path: &Path, raw: &str) -> CliResult<ApiConfig> {
    let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
    if is_json {
        serde_json::from_str(raw)
            .map_err(|e| CliError::General(format!("failed to parse {}: {}", path.display(), e)))
    } else {
        serde_yaml::from_str(raw)
            .map_err(|e| CliError::General(format!("failed to parse {}: {}", path.display(), e)))
    }
}
