//! `flatjson` CLI: parse, serialize, reformat and validate flat JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Flat JSON to pretty-printed standard JSON (stdin → stdout)
//! echo '{"name": "John", "age": 30}' | flatjson parse
//!
//! # Standard JSON object to canonical flat JSON, file to file
//! flatjson serialize -i data.json -o data.flat
//!
//! # Rewrite flat JSON in canonical form
//! flatjson format -i data.flat
//!
//! # Validate; reports the line and column of the first error
//! flatjson check -i data.flat
//!
//! # More logging on stderr
//! flatjson -vv check -i data.flat
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use flatjson_core::Document;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "flatjson",
    version,
    about = "Parse and serialize flat JSON objects of strings and numbers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse flat JSON and print it as pretty-printed standard JSON
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Serialize a standard JSON object into canonical flat JSON
    Serialize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Rewrite flat JSON in canonical form
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate flat JSON and report the number of keys
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Parse { input, output } => {
            let bytes = read_input(input.as_deref())?;
            let doc = parse_document(&bytes)?;
            let pretty = serde_json::to_string_pretty(&doc)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Serialize { input, output } => {
            let bytes = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_slice(&bytes).context("Failed to read input as JSON")?;
            let doc = Document::try_from(&value).context("Failed to serialize flat JSON")?;
            let text =
                flatjson_core::serialize(&doc).context("Failed to serialize flat JSON")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Format { input, output } => {
            let bytes = read_input(input.as_deref())?;
            let doc = parse_document(&bytes)?;
            let canonical =
                flatjson_core::serialize(&doc).context("Failed to serialize flat JSON")?;
            tracing::info!(before = bytes.len(), after = canonical.len(), "reformatted");
            write_output(output.as_deref(), &canonical)?;
        }
        Commands::Check { input } => {
            let bytes = read_input(input.as_deref())?;
            let doc = parse_document(&bytes)?;
            println!("ok: {} keys", doc.len());
        }
    }

    Ok(())
}

/// Parse flat JSON, attaching the line and column of any failure.
///
/// Input is taken as raw bytes so that non-UTF-8 input is reported by the
/// parser itself rather than by the reader.
fn parse_document(bytes: &[u8]) -> Result<Document> {
    flatjson_core::parse_bytes(bytes)
        .map_err(|err| {
            let (line, column) = err.location(&String::from_utf8_lossy(bytes));
            anyhow!("line {line}, column {column}: {err}")
        })
        .context("Failed to parse flat JSON")
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let bytes = match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    tracing::debug!(bytes = bytes.len(), source = path.unwrap_or("stdin"), "read input");
    Ok(bytes)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
