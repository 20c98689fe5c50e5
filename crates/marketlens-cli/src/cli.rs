//! CLI argument definitions for marketlens.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Search the catalog and print one page of ranked results |
//! | `catalog` | Inspect the catalog snapshot |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--store-path` | `.marketlens/cache.json` | Location of the cache store |
//!
//! # Examples
//!
//! ```bash
//! # Search by name
//! marketlens search gold
//!
//! # Page through results of a venue search
//! marketlens search chain --page 2 --pretty
//!
//! # Inspect the snapshot in table form
//! marketlens catalog --format table
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Marketlens - cached instrument search CLI
///
/// Incremental search over a fixed catalog of tradable items, ranked by
/// market and price deviation, with a 14-day expiring cache for both the
/// dataset snapshot and each distinct search term.
#[derive(Debug, Parser)]
#[command(
    name = "marketlens",
    author,
    version,
    about = "Cached instrument search CLI"
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON object (default)
    /// - ndjson: One JSON object per line
    /// - table: Human-readable terminal output
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Location of the persistent cache store file.
    #[arg(long, global = true, default_value = ".marketlens/cache.json")]
    pub store_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the catalog by name or venue type.
    ///
    /// Terms shorter than 2 characters return no results by design. Results
    /// are ranked by market code, then by how close the previous traded
    /// price sits to the high, and served in pages of 15.
    ///
    /// # Examples
    ///
    ///   marketlens search gold
    ///   marketlens search offchain --page 2
    Search(SearchArgs),

    /// Inspect the catalog snapshot.
    ///
    /// Loads the snapshot (seeding it from the static source if no fresh
    /// cache entry exists) and prints summary counts.
    ///
    /// # Examples
    ///
    ///   marketlens catalog
    ///   marketlens catalog --verbose
    Catalog(CatalogArgs),
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search term, matched case-insensitively against item names and venue
    /// types.
    pub term: String,

    /// 1-based result page to print.
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

/// Arguments for the `catalog` command.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Include the full item list in the output.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
