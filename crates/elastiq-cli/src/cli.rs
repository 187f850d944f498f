//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use elastiq_query::SortClause;

/// Elastiq - build Elasticsearch query documents
#[derive(Parser, Debug)]
#[command(name = "elastiq")]
#[command(author, version, about = "Build Elasticsearch query documents", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the query document for an intent file and/or flags
    Build(BuildArgs),

    /// Check that an intent file loads and applies cleanly
    Validate {
        /// Intent file (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        intent: PathBuf,
    },
}

/// Arguments of `elastiq build`. Flags override values from the intent file.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Intent file (TOML, or JSON with a .json extension)
    #[arg(short, long, env = "ELASTIQ_INTENT")]
    pub intent: Option<PathBuf>,

    /// Words to match; an empty string matches every document
    #[arg(long = "match", value_name = "QUERY", conflicts_with = "phrase")]
    pub match_words: Option<String>,

    /// Exact phrase to match
    #[arg(long, value_name = "PHRASE")]
    pub phrase: Option<String>,

    /// Comma-separated fields to search
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Operator between words (AND or OR)
    #[arg(long)]
    pub operator: Option<String>,

    /// Emit multi_match instead of query_string
    #[arg(long)]
    pub multi_field: bool,

    /// Sort by FIELD or FIELD:asc|desc (repeatable)
    #[arg(long = "sort", value_name = "FIELD[:ORDER]")]
    pub sort: Vec<SortClause>,

    /// Index of the first hit
    #[arg(long)]
    pub from: Option<u64>,

    /// Maximum number of hits
    #[arg(long)]
    pub size: Option<u64>,

    /// Comma-separated columns to return
    #[arg(long)]
    pub columns: Option<String>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}
