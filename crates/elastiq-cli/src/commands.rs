//! Handler functions for CLI commands.
//!
//! `build` merges command-line flags over an optional intent file and prints
//! the resulting query document; `validate` only checks that an intent file
//! applies cleanly.

use std::path::Path;

use elastiq_core::{Error, Result};
use elastiq_query::{MatchIntent, PhraseIntent, QueryBuilder, QueryDocument, SearchIntent, SortSpec};
use serde_json::Value;
use tracing::debug;

use crate::cli::{BuildArgs, Cli, Command};

// ============================================================================
// Command dispatch
// ============================================================================

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build(args) => cmd_build(&args),
        Command::Validate { intent } => cmd_validate(&intent),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Print the query document for the given arguments.
pub fn cmd_build(args: &BuildArgs) -> Result<()> {
    let doc = build_document(args)?;
    let output = if args.pretty {
        doc.to_json_pretty()?
    } else {
        doc.to_json()?
    };
    println!("{output}");
    Ok(())
}

/// Load and apply an intent file, reporting success on stdout.
pub fn cmd_validate(path: &Path) -> Result<()> {
    let intent = SearchIntent::from_path(path)?;
    QueryBuilder::from_intent(&intent)?;
    println!("ok");
    Ok(())
}

/// Build the query document described by the arguments.
pub fn build_document(args: &BuildArgs) -> Result<QueryDocument> {
    let intent = resolve_intent(args)?;
    debug!(?intent, "Resolved search intent");
    Ok(QueryBuilder::from_intent(&intent)?.build())
}

/// Merge command-line flags over the intent file, if one was given.
pub fn resolve_intent(args: &BuildArgs) -> Result<SearchIntent> {
    let mut intent = match &args.intent {
        Some(path) => SearchIntent::from_path(path)?,
        None => SearchIntent::default(),
    };

    // A text flag of the same kind keeps the file's fields and options.
    if let Some(query) = &args.match_words {
        intent.phrase = None;
        intent.match_words.get_or_insert_with(MatchIntent::default).query =
            Value::String(query.clone());
    }
    if let Some(phrase) = &args.phrase {
        intent.match_words = None;
        intent.phrase.get_or_insert_with(PhraseIntent::default).query =
            Value::String(phrase.clone());
    }

    let fields: Vec<String> = args
        .fields
        .iter()
        .filter(|field| !field.is_empty())
        .cloned()
        .collect();
    if !fields.is_empty() {
        let fields = Value::from(fields);
        match (&mut intent.match_words, &mut intent.phrase) {
            (Some(words), _) => words.fields = fields,
            (None, Some(phrase)) => phrase.fields = fields,
            (None, None) => {
                return Err(Error::config(
                    "--fields needs --match, --phrase, or an intent with a text section",
                ));
            }
        }
    }

    if args.operator.is_some() || args.multi_field {
        let Some(words) = &mut intent.match_words else {
            return Err(Error::config(
                "--operator and --multi-field only apply to a word match",
            ));
        };
        if let Some(operator) = &args.operator {
            words.operator = Value::String(operator.clone());
        }
        if args.multi_field {
            words.multi_field = Value::Bool(true);
        }
    }

    if !args.sort.is_empty() {
        intent.sort = Some(SortSpec::Many(args.sort.clone()));
    }
    if args.from.is_some() {
        intent.from = args.from;
    }
    if args.size.is_some() {
        intent.size = args.size;
    }
    if args.columns.is_some() {
        intent.columns = args.columns.clone();
    }

    Ok(intent)
}

// ============================================================================
// Tests
// ============================================================================
