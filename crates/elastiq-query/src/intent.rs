//! Declarative search intents.
//!
//! A [`SearchIntent`] describes a whole query as data, so it can be kept in a
//! TOML or JSON file and replayed onto a [`QueryBuilder`]:
//!
//! ```toml
//! from = 10
//! size = 20
//! columns = "title,author"
//!
//! [match]
//! query = "rust"
//! fields = ["title", "body"]
//! operator = "AND"
//! multi_field = true
//!
//! [[sort]]
//! published = "desc"
//! ```
//!
//! Text arguments are kept as raw JSON values and checked when the intent is
//! applied, since a file can hold any value where a string belongs:
//!
//! - a match `query` must be a string; absent or `null` matches everything
//! - a phrase `query` must be a non-blank string
//! - an `operator` is rejected only when it is truthy and not a string;
//!   falsy values mean `OR`, and any string is forwarded
//! - `fields` may be falsy (search all fields), a name, or a list of names

use std::path::Path;

use elastiq_core::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::query::{QueryBuilder, validate_phrase, validate_sort};
use crate::types::{Fields, MatchOptions, Operator, SortSpec};

/// Word-match section of an intent (`[match]`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchIntent {
    /// Words to match.
    #[serde(default)]
    pub query: Value,

    /// Field name or list of field names.
    #[serde(default)]
    pub fields: Value,

    /// `"AND"` or `"OR"`.
    #[serde(default)]
    pub operator: Value,

    /// Emit `multi_match` instead of `query_string` when truthy.
    #[serde(default)]
    pub multi_field: Value,
}

/// Phrase-match section of an intent (`[phrase]`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhraseIntent {
    /// Exact phrase to match.
    #[serde(default)]
    pub query: Value,

    /// Field name or list of field names.
    #[serde(default)]
    pub fields: Value,
}

/// A complete query described as data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchIntent {
    /// Word match. Mutually exclusive with `phrase`.
    #[serde(default, rename = "match")]
    pub match_words: Option<MatchIntent>,

    /// Phrase match. Mutually exclusive with `match`.
    #[serde(default)]
    pub phrase: Option<PhraseIntent>,

    /// One sort object or a list of them.
    #[serde(default)]
    pub sort: Option<SortSpec>,

    /// Index of the first hit.
    #[serde(default)]
    pub from: Option<u64>,

    /// Maximum number of hits.
    #[serde(default)]
    pub size: Option<u64>,

    /// Comma-separated columns to return.
    #[serde(default)]
    pub columns: Option<String>,
}

enum TextIntent {
    Words(String, MatchOptions),
    Phrase(String, Option<Fields>),
}

impl SearchIntent {
    /// Parse an intent from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse an intent from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load an intent file. `.json` files are read as JSON, anything else
    /// as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        log::debug!(
            "Loading {} intent from {}",
            if is_json { "JSON" } else { "TOML" },
            path.display()
        );
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Replay the intent onto a builder.
    ///
    /// Every part is validated before the builder is touched, so a failing
    /// intent leaves it unchanged.
    pub fn apply(&self, builder: &mut QueryBuilder) -> Result<()> {
        let text = self.resolve_text()?;
        if let Some(sort) = &self.sort {
            validate_sort(sort)?;
        }

        match text {
            Some(TextIntent::Words(query, options)) => {
                builder.match_words_with(query, options);
            }
            Some(TextIntent::Phrase(query, fields)) => {
                builder.set_phrase(query, fields)?;
            }
            None => {}
        }
        if let Some(sort) = &self.sort {
            builder.sort_by(sort.clone())?;
        }
        if let Some(from) = self.from {
            builder.start_from(from);
        }
        if let Some(size) = self.size {
            builder.limit_size(size);
        }
        if let Some(columns) = &self.columns {
            builder.select_fields(columns.as_str());
        }
        Ok(())
    }

    fn resolve_text(&self) -> Result<Option<TextIntent>> {
        match (&self.match_words, &self.phrase) {
            (Some(_), Some(_)) => Err(Error::invalid_argument(
                "phrase",
                "`match` and `phrase` are mutually exclusive",
            )),
            (Some(words), None) => {
                let query = match &words.query {
                    Value::Null => String::new(),
                    Value::String(s) => s.clone(),
                    _ => return Err(Error::invalid_argument("query", "query must be a string")),
                };
                let mut options = MatchOptions::new().multi_field(is_truthy(&words.multi_field));
                options.fields = fields_arg(&words.fields)?;
                options.operator = operator_arg(&words.operator)?;
                Ok(Some(TextIntent::Words(query, options)))
            }
            (None, Some(phrase)) => {
                let Value::String(query) = &phrase.query else {
                    return Err(Error::invalid_argument("query", "invalid phrase query"));
                };
                validate_phrase(query)?;
                let fields = fields_arg(&phrase.fields)?;
                Ok(Some(TextIntent::Phrase(query.clone(), fields)))
            }
            (None, None) => Ok(None),
        }
    }
}

impl QueryBuilder {
    /// Create a builder configured from an intent.
    pub fn from_intent(intent: &SearchIntent) -> Result<Self> {
        let mut builder = Self::new();
        intent.apply(&mut builder)?;
        Ok(builder)
    }
}

/// Truthiness of a loosely typed argument: `null`, `false`, `0` and `""` are
/// falsy, everything else (including empty lists and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Interpret a loosely typed operator argument.
///
/// Falsy values yield `None` (the caller falls back to `OR`). Strings are
/// accepted as-is. Any other truthy value is an invalid argument.
pub fn operator_arg(value: &Value) -> Result<Option<Operator>> {
    if !is_truthy(value) {
        return Ok(None);
    }
    match value {
        Value::String(s) => Ok(Some(Operator::from(s.as_str()))),
        _ => Err(Error::invalid_argument("operator", "operator must be AND or OR")),
    }
}

/// Interpret a loosely typed fields argument.
pub fn fields_arg(value: &Value) -> Result<Option<Fields>> {
    if !is_truthy(value) {
        return Ok(None);
    }
    match value {
        Value::String(name) => Ok(Some(Fields::One(name.clone()))),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(name.clone()),
                _ => Err(Error::invalid_argument(
                    "fields",
                    "field names must be strings",
                )),
            })
            .collect::<Result<Vec<_>>>()
            .map(|names| Some(Fields::Many(names))),
        _ => Err(Error::invalid_argument(
            "fields",
            "fields must be a field name or a list of field names",
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
