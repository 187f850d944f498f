//! Accumulated builder state.
//!
//! [`BuilderState`] is everything a [`QueryBuilder`](crate::QueryBuilder)
//! has been told so far. The active text clause is a single
//! `Option<TextClause>`, so at most one text-matching strategy exists at a
//! time and replacing it is a plain assignment.

use crate::types::{Fields, Limit, Operator, Projection, SortSpec};

/// Parameters of a word match (`query_string` / `multi_match`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    /// Words to match. Never empty; an empty query becomes
    /// [`TextClause::MatchAll`].
    pub query: String,
    /// Fields to search. `None` searches all fields.
    pub fields: Option<Fields>,
    /// Operator between words.
    pub operator: Operator,
    /// Emit `multi_match` instead of `query_string`.
    pub multi_field: bool,
}

/// Parameters of an exact phrase match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Phrase to match. Never blank.
    pub query: String,
    /// Fields to search. `None` searches all fields.
    pub fields: Option<Fields>,
}

/// The active text-matching strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextClause {
    /// Match every document.
    MatchAll,
    /// Match a set of words.
    Match(WordMatch),
    /// Match an exact phrase.
    MatchPhrase(PhraseMatch),
}

impl TextClause {
    /// Short name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            TextClause::MatchAll => "match_all",
            TextClause::Match(m) if m.multi_field => "multi_match",
            TextClause::Match(_) => "query_string",
            TextClause::MatchPhrase(_) => "match_phrase",
        }
    }
}

/// Builder state, empty at construction and after a reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderState {
    /// Last text handed to a word or phrase match.
    pub text_query: Option<String>,
    /// Whether the active text clause is a phrase match.
    pub exact_phrase: bool,
    /// Active text clause, if any.
    pub clause: Option<TextClause>,
    /// Sort specification as supplied.
    pub sort: Option<SortSpec>,
    /// Index of the first hit to return.
    pub offset: Option<u64>,
    /// Number of hits to return.
    pub limit: Option<Limit>,
    /// Columns to return per hit.
    pub projection: Option<Projection>,
}

impl BuilderState {
    /// Whether nothing has been configured.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
