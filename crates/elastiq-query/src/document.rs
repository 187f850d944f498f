//! Query document emitted by [`QueryBuilder::build`](crate::QueryBuilder::build).
//!
//! The document mirrors the Elasticsearch request body:
//!
//! ```text
//! {
//!   "query": { "match_all": {} | "query_string": {..} | "multi_match": {..} | "match_phrase": {..} },
//!   "sort":  [ {"field": "asc"}, ... ],
//!   "from":  10,
//!   "size":  20
//! }
//! ```
//!
//! Keys are serialized in the order shown; optional parts are omitted when
//! unset.

use elastiq_core::Result;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::types::{Operator, SortClause};

/// Body of a `query_string`, `multi_match` or `match_phrase` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextQuery {
    /// Text to match.
    pub query: String,
    /// Operator between words.
    pub default_operator: Operator,
    /// Fields to search, omitted when searching all fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Content of the top-level `query` object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryBody {
    /// No text clause: `{}`.
    #[default]
    Empty,
    /// `{"match_all": {}}`
    MatchAll,
    /// `{"query_string": {..}}`
    QueryString(TextQuery),
    /// `{"multi_match": {..}}`
    MultiMatch(TextQuery),
    /// `{"match_phrase": {..}}`
    MatchPhrase(TextQuery),
}

impl QueryBody {
    /// Key the clause is emitted under, or `None` for an empty query.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            QueryBody::Empty => None,
            QueryBody::MatchAll => Some("match_all"),
            QueryBody::QueryString(_) => Some("query_string"),
            QueryBody::MultiMatch(_) => Some("multi_match"),
            QueryBody::MatchPhrase(_) => Some("match_phrase"),
        }
    }

    /// Body of a text clause, if one is present.
    pub fn text(&self) -> Option<&TextQuery> {
        match self {
            QueryBody::QueryString(text)
            | QueryBody::MultiMatch(text)
            | QueryBody::MatchPhrase(text) => Some(text),
            QueryBody::Empty | QueryBody::MatchAll => None,
        }
    }
}

#[derive(Serialize)]
struct EmptyObject {}

impl Serialize for QueryBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let Some(key) = self.key() else {
            return serializer.serialize_map(Some(0))?.end();
        };
        let mut map = serializer.serialize_map(Some(1))?;
        match self.text() {
            Some(text) => map.serialize_entry(key, text)?,
            None => map.serialize_entry(key, &EmptyObject {})?,
        }
        map.end()
    }
}

/// A complete search request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QueryDocument {
    /// The text clause.
    pub query: QueryBody,

    /// Sort objects, applied in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortClause>>,

    /// Index of the first hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,

    /// Maximum number of hits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl QueryDocument {
    /// Convert to a `serde_json::Value`.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
