//! Fluent builder for Elasticsearch query documents.
//!
//! This crate turns a handful of search intents (word match, exact phrase
//! match, sort, paging, projection) into the nested request body the search
//! engine expects. It performs no I/O apart from loading intent files.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      elastiq-query                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  QueryBuilder (fluent setters, build)                       │
//! │  └── BuilderState (one active TextClause at a time)         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  QueryDocument (serialized request body)                    │
//! │  SearchIntent (TOML/JSON description of a query)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Clause selection
//!
//! | Active clause | multi-field | Emitted key | Operator |
//! |---------------|-------------|-------------|----------|
//! | match all | n/a | `match_all: {}` | none |
//! | word match | no | `query_string` | `AND` / `OR` |
//! | word match | yes | `multi_match` | `AND` / `OR` |
//! | phrase match | n/a | `match_phrase` | always `AND` |
//!
//! # Example
//!
//! ```rust
//! use elastiq_query::{MatchOptions, QueryBuilder, SortClause};
//!
//! let mut builder = QueryBuilder::new();
//! builder
//!     .match_words_with("test", MatchOptions::new().on_fields("name").operator("AND"))
//!     .sort_by(SortClause::asc("country"))?;
//!
//! assert_eq!(
//!     builder.build().to_json()?,
//!     r#"{"query":{"query_string":{"query":"test","default_operator":"AND","fields":["name"]}},"sort":[{"country":"asc"}]}"#
//! );
//! # Ok::<(), elastiq_query::Error>(())
//! ```

pub mod document;
pub mod intent;
pub mod query;
pub mod state;
pub mod types;

mod proptests;

// Re-exports
pub use document::{QueryBody, QueryDocument, TextQuery};
pub use elastiq_core::{Error, Result};
pub use intent::{MatchIntent, PhraseIntent, SearchIntent};
pub use query::QueryBuilder;
pub use state::{BuilderState, PhraseMatch, TextClause, WordMatch};
pub use types::{Fields, Limit, MatchOptions, Operator, Projection, SortClause, SortOrder, SortSpec};
