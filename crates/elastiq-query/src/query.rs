//! Query building.
//!
//! Provides [`QueryBuilder`], which accumulates search intent through chained
//! calls and projects it into a [`QueryDocument`] on demand.
//!
//! A builder is a plain owned value: mutation goes through `&mut self`, so
//! sharing one across threads needs the caller's own synchronization.

use elastiq_core::{Error, Result};

use crate::document::{QueryBody, QueryDocument, TextQuery};
use crate::state::{BuilderState, PhraseMatch, TextClause, WordMatch};
use crate::types::{Fields, Limit, MatchOptions, Operator, Projection, SortSpec};

/// Fluent builder for Elasticsearch query documents.
///
/// Infallible setters return `&mut Self`; setters that validate their input
/// return `Result<&mut Self>` and leave the state untouched on error.
///
/// # Example
///
/// ```
/// use elastiq_query::{MatchOptions, Operator, QueryBuilder, SortClause};
///
/// let mut builder = QueryBuilder::new();
/// builder
///     .match_words_with("rust async", MatchOptions::new().operator(Operator::And))
///     .sort_by(SortClause::desc("published"))?
///     .start_from(20)
///     .limit_size(10);
///
/// let doc = builder.build();
/// assert_eq!(doc.from, Some(20));
/// assert_eq!(doc.size, Some(10));
/// # Ok::<(), elastiq_query::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    state: BuilderState,
}

impl QueryBuilder {
    /// Create a builder with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current builder state.
    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    /// Last text handed to a word or phrase match.
    pub fn text_query(&self) -> Option<&str> {
        self.state.text_query.as_deref()
    }

    /// Whether the active text clause is a phrase match.
    pub fn is_exact_phrase(&self) -> bool {
        self.state.exact_phrase
    }

    /// Active text clause, if any.
    pub fn clause(&self) -> Option<&TextClause> {
        self.state.clause.as_ref()
    }

    /// Recorded column projection.
    ///
    /// Tracked only; [`build`](Self::build) does not emit it.
    pub fn projection(&self) -> Option<&Projection> {
        self.state.projection.as_ref()
    }

    /// Match a set of words across all fields with the `OR` operator.
    ///
    /// An empty query matches every document.
    pub fn match_words(&mut self, query: impl Into<String>) -> &mut Self {
        self.match_words_with(query, MatchOptions::default())
    }

    /// Match a set of words with explicit fields, operator and clause kind.
    ///
    /// Replaces any previously configured text clause. An empty query
    /// yields `match_all` and ignores the options.
    pub fn match_words_with(
        &mut self,
        query: impl Into<String>,
        options: MatchOptions,
    ) -> &mut Self {
        let query = query.into();
        let clause = if query.is_empty() {
            TextClause::MatchAll
        } else {
            let operator = options.operator.unwrap_or_default();
            if !operator.is_standard() {
                log::warn!("Forwarding non-standard operator '{operator}' unchanged");
            }
            TextClause::Match(WordMatch {
                query: query.clone(),
                fields: options.fields,
                operator,
                multi_field: options.multi_field,
            })
        };
        self.replace_clause(query, false, clause);
        self
    }

    /// Match an exact phrase across all fields.
    ///
    /// Fails with [`Error::InvalidArgument`] if the phrase is empty or
    /// whitespace only.
    pub fn match_phrase(&mut self, query: impl Into<String>) -> Result<&mut Self> {
        self.set_phrase(query.into(), None)
    }

    /// Match an exact phrase on the given fields.
    pub fn match_phrase_on(
        &mut self,
        query: impl Into<String>,
        fields: impl Into<Fields>,
    ) -> Result<&mut Self> {
        self.set_phrase(query.into(), Some(fields.into()))
    }

    pub(crate) fn set_phrase(
        &mut self,
        query: String,
        fields: Option<Fields>,
    ) -> Result<&mut Self> {
        validate_phrase(&query)?;
        let clause = TextClause::MatchPhrase(PhraseMatch {
            query: query.clone(),
            fields,
        });
        self.replace_clause(query, true, clause);
        Ok(self)
    }

    /// Sort results by one sort object or a list of them.
    ///
    /// The spec is stored as given and wrapped into a list at build time.
    /// Fails with [`Error::InvalidArgument`] if it names no fields.
    pub fn sort_by(&mut self, spec: impl Into<SortSpec>) -> Result<&mut Self> {
        let spec = spec.into();
        validate_sort(&spec)?;
        log::trace!("Sort set to {spec:?}");
        self.state.sort = Some(spec);
        Ok(self)
    }

    /// Start returning hits from this index.
    ///
    /// `None` and zero both leave `from` out of the document.
    pub fn start_from(&mut self, offset: impl Into<Option<u64>>) -> &mut Self {
        let offset = offset.into().unwrap_or(0);
        log::trace!("Offset set to {offset}");
        self.state.offset = Some(offset);
        self
    }

    /// Return at most `size` hits. `None` and zero leave the engine default
    /// in place.
    pub fn limit_size(&mut self, size: impl Into<Option<u64>>) -> &mut Self {
        let limit = Limit::from(size.into());
        log::trace!("Limit set to {limit:?}");
        self.state.limit = Some(limit);
        self
    }

    /// Record the comma-separated columns to return. `None` or an empty
    /// string selects all fields.
    pub fn select_fields<'a>(&mut self, columns: impl Into<Option<&'a str>>) -> &mut Self {
        let projection = Projection::from(columns.into());
        log::trace!("Projection set to {projection:?}");
        self.state.projection = Some(projection);
        self
    }

    /// Combine clauses with a boolean AND. Not yet supported.
    pub fn and(&mut self) -> Result<&mut Self> {
        Err(Error::NotImplemented("boolean `and` composition"))
    }

    /// Combine clauses with a boolean OR. Not yet supported.
    pub fn or(&mut self) -> Result<&mut Self> {
        Err(Error::NotImplemented("boolean `or` composition"))
    }

    /// Negate a clause. Not yet supported.
    pub fn not(&mut self) -> Result<&mut Self> {
        Err(Error::NotImplemented("boolean `not` composition"))
    }

    /// Clear all state.
    pub fn reset(&mut self) -> &mut Self {
        log::debug!("Resetting query builder");
        self.state = BuilderState::default();
        self
    }

    /// Project the current state into a query document.
    ///
    /// Pure: the state is not modified and repeated calls return equal
    /// documents.
    pub fn build(&self) -> QueryDocument {
        let query = match &self.state.clause {
            None => QueryBody::Empty,
            Some(TextClause::MatchAll) => QueryBody::MatchAll,
            Some(TextClause::Match(word)) => {
                let text = TextQuery {
                    query: word.query.clone(),
                    default_operator: word.operator.clone(),
                    fields: attached_fields(word.fields.as_ref()),
                };
                if word.multi_field {
                    QueryBody::MultiMatch(text)
                } else {
                    QueryBody::QueryString(text)
                }
            }
            Some(TextClause::MatchPhrase(phrase)) => QueryBody::MatchPhrase(TextQuery {
                query: phrase.query.clone(),
                default_operator: Operator::And,
                fields: attached_fields(phrase.fields.as_ref()),
            }),
        };

        let size = match self.state.limit {
            Some(Limit::Count(n)) if n > 0 => Some(n),
            _ => None,
        };

        let doc = QueryDocument {
            query,
            sort: self.state.sort.as_ref().map(SortSpec::to_vec),
            from: self.state.offset.filter(|&offset| offset != 0),
            size,
        };
        log::debug!(
            "Built query: clause={}, sort={}, from={:?}, size={:?}",
            doc.query.key().unwrap_or("none"),
            doc.sort.as_ref().map_or(0, Vec::len),
            doc.from,
            doc.size
        );
        doc
    }

    fn replace_clause(&mut self, text: String, exact_phrase: bool, clause: TextClause) {
        if let Some(previous) = &self.state.clause {
            log::debug!(
                "Replacing {} clause with {}",
                previous.kind(),
                clause.kind()
            );
        }
        self.state.text_query = Some(text);
        self.state.exact_phrase = exact_phrase;
        self.state.clause = Some(clause);
    }
}

pub(crate) fn validate_phrase(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::invalid_argument(
            "query",
            "phrase must contain non-whitespace text",
        ));
    }
    Ok(())
}

pub(crate) fn validate_sort(spec: &SortSpec) -> Result<()> {
    if spec.is_empty() {
        return Err(Error::invalid_argument("fields", "sort fields are required"));
    }
    Ok(())
}

fn attached_fields(fields: Option<&Fields>) -> Option<Vec<String>> {
    fields.filter(|f| f.is_present()).map(Fields::to_vec)
}

// ============================================================================
// Tests
// ============================================================================
