//! Value types accepted by the query builder.
//!
//! These map one-to-one onto pieces of the Elasticsearch query DSL: the
//! `default_operator` of a text clause, the `fields` list, the `sort`
//! array, and the paging/projection knobs.

use std::fmt;
use std::str::FromStr;

use elastiq_core::Error;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Operator
// ============================================================================

/// Operator placed between the words of a text clause.
///
/// Anything other than `AND` / `OR` is forwarded untouched as
/// [`Operator::Verbatim`] and left for the search engine to reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// All words must match.
    And,
    /// Any word may match.
    #[default]
    Or,
    /// An operator string passed through as-is.
    Verbatim(String),
}

impl Operator {
    /// Wire representation of the operator.
    pub fn as_str(&self) -> &str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Verbatim(s) => s,
        }
    }

    /// Returns `true` for `AND` and `OR`.
    pub fn is_standard(&self) -> bool {
        !matches!(self, Operator::Verbatim(_))
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        match s {
            "AND" => Operator::And,
            "OR" => Operator::Or,
            other => Operator::Verbatim(other.to_string()),
        }
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        match s.as_str() {
            "AND" => Operator::And,
            "OR" => Operator::Or,
            _ => Operator::Verbatim(s),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Field names a text clause is restricted to.
///
/// A single name is normalized to a one-element list on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fields {
    /// A single field name.
    One(String),
    /// A list of field names, emitted as given.
    Many(Vec<String>),
}

impl Fields {
    /// Whether the fields should be attached to the output clause.
    ///
    /// An empty single name counts as absent; a list is always attached,
    /// even when empty.
    pub fn is_present(&self) -> bool {
        match self {
            Fields::One(name) => !name.is_empty(),
            Fields::Many(_) => true,
        }
    }

    /// Normalize to a list of field names.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Fields::One(name) => vec![name.clone()],
            Fields::Many(names) => names.clone(),
        }
    }
}

impl From<&str> for Fields {
    fn from(name: &str) -> Self {
        Fields::One(name.to_string())
    }
}

impl From<String> for Fields {
    fn from(name: String) -> Self {
        Fields::One(name)
    }
}

impl From<Vec<String>> for Fields {
    fn from(names: Vec<String>) -> Self {
        Fields::Many(names)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(names: Vec<&str>) -> Self {
        Fields::Many(names.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(names: [&str; N]) -> Self {
        Fields::Many(names.iter().map(|s| s.to_string()).collect())
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort direction for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire representation of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(Error::invalid_argument(
                "sort",
                format!("sort order must be asc or desc, got '{s}'"),
            )),
        }
    }
}

/// One sort object: an ordered mapping of field name to direction.
///
/// Serializes as `{"field": "asc", ...}` with entries in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortClause(Vec<(String, SortOrder)>);

impl SortClause {
    /// Create an empty sort clause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort clause on a single field, ascending.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new().field(field, SortOrder::Asc)
    }

    /// Sort clause on a single field, descending.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new().field(field, SortOrder::Desc)
    }

    /// Add a field to the clause. Re-adding a field replaces its direction.
    pub fn field(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        let field = field.into();
        match self.0.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = order,
            None => self.0.push((field, order)),
        }
        self
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(String, SortOrder)] {
        &self.0
    }

    /// Number of fields in the clause.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the clause names no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for SortClause {
    type Err = Error;

    /// Parse `field:order`, or a bare `field` meaning ascending.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (field, order) = match s.split_once(':') {
            Some((field, order)) => (field.trim(), order.trim().parse()?),
            None => (s.trim(), SortOrder::Asc),
        };
        if field.is_empty() {
            return Err(Error::invalid_argument(
                "sort",
                format!("missing field name in '{s}'"),
            ));
        }
        Ok(Self::new().field(field, order))
    }
}

impl Serialize for SortClause {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, order) in &self.0 {
            map.serialize_entry(field, order)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SortClause {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SortClauseVisitor;

        impl<'de> Visitor<'de> for SortClauseVisitor {
            type Value = SortClause;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to \"asc\" or \"desc\"")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<SortClause, A::Error> {
                let mut clause = SortClause::new();
                while let Some((field, order)) = map.next_entry::<String, SortOrder>()? {
                    clause = clause.field(field, order);
                }
                Ok(clause)
            }
        }

        deserializer.deserialize_map(SortClauseVisitor)
    }
}

/// Sort specification as handed to `sort_by`: one clause or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortSpec {
    /// A single sort object.
    One(SortClause),
    /// A list of sort objects, applied in order.
    Many(Vec<SortClause>),
}

impl SortSpec {
    /// Whether the spec carries nothing to sort on.
    pub fn is_empty(&self) -> bool {
        match self {
            SortSpec::One(clause) => clause.is_empty(),
            SortSpec::Many(clauses) => clauses.is_empty(),
        }
    }

    /// Normalize to a list of sort objects.
    pub fn to_vec(&self) -> Vec<SortClause> {
        match self {
            SortSpec::One(clause) => vec![clause.clone()],
            SortSpec::Many(clauses) => clauses.clone(),
        }
    }
}

impl From<SortClause> for SortSpec {
    fn from(clause: SortClause) -> Self {
        SortSpec::One(clause)
    }
}

impl From<Vec<SortClause>> for SortSpec {
    fn from(clauses: Vec<SortClause>) -> Self {
        SortSpec::Many(clauses)
    }
}

// ============================================================================
// Paging and projection
// ============================================================================

/// Number of hits to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Let the engine apply its default page size.
    Unbounded,
    /// Return at most this many hits.
    Count(u64),
}

impl From<Option<u64>> for Limit {
    fn from(size: Option<u64>) -> Self {
        match size {
            Some(0) | None => Limit::Unbounded,
            Some(n) => Limit::Count(n),
        }
    }
}

/// Columns to return for each hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Return every stored field.
    All,
    /// Comma-separated list of columns.
    Columns(String),
}

impl Projection {
    /// Individual column names, trimmed, with empty entries dropped.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            Projection::All => Vec::new(),
            Projection::Columns(spec) => spec
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .collect(),
        }
    }
}

impl From<Option<&str>> for Projection {
    fn from(columns: Option<&str>) -> Self {
        match columns {
            Some(spec) if !spec.is_empty() => Projection::Columns(spec.to_string()),
            _ => Projection::All,
        }
    }
}

// ============================================================================
// Match options
// ============================================================================

/// Optional parameters of a word match.
///
/// # Example
///
/// ```
/// use elastiq_query::{MatchOptions, Operator};
///
/// let options = MatchOptions::new()
///     .on_fields(["title", "body"])
///     .operator(Operator::And)
///     .multi_field(true);
/// assert!(options.multi_field);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Restrict the match to these fields. `None` searches all fields.
    pub fields: Option<Fields>,
    /// Operator between words. `None` means `OR`.
    pub operator: Option<Operator>,
    /// Emit `multi_match` instead of `query_string`.
    pub multi_field: bool,
}

impl MatchOptions {
    /// Options with every parameter at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the match to the given fields.
    pub fn on_fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Set the operator between words.
    pub fn operator(mut self, operator: impl Into<Operator>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Choose between `multi_match` (`true`) and `query_string` (`false`).
    pub fn multi_field(mut self, multi_field: bool) -> Self {
        self.multi_field = multi_field;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Operator tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_operator_default_is_or() {
        assert_eq!(Operator::default(), Operator::Or);
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!(Operator::from("AND"), Operator::And);
        assert_eq!(Operator::from("OR"), Operator::Or);
        assert_eq!(Operator::from("and"), Operator::Verbatim("and".to_string()));
    }

    #[test]
    fn test_operator_serialization() {
        assert_eq!(serde_json::to_string(&Operator::And).unwrap(), "\"AND\"");
        assert_eq!(
            serde_json::to_string(&Operator::Verbatim("XOR".into())).unwrap(),
            "\"XOR\""
        );
        assert!(!Operator::from("XOR").is_standard());
    }

    // ------------------------------------------------------------------------
    // Fields tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_fields_normalization() {
        assert_eq!(Fields::from("name").to_vec(), vec!["name".to_string()]);
        assert_eq!(
            Fields::from(["name", "age"]).to_vec(),
            vec!["name".to_string(), "age".to_string()]
        );
    }

    #[test]
    fn test_fields_presence() {
        assert!(Fields::from("name").is_present());
        assert!(!Fields::from("").is_present());
        assert!(Fields::Many(Vec::new()).is_present());
    }

    #[test]
    fn test_fields_deserialization() {
        let one: Fields = serde_json::from_str("\"name\"").unwrap();
        assert_eq!(one, Fields::One("name".into()));
        let many: Fields = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(many, Fields::from(vec!["a", "b"]));
    }

    // ------------------------------------------------------------------------
    // Sort tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!(
            "sideways"
                .parse::<SortOrder>()
                .unwrap_err()
                .is_invalid_argument()
        );
    }

    #[test]
    fn test_sort_clause_preserves_insertion_order() {
        let clause = SortClause::new()
            .field("zeta", SortOrder::Asc)
            .field("alpha", SortOrder::Desc);
        assert_eq!(
            serde_json::to_string(&clause).unwrap(),
            r#"{"zeta":"asc","alpha":"desc"}"#
        );
    }

    #[test]
    fn test_sort_clause_replaces_duplicate_field() {
        let clause = SortClause::asc("country").field("country", SortOrder::Desc);
        assert_eq!(clause.len(), 1);
        assert_eq!(clause.entries()[0].1, SortOrder::Desc);
    }

    #[test]
    fn test_sort_clause_from_str() {
        let clause: SortClause = "published:desc".parse().unwrap();
        assert_eq!(clause, SortClause::desc("published"));
        let bare: SortClause = "country".parse().unwrap();
        assert_eq!(bare, SortClause::asc("country"));
        assert!(":asc".parse::<SortClause>().is_err());
        assert!("country:up".parse::<SortClause>().is_err());
    }

    #[test]
    fn test_sort_spec_deserialization() {
        let one: SortSpec = serde_json::from_str(r#"{"country": "asc"}"#).unwrap();
        assert_eq!(one, SortSpec::One(SortClause::asc("country")));

        let many: SortSpec =
            serde_json::from_str(r#"[{"country": "asc"}, {"age": "desc"}]"#).unwrap();
        assert_eq!(
            many,
            SortSpec::Many(vec![SortClause::asc("country"), SortClause::desc("age")])
        );
    }

    #[test]
    fn test_sort_spec_emptiness() {
        assert!(SortSpec::One(SortClause::new()).is_empty());
        assert!(SortSpec::Many(Vec::new()).is_empty());
        assert!(!SortSpec::from(SortClause::asc("x")).is_empty());
    }

    // ------------------------------------------------------------------------
    // Paging and projection tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_limit_from_option() {
        assert_eq!(Limit::from(None), Limit::Unbounded);
        assert_eq!(Limit::from(Some(0)), Limit::Unbounded);
        assert_eq!(Limit::from(Some(25)), Limit::Count(25));
    }

    #[test]
    fn test_projection_columns() {
        let projection = Projection::from(Some("name, age,,email"));
        assert_eq!(projection.columns(), vec!["name", "age", "email"]);
        assert_eq!(Projection::from(Some("")), Projection::All);
        assert!(Projection::All.columns().is_empty());
    }

    #[test]
    fn test_match_options_builder() {
        let options = MatchOptions::new().on_fields("name").operator("AND");
        assert_eq!(options.fields, Some(Fields::One("name".into())));
        assert_eq!(options.operator, Some(Operator::And));
        assert!(!options.multi_field);
    }
}
