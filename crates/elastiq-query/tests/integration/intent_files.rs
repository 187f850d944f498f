//! Loading intents from disk and replaying them onto builders.

use elastiq_query::{Error, QueryBuilder, SearchIntent};

use crate::common::{intent_file, json_of};

#[test]
fn test_toml_intent_file() {
    let (_dir, path) = intent_file(
        "intent.toml",
        r#"
from = 20
size = 10

[phrase]
query = "exact words"
fields = "title"

[[sort]]
published = "desc"
"#,
    );

    let intent = SearchIntent::from_path(&path).unwrap();
    let builder = QueryBuilder::from_intent(&intent).unwrap();
    assert!(builder.is_exact_phrase());
    assert_eq!(
        json_of(&builder),
        concat!(
            r#"{"query":{"match_phrase":{"query":"exact words","default_operator":"AND","fields":["title"]}},"#,
            r#""sort":[{"published":"desc"}],"from":20,"size":10}"#
        )
    );
}

#[test]
fn test_json_intent_file() {
    let (_dir, path) = intent_file(
        "intent.json",
        r#"{"match": {"query": "test", "fields": ["name", "age"], "operator": "AND"}, "columns": "name"}"#,
    );

    let intent = SearchIntent::from_path(&path).unwrap();
    let builder = QueryBuilder::from_intent(&intent).unwrap();
    assert_eq!(
        json_of(&builder),
        r#"{"query":{"query_string":{"query":"test","default_operator":"AND","fields":["name","age"]}}}"#
    );
    assert_eq!(builder.projection().unwrap().columns(), vec!["name"]);
}

#[test]
fn test_non_string_query_rejected() {
    let (_dir, path) = intent_file("intent.json", r#"{"match": {"query": 123}}"#);
    let intent = SearchIntent::from_path(&path).unwrap();
    assert!(matches!(
        QueryBuilder::from_intent(&intent),
        Err(Error::InvalidArgument { argument: "query", .. })
    ));
}

#[test]
fn test_non_string_operator_rejected() {
    let (_dir, path) = intent_file(
        "intent.toml",
        "[match]\nquery = \"test\"\noperator = 1\n",
    );
    let intent = SearchIntent::from_path(&path).unwrap();
    assert!(matches!(
        QueryBuilder::from_intent(&intent),
        Err(Error::InvalidArgument { argument: "operator", .. })
    ));
}

#[test]
fn test_apply_onto_existing_builder_replaces_clause() {
    let mut builder = QueryBuilder::new();
    builder.match_phrase("old phrase").unwrap().start_from(4);

    let intent = SearchIntent::from_toml_str("[match]\nquery = \"\"\n").unwrap();
    intent.apply(&mut builder).unwrap();

    assert_eq!(json_of(&builder), r#"{"query":{"match_all":{}},"from":4}"#);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let (_dir, path) = intent_file("intent.toml", "[match\nquery = ");
    assert!(matches!(
        SearchIntent::from_path(&path),
        Err(Error::Toml(_))
    ));

    let (_dir, path) = intent_file("intent.json", "{");
    assert!(matches!(
        SearchIntent::from_path(&path),
        Err(Error::Json(_))
    ));
}
