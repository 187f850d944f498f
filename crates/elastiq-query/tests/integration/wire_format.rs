//! Byte-level checks of the emitted request bodies.

use elastiq_query::{Error, MatchOptions, Operator, QueryBuilder, SortClause, SortOrder};

use crate::common::json_of;

#[test]
fn test_word_match_variants_on_one_builder() {
    let mut builder = QueryBuilder::new();

    builder.match_words("test");
    assert_eq!(
        json_of(&builder),
        r#"{"query":{"query_string":{"query":"test","default_operator":"OR"}}}"#
    );

    builder.match_words_with("test", MatchOptions::new().on_fields("name").operator("AND"));
    assert_eq!(
        json_of(&builder),
        r#"{"query":{"query_string":{"query":"test","default_operator":"AND","fields":["name"]}}}"#
    );

    builder.match_words_with("test", MatchOptions::new().on_fields(["name", "age"]));
    assert_eq!(
        json_of(&builder),
        r#"{"query":{"query_string":{"query":"test","default_operator":"OR","fields":["name","age"]}}}"#
    );

    builder.match_words_with(
        "test",
        MatchOptions::new().operator(Operator::Or).multi_field(true),
    );
    assert_eq!(
        json_of(&builder),
        r#"{"query":{"multi_match":{"query":"test","default_operator":"OR"}}}"#
    );
}

#[test]
fn test_phrase_match_without_fields() {
    let mut builder = QueryBuilder::new();
    builder.match_phrase("testExact").unwrap();
    assert_eq!(
        json_of(&builder),
        r#"{"query":{"match_phrase":{"query":"testExact","default_operator":"AND"}}}"#
    );
}

#[test]
fn test_phrase_match_with_fields() {
    let mut builder = QueryBuilder::new();
    builder
        .match_phrase_on("testExact", vec!["title", "summary"])
        .unwrap();
    assert_eq!(
        json_of(&builder),
        r#"{"query":{"match_phrase":{"query":"testExact","default_operator":"AND","fields":["title","summary"]}}}"#
    );
}

#[test]
fn test_match_all_and_empty_documents() {
    let mut builder = QueryBuilder::new();
    assert_eq!(json_of(&builder), r#"{"query":{}}"#);

    builder.match_words("");
    assert_eq!(json_of(&builder), r#"{"query":{"match_all":{}}}"#);

    builder.reset();
    assert_eq!(json_of(&builder), r#"{"query":{}}"#);
}

#[test]
fn test_full_document_key_order() {
    let mut builder = QueryBuilder::new();
    builder
        .match_words_with("rust", MatchOptions::new().multi_field(true).operator("AND"))
        .sort_by(vec![
            SortClause::asc("country"),
            SortClause::new()
                .field("age", SortOrder::Desc)
                .field("name", SortOrder::Asc),
        ])
        .unwrap()
        .start_from(10)
        .limit_size(25)
        .select_fields("name,age");

    assert_eq!(
        json_of(&builder),
        concat!(
            r#"{"query":{"multi_match":{"query":"rust","default_operator":"AND"}},"#,
            r#""sort":[{"country":"asc"},{"age":"desc","name":"asc"}],"#,
            r#""from":10,"size":25}"#
        )
    );
}

#[test]
fn test_zero_paging_is_omitted() {
    let mut builder = QueryBuilder::new();
    builder.match_words("x").start_from(0).limit_size(0);
    assert_eq!(
        json_of(&builder),
        r#"{"query":{"query_string":{"query":"x","default_operator":"OR"}}}"#
    );
}

#[test]
fn test_invalid_calls_keep_chain_state() {
    let mut builder = QueryBuilder::new();
    builder.match_words("kept").limit_size(3);
    let before = json_of(&builder);

    assert!(matches!(
        builder.match_phrase("  "),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        builder.sort_by(SortClause::new()),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(builder.and(), Err(Error::NotImplemented(_))));

    assert_eq!(json_of(&builder), before);
}
