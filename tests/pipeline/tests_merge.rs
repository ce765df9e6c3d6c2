//! Merging across partial definitions and inputs.

use webidl_rewrite::{TransformError, TransformOptions, Transformer};

use crate::helpers::definition_assertions::*;
use crate::helpers::source_fixtures::PARTIALS;

#[test]
fn test_partials_merge() {
    let definitions = Transformer::new(TransformOptions::default())
        .run([PARTIALS])
        .unwrap();
    assert_eq!(definition_names(&definitions), vec!["Point", "Axis"]);
    assert_eq!(
        member_names(get_definition(&definitions, "Point")),
        vec!["x", "y", "z"]
    );
    assert_eq!(
        get_definition(&definitions, "Axis").values(),
        Some(&["x".to_string(), "y".to_string(), "z".to_string()][..])
    );
}

#[test]
fn test_merge_disabled_stops_at_first_duplicate() {
    let err = Transformer::new(TransformOptions::new().with_merge(false))
        .run([PARTIALS])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are 2 definitions for Point that would be merged"
    );
}

#[test]
fn test_groups_span_inputs_in_order() {
    let definitions = Transformer::new(TransformOptions::default())
        .run([
            "interface A { attribute long first; }; interface B {};",
            "partial interface A { attribute long second; }; interface C {};",
        ])
        .unwrap();
    assert_eq!(definition_names(&definitions), vec!["A", "B", "C"]);
    assert_eq!(
        member_names(get_definition(&definitions, "A")),
        vec!["first", "second"]
    );
}

#[test]
fn test_bail_reports_parse_error_position() {
    let options = TransformOptions::new().with_bail(true);
    let err = Transformer::new(options)
        .run(["interface A {};", "interface B {\n  attribute long;\n};"])
        .unwrap_err();
    match err {
        TransformError::Parse(parse_error) => assert_eq!(parse_error.line(), 2),
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn test_without_bail_unparseable_input_is_skipped() {
    let definitions = Transformer::new(TransformOptions::default())
        .run(["interface A {};", "interface {"])
        .unwrap();
    assert_eq!(definition_names(&definitions), vec!["A"]);
}
