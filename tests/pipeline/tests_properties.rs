//! Behavioural properties of the pipeline as a whole.

use rstest::rstest;
use webidl_rewrite::syntax::{Definition, Member};
use webidl_rewrite::{
    NamePattern, RenameRule, TransformOptions, Transformer, merge_definitions_by_name, parse,
};

use crate::helpers::definition_assertions::*;
use crate::helpers::source_fixtures::*;

fn names_after(options: TransformOptions, source: &str) -> Vec<String> {
    Transformer::new(options)
        .run([source])
        .unwrap()
        .iter()
        .filter_map(Definition::name)
        .map(str::to_string)
        .collect()
}

/// A definition survives exactly when it matches every `only` pattern and
/// no `skip` pattern.
#[rstest]
#[case(&["o"], &["^F"], vec!["Bo"])]
#[case(&["^B", "z$"], &[], vec!["Baz"])]
#[case(&[], &["a", "o"], vec![])]
#[case(&[], &[], vec!["Foo", "Bo", "Baz"])]
fn test_filtering_composition(
    #[case] only: &[&str],
    #[case] skip: &[&str],
    #[case] expected: Vec<&str>,
) {
    let mut options = TransformOptions::default();
    options.only = only.iter().map(|p| p.parse::<NamePattern>().unwrap()).collect();
    options.skip = skip.iter().map(|p| p.parse::<NamePattern>().unwrap()).collect();
    assert_eq!(
        names_after(options, "interface Foo {}; interface Bo {}; interface Baz {};"),
        expected
    );
}

#[test]
fn test_non_matching_rename_is_identity() {
    let plain = Transformer::new(TransformOptions::default())
        .run([CANVAS])
        .unwrap();
    let renamed = Transformer::new(
        TransformOptions::new().with_rename(RenameRule::new("NeverMatches", "X").unwrap()),
    )
    .run([CANVAS])
    .unwrap();
    assert_eq!(plain, renamed);
}

#[rstest]
#[case("Foo", "Foo")]
#[case("foo", "FooFoo")]
#[case("Bar", "FooBar")]
#[case("bar", "FooBar")]
fn test_prefix_rule(#[case] name: &str, #[case] expected: &str) {
    let options = TransformOptions::new().with_prefix_interfaces("Foo");
    let names = names_after(options, &format!("interface {name} {{}};"));
    assert_eq!(names, vec![expected.to_string()]);
}

/// After prefixing, no plain operation type still names an unprefixed
/// interface.
#[test]
fn test_reference_consistency() {
    let options = TransformOptions::new().with_prefix_interfaces("Web");
    let definitions = Transformer::new(options).run([CANVAS]).unwrap();
    let unprefixed = ["Canvas", "Context"];

    for def in &definitions {
        for op in def.members().into_iter().flatten().filter_map(Member::as_operation) {
            let types = std::iter::once(&op.idl_type).chain(op.arguments.iter().map(|a| &a.idl_type));
            for ty in types {
                if let Some(name) = ty.name() {
                    assert!(
                        !unprefixed.contains(&name),
                        "{:?} still references {}",
                        op.name,
                        name
                    );
                }
            }
        }
    }
}

#[test]
fn test_merge_concatenation() {
    let mut by_name = webidl_rewrite::DefinitionsByName::new();
    for def in parse(
        "interface Point { attribute long a; attribute long b; }; partial interface Point { attribute long c; };",
    )
    .unwrap()
    {
        by_name.push(def);
    }
    let merged = merge_definitions_by_name(by_name, &TransformOptions::default()).unwrap();
    assert_eq!(member_names(&merged[0]), vec!["a", "b", "c"]);
}

#[test]
fn test_merge_rejection_produces_no_output() {
    let result = Transformer::new(TransformOptions::new().with_merge(false))
        .transform_to_string(PARTIALS, &webidl_rewrite::WebIdlWriter::default());
    assert!(result.is_err());
}

#[test]
fn test_constructor_detection_survives_rename() {
    let options = TransformOptions::new().with_rename(RenameRule::new("Foo", "Qux").unwrap());
    let definitions = Transformer::new(options).run([CONSTRUCTOR_SCENARIO]).unwrap();
    let qux = get_definition(&definitions, "Qux");
    assert!(get_operation(qux, "constructor").idl_type.name() == Some("void"));
}

#[test]
fn test_constructor_scenario() {
    let options = TransformOptions::new().with_uncapitalized_operations();
    let definitions = Transformer::new(options).run([CONSTRUCTOR_SCENARIO]).unwrap();
    let foo = get_definition(&definitions, "Foo");
    assert_eq!(member_names(foo), vec!["constructor", "bar"]);
    assert_eq!(get_operation(foo, "bar").idl_type.name(), Some("long"));
}
