//! Extraction through the public pipeline API.

use rstest::rstest;
use webidl_rewrite::syntax::{Definition, Member, TypeBody};
use webidl_rewrite::{Input, TransformOptions, Transformer};

use crate::helpers::definition_assertions::*;
use crate::helpers::source_fixtures::*;

fn canvas_options() -> TransformOptions {
    TransformOptions::new()
        .with_prefix_interfaces("Web")
        .with_uncapitalized_operations()
        .with_delete_operation()
        .with_emscripten_ptr_attribute()
}

#[test]
fn test_canvas_names_and_order() {
    let definitions = Transformer::new(canvas_options()).run([CANVAS]).unwrap();
    assert_eq!(
        definition_names(&definitions),
        vec!["WebCanvas", "WebContext", "ContextKind", "ContextOptions"]
    );
}

#[test]
fn test_canvas_members() {
    let definitions = Transformer::new(canvas_options()).run([CANVAS]).unwrap();
    let canvas = get_definition(&definitions, "WebCanvas");

    assert_eq!(
        member_names(canvas),
        vec!["constructor", "getContext", "draw", "parent", "delete", "ptr"]
    );
    // Parents outside the prefix table keep their name.
    assert_eq!(canvas.inheritance(), Some("Element"));

    let get_context = get_operation(canvas, "getContext");
    assert_eq!(get_context.idl_type.name(), Some("WebContext"));
    assert_eq!(get_context.arguments[0].idl_type.name(), Some("DOMString"));

    let draw = get_operation(canvas, "draw");
    assert_eq!(draw.arguments[0].idl_type.name(), Some("WebCanvas"));
    assert_eq!(draw.arguments[1].idl_type.name(), Some("WebContext"));
    assert!(draw.arguments[1].idl_type.nullable);

    // Attribute types are never prefixed.
    assert_eq!(get_attribute(canvas, "parent").idl_type.name(), Some("Canvas"));
    assert_eq!(get_attribute(canvas, "ptr").idl_type.name(), Some("number"));
}

#[test]
fn test_injection_reaches_dictionaries_but_not_enums() {
    let definitions = Transformer::new(canvas_options()).run([CANVAS]).unwrap();
    assert_eq!(
        member_names(get_definition(&definitions, "ContextOptions")),
        vec!["alpha", "delete", "ptr"]
    );
    assert!(get_definition(&definitions, "ContextKind").members().is_none());
}

#[test]
fn test_module_definition_comes_first() {
    let options = TransformOptions::new()
        .with_module_name("Canvases")
        .with_prefix_interfaces("Web");
    let definitions = Transformer::new(options).run([CANVAS]).unwrap();

    assert_eq!(definition_names(&definitions)[0], "Canvases");
    let module = &definitions[0];
    assert_eq!(member_names(module), vec!["Canvas", "Context", "ContextKind"]);

    let class = &get_attribute(module, "Context").idl_type;
    assert_eq!(class.generic_name(), Some("Class"));
    let TypeBody::Generic { args, .. } = &class.body else {
        panic!("expected generic type");
    };
    assert_eq!(args[0].name(), Some("WebContext"));
}

#[test]
fn test_implements_becomes_inheritance() {
    let definitions = Transformer::new(TransformOptions::default())
        .run([MIXINS])
        .unwrap();
    assert_eq!(definition_names(&definitions), vec!["Window", "GlobalEventHandlers"]);
    assert_eq!(
        get_definition(&definitions, "Window").inheritance(),
        Some("GlobalEventHandlers")
    );
}

#[test]
fn test_prefix_applies_to_implemented_parent() {
    let definitions = Transformer::new(TransformOptions::new().with_prefix_interfaces("X"))
        .run([MIXINS])
        .unwrap();
    assert_eq!(
        definition_names(&definitions),
        vec!["XWindow", "XGlobalEventHandlers"]
    );
    assert_eq!(
        get_definition(&definitions, "XWindow").inheritance(),
        Some("XGlobalEventHandlers")
    );
}

#[rstest]
#[case("s/^Canvas$/Surface/", "Surface")]
#[case("s/^(.*)as$/$1/", "Canv")]
#[case("s/^C/$&$&/", "CCanvas")]
fn test_rename_rule_syntax(#[case] rule: &str, #[case] expected: &str) {
    let options = TransformOptions::new().with_rename(rule.parse().unwrap());
    let definitions = Transformer::new(options)
        .run(["interface Canvas {};"])
        .unwrap();
    assert_eq!(definition_names(&definitions), vec![expected]);
}

#[test]
fn test_parsed_input_goes_through_the_same_steps() {
    let parsed = webidl_rewrite::parse(CONSTRUCTOR_SCENARIO).unwrap();
    let options = TransformOptions::new().with_prefix_interfaces("X");
    let definitions = Transformer::new(options)
        .run([Input::Parsed(parsed)])
        .unwrap();
    let foo = get_definition(&definitions, "XFoo");
    assert!(matches!(
        &foo.members().unwrap()[0],
        Member::Operation(op) if op.is_constructor()
    ));
    assert!(matches!(foo, Definition::Interface(_)));
}
