//! JSON and WebIDL formats feeding the pipeline.

#![cfg(feature = "interchange")]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use webidl_rewrite::interchange::{DefinitionFormat, Json, WebIdl, format_for_path, to_json};
use webidl_rewrite::{Input, TransformOptions, Transformer};

#[test]
fn test_json_input_runs_through_pipeline() {
    let json = r#"[
        {"type": "interface", "name": "node", "members": [
            {"type": "operation", "name": "Clone", "idlType": {"body": {"named": "node"}}}
        ]},
        {"type": "enum", "name": "Mode", "values": ["a"]}
    ]"#;
    let definitions = Json.read(json.as_bytes()).unwrap();
    let options = TransformOptions::new()
        .with_prefix_interfaces("Dom")
        .with_uncapitalized_operations();
    let out = Transformer::new(options)
        .run([Input::Parsed(definitions)])
        .unwrap();

    let written = String::from_utf8(WebIdl.write(&out).unwrap()).unwrap();
    assert_eq!(
        written,
        "interface DomNode {\n  DomNode clone();\n};\n\nenum Mode {\n  \"a\"\n};\n"
    );
}

#[test]
fn test_format_by_extension_round_trip() {
    let dir = TempDir::new().unwrap();
    let idl = dir.path().join("in.idl");
    fs::write(&idl, "interface A { attribute long x; };").unwrap();

    let reader = format_for_path(&idl).unwrap();
    let definitions = reader.read(&fs::read(&idl).unwrap()).unwrap();

    let json_path = dir.path().join("out.json");
    let writer = format_for_path(&json_path).unwrap();
    fs::write(&json_path, writer.write(&definitions).unwrap()).unwrap();

    let back = format_for_path(Path::new("x.JSON"))
        .unwrap()
        .read(&fs::read(&json_path).unwrap())
        .unwrap();
    assert_eq!(back, definitions);
    assert_eq!(to_json(&back).unwrap(), String::from_utf8(fs::read(&json_path).unwrap()).unwrap());
}
