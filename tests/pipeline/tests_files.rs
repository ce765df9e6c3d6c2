//! File inputs.

use std::fs;

use tempfile::TempDir;
use webidl_rewrite::{Input, TransformError, TransformOptions, Transformer};

use crate::helpers::definition_assertions::definition_names;

#[test]
fn test_read_files_in_order() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.idl");
    let second = dir.path().join("b.idl");
    fs::write(&first, "interface A { attribute long x; };").unwrap();
    fs::write(&second, "partial interface A { attribute long y; }; enum B { \"b\" };").unwrap();

    let inputs = [
        Input::read_file(&first).unwrap(),
        Input::read_file(&second).unwrap(),
    ];
    let definitions = Transformer::new(TransformOptions::default())
        .run(inputs)
        .unwrap();
    assert_eq!(definition_names(&definitions), vec!["A", "B"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let transformer = Transformer::new(TransformOptions::default());
    let missing = dir.path().join("missing.idl");
    assert!(matches!(
        transformer.extract_file(&missing),
        Err(TransformError::Io(_))
    ));

    let present = dir.path().join("present.idl");
    fs::write(&present, "interface A {};").unwrap();
    assert!(matches!(
        transformer.run_files([&present, &missing]),
        Err(TransformError::Io(_))
    ));
}

#[test]
fn test_run_files_merges_in_order() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.idl");
    let second = dir.path().join("b.idl");
    fs::write(&first, "interface A { attribute long x; }; interface C {};").unwrap();
    fs::write(&second, "partial interface A { attribute long y; };").unwrap();

    let transformer = Transformer::new(TransformOptions::default());
    let by_name = transformer.extract_file(&first).unwrap();
    assert_eq!(by_name.names().collect::<Vec<_>>(), vec!["A", "C"]);

    let definitions = transformer.run_files([&first, &second]).unwrap();
    assert_eq!(definition_names(&definitions), vec!["A", "C"]);
    assert_eq!(definitions[0].members().map(<[_]>::len), Some(2));
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.idl");
    // A stray byte inside a comment does not affect parsing.
    fs::write(&path, b"// caf\xe9\ninterface Cafe {};").unwrap();

    let definitions = Transformer::new(TransformOptions::default())
        .run([Input::read_file(&path).unwrap()])
        .unwrap();
    assert_eq!(definition_names(&definitions), vec!["Cafe"]);
}
