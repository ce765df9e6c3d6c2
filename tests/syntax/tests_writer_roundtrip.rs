//! Writer output parses back to the same tree.

use rstest::rstest;
use webidl_rewrite::{FormatOptions, parse, write};

#[rstest]
#[case("[Exposed=(Window,Worker)] interface A : B { [SameObject] readonly attribute Node? n; static void f(optional long x = -1, DOMString... rest); getter any (unsigned long i); const double PI = 3.14; };")]
#[case("partial dictionary D { required sequence<(long or DOMString)> items; DOMString mode = \"fast\"; object? extra = null; };")]
#[case("callback interface L { void handle(Event e); }; callback Done = Promise<void> (boolean ok);")]
#[case("enum E { \"a\", \"b\" }; typedef [Clamp] unsigned long long Size; A implements B;")]
#[case("interface I { iterable<DOMString, long>; Node iterator object; };")]
fn test_write_then_parse(#[case] source: &str) {
    let definitions = parse(source).unwrap();
    let written = write(&definitions, &FormatOptions::default());
    let reparsed = parse(&written).unwrap_or_else(|e| panic!("{e}\n{written}"));
    assert_eq!(reparsed, definitions);
}

#[test]
fn test_tabs_and_spacing() {
    let definitions = parse("interface A { attribute long x; }; interface B {};").unwrap();
    let written = write(&definitions, &FormatOptions::default().with_tabs());
    assert_eq!(
        written,
        "interface A {\n\tattribute long x;\n};\n\ninterface B {};\n"
    );
}
