//! JSON form of the definition tree.

use super::DefinitionFormat;
use crate::syntax::ast::Definition;
use crate::transform::TransformError;

/// Pretty-printed JSON array of definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl DefinitionFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn read(&self, input: &[u8]) -> Result<Vec<Definition>, TransformError> {
        Ok(serde_json::from_slice(input)?)
    }

    fn write(&self, definitions: &[Definition]) -> Result<Vec<u8>, TransformError> {
        Ok(serde_json::to_vec_pretty(definitions)?)
    }
}

pub fn to_json(definitions: &[Definition]) -> Result<String, TransformError> {
    Ok(serde_json::to_string_pretty(definitions)?)
}

pub fn from_json(json: &str) -> Result<Vec<Definition>, TransformError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_json_shape() {
        let definitions = parse("interface A : B { static void f(optional long x = 1); };").unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&definitions).unwrap()).unwrap();

        let def = &value[0];
        assert_eq!(def["type"], "interface");
        assert_eq!(def["name"], "A");
        assert_eq!(def["inheritance"], "B");
        let op = &def["members"][0];
        assert_eq!(op["type"], "operation");
        assert_eq!(op["static"], true);
        assert_eq!(op["arguments"][0]["optional"], true);
    }

    #[test]
    fn test_json_preserves_tree() {
        let definitions = parse(
            "[Exposed=Window] interface N { getter (Node or DOMString)? item(unsigned long i); iterable<long>; }; enum E { \"a\" }; typedef sequence<long> L; A implements B;",
        )
        .unwrap();
        assert_eq!(from_json(&to_json(&definitions).unwrap()).unwrap(), definitions);
    }

    #[test]
    fn test_json_missing_optional_fields() {
        let definitions =
            from_json(r#"[{"type": "enum", "name": "Mode", "values": ["a"]}]"#).unwrap();
        assert_eq!(definitions[0].values(), Some(&["a".to_string()][..]));
        assert!(definitions[0].ext_attrs().is_empty());
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(matches!(from_json("{"), Err(TransformError::Json(_))));
    }
}
