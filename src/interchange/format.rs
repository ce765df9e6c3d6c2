//! Common trait for definition formats.

use std::path::Path;

use super::Json;
use crate::parser::{IdlParser, WebIdlParser};
use crate::syntax::ast::Definition;
use crate::syntax::formatter::{IdlWriter, WebIdlWriter};
use crate::transform::TransformError;

/// A way of storing a definition list as bytes.
pub trait DefinitionFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extensions, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    fn read(&self, input: &[u8]) -> Result<Vec<Definition>, TransformError>;

    fn write(&self, definitions: &[Definition]) -> Result<Vec<u8>, TransformError>;
}

/// WebIDL text.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebIdl;

impl DefinitionFormat for WebIdl {
    fn name(&self) -> &'static str {
        "WebIDL"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["idl", "webidl"]
    }

    /// Parse errors are always returned here; there is no `bail` switch.
    fn read(&self, input: &[u8]) -> Result<Vec<Definition>, TransformError> {
        let source = String::from_utf8_lossy(input);
        Ok(WebIdlParser.parse(&source)?)
    }

    fn write(&self, definitions: &[Definition]) -> Result<Vec<u8>, TransformError> {
        Ok(WebIdlWriter::default().write(definitions).into_bytes())
    }
}

/// Pick a format by file extension, case-insensitively.
pub fn format_for_path(path: &Path) -> Option<&'static dyn DefinitionFormat> {
    static FORMATS: [&dyn DefinitionFormat; 2] = [&WebIdl, &Json];

    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    FORMATS
        .iter()
        .copied()
        .find(|format| format.extensions().contains(&ext.as_str()))
}
