//! Rewrite pipeline
//!
//! ## Architecture
//!
//! ```text
//! Input (text | file | parsed)
//!     ↓
//! extract  → parse, filter, rename, prefix → DefinitionsByName
//!     ↓
//! merge    → one definition per name → Vec<Definition>
//!     ↓
//! IdlWriter → WebIDL text
//! ```
//!
//! Fatal conditions (a parse failure with `bail`, a merge with `merge` off)
//! come back as [`TransformError`]; nothing here exits the process.

mod error;
mod extract;
mod merge;
mod options;
mod rename;

pub use error::TransformError;
pub use extract::{DefinitionsByName, Input, extract_definitions, extract_parsed};
pub use merge::merge_definitions_by_name;
pub use options::{NamePattern, RenameRule, TransformOptions};
pub use rename::{replace, replace_all};

use std::path::Path;

use tracing::debug;

use crate::parser::{IdlParser, WebIdlParser};
use crate::syntax::ast::Definition;
use crate::syntax::formatter::{IdlWriter, WebIdlWriter};

/// Runs extraction and merging with one set of options and one parser.
#[derive(Debug, Clone, Default)]
pub struct Transformer<P: IdlParser = WebIdlParser> {
    options: TransformOptions,
    parser: P,
}

impl Transformer {
    pub fn new(options: TransformOptions) -> Self {
        Self::with_parser(options, WebIdlParser)
    }
}

impl<P: IdlParser> Transformer<P> {
    pub fn with_parser(options: TransformOptions, parser: P) -> Self {
        Self { options, parser }
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    pub fn extract(&self, input: impl Into<Input>) -> Result<DefinitionsByName, TransformError> {
        extract_definitions(input.into(), &self.parser, &self.options)
    }

    /// Read `path` and extract it. A read failure is [`TransformError::Io`].
    pub fn extract_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<DefinitionsByName, TransformError> {
        self.extract(Input::read_file(path)?)
    }

    /// Extract every input into one grouping. Same-named definitions from
    /// different inputs land in the same group, in input order.
    pub fn extract_all<I>(&self, inputs: I) -> Result<DefinitionsByName, TransformError>
    where
        I: IntoIterator,
        I::Item: Into<Input>,
    {
        let mut by_name = DefinitionsByName::new();
        for input in inputs {
            by_name.append(self.extract(input)?);
        }
        Ok(by_name)
    }

    pub fn run<I>(&self, inputs: I) -> Result<Vec<Definition>, TransformError>
    where
        I: IntoIterator,
        I::Item: Into<Input>,
    {
        let by_name = self.extract_all(inputs)?;
        debug!(names = by_name.len(), "extracted definitions");
        merge_definitions_by_name(by_name, &self.options)
    }

    /// Read every file in order, then extract and merge them together.
    pub fn run_files<I>(&self, paths: I) -> Result<Vec<Definition>, TransformError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let inputs = paths
            .into_iter()
            .map(Input::read_file)
            .collect::<Result<Vec<_>, _>>()?;
        self.run(inputs)
    }

    pub fn transform_to_string<W>(
        &self,
        input: impl Into<Input>,
        writer: &W,
    ) -> Result<String, TransformError>
    where
        W: IdlWriter + ?Sized,
    {
        let definitions = self.run([input.into()])?;
        Ok(writer.write(&definitions))
    }
}

/// Run the whole pipeline over `source` with the default parser and writer.
pub fn transform(source: &str, options: &TransformOptions) -> Result<String, TransformError> {
    Transformer::new(options.clone()).transform_to_string(source, &WebIdlWriter::default())
}
