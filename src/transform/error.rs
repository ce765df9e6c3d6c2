//! Error types for the rewrite pipeline.

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that can stop a pipeline run.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Source failed to parse and the run was configured to bail.
    #[error("Unable to parse WebIDL: {0}")]
    Parse(#[from] ParseError),

    /// Several definitions share a name while merging is disabled.
    #[error("There are {count} definitions for {name} that would be merged")]
    MergeForbidden { name: String, count: usize },

    /// A name pattern is not a valid regular expression.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rename rule is not of the form `s/pattern/replacement/`.
    #[error("Unable to parse rename rule '{0}'")]
    InvalidRename(String),

    /// IO error while reading an input file in [`Transformer::extract_file`]
    /// or [`Transformer::run_files`].
    ///
    /// [`Transformer::extract_file`]: super::Transformer::extract_file
    /// [`Transformer::run_files`]: super::Transformer::run_files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON definition tree could not be read or written.
    #[cfg(feature = "interchange")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TransformError {
    /// Create a merge error for `count` definitions named `name`.
    pub fn merge_forbidden(name: impl Into<String>, count: usize) -> Self {
        Self::MergeForbidden {
            name: name.into(),
            count,
        }
    }
}
