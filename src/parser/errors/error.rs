//! Syntax error reported by the WebIDL parser

use thiserror::Error;

use crate::base::{LineCol, TextRange};

/// The first syntax error found in a WebIDL source.
///
/// Line and column are 1-based in the rendered message and 0-based in
/// [`ParseError::position`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {}, column {}", .position.line + 1, .position.col + 1)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,
    /// Source location of the offending token
    pub range: TextRange,
    pub position: LineCol,
}

impl ParseError {
    pub fn new(message: impl Into<String>, range: TextRange, position: LineCol) -> Self {
        Self {
            message: message.into(),
            range,
            position,
        }
    }

    /// 1-based line number, as shown to users.
    pub fn line(&self) -> u32 {
        self.position.line + 1
    }
}
