//! WebIDL parser
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Parser → Vec<Definition> (typed tree, see crate::syntax::ast)
//! ```
//!
//! Parsing is all-or-nothing: the first syntax error is returned as a
//! [`ParseError`] and no partial definitions are produced.

#[allow(clippy::module_inception)]
mod parser;

mod errors;
mod lexer;


pub use errors::ParseError;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::{IdlParser, WebIdlParser, parse};
