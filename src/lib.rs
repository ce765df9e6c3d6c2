//! # webidl-rewrite
//!
//! Rewriting pipeline for WebIDL definitions: parse, filter, rename,
//! prefix, merge and write back.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON and WebIDL file formats (feature `interchange`)
//!   ↓
//! transform   → Extraction, renaming, merging, Transformer
//!   ↓
//! syntax      → Definition tree, mutable walker, writer
//!   ↓
//! parser      → Logos lexer, recursive-descent parser
//!   ↓
//! base        → Primitives (TextRange, LineIndex)
//! ```
//!
//! ## Usage
//!
//! ```
//! use webidl_rewrite::{TransformOptions, transform};
//!
//! let options = TransformOptions::new()
//!     .with_prefix_interfaces("Web")
//!     .with_uncapitalized_operations();
//! let out = transform("interface Canvas { Canvas(); void Draw(); };", &options).unwrap();
//! assert!(out.contains("interface WebCanvas"));
//! assert!(out.contains("void draw();"));
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → transform)
// ============================================================================

/// Foundation types: TextRange, LineIndex
pub mod base;

/// Parser: Logos lexer, recursive-descent parser
pub mod parser;

/// Syntax: definition tree, name walker, WebIDL writer
pub mod syntax;

/// Rewrite pipeline: extract, rename, merge
pub mod transform;

/// Definition interchange formats: WebIDL text, JSON
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};

pub use parser::{IdlParser, ParseError, WebIdlParser, parse};
pub use syntax::{Definition, FormatOptions, IdlWriter, Member, WebIdlWriter, write};
pub use transform::{
    DefinitionsByName, Input, NamePattern, RenameRule, TransformError, TransformOptions,
    Transformer, extract_definitions, merge_definitions_by_name, transform,
};
