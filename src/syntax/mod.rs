//! Syntax: the typed WebIDL definition tree, its mutable walker and the writer

pub mod ast;
pub mod formatter;
pub mod visitor;

pub use ast::{
    Argument, Attribute, CONSTRUCTOR_NAME, Callback, Const, Definition, DefinitionKind,
    Dictionary, Enum, ExtAttr, ExtAttrRhs, Field, IdlType, Implements, Interface, Iterable,
    LegacyIterator, Member, Operation, Special, TypeBody, Typedef, Value,
};
pub use formatter::{FormatOptions, IdlWriter, WebIdlWriter, write};
pub use visitor::{NameSlot, NameVisitorMut, NodeMut, walk_names_mut};
