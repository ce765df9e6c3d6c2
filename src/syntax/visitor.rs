//! Mutable traversal over name-bearing fields of the definition tree.
//!
//! [`NodeMut`] is the sum of every node shape that can carry names. The walk
//! dispatches on it exhaustively, so adding a field to the tree forces a
//! decision here instead of silently escaping renames.

use super::ast::{
    Argument, Definition, ExtAttr, IdlType, Member, TypeBody, Value,
};

/// A mutable borrow of any node in the definition tree.
pub enum NodeMut<'a> {
    Definition(&'a mut Definition),
    Member(&'a mut Member),
    Argument(&'a mut Argument),
    IdlType(&'a mut IdlType),
    ExtAttr(&'a mut ExtAttr),
}

impl NodeMut<'_> {
    /// Shorter-lived copy of this borrow, for repeated walks.
    pub fn reborrow(&mut self) -> NodeMut<'_> {
        match self {
            NodeMut::Definition(node) => NodeMut::Definition(&mut **node),
            NodeMut::Member(node) => NodeMut::Member(&mut **node),
            NodeMut::Argument(node) => NodeMut::Argument(&mut **node),
            NodeMut::IdlType(node) => NodeMut::IdlType(&mut **node),
            NodeMut::ExtAttr(node) => NodeMut::ExtAttr(&mut **node),
        }
    }
}

impl<'a> From<&'a mut Definition> for NodeMut<'a> {
    fn from(node: &'a mut Definition) -> Self {
        Self::Definition(node)
    }
}

impl<'a> From<&'a mut Member> for NodeMut<'a> {
    fn from(node: &'a mut Member) -> Self {
        Self::Member(node)
    }
}

impl<'a> From<&'a mut Argument> for NodeMut<'a> {
    fn from(node: &'a mut Argument) -> Self {
        Self::Argument(node)
    }
}

impl<'a> From<&'a mut IdlType> for NodeMut<'a> {
    fn from(node: &'a mut IdlType) -> Self {
        Self::IdlType(node)
    }
}

impl<'a> From<&'a mut ExtAttr> for NodeMut<'a> {
    fn from(node: &'a mut ExtAttr) -> Self {
        Self::ExtAttr(node)
    }
}

/// Which field a visited name lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameSlot {
    /// Name of a definition, member, argument or extended attribute.
    Name,
    /// Plain type name inside an [`IdlType`].
    TypeName,
    /// Generic wrapper name (`sequence`, `Promise`, ...).
    GenericName,
    Inheritance,
    ImplementsTarget,
    ImplementsSource,
    /// String default value of an argument or dictionary field.
    DefaultValue,
    IteratorObject,
}

/// Visitor receiving each name-bearing string exactly once.
pub trait NameVisitorMut {
    fn visit_name(&mut self, slot: NameSlot, name: &mut String);
}

impl<F> NameVisitorMut for F
where
    F: FnMut(NameSlot, &mut String),
{
    fn visit_name(&mut self, slot: NameSlot, name: &mut String) {
        self(slot, name)
    }
}

/// Walk `node` and every node below it, handing each name to `visitor`.
pub fn walk_names_mut<'a, V>(node: impl Into<NodeMut<'a>>, visitor: &mut V)
where
    V: NameVisitorMut + ?Sized,
{
    match node.into() {
        NodeMut::Definition(def) => walk_definition(def, visitor),
        NodeMut::Member(member) => walk_member(member, visitor),
        NodeMut::Argument(arg) => walk_argument(arg, visitor),
        NodeMut::IdlType(ty) => walk_type(ty, visitor),
        NodeMut::ExtAttr(attr) => walk_ext_attr(attr, visitor),
    }
}

fn walk_definition<V: NameVisitorMut + ?Sized>(def: &mut Definition, visitor: &mut V) {
    match def {
        Definition::Interface(d) => {
            visitor.visit_name(NameSlot::Name, &mut d.name);
            walk_inheritance(&mut d.inheritance, visitor);
            walk_all(&mut d.members, visitor);
            walk_all(&mut d.ext_attrs, visitor);
        }
        Definition::Dictionary(d) => {
            visitor.visit_name(NameSlot::Name, &mut d.name);
            walk_inheritance(&mut d.inheritance, visitor);
            walk_all(&mut d.members, visitor);
            walk_all(&mut d.ext_attrs, visitor);
        }
        // Enum values are data, not names.
        Definition::Enum(d) => {
            visitor.visit_name(NameSlot::Name, &mut d.name);
            walk_all(&mut d.ext_attrs, visitor);
        }
        Definition::Typedef(d) => {
            visitor.visit_name(NameSlot::Name, &mut d.name);
            walk_type(&mut d.idl_type, visitor);
            walk_all(&mut d.ext_attrs, visitor);
        }
        Definition::Callback(d) => {
            visitor.visit_name(NameSlot::Name, &mut d.name);
            walk_type(&mut d.idl_type, visitor);
            walk_all(&mut d.arguments, visitor);
            walk_all(&mut d.ext_attrs, visitor);
        }
        Definition::Implements(d) => {
            visitor.visit_name(NameSlot::ImplementsTarget, &mut d.target);
            visitor.visit_name(NameSlot::ImplementsSource, &mut d.implements);
            walk_all(&mut d.ext_attrs, visitor);
        }
    }
}

fn walk_member<V: NameVisitorMut + ?Sized>(member: &mut Member, visitor: &mut V) {
    match member {
        Member::Operation(op) => {
            walk_type(&mut op.idl_type, visitor);
            if let Some(name) = &mut op.name {
                visitor.visit_name(NameSlot::Name, name);
            }
            walk_all(&mut op.arguments, visitor);
            walk_all(&mut op.ext_attrs, visitor);
        }
        Member::Attribute(attr) => {
            walk_type(&mut attr.idl_type, visitor);
            visitor.visit_name(NameSlot::Name, &mut attr.name);
            walk_all(&mut attr.ext_attrs, visitor);
        }
        Member::Const(c) => {
            walk_type(&mut c.idl_type, visitor);
            visitor.visit_name(NameSlot::Name, &mut c.name);
            walk_all(&mut c.ext_attrs, visitor);
        }
        Member::Field(field) => {
            walk_type(&mut field.idl_type, visitor);
            visitor.visit_name(NameSlot::Name, &mut field.name);
            walk_default(&mut field.default, visitor);
            walk_all(&mut field.ext_attrs, visitor);
        }
        Member::Iterable(it) => {
            if let Some(key) = &mut it.key_type {
                walk_type(key, visitor);
            }
            walk_type(&mut it.value_type, visitor);
            walk_all(&mut it.ext_attrs, visitor);
        }
        Member::Iterator(it) => {
            walk_type(&mut it.idl_type, visitor);
            if let Some(object) = &mut it.iterator_object {
                visitor.visit_name(NameSlot::IteratorObject, object);
            }
            walk_all(&mut it.ext_attrs, visitor);
        }
    }
}

fn walk_argument<V: NameVisitorMut + ?Sized>(arg: &mut Argument, visitor: &mut V) {
    walk_type(&mut arg.idl_type, visitor);
    visitor.visit_name(NameSlot::Name, &mut arg.name);
    walk_default(&mut arg.default, visitor);
    walk_all(&mut arg.ext_attrs, visitor);
}

fn walk_type<V: NameVisitorMut + ?Sized>(ty: &mut IdlType, visitor: &mut V) {
    match &mut ty.body {
        TypeBody::Named(name) => visitor.visit_name(NameSlot::TypeName, name),
        TypeBody::Generic { name, args } => {
            visitor.visit_name(NameSlot::GenericName, name);
            for arg in args {
                walk_type(arg, visitor);
            }
        }
        TypeBody::Union(members) => {
            for member in members {
                walk_type(member, visitor);
            }
        }
    }
    walk_all(&mut ty.ext_attrs, visitor);
}

fn walk_ext_attr<V: NameVisitorMut + ?Sized>(attr: &mut ExtAttr, visitor: &mut V) {
    visitor.visit_name(NameSlot::Name, &mut attr.name);
    if let Some(arguments) = &mut attr.arguments {
        walk_all(arguments, visitor);
    }
}

fn walk_inheritance<V: NameVisitorMut + ?Sized>(inheritance: &mut Option<String>, visitor: &mut V) {
    if let Some(parent) = inheritance {
        visitor.visit_name(NameSlot::Inheritance, parent);
    }
}

fn walk_default<V: NameVisitorMut + ?Sized>(default: &mut Option<Value>, visitor: &mut V) {
    if let Some(Value::String(value)) = default {
        visitor.visit_name(NameSlot::DefaultValue, value);
    }
}

fn walk_all<'a, T, V>(nodes: &'a mut [T], visitor: &mut V)
where
    &'a mut T: Into<NodeMut<'a>>,
    V: NameVisitorMut + ?Sized,
{
    for node in nodes {
        walk_names_mut(node, visitor);
    }
}
