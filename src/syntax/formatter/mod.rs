//! WebIDL writer
//!
//! Renders a definition list back to WebIDL text. Output is normalized:
//! trivia from the original source is not preserved, members go one per
//! line and indentation follows [`FormatOptions`].

mod options;


pub use options::FormatOptions;

use crate::syntax::ast::{
    Argument, Definition, ExtAttr, ExtAttrRhs, IdlType, Member, TypeBody,
};

/// Serializer collaborator of the rewrite pipeline.
pub trait IdlWriter {
    fn write(&self, definitions: &[Definition]) -> String;
}

/// Default [`IdlWriter`] producing WebIDL text.
#[derive(Debug, Clone, Default)]
pub struct WebIdlWriter {
    pub options: FormatOptions,
}

impl WebIdlWriter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }
}

impl IdlWriter for WebIdlWriter {
    fn write(&self, definitions: &[Definition]) -> String {
        write(definitions, &self.options)
    }
}

/// Render definitions as WebIDL text.
pub fn write(definitions: &[Definition], options: &FormatOptions) -> String {
    let separator = if options.blank_line_between_definitions {
        "\n\n"
    } else {
        "\n"
    };
    let mut out = definitions
        .iter()
        .map(|def| write_definition(def, options))
        .collect::<Vec<_>>()
        .join(separator);
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Render a single top-level definition, without a trailing newline.
pub fn write_definition(def: &Definition, options: &FormatOptions) -> String {
    let mut out = String::new();
    if !def.ext_attrs().is_empty() {
        out.push_str(&write_ext_attrs(def.ext_attrs()));
        out.push('\n');
    }

    match def {
        Definition::Interface(d) => {
            let mut header = String::new();
            if d.partial {
                header.push_str("partial ");
            }
            if d.callback {
                header.push_str("callback ");
            }
            header.push_str("interface ");
            header.push_str(&d.name);
            write_container(&mut out, &header, d.inheritance.as_deref(), &d.members, options);
        }
        Definition::Dictionary(d) => {
            let mut header = String::new();
            if d.partial {
                header.push_str("partial ");
            }
            header.push_str("dictionary ");
            header.push_str(&d.name);
            write_container(&mut out, &header, d.inheritance.as_deref(), &d.members, options);
        }
        Definition::Enum(d) => {
            out.push_str(&format!("enum {} {{", d.name));
            if d.values.is_empty() {
                out.push_str("};");
            } else {
                out.push('\n');
                let indent = options.indent(1);
                let values: Vec<_> = d
                    .values
                    .iter()
                    .map(|v| format!("{}\"{}\"", indent, v))
                    .collect();
                out.push_str(&values.join(",\n"));
                out.push_str("\n};");
            }
        }
        Definition::Typedef(d) => {
            out.push_str(&format!("typedef {} {};", write_type(&d.idl_type), d.name));
        }
        Definition::Callback(d) => {
            out.push_str(&format!(
                "callback {} = {} ({});",
                d.name,
                write_type(&d.idl_type),
                write_arguments(&d.arguments)
            ));
        }
        Definition::Implements(d) => {
            out.push_str(&format!("{} implements {};", d.target, d.implements));
        }
    }
    out
}

fn write_container(
    out: &mut String,
    header: &str,
    inheritance: Option<&str>,
    members: &[Member],
    options: &FormatOptions,
) {
    out.push_str(header);
    if let Some(parent) = inheritance {
        out.push_str(" : ");
        out.push_str(parent);
    }
    if members.is_empty() {
        out.push_str(" {};");
        return;
    }
    out.push_str(" {\n");
    let indent = options.indent(1);
    for member in members {
        out.push_str(&indent);
        out.push_str(&write_member(member));
        out.push('\n');
    }
    out.push_str("};");
}

/// Render one interface or dictionary member, including its `;`.
pub fn write_member(member: &Member) -> String {
    let (ext_attrs, body) = match member {
        Member::Operation(op) => {
            let mut body = String::new();
            if op.is_static {
                body.push_str("static ");
            }
            if let Some(special) = op.special {
                body.push_str(special.as_str());
                body.push(' ');
            }
            body.push_str(&write_type(&op.idl_type));
            body.push(' ');
            if let Some(name) = &op.name {
                body.push_str(name);
            }
            body.push_str(&format!("({});", write_arguments(&op.arguments)));
            (&op.ext_attrs, body)
        }
        Member::Attribute(attr) => {
            let mut body = String::new();
            if attr.is_static {
                body.push_str("static ");
            }
            if attr.stringifier {
                body.push_str("stringifier ");
            }
            if attr.inherit {
                body.push_str("inherit ");
            }
            if attr.readonly {
                body.push_str("readonly ");
            }
            body.push_str(&format!(
                "attribute {} {};",
                write_type(&attr.idl_type),
                attr.name
            ));
            (&attr.ext_attrs, body)
        }
        Member::Const(c) => (
            &c.ext_attrs,
            format!("const {} {} = {};", write_type(&c.idl_type), c.name, c.value),
        ),
        Member::Field(field) => {
            let mut body = String::new();
            if field.required {
                body.push_str("required ");
            }
            body.push_str(&write_type(&field.idl_type));
            body.push(' ');
            body.push_str(&field.name);
            if let Some(default) = &field.default {
                body.push_str(&format!(" = {}", default));
            }
            body.push(';');
            (&field.ext_attrs, body)
        }
        Member::Iterable(it) => {
            let body = match &it.key_type {
                Some(key) => format!(
                    "iterable<{}, {}>;",
                    write_type(key),
                    write_type(&it.value_type)
                ),
                None => format!("iterable<{}>;", write_type(&it.value_type)),
            };
            (&it.ext_attrs, body)
        }
        Member::Iterator(it) => {
            let mut body = format!("{} iterator", write_type(&it.idl_type));
            if it.object {
                body.push_str(" object");
            } else if let Some(object) = &it.iterator_object {
                body.push_str(" = ");
                body.push_str(object);
            }
            body.push(';');
            (&it.ext_attrs, body)
        }
    };

    if ext_attrs.is_empty() {
        body
    } else {
        format!("{} {}", write_ext_attrs(ext_attrs), body)
    }
}

/// Render a type reference, including its own extended attributes.
pub fn write_type(ty: &IdlType) -> String {
    let mut out = String::new();
    if !ty.ext_attrs.is_empty() {
        out.push_str(&write_ext_attrs(&ty.ext_attrs));
        out.push(' ');
    }
    match &ty.body {
        TypeBody::Named(name) => out.push_str(name),
        TypeBody::Generic { name, args } => {
            let args: Vec<_> = args.iter().map(write_type).collect();
            out.push_str(&format!("{}<{}>", name, args.join(", ")));
        }
        TypeBody::Union(members) => {
            let members: Vec<_> = members.iter().map(write_type).collect();
            out.push_str(&format!("({})", members.join(" or ")));
        }
    }
    for _ in 0..ty.array {
        out.push_str("[]");
    }
    if ty.nullable {
        out.push('?');
    }
    out
}

fn write_arguments(arguments: &[Argument]) -> String {
    arguments
        .iter()
        .map(write_argument)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_argument(arg: &Argument) -> String {
    let mut out = String::new();
    if !arg.ext_attrs.is_empty() {
        out.push_str(&write_ext_attrs(&arg.ext_attrs));
        out.push(' ');
    }
    if arg.optional {
        out.push_str("optional ");
    }
    out.push_str(&write_type(&arg.idl_type));
    if arg.variadic {
        out.push_str("...");
    }
    out.push(' ');
    out.push_str(&arg.name);
    if let Some(default) = &arg.default {
        out.push_str(&format!(" = {}", default));
    }
    out
}

/// Render a bracketed extended attribute list.
pub fn write_ext_attrs(ext_attrs: &[ExtAttr]) -> String {
    let attrs: Vec<_> = ext_attrs.iter().map(write_ext_attr).collect();
    format!("[{}]", attrs.join(", "))
}

fn write_ext_attr(attr: &ExtAttr) -> String {
    let mut out = attr.name.clone();
    match &attr.rhs {
        Some(ExtAttrRhs::Identifier(ident)) | Some(ExtAttrRhs::Literal(ident)) => {
            out.push('=');
            out.push_str(ident);
        }
        Some(ExtAttrRhs::IdentifierList(idents)) => {
            out.push_str(&format!("=({})", idents.join(", ")));
        }
        None => {}
    }
    if let Some(arguments) = &attr.arguments {
        out.push_str(&format!("({})", write_arguments(arguments)));
    }
    out
}
