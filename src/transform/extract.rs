//! Definition extraction
//!
//! Turns one WebIDL source into definitions grouped by their final name,
//! applying filters, renames and the interface prefix along the way.

use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::{debug, error, trace, warn};

use super::error::TransformError;
use super::options::TransformOptions;
use super::rename::replace_all;
use crate::parser::IdlParser;
use crate::syntax::ast::{
    Attribute, CONSTRUCTOR_NAME, Definition, IdlType, Interface, Member, Operation,
};

/// One source handed to the extractor.
#[derive(Debug, Clone)]
pub enum Input {
    /// WebIDL text.
    Text(String),
    /// File contents, decoded as UTF-8 with invalid sequences replaced.
    File { path: PathBuf, contents: Vec<u8> },
    /// An already parsed definition list.
    Parsed(Vec<Definition>),
}

impl Input {
    pub fn read_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        Ok(Self::File {
            path: path.to_path_buf(),
            contents: std::fs::read(path)?,
        })
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Definition>> for Input {
    fn from(definitions: Vec<Definition>) -> Self {
        Self::Parsed(definitions)
    }
}

/// Definitions grouped by name, in first-seen name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionsByName {
    groups: IndexMap<String, Vec<Definition>>,
}

impl DefinitionsByName {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `definition` under its current name.
    ///
    /// Definitions without a name are dropped; returns whether it was kept.
    pub fn push(&mut self, definition: Definition) -> bool {
        let name = match definition.name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return false,
        };
        self.groups.entry(name).or_default().push(definition);
        true
    }

    pub fn get(&self, name: &str) -> Option<&[Definition]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Definition])> {
        self.groups
            .iter()
            .map(|(name, group)| (name.as_str(), group.as_slice()))
    }

    /// Move every group of `other` into `self`, extending groups that
    /// already exist and appending new names at the end.
    pub fn append(&mut self, other: DefinitionsByName) {
        for (name, group) in other.groups {
            self.groups.entry(name).or_default().extend(group);
        }
    }
}

impl IntoIterator for DefinitionsByName {
    type Item = (String, Vec<Definition>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<Definition>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Parse `input` with `parser` and extract its definitions.
///
/// A parse failure is fatal only with `options.bail`; otherwise it is logged
/// and yields an empty result.
pub fn extract_definitions<P>(
    input: Input,
    parser: &P,
    options: &TransformOptions,
) -> Result<DefinitionsByName, TransformError>
where
    P: IdlParser + ?Sized,
{
    let (source, path) = match input {
        Input::Parsed(definitions) => return Ok(extract_parsed(definitions, options)),
        Input::Text(text) => (text, None),
        Input::File { path, contents } => {
            debug!(path = %path.display(), "extracting definitions");
            (String::from_utf8_lossy(&contents).into_owned(), Some(path))
        }
    };

    match parser.parse(&source) {
        Ok(definitions) => Ok(extract_parsed(definitions, options)),
        Err(err) if options.bail => {
            error!(?path, %source, error = %err, "unable to parse WebIDL");
            Err(err.into())
        }
        Err(err) => {
            warn!(?path, %source, error = %err, "unable to parse WebIDL");
            Ok(DefinitionsByName::new())
        }
    }
}

/// Extract from a definition list that is already parsed.
pub fn extract_parsed(
    mut definitions: Vec<Definition>,
    options: &TransformOptions,
) -> DefinitionsByName {
    let prefixes = PrefixTable::build(&definitions, options.interface_prefix());
    resolve_implements(&mut definitions);

    let mut by_name = DefinitionsByName::new();
    if let Some(module) = options.module() {
        by_name.push(module_definition(module, &definitions, &prefixes));
    }

    for mut definition in definitions {
        let name = definition.name().unwrap_or_default().to_string();
        debug!(%name, kind = %definition.kind(), "parsed definition");

        if !passes_filters(&name, options) {
            debug!(%name, "skipping");
            continue;
        }

        replace_all(&options.rename, &mut definition);
        rewrite_operations(&mut definition, &prefixes, options);
        apply_prefixes(&mut definition, &prefixes);
        inject_members(&mut definition, options);
        by_name.push(definition);
    }

    by_name
}

/// Original interface name to prefixed name.
#[derive(Debug, Default)]
struct PrefixTable {
    names: FxHashMap<String, String>,
}

impl PrefixTable {
    fn build(definitions: &[Definition], prefix: Option<&str>) -> Self {
        let Some(prefix) = prefix else {
            return Self::default();
        };
        let names = definitions
            .iter()
            .filter(|def| def.is_interface())
            .filter_map(Definition::name)
            .map(|name| (name.to_string(), prefixed_name(prefix, name)))
            .collect();
        Self { names }
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// Replace `name` with its prefixed form, if it has one.
    fn rewrite(&self, name: &mut String) {
        if let Some(prefixed) = self.get(name) {
            trace!(from = %name, to = prefixed, "prefixed");
            *name = prefixed.to_string();
        }
    }
}

fn prefixed_name(prefix: &str, name: &str) -> String {
    if name.starts_with(prefix) {
        name.to_string()
    } else {
        format!("{prefix}{}", capitalize(name))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Point the first definition named by each `implements` target at the
/// implemented interface. Later relations overwrite earlier ones.
fn resolve_implements(definitions: &mut [Definition]) {
    let relations: Vec<(String, String)> = definitions
        .iter()
        .filter_map(|def| match def {
            Definition::Implements(rel) => Some((rel.target.clone(), rel.implements.clone())),
            _ => None,
        })
        .collect();

    for (target, parent) in relations {
        let found = definitions
            .iter_mut()
            .find(|def| def.name() == Some(target.as_str()));
        match found.and_then(Definition::inheritance_mut) {
            Some(slot) => {
                trace!(%target, %parent, "implements");
                *slot = Some(parent);
            }
            None => trace!(%target, "implements target not found"),
        }
    }
}

/// Interface exposing one `Class<...>` attribute per interface and enum.
fn module_definition(name: &str, definitions: &[Definition], prefixes: &PrefixTable) -> Definition {
    let members = definitions
        .iter()
        .filter(|def| matches!(def, Definition::Interface(_) | Definition::Enum(_)))
        .filter_map(Definition::name)
        .map(|member| {
            let class = IdlType::generic("Class", vec![IdlType::named(prefixes.resolve(member))]);
            Member::Attribute(Attribute::new(member, class))
        })
        .collect();

    debug!(module = name, "synthesized module");
    Definition::Interface(Interface {
        name: name.to_string(),
        members,
        ..Default::default()
    })
}

fn passes_filters(name: &str, options: &TransformOptions) -> bool {
    options.only.iter().all(|pattern| pattern.is_match(name))
        && !options.skip.iter().any(|pattern| pattern.is_match(name))
}

fn rewrite_operations(definition: &mut Definition, prefixes: &PrefixTable, options: &TransformOptions) {
    let owner = definition.name().unwrap_or_default().to_string();
    let Some(members) = definition.members_mut() else {
        return;
    };
    for member in members {
        if let Member::Operation(op) = member {
            rewrite_operation(op, &owner, prefixes, options);
        }
    }
}

fn rewrite_operation(
    op: &mut Operation,
    owner: &str,
    prefixes: &PrefixTable,
    options: &TransformOptions,
) {
    if op.name.as_deref() == Some(owner) {
        op.name = Some(CONSTRUCTOR_NAME.to_string());
    } else if let Some(name) = op.name.as_mut() {
        if let Some(prefix) = options.static_prefix() {
            if name.starts_with(prefix) {
                name.replace_range(..prefix.len(), "");
                op.is_static = true;
            }
        }
        if options.uncapitalize_operations {
            *name = uncapitalize(name);
        }
    }

    // Only plain type names are prefixed; composite types keep theirs.
    for arg in &mut op.arguments {
        if let Some(name) = arg.idl_type.name_mut() {
            prefixes.rewrite(name);
        }
    }
    if let Some(name) = op.idl_type.name_mut() {
        prefixes.rewrite(name);
    }
}

fn apply_prefixes(definition: &mut Definition, prefixes: &PrefixTable) {
    if definition.is_interface() {
        if let Some(name) = definition.name_mut() {
            prefixes.rewrite(name);
        }
    }
    if let Some(Some(parent)) = definition.inheritance_mut() {
        prefixes.rewrite(parent);
    }
}

fn inject_members(definition: &mut Definition, options: &TransformOptions) {
    let Some(members) = definition.members_mut() else {
        return;
    };
    if options.add_delete_operation {
        members.push(Member::Operation(Operation::new(
            "delete",
            IdlType::named("void"),
        )));
    }
    if options.add_emscripten_ptr_attribute {
        members.push(Member::Attribute(Attribute::new(
            "ptr",
            IdlType::named("number"),
        )));
    }
}
