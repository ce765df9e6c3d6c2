//! Definition lookup and assertion helpers.

use webidl_rewrite::syntax::{Attribute, Definition, Member, Operation};

/// Find a definition by name, panicking with the available names if absent.
pub fn get_definition<'a>(definitions: &'a [Definition], name: &str) -> &'a Definition {
    definitions
        .iter()
        .find(|def| def.name() == Some(name))
        .unwrap_or_else(|| {
            let names: Vec<_> = definitions.iter().filter_map(Definition::name).collect();
            panic!("Expected definition '{}', found {:?}", name, names)
        })
}

pub fn definition_names(definitions: &[Definition]) -> Vec<&str> {
    definitions.iter().filter_map(Definition::name).collect()
}

pub fn member_names(def: &Definition) -> Vec<&str> {
    def.members()
        .unwrap_or_else(|| panic!("{:?} has no members", def.name()))
        .iter()
        .filter_map(Member::name)
        .collect()
}

pub fn get_operation<'a>(def: &'a Definition, name: &str) -> &'a Operation {
    def.members()
        .into_iter()
        .flatten()
        .filter_map(Member::as_operation)
        .find(|op| op.name.as_deref() == Some(name))
        .unwrap_or_else(|| panic!("Expected operation '{}' in {:?}", name, def.name()))
}

pub fn get_attribute<'a>(def: &'a Definition, name: &str) -> &'a Attribute {
    def.members()
        .into_iter()
        .flatten()
        .filter_map(Member::as_attribute)
        .find(|attr| attr.name == name)
        .unwrap_or_else(|| panic!("Expected attribute '{}' in {:?}", name, def.name()))
}
