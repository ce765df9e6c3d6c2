//! Merging of same-named definitions.

use tracing::{debug, error};

use super::error::TransformError;
use super::extract::DefinitionsByName;
use super::options::TransformOptions;
use crate::syntax::ast::Definition;

/// Collapse every group into a single definition, in group order.
///
/// Members are concatenated when both sides carry members and enum values
/// when both sides are enums; every other field comes from the first
/// definition of the group. A group of several definitions is an error
/// when `options.merge` is off.
pub fn merge_definitions_by_name(
    groups: DefinitionsByName,
    options: &TransformOptions,
) -> Result<Vec<Definition>, TransformError> {
    let mut merged = Vec::with_capacity(groups.len());
    for (name, group) in groups {
        if group.len() > 1 && !options.merge {
            error!(%name, count = group.len(), "definitions would be merged");
            return Err(TransformError::merge_forbidden(name, group.len()));
        }
        if group.len() > 1 {
            debug!(%name, count = group.len(), "merging definitions");
        }
        merged.extend(merge_group(group));
    }
    Ok(merged)
}

fn merge_group(group: Vec<Definition>) -> Option<Definition> {
    let mut group = group.into_iter();
    let first = group.next()?;
    Some(group.fold(first, |mut merged, next| {
        merge_into(&mut merged, next);
        merged
    }))
}

fn merge_into(merged: &mut Definition, next: Definition) {
    if let (Definition::Enum(target), Definition::Enum(source)) = (&mut *merged, &next) {
        target.values.extend(source.values.iter().cloned());
        return;
    }
    if let Some(members) = merged.members_mut() {
        if let Some(more) = next.into_members() {
            members.extend(more);
        }
    }
}
