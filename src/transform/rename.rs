//! Regex renaming over whole definition subtrees.

use tracing::trace;

use super::options::RenameRule;
use crate::syntax::visitor::{NameSlot, NodeMut, walk_names_mut};

/// Apply `rule` to every name-bearing field below `node`, in place.
///
/// Fields the rule does not match are left untouched. Returns the number of
/// fields that changed.
pub fn replace<'a>(rule: &RenameRule, node: impl Into<NodeMut<'a>>) -> usize {
    let mut changed = 0;
    walk_names_mut(node, &mut |slot: NameSlot, name: &mut String| {
        let before = name.clone();
        if rule.apply(name) {
            trace!(?slot, from = %before, to = %name, "renamed");
            changed += 1;
        }
    });
    changed
}

/// Apply each rule in order; later rules see the output of earlier ones.
pub fn replace_all<'a>(rules: &[RenameRule], node: impl Into<NodeMut<'a>>) -> usize {
    let mut node = node.into();
    rules
        .iter()
        .map(|rule| replace(rule, node.reborrow()))
        .sum()
}
