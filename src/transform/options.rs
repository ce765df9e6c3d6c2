//! Pipeline options

use std::str::FromStr;

use regex::Regex;

use super::error::TransformError;

/// A regular expression matched against definition names.
///
/// Parsed from `/pattern/` or a bare `pattern`. Matching is unanchored.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, TransformError> {
        Ok(Self {
            regex: compile(pattern)?,
        })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl FromStr for NamePattern {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('/').unwrap_or(s);
        let s = s.strip_suffix('/').unwrap_or(s);
        Self::new(s)
    }
}

/// A `(pattern, replacement)` pair applied to every name in a definition.
///
/// Substitution replaces the first match only. The replacement follows the
/// JavaScript `String.prototype.replace` syntax: `$$`, `$&`, `` $` ``, `$'`,
/// `$n`/`$nn` for groups the pattern defines and `$<name>` when the pattern
/// has named groups. Any other `$` is literal text.
#[derive(Debug, Clone)]
pub struct RenameRule {
    regex: Regex,
    replacement: Vec<ReplacementPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplacementPart {
    Literal(String),
    Group(usize),
    Named(String),
    Match,
    Before,
    After,
}

impl RenameRule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, TransformError> {
        let regex = compile(pattern)?;
        let replacement = parse_replacement(replacement, &regex);
        Ok(Self { regex, replacement })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Apply the rule to `name` in place. Returns whether `name` changed.
    pub fn apply(&self, name: &mut String) -> bool {
        let Some(captures) = self.regex.captures(name) else {
            return false;
        };
        let Some(whole) = captures.get(0) else {
            return false;
        };
        let (before, after) = (&name[..whole.start()], &name[whole.end()..]);
        let mut replaced = String::with_capacity(name.len());
        replaced.push_str(before);
        for part in &self.replacement {
            match part {
                ReplacementPart::Literal(text) => replaced.push_str(text),
                ReplacementPart::Match => replaced.push_str(whole.as_str()),
                ReplacementPart::Before => replaced.push_str(before),
                ReplacementPart::After => replaced.push_str(after),
                ReplacementPart::Group(index) => {
                    if let Some(group) = captures.get(*index) {
                        replaced.push_str(group.as_str());
                    }
                }
                ReplacementPart::Named(group) => {
                    if let Some(group) = captures.name(group) {
                        replaced.push_str(group.as_str());
                    }
                }
            }
        }
        replaced.push_str(after);
        if replaced == *name {
            return false;
        }
        *name = replaced;
        true
    }
}

impl FromStr for RenameRule {
    type Err = TransformError;

    /// Parse `s/pattern/replacement/`. The leading `s`, the leading `/` and
    /// the trailing `/` are optional; neither part may contain `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix('s').unwrap_or(s);
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        match rest.split_once('/') {
            Some((pattern, replacement)) if !replacement.contains('/') => {
                Self::new(pattern, replacement)
            }
            _ => Err(TransformError::InvalidRename(s.to_string())),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, TransformError> {
    Regex::new(pattern).map_err(|source| TransformError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Split a replacement string into literal text and substitutions.
///
/// Group references are resolved against `regex`: `$nn` is tried before
/// `$n`, and a reference to a group the pattern lacks stays literal.
fn parse_replacement(replacement: &str, regex: &Regex) -> Vec<ReplacementPart> {
    let groups = regex.captures_len() - 1;
    let has_named = regex.capture_names().flatten().next().is_some();
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = replacement;
    while let Some(dollar) = rest.find('$') {
        literal.push_str(&rest[..dollar]);
        let tail = &rest[dollar + 1..];
        match substitution(tail, groups, has_named) {
            Some((ReplacementPart::Literal(text), used)) => {
                literal.push_str(&text);
                rest = &tail[used..];
            }
            Some((part, used)) => {
                if !literal.is_empty() {
                    parts.push(ReplacementPart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(part);
                rest = &tail[used..];
            }
            None => {
                literal.push('$');
                rest = tail;
            }
        }
    }
    literal.push_str(rest);
    if !literal.is_empty() {
        parts.push(ReplacementPart::Literal(literal));
    }
    parts
}

/// The substitution starting right after a `$`, with the bytes it consumes.
fn substitution(tail: &str, groups: usize, has_named: bool) -> Option<(ReplacementPart, usize)> {
    let bytes = tail.as_bytes();
    match *bytes.first()? {
        b'$' => Some((ReplacementPart::Literal("$".to_string()), 1)),
        b'&' => Some((ReplacementPart::Match, 1)),
        b'`' => Some((ReplacementPart::Before, 1)),
        b'\'' => Some((ReplacementPart::After, 1)),
        b'<' if has_named => {
            let end = tail.find('>')?;
            Some((ReplacementPart::Named(tail[1..end].to_string()), end + 1))
        }
        digit if digit.is_ascii_digit() => {
            let one = usize::from(digit - b'0');
            if let Some(second) = bytes.get(1).copied().filter(u8::is_ascii_digit) {
                let two = one * 10 + usize::from(second - b'0');
                if (1..=groups).contains(&two) {
                    return Some((ReplacementPart::Group(two), 2));
                }
            }
            (1..=groups)
                .contains(&one)
                .then_some((ReplacementPart::Group(one), 1))
        }
        _ => None,
    }
}

/// Options steering the rewrite pipeline.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Synthesize an interface with this name holding one attribute per
    /// interface and enum.
    pub module_name: Option<String>,
    /// Prefix added to interface names and every reference to them.
    pub prefix_interfaces: Option<String>,
    /// Operations starting with this prefix become static, prefix stripped.
    pub static_operation_prefix: Option<String>,
    /// Append a `void delete()` operation to definitions with members.
    pub add_delete_operation: bool,
    /// Append an `attribute number ptr` to definitions with members.
    pub add_emscripten_ptr_attribute: bool,
    /// Lower-case the first character of non-constructor operation names.
    pub uncapitalize_operations: bool,
    /// Applied in order after `only`/`skip` filtering.
    pub rename: Vec<RenameRule>,
    /// A definition is kept only if its name matches every pattern.
    pub only: Vec<NamePattern>,
    /// A definition is dropped if its name matches any pattern.
    pub skip: Vec<NamePattern>,
    /// Fail the run on a parse error instead of warning and continuing.
    pub bail: bool,
    /// Allow several definitions with one name to be merged.
    pub merge: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            module_name: None,
            prefix_interfaces: None,
            static_operation_prefix: None,
            add_delete_operation: false,
            add_emscripten_ptr_attribute: false,
            uncapitalize_operations: false,
            rename: Vec::new(),
            only: Vec::new(),
            skip: Vec::new(),
            bail: false,
            merge: true,
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    pub fn with_prefix_interfaces(mut self, prefix: impl Into<String>) -> Self {
        self.prefix_interfaces = Some(prefix.into());
        self
    }

    pub fn with_static_operation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.static_operation_prefix = Some(prefix.into());
        self
    }

    pub fn with_delete_operation(mut self) -> Self {
        self.add_delete_operation = true;
        self
    }

    pub fn with_emscripten_ptr_attribute(mut self) -> Self {
        self.add_emscripten_ptr_attribute = true;
        self
    }

    pub fn with_uncapitalized_operations(mut self) -> Self {
        self.uncapitalize_operations = true;
        self
    }

    pub fn with_rename(mut self, rule: RenameRule) -> Self {
        self.rename.push(rule);
        self
    }

    pub fn with_only(mut self, pattern: NamePattern) -> Self {
        self.only.push(pattern);
        self
    }

    pub fn with_skip(mut self, pattern: NamePattern) -> Self {
        self.skip.push(pattern);
        self
    }

    pub fn with_bail(mut self, bail: bool) -> Self {
        self.bail = bail;
        self
    }

    pub fn with_merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    /// Configured interface prefix, treating an empty string as unset.
    pub(crate) fn interface_prefix(&self) -> Option<&str> {
        non_empty(&self.prefix_interfaces)
    }

    pub(crate) fn static_prefix(&self) -> Option<&str> {
        non_empty(&self.static_operation_prefix)
    }

    pub(crate) fn module(&self) -> Option<&str> {
        non_empty(&self.module_name)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
