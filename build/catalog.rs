//! Parsing and validation rules for the error kind lists.
//!
//! Shared by `build.rs` and the crate's tests, so it only depends on std.

use std::collections::HashSet;
use std::fmt::Write as _;

pub const GENERIC_KIND: &str = "generic_error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindDef {
    pub name: String,
    pub variant: String,
    pub origin: String,
}

/// Appends the kinds listed in `contents` to `kinds`.
///
/// `source` names the list in diagnostics.
pub fn parse_kinds(source: &str, contents: &str, kinds: &mut Vec<KindDef>) -> Result<(), String> {
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let origin = format!("{}:{}", source, idx + 1);
        if !is_valid_name(line) {
            return Err(format!(
                "{origin}: `{line}` is not a valid kind name (expected [a-z][a-z0-9_]*)"
            ));
        }
        let variant = to_variant(line);
        if variant.is_empty() || variant == "Self" {
            return Err(format!("{origin}: `{line}` would become the reserved identifier `{variant}`"));
        }
        kinds.push(KindDef { name: line.to_string(), variant, origin });
    }

    Ok(())
}

pub fn check_catalog(kinds: &[KindDef]) -> Result<(), String> {
    match kinds.first() {
        Some(first) if first.name == GENERIC_KIND => {}
        _ => return Err(format!("the kind catalog must start with `{GENERIC_KIND}`")),
    }

    let mut names = HashSet::new();
    let mut variants = HashSet::new();
    for kind in kinds {
        if !names.insert(kind.name.as_str()) {
            return Err(format!("{}: kind `{}` is defined twice", kind.origin, kind.name));
        }
        if !variants.insert(kind.variant.as_str()) {
            return Err(format!(
                "{}: kind `{}` collides with another kind as `{}`",
                kind.origin, kind.name, kind.variant
            ));
        }
    }

    Ok(())
}

pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some('a'..='z'))
        && chars.all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
}

pub fn to_variant(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

pub fn render(kinds: &[KindDef]) -> String {
    let mut out = String::from("// @generated by build.rs from the error kind lists.\n");
    out.push_str("define_error_kinds! {\n");
    for kind in kinds {
        let _ = writeln!(out, "    {} => \"{}\",", kind.variant, kind.name);
    }
    out.push_str("}\n");
    out
}
