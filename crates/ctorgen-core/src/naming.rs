//! Parameter names for generated constructors.
//!
//! A member name becomes a lower-camel parameter name by splitting on
//! underscores (and any other non-alphanumeric character), lower-casing the
//! first letter of the first segment and upper-casing the first letter of
//! every later segment:
//!
//! - `FirstName`  -> `firstName`
//! - `First_Name` -> `firstName`
//! - `_count`     -> `count`
//!
//! A result that would start with a digit keeps a leading underscore
//! (`_1st` -> `_1st`, `2ndLine` -> `_2ndLine`) so it is still an identifier.
//! Reserved words are not escaped; that is up to whoever renders the code.
//!
//! Names that collide within one parameter list get `2`, `3`, ... appended,
//! in order; the first occurrence keeps the bare name.

use rustc_hash::{FxHashMap, FxHashSet};

/// Used when a member name has no alphanumeric characters at all.
pub const FALLBACK_PARAMETER_NAME: &str = "value";

pub fn parameter_name(member_name: &str) -> String {
    let mut name = String::with_capacity(member_name.len());
    for segment in member_name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
    {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if name.is_empty() {
            name.extend(first.to_lowercase());
        } else {
            name.extend(first.to_uppercase());
        }
        name.push_str(chars.as_str());
    }

    if name.is_empty() {
        return FALLBACK_PARAMETER_NAME.to_string();
    }
    if name.starts_with(|c: char| c.is_numeric()) {
        name.insert(0, '_');
    }
    name
}

/// Parameter names for `member_names`, one per entry and in the same order.
///
/// A suffixed name never reuses a name that another entry gets unsuffixed,
/// so `["A", "A", "A2"]` becomes `["a", "a3", "a2"]`.
pub fn unique_parameter_names<'a, I>(member_names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let bases: Vec<String> = member_names.into_iter().map(parameter_name).collect();

    let mut first_owner: FxHashMap<&str, usize> = FxHashMap::default();
    for (index, base) in bases.iter().enumerate() {
        first_owner.entry(base.as_str()).or_insert(index);
    }

    let mut taken: FxHashSet<String> = FxHashSet::default();
    let mut names = Vec::with_capacity(bases.len());
    for (index, base) in bases.iter().enumerate() {
        if first_owner.get(base.as_str()) == Some(&index) {
            taken.insert(base.clone());
            names.push(base.clone());
            continue;
        }

        let mut suffix = 2u32;
        let unique = loop {
            let candidate = format!("{base}{suffix}");
            if !taken.contains(&candidate) && !first_owner.contains_key(candidate.as_str()) {
                break candidate;
            }
            suffix += 1;
        };
        tracing::trace!(base = %base, name = %unique, "disambiguated parameter name");
        taken.insert(unique.clone());
        names.push(unique);
    }
    names
}

#[cfg(test)]
#[path = "../tests/naming_tests.rs"]
mod tests;
