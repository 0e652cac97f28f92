//! Resolution of the working member selection.
//!
//! The caller either names members explicitly, hands in a `MemberPicker`, or
//! passes nothing, in which case every viable member is selected. A type with
//! no viable members yields the empty selection, which downstream turns into
//! the parameterless constructor plan, unless an explicit one already exists.

use indexmap::IndexMap;

use crate::error::{PlanError, SelectionIssue};
use crate::members::collect_viable_members;
use crate::model::{Member, TypeDescriptor};
use crate::options::PlannerOptions;
use crate::providers::MemberPicker;

/// Ordered, duplicate-free members a new constructor should initialize.
///
/// Order is caller-meaningful and flows unchanged into generated parameter
/// lists. Membership tests are keyed by member name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    members: IndexMap<String, Member>,
}

impl Selection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a selection; a repeated name keeps its first position.
    pub fn from_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Member>,
    {
        let mut map = IndexMap::new();
        for member in members {
            map.entry(member.name.clone()).or_insert(member);
        }
        Self { members: map }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }
}

fn check_target(ty: &TypeDescriptor) -> Result<(), PlanError> {
    if !ty.kind.supports_constructors() {
        return Err(PlanError::InvalidTarget {
            type_name: ty.name.clone(),
            reason: "only classes and structs declare constructors",
        });
    }
    if ty.is_static {
        return Err(PlanError::InvalidTarget {
            type_name: ty.name.clone(),
            reason: "static types have no instance constructors",
        });
    }
    Ok(())
}

fn validate_explicit(ty: &TypeDescriptor, explicit: &[Member]) -> Result<(), PlanError> {
    let viable = collect_viable_members(ty);
    let mut seen = rustc_hash::FxHashSet::default();
    for member in explicit {
        if !seen.insert(member.name.as_str()) {
            return Err(PlanError::InvalidSelection {
                member: member.name.clone(),
                issue: SelectionIssue::Duplicate,
            });
        }
        if !viable.iter().any(|m| m.name == member.name) {
            let issue = if ty.member(&member.name).is_some() {
                SelectionIssue::NotViable
            } else {
                SelectionIssue::NotFound
            };
            return Err(PlanError::InvalidSelection {
                member: member.name.clone(),
                issue,
            });
        }
    }
    Ok(())
}

fn explicit_selection(
    ty: &TypeDescriptor,
    explicit: &[Member],
    options: &PlannerOptions,
) -> Result<Selection, PlanError> {
    if options.validate_selection {
        validate_explicit(ty, explicit)?;
    }
    Ok(Selection::from_members(explicit.iter().cloned()))
}

/// Selection used when the type has nothing viable to offer.
fn fallback_selection(ty: &TypeDescriptor) -> Result<Selection, PlanError> {
    if ty.explicit_parameterless_constructor().is_some() {
        return Err(PlanError::NothingToGenerate {
            type_name: ty.name.clone(),
            reason: "no viable members and an explicit parameterless constructor exists",
        });
    }
    Ok(Selection::empty())
}

/// Resolve the working selection from an explicit, possibly empty, list.
pub fn resolve_selection(
    ty: &TypeDescriptor,
    explicit: &[Member],
    options: &PlannerOptions,
) -> Result<Selection, PlanError> {
    check_target(ty)?;

    if !explicit.is_empty() {
        return explicit_selection(ty, explicit, options);
    }

    let viable = collect_viable_members(ty);
    if viable.is_empty() {
        return fallback_selection(ty);
    }
    Ok(Selection::from_members(viable.into_iter().cloned()))
}

/// Resolve the working selection by asking `picker` to choose among the
/// viable members. Declining, or choosing nothing, means nothing to generate.
pub fn resolve_with_picker(
    ty: &TypeDescriptor,
    picker: &dyn MemberPicker,
    options: &PlannerOptions,
) -> Result<Selection, PlanError> {
    check_target(ty)?;

    let viable = collect_viable_members(ty);
    if viable.is_empty() {
        return fallback_selection(ty);
    }

    match picker.pick_members(ty, &viable) {
        Some(picked) if !picked.is_empty() => explicit_selection(ty, &picked, options),
        _ => Err(PlanError::NothingToGenerate {
            type_name: ty.name.clone(),
            reason: "member selection was dismissed",
        }),
    }
}

#[cfg(test)]
#[path = "../tests/selection_tests.rs"]
mod tests;
