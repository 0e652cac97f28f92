//! Seams to the collaborators the planner consumes.
//!
//! - `TypeQuery`: hands out `TypeDescriptor` snapshots by type name
//! - `MemberPicker`: chooses the members a new constructor should take
//!
//! `TypeCatalog` is a JSON-backed `TypeQuery` used by the command-line driver
//! and by tests; `PickAll` is the picker behind the "offer all viable members"
//! default. Any `Fn(&TypeDescriptor, &[&Member]) -> Option<Vec<Member>>` is a
//! picker too.

use serde::{Deserialize, Serialize};

use crate::model::{Member, TypeDescriptor};

/// Source of type snapshots.
pub trait TypeQuery {
    /// A snapshot of the named type, or `None` if the type is unknown.
    fn type_descriptor(&self, name: &str) -> Option<TypeDescriptor>;
}

/// Chooses members among the viable candidates of a type.
///
/// Returning `None` means the choice was dismissed.
pub trait MemberPicker {
    fn pick_members(&self, ty: &TypeDescriptor, candidates: &[&Member]) -> Option<Vec<Member>>;
}

impl<F> MemberPicker for F
where
    F: Fn(&TypeDescriptor, &[&Member]) -> Option<Vec<Member>>,
{
    fn pick_members(&self, ty: &TypeDescriptor, candidates: &[&Member]) -> Option<Vec<Member>> {
        self(ty, candidates)
    }
}

/// Accepts every candidate, in the order offered.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickAll;

impl MemberPicker for PickAll {
    fn pick_members(&self, _ty: &TypeDescriptor, candidates: &[&Member]) -> Option<Vec<Member>> {
        Some(candidates.iter().map(|m| (*m).clone()).collect())
    }
}

/// A set of type snapshots, typically loaded from a JSON file of the form
/// `{"types": [ ... ]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCatalog {
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl TypeCatalog {
    pub fn new(types: Vec<TypeDescriptor>) -> Self {
        Self { types }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }
}

impl TypeQuery for TypeCatalog {
    fn type_descriptor(&self, name: &str) -> Option<TypeDescriptor> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
#[path = "../tests/providers_tests.rs"]
mod tests;
