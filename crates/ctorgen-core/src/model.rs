//! Snapshot types handed in by the program-analysis layer.
//!
//! Everything here is a plain value: a `TypeDescriptor` is built once per
//! planning call (usually deserialized from JSON) and never mutated by the
//! planner. Declaration order is materialized explicitly on members and
//! constructors so matching and tie-breaks stay deterministic without a live
//! symbol table.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, SelectionIssue};

/// The kind of a named type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl TypeKind {
    /// Only classes and structs can declare instance constructors.
    pub const fn supports_constructors(self) -> bool {
        matches!(self, TypeKind::Class | TypeKind::Struct)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    Field,
    Property,
    Method,
    Event,
    Constant,
}

fn default_writable() -> bool {
    true
}

/// A member declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member identity; unique within its type.
    pub name: String,
    /// Type signature as the analysis layer spells it (e.g. `string`).
    #[serde(rename = "type")]
    pub ty: String,
    pub kind: MemberKind,
    #[serde(default)]
    pub is_static: bool,
    /// Fields: not const/readonly-after-construction. Properties: has an
    /// accessible setter, or is get-only but assignable in a constructor.
    #[serde(default = "default_writable")]
    pub writable: bool,
    /// Compiler-generated members (backing fields and the like).
    #[serde(default)]
    pub implicitly_declared: bool,
    pub declaration_order: u32,
}

impl Member {
    pub fn field(name: impl Into<String>, ty: impl Into<String>, declaration_order: u32) -> Self {
        Self::new(MemberKind::Field, name, ty, declaration_order)
    }

    pub fn property(
        name: impl Into<String>,
        ty: impl Into<String>,
        declaration_order: u32,
    ) -> Self {
        Self::new(MemberKind::Property, name, ty, declaration_order)
    }

    pub fn new(
        kind: MemberKind,
        name: impl Into<String>,
        ty: impl Into<String>,
        declaration_order: u32,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            kind,
            is_static: false,
            writable: true,
            implicitly_declared: false,
            declaration_order,
        }
    }

    #[must_use]
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    #[must_use]
    pub fn implicit(mut self) -> Self {
        self.implicitly_declared = true;
        self
    }
}

/// A parameter of an existing constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// The member this parameter is stored into, when the analysis layer
    /// knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
}

/// An existing instance constructor of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    pub declaration_order: u32,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Names of the members this constructor unconditionally initializes.
    /// Treated as a set; duplicates are ignored.
    #[serde(default)]
    pub assigned_members: Vec<String>,
    /// True for the compiler-synthesized default constructor.
    #[serde(default)]
    pub implicitly_declared: bool,
}

impl Constructor {
    pub fn new(declaration_order: u32) -> Self {
        Self {
            declaration_order,
            parameters: Vec::new(),
            assigned_members: Vec::new(),
            implicitly_declared: false,
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            ty: ty.into(),
            member: None,
        });
        self
    }

    /// Adds a parameter known to initialize `member`.
    #[must_use]
    pub fn with_parameter_for(
        mut self,
        name: impl Into<String>,
        ty: impl Into<String>,
        member: impl Into<String>,
    ) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            ty: ty.into(),
            member: Some(member.into()),
        });
        self
    }

    #[must_use]
    pub fn assigning(mut self, member: impl Into<String>) -> Self {
        self.assigned_members.push(member.into());
        self
    }

    #[must_use]
    pub fn implicit(mut self) -> Self {
        self.implicitly_declared = true;
        self
    }

    pub fn is_parameterless(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn assigned_set(&self) -> FxHashSet<&str> {
        self.assigned_members.iter().map(String::as_str).collect()
    }

    /// Parameter types joined the way plan titles display a signature.
    pub fn signature(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.ty.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Read-only snapshot of a named type: its own members and constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub constructors: Vec<Constructor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_static: false,
            members: Vec::new(),
            constructors: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Struct)
    }

    #[must_use]
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Look up members by name, keeping the caller's order.
    pub fn select_members<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Member>, PlanError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.member(name)
                    .cloned()
                    .ok_or_else(|| PlanError::InvalidSelection {
                        member: name.to_string(),
                        issue: SelectionIssue::NotFound,
                    })
            })
            .collect()
    }

    /// An explicit constructor taking no parameters. The implicit default
    /// constructor does not count.
    pub fn explicit_parameterless_constructor(&self) -> Option<&Constructor> {
        self.constructors
            .iter()
            .find(|c| c.is_parameterless() && !c.implicitly_declared)
    }
}
