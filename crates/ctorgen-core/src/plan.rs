//! Plans describing constructors to generate.
//!
//! A plan is descriptive only; turning it into source text is left to the
//! rendering layer, which matches on `Plan` exhaustively.

use serde::{Deserialize, Serialize};

use crate::model::Constructor;

/// A parameter of the constructor being generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// The member this parameter initializes.
    pub member: String,
}

/// One positional argument of the delegating call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateArgument {
    /// Zero-based position in the delegate's parameter list.
    pub position: usize,
    /// Name of the delegate's parameter at `position`.
    pub delegate_parameter: String,
    /// The delegate-assigned member bound to this position.
    pub member: Option<String>,
    /// Generated parameter passed at this position. `None` when no selected
    /// member could be bound; the renderer passes the type's default value.
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Plan {
    /// Every parameter is assigned straight to its member.
    FieldAssign { parameters: Vec<GeneratedParameter> },
    /// Call `delegate` for the members it covers, then assign the residual
    /// members. `parameters` is the full list, in selection order.
    DelegateThenAssign {
        delegate: Constructor,
        parameters: Vec<GeneratedParameter>,
        /// One entry per delegate parameter, in the delegate's order.
        delegate_arguments: Vec<DelegateArgument>,
        residual: Vec<GeneratedParameter>,
    },
    /// A constructor with no parameters and an empty body.
    NoParam,
}

impl Plan {
    pub fn parameters(&self) -> &[GeneratedParameter] {
        match self {
            Plan::FieldAssign { parameters } | Plan::DelegateThenAssign { parameters, .. } => {
                parameters.as_slice()
            }
            Plan::NoParam => &[],
        }
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters().iter().map(|p| p.name.as_str()).collect()
    }

    /// Short, stable identifier of the plan kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Plan::FieldAssign { .. } => "fieldAssign",
            Plan::DelegateThenAssign { .. } => "delegateThenAssign",
            Plan::NoParam => "noParam",
        }
    }

    /// Title shown when the plan is offered, e.g.
    /// `Generate constructor 'Person(string, int)'`.
    pub fn title(&self, type_name: &str) -> String {
        let signature = self
            .parameters()
            .iter()
            .map(|p| p.ty.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        match self {
            Plan::FieldAssign { .. } | Plan::NoParam => {
                format!("Generate constructor '{type_name}({signature})'")
            }
            Plan::DelegateThenAssign { .. } => {
                format!("Generate delegating constructor '{type_name}({signature})'")
            }
        }
    }
}
