//! Outcomes that stop a planning call short.
//!
//! Only `Cancelled` is a real failure from the caller's point of view. The
//! other variants explain why nothing was offered; `ConstructorPlanner::plan`
//! folds them into an empty plan list.

use std::fmt;

/// The cancellation signal was observed mid-computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("constructor planning was cancelled")]
pub struct Cancelled;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionIssue {
    /// The same member was selected more than once.
    Duplicate,
    /// The member exists but is not a writable instance field or property.
    NotViable,
    /// No member of that name is declared on the type.
    NotFound,
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SelectionIssue::Duplicate => "selected more than once",
            SelectionIssue::NotViable => "not a writable instance field or property",
            SelectionIssue::NotFound => "not declared on the type",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("'{type_name}' cannot receive a generated constructor: {reason}")]
    InvalidTarget {
        type_name: String,
        reason: &'static str,
    },

    #[error("nothing to generate for '{type_name}': {reason}")]
    NothingToGenerate {
        type_name: String,
        reason: &'static str,
    },

    #[error("member '{member}' is {issue}")]
    InvalidSelection {
        member: String,
        issue: SelectionIssue,
    },

    #[error("no snapshot available for type '{0}'")]
    UnknownType(String),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl PlanError {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, PlanError::Cancelled(_))
    }
}
