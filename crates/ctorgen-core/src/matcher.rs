//! Matching a selection against the constructors a type already has.
//!
//! Comparisons treat both the selection and each constructor's assigned
//! members as sets. The selection's order is only used to lay out the
//! residual members of a delegation.

use crate::cancellation::CancellationToken;
use crate::error::Cancelled;
use crate::model::{Constructor, Member};
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// An existing constructor already assigns exactly the selected members.
    Exact(&'a Constructor),
    /// `delegate` assigns a non-empty proper subset of the selection;
    /// `residual` is the rest of the selection, in selection order.
    Delegatable {
        delegate: &'a Constructor,
        residual: Vec<&'a Member>,
    },
    None,
}

impl MatchResult<'_> {
    pub fn is_exact(&self) -> bool {
        matches!(self, MatchResult::Exact(_))
    }
}

/// Find an exact duplicate of `selection` among `constructors`, or else the
/// best delegation target: the constructor with the most assigned members,
/// ties going to the earliest declared.
///
/// `cancel` is polled before every constructor comparison.
pub fn match_constructors<'a>(
    selection: &'a Selection,
    constructors: &'a [Constructor],
    cancel: &CancellationToken,
) -> Result<MatchResult<'a>, Cancelled> {
    let mut ordered: Vec<&Constructor> = constructors.iter().collect();
    ordered.sort_by_key(|c| c.declaration_order);

    let mut best: Option<(&Constructor, usize)> = None;
    for constructor in ordered {
        cancel.check()?;

        let assigned = constructor.assigned_set();
        if !assigned.iter().all(|name| selection.contains(name)) {
            continue;
        }
        if assigned.len() == selection.len() {
            tracing::debug!(
                declaration_order = constructor.declaration_order,
                "existing constructor assigns exactly the selected members"
            );
            return Ok(MatchResult::Exact(constructor));
        }
        if assigned.is_empty() {
            continue;
        }
        // Strict `>` keeps the earliest declared constructor on ties.
        if best.is_none_or(|(_, size)| assigned.len() > size) {
            best = Some((constructor, assigned.len()));
        }
    }

    let Some((delegate, size)) = best else {
        return Ok(MatchResult::None);
    };

    let assigned = delegate.assigned_set();
    let residual: Vec<&Member> = selection
        .iter()
        .filter(|m| !assigned.contains(m.name.as_str()))
        .collect();
    tracing::debug!(
        declaration_order = delegate.declaration_order,
        delegated = size,
        residual = residual.len(),
        "selected delegation target"
    );
    Ok(MatchResult::Delegatable { delegate, residual })
}

#[cfg(test)]
#[path = "../tests/matcher_tests.rs"]
mod tests;
