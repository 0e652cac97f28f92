//! Turning a selection and its match result into plans.

use crate::matcher::MatchResult;
use crate::model::{Constructor, Parameter};
use crate::naming::{parameter_name, unique_parameter_names};
use crate::options::PlannerOptions;
use crate::plan::{DelegateArgument, GeneratedParameter, Plan};
use crate::selection::Selection;

/// One parameter per selected member, in selection order, with collision-free
/// names.
pub fn generate_parameters(selection: &Selection) -> Vec<GeneratedParameter> {
    let names = unique_parameter_names(selection.names());
    selection
        .iter()
        .zip(names)
        .map(|(member, name)| GeneratedParameter {
            name,
            ty: member.ty.clone(),
            member: member.name.clone(),
        })
        .collect()
}

/// Arguments for the call to `delegate`, one per delegate parameter and in
/// the delegate's own order.
///
/// Each delegate parameter is bound to a generated parameter for one of the
/// members the delegate assigns. Bindings are tried in passes, each pass
/// only seeing what earlier passes left unbound:
/// 1. the snapshot's explicit `member` on the delegate parameter
/// 2. name: the delegate parameter is named after the member
/// 3. type: the first unbound member of the same type, in selection order
///
/// A delegate parameter with an explicit `member` never falls through to the
/// later passes. Anything still unbound gets no argument.
pub fn bind_delegate_arguments(
    delegate: &Constructor,
    parameters: &[GeneratedParameter],
) -> Vec<DelegateArgument> {
    let assigned = delegate.assigned_set();
    let candidates: Vec<&GeneratedParameter> = parameters
        .iter()
        .filter(|p| assigned.contains(p.member.as_str()))
        .collect();

    let mut bound: Vec<Option<usize>> = vec![None; delegate.parameters.len()];
    bind_pass(&delegate.parameters, &candidates, &mut bound, |slot, c| {
        slot.member.as_deref() == Some(c.member.as_str())
    });
    bind_pass(&delegate.parameters, &candidates, &mut bound, |slot, c| {
        slot.member.is_none() && (slot.name == c.member || slot.name == parameter_name(&c.member))
    });
    bind_pass(&delegate.parameters, &candidates, &mut bound, |slot, c| {
        slot.member.is_none() && slot.ty == c.ty
    });

    delegate
        .parameters
        .iter()
        .zip(bound)
        .enumerate()
        .map(|(position, (slot, candidate))| {
            let candidate = candidate.map(|index| candidates[index]);
            if candidate.is_none() {
                tracing::debug!(
                    position,
                    delegate_parameter = %slot.name,
                    "delegate parameter left unbound"
                );
            }
            DelegateArgument {
                position,
                delegate_parameter: slot.name.clone(),
                member: candidate.map(|c| c.member.clone()),
                parameter: candidate.map(|c| c.name.clone()),
            }
        })
        .collect()
}

fn bind_pass(
    slots: &[Parameter],
    candidates: &[&GeneratedParameter],
    bound: &mut [Option<usize>],
    matches: impl Fn(&Parameter, &GeneratedParameter) -> bool,
) {
    for (position, slot) in slots.iter().enumerate() {
        if bound[position].is_some() {
            continue;
        }
        let found = (0..candidates.len())
            .find(|&index| !bound.contains(&Some(index)) && matches(slot, candidates[index]));
        bound[position] = found;
    }
}

/// Plans to offer, in order: the field-assigning constructor, then the
/// delegating one when a delegation target exists.
///
/// The empty selection always yields just `NoParam`; an exact match yields
/// nothing.
pub fn synthesize(
    selection: &Selection,
    matched: &MatchResult<'_>,
    options: &PlannerOptions,
) -> Vec<Plan> {
    if selection.is_empty() {
        return vec![Plan::NoParam];
    }

    let parameters = generate_parameters(selection);
    let mut plans = Vec::with_capacity(2);
    match matched {
        MatchResult::Exact(_) => return plans,
        MatchResult::None => {
            plans.push(Plan::FieldAssign { parameters });
        }
        MatchResult::Delegatable { delegate, residual } => {
            plans.push(Plan::FieldAssign {
                parameters: parameters.clone(),
            });
            if options.offer_delegation {
                let delegate_arguments = bind_delegate_arguments(delegate, &parameters);
                let residual = residual
                    .iter()
                    .filter_map(|m| parameters.iter().find(|p| p.member == m.name))
                    .cloned()
                    .collect();
                plans.push(Plan::DelegateThenAssign {
                    delegate: (*delegate).clone(),
                    parameters,
                    delegate_arguments,
                    residual,
                });
            }
        }
    }
    plans
}

#[cfg(test)]
#[path = "../tests/synthesizer_tests.rs"]
mod tests;
