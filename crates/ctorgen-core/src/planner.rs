//! Entry point wiring the planning stages together.
//!
//! member scan -> selection -> constructor match -> plans
//!
//! `try_*` methods report why nothing was offered. The plain methods fold
//! every non-cancellation outcome into an empty plan list, which is how the
//! refactoring surface consumes them: offering nothing is not an error.

use tracing::debug;

use crate::cancellation::CancellationToken;
use crate::error::{Cancelled, PlanError};
use crate::matcher::{MatchResult, match_constructors};
use crate::model::{Member, TypeDescriptor};
use crate::options::PlannerOptions;
use crate::plan::Plan;
use crate::providers::{MemberPicker, TypeQuery};
use crate::selection::{Selection, resolve_selection, resolve_with_picker};
use crate::synthesizer::synthesize;

#[derive(Debug, Clone, Default)]
pub struct ConstructorPlanner {
    options: PlannerOptions,
}

impl ConstructorPlanner {
    pub fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Plan constructors for `explicit`, or for every viable member when
    /// `explicit` is empty.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(type_name = %ty.name, explicit = explicit.len())
    )]
    pub fn try_plan(
        &self,
        ty: &TypeDescriptor,
        explicit: &[Member],
        cancel: &CancellationToken,
    ) -> Result<Vec<Plan>, PlanError> {
        cancel.check()?;
        let selection = resolve_selection(ty, explicit, &self.options)?;
        self.plan_selection(ty, &selection, cancel)
    }

    /// Plan constructors for the members `picker` chooses.
    #[tracing::instrument(level = "debug", skip_all, fields(type_name = %ty.name))]
    pub fn try_plan_with_picker(
        &self,
        ty: &TypeDescriptor,
        picker: &dyn MemberPicker,
        cancel: &CancellationToken,
    ) -> Result<Vec<Plan>, PlanError> {
        cancel.check()?;
        let selection = resolve_with_picker(ty, picker, &self.options)?;
        self.plan_selection(ty, &selection, cancel)
    }

    /// Fetch a snapshot of `type_name` from `query`, then plan with `picker`.
    pub fn try_plan_type(
        &self,
        query: &dyn TypeQuery,
        type_name: &str,
        picker: &dyn MemberPicker,
        cancel: &CancellationToken,
    ) -> Result<Vec<Plan>, PlanError> {
        let ty = query
            .type_descriptor(type_name)
            .ok_or_else(|| PlanError::UnknownType(type_name.to_string()))?;
        self.try_plan_with_picker(&ty, picker, cancel)
    }

    pub fn plan(
        &self,
        ty: &TypeDescriptor,
        explicit: &[Member],
        cancel: &CancellationToken,
    ) -> Result<Vec<Plan>, Cancelled> {
        offered(self.try_plan(ty, explicit, cancel))
    }

    pub fn plan_with_picker(
        &self,
        ty: &TypeDescriptor,
        picker: &dyn MemberPicker,
        cancel: &CancellationToken,
    ) -> Result<Vec<Plan>, Cancelled> {
        offered(self.try_plan_with_picker(ty, picker, cancel))
    }

    pub fn plan_type(
        &self,
        query: &dyn TypeQuery,
        type_name: &str,
        picker: &dyn MemberPicker,
        cancel: &CancellationToken,
    ) -> Result<Vec<Plan>, Cancelled> {
        offered(self.try_plan_type(query, type_name, picker, cancel))
    }

    fn plan_selection(
        &self,
        ty: &TypeDescriptor,
        selection: &Selection,
        cancel: &CancellationToken,
    ) -> Result<Vec<Plan>, PlanError> {
        // Between the member scan and the constructor scan.
        cancel.check()?;

        if selection.is_empty() {
            debug!("no viable members; offering parameterless constructor");
            return Ok(synthesize(selection, &MatchResult::None, &self.options));
        }

        let matched = match_constructors(selection, &ty.constructors, cancel)?;
        if matched.is_exact() {
            return Err(PlanError::NothingToGenerate {
                type_name: ty.name.clone(),
                reason: "a constructor assigning exactly these members already exists",
            });
        }

        let plans = synthesize(selection, &matched, &self.options);
        debug!(
            selected = selection.len(),
            plans = plans.len(),
            "constructor plans ready"
        );
        Ok(plans)
    }
}

/// Plan with default options and an explicit, possibly empty, selection.
pub fn plan_constructors(
    ty: &TypeDescriptor,
    explicit: &[Member],
    cancel: &CancellationToken,
) -> Result<Vec<Plan>, Cancelled> {
    ConstructorPlanner::default().plan(ty, explicit, cancel)
}

fn offered(result: Result<Vec<Plan>, PlanError>) -> Result<Vec<Plan>, Cancelled> {
    match result {
        Ok(plans) => Ok(plans),
        Err(PlanError::Cancelled(cancelled)) => Err(cancelled),
        Err(reason) => {
            debug!(%reason, "no constructor plans offered");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
#[path = "../tests/planner_tests.rs"]
mod tests;
