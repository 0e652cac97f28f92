use serde::{Deserialize, Serialize};

/// Knobs for a `ConstructorPlanner`.
///
/// Deserializes from a partial JSON object; absent keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerOptions {
    /// Reject explicit selections that repeat a member or name a member that
    /// is not a writable instance field or property.
    pub validate_selection: bool,
    /// Offer the delegating plan when a narrower constructor exists.
    pub offer_delegation: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            validate_selection: true,
            offer_delegation: true,
        }
    }
}
