//! Planning core for the "generate constructor from members" refactoring.
//!
//! Given a snapshot of a type (its members and existing constructors) and a
//! member selection, the planner decides which constructors are worth
//! offering:
//! - a constructor assigning every selected member from a parameter
//! - a constructor delegating to the largest existing constructor that covers
//!   part of the selection, then assigning the rest
//! - a parameterless constructor when the type has nothing to initialize
//!
//! Nothing is offered when an equivalent constructor already exists or the
//! type cannot have instance constructors. Rendering the plans into source
//! text is left to the caller.

// Snapshot model supplied by the analysis layer
pub mod model;
pub use model::{Constructor, Member, MemberKind, Parameter, TypeDescriptor, TypeKind};

pub mod cancellation;
pub use cancellation::CancellationToken;

pub mod error;
pub use error::{Cancelled, PlanError, SelectionIssue};

pub mod options;
pub use options::PlannerOptions;

// Collaborator seams (type snapshots, member pickers)
pub mod providers;
pub use providers::{MemberPicker, PickAll, TypeCatalog, TypeQuery};

// Pipeline stages
pub mod members;
pub use members::{collect_viable_members, is_viable};

pub mod selection;
pub use selection::{Selection, resolve_selection, resolve_with_picker};

pub mod matcher;
pub use matcher::{MatchResult, match_constructors};

pub mod naming;

pub mod plan;
pub use plan::{DelegateArgument, GeneratedParameter, Plan};

pub mod synthesizer;
pub use synthesizer::synthesize;

pub mod planner;
pub use planner::{ConstructorPlanner, plan_constructors};
