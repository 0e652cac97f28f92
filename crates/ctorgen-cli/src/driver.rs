use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing::info;

use ctorgen_core::{CancellationToken, ConstructorPlanner, PickAll, Plan, TypeCatalog};

use crate::args::CliArgs;
use crate::config::{find_config, load_config, resolve_options};

/// Plans produced for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReport {
    pub type_name: String,
    pub plans: Vec<Plan>,
}

pub fn load_catalog(path: &Path) -> Result<TypeCatalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    TypeCatalog::from_json(&text)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<PlanReport> {
    let config_path = find_config(args.config.as_deref(), cwd)?;
    let config = config_path.as_deref().map(load_config).transpose()?;
    let options = resolve_options(args, config.as_ref());

    let snapshot = if args.snapshot.is_absolute() {
        args.snapshot.clone()
    } else {
        cwd.join(&args.snapshot)
    };
    let catalog = load_catalog(&snapshot)?;
    let ty = catalog.get(&args.type_name).ok_or_else(|| {
        let available = catalog.type_names().collect::<Vec<_>>().join(", ");
        anyhow!(
            "type '{}' not found in {} (available: {})",
            args.type_name,
            snapshot.display(),
            if available.is_empty() { "none" } else { available.as_str() }
        )
    })?;

    let planner = ConstructorPlanner::new(options);
    info!(
        type_name = %ty.name,
        config = ?config_path,
        options = ?planner.options(),
        "planning constructors"
    );
    let cancel = CancellationToken::new();
    let plans = if args.members.is_empty() {
        planner.plan_with_picker(ty, &PickAll, &cancel)?
    } else {
        let explicit = ty
            .select_members(&args.members)
            .with_context(|| format!("invalid member selection for '{}'", ty.name))?;
        planner.plan(ty, &explicit, &cancel)?
    };

    Ok(PlanReport {
        type_name: ty.name.clone(),
        plans,
    })
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
