//! `ctorgen.json` loading and option layering.
//!
//! Precedence, lowest first: built-in defaults, config file, command-line
//! flags. Flags can only switch behavior off.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use ctorgen_core::PlannerOptions;

use crate::args::CliArgs;

pub const DEFAULT_CONFIG_FILE: &str = "ctorgen.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CtorgenConfig {
    #[serde(default)]
    pub planner: PlannerOptions,
}

pub fn parse_config(text: &str) -> Result<CtorgenConfig> {
    serde_json::from_str(text).context("failed to parse ctorgen config")
}

pub fn load_config(path: &Path) -> Result<CtorgenConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// The config file to use: the explicit one (which must exist), else
/// `ctorgen.json` in `cwd` if present.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        if !path.is_file() {
            bail!("config not found at {}", path.display());
        }
        return Ok(Some(path));
    }

    let candidate = cwd.join(DEFAULT_CONFIG_FILE);
    Ok(candidate.is_file().then_some(candidate))
}

pub fn resolve_options(args: &CliArgs, config: Option<&CtorgenConfig>) -> PlannerOptions {
    let mut options = config.map(|c| c.planner).unwrap_or_default();
    if args.no_validate_selection {
        options.validate_selection = false;
    }
    if args.no_delegation {
        options.offer_delegation = false;
    }
    options
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
