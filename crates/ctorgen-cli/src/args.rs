use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ctorgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "ctorgen",
    version,
    about = "Plan constructors generated from a type's members"
)]
pub struct CliArgs {
    /// JSON catalog of type snapshots (`{"types": [...]}`).
    pub snapshot: PathBuf,

    /// Name of the type to plan constructors for.
    #[arg(short = 't', long = "type")]
    pub type_name: String,

    /// Member to initialize; repeat to select several, in order.
    /// Without any, every writable instance member is selected.
    #[arg(short = 'm', long = "member")]
    pub members: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file; defaults to `ctorgen.json` in the current directory.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Trust the member selection instead of checking it against the type.
    #[arg(long = "no-validate-selection")]
    pub no_validate_selection: bool,

    /// Do not offer constructors that delegate to an existing one.
    #[arg(long = "no-delegation")]
    pub no_delegation: bool,

    /// Disable colored text output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log planner stages to stderr; `-vv` for trace. `CTORGEN_LOG` overrides.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod tests;
