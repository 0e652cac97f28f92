//! Logging for the `ctorgen` binary.
//!
//! The planner logs each stage under the `ctorgen_core` target and the CLI
//! logs under `ctorgen_cli`. A bare level such as `CTORGEN_LOG=debug` is
//! scoped to those two crates, so dependency noise stays out; anything with a
//! `=` or `,` is handed to `EnvFilter` unchanged.
//!
//! ```bash
//! ctorgen types.json --type Person -v                 # planner stages at debug
//! CTORGEN_LOG=trace ctorgen types.json --type Person  # both crates at trace
//! CTORGEN_LOG=ctorgen_core::matcher=trace CTORGEN_LOG_FORMAT=tree ctorgen ...
//! ```
//!
//! `CTORGEN_LOG_FORMAT` picks `text` (default), `tree` or `json`. Nothing is
//! installed when neither the environment nor `-v` asks for logs.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "CTORGEN_LOG";
pub const LOG_FORMAT_ENV: &str = "CTORGEN_LOG_FORMAT";

const TARGETS: [&str; 2] = ["ctorgen_core", "ctorgen_cli"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

fn scoped(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Filter directives for the given environment value and `-v` count, or
/// `None` when logging stays off. The environment wins over `-v`.
pub fn filter_directives(env: Option<&str>, verbose: u8) -> Option<String> {
    match env.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) if value.contains('=') || value.contains(',') => Some(value.to_string()),
        Some(level) => Some(scoped(level)),
        None => match verbose {
            0 => None,
            1 => Some(scoped("debug")),
            _ => Some(scoped("trace")),
        },
    }
}

/// Install the global subscriber. `CTORGEN_LOG` is read first, then
/// `RUST_LOG`. Output goes to stderr so plans on stdout stay machine-readable.
pub fn init_tracing(verbose: u8) {
    let env = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    let Some(directives) = filter_directives(env.as_deref(), verbose) else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(directives);
    let format = LogFormat::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default());

    match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }

    #[test]
    fn test_bare_level_is_scoped_to_ctorgen() {
        assert_eq!(
            filter_directives(Some("debug"), 0).as_deref(),
            Some("ctorgen_core=debug,ctorgen_cli=debug")
        );
    }

    #[test]
    fn test_explicit_directives_pass_through() {
        assert_eq!(
            filter_directives(Some("ctorgen_core::matcher=trace"), 0).as_deref(),
            Some("ctorgen_core::matcher=trace")
        );
        assert_eq!(
            filter_directives(Some("info,hyper=off"), 2).as_deref(),
            Some("info,hyper=off")
        );
    }

    #[test]
    fn test_verbosity_without_env() {
        assert_eq!(filter_directives(None, 0), None);
        assert_eq!(filter_directives(Some("  "), 0), None);
        assert_eq!(
            filter_directives(None, 1).as_deref(),
            Some("ctorgen_core=debug,ctorgen_cli=debug")
        );
        assert_eq!(
            filter_directives(None, 3).as_deref(),
            Some("ctorgen_core=trace,ctorgen_cli=trace")
        );
    }
}
