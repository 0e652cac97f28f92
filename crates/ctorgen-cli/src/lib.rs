//! Command-line driver for the ctorgen constructor planner.
//!
//! Loads a JSON catalog of type snapshots, layers `ctorgen.json` under the
//! command-line flags, runs the planner and prints the plans.

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod tracing_config;
