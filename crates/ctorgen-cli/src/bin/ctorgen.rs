use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use ctorgen_cli::args::{CliArgs, OutputFormat};
use ctorgen_cli::driver;
use ctorgen_cli::reporter::{Reporter, render_json};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    ctorgen_cli::tracing_config::init_tracing(args.verbose);

    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let report = driver::run(&args, &cwd)?;

    let rendered = match args.format {
        OutputFormat::Text => {
            let color = !args.no_color && std::io::stdout().is_terminal();
            Reporter::new(color).render(&report)
        }
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{rendered}");
    Ok(())
}
