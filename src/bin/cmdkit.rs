//! cmdkit CLI Binary
//!
//! Runs the built-in command set: `help` and `version`.

use anyhow::Context;
use clap::Parser;
use cmdkit::cli::{Cli, RunContext};
use cmdkit::logging::init_logging;
use cmdkit::output::StdoutSink;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let context = match RunContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", cmdkit::cli::map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(context.logging())) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&context, &cli.args) {
        error!("Command failed: {:#}", e);
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(context: &RunContext, args: &[String]) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("failed to start async runtime")?;

    debug!(args = ?args, "dispatching");
    let mut out = StdoutSink;
    runtime
        .block_on(context.execute(args, &mut out))
        .with_context(|| match args.first() {
            Some(name) => format!("running '{}'", name),
            None => "running default command".to_string(),
        })?;
    Ok(())
}
