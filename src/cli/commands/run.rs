//! `bomplan run` command - the full planning pipeline
//!
//! Writes the provided-component CSV, prints one line per unprovided
//! assembly step and the overall takt time, then prints a summary. In an
//! interactive terminal it waits for a key press before exiting.

use console::style;
use miette::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::helpers::ExitGate;
use crate::cli::RunArgs;
use crate::core::{run_plan, Config};

pub fn run(args: RunArgs) -> ExitCode {
    let mut wait_requested = !args.no_wait;

    let result = args.inputs.resolve().and_then(|config| {
        wait_requested &= config.wait_for_key;
        execute(&config)
    });

    let code = match result {
        Ok(output) => {
            println!(
                "{} Component report written to {}",
                style("✓").green(),
                style(output.display()).cyan()
            );
            ExitCode::SUCCESS
        }
        Err(report) => {
            eprintln!("{:?}", report);
            eprintln!("{} Planning failed", style("✗").red());
            ExitCode::FAILURE
        }
    };

    ExitGate::new(wait_requested).wait();
    code
}

fn execute(config: &Config) -> Result<PathBuf> {
    let report = run_plan(config)?;

    for line in report.unprovided_lines() {
        println!("{}", line);
    }
    println!("{}", report.takt_line());

    Ok(config.output.clone())
}
