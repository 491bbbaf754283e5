//! `bomplan config` command - show the effective configuration

use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, InputArgs, OutputFormat};

pub fn run(args: InputArgs, global: &GlobalOpts) -> Result<()> {
    let config = args.resolve()?;

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config).into_diagnostic()?);
        }
        _ => print!("{}", serde_yml::to_string(&config).into_diagnostic()?),
    }

    Ok(())
}
