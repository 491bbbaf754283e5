//! Command-line argument definitions

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::components::ComponentsArgs;
use crate::core::Config;

/// bomplan - component totals, unprovided steps, and takt time from a BOM
#[derive(Parser, Debug)]
#[command(name = "bomplan", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    // Arguments for `run` when no command is given
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Ids of the top-level `run` arguments
const TOP_LEVEL_RUN_ARGS: [&str; 4] = ["bom", "routings", "output", "no_wait"];

impl Cli {
    /// Parse the process arguments, exiting with a usage error on misuse
    ///
    /// Run arguments given before a subcommand would otherwise be parsed and
    /// then ignored, so they are rejected.
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args` (program name first) like [`Cli::parse_args`]
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut cmd = Self::command();
        let matches = cmd.try_get_matches_from_mut(args)?;

        if let Some(name) = matches.subcommand_name() {
            let misplaced = TOP_LEVEL_RUN_ARGS
                .iter()
                .find(|id| matches.value_source(id) == Some(ValueSource::CommandLine));
            if let Some(id) = misplaced {
                let flag = format!("--{}", id.replace('_', "-"));
                return Err(cmd.error(
                    ErrorKind::ArgumentConflict,
                    format!("'{flag}' cannot be used before a subcommand; pass it after '{name}'"),
                ));
            }
        }

        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))
    }
}

/// Options accepted by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format for listing commands
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write output.csv and report unprovided steps and takt time (default)
    Run(RunArgs),

    /// List aggregated component quantities
    Components(ComponentsArgs),

    /// List assemblies that are unprovided or have unprovided sub-components
    Unprovided(InputArgs),

    /// Show matched routing steps and total takt time
    Takt(InputArgs),

    /// List every BOM node below the root in traversal order
    Flatten(InputArgs),

    /// Print the effective configuration
    Config(InputArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Input and output locations; unset values come from configuration
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// BOM document (JSON, or YAML by extension)
    #[arg(long, env = "BOMPLAN_BOM")]
    pub bom: Option<PathBuf>,

    /// Routing steps document (JSON, or YAML by extension)
    #[arg(long, env = "BOMPLAN_ROUTINGS")]
    pub routings: Option<PathBuf>,

    /// CSV report path
    #[arg(long, env = "BOMPLAN_OUTPUT")]
    pub output: Option<PathBuf>,
}

impl InputArgs {
    /// Merge configuration files with these overrides, relative to the working directory
    pub fn resolve(&self) -> Result<Config> {
        let cwd = std::env::current_dir().into_diagnostic()?;
        let mut config = Config::load(&cwd)?;

        if let Some(bom) = &self.bom {
            config.bom = bom.clone();
        }
        if let Some(routings) = &self.routings {
            config.routings = routings.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }

        Ok(config.resolve_paths(&cwd))
    }
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Exit without waiting for a key press
    #[arg(long)]
    pub no_wait: bool,
}

/// Output formats for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// TSV for lists, an indented tree for `flatten`
    #[default]
    Auto,
    Tsv,
    Csv,
    Json,
    Yaml,
    /// Bordered table
    Table,
}
