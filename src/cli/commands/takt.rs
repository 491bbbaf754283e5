//! `bomplan takt` command - routing steps used by the BOM and their total

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::output::render_rows;
use crate::cli::{GlobalOpts, InputArgs, OutputFormat};
use crate::core::report::takt_line;
use crate::core::{
    matched_routings, seconds_to_minutes, total_takt_seconds, PlanInputs, RoutingStep,
};

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RoutingRow {
    pub step: i64,
    pub description: String,
    #[serde(rename = "taktTime")]
    #[tabled(rename = "takt_time")]
    pub takt_time: i64,
}

impl From<&RoutingStep> for RoutingRow {
    fn from(routing: &RoutingStep) -> Self {
        Self {
            step: routing.step,
            description: routing.description.clone(),
            takt_time: routing.takt_time,
        }
    }
}

#[derive(Debug, Serialize)]
struct TaktSummary {
    matched: Vec<RoutingRow>,
    total_seconds: i64,
    total_minutes: f64,
}

pub fn run(args: InputArgs, global: &GlobalOpts) -> Result<()> {
    let config = args.resolve()?;
    let inputs = PlanInputs::from_config(&config)?;

    let matched: Vec<RoutingRow> = matched_routings(&inputs.root, &inputs.routings)
        .into_iter()
        .map(RoutingRow::from)
        .collect();
    let total_seconds = total_takt_seconds(&inputs.root, &inputs.routings)?;

    match global.format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let summary = TaktSummary {
                matched,
                total_seconds,
                total_minutes: seconds_to_minutes(total_seconds),
            };
            if global.format == OutputFormat::Json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).into_diagnostic()?
                );
            } else {
                print!("{}", serde_yml::to_string(&summary).into_diagnostic()?);
            }
        }
        format => {
            print!("{}", render_rows(&matched, format)?);
            println!("{}", takt_line(total_seconds));
        }
    }

    Ok(())
}
