//! `bomplan components` command - aggregated component quantities

use miette::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::output::print_rows;
use crate::cli::{GlobalOpts, InputArgs};
use crate::core::{aggregate, BomNode};
use crate::document::load_document;

#[derive(clap::Args, Debug)]
pub struct ComponentsArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Only list components sourced "provided" (the rows of output.csv)
    #[arg(long)]
    pub provided: bool,
}

/// One aggregated component
#[derive(Debug, Serialize, Tabled)]
pub struct ComponentRow {
    pub description: String,
    pub quantity: u64,
    pub source: String,
    pub step: i64,
}

impl From<BomNode> for ComponentRow {
    fn from(node: BomNode) -> Self {
        Self {
            description: node.description,
            quantity: node.quantity,
            source: node.source,
            step: node.step,
        }
    }
}

pub fn run(args: ComponentsArgs, global: &GlobalOpts) -> Result<()> {
    let config = args.inputs.resolve()?;
    let root: BomNode = load_document(&config.bom)?;

    let rows: Vec<ComponentRow> = aggregate(&root)?
        .into_iter()
        .filter(|c| !args.provided || c.is_provided())
        .map(ComponentRow::from)
        .collect();

    print_rows(&rows, global.format)
}
