//! `bomplan unprovided` command - assemblies waiting on unprovided parts

use miette::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::output::print_rows;
use crate::cli::{GlobalOpts, InputArgs, OutputFormat};
use crate::core::report::unprovided_line;
use crate::core::{find_unprovided, BomNode};
use crate::document::load_document;

#[derive(Debug, Serialize, Tabled)]
pub struct UnprovidedRow {
    pub step: i64,
    pub description: String,
    pub source: String,
    /// Descriptions of the direct children that are not provided
    pub missing: String,
}

impl From<&BomNode> for UnprovidedRow {
    fn from(node: &BomNode) -> Self {
        let missing: Vec<&str> = node
            .children
            .iter()
            .filter(|c| !c.is_provided())
            .map(|c| c.description.as_str())
            .collect();
        Self {
            step: node.step,
            description: node.description.clone(),
            source: node.source.clone(),
            missing: missing.join("; "),
        }
    }
}

pub fn run(args: InputArgs, global: &GlobalOpts) -> Result<()> {
    let config = args.resolve()?;
    let root: BomNode = load_document(&config.bom)?;
    let flagged = find_unprovided(&root);

    if global.format == OutputFormat::Auto {
        for node in &flagged {
            println!("{}", unprovided_line(node));
        }
        return Ok(());
    }

    let rows: Vec<UnprovidedRow> = flagged.iter().map(UnprovidedRow::from).collect();
    print_rows(&rows, global.format)
}
