//! `bomplan flatten` command - every BOM node below the root, pre-order

use console::style;
use miette::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::output::print_rows;
use crate::cli::{GlobalOpts, InputArgs, OutputFormat};
use crate::core::{descendants_with_depth, BomNode};
use crate::document::load_document;

#[derive(Debug, Serialize, Tabled)]
pub struct FlatRow {
    pub depth: usize,
    pub description: String,
    pub quantity: u64,
    pub source: String,
    pub step: i64,
}

pub fn run(args: InputArgs, global: &GlobalOpts) -> Result<()> {
    let config = args.resolve()?;
    let root: BomNode = load_document(&config.bom)?;
    let nodes = descendants_with_depth(&root);

    if global.format == OutputFormat::Auto {
        println!("{}", style(&root.description).bold());
        for (depth, node) in &nodes {
            let marker = if node.is_provided() {
                style("provided".to_string()).green()
            } else if node.source.is_empty() {
                style("unsourced".to_string()).yellow()
            } else {
                style(node.source.clone()).yellow()
            };
            let step = node
                .routing_step()
                .map(|s| format!(" step {}", s))
                .unwrap_or_default();
            println!(
                "{}{} x{} [{}]{}",
                "  ".repeat(*depth),
                node.description,
                node.quantity,
                marker,
                step
            );
        }
        return Ok(());
    }

    let rows: Vec<FlatRow> = nodes
        .into_iter()
        .map(|(depth, node)| FlatRow {
            depth,
            description: node.description.clone(),
            quantity: node.quantity,
            source: node.source.clone(),
            step: node.step,
        })
        .collect();
    print_rows(&rows, global.format)
}
