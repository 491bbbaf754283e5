//! Planning report - runs the three BOM passes and emits their results

use miette::Diagnostic;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::aggregate::aggregate;
use crate::core::bom::{BomNode, RoutingStep};
use crate::core::overflow::OverflowError;
use crate::core::takt::{seconds_to_minutes, total_takt_seconds};
use crate::core::unprovided::find_unprovided;

/// Header row of the component CSV
pub const CSV_HEADER: [&str; 2] = ["component", "quantity"];

/// Errors raised while writing the report
#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error("Failed to write report {}: {source}", .path.display())]
    #[diagnostic(code(bomplan::report::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode CSV: {0}")]
    #[diagnostic(code(bomplan::report::csv))]
    Csv(#[from] csv::Error),
}

/// Results of the aggregation, detection and takt-time passes over one BOM
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Every distinct component with its summed quantity, in first-seen order
    pub components: Vec<BomNode>,

    /// Assemblies that are unprovided or have a directly unprovided child
    pub unprovided: Vec<BomNode>,

    /// Sum of matched routing cycle times
    pub takt_seconds: i64,
}

impl Report {
    /// Run all passes over `root`
    pub fn build(root: &BomNode, routings: &[RoutingStep]) -> Result<Self, OverflowError> {
        let report = Self {
            components: aggregate(root)?,
            unprovided: find_unprovided(root),
            takt_seconds: total_takt_seconds(root, routings)?,
        };
        tracing::debug!(
            nodes = root.node_count(),
            components = report.components.len(),
            unprovided = report.unprovided.len(),
            takt_seconds = report.takt_seconds,
            "built planning report"
        );
        Ok(report)
    }

    /// Aggregated components sourced in-house
    pub fn provided_components(&self) -> impl Iterator<Item = &BomNode> {
        self.components.iter().filter(|c| c.is_provided())
    }

    pub fn takt_minutes(&self) -> f64 {
        seconds_to_minutes(self.takt_seconds)
    }

    /// Write the provided-component CSV to any writer
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(CSV_HEADER)?;
        for component in self.provided_components() {
            let quantity = component.quantity.to_string();
            wtr.write_record([component.description.as_str(), quantity.as_str()])?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Render the provided-component CSV as a string
    pub fn to_csv_string(&self) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the provided-component CSV to `path`, replacing any existing file
    pub fn write_csv_file(&self, path: &Path) -> Result<(), ReportError> {
        let file = std::fs::File::create(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_csv(file)?;
        tracing::debug!(path = %path.display(), "wrote component report");
        Ok(())
    }

    /// One console line per unprovided assembly
    pub fn unprovided_lines(&self) -> Vec<String> {
        self.unprovided.iter().map(unprovided_line).collect()
    }

    /// Console line with the overall takt time
    pub fn takt_line(&self) -> String {
        takt_line(self.takt_seconds)
    }
}

/// Console line for a takt time given in seconds
pub fn takt_line(seconds: i64) -> String {
    format!("Overall takt time: {:.2} minutes", seconds_to_minutes(seconds))
}

/// Console line for one flagged assembly
pub fn unprovided_line(node: &BomNode) -> String {
    format!(
        "Step {} '{}' has no provided components added.",
        node.step, node.description
    )
}
