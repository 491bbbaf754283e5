//! Planning pipeline - load both documents, build the report, write the CSV

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

use crate::core::bom::{BomNode, RoutingStep};
use crate::core::config::{Config, ConfigError};
use crate::core::overflow::OverflowError;
use crate::core::report::{Report, ReportError};
use crate::document::{load_document, DocumentError};

/// Any failure that aborts a planning run
#[derive(Debug, Error, Diagnostic)]
pub enum PlanError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Report(#[from] ReportError),
}

/// The two parsed inputs of a run; read-only once loaded
#[derive(Debug, Clone)]
pub struct PlanInputs {
    pub root: BomNode,
    pub routings: Vec<RoutingStep>,
}

impl PlanInputs {
    /// Load the BOM and routing documents
    pub fn load(bom: &Path, routings: &Path) -> Result<Self, PlanError> {
        let root: BomNode = load_document(bom)?;
        let routings: Vec<RoutingStep> = load_document(routings)?;
        tracing::debug!(
            nodes = root.node_count(),
            routings = routings.len(),
            "loaded planning inputs"
        );
        Ok(Self { root, routings })
    }

    /// Load the documents named by `config`
    pub fn from_config(config: &Config) -> Result<Self, PlanError> {
        Self::load(&config.bom, &config.routings)
    }

    pub fn report(&self) -> Result<Report, PlanError> {
        Ok(Report::build(&self.root, &self.routings)?)
    }
}

/// Load inputs, compute the report and write the CSV named by `config`
///
/// The CSV is written before the report is returned; nothing is written when
/// loading or computing the totals fails.
pub fn run_plan(config: &Config) -> Result<Report, PlanError> {
    let inputs = PlanInputs::from_config(config)?;
    let report = inputs.report()?;
    report.write_csv_file(&config.output)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_inputs(dir: &Path) -> Config {
        std::fs::write(
            dir.join("bom.json"),
            r#"{"description": "product", "quantity": 1, "bom": [
                {"description": "frame", "quantity": 1, "step": 1, "source": "provided", "bom": []},
                {"description": "panel", "quantity": 2, "source": "supplier", "bom": [
                    {"description": "bolt", "quantity": 4, "source": "provided", "bom": []}
                ]}
            ]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("routings.json"),
            r#"[{"step": 1, "description": "frame", "taktTime": 120}]"#,
        )
        .unwrap();
        Config::default().resolve_paths(dir)
    }

    #[test]
    fn test_run_plan_writes_csv() {
        let tmp = tempdir().unwrap();
        let config = write_inputs(tmp.path());

        let report = run_plan(&config).unwrap();
        assert_eq!(report.takt_seconds, 120);
        assert_eq!(report.unprovided.len(), 1);

        let csv = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(csv, "component,quantity\nframe,1\nbolt,4\n");
    }

    #[test]
    fn test_missing_routings_is_not_found() {
        let tmp = tempdir().unwrap();
        let config = write_inputs(tmp.path());
        std::fs::remove_file(&config.routings).unwrap();

        let err = run_plan(&config).unwrap_err();
        assert!(matches!(
            err,
            PlanError::Document(DocumentError::NotFound { .. })
        ));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_malformed_bom_is_parse_error() {
        let tmp = tempdir().unwrap();
        let config = write_inputs(tmp.path());
        std::fs::write(&config.bom, r#"{"description": "product", "bom": {}}"#).unwrap();

        let err = run_plan(&config).unwrap_err();
        assert!(matches!(err, PlanError::Document(DocumentError::Syntax(_))));
    }

    #[test]
    fn test_takt_overflow_is_runtime_error() {
        let tmp = tempdir().unwrap();
        let config = write_inputs(tmp.path());
        std::fs::write(
            &config.routings,
            r#"[
                {"step": 1, "description": "frame", "taktTime": 9223372036854775807},
                {"step": 1, "description": "frame rework", "taktTime": 1}
            ]"#,
        )
        .unwrap();

        let err = run_plan(&config).unwrap_err();
        assert!(matches!(
            err,
            PlanError::Overflow(OverflowError::TaktTime { step: 1 })
        ));
        assert!(!config.output.exists());
    }
}
