//! Arithmetic limits of the aggregation and takt-time sums

use miette::Diagnostic;
use thiserror::Error;

/// A running total left the range of its integer type
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum OverflowError {
    #[error("Total quantity of '{component}' exceeds {}", u64::MAX)]
    #[diagnostic(
        code(bomplan::overflow::quantity),
        help("Check the quantities of every '{component}' entry in the BOM")
    )]
    Quantity { component: String },

    #[error("Overall takt time is out of range after step {step}")]
    #[diagnostic(
        code(bomplan::overflow::takt_time),
        help("Check the taktTime values in the routings document")
    )]
    TaktTime { step: i64 },
}
