//! Core module - BOM model, traversal passes, and the planning pipeline

pub mod aggregate;
pub mod bom;
pub mod config;
pub mod flatten;
pub mod overflow;
pub mod plan;
pub mod report;
pub mod takt;
pub mod unprovided;

pub use aggregate::{aggregate, provided_components};
pub use bom::{BomNode, RoutingStep, NO_STEP, PROVIDED};
pub use config::{Config, ConfigError};
pub use flatten::{descendants, descendants_with_depth, flatten};
pub use overflow::OverflowError;
pub use plan::{run_plan, PlanError, PlanInputs};
pub use report::{Report, ReportError};
pub use takt::{matched_routings, seconds_to_minutes, total_takt_seconds};
pub use unprovided::{find_unprovided, is_unprovided_assembly};
