//! Takt time calculation - joins routing steps against BOM step identifiers

use std::collections::HashSet;

use crate::core::bom::{BomNode, RoutingStep};
use crate::core::flatten::descendants;
use crate::core::overflow::OverflowError;

/// Distinct step values used by the nodes below `root` (including the -1 sentinel)
pub fn used_steps(root: &BomNode) -> HashSet<i64> {
    descendants(root).map(|node| node.step).collect()
}

/// Routing records whose step appears anywhere below `root`, in routing order
///
/// Each record is returned at most once, however many BOM nodes share its step.
pub fn matched_routings<'a>(root: &BomNode, routings: &'a [RoutingStep]) -> Vec<&'a RoutingStep> {
    let steps = used_steps(root);
    routings
        .iter()
        .filter(|routing| steps.contains(&routing.step))
        .collect()
}

/// Sum of cycle times (seconds) for every routing step used by the BOM
///
/// Fails when the running sum leaves the `i64` range.
pub fn total_takt_seconds(
    root: &BomNode,
    routings: &[RoutingStep],
) -> Result<i64, OverflowError> {
    let total = matched_routings(root, routings)
        .iter()
        .try_fold(0i64, |acc, routing| {
            acc.checked_add(routing.takt_time)
                .ok_or(OverflowError::TaktTime { step: routing.step })
        })?;
    tracing::debug!(seconds = total, "computed takt time");
    Ok(total)
}

/// Convert seconds to minutes for reporting
pub fn seconds_to_minutes(seconds: i64) -> f64 {
    seconds as f64 / 60.0
}
