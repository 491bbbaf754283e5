//! Component aggregation - total quantities per distinct description

use std::collections::HashMap;

use crate::core::bom::BomNode;
use crate::core::flatten::descendants;
use crate::core::overflow::OverflowError;

/// Group every node below `root` by description and sum quantities
///
/// Entries appear in first-seen pre-order. Only `quantity` accumulates: the
/// `source`, `step` and `children` of an entry are those of the first node
/// with that description, even when later nodes disagree. A total that does
/// not fit in `u64` is an error rather than a wrapped count.
pub fn aggregate(root: &BomNode) -> Result<Vec<BomNode>, OverflowError> {
    let mut totals: Vec<BomNode> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for node in descendants(root) {
        match index.get(node.description.as_str()).copied() {
            Some(pos) => {
                let entry = &mut totals[pos];
                if entry.source != node.source || entry.step != node.step {
                    tracing::warn!(
                        component = %node.description,
                        kept_source = %entry.source,
                        kept_step = entry.step,
                        ignored_source = %node.source,
                        ignored_step = node.step,
                        "component appears with differing source/step; keeping first occurrence"
                    );
                }
                entry.quantity = entry.quantity.checked_add(node.quantity).ok_or_else(|| {
                    OverflowError::Quantity {
                        component: node.description.clone(),
                    }
                })?;
            }
            None => {
                index.insert(node.description.as_str(), totals.len());
                totals.push(node.clone());
            }
        }
    }

    tracing::debug!(components = totals.len(), "aggregated BOM");
    Ok(totals)
}

/// Aggregated components whose source is "provided", in first-seen order
pub fn provided_components(root: &BomNode) -> Result<Vec<BomNode>, OverflowError> {
    Ok(aggregate(root)?
        .into_iter()
        .filter(BomNode::is_provided)
        .collect())
}
