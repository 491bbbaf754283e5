//! BOM tree model - Assembly nodes and manufacturing routing steps

use serde::{Deserialize, Serialize};

/// Source keyword marking a component as sourced in-house and ready for assembly
pub const PROVIDED: &str = "provided";

/// Step value for nodes that are not tied to a routing step
pub const NO_STEP: i64 = -1;

fn default_step() -> i64 {
    NO_STEP
}

/// A node in the bill of materials
///
/// Each node exclusively owns its children. A node without children is a
/// leaf (raw or purchased part with no sub-assembly).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomNode {
    /// Component name; nodes sharing a description are the same logical component
    pub description: String,

    /// Count of this component needed by its immediate parent assembly
    #[serde(default)]
    pub quantity: u64,

    /// Routing step identifier (-1 when not tied to a routing step)
    #[serde(default = "default_step")]
    pub step: i64,

    /// Sourcing status (e.g., "provided", "supplier", "outsourced")
    #[serde(default)]
    pub source: String,

    /// Sub-components of this assembly, in document order
    #[serde(rename = "bom", default)]
    pub children: Vec<BomNode>,
}

impl BomNode {
    /// Create a leaf node not tied to any routing step
    pub fn new(description: impl Into<String>, quantity: u64, source: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            quantity,
            step: NO_STEP,
            source: source.into(),
            children: Vec::new(),
        }
    }

    /// Set the routing step
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Set the children of this node
    pub fn with_children(mut self, children: Vec<BomNode>) -> Self {
        self.children = children;
        self
    }

    /// Whether this node is sourced in-house (case-insensitive "provided")
    pub fn is_provided(&self) -> bool {
        self.source.eq_ignore_ascii_case(PROVIDED)
    }

    /// Whether this node has no sub-components
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The routing step, or `None` for the -1 sentinel
    pub fn routing_step(&self) -> Option<i64> {
        (self.step != NO_STEP).then_some(self.step)
    }

    /// Total number of nodes in this subtree, including this node
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(BomNode::node_count).sum::<usize>()
    }
}

/// A manufacturing operation with its cycle time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingStep {
    /// Step identifier, joined against `BomNode::step`
    pub step: i64,

    /// Human-readable label
    #[serde(default)]
    pub description: String,

    /// Cycle time in seconds
    #[serde(rename = "taktTime")]
    pub takt_time: i64,
}

impl RoutingStep {
    pub fn new(step: i64, description: impl Into<String>, takt_time: i64) -> Self {
        Self {
            step,
            description: description.into(),
            takt_time,
        }
    }
}
