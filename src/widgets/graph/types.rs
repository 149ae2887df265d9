//! Topology graph types.
//!
//! Coordinates live on a fixed logical canvas (see `crate::constants`) and
//! are scaled to the terminal only when drawn.

// ============================================================================
// TopologyNode
// ============================================================================

/// A seller placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Unwrapped polar angle in radians; grows with position in the node list.
    pub angle: f64,
    pub radius: f64,
    /// Sum of incident edge weights.
    pub degree: u32,
    pub active: bool,
    /// Transactions where this seller was paid.
    pub in_count: u32,
    /// Transactions where this seller was the buyer.
    pub out_count: u32,
    pub total_count: u32,
}

// ============================================================================
// TopologyEdge
// ============================================================================

/// Undirected, aggregated link between two sellers. `a < b` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopologyEdge {
    pub a: String,
    pub b: String,
    /// Number of transactions between the pair, either direction.
    pub weight: u32,
}

// ============================================================================
// Topology
// ============================================================================

/// Laid-out seller graph for one snapshot of sellers and transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    /// Nodes in placement order.
    pub nodes: Vec<TopologyNode>,
    /// Edges sorted by `(a, b)`.
    pub edges: Vec<TopologyEdge>,
}

impl Topology {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&TopologyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Node with the highest degree; ties go to the smaller id. `None` without edges.
    #[must_use]
    pub fn hub(&self) -> Option<&TopologyNode> {
        self.nodes
            .iter()
            .filter(|n| n.degree > 0)
            .min_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.id.cmp(&b.id)))
    }

    #[must_use]
    pub fn max_weight(&self) -> u32 {
        self.edges.iter().map(|e| e.weight).max().unwrap_or(0)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.active).count()
    }
}
