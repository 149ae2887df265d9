//! Seller topology graph.
//!
//! Sellers become nodes on a golden-angle spiral; transactions between two
//! known sellers become weighted, undirected edges.
//!
//! # Module Structure
//!
//! - [`types`]: `Topology`, `TopologyNode`, `TopologyEdge`
//! - [`builders`]: the deterministic layout (`Topology::build`)
//! - [`renderer`]: `TopologyWidget`, a ratatui canvas view
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::widgets::graph::{Topology, TopologyWidget};
//!
//! let topology = Topology::build(&sellers, &transactions);
//! frame.render_widget(TopologyWidget::new(&topology, palette), area);
//! ```

pub mod builders;
pub mod renderer;
pub mod types;

#[cfg(test)]
mod tests;

pub use renderer::TopologyWidget;
pub use types::Topology;
