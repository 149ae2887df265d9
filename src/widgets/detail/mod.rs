//! Transaction detail widgets.
//!
//! - [`flow_diagram`]: buyer → payment → seller/session boxes

pub mod flow_diagram;

pub use flow_diagram::PaymentFlowDiagram;
