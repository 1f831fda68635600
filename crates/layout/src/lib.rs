use thiserror::Error;

pub use self::node::NodeId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Cannot add a child to {0}: it has a measure function.")]
    MeasuredNodeChild(NodeId),
    #[error("Cannot set a measure function on {0}: it already has children.")]
    MeasureFuncOnParent(NodeId),
    #[error("{0} already has a parent; remove it before inserting it elsewhere.")]
    AlreadyParented(NodeId),
    #[error("Inserting {child} under {parent} would create a cycle.")]
    Cycle { parent: NodeId, child: NodeId },
    #[error("Layout must start at a root, but {0} has a parent.")]
    NotRoot(NodeId),
    #[error("Measure function of {node} returned {width:.2}x{height:.2}; sizes must be non-negative numbers.")]
    NegativeMeasurement { node: NodeId, width: f32, height: f32 },
    #[error("Baseline function of {0} returned an undefined value.")]
    UndefinedBaseline(NodeId),
    #[error("Flex distribution for {0} did not settle after {1} passes.")]
    FlexResolutionStalled(NodeId, usize),
    #[error("{0} does not belong to this tree.")]
    UnknownNode(NodeId),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

pub mod cache;
pub mod config;
pub mod direction;
pub mod measure;
pub mod node;
pub mod perf;
pub mod rounding;
pub mod tree;

mod engine;
mod resolve;

pub use self::config::{ExperimentalFeatures, LayoutConfig};
pub use self::measure::{BaselineFunc, MeasureFunc, MeasureInput};
pub use self::node::Layout;
pub use self::perf::LayoutStats;
pub use self::tree::LayoutTree;

// Re-export the value types callers need to build trees
pub use flexure_style::{
    Align, Dimension, Direction, Display, Edges, FlexDirection, FlexWrap, JustifyContent,
    Overflow, PositionType, Style,
};
pub use flexure_types::{Edge, Insets, MeasureMode, PhysicalEdge, Size, UNDEFINED};

#[cfg(test)]
mod absolute_test;
#[cfg(test)]
mod direction_test;
#[cfg(test)]
mod percentage_test;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod wrap_test;
