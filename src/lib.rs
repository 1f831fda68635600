//! Flexbox layout for trees of boxes.
//!
//! The engine lives in `flexure-layout`; this crate re-exports it together
//! with the style types and adds [`TreeDocument`], a JSON description of a
//! tree that the `flexure` binary lays out from the command line.
pub mod document;
pub mod error;

pub use document::{FixedMeasure, LaidOutNode, NodeSpec, TreeDocument};
pub use error::{FlexureError, Result};

pub use flexure_layout::{
    BaselineFunc, ExperimentalFeatures, Layout, LayoutConfig, LayoutError, LayoutStats,
    LayoutTree, MeasureFunc, MeasureInput, NodeId,
};
pub use flexure_style::parsers::parse_inline_css;
pub use flexure_style::{
    Align, Dimension, Direction, Display, Edges, FlexDirection, FlexWrap, JustifyContent,
    Overflow, PositionType, Style, StyleParseError,
};
pub use flexure_types::{Edge, Insets, MeasureMode, PhysicalEdge, Size, UNDEFINED};
