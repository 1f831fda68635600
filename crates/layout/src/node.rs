use crate::cache::MeasurementCache;
use crate::measure::{BaselineFunc, MeasureFunc};
use flexure_style::{Direction, Style};
use flexure_types::{Insets, PhysicalEdge, UNDEFINED};
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// Handle to a node inside a [`crate::LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node #{}", self.0)
    }
}

/// The computed box of a node, relative to its parent's border box.
///
/// All values are physical and, unless rounding is disabled, snapped to the
/// pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub margin: Insets,
    pub border: Insets,
    pub padding: Insets,
    pub direction: Direction,
    /// Set whenever a pass lays the node out; cleared by the caller through
    /// `LayoutTree::mark_layout_seen`.
    pub has_new_layout: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            margin: Insets::default(),
            border: Insets::default(),
            padding: Insets::default(),
            direction: Direction::Ltr,
            has_new_layout: true,
        }
    }
}

/// Float state the engine works on between passes. Never exposed directly:
/// the rounding pass derives [`Layout`] from it.
#[derive(Debug, Clone)]
pub(crate) struct LayoutState {
    /// Offsets from the parent's border box, one slot per physical edge.
    pub position: [f32; 4],
    /// Final border-box size from the last full layout.
    pub dimensions: [f32; 2],
    /// Border-box size from the most recent layout or measurement.
    pub measured: [f32; 2],
    pub margin: Insets,
    pub border: Insets,
    pub padding: Insets,
    pub direction: Direction,
    pub computed_flex_basis: f32,
    pub computed_flex_basis_generation: u32,
    /// Main-axis and width reference sizes an explicit basis was resolved
    /// against. `None` when the basis came from anywhere else.
    pub flex_basis_reference: Option<[f32; 2]>,
    pub line_index: usize,
    pub generation: u32,
    pub last_parent_direction: Option<Direction>,
    pub cache: MeasurementCache,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            position: [0.0; 4],
            dimensions: [UNDEFINED; 2],
            measured: [UNDEFINED; 2],
            margin: Insets::default(),
            border: Insets::default(),
            padding: Insets::default(),
            direction: Direction::Inherit,
            computed_flex_basis: UNDEFINED,
            computed_flex_basis_generation: 0,
            flex_basis_reference: None,
            line_index: 0,
            generation: 0,
            last_parent_direction: None,
            cache: MeasurementCache::default(),
        }
    }
}

impl LayoutState {
    pub fn position(&self, edge: PhysicalEdge) -> f32 {
        self.position[edge.index()]
    }

    pub fn set_position(&mut self, edge: PhysicalEdge, value: f32) {
        self.position[edge.index()] = value;
    }
}

pub(crate) struct Node {
    pub style: Style,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub measure: Option<MeasureFunc>,
    pub baseline: Option<BaselineFunc>,
    pub context: Option<Box<dyn Any + Send + Sync>>,
    pub state: LayoutState,
    pub layout: Layout,
    pub dirty: bool,
}

impl Node {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            children: Vec::new(),
            parent: None,
            measure: None,
            baseline: None,
            context: None,
            state: LayoutState::default(),
            layout: Layout::default(),
            dirty: true,
        }
    }

    pub fn context(&self) -> Option<&dyn Any> {
        self.context.as_deref().map(|c| c as &dyn Any)
    }
}
