//! Edge identifiers for per-side style values and resolved layout boxes.
use serde::{Deserialize, Serialize};

/// Every slot a per-edge style value can be written to.
///
/// `Start`/`End` are logical and only become a physical side once a writing
/// direction is known. `Horizontal`, `Vertical` and `All` are shorthands that
/// lose to any more specific slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
    Start,
    End,
    Horizontal,
    Vertical,
    All,
}

impl Edge {
    pub const COUNT: usize = 9;

    pub const ALL: [Edge; Edge::COUNT] = [
        Edge::Left,
        Edge::Top,
        Edge::Right,
        Edge::Bottom,
        Edge::Start,
        Edge::End,
        Edge::Horizontal,
        Edge::Vertical,
        Edge::All,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A side of a box after direction resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhysicalEdge {
    Left,
    Top,
    Right,
    Bottom,
}

impl PhysicalEdge {
    pub const ALL: [PhysicalEdge; 4] = [
        PhysicalEdge::Left,
        PhysicalEdge::Top,
        PhysicalEdge::Right,
        PhysicalEdge::Bottom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, PhysicalEdge::Left | PhysicalEdge::Right)
    }

    pub fn opposite(self) -> PhysicalEdge {
        match self {
            PhysicalEdge::Left => PhysicalEdge::Right,
            PhysicalEdge::Top => PhysicalEdge::Bottom,
            PhysicalEdge::Right => PhysicalEdge::Left,
            PhysicalEdge::Bottom => PhysicalEdge::Top,
        }
    }
}

impl From<PhysicalEdge> for Edge {
    fn from(edge: PhysicalEdge) -> Self {
        match edge {
            PhysicalEdge::Left => Edge::Left,
            PhysicalEdge::Top => Edge::Top,
            PhysicalEdge::Right => Edge::Right,
            PhysicalEdge::Bottom => Edge::Bottom,
        }
    }
}
