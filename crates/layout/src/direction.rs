//! Maps logical directions and edges onto physical ones.
//!
//! An axis is represented by the [`FlexDirection`] that runs along it, already
//! resolved against the writing direction: a row in a right-to-left context
//! becomes [`FlexDirection::RowReverse`].
use flexure_style::{Dimension, Direction, Edges, FlexDirection};
use flexure_types::{Edge, PhysicalEdge};

pub(crate) const WIDTH: usize = 0;
pub(crate) const HEIGHT: usize = 1;

/// Resolves `inherit` against the parent. A root without a direction is LTR.
pub fn resolve_direction(style_direction: Direction, parent_direction: Direction) -> Direction {
    match (style_direction, parent_direction) {
        (Direction::Inherit, Direction::Inherit) => Direction::Ltr,
        (Direction::Inherit, parent) => parent,
        (own, _) => own,
    }
}

/// Mirrors row axes under RTL. Columns are never mirrored by direction.
pub fn resolve_flex_direction(flex_direction: FlexDirection, direction: Direction) -> FlexDirection {
    match (flex_direction, direction) {
        (FlexDirection::Row, Direction::Rtl) => FlexDirection::RowReverse,
        (FlexDirection::RowReverse, Direction::Rtl) => FlexDirection::Row,
        (other, _) => other,
    }
}

/// The axis perpendicular to `main_axis`.
pub fn cross_axis(main_axis: FlexDirection, direction: Direction) -> FlexDirection {
    if main_axis.is_column() {
        resolve_flex_direction(FlexDirection::Row, direction)
    } else {
        FlexDirection::Column
    }
}

/// The physical edge items are packed against when the axis is traversed.
pub fn leading_edge(axis: FlexDirection) -> PhysicalEdge {
    match axis {
        FlexDirection::Column => PhysicalEdge::Top,
        FlexDirection::ColumnReverse => PhysicalEdge::Bottom,
        FlexDirection::Row => PhysicalEdge::Left,
        FlexDirection::RowReverse => PhysicalEdge::Right,
    }
}

pub fn trailing_edge(axis: FlexDirection) -> PhysicalEdge {
    leading_edge(axis).opposite()
}

pub(crate) fn dim(axis: FlexDirection) -> usize {
    if axis.is_row() { WIDTH } else { HEIGHT }
}

/// The physical side a logical edge lands on, or `None` for shorthands.
pub fn physical_edge(edge: Edge, direction: Direction) -> Option<PhysicalEdge> {
    let rtl = direction == Direction::Rtl;
    match edge {
        Edge::Left => Some(PhysicalEdge::Left),
        Edge::Top => Some(PhysicalEdge::Top),
        Edge::Right => Some(PhysicalEdge::Right),
        Edge::Bottom => Some(PhysicalEdge::Bottom),
        Edge::Start if rtl => Some(PhysicalEdge::Right),
        Edge::Start => Some(PhysicalEdge::Left),
        Edge::End if rtl => Some(PhysicalEdge::Left),
        Edge::End => Some(PhysicalEdge::Right),
        Edge::Horizontal | Edge::Vertical | Edge::All => None,
    }
}

/// Reads the value of a per-edge property for a physical side.
///
/// A logical edge mapped onto `edge` wins over the physical slot, which wins
/// over the axis shorthand and then `all`.
pub fn resolve_edge_value(
    edges: &Edges,
    edge: PhysicalEdge,
    direction: Direction,
    default: Dimension,
) -> Dimension {
    if edge.is_horizontal() {
        for logical in [Edge::Start, Edge::End] {
            if physical_edge(logical, direction) == Some(edge) {
                let value = edges.get(logical);
                if !value.is_undefined() {
                    return value;
                }
            }
        }
    }
    edges.computed(edge.into(), default)
}
