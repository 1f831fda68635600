//! Style reads the engine performs over and over, already resolved against a
//! reference size and the node's direction.
use crate::direction::{dim, leading_edge, resolve_edge_value, trailing_edge};
use crate::node::Node;
use flexure_style::{Align, Dimension, Edges, FlexDirection, PositionType, Style};
use flexure_types::{Edge, MeasureMode, PhysicalEdge, float_max, float_min, is_defined, is_undefined};

const ZERO: Dimension = Dimension::Points(0.0);

fn or_zero(value: f32) -> f32 {
    if is_undefined(value) { 0.0 } else { value }
}

fn edge(node: &Node, edges: &Edges, edge: PhysicalEdge, default: Dimension) -> Dimension {
    resolve_edge_value(edges, edge, node.state.direction, default)
}

fn margin_at(node: &Node, side: PhysicalEdge, width: f32) -> f32 {
    or_zero(edge(node, &node.style.margin, side, ZERO).resolve_margin(width))
}

fn padding_at(node: &Node, side: PhysicalEdge, width: f32) -> f32 {
    or_zero(edge(node, &node.style.padding, side, ZERO).resolve(width)).max(0.0)
}

fn border_at(node: &Node, side: PhysicalEdge, width: f32) -> f32 {
    or_zero(edge(node, &node.style.border, side, ZERO).resolve(width)).max(0.0)
}

pub(crate) fn leading_margin(node: &Node, axis: FlexDirection, width: f32) -> f32 {
    margin_at(node, leading_edge(axis), width)
}

pub(crate) fn trailing_margin(node: &Node, axis: FlexDirection, width: f32) -> f32 {
    margin_at(node, trailing_edge(axis), width)
}

pub(crate) fn margin_for_axis(node: &Node, axis: FlexDirection, width: f32) -> f32 {
    leading_margin(node, axis, width) + trailing_margin(node, axis, width)
}

pub(crate) fn is_leading_margin_auto(node: &Node, axis: FlexDirection) -> bool {
    edge(node, &node.style.margin, leading_edge(axis), ZERO).is_auto()
}

pub(crate) fn is_trailing_margin_auto(node: &Node, axis: FlexDirection) -> bool {
    edge(node, &node.style.margin, trailing_edge(axis), ZERO).is_auto()
}

pub(crate) fn leading_border(node: &Node, axis: FlexDirection) -> f32 {
    border_at(node, leading_edge(axis), 0.0)
}

pub(crate) fn trailing_border(node: &Node, axis: FlexDirection) -> f32 {
    border_at(node, trailing_edge(axis), 0.0)
}

pub(crate) fn leading_padding_and_border(node: &Node, axis: FlexDirection, width: f32) -> f32 {
    padding_at(node, leading_edge(axis), width) + border_at(node, leading_edge(axis), width)
}

pub(crate) fn trailing_padding_and_border(node: &Node, axis: FlexDirection, width: f32) -> f32 {
    padding_at(node, trailing_edge(axis), width) + border_at(node, trailing_edge(axis), width)
}

pub(crate) fn padding_and_border_for_axis(node: &Node, axis: FlexDirection, width: f32) -> f32 {
    leading_padding_and_border(node, axis, width) + trailing_padding_and_border(node, axis, width)
}

/// Writes the physical margin, border and padding of a node into its state.
pub(crate) fn resolve_box_edges(node: &mut Node, parent_width: f32) {
    for side in PhysicalEdge::ALL {
        let margin = margin_at(node, side, parent_width);
        let border = border_at(node, side, parent_width);
        let padding = padding_at(node, side, parent_width);
        node.state.margin.set(side, margin);
        node.state.border.set(side, border);
        node.state.padding.set(side, padding);
    }
}

fn position_at(node: &Node, side: PhysicalEdge) -> Dimension {
    edge(node, &node.style.position, side, Dimension::Undefined)
}

pub(crate) fn is_leading_pos_defined(node: &Node, axis: FlexDirection) -> bool {
    !position_at(node, leading_edge(axis)).is_undefined()
}

pub(crate) fn is_trailing_pos_defined(node: &Node, axis: FlexDirection) -> bool {
    !position_at(node, trailing_edge(axis)).is_undefined()
}

pub(crate) fn leading_position(node: &Node, axis: FlexDirection, axis_size: f32) -> f32 {
    or_zero(position_at(node, leading_edge(axis)).resolve(axis_size))
}

pub(crate) fn trailing_position(node: &Node, axis: FlexDirection, axis_size: f32) -> f32 {
    or_zero(position_at(node, trailing_edge(axis)).resolve(axis_size))
}

/// Offset applied to a relatively positioned node: the leading inset, or the
/// negated trailing inset when only that one is set.
pub(crate) fn relative_position(node: &Node, axis: FlexDirection, axis_size: f32) -> f32 {
    if is_leading_pos_defined(node, axis) {
        leading_position(node, axis, axis_size)
    } else {
        -trailing_position(node, axis, axis_size)
    }
}

/// The style dimension, or the max dimension when min and max pin it.
pub(crate) fn resolved_dimension(style: &Style, axis: FlexDirection) -> Dimension {
    let horizontal = axis.is_row();
    let max = style.max_dimension(horizontal);
    if !max.is_undefined() && max.same_as(style.min_dimension(horizontal)) {
        max
    } else {
        style.dimension(horizontal)
    }
}

pub(crate) fn is_style_dim_defined(node: &Node, axis: FlexDirection, parent_size: f32) -> bool {
    match resolved_dimension(&node.style, axis) {
        Dimension::Undefined | Dimension::Auto => false,
        Dimension::Points(v) => v >= 0.0,
        Dimension::Percent(v) => v >= 0.0 && is_defined(parent_size),
    }
}

pub(crate) fn is_layout_dim_defined(node: &Node, axis: FlexDirection) -> bool {
    let value = node.state.measured[dim(axis)];
    is_defined(value) && value >= 0.0
}

pub(crate) fn measured(node: &Node, axis: FlexDirection) -> f32 {
    node.state.measured[dim(axis)]
}

pub(crate) fn dim_with_margin(node: &Node, axis: FlexDirection, width: f32) -> f32 {
    measured(node, axis) + margin_for_axis(node, axis, width)
}

/// Clamps a main-or-cross size into the node's min/max constraints.
pub(crate) fn bound_axis_within_min_max(
    node: &Node,
    axis: FlexDirection,
    value: f32,
    axis_size: f32,
) -> f32 {
    let horizontal = axis.is_row();
    let min = node.style.min_dimension(horizontal).resolve(axis_size);
    let max = node.style.max_dimension(horizontal).resolve(axis_size);

    let mut bound = value;
    if is_defined(max) && max >= 0.0 && bound > max {
        bound = max;
    }
    if is_defined(min) && min >= 0.0 && bound < min {
        bound = min;
    }
    bound
}

/// Like [`bound_axis_within_min_max`], but never smaller than padding plus border.
pub(crate) fn bound_axis(
    node: &Node,
    axis: FlexDirection,
    value: f32,
    axis_size: f32,
    width: f32,
) -> f32 {
    float_max(
        bound_axis_within_min_max(node, axis, value, axis_size),
        padding_and_border_for_axis(node, axis, width),
    )
}

/// Caps a size handed to a child with the child's max dimension.
pub(crate) fn constrain_max_size_for_mode(
    node: &Node,
    axis: FlexDirection,
    parent_axis_size: f32,
    parent_width: f32,
    mode: &mut MeasureMode,
    size: &mut f32,
) {
    let max_size = node
        .style
        .max_dimension(axis.is_row())
        .resolve(parent_axis_size)
        + margin_for_axis(node, axis, parent_width);
    match mode {
        MeasureMode::Exactly | MeasureMode::AtMost => {
            *size = float_min(max_size, *size);
        }
        MeasureMode::Undefined => {
            if is_defined(max_size) {
                *mode = MeasureMode::AtMost;
                *size = max_size;
            }
        }
    }
}

/// Effective cross alignment of `child` inside `parent`.
pub(crate) fn align_item(parent: &Node, child: &Node) -> Align {
    let align = match child.style.align_self {
        Align::Auto => parent.style.align_items,
        own => own,
    };
    if align == Align::Baseline && parent.style.flex_direction.is_column() {
        Align::FlexStart
    } else {
        align
    }
}

/// Roots never flex.
pub(crate) fn resolve_flex_grow(node: &Node) -> f32 {
    if node.parent.is_none() { 0.0 } else { node.style.flex_grow }
}

pub(crate) fn resolve_flex_shrink(node: &Node) -> f32 {
    if node.parent.is_none() { 0.0 } else { node.style.flex_shrink }
}

pub(crate) fn is_flex(node: &Node) -> bool {
    node.style.position_type == PositionType::Relative
        && (resolve_flex_grow(node) != 0.0 || resolve_flex_shrink(node) != 0.0)
}

/// Whether the node's own box values resolve against its parent's size, which
/// then has to be part of any cached result.
pub(crate) fn has_percent_box_values(style: &Style) -> bool {
    let edges_use_percent =
        |edges: &Edges| Edge::ALL.iter().any(|&slot| edges.get(slot).is_percent());
    edges_use_percent(&style.margin)
        || edges_use_percent(&style.padding)
        || edges_use_percent(&style.border)
        || [
            style.min_width,
            style.min_height,
            style.max_width,
            style.max_height,
        ]
        .iter()
        .any(|d| d.is_percent())
}
