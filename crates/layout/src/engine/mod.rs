//! The recursive flexbox algorithm.
//!
//! `layout_node_internal` is the cached entry point every recursion goes
//! through; `flexbox::layout_impl` does the actual work for one node.
mod absolute;
mod baseline;
mod distribute;
mod flex_basis;
mod flexbox;
mod leaf;

use crate::cache::{CacheEntry, CacheQuery};
use crate::direction::{
    HEIGHT, WIDTH, cross_axis, leading_edge, resolve_direction, resolve_flex_direction,
    trailing_edge,
};
use crate::node::{LayoutState, Node, NodeId};
use crate::resolve::{
    has_percent_box_values, is_style_dim_defined, leading_margin, margin_for_axis,
    relative_position, resolved_dimension, trailing_margin,
};
use crate::tree::LayoutTree;
use crate::Result;
use flexure_style::{Direction, Display, FlexDirection};
use flexure_types::{MeasureMode, UNDEFINED, is_defined, is_undefined};

/// Constraints for one visit of one node.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Constraints {
    pub available_width: f32,
    pub available_height: f32,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
    pub parent_width: f32,
    pub parent_height: f32,
}

impl LayoutTree {
    pub(crate) fn layout_root(
        &mut self,
        root: NodeId,
        available_width: f32,
        available_height: f32,
        direction: Direction,
    ) -> Result<()> {
        self.generation = self.generation.wrapping_add(1);
        self.stats.reset();
        log::debug!(
            "Layout pass {} from {}: {}x{} ({:?})",
            self.generation,
            root,
            available_width,
            available_height,
            direction
        );

        if self.node(root).style.display == Display::None {
            log::warn!("Root {} has display: none; its subtree is laid out as empty.", root);
            self.zero_out_layout_recursively(root);
            self.publish_layout(root);
            return Ok(());
        }

        self.resolve_child_direction(root, direction);
        let node = self.node(root);
        let (width, width_mode) = root_axis_constraint(
            node,
            FlexDirection::Row,
            available_width,
            available_width,
        );
        let (height, height_mode) = root_axis_constraint(
            node,
            FlexDirection::Column,
            available_height,
            available_width,
        );

        let constraints = Constraints {
            available_width: width,
            available_height: height,
            width_mode,
            height_mode,
            parent_width: available_width,
            parent_height: available_height,
        };
        if self.layout_node_internal(root, constraints, direction, true, "initial")? {
            let root_direction = self.node(root).state.direction;
            let main_axis =
                resolve_flex_direction(self.node(root).style.flex_direction, root_direction);
            let cross = cross_axis(main_axis, root_direction);
            let (main_size, cross_size) = if main_axis.is_row() {
                (available_width, available_height)
            } else {
                (available_height, available_width)
            };
            self.set_child_position(root, main_axis, cross, main_size, cross_size, available_width);
        }

        self.publish_layout(root);
        self.stats.log_summary(self.generation);
        Ok(())
    }

    /// Lays out or measures `id`, reusing a cached result when the
    /// constraints allow it. Returns whether the node was actually visited.
    pub(crate) fn layout_node_internal(
        &mut self,
        id: NodeId,
        constraints: Constraints,
        parent_direction: Direction,
        perform_layout: bool,
        reason: &'static str,
    ) -> Result<bool> {
        self.stats.node_visits += 1;
        let generation = self.generation;
        let psf = self.config().point_scale_factor;

        let node = self.node_mut(id);
        let needs_visit = (node.dirty && node.state.generation != generation)
            || node.state.last_parent_direction != Some(parent_direction);
        if needs_visit {
            node.state.cache.clear();
        }

        let (parent_width, parent_height) = if has_percent_box_values(&node.style) {
            (constraints.parent_width, constraints.parent_height)
        } else {
            (UNDEFINED, UNDEFINED)
        };
        let query = CacheQuery {
            available_width: constraints.available_width,
            width_mode: constraints.width_mode,
            available_height: constraints.available_height,
            height_mode: constraints.height_mode,
            parent_width,
            parent_height,
            margin_row: margin_for_axis(node, FlexDirection::Row, constraints.parent_width),
            margin_column: margin_for_axis(node, FlexDirection::Column, constraints.parent_width),
        };
        let cached = if node.measure.is_some() {
            node.state.cache.get_for_leaf(&query, psf)
        } else {
            node.state.cache.get_for_container(&query, perform_layout)
        };

        match cached {
            Some(entry) if !needs_visit => {
                log::trace!(
                    "{} cache hit ({}): {}x{}",
                    id,
                    reason,
                    entry.computed_width,
                    entry.computed_height
                );
                self.stats.cache_hits += 1;
                let node = self.node_mut(id);
                node.state.measured = [entry.computed_width, entry.computed_height];
            }
            _ => {
                log::trace!(
                    "{} {} ({}): {}x{} {:?}/{:?}",
                    id,
                    if perform_layout { "layout" } else { "measure" },
                    reason,
                    constraints.available_width,
                    constraints.available_height,
                    constraints.width_mode,
                    constraints.height_mode
                );
                self.stats.cache_misses += 1;
                if perform_layout {
                    self.stats.layout_passes += 1;
                } else {
                    self.stats.measure_passes += 1;
                }

                self.layout_impl(id, constraints, parent_direction, perform_layout)?;

                let node = self.node_mut(id);
                node.state.last_parent_direction = Some(parent_direction);
                let entry = CacheEntry {
                    available_width: constraints.available_width,
                    width_mode: constraints.width_mode,
                    available_height: constraints.available_height,
                    height_mode: constraints.height_mode,
                    parent_width,
                    parent_height,
                    computed_width: node.state.measured[WIDTH],
                    computed_height: node.state.measured[HEIGHT],
                };
                node.state.cache.store(entry, perform_layout);
            }
        }

        let node = self.node_mut(id);
        if perform_layout {
            node.state.dimensions = node.state.measured;
            node.layout.has_new_layout = true;
            node.dirty = false;
        }
        node.state.generation = generation;
        Ok(needs_visit || cached.is_none())
    }

    /// Gives a `display: none` subtree an empty box.
    pub(crate) fn zero_out_layout_recursively(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        let direction = node.state.direction;
        node.state = LayoutState {
            position: [0.0; 4],
            dimensions: [0.0; 2],
            measured: [0.0; 2],
            direction,
            ..LayoutState::default()
        };
        node.layout.has_new_layout = true;
        node.dirty = false;

        let children = node.children.clone();
        for child in children {
            self.zero_out_layout_recursively(child);
        }
    }

    /// Seeds a child's position with its leading margins and relative offset
    /// along the parent's axes. Justification and alignment add to it later.
    pub(crate) fn set_child_position(
        &mut self,
        id: NodeId,
        main_axis: FlexDirection,
        cross_axis: FlexDirection,
        main_size: f32,
        cross_size: f32,
        parent_width: f32,
    ) {
        let node = self.node(id);
        let relative_main = relative_position(node, main_axis, main_size);
        let relative_cross = relative_position(node, cross_axis, cross_size);
        let slots = [
            (
                leading_edge(main_axis),
                leading_margin(node, main_axis, parent_width) + relative_main,
            ),
            (
                trailing_edge(main_axis),
                trailing_margin(node, main_axis, parent_width) + relative_main,
            ),
            (
                leading_edge(cross_axis),
                leading_margin(node, cross_axis, parent_width) + relative_cross,
            ),
            (
                trailing_edge(cross_axis),
                trailing_margin(node, cross_axis, parent_width) + relative_cross,
            ),
        ];

        let state = &mut self.node_mut(id).state;
        for (edge, value) in slots {
            state.set_position(edge, value);
        }
    }

    /// Resolves and stores the direction a child will be laid out with.
    pub(crate) fn resolve_child_direction(&mut self, id: NodeId, parent_direction: Direction) -> Direction {
        let node = self.node_mut(id);
        let direction = resolve_direction(node.style.direction, parent_direction);
        node.state.direction = direction;
        direction
    }
}

/// Size and mode for one axis of the root: its own dimension when it has one,
/// else its max dimension as a cap, else whatever the caller offers.
fn root_axis_constraint(
    node: &Node,
    axis: FlexDirection,
    available: f32,
    available_width: f32,
) -> (f32, MeasureMode) {
    if is_style_dim_defined(node, axis, available) {
        let size = resolved_dimension(&node.style, axis).resolve(available)
            + margin_for_axis(node, axis, available_width);
        return (size, MeasureMode::Exactly);
    }
    let max = node.style.max_dimension(axis.is_row()).resolve(available);
    if is_defined(max) && max >= 0.0 {
        return (max, MeasureMode::AtMost);
    }
    let mode = if is_undefined(available) {
        MeasureMode::Undefined
    } else {
        MeasureMode::Exactly
    };
    (available, mode)
}
