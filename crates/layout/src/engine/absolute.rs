//! Absolutely positioned children: sized from their own style or their
//! insets, then placed against the parent's border edges.
use super::Constraints;
use crate::direction::{HEIGHT, WIDTH, cross_axis, dim, leading_edge, resolve_flex_direction};
use crate::node::{Node, NodeId};
use crate::resolve::{
    align_item, bound_axis, is_leading_pos_defined, is_style_dim_defined, is_trailing_pos_defined,
    leading_border, leading_position, margin_for_axis, measured, resolved_dimension,
    trailing_border, trailing_margin, trailing_position,
};
use crate::tree::LayoutTree;
use crate::Result;
use flexure_style::{Align, Direction, FlexDirection, FlexWrap, JustifyContent};
use flexure_types::{MeasureMode, UNDEFINED, is_undefined};

const ROW: FlexDirection = FlexDirection::Row;
const COLUMN: FlexDirection = FlexDirection::Column;

impl LayoutTree {
    /// `width`/`height` are the parent's available inner sizes; `width_mode`
    /// is the mode of the parent's horizontal axis.
    pub(super) fn layout_absolute_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        direction: Direction,
    ) -> Result<()> {
        let parent_node = self.node(parent);
        let child_node = self.node(child);
        let main_axis = resolve_flex_direction(parent_node.style.flex_direction, direction);
        let cross = cross_axis(main_axis, direction);
        let is_main_row = main_axis.is_row();

        let margin_row = margin_for_axis(child_node, ROW, width);
        let margin_column = margin_for_axis(child_node, COLUMN, width);

        // stretched between two insets when no explicit size is given
        let inset_size = |axis: FlexDirection, axis_size: f32| {
            if !(is_leading_pos_defined(child_node, axis) && is_trailing_pos_defined(child_node, axis)) {
                return UNDEFINED;
            }
            let size = parent_node.state.measured[dim(axis)]
                - (leading_border(parent_node, axis) + trailing_border(parent_node, axis))
                - (leading_position(child_node, axis, axis_size)
                    + trailing_position(child_node, axis, axis_size));
            bound_axis(child_node, axis, size, axis_size, width)
        };

        let mut child_width = if is_style_dim_defined(child_node, ROW, width) {
            resolved_dimension(&child_node.style, ROW).resolve(width) + margin_row
        } else {
            inset_size(ROW, width)
        };
        let mut child_height = if is_style_dim_defined(child_node, COLUMN, height) {
            resolved_dimension(&child_node.style, COLUMN).resolve(height) + margin_column
        } else {
            inset_size(COLUMN, height)
        };

        if is_undefined(child_width) || is_undefined(child_height) {
            let mode_for = |size: f32| {
                if is_undefined(size) {
                    MeasureMode::Undefined
                } else {
                    MeasureMode::Exactly
                }
            };
            let mut child_width_mode = mode_for(child_width);
            let child_height_mode = mode_for(child_height);

            // let content wrap to the parent instead of growing unbounded
            if !is_main_row && is_undefined(child_width) && width_mode != MeasureMode::Undefined && width > 0.0 {
                child_width = width;
                child_width_mode = MeasureMode::AtMost;
            }

            let measure = Constraints {
                available_width: child_width,
                available_height: child_height,
                width_mode: child_width_mode,
                height_mode: child_height_mode,
                parent_width: child_width,
                parent_height: child_height,
            };
            self.layout_node_internal(child, measure, direction, false, "abs-measure")?;

            let child_node = self.node(child);
            child_width = child_node.state.measured[WIDTH] + margin_for_axis(child_node, ROW, width);
            child_height = child_node.state.measured[HEIGHT] + margin_for_axis(child_node, COLUMN, width);
        }

        let layout = Constraints {
            available_width: child_width,
            available_height: child_height,
            width_mode: MeasureMode::Exactly,
            height_mode: MeasureMode::Exactly,
            parent_width: child_width,
            parent_height: child_height,
        };
        self.layout_node_internal(child, layout, direction, true, "abs-layout")?;

        let (main_size, cross_size) = if is_main_row { (width, height) } else { (height, width) };
        let main_offset = self.absolute_offset(parent, child, main_axis, main_size, width, |parent_node, child_node| {
            match parent_node.style.justify_content {
                JustifyContent::Center => Some(0.5),
                JustifyContent::FlexEnd => Some(1.0),
                _ => None,
            }
            .filter(|_| !is_leading_pos_defined(child_node, main_axis))
        });
        let cross_offset = self.absolute_offset(parent, child, cross, cross_size, width, |parent_node, child_node| {
            let align = align_item(parent_node, child_node);
            let wrap_reverse = parent_node.style.flex_wrap == FlexWrap::WrapReverse;
            if is_leading_pos_defined(child_node, cross) {
                None
            } else if align == Align::Center {
                Some(0.5)
            } else if (align == Align::FlexEnd) != wrap_reverse {
                Some(1.0)
            } else {
                None
            }
        });

        let state = &mut self.node_mut(child).state;
        if let Some(offset) = main_offset {
            state.set_position(leading_edge(main_axis), offset);
        }
        if let Some(offset) = cross_offset {
            state.set_position(leading_edge(cross), offset);
        }
        Ok(())
    }

    /// Offset of an absolute child along `axis` when it is anchored to the
    /// trailing side or packed by the parent's alignment; `None` keeps the
    /// position computed by the flow pass.
    ///
    /// `pack` returns the fraction of the free space to put before the child.
    fn absolute_offset<F>(
        &self,
        parent: NodeId,
        child: NodeId,
        axis: FlexDirection,
        axis_size: f32,
        width: f32,
        pack: F,
    ) -> Option<f32>
    where
        F: Fn(&Node, &Node) -> Option<f32>,
    {
        let parent_node = self.node(parent);
        let child_node = self.node(child);
        let free = measured(parent_node, axis) - measured(child_node, axis);

        if is_trailing_pos_defined(child_node, axis) && !is_leading_pos_defined(child_node, axis) {
            return Some(
                free - trailing_border(parent_node, axis)
                    - trailing_margin(child_node, axis, width)
                    - trailing_position(child_node, axis, axis_size),
            );
        }
        pack(parent_node, child_node).map(|fraction| free * fraction)
    }
}
