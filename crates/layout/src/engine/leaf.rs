//! Sizing for nodes that never run the flex algorithm: measured leaves,
//! empty containers and containers whose size is already fixed.
use super::Constraints;
use crate::direction::{HEIGHT, WIDTH};
use crate::measure::{MeasureInput, is_valid_measurement};
use crate::node::NodeId;
use crate::resolve::{bound_axis, margin_for_axis, padding_and_border_for_axis};
use crate::tree::LayoutTree;
use crate::{LayoutError, Result};
use flexure_style::FlexDirection;
use flexure_types::{MeasureMode, is_undefined};

const ROW: FlexDirection = FlexDirection::Row;
const COLUMN: FlexDirection = FlexDirection::Column;

impl LayoutTree {
    /// Sizes a leaf through its measure function. Returns `false`, leaving
    /// the node untouched, when it has none.
    pub(super) fn set_measured_dimensions_for_measure_func(
        &mut self,
        id: NodeId,
        c: &Constraints,
    ) -> Result<bool> {
        let node = self.node(id);
        let Some(measure) = node.measure.as_ref() else {
            return Ok(false);
        };
        let padding_border_row = padding_and_border_for_axis(node, ROW, c.available_width);
        let padding_border_column = padding_and_border_for_axis(node, COLUMN, c.available_width);
        let margin_row = margin_for_axis(node, ROW, c.available_width);
        let margin_column = margin_for_axis(node, COLUMN, c.available_width);

        let inner = |available: f32, margin: f32, padding_border: f32| {
            if is_undefined(available) {
                available
            } else {
                (available - margin - padding_border).max(0.0)
            }
        };
        let inner_width = inner(c.available_width, margin_row, padding_border_row);
        let inner_height = inner(c.available_height, margin_column, padding_border_column);

        let measured = if c.width_mode == MeasureMode::Exactly && c.height_mode == MeasureMode::Exactly {
            // both sizes are dictated, no need to ask the content
            [
                bound_axis(node, ROW, c.available_width - margin_row, c.parent_width, c.parent_width),
                bound_axis(node, COLUMN, c.available_height - margin_column, c.parent_height, c.parent_width),
            ]
        } else {
            let content = measure(MeasureInput {
                context: node.context(),
                width: inner_width,
                width_mode: c.width_mode,
                height: inner_height,
                height_mode: c.height_mode,
            });
            if !is_valid_measurement(content) {
                return Err(LayoutError::NegativeMeasurement {
                    node: id,
                    width: content.width,
                    height: content.height,
                });
            }

            let fits_content = |mode: MeasureMode| mode != MeasureMode::Exactly;
            let width = if fits_content(c.width_mode) {
                content.width + padding_border_row
            } else {
                c.available_width - margin_row
            };
            let height = if fits_content(c.height_mode) {
                content.height + padding_border_column
            } else {
                c.available_height - margin_column
            };
            self.stats.measure_calls += 1;
            log::trace!(
                "{} measured {}x{} under {:?}/{:?}",
                id,
                content.width,
                content.height,
                c.width_mode,
                c.height_mode
            );
            let node = self.node(id);
            [
                bound_axis(node, ROW, width, c.available_width, c.available_width),
                bound_axis(node, COLUMN, height, c.available_height, c.available_width),
            ]
        };

        self.node_mut(id).state.measured = measured;
        Ok(true)
    }

    /// A container without children is as large as its padding and border,
    /// unless its size is dictated.
    pub(super) fn set_measured_dimensions_for_empty_container(&mut self, id: NodeId, c: &Constraints) {
        let node = self.node(id);
        let width = if c.width_mode == MeasureMode::Exactly {
            c.available_width - margin_for_axis(node, ROW, c.parent_width)
        } else {
            padding_and_border_for_axis(node, ROW, c.parent_width)
        };
        let height = if c.height_mode == MeasureMode::Exactly {
            c.available_height - margin_for_axis(node, COLUMN, c.parent_width)
        } else {
            padding_and_border_for_axis(node, COLUMN, c.parent_width)
        };
        let measured = [
            bound_axis(node, ROW, width, c.parent_width, c.parent_width),
            bound_axis(node, COLUMN, height, c.parent_height, c.parent_width),
        ];
        self.node_mut(id).state.measured = measured;
    }

    /// Measure requests whose answer does not depend on the children.
    /// Returns `true` if the size was set.
    pub(super) fn set_measured_dimensions_for_fixed_size(&mut self, id: NodeId, c: &Constraints) -> bool {
        let zero_cap = |mode: MeasureMode, available: f32| mode == MeasureMode::AtMost && available <= 0.0;
        let both_exact = c.width_mode == MeasureMode::Exactly && c.height_mode == MeasureMode::Exactly;
        if !(zero_cap(c.width_mode, c.available_width)
            || zero_cap(c.height_mode, c.available_height)
            || both_exact)
        {
            return false;
        }

        let node = self.node(id);
        let axis_size = |available: f32, mode: MeasureMode, margin: f32| {
            if is_undefined(available) || (mode == MeasureMode::AtMost && available < 0.0) {
                0.0
            } else {
                available - margin
            }
        };
        let width = axis_size(
            c.available_width,
            c.width_mode,
            margin_for_axis(node, ROW, c.parent_width),
        );
        let height = axis_size(
            c.available_height,
            c.height_mode,
            margin_for_axis(node, COLUMN, c.parent_width),
        );
        let measured = [
            bound_axis(node, ROW, width, c.parent_width, c.parent_width),
            bound_axis(node, COLUMN, height, c.parent_height, c.parent_width),
        ];

        let state = &mut self.node_mut(id).state;
        state.measured[WIDTH] = measured[WIDTH];
        state.measured[HEIGHT] = measured[HEIGHT];
        true
    }
}
