use super::Constraints;
use crate::direction::{dim, resolve_flex_direction};
use crate::node::NodeId;
use crate::resolve::{
    align_item, constrain_max_size_for_mode, is_style_dim_defined, margin_for_axis,
    padding_and_border_for_axis, resolved_dimension,
};
use crate::tree::LayoutTree;
use crate::Result;
use flexure_style::{Align, Direction, FlexDirection, Overflow};
use flexure_types::{MeasureMode, UNDEFINED, floats_equal, is_defined, is_undefined};

const ROW: FlexDirection = FlexDirection::Row;
const COLUMN: FlexDirection = FlexDirection::Column;

impl LayoutTree {
    /// Computes the hypothetical main size of `child` inside `parent`.
    ///
    /// `c` holds the parent's available inner sizes, which double as the
    /// reference sizes for the child's percentages.
    pub(super) fn compute_flex_basis_for_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        c: &Constraints,
        direction: Direction,
    ) -> Result<()> {
        let width = c.available_width;
        let height = c.available_height;
        let generation = self.generation;
        let web_flex_basis = self.config().experimental.web_flex_basis;

        let parent_node = self.node(parent);
        let child_node = self.node(child);
        let main_axis = resolve_flex_direction(parent_node.style.flex_direction, direction);
        let is_main_row = main_axis.is_row();
        let main_size = if is_main_row { width } else { height };
        let main_parent_size = if is_main_row { c.parent_width } else { c.parent_height };

        let basis = child_node.style.flex_basis.resolve(main_parent_size);
        let row_defined = is_style_dim_defined(child_node, ROW, c.parent_width);
        let column_defined = is_style_dim_defined(child_node, COLUMN, c.parent_height);

        if is_defined(basis) && is_defined(main_size) {
            let reference = [main_parent_size, c.parent_width];
            let state = &child_node.state;
            let same_reference = state.flex_basis_reference.is_some_and(|previous| {
                floats_equal(previous[0], reference[0]) && floats_equal(previous[1], reference[1])
            });
            let stale = is_undefined(state.computed_flex_basis)
                || !same_reference
                || (web_flex_basis && state.computed_flex_basis_generation != generation);
            if stale {
                let floor = padding_and_border_for_axis(child_node, main_axis, c.parent_width);
                let state = &mut self.node_mut(child).state;
                state.computed_flex_basis = basis.max(floor);
                state.flex_basis_reference = Some(reference);
            }
        } else if is_main_row && row_defined {
            // definite width
            let size = resolved_dimension(&child_node.style, ROW).resolve(c.parent_width);
            let floor = padding_and_border_for_axis(child_node, ROW, c.parent_width);
            let state = &mut self.node_mut(child).state;
            state.computed_flex_basis = size.max(floor);
            state.flex_basis_reference = None;
        } else if !is_main_row && column_defined {
            let size = resolved_dimension(&child_node.style, COLUMN).resolve(c.parent_height);
            let floor = padding_and_border_for_axis(child_node, COLUMN, c.parent_width);
            let state = &mut self.node_mut(child).state;
            state.computed_flex_basis = size.max(floor);
            state.flex_basis_reference = None;
        } else {
            let mut child_width = UNDEFINED;
            let mut child_height = UNDEFINED;
            let mut width_mode = MeasureMode::Undefined;
            let mut height_mode = MeasureMode::Undefined;

            if row_defined {
                child_width = resolved_dimension(&child_node.style, ROW).resolve(c.parent_width)
                    + margin_for_axis(child_node, ROW, c.parent_width);
                width_mode = MeasureMode::Exactly;
            }
            if column_defined {
                child_height = resolved_dimension(&child_node.style, COLUMN).resolve(c.parent_height)
                    + margin_for_axis(child_node, COLUMN, c.parent_width);
                height_mode = MeasureMode::Exactly;
            }

            // a scroll container does not cap its children along the main axis
            let scrolls = parent_node.style.overflow == Overflow::Scroll;
            if (!scrolls || !is_main_row) && is_undefined(child_width) && is_defined(width) {
                child_width = width;
                width_mode = MeasureMode::AtMost;
            }
            if (!scrolls || is_main_row) && is_undefined(child_height) && is_defined(height) {
                child_height = height;
                height_mode = MeasureMode::AtMost;
            }

            let stretches = align_item(parent_node, child_node) == Align::Stretch;
            if !is_main_row
                && is_defined(width)
                && !row_defined
                && c.width_mode == MeasureMode::Exactly
                && stretches
            {
                child_width = width;
                width_mode = MeasureMode::Exactly;
            }
            if is_main_row
                && is_defined(height)
                && !column_defined
                && c.height_mode == MeasureMode::Exactly
                && stretches
            {
                child_height = height;
                height_mode = MeasureMode::Exactly;
            }

            constrain_max_size_for_mode(
                child_node,
                ROW,
                c.parent_width,
                c.parent_width,
                &mut width_mode,
                &mut child_width,
            );
            constrain_max_size_for_mode(
                child_node,
                COLUMN,
                c.parent_height,
                c.parent_width,
                &mut height_mode,
                &mut child_height,
            );

            let child_constraints = Constraints {
                available_width: child_width,
                available_height: child_height,
                width_mode,
                height_mode,
                parent_width: c.parent_width,
                parent_height: c.parent_height,
            };
            self.layout_node_internal(child, child_constraints, direction, false, "measure")?;

            let child_node = self.node_mut(child);
            let floor = padding_and_border_for_axis(child_node, main_axis, c.parent_width);
            child_node.state.computed_flex_basis = child_node.state.measured[dim(main_axis)].max(floor);
            child_node.state.flex_basis_reference = None;
        }

        self.node_mut(child).state.computed_flex_basis_generation = generation;
        Ok(())
    }
}
