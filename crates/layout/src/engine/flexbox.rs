//! One visit of the flex algorithm for a container: flex bases, lines,
//! flexible lengths, justification, cross alignment and the final size.
use super::Constraints;
use super::distribute::{FlexItem, resolve_flexible_lengths};
use crate::direction::{
    HEIGHT, WIDTH, cross_axis, dim, leading_edge, resolve_direction, resolve_flex_direction,
    trailing_edge,
};
use crate::node::NodeId;
use crate::resolve::{
    align_item, bound_axis, bound_axis_within_min_max, constrain_max_size_for_mode,
    dim_with_margin, is_flex, is_layout_dim_defined, is_leading_margin_auto,
    is_leading_pos_defined, is_style_dim_defined, is_trailing_margin_auto, leading_border,
    leading_margin, leading_padding_and_border, leading_position, margin_for_axis, measured,
    padding_and_border_for_axis, resolve_box_edges, resolve_flex_grow, resolve_flex_shrink,
    resolved_dimension, trailing_margin, trailing_padding_and_border,
};
use crate::tree::LayoutTree;
use crate::Result;
use flexure_style::{
    Align, Direction, Display, FlexDirection, FlexWrap, JustifyContent, Overflow, PositionType,
};
use flexure_types::{
    MeasureMode, PhysicalEdge, float_max, float_min, floats_equal, is_defined, is_undefined,
};

const ROW: FlexDirection = FlexDirection::Row;
const COLUMN: FlexDirection = FlexDirection::Column;

/// Values derived once per visit and read by every step.
struct FlexFrame {
    direction: Direction,
    main_axis: FlexDirection,
    cross_axis: FlexDirection,
    is_main_row: bool,
    wrap: bool,
    perform_layout: bool,
    main_mode: MeasureMode,
    cross_mode: MeasureMode,
    main_parent_size: f32,
    cross_parent_size: f32,
    leading_padding_border_main: f32,
    trailing_padding_border_main: f32,
    leading_padding_border_cross: f32,
    padding_border_main: f32,
    padding_border_cross: f32,
    min_inner_main: f32,
    max_inner_main: f32,
    inner_width: f32,
    inner_height: f32,
    /// Narrowed per line while the container sizes itself to its content.
    inner_main: f32,
    inner_cross: f32,
    flex_basis_overflows: bool,
}

impl FlexFrame {
    /// Constraints that hand the container's inner box to a child as its
    /// percentage reference.
    fn child_constraints(
        &self,
        width: f32,
        height: f32,
        width_mode: MeasureMode,
        height_mode: MeasureMode,
    ) -> Constraints {
        Constraints {
            available_width: width,
            available_height: height,
            width_mode,
            height_mode,
            parent_width: self.inner_width,
            parent_height: self.inner_height,
        }
    }

    /// Orders a (main, cross) pair as (width, height).
    fn to_physical<T>(&self, main: T, cross: T) -> (T, T) {
        if self.is_main_row { (main, cross) } else { (cross, main) }
    }
}

/// A run of children placed along the main axis without wrapping.
struct FlexLine {
    /// Child index range covered by the line, absolute children included.
    start: usize,
    end: usize,
    items: Vec<FlexItem>,
    size_consumed: f32,
    total_grow: f32,
}

impl LayoutTree {
    pub(super) fn layout_impl(
        &mut self,
        id: NodeId,
        c: Constraints,
        parent_direction: Direction,
        perform_layout: bool,
    ) -> Result<()> {
        let node = self.node_mut(id);
        let direction = resolve_direction(node.style.direction, parent_direction);
        node.state.direction = direction;
        resolve_box_edges(node, c.parent_width);

        if self.set_measured_dimensions_for_measure_func(id, &c)? {
            return Ok(());
        }
        if self.node(id).children.is_empty() {
            self.set_measured_dimensions_for_empty_container(id, &c);
            return Ok(());
        }
        if !perform_layout && self.set_measured_dimensions_for_fixed_size(id, &c) {
            return Ok(());
        }

        let children = self.node(id).children.clone();
        let mut frame = self.flex_frame(id, &c, direction, perform_layout);
        let single_flex_child = self.single_flex_child(&children, &frame);
        let absolute_children =
            self.compute_flex_bases(id, &children, &c, &mut frame, single_flex_child)?;

        let mut start = 0;
        let mut line_count = 0;
        let mut total_line_cross = 0.0;
        let mut max_line_main: f32 = 0.0;
        while start < children.len() {
            let mut line = self.collect_line(&children, start, line_count, &frame);
            let (main_dim, cross_dim) =
                self.layout_line(id, &children, &mut line, &mut frame, &c, total_line_cross)?;
            total_line_cross += cross_dim;
            max_line_main = float_max(max_line_main, main_dim);
            start = line.end;
            line_count += 1;
        }

        if perform_layout
            && (line_count > 1 || self.is_baseline_layout(id))
            && is_defined(frame.inner_cross)
        {
            self.align_lines(id, &children, line_count, total_line_cross, &frame)?;
        }

        self.set_final_dimensions(id, &c, &frame, max_line_main, total_line_cross);

        if perform_layout {
            if self.node(id).style.flex_wrap == FlexWrap::WrapReverse {
                self.reverse_wrapped_lines(id, &children, &frame);
            }

            let width_mode = if frame.is_main_row {
                frame.main_mode
            } else {
                frame.cross_mode
            };
            for child in absolute_children {
                self.layout_absolute_child(
                    id,
                    child,
                    frame.inner_width,
                    width_mode,
                    frame.inner_height,
                    direction,
                )?;
            }

            self.set_trailing_positions(id, &children, &frame);
        }
        Ok(())
    }

    fn flex_frame(
        &self,
        id: NodeId,
        c: &Constraints,
        direction: Direction,
        perform_layout: bool,
    ) -> FlexFrame {
        let node = self.node(id);
        let style = &node.style;
        let main_axis = resolve_flex_direction(style.flex_direction, direction);
        let cross = cross_axis(main_axis, direction);
        let is_main_row = main_axis.is_row();

        let padding_border_main = padding_and_border_for_axis(node, main_axis, c.parent_width);
        let padding_border_cross = padding_and_border_for_axis(node, cross, c.parent_width);
        let (padding_border_row, padding_border_column) = if is_main_row {
            (padding_border_main, padding_border_cross)
        } else {
            (padding_border_cross, padding_border_main)
        };
        let margin_row = margin_for_axis(node, ROW, c.parent_width);
        let margin_column = margin_for_axis(node, COLUMN, c.parent_width);

        let inner_limit = |value: f32, outer: f32| value - outer;
        let min_inner_width = inner_limit(
            style.min_width.resolve(c.parent_width),
            margin_row + padding_border_row,
        );
        let max_inner_width = inner_limit(
            style.max_width.resolve(c.parent_width),
            margin_row + padding_border_row,
        );
        let min_inner_height = inner_limit(
            style.min_height.resolve(c.parent_height),
            margin_column + padding_border_column,
        );
        let max_inner_height = inner_limit(
            style.max_height.resolve(c.parent_height),
            margin_column + padding_border_column,
        );

        // max overrides the given size, min overrides both
        let clamp_inner = |available: f32, min: f32, max: f32| {
            if is_undefined(available) {
                available
            } else {
                float_max(float_min(available, max), min)
            }
        };
        let inner_width = clamp_inner(
            c.available_width - margin_row - padding_border_row,
            min_inner_width,
            max_inner_width,
        );
        let inner_height = clamp_inner(
            c.available_height - margin_column - padding_border_column,
            min_inner_height,
            max_inner_height,
        );

        let pick = |row: f32, column: f32| if is_main_row { (row, column) } else { (column, row) };
        let (main_parent_size, cross_parent_size) = pick(c.parent_width, c.parent_height);
        let (inner_main, inner_cross) = pick(inner_width, inner_height);
        let (min_inner_main, _) = pick(min_inner_width, min_inner_height);
        let (max_inner_main, _) = pick(max_inner_width, max_inner_height);
        let (main_mode, cross_mode) = if is_main_row {
            (c.width_mode, c.height_mode)
        } else {
            (c.height_mode, c.width_mode)
        };

        FlexFrame {
            direction,
            main_axis,
            cross_axis: cross,
            is_main_row,
            wrap: style.flex_wrap != FlexWrap::NoWrap,
            perform_layout,
            main_mode,
            cross_mode,
            main_parent_size,
            cross_parent_size,
            leading_padding_border_main: leading_padding_and_border(node, main_axis, c.parent_width),
            trailing_padding_border_main: trailing_padding_and_border(node, main_axis, c.parent_width),
            leading_padding_border_cross: leading_padding_and_border(node, cross, c.parent_width),
            padding_border_main,
            padding_border_cross,
            min_inner_main,
            max_inner_main,
            inner_width,
            inner_height,
            inner_main,
            inner_cross,
            flex_basis_overflows: false,
        }
    }

    /// With an exact main size, a lone child that can both grow and shrink
    /// will end up filling the line no matter its content, so it is not
    /// measured for a basis.
    fn single_flex_child(&self, children: &[NodeId], frame: &FlexFrame) -> Option<NodeId> {
        if frame.main_mode != MeasureMode::Exactly {
            return None;
        }
        let mut single = None;
        for &child in children {
            let child_node = self.node(child);
            if single.is_some() {
                if is_flex(child_node) {
                    return None;
                }
            } else if resolve_flex_grow(child_node) > 0.0 && resolve_flex_shrink(child_node) > 0.0 {
                single = Some(child);
            }
        }
        single
    }

    /// Seeds child positions, computes flex bases and returns the absolutely
    /// positioned children for the final step.
    fn compute_flex_bases(
        &mut self,
        id: NodeId,
        children: &[NodeId],
        c: &Constraints,
        frame: &mut FlexFrame,
        single_flex_child: Option<NodeId>,
    ) -> Result<Vec<NodeId>> {
        let basis_constraints = Constraints {
            available_width: frame.inner_width,
            available_height: frame.inner_height,
            width_mode: c.width_mode,
            height_mode: c.height_mode,
            parent_width: frame.inner_width,
            parent_height: frame.inner_height,
        };
        let mut absolute = Vec::new();
        let mut total_outer_flex_basis = 0.0;

        for &child in children {
            self.resolve_child_direction(child, frame.direction);
            if self.node(child).style.display == Display::None {
                self.zero_out_layout_recursively(child);
                continue;
            }
            if frame.perform_layout {
                self.set_child_position(
                    child,
                    frame.main_axis,
                    frame.cross_axis,
                    frame.inner_main,
                    frame.inner_cross,
                    frame.inner_width,
                );
            }
            if self.node(child).style.position_type == PositionType::Absolute {
                absolute.push(child);
                continue;
            }

            if Some(child) == single_flex_child {
                let generation = self.generation;
                let state = &mut self.node_mut(child).state;
                state.computed_flex_basis = 0.0;
                state.flex_basis_reference = None;
                state.computed_flex_basis_generation = generation;
            } else {
                self.compute_flex_basis_for_child(id, child, &basis_constraints, frame.direction)?;
            }

            let child_node = self.node(child);
            total_outer_flex_basis += child_node.state.computed_flex_basis
                + margin_for_axis(child_node, frame.main_axis, frame.inner_width);
        }

        frame.flex_basis_overflows =
            frame.main_mode != MeasureMode::Undefined && total_outer_flex_basis > frame.inner_main;
        if frame.wrap && frame.flex_basis_overflows && frame.main_mode == MeasureMode::AtMost {
            frame.main_mode = MeasureMode::Exactly;
        }
        Ok(absolute)
    }

    /// Gathers children into one line, starting at `start`, until the line is
    /// full (wrapping containers only) or the children run out.
    fn collect_line(
        &mut self,
        children: &[NodeId],
        start: usize,
        line_index: usize,
        frame: &FlexFrame,
    ) -> FlexLine {
        let mut line = FlexLine {
            start,
            end: start,
            items: Vec::new(),
            size_consumed: 0.0,
            total_grow: 0.0,
        };

        for &child in &children[start..] {
            let child_node = self.node_mut(child);
            if child_node.style.display == Display::None {
                line.end += 1;
                continue;
            }
            child_node.state.line_index = line_index;

            if child_node.style.position_type != PositionType::Absolute {
                let horizontal = frame.is_main_row;
                let min = child_node.style.min_dimension(horizontal).resolve(frame.inner_main);
                let max = child_node.style.max_dimension(horizontal).resolve(frame.inner_main);
                let basis = float_max(min, float_min(max, child_node.state.computed_flex_basis));
                let margin = margin_for_axis(child_node, frame.main_axis, frame.inner_width);

                if line.size_consumed + basis + margin > frame.inner_main
                    && frame.wrap
                    && !line.items.is_empty()
                {
                    break;
                }

                line.size_consumed += basis + margin;
                if is_flex(child_node) {
                    line.total_grow += resolve_flex_grow(child_node);
                }
                line.items.push(FlexItem::new(
                    child,
                    basis,
                    resolve_flex_grow(child_node),
                    resolve_flex_shrink(child_node),
                ));
            }
            line.end += 1;
        }
        line
    }

    /// Resolves, justifies and cross-aligns one line. Returns the line's main
    /// extent (padding and border included) and its cross size.
    fn layout_line(
        &mut self,
        id: NodeId,
        children: &[NodeId],
        line: &mut FlexLine,
        frame: &mut FlexFrame,
        c: &Constraints,
        total_line_cross: f32,
    ) -> Result<(f32, f32)> {
        // a container sized by its content has no free space to hand out
        if frame.main_mode != MeasureMode::Exactly {
            let consumed = line.size_consumed;
            if is_defined(frame.min_inner_main) && consumed < frame.min_inner_main {
                frame.inner_main = frame.min_inner_main;
            } else if is_defined(frame.max_inner_main) && consumed > frame.max_inner_main {
                frame.inner_main = frame.max_inner_main;
            } else if line.total_grow == 0.0 || resolve_flex_grow(self.node(id)) == 0.0 {
                frame.inner_main = consumed;
            }
        }

        let mut remaining = if is_defined(frame.inner_main) {
            frame.inner_main - line.size_consumed
        } else if line.size_consumed < 0.0 {
            -line.size_consumed
        } else {
            0.0
        };

        let can_skip_flex = !frame.perform_layout && frame.cross_mode == MeasureMode::Exactly;
        if !can_skip_flex {
            let main_axis = frame.main_axis;
            let inner_main = frame.inner_main;
            let inner_width = frame.inner_width;
            remaining = resolve_flexible_lengths(id, &mut line.items, remaining, |child, size| {
                bound_axis(self.node(child), main_axis, size, inner_main, inner_width)
            })?;
            for item in &line.items {
                self.layout_flex_item(id, item, frame)?;
            }
        }

        let main_dim = self.justify_line(id, children, line, frame, remaining, can_skip_flex);
        let (cross_dim, container_cross) = self.line_cross_size(id, children, line, frame, c, can_skip_flex);
        if frame.perform_layout {
            self.align_line_items(id, children, line, frame, cross_dim, container_cross, total_line_cross)?;
        }
        Ok((main_dim, cross_dim))
    }

    /// Lays a flow child out at its resolved main size.
    fn layout_flex_item(&mut self, id: NodeId, item: &FlexItem, frame: &FlexFrame) -> Result<()> {
        let node = self.node(id);
        let child_node = self.node(item.id);
        let main = frame.main_axis;
        let cross = frame.cross_axis;

        let mut child_main = item.target + margin_for_axis(child_node, main, frame.inner_width);
        let mut main_mode = MeasureMode::Exactly;

        let cross_defined = is_style_dim_defined(child_node, cross, frame.inner_cross);
        let align = align_item(node, child_node);
        let stretches = align == Align::Stretch
            && !is_leading_margin_auto(child_node, cross)
            && !is_trailing_margin_auto(child_node, cross);

        let (mut child_cross, mut cross_mode) = if is_defined(frame.inner_cross)
            && !cross_defined
            && frame.cross_mode == MeasureMode::Exactly
            && !(frame.wrap && frame.flex_basis_overflows)
            && align == Align::Stretch
        {
            (frame.inner_cross, MeasureMode::Exactly)
        } else if !cross_defined {
            let mode = if is_undefined(frame.inner_cross) {
                MeasureMode::Undefined
            } else {
                MeasureMode::AtMost
            };
            (frame.inner_cross, mode)
        } else {
            let dimension = resolved_dimension(&child_node.style, cross);
            let size = dimension.resolve(frame.inner_cross)
                + margin_for_axis(child_node, cross, frame.inner_width);
            // a percentage of a cross size that is not final yet
            let loose_percent = dimension.is_percent() && frame.cross_mode != MeasureMode::Exactly;
            let mode = if is_undefined(size) || loose_percent {
                MeasureMode::Undefined
            } else {
                MeasureMode::Exactly
            };
            (size, mode)
        };

        constrain_max_size_for_mode(
            child_node,
            main,
            frame.inner_main,
            frame.inner_width,
            &mut main_mode,
            &mut child_main,
        );
        constrain_max_size_for_mode(
            child_node,
            cross,
            frame.inner_cross,
            frame.inner_width,
            &mut cross_mode,
            &mut child_cross,
        );

        // stretched children get their full layout once the line is sized
        let requires_stretch_layout = !cross_defined && stretches;
        let (width, height) = frame.to_physical(child_main, child_cross);
        let (width_mode, height_mode) = frame.to_physical(main_mode, cross_mode);
        let constraints = frame.child_constraints(width, height, width_mode, height_mode);
        self.layout_node_internal(
            item.id,
            constraints,
            frame.direction,
            frame.perform_layout && !requires_stretch_layout,
            "flex",
        )?;
        Ok(())
    }

    /// Places the children of a line along the main axis. Returns the main
    /// extent of the line including the container's padding and border.
    fn justify_line(
        &mut self,
        id: NodeId,
        children: &[NodeId],
        line: &FlexLine,
        frame: &FlexFrame,
        mut remaining: f32,
        can_skip_flex: bool,
    ) -> f32 {
        let node = self.node(id);
        let main = frame.main_axis;

        if frame.main_mode == MeasureMode::AtMost && remaining > 0.0 {
            let min = node.style.min_dimension(frame.is_main_row);
            let min_value = min.resolve(frame.main_parent_size);
            remaining = if !min.is_undefined() && min_value >= 0.0 {
                (min_value - (frame.inner_main - remaining)).max(0.0)
            } else {
                0.0
            };
        }

        let auto_margins: usize = children[line.start..line.end]
            .iter()
            .map(|&child| self.node(child))
            .filter(|child| {
                child.style.position_type == PositionType::Relative
                    && child.style.display != Display::None
            })
            .map(|child| {
                usize::from(is_leading_margin_auto(child, main))
                    + usize::from(is_trailing_margin_auto(child, main))
            })
            .sum();

        let items = line.items.len() as f32;
        let (leading_main, between_main) = if auto_margins > 0 || line.items.is_empty() {
            (0.0, 0.0)
        } else {
            match node.style.justify_content {
                JustifyContent::FlexStart => (0.0, 0.0),
                JustifyContent::Center => (remaining / 2.0, 0.0),
                JustifyContent::FlexEnd => (remaining, 0.0),
                JustifyContent::SpaceBetween if line.items.len() > 1 => {
                    (0.0, remaining.max(0.0) / (items - 1.0))
                }
                JustifyContent::SpaceBetween => (0.0, 0.0),
                JustifyContent::SpaceAround => {
                    let between = remaining / items;
                    (between / 2.0, between)
                }
                JustifyContent::SpaceEvenly => {
                    let between = remaining / (items + 1.0);
                    (between, between)
                }
            }
        };
        let auto_margin_share = if auto_margins > 0 {
            remaining.max(0.0) / auto_margins as f32
        } else {
            0.0
        };

        let leading_border_main = leading_border(node, main);
        let main_edge = leading_edge(main);
        let mut main_dim = frame.leading_padding_border_main + leading_main;

        for &child in &children[line.start..line.end] {
            let child_node = self.node(child);
            if child_node.style.display == Display::None {
                continue;
            }
            let absolute = child_node.style.position_type == PositionType::Absolute;

            if absolute && is_leading_pos_defined(child_node, main) {
                if frame.perform_layout {
                    // explicit insets override the flow position
                    let position = leading_position(child_node, main, frame.inner_main)
                        + leading_border_main
                        + leading_margin(child_node, main, frame.inner_width);
                    self.node_mut(child).state.set_position(main_edge, position);
                }
            } else if !absolute {
                if is_leading_margin_auto(child_node, main) {
                    main_dim += auto_margin_share;
                }
                let trailing_auto = is_trailing_margin_auto(child_node, main);
                // a measure-only pass with a fixed cross size never resolved flexible lengths
                let extent = if can_skip_flex {
                    margin_for_axis(child_node, main, frame.inner_width)
                        + child_node.state.computed_flex_basis
                } else {
                    dim_with_margin(child_node, main, frame.inner_width)
                };

                if frame.perform_layout {
                    let state = &mut self.node_mut(child).state;
                    state.set_position(main_edge, state.position(main_edge) + main_dim);
                }
                if trailing_auto {
                    main_dim += auto_margin_share;
                }
                main_dim += between_main + extent;
            } else if frame.perform_layout {
                let state = &mut self.node_mut(child).state;
                state.set_position(
                    main_edge,
                    state.position(main_edge) + leading_border_main + leading_main,
                );
            }
        }

        main_dim + frame.trailing_padding_border_main
    }

    /// Cross size of a line and the cross space its items are aligned in.
    fn line_cross_size(
        &self,
        id: NodeId,
        children: &[NodeId],
        line: &FlexLine,
        frame: &FlexFrame,
        c: &Constraints,
        can_skip_flex: bool,
    ) -> (f32, f32) {
        let node = self.node(id);
        let cross = frame.cross_axis;

        let mut cross_dim = 0.0;
        if can_skip_flex {
            cross_dim = frame.inner_cross;
        } else {
            for &child in &children[line.start..line.end] {
                let child_node = self.node(child);
                if child_node.style.display != Display::None
                    && child_node.style.position_type == PositionType::Relative
                {
                    cross_dim = float_max(cross_dim, dim_with_margin(child_node, cross, frame.inner_width));
                }
            }
        }

        let bound_inner = |size: f32| {
            bound_axis(
                node,
                cross,
                size + frame.padding_border_cross,
                frame.cross_parent_size,
                c.parent_width,
            ) - frame.padding_border_cross
        };

        let mut container_cross = frame.inner_cross;
        if frame.cross_mode != MeasureMode::Exactly {
            container_cross = bound_inner(cross_dim);
            if frame.cross_mode == MeasureMode::AtMost {
                container_cross = float_min(container_cross, frame.inner_cross);
            }
        }

        // without wrapping the single line spans the whole container
        if !frame.wrap && frame.cross_mode == MeasureMode::Exactly {
            cross_dim = frame.inner_cross;
        }
        (bound_inner(cross_dim), container_cross)
    }

    /// Positions the children of a line on the cross axis, re-laying out the
    /// stretched ones at the line's cross size.
    #[allow(clippy::too_many_arguments)]
    fn align_line_items(
        &mut self,
        id: NodeId,
        children: &[NodeId],
        line: &FlexLine,
        frame: &FlexFrame,
        cross_dim: f32,
        container_cross: f32,
        total_line_cross: f32,
    ) -> Result<()> {
        let main = frame.main_axis;
        let cross = frame.cross_axis;
        let cross_edge = leading_edge(cross);

        for &child in &children[line.start..line.end] {
            let node = self.node(id);
            let child_node = self.node(child);
            if child_node.style.display == Display::None {
                continue;
            }

            if child_node.style.position_type == PositionType::Absolute {
                let mut position =
                    leading_border(node, cross) + leading_margin(child_node, cross, frame.inner_width);
                if is_leading_pos_defined(child_node, cross) {
                    position += leading_position(child_node, cross, frame.inner_cross);
                }
                self.node_mut(child).state.set_position(cross_edge, position);
                continue;
            }

            let mut leading_cross = frame.leading_padding_border_cross;
            let align = align_item(node, child_node);
            let leading_auto = is_leading_margin_auto(child_node, cross);
            let trailing_auto = is_trailing_margin_auto(child_node, cross);

            if align == Align::Stretch && !leading_auto && !trailing_auto {
                if !is_style_dim_defined(child_node, cross, frame.inner_cross) {
                    let mut child_main =
                        measured(child_node, main) + margin_for_axis(child_node, main, frame.inner_width);
                    let mut child_cross = cross_dim;
                    let mut main_mode = MeasureMode::Exactly;
                    let mut cross_mode = MeasureMode::Exactly;
                    constrain_max_size_for_mode(
                        child_node,
                        main,
                        frame.inner_main,
                        frame.inner_width,
                        &mut main_mode,
                        &mut child_main,
                    );
                    constrain_max_size_for_mode(
                        child_node,
                        cross,
                        frame.inner_cross,
                        frame.inner_width,
                        &mut cross_mode,
                        &mut child_cross,
                    );

                    let (width, height) = frame.to_physical(child_main, child_cross);
                    let mode_for = |size: f32| {
                        if is_undefined(size) {
                            MeasureMode::Undefined
                        } else {
                            MeasureMode::Exactly
                        }
                    };
                    let constraints =
                        frame.child_constraints(width, height, mode_for(width), mode_for(height));
                    self.layout_node_internal(child, constraints, frame.direction, true, "stretch")?;
                }
            } else {
                let remaining_cross =
                    container_cross - dim_with_margin(child_node, cross, frame.inner_width);
                leading_cross += match (leading_auto, trailing_auto) {
                    (true, true) => (remaining_cross / 2.0).max(0.0),
                    (false, true) => 0.0,
                    (true, false) => remaining_cross.max(0.0),
                    (false, false) => match align {
                        Align::Center => remaining_cross / 2.0,
                        Align::FlexEnd => remaining_cross,
                        // baseline items are placed once every line is known
                        _ => 0.0,
                    },
                };
            }

            let state = &mut self.node_mut(child).state;
            state.set_position(
                cross_edge,
                state.position(cross_edge) + total_line_cross + leading_cross,
            );
        }
        Ok(())
    }

    /// Distributes the container's cross space over its lines and aligns
    /// every item inside its line, baselines included.
    fn align_lines(
        &mut self,
        id: NodeId,
        children: &[NodeId],
        line_count: usize,
        total_line_cross: f32,
        frame: &FlexFrame,
    ) -> Result<()> {
        let cross = frame.cross_axis;
        let cross_edge = leading_edge(cross);
        let remaining = frame.inner_cross - total_line_cross;
        let has_room = frame.inner_cross > total_line_cross;
        let lines = line_count as f32;

        let mut current_lead = frame.leading_padding_border_cross;
        let mut cross_dim_lead = 0.0;
        match self.node(id).style.align_content {
            Align::FlexEnd => current_lead += remaining,
            Align::Center => current_lead += remaining / 2.0,
            Align::Stretch if has_room => cross_dim_lead = remaining / lines,
            Align::SpaceAround if has_room => {
                current_lead += remaining / (2.0 * lines);
                if line_count > 1 {
                    cross_dim_lead = remaining / lines;
                }
            }
            Align::SpaceAround => current_lead += remaining / 2.0,
            Align::SpaceBetween if has_room && line_count > 1 => {
                cross_dim_lead = remaining / (lines - 1.0);
            }
            _ => {}
        }

        let mut end = 0;
        for line_index in 0..line_count {
            let start = end;

            let mut line_height: f32 = 0.0;
            let mut max_ascent: f32 = 0.0;
            let mut max_descent: f32 = 0.0;
            end = start;
            while end < children.len() {
                let child = children[end];
                let child_node = self.node(child);
                if child_node.style.display == Display::None
                    || child_node.style.position_type != PositionType::Relative
                {
                    end += 1;
                    continue;
                }
                if child_node.state.line_index != line_index {
                    break;
                }
                if is_layout_dim_defined(child_node, cross) {
                    line_height = line_height.max(
                        measured(child_node, cross) + margin_for_axis(child_node, cross, frame.inner_width),
                    );
                }
                if align_item(self.node(id), child_node) == Align::Baseline {
                    let top_margin = leading_margin(child_node, COLUMN, frame.inner_width);
                    let outer_height =
                        child_node.state.measured[HEIGHT] + margin_for_axis(child_node, COLUMN, frame.inner_width);
                    let ascent = self.baseline(child)? + top_margin;
                    let descent = outer_height - ascent;
                    max_ascent = max_ascent.max(ascent);
                    max_descent = max_descent.max(descent);
                    line_height = line_height.max(max_ascent + max_descent);
                }
                end += 1;
            }
            line_height += cross_dim_lead;

            for &child in &children[start..end] {
                let child_node = self.node(child);
                if child_node.style.display == Display::None
                    || child_node.style.position_type != PositionType::Relative
                {
                    continue;
                }
                let leading = leading_margin(child_node, cross, frame.inner_width);
                let trailing = trailing_margin(child_node, cross, frame.inner_width);
                let child_cross = measured(child_node, cross);

                match align_item(self.node(id), child_node) {
                    Align::FlexStart => {
                        self.node_mut(child).state.set_position(cross_edge, current_lead + leading);
                    }
                    Align::FlexEnd => {
                        let position = current_lead + line_height - trailing - child_cross;
                        self.node_mut(child).state.set_position(cross_edge, position);
                    }
                    Align::Center => {
                        let position = current_lead + (line_height - child_cross) / 2.0;
                        self.node_mut(child).state.set_position(cross_edge, position);
                    }
                    Align::Stretch => {
                        self.node_mut(child).state.set_position(cross_edge, current_lead + leading);
                        self.stretch_to_line(child, line_height, frame)?;
                    }
                    Align::Baseline => {
                        let offset = leading_position(child_node, COLUMN, frame.inner_cross);
                        let position = current_lead + max_ascent - self.baseline(child)? + offset;
                        self.node_mut(child).state.set_position(PhysicalEdge::Top, position);
                    }
                    Align::Auto | Align::SpaceBetween | Align::SpaceAround => {}
                }
            }
            current_lead += line_height;
        }
        Ok(())
    }

    /// Re-lays out a stretched child of a multi-line container at the final
    /// height of its line.
    fn stretch_to_line(&mut self, child: NodeId, line_height: f32, frame: &FlexFrame) -> Result<()> {
        let child_node = self.node(child);
        if is_style_dim_defined(child_node, frame.cross_axis, frame.inner_cross) {
            return Ok(());
        }

        let main_size =
            measured(child_node, frame.main_axis) + margin_for_axis(child_node, frame.main_axis, frame.inner_width);
        let (width, height) = frame.to_physical(main_size, line_height);
        let unchanged = floats_equal(width, child_node.state.measured[WIDTH])
            && floats_equal(height, child_node.state.measured[HEIGHT]);
        if unchanged {
            return Ok(());
        }
        let constraints =
            frame.child_constraints(width, height, MeasureMode::Exactly, MeasureMode::Exactly);
        self.layout_node_internal(child, constraints, frame.direction, true, "multiline-stretch")?;
        Ok(())
    }

    fn set_final_dimensions(
        &mut self,
        id: NodeId,
        c: &Constraints,
        frame: &FlexFrame,
        max_line_main: f32,
        total_line_cross: f32,
    ) {
        let node = self.node(id);
        let margin_row = margin_for_axis(node, ROW, c.parent_width);
        let margin_column = margin_for_axis(node, COLUMN, c.parent_width);
        let mut size = [
            bound_axis(node, ROW, c.available_width - margin_row, c.parent_width, c.parent_width),
            bound_axis(
                node,
                COLUMN,
                c.available_height - margin_column,
                c.parent_height,
                c.parent_width,
            ),
        ];

        // a scroll container keeps its available size instead of growing
        let scrolls = node.style.overflow == Overflow::Scroll;
        let content_sized = |mode: MeasureMode| {
            mode == MeasureMode::Undefined || (!scrolls && mode == MeasureMode::AtMost)
        };
        let scroll_capped = |mode: MeasureMode| mode == MeasureMode::AtMost && scrolls;

        let main = frame.main_axis;
        if content_sized(frame.main_mode) {
            size[dim(main)] =
                bound_axis(node, main, max_line_main, frame.main_parent_size, c.parent_width);
        } else if scroll_capped(frame.main_mode) {
            size[dim(main)] = float_max(
                float_min(
                    frame.inner_main + frame.padding_border_main,
                    bound_axis_within_min_max(node, main, max_line_main, frame.main_parent_size),
                ),
                frame.padding_border_main,
            );
        }

        let cross = frame.cross_axis;
        let content_cross = total_line_cross + frame.padding_border_cross;
        if content_sized(frame.cross_mode) {
            size[dim(cross)] =
                bound_axis(node, cross, content_cross, frame.cross_parent_size, c.parent_width);
        } else if scroll_capped(frame.cross_mode) {
            size[dim(cross)] = float_max(
                float_min(
                    frame.inner_cross + frame.padding_border_cross,
                    bound_axis_within_min_max(node, cross, content_cross, frame.cross_parent_size),
                ),
                frame.padding_border_cross,
            );
        }

        self.node_mut(id).state.measured = size;
    }

    /// Lines were stacked from the cross start; wrap-reverse stacks them from
    /// the cross end instead.
    fn reverse_wrapped_lines(&mut self, id: NodeId, children: &[NodeId], frame: &FlexFrame) {
        let cross = frame.cross_axis;
        let cross_edge = leading_edge(cross);
        let container = measured(self.node(id), cross);
        for &child in children {
            let child_node = self.node(child);
            if child_node.style.position_type != PositionType::Relative {
                continue;
            }
            let size = measured(child_node, cross);
            let state = &mut self.node_mut(child).state;
            state.set_position(cross_edge, container - state.position(cross_edge) - size);
        }
    }

    /// Children of reversed axes were positioned from the leading edge; fill
    /// in the physical offset from the opposite edge as well.
    fn set_trailing_positions(&mut self, id: NodeId, children: &[NodeId], frame: &FlexFrame) {
        let axes: Vec<FlexDirection> = [frame.main_axis, frame.cross_axis]
            .into_iter()
            .filter(|axis| axis.is_reverse())
            .collect();
        if axes.is_empty() {
            return;
        }

        for &child in children {
            if self.node(child).style.display == Display::None {
                continue;
            }
            for &axis in &axes {
                let container = measured(self.node(id), axis);
                let size = measured(self.node(child), axis);
                let state = &mut self.node_mut(child).state;
                let position = container - size - state.position(leading_edge(axis));
                state.set_position(trailing_edge(axis), position);
            }
        }
    }
}
