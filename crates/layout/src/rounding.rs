//! Snaps the float layout onto the pixel grid.
//!
//! Reads the engine's float state and writes the public [`crate::Layout`] of
//! every node. The float state is left untouched, so cached results stay
//! exact and running the pass again yields the same output.
use crate::direction::{HEIGHT, WIDTH};
use crate::node::NodeId;
use crate::tree::LayoutTree;
use flexure_types::{PhysicalEdge, floats_equal};

/// Rounds `value` to the nearest multiple of `1 / point_scale_factor`.
///
/// `force_ceil`/`force_floor` override nearest rounding for values that are
/// not already on the grid.
pub fn round_value_to_pixel_grid(
    value: f32,
    point_scale_factor: f32,
    force_ceil: bool,
    force_floor: bool,
) -> f32 {
    let mut scaled = value * point_scale_factor;
    let fraction = scaled.rem_euclid(1.0);
    if floats_equal(fraction, 0.0) {
        scaled -= fraction;
    } else if floats_equal(fraction, 1.0) {
        scaled = scaled - fraction + 1.0;
    } else if force_ceil {
        scaled = scaled - fraction + 1.0;
    } else if force_floor {
        scaled -= fraction;
    } else {
        let up = fraction > 0.5 || floats_equal(fraction, 0.5);
        scaled = scaled - fraction + if up { 1.0 } else { 0.0 };
    }
    scaled / point_scale_factor
}

fn has_fraction(value: f32, point_scale_factor: f32) -> bool {
    let fraction = (value * point_scale_factor).rem_euclid(1.0);
    !floats_equal(fraction, 0.0) && !floats_equal(fraction, 1.0)
}

impl LayoutTree {
    /// Publishes the float state of the subtree at `id` as its public layout.
    pub(crate) fn publish_layout(&mut self, id: NodeId) {
        let psf = self.config().point_scale_factor;
        let text_rounding = self.config().experimental.text_rounding;
        self.publish_node(id, psf, text_rounding, 0.0, 0.0);
    }

    fn publish_node(
        &mut self,
        id: NodeId,
        psf: f32,
        text_rounding: bool,
        absolute_left: f32,
        absolute_top: f32,
    ) {
        let rounding = self.config().rounding_enabled();
        let node = self.node_mut(id);
        let left = node.state.position(PhysicalEdge::Left);
        let top = node.state.position(PhysicalEdge::Top);
        let width = node.state.dimensions[WIDTH];
        let height = node.state.dimensions[HEIGHT];

        let node_left = absolute_left + left;
        let node_top = absolute_top + top;

        let layout = &mut node.layout;
        layout.margin = node.state.margin;
        layout.border = node.state.border;
        layout.padding = node.state.padding;
        layout.direction = node.state.direction;

        if !rounding {
            layout.left = left;
            layout.top = top;
            layout.width = width;
            layout.height = height;
        } else {
            // measured content must not be clipped by rounding down
            let is_text = text_rounding && node.measure.is_some();
            let round = |v: f32, ceil: bool, floor: bool| round_value_to_pixel_grid(v, psf, ceil, floor);

            layout.left = round(left, false, is_text);
            layout.top = round(top, false, is_text);

            let fractional_width = has_fraction(width, psf);
            let fractional_height = has_fraction(height, psf);
            layout.width = round(
                node_left + width,
                is_text && fractional_width,
                is_text && !fractional_width,
            ) - round(node_left, false, is_text);
            layout.height = round(
                node_top + height,
                is_text && fractional_height,
                is_text && !fractional_height,
            ) - round(node_top, false, is_text);
        }

        let child_count = node.children.len();
        for i in 0..child_count {
            let child = self.node(id).children[i];
            self.publish_node(child, psf, text_rounding, node_left, node_top);
        }
    }
}
