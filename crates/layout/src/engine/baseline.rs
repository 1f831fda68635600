use crate::direction::{HEIGHT, WIDTH};
use crate::node::NodeId;
use crate::resolve::align_item;
use crate::tree::LayoutTree;
use crate::{LayoutError, Result};
use flexure_style::{Align, Display, PositionType};
use flexure_types::{PhysicalEdge, is_undefined};

impl LayoutTree {
    /// Distance from the top of `id` to its first baseline.
    ///
    /// Asks the baseline function when there is one, else follows the first
    /// child of the first line (preferring a baseline-aligned one) down the
    /// tree. A node without such a child uses its bottom edge.
    pub(super) fn baseline(&mut self, id: NodeId) -> Result<f32> {
        let node = self.node(id);
        let custom = node.baseline.as_ref().map(|baseline| {
            baseline(
                node.context(),
                node.state.measured[WIDTH],
                node.state.measured[HEIGHT],
            )
        });
        if let Some(value) = custom {
            self.stats.baseline_calls += 1;
            if is_undefined(value) {
                return Err(LayoutError::UndefinedBaseline(id));
            }
            return Ok(value);
        }

        let node = self.node(id);
        let mut baseline_child = None;
        for &child in &node.children {
            let child_node = self.node(child);
            if child_node.state.line_index > 0 {
                break;
            }
            if child_node.style.position_type == PositionType::Absolute
                || child_node.style.display == Display::None
            {
                continue;
            }
            if align_item(node, child_node) == Align::Baseline {
                baseline_child = Some(child);
                break;
            }
            if baseline_child.is_none() {
                baseline_child = Some(child);
            }
        }

        match baseline_child {
            Some(child) => {
                let top = self.node(child).state.position(PhysicalEdge::Top);
                Ok(self.baseline(child)? + top)
            }
            None => Ok(node.state.measured[HEIGHT]),
        }
    }

    /// Whether the children of `id` need baseline information to be aligned.
    pub(super) fn is_baseline_layout(&self, id: NodeId) -> bool {
        let node = self.node(id);
        if node.style.flex_direction.is_column() {
            return false;
        }
        if node.style.align_items == Align::Baseline {
            return true;
        }
        node.children.iter().any(|&child| {
            let style = &self.node(child).style;
            style.position_type == PositionType::Relative && style.align_self == Align::Baseline
        })
    }
}
