//! The node arena and its mutation API.
use crate::config::LayoutConfig;
use crate::measure::{BaselineFunc, MeasureFunc};
use crate::node::{Layout, Node, NodeId};
use crate::perf::LayoutStats;
use crate::{LayoutError, Result};
use flexure_style::{Direction, Style};
use flexure_types::UNDEFINED;
use std::any::Any;

/// Owns every node of one or more trees, plus the configuration and the
/// per-pass bookkeeping they are laid out with.
///
/// Nothing is shared between two `LayoutTree`s, so distinct trees can be laid
/// out on different threads.
pub struct LayoutTree {
    nodes: Vec<Node>,
    config: LayoutConfig,
    pub(crate) generation: u32,
    pub(crate) stats: LayoutStats,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            nodes: Vec::new(),
            config,
            generation: 0,
            stats: LayoutStats::default(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Counters from the most recent layout pass.
    pub fn stats(&self) -> &LayoutStats {
        &self.stats
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The style new nodes start from under this tree's configuration.
    pub fn default_style(&self) -> Style {
        if self.config.use_web_defaults {
            Style::web_defaults()
        } else {
            Style::default()
        }
    }

    /// Creates a detached node with the default style.
    pub fn new_node(&mut self) -> NodeId {
        let style = self.default_style();
        self.new_styled(style)
    }

    pub fn new_styled(&mut self, style: Style) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(style));
        id
    }

    /// Creates a detached leaf whose content size comes from `measure`.
    pub fn new_leaf(&mut self, style: Style, measure: MeasureFunc) -> NodeId {
        let id = self.new_styled(style);
        self.nodes[id.0].measure = Some(measure);
        id
    }

    /// Creates a node with the given children already attached.
    pub fn new_with_children(&mut self, style: Style, children: &[NodeId]) -> Result<NodeId> {
        let id = self.new_styled(style);
        for &child in children {
            self.append_child(id, child)?;
        }
        Ok(id)
    }

    fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(LayoutError::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(LayoutError::UnknownNode(id))
    }

    /// Engine access to a node known to exist.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Inserts `child` at `index` among `parent`'s children (clamped to the
    /// end of the list).
    pub fn insert_child(&mut self, parent: NodeId, child: NodeId, index: usize) -> Result<()> {
        let parent_node = self.get(parent)?;
        let child_node = self.get(child)?;

        if parent_node.measure.is_some() {
            return Err(LayoutError::MeasuredNodeChild(parent));
        }
        if child_node.parent.is_some() {
            return Err(LayoutError::AlreadyParented(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(LayoutError::Cycle { parent, child });
        }

        let children = &mut self.nodes[parent.0].children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
        log::trace!("Inserted {} under {} at {}", child, parent, index);
        self.mark_dirty_internal(parent);
        Ok(())
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let index = self.get(parent)?.children.len();
        self.insert_child(parent, child, index)
    }

    /// Detaches `child` from `parent`. Returns `false` if it was not a child.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        let parent_node = self.get_mut(parent)?;
        let Some(position) = parent_node.children.iter().position(|&c| c == child) else {
            return Ok(false);
        };
        parent_node.children.remove(position);

        let child_node = self.get_mut(child)?;
        child_node.parent = None;
        // constraints cached under the old parent no longer apply
        child_node.state.cache.clear();
        log::trace!("Removed {} from {}", child, parent);
        self.mark_dirty_internal(parent);
        Ok(true)
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == candidate {
                return true;
            }
            match self.nodes[node.0].parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.get(id)?.children)
    }

    pub fn child_count(&self, id: NodeId) -> Result<usize> {
        Ok(self.get(id)?.children.len())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(id)?.parent)
    }

    pub fn style(&self, id: NodeId) -> Result<&Style> {
        Ok(&self.get(id)?.style)
    }

    /// Replaces the style. The node is only dirtied if something changed.
    pub fn set_style(&mut self, id: NodeId, style: Style) -> Result<()> {
        let node = self.get_mut(id)?;
        if node.style != style {
            node.style = style;
            self.mark_dirty_internal(id);
        }
        Ok(())
    }

    pub fn update_style<F>(&mut self, id: NodeId, update: F) -> Result<()>
    where
        F: FnOnce(&mut Style),
    {
        let mut style = self.get(id)?.style.clone();
        update(&mut style);
        self.set_style(id, style)
    }

    /// Attaches or removes the measure function of a leaf.
    pub fn set_measure_func(&mut self, id: NodeId, measure: Option<MeasureFunc>) -> Result<()> {
        let node = self.get_mut(id)?;
        if measure.is_some() && !node.children.is_empty() {
            return Err(LayoutError::MeasureFuncOnParent(id));
        }
        node.measure = measure;
        self.mark_dirty_internal(id);
        Ok(())
    }

    pub fn has_measure_func(&self, id: NodeId) -> Result<bool> {
        Ok(self.get(id)?.measure.is_some())
    }

    pub fn set_baseline_func(&mut self, id: NodeId, baseline: Option<BaselineFunc>) -> Result<()> {
        self.get_mut(id)?.baseline = baseline;
        self.mark_dirty_internal(id);
        Ok(())
    }

    /// Attaches an opaque value handed back to the node's callbacks.
    pub fn set_context<T: Any + Send + Sync>(&mut self, id: NodeId, context: T) -> Result<()> {
        self.get_mut(id)?.context = Some(Box::new(context));
        Ok(())
    }

    pub fn context(&self, id: NodeId) -> Result<Option<&dyn Any>> {
        Ok(self.get(id)?.context())
    }

    /// Forces the node and its ancestors to be recomputed on the next pass,
    /// e.g. after the content behind a measure function changed.
    pub fn mark_dirty(&mut self, id: NodeId) -> Result<()> {
        self.get(id)?;
        self.mark_dirty_internal(id);
        Ok(())
    }

    fn mark_dirty_internal(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &mut self.nodes[node_id.0];
            node.dirty = true;
            node.state.computed_flex_basis = UNDEFINED;
            current = node.parent;
        }
    }

    pub fn is_dirty(&self, id: NodeId) -> Result<bool> {
        Ok(self.get(id)?.dirty)
    }

    /// The computed box of a node from the most recent pass.
    pub fn layout(&self, id: NodeId) -> Result<&Layout> {
        Ok(&self.get(id)?.layout)
    }

    pub fn mark_layout_seen(&mut self, id: NodeId) -> Result<()> {
        self.get_mut(id)?.layout.has_new_layout = false;
        Ok(())
    }

    /// Lays out the tree rooted at `root` within the given space.
    ///
    /// Either available size may be [`UNDEFINED`] to let the root size itself
    /// to its content.
    pub fn compute_layout(
        &mut self,
        root: NodeId,
        available_width: f32,
        available_height: f32,
        direction: Direction,
    ) -> Result<()> {
        if self.get(root)?.parent.is_some() {
            return Err(LayoutError::NotRoot(root));
        }
        self.layout_root(root, available_width, available_height, direction)
    }
}
