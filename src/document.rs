//! JSON tree documents: a serializable description of a node tree that can be
//! laid out without writing any Rust.
//!
//! ```json
//! {
//!   "config": { "pointScaleFactor": 2 },
//!   "root": {
//!     "style": { "flexDirection": "row", "width": 300, "padding": "10 20" },
//!     "children": [
//!       { "css": "flex-grow: 1; margin-right: 5" },
//!       { "measure": { "width": 120, "height": 16 } }
//!     ]
//!   }
//! }
//! ```
use crate::error::{FlexureError, Result};
use flexure_layout::{
    Direction, LayoutConfig, LayoutTree, MeasureFunc, MeasureInput, NodeId, Size, Style,
};
use flexure_style::parsers::parse_inline_css;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDocument {
    #[serde(default)]
    pub config: LayoutConfig,
    pub root: NodeSpec,
}

/// One node of a document.
///
/// Without a `style` the node starts from the tree's default style; `css`
/// declarations are applied on top of whichever base is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeSpec {
    /// Echoed back in the output so boxes can be told apart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure: Option<FixedMeasure>,
}

/// Content of a fixed intrinsic size, clamped by the constraints it is
/// measured under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedMeasure {
    pub width: f32,
    pub height: f32,
}

impl FixedMeasure {
    fn into_measure_func(self) -> MeasureFunc {
        let intrinsic = Size::new(self.width, self.height);
        Box::new(move |input: MeasureInput<'_>| input.constrain(intrinsic))
    }
}

/// The computed box of a document node, relative to its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LaidOutNode>,
}

impl LaidOutNode {
    /// Depth-first search by document id.
    pub fn find(&self, id: &str) -> Option<&LaidOutNode> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

impl TreeDocument {
    pub fn from_json(source: &str) -> Result<Self> {
        let document: TreeDocument = serde_json::from_str(source)?;
        let psf = document.config.point_scale_factor;
        if !psf.is_finite() || psf < 0.0 {
            return Err(FlexureError::Document(format!(
                "pointScaleFactor must be a non-negative number, got {psf}"
            )));
        }
        Ok(document)
    }

    /// Creates the node tree the document describes. Returns the tree and
    /// its root.
    pub fn build(&self) -> Result<(LayoutTree, NodeId)> {
        let mut tree = LayoutTree::with_config(self.config);
        let root = build_node(&mut tree, &self.root)?;
        Ok((tree, root))
    }

    /// Builds the tree, lays it out and returns the resulting boxes.
    pub fn layout(&self, width: f32, height: f32, direction: Direction) -> Result<LaidOutNode> {
        let (mut tree, root) = self.build()?;
        tree.compute_layout(root, width, height, direction)?;
        self.collect(&tree, root)
    }

    /// Reads the boxes of a tree created by [`TreeDocument::build`].
    pub fn collect(&self, tree: &LayoutTree, root: NodeId) -> Result<LaidOutNode> {
        collect_node(tree, root, &self.root)
    }
}

fn build_node(tree: &mut LayoutTree, spec: &NodeSpec) -> Result<NodeId> {
    let mut style = match &spec.style {
        Some(style) => style.clone(),
        None => tree.default_style(),
    };
    if let Some(css) = &spec.css {
        style = parse_inline_css(css, style)?;
    }

    let id = match spec.measure {
        Some(measure) => tree.new_leaf(style, measure.into_measure_func()),
        None => tree.new_styled(style),
    };
    for child in &spec.children {
        let child_id = build_node(tree, child)?;
        tree.append_child(id, child_id)?;
    }
    Ok(id)
}

fn collect_node(tree: &LayoutTree, id: NodeId, spec: &NodeSpec) -> Result<LaidOutNode> {
    let layout = tree.layout(id)?;
    let children = tree
        .children(id)?
        .iter()
        .zip(&spec.children)
        .map(|(&child, child_spec)| collect_node(tree, child, child_spec))
        .collect::<Result<Vec<_>>>()?;

    Ok(LaidOutNode {
        id: spec.id.clone(),
        left: layout.left,
        top: layout.top,
        width: layout.width,
        height: layout.height,
        children,
    })
}
