use crate::{
    Dimension, Direction, Edge, FlexDirection, LayoutTree, MeasureFunc, MeasureInput, MeasureMode,
    NodeId, Size, Style, UNDEFINED,
};

/// Routes engine logging to the test harness when `RUST_LOG` is set.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sized(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Style {
    Style::default().with_size(width, height)
}

pub fn row(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Style {
    sized(width, height).with_flex_direction(FlexDirection::Row)
}

pub fn with_edge(mut style: Style, property: &str, edge: Edge, value: impl Into<Dimension>) -> Style {
    let edges = match property {
        "margin" => &mut style.margin,
        "padding" => &mut style.padding,
        "border" => &mut style.border,
        "position" => &mut style.position,
        other => panic!("no such edge property: {other}"),
    };
    edges.set(edge, value);
    style
}

/// Content with a fixed intrinsic size that honours the given constraints.
pub fn fixed_measure(width: f32, height: f32) -> MeasureFunc {
    Box::new(move |input: MeasureInput<'_>| input.constrain(Size::new(width, height)))
}

/// A single line of text `width` wide that wraps into more lines of
/// `line_height` when it is given less room.
pub fn wrapping_text(width: f32, line_height: f32) -> MeasureFunc {
    Box::new(move |input: MeasureInput<'_>| {
        let room = match input.width_mode {
            MeasureMode::Undefined => width,
            _ => input.width,
        };
        let line_width = width.min(room);
        let lines = if line_width > 0.0 {
            (width / line_width).ceil()
        } else {
            1.0
        };
        input.constrain(Size::new(line_width, lines * line_height))
    })
}

/// Adds a styled child at the end of `parent`.
pub fn child(tree: &mut LayoutTree, parent: NodeId, style: Style) -> NodeId {
    let id = tree.new_styled(style);
    tree.append_child(parent, id).unwrap();
    id
}

pub fn leaf(tree: &mut LayoutTree, parent: NodeId, style: Style, measure: MeasureFunc) -> NodeId {
    let id = tree.new_leaf(style, measure);
    tree.append_child(parent, id).unwrap();
    id
}

pub fn layout(tree: &mut LayoutTree, root: NodeId, direction: Direction) {
    tree.compute_layout(root, UNDEFINED, UNDEFINED, direction).unwrap();
}

/// `(left, top, width, height)` of a node.
pub fn frame(tree: &LayoutTree, id: NodeId) -> (f32, f32, f32, f32) {
    let layout = tree.layout(id).unwrap();
    (layout.left, layout.top, layout.width, layout.height)
}

#[track_caller]
pub fn assert_frame(tree: &LayoutTree, id: NodeId, expected: (f32, f32, f32, f32)) {
    assert_eq!(frame(tree, id), expected, "frame of {id}");
}
