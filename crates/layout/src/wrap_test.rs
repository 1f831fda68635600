use crate::test_utils::{assert_frame, child, frame, layout, row, sized};
use crate::{Align, Dimension, Direction, FlexWrap, JustifyContent, LayoutTree, NodeId, Style};

fn wrapping(mut style: Style, wrap: FlexWrap) -> Style {
    style.flex_wrap = wrap;
    style
}

/// A wrapping row holding four 30x30 boxes, three fit per line.
fn four_boxes(container: Style, direction: Direction) -> (LayoutTree, NodeId, Vec<NodeId>) {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(container);
    let boxes = (0..4).map(|_| child(&mut tree, root, sized(30.0, 30.0))).collect();
    layout(&mut tree, root, direction);
    (tree, root, boxes)
}

fn origins(tree: &LayoutTree, ids: &[NodeId]) -> Vec<(f32, f32)> {
    ids.iter()
        .map(|&id| {
            let (left, top, _, _) = frame(tree, id);
            (left, top)
        })
        .collect()
}

#[test]
fn test_wrap_row_grows_container() {
    let style = wrapping(row(100.0, Dimension::Auto), FlexWrap::Wrap);
    let (tree, root, boxes) = four_boxes(style, Direction::Ltr);

    assert_eq!(origins(&tree, &boxes), vec![(0.0, 0.0), (30.0, 0.0), (60.0, 0.0), (0.0, 30.0)]);
    assert_frame(&tree, root, (0.0, 0.0, 100.0, 60.0));
}

#[test]
fn test_wrap_row_rtl() {
    let style = wrapping(row(100.0, Dimension::Auto), FlexWrap::Wrap);
    let (tree, _, boxes) = four_boxes(style, Direction::Rtl);
    assert_eq!(origins(&tree, &boxes), vec![(70.0, 0.0), (40.0, 0.0), (10.0, 0.0), (70.0, 30.0)]);
}

#[test]
fn test_wrap_column() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(wrapping(sized(100.0, 100.0), FlexWrap::Wrap));
    let boxes: Vec<_> = (0..3).map(|_| child(&mut tree, root, sized(30.0, 40.0))).collect();
    layout(&mut tree, root, Direction::Ltr);

    assert_eq!(origins(&tree, &boxes), vec![(0.0, 0.0), (0.0, 40.0), (30.0, 0.0)]);
}

#[test]
fn test_justify_content_per_line() {
    let style = wrapping(row(100.0, Dimension::Auto), FlexWrap::Wrap)
        .with_justify_content(JustifyContent::Center);
    let (tree, _, boxes) = four_boxes(style, Direction::Ltr);
    assert_eq!(origins(&tree, &boxes), vec![(5.0, 0.0), (35.0, 0.0), (65.0, 0.0), (35.0, 30.0)]);
}

#[test]
fn test_flex_grow_per_line() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(wrapping(row(100.0, Dimension::Auto), FlexWrap::Wrap));
    let mut item = Style::default().with_size(Dimension::Auto, 10.0).with_flex_grow(1.0);
    item.flex_basis = Dimension::Points(40.0);
    let a = child(&mut tree, root, item.clone());
    let b = child(&mut tree, root, item.clone());
    let c = child(&mut tree, root, item);
    layout(&mut tree, root, Direction::Ltr);

    assert_frame(&tree, a, (0.0, 0.0, 50.0, 10.0));
    assert_frame(&tree, b, (50.0, 0.0, 50.0, 10.0));
    assert_frame(&tree, c, (0.0, 10.0, 100.0, 10.0));
    assert_frame(&tree, root, (0.0, 0.0, 100.0, 20.0));
}

#[test]
fn test_align_content_distributes_lines() {
    let cases = [
        (Align::FlexStart, [0.0, 30.0]),
        (Align::FlexEnd, [40.0, 70.0]),
        (Align::Center, [20.0, 50.0]),
        (Align::SpaceBetween, [0.0, 70.0]),
        (Align::SpaceAround, [10.0, 60.0]),
    ];
    for (align_content, tops) in cases {
        let mut style = wrapping(row(100.0, 100.0), FlexWrap::Wrap);
        style.align_content = align_content;
        let (tree, _, boxes) = four_boxes(style, Direction::Ltr);
        let found: Vec<f32> = origins(&tree, &boxes).iter().map(|o| o.1).collect();
        assert_eq!(found, vec![tops[0], tops[0], tops[0], tops[1]], "{align_content:?}");
    }
}

#[test]
fn test_align_content_stretch_grows_lines() {
    let mut tree = LayoutTree::new();
    let mut style = wrapping(row(100.0, 100.0), FlexWrap::Wrap);
    style.align_content = Align::Stretch;
    let root = tree.new_styled(style);
    let boxes: Vec<_> = (0..4)
        .map(|_| child(&mut tree, root, Style::default().with_size(30.0, Dimension::Auto)))
        .collect();
    layout(&mut tree, root, Direction::Ltr);

    assert_frame(&tree, boxes[0], (0.0, 0.0, 30.0, 50.0));
    assert_frame(&tree, boxes[2], (60.0, 0.0, 30.0, 50.0));
    assert_frame(&tree, boxes[3], (0.0, 50.0, 30.0, 50.0));
}

#[test]
fn test_wrap_reverse_stacks_from_cross_end() {
    let style = wrapping(row(100.0, 100.0), FlexWrap::WrapReverse);
    let (tree, _, boxes) = four_boxes(style, Direction::Ltr);
    assert_eq!(origins(&tree, &boxes), vec![(0.0, 70.0), (30.0, 70.0), (60.0, 70.0), (0.0, 40.0)]);
}

#[test]
fn test_no_wrap_keeps_single_line() {
    let style = wrapping(row(100.0, 100.0), FlexWrap::NoWrap);
    let (tree, _, boxes) = four_boxes(style, Direction::Ltr);
    assert_eq!(origins(&tree, &boxes)[3], (90.0, 0.0));
}
