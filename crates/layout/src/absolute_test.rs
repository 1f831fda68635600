use crate::test_utils::{assert_frame, child, fixed_measure, layout, row, sized, with_edge};
use crate::{Align, Dimension, Direction, Edge, JustifyContent, LayoutTree, PositionType, Style};

fn absolute(mut style: Style) -> Style {
    style.position_type = PositionType::Absolute;
    style
}

fn inset(mut style: Style, edges: &[(Edge, f32)]) -> Style {
    for &(edge, value) in edges {
        style.position.set(edge, value);
    }
    style
}

#[test]
fn test_absolute_leading_insets() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(sized(100.0, 100.0));
    let c = child(&mut tree, root, inset(absolute(sized(10.0, 10.0)), &[(Edge::Left, 10.0), (Edge::Top, 10.0)]));
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, c, (10.0, 10.0, 10.0, 10.0));
}

#[test]
fn test_absolute_trailing_insets() {
    for direction in [Direction::Ltr, Direction::Rtl] {
        let mut tree = LayoutTree::new();
        let root = tree.new_styled(sized(100.0, 100.0));
        let style = inset(absolute(sized(10.0, 10.0)), &[(Edge::Right, 10.0), (Edge::Bottom, 10.0)]);
        let c = child(&mut tree, root, style);
        layout(&mut tree, root, direction);
        assert_frame(&tree, c, (80.0, 80.0, 10.0, 10.0));
    }
}

#[test]
fn test_absolute_stretched_between_insets() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(sized(100.0, 100.0));
    let mut style = absolute(Style::default());
    style.position.set(Edge::All, 10.0);
    let c = child(&mut tree, root, style);
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, c, (10.0, 10.0, 80.0, 80.0));
}

#[test]
fn test_absolute_follows_justify_and_align() {
    let mut tree = LayoutTree::new();
    let mut style = row(100.0, 100.0).with_justify_content(JustifyContent::Center);
    style.align_items = Align::Center;
    let root = tree.new_styled(style);
    let c = child(&mut tree, root, absolute(sized(20.0, 20.0)));
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, c, (40.0, 40.0, 20.0, 20.0));
}

#[test]
fn test_absolute_flex_end_in_column() {
    let mut tree = LayoutTree::new();
    let mut style = sized(100.0, 100.0).with_justify_content(JustifyContent::FlexEnd);
    style.align_items = Align::FlexEnd;
    let root = tree.new_styled(style);
    let c = child(&mut tree, root, absolute(sized(20.0, 30.0)));
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, c, (80.0, 70.0, 20.0, 30.0));
}

#[test]
fn test_absolute_content_sized_inside_border() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(with_edge(sized(100.0, 100.0), "border", Edge::All, 5.0));
    let c = tree.new_leaf(absolute(Style::default()), fixed_measure(30.0, 10.0));
    tree.append_child(root, c).unwrap();
    layout(&mut tree, root, Direction::Ltr);

    assert_frame(&tree, c, (5.0, 5.0, 30.0, 10.0));
    assert_eq!(tree.stats().measure_calls, 1);
}

#[test]
fn test_absolute_does_not_take_flow_space() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(row(100.0, 100.0));
    child(&mut tree, root, absolute(sized(50.0, 50.0)));
    let flow = child(&mut tree, root, sized(10.0, 10.0));
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, flow, (0.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_absolute_trailing_inset_with_margin() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(sized(100.0, 100.0));
    let style = inset(absolute(sized(10.0, 10.0)), &[(Edge::Right, 5.0)]);
    let c = child(&mut tree, root, with_edge(style, "margin", Edge::Right, 5.0));
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, c, (80.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_absolute_percentage_size_uses_container() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(sized(200.0, 100.0));
    let c = child(&mut tree, root, absolute(sized(Dimension::Percent(50.0), Dimension::Percent(50.0))));
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, c, (0.0, 0.0, 100.0, 50.0));
}
