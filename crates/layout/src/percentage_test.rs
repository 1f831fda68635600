use crate::test_utils::{assert_frame, child, layout, row, sized, with_edge};
use crate::{Dimension, Direction, Edge, LayoutTree, PositionType, Style};

fn pct(value: f32) -> Dimension {
    Dimension::Percent(value)
}

#[test]
fn test_percentage_width_height() {
    for (direction, left) in [(Direction::Ltr, 0.0), (Direction::Rtl, 140.0)] {
        let mut tree = LayoutTree::new();
        let root = tree.new_styled(row(200.0, 200.0));
        let c = child(&mut tree, root, sized(pct(30.0), pct(30.0)));
        layout(&mut tree, root, direction);
        assert_frame(&tree, c, (left, 0.0, 60.0, 60.0));
    }
}

#[test]
fn test_percentage_position_left_top() {
    for (direction, left) in [(Direction::Ltr, 40.0), (Direction::Rtl, 260.0)] {
        let mut tree = LayoutTree::new();
        let root = tree.new_styled(row(400.0, 400.0));
        let mut style = sized(pct(45.0), pct(55.0));
        style.position.set(Edge::Left, pct(10.0));
        style.position.set(Edge::Top, pct(20.0));
        let c = child(&mut tree, root, style);
        layout(&mut tree, root, direction);
        assert_frame(&tree, c, (left, 80.0, 180.0, 220.0));
    }
}

#[test]
fn test_percentage_position_bottom_right() {
    for (direction, left) in [(Direction::Ltr, -100.0), (Direction::Rtl, 125.0)] {
        let mut tree = LayoutTree::new();
        let root = tree.new_styled(row(500.0, 500.0));
        let mut style = sized(pct(55.0), pct(15.0));
        style.position.set(Edge::Right, pct(20.0));
        style.position.set(Edge::Bottom, pct(10.0));
        let c = child(&mut tree, root, style);
        layout(&mut tree, root, direction);
        assert_frame(&tree, c, (left, -50.0, 275.0, 75.0));
    }
}

#[test]
fn test_percentage_flex_basis_main_axis() {
    for (direction, lefts) in [(Direction::Ltr, [0.0, 125.0]), (Direction::Rtl, [75.0, 0.0])] {
        let mut tree = LayoutTree::new();
        let root = tree.new_styled(row(200.0, 200.0));
        let mut first = Style::default().with_flex_grow(1.0);
        first.flex_basis = pct(50.0);
        let mut second = Style::default().with_flex_grow(1.0);
        second.flex_basis = pct(25.0);
        let a = child(&mut tree, root, first);
        let b = child(&mut tree, root, second);
        layout(&mut tree, root, direction);
        assert_frame(&tree, a, (lefts[0], 0.0, 125.0, 200.0));
        assert_frame(&tree, b, (lefts[1], 0.0, 75.0, 200.0));
    }
}

#[test]
fn test_percentage_flex_basis_cross_axis() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(sized(200.0, 200.0));
    let mut first = Style::default().with_flex_grow(1.0);
    first.flex_basis = pct(50.0);
    let mut second = Style::default().with_flex_grow(1.0);
    second.flex_basis = pct(25.0);
    let a = child(&mut tree, root, first);
    let b = child(&mut tree, root, second);
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, a, (0.0, 0.0, 200.0, 125.0));
    assert_frame(&tree, b, (0.0, 125.0, 200.0, 75.0));
}

#[test]
fn test_percentage_min_height_clamps_basis() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(sized(200.0, 200.0));
    let mut first = Style::default().with_flex_grow(1.0);
    first.min_height = pct(60.0);
    let mut second = Style::default().with_flex_grow(2.0);
    second.min_height = pct(10.0);
    let a = child(&mut tree, root, first);
    let b = child(&mut tree, root, second);
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, a, (0.0, 0.0, 200.0, 140.0));
    assert_frame(&tree, b, (0.0, 140.0, 200.0, 60.0));
}

#[test]
fn test_percentage_padding_uses_parent_width() {
    for (direction, left) in [(Direction::Ltr, 20.0), (Direction::Rtl, 170.0)] {
        let mut tree = LayoutTree::new();
        let root = tree.new_styled(sized(200.0, 100.0));
        let padded = child(
            &mut tree,
            root,
            with_edge(Style::default().with_flex_grow(1.0), "padding", Edge::All, pct(10.0)),
        );
        let inner = child(&mut tree, padded, sized(10.0, 10.0));
        layout(&mut tree, root, direction);
        assert_frame(&tree, padded, (0.0, 0.0, 200.0, 100.0));
        assert_frame(&tree, inner, (left, 20.0, 10.0, 10.0));
    }
}

#[test]
fn test_percentage_absolute_position() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(row(200.0, 100.0));
    let mut style = sized(10.0, 10.0);
    style.position_type = PositionType::Absolute;
    style.position.set(Edge::Left, pct(30.0));
    style.position.set(Edge::Top, pct(10.0));
    let c = child(&mut tree, root, style);
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, c, (60.0, 10.0, 10.0, 10.0));
}

#[test]
fn test_percentage_of_undefined_parent_is_zero() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(Style::default());
    let c = child(&mut tree, root, sized(pct(50.0), pct(50.0)));
    layout(&mut tree, root, Direction::Ltr);
    assert_frame(&tree, root, (0.0, 0.0, 0.0, 0.0));
    assert_frame(&tree, c, (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn test_percentage_within_flex_grow() {
    for (direction, lefts) in [(Direction::Ltr, [0.0, 100.0, 250.0]), (Direction::Rtl, [250.0, 100.0, 0.0])] {
        let mut tree = LayoutTree::new();
        let root = tree.new_styled(row(350.0, 100.0));
        let a = child(&mut tree, root, Style::default().with_size(100.0, Dimension::Auto));
        let b = child(&mut tree, root, Style::default().with_flex_grow(1.0));
        let inner = child(&mut tree, b, Style::default().with_size(pct(100.0), Dimension::Auto));
        let c = child(&mut tree, root, Style::default().with_size(100.0, Dimension::Auto));
        layout(&mut tree, root, direction);

        assert_frame(&tree, a, (lefts[0], 0.0, 100.0, 100.0));
        assert_frame(&tree, b, (lefts[1], 0.0, 150.0, 100.0));
        assert_frame(&tree, inner, (0.0, 0.0, 150.0, 0.0));
        assert_frame(&tree, c, (lefts[2], 0.0, 100.0, 100.0));
    }
}
