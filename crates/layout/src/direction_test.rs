use crate::direction::{
    cross_axis, leading_edge, physical_edge, resolve_direction, resolve_edge_value,
    resolve_flex_direction, trailing_edge,
};
use crate::test_utils::{assert_frame, child, layout, row, sized, with_edge};
use crate::{Dimension, Direction, Edge, Edges, FlexDirection, LayoutTree, PhysicalEdge};

#[test]
fn test_resolve_direction() {
    assert_eq!(resolve_direction(Direction::Inherit, Direction::Rtl), Direction::Rtl);
    assert_eq!(resolve_direction(Direction::Ltr, Direction::Rtl), Direction::Ltr);
    assert_eq!(resolve_direction(Direction::Inherit, Direction::Inherit), Direction::Ltr);
}

#[test]
fn test_rows_mirror_under_rtl() {
    use FlexDirection::*;
    assert_eq!(resolve_flex_direction(Row, Direction::Rtl), RowReverse);
    assert_eq!(resolve_flex_direction(RowReverse, Direction::Rtl), Row);
    assert_eq!(resolve_flex_direction(Column, Direction::Rtl), Column);
    assert_eq!(resolve_flex_direction(Row, Direction::Ltr), Row);

    assert_eq!(cross_axis(Column, Direction::Rtl), RowReverse);
    assert_eq!(cross_axis(ColumnReverse, Direction::Ltr), Row);
    assert_eq!(cross_axis(RowReverse, Direction::Rtl), Column);
}

#[test]
fn test_axis_edges() {
    assert_eq!(leading_edge(FlexDirection::Column), PhysicalEdge::Top);
    assert_eq!(trailing_edge(FlexDirection::ColumnReverse), PhysicalEdge::Top);
    assert_eq!(leading_edge(FlexDirection::RowReverse), PhysicalEdge::Right);
    assert_eq!(trailing_edge(FlexDirection::Row), PhysicalEdge::Right);
}

#[test]
fn test_logical_edges_follow_direction() {
    assert_eq!(physical_edge(Edge::Start, Direction::Ltr), Some(PhysicalEdge::Left));
    assert_eq!(physical_edge(Edge::Start, Direction::Rtl), Some(PhysicalEdge::Right));
    assert_eq!(physical_edge(Edge::End, Direction::Rtl), Some(PhysicalEdge::Left));
    assert_eq!(physical_edge(Edge::All, Direction::Ltr), None);
}

#[test]
fn test_logical_edge_beats_physical_edge() {
    let edges = Edges::new()
        .with(Edge::Left, 1.0)
        .with(Edge::Start, 2.0)
        .with(Edge::All, 3.0);
    let undefined = Dimension::Undefined;

    assert_eq!(resolve_edge_value(&edges, PhysicalEdge::Left, Direction::Ltr, undefined), Dimension::Points(2.0));
    assert_eq!(resolve_edge_value(&edges, PhysicalEdge::Left, Direction::Rtl, undefined), Dimension::Points(1.0));
    assert_eq!(resolve_edge_value(&edges, PhysicalEdge::Right, Direction::Rtl, undefined), Dimension::Points(2.0));
    assert_eq!(resolve_edge_value(&edges, PhysicalEdge::Top, Direction::Ltr, undefined), Dimension::Points(3.0));
}

#[test]
fn test_start_padding_in_rtl() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(with_edge(row(100.0, 100.0), "padding", Edge::Start, 10.0));
    let c = child(&mut tree, root, sized(10.0, 10.0));
    layout(&mut tree, root, Direction::Rtl);
    assert_frame(&tree, c, (80.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_children_inherit_direction() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(row(100.0, 100.0));
    let inherited = child(&mut tree, root, row(100.0, 50.0));
    let inner = child(&mut tree, inherited, sized(10.0, 10.0));
    layout(&mut tree, root, Direction::Rtl);

    assert_eq!(tree.layout(root).unwrap().direction, Direction::Rtl);
    assert_eq!(tree.layout(inherited).unwrap().direction, Direction::Rtl);
    assert_frame(&tree, inner, (90.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_own_direction_overrides_parent() {
    let mut tree = LayoutTree::new();
    let root = tree.new_styled(row(100.0, 100.0));
    let mut style = row(100.0, 50.0);
    style.direction = Direction::Ltr;
    let ltr = child(&mut tree, root, style);
    let inner = child(&mut tree, ltr, sized(10.0, 10.0));
    layout(&mut tree, root, Direction::Rtl);

    assert_eq!(tree.layout(ltr).unwrap().direction, Direction::Ltr);
    assert_frame(&tree, ltr, (0.0, 0.0, 100.0, 50.0));
    assert_frame(&tree, inner, (0.0, 0.0, 10.0, 10.0));
}
