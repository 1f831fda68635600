use flexure::{
    Align, Dimension, Edge, FixedMeasure, FlexDirection, FlexWrap, JustifyContent, LayoutConfig,
    NodeSpec, Style, TreeDocument,
};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde_json::{Value, json};

/// A document with an unconfigured tree.
pub fn document(root: Value) -> Value {
    json!({ "root": root })
}

/// A sized box with an id and optional inline declarations.
pub fn sized_box(id: &str, width: f32, height: f32) -> Value {
    json!({ "id": id, "style": { "width": width, "height": height } })
}

/// A content leaf of fixed intrinsic size.
pub fn text(id: &str, width: f32, height: f32) -> Value {
    json!({ "id": id, "measure": { "width": width, "height": height } })
}

/// The 102x102 row with three 10x10 children used by the justify scenarios.
pub fn justify_row(justify: &str) -> Value {
    document(json!({
        "id": "root",
        "style": {
            "flexDirection": "row",
            "justifyContent": justify,
            "width": 102,
            "height": 102
        },
        "children": [
            sized_box("a", 10.0, 10.0),
            sized_box("b", 10.0, 10.0),
            sized_box("c", 10.0, 10.0)
        ]
    }))
}

const DIRECTIONS: [FlexDirection; 4] = [
    FlexDirection::Row,
    FlexDirection::Column,
    FlexDirection::RowReverse,
    FlexDirection::ColumnReverse,
];

const JUSTIFY: [JustifyContent; 6] = [
    JustifyContent::FlexStart,
    JustifyContent::Center,
    JustifyContent::FlexEnd,
    JustifyContent::SpaceBetween,
    JustifyContent::SpaceAround,
    JustifyContent::SpaceEvenly,
];

const ALIGN: [Align; 5] = [
    Align::FlexStart,
    Align::Center,
    Align::FlexEnd,
    Align::Stretch,
    Align::Baseline,
];

fn random_dimension(rng: &mut StdRng) -> Dimension {
    match rng.random_range(0..4) {
        0 => Dimension::Points(rng.random_range(0..120) as f32),
        1 => Dimension::Percent(rng.random_range(10..=100) as f32),
        _ => Dimension::Auto,
    }
}

fn random_style(rng: &mut StdRng) -> Style {
    let mut style = Style::default();
    style.flex_direction = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
    style.justify_content = JUSTIFY[rng.random_range(0..JUSTIFY.len())];
    style.align_items = ALIGN[rng.random_range(0..ALIGN.len())];
    if rng.random_bool(0.2) {
        style.flex_wrap = FlexWrap::Wrap;
    }
    if rng.random_bool(0.4) {
        style.flex_grow = rng.random_range(1..4) as f32;
    }
    if rng.random_bool(0.3) {
        style.flex_shrink = 1.0;
    }
    style.width = random_dimension(rng);
    style.height = random_dimension(rng);
    if rng.random_bool(0.25) {
        style.flex_basis = random_dimension(rng);
    }
    if rng.random_bool(0.3) {
        style.padding.set(Edge::All, random_edge(rng));
    }
    if rng.random_bool(0.3) {
        style.margin.set(Edge::Start, random_edge(rng));
    }
    if rng.random_bool(0.15) {
        style.min_width = Dimension::Percent(rng.random_range(5..40) as f32);
    }
    if rng.random_bool(0.15) {
        style.max_height = Dimension::Percent(rng.random_range(50..=100) as f32);
    }
    style
}

fn random_edge(rng: &mut StdRng) -> Dimension {
    if rng.random_bool(0.5) {
        Dimension::Percent(rng.random_range(1..10) as f32)
    } else {
        Dimension::Points(rng.random_range(0..10) as f32)
    }
}

fn random_node(rng: &mut StdRng, depth: usize) -> NodeSpec {
    let style = random_style(rng);
    if depth == 0 || rng.random_bool(0.3) {
        let measure = FixedMeasure {
            width: rng.random_range(1..150) as f32,
            height: rng.random_range(1..40) as f32,
        };
        return NodeSpec {
            style: Some(style),
            measure: Some(measure),
            ..NodeSpec::default()
        };
    }

    let count = rng.random_range(1..5);
    NodeSpec {
        style: Some(style),
        children: (0..count).map(|_| random_node(rng, depth - 1)).collect(),
        ..NodeSpec::default()
    }
}

/// A reproducible random tree of up to four levels.
pub fn random_document(seed: u64, config: LayoutConfig) -> TreeDocument {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut root = random_node(&mut rng, 3);
    if root.measure.is_some() {
        root = NodeSpec {
            children: vec![root],
            ..NodeSpec::default()
        };
    }
    TreeDocument { config, root }
}
