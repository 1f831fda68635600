#![allow(dead_code)]

pub mod fixtures;

use flexure::{Direction, LaidOutNode, TreeDocument};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a `json!` document and lays it out.
pub fn layout_json(
    document: &Value,
    width: f32,
    height: f32,
    direction: Direction,
) -> flexure::Result<LaidOutNode> {
    let document = TreeDocument::from_json(&document.to_string())?;
    document.layout(width, height, direction)
}

/// `(left, top, width, height)` of a laid-out node.
pub fn frame(node: &LaidOutNode) -> (f32, f32, f32, f32) {
    (node.left, node.top, node.width, node.height)
}

/// Looks a node up by document id, failing the test if it is missing.
#[track_caller]
pub fn by_id<'a>(root: &'a LaidOutNode, id: &str) -> &'a LaidOutNode {
    match root.find(id) {
        Some(node) => node,
        None => panic!("no node with id {id:?} in the output"),
    }
}

#[track_caller]
pub fn assert_frame(node: &LaidOutNode, expected: (f32, f32, f32, f32)) {
    assert_eq!(frame(node), expected, "frame of {:?}", node.id);
}
