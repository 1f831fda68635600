use crate::edge::PhysicalEdge;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Resolved per-side thickness in physical terms (margin, border or padding).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn get(&self, edge: PhysicalEdge) -> f32 {
        match edge {
            PhysicalEdge::Left => self.left,
            PhysicalEdge::Top => self.top,
            PhysicalEdge::Right => self.right,
            PhysicalEdge::Bottom => self.bottom,
        }
    }

    pub fn set(&mut self, edge: PhysicalEdge, value: f32) {
        match edge {
            PhysicalEdge::Left => self.left = value,
            PhysicalEdge::Top => self.top = value,
            PhysicalEdge::Right => self.right = value,
            PhysicalEdge::Bottom => self.bottom = value,
        }
    }
}

