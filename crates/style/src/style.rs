use crate::dimension::{Dimension, Edges};
use crate::flex::{
    Align, Direction, Display, FlexDirection, FlexWrap, JustifyContent, Overflow, PositionType,
};
use serde::{Deserialize, Serialize};

/// The full set of layout-relevant properties of one node.
///
/// The engine only ever reads a `Style`; mutation happens through the tree so
/// that dirtiness is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_content: Align,
    pub align_items: Align,
    pub align_self: Align,
    pub position_type: PositionType,
    pub flex_wrap: FlexWrap,
    pub overflow: Overflow,
    pub display: Display,
    /// Non-positive values mean "does not grow".
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Dimension,
    pub margin: Edges,
    pub position: Edges,
    pub padding: Edges,
    pub border: Edges,
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            align_content: Align::FlexStart,
            align_items: Align::Stretch,
            align_self: Align::Auto,
            position_type: PositionType::Relative,
            flex_wrap: FlexWrap::NoWrap,
            overflow: Overflow::Visible,
            display: Display::Flex,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            flex_basis: Dimension::Auto,
            margin: Edges::default(),
            position: Edges::default(),
            padding: Edges::default(),
            border: Edges::default(),
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Undefined,
            min_height: Dimension::Undefined,
            max_width: Dimension::Undefined,
            max_height: Dimension::Undefined,
        }
    }
}

impl Style {
    /// Defaults matching browser flexbox: row direction, shrinkable items and
    /// stretched lines.
    pub fn web_defaults() -> Self {
        Self {
            flex_direction: FlexDirection::Row,
            flex_shrink: 1.0,
            align_content: Align::Stretch,
            ..Self::default()
        }
    }

    /// Style dimension along an axis: width for horizontal, height otherwise.
    pub fn dimension(&self, horizontal: bool) -> Dimension {
        if horizontal { self.width } else { self.height }
    }

    pub fn min_dimension(&self, horizontal: bool) -> Dimension {
        if horizontal {
            self.min_width
        } else {
            self.min_height
        }
    }

    pub fn max_dimension(&self, horizontal: bool) -> Dimension {
        if horizontal {
            self.max_width
        } else {
            self.max_height
        }
    }

    /// Fluent helpers used by tree builders and tests.
    pub fn with_size(mut self, width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn with_flex_direction(mut self, flex_direction: FlexDirection) -> Self {
        self.flex_direction = flex_direction;
        self
    }

    pub fn with_justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.justify_content = justify_content;
        self
    }

    pub fn with_flex_grow(mut self, flex_grow: f32) -> Self {
        self.flex_grow = flex_grow;
        self
    }

    pub fn with_flex_shrink(mut self, flex_shrink: f32) -> Self {
        self.flex_shrink = flex_shrink;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_defaults_differ_only_in_flex_properties() {
        let web = Style::web_defaults();
        let plain = Style::default();
        assert_eq!(web.flex_direction, FlexDirection::Row);
        assert_eq!(web.flex_shrink, 1.0);
        assert_eq!(web.align_content, Align::Stretch);
        assert_eq!(web.width, plain.width);
        assert_eq!(web.align_items, plain.align_items);
    }

    #[test]
    fn test_deserialize_partial_style() {
        let style: Style = serde_json::from_str(
            r#"{"flexDirection": "row-reverse", "width": "50%", "margin": {"start": 10}, "flexGrow": 1}"#,
        )
        .unwrap();
        assert_eq!(style.flex_direction, FlexDirection::RowReverse);
        assert_eq!(style.width, Dimension::Percent(50.0));
        assert_eq!(style.margin.get(flexure_types::Edge::Start), Dimension::Points(10.0));
        assert_eq!(style.flex_grow, 1.0);
        assert_eq!(style.height, Dimension::Auto);
    }
}
