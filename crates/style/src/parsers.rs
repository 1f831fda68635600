//! Low-level nom parser functions for CSS-like style values.
//!
//! Lengths, dimensions and edge shorthands are parsed here, along with a
//! property dispatcher that applies `name: value` declarations to a [`Style`].

use crate::dimension::{Dimension, Edges};
use crate::flex::{
    Align, Direction, Display, FlexDirection, FlexWrap, JustifyContent, Overflow, PositionType,
};
use crate::style::Style;
use flexure_types::Edge;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space1};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::terminated;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Unknown style property '{0}'")]
    UnknownProperty(String),
}

// --- Number & Unit Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")), // one layout point per pixel
    ))
    .parse(input)
}

/// Parses a length in points with an optional `pt`/`px` suffix (e.g. "12", "12px").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, number) = parse_f32(input)?;
    let (input, unit) = opt(parse_unit).parse(input)?;
    Ok((input, number * unit.unwrap_or(1.0)))
}

/// Parses a dimension: a length, a percentage, `auto` or `undefined`.
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        value(Dimension::Auto, tag_no_case("auto")),
        value(Dimension::Undefined, tag_no_case("undefined")),
        map(terminated(parse_f32, char('%')), Dimension::Percent),
        map(parse_length, Dimension::Points),
    ))
    .parse(input)
}

/// Runs a parser over the whole (trimmed) input, rejecting leftovers.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Parses a CSS-like shorthand of one to four dimensions.
///
/// One value sets `all`; two set `vertical` and `horizontal`; three set
/// `top`, `horizontal` and `bottom`; four set top, right, bottom and left.
pub fn parse_edges_shorthand(input: &str) -> Result<Edges, StyleParseError> {
    let parts = run_parser(
        |i| separated_list1(space1, parse_dimension).parse(i),
        input,
    )?;

    let edges = Edges::new();
    match parts.as_slice() {
        [all] => Ok(edges.with(Edge::All, *all)),
        [vertical, horizontal] => Ok(edges
            .with(Edge::Vertical, *vertical)
            .with(Edge::Horizontal, *horizontal)),
        [top, horizontal, bottom] => Ok(edges
            .with(Edge::Top, *top)
            .with(Edge::Horizontal, *horizontal)
            .with(Edge::Bottom, *bottom)),
        [top, right, bottom, left] => Ok(edges
            .with(Edge::Top, *top)
            .with(Edge::Right, *right)
            .with(Edge::Bottom, *bottom)
            .with(Edge::Left, *left)),
        _ => Err(StyleParseError::Parse(format!(
            "Invalid number of values for edge shorthand: got {}, expected 1 to 4.",
            parts.len()
        ))),
    }
}

// --- Keyword Parsers ---

fn keyword<T: Copy>(property: &str, value: &str, table: &[(&str, T)]) -> Result<T, StyleParseError> {
    let lowered = value.trim().to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, v)| *v)
        .ok_or_else(|| StyleParseError::InvalidValue {
            property: property.to_string(),
            value: value.to_string(),
        })
}

pub fn parse_direction(s: &str) -> Result<Direction, StyleParseError> {
    keyword(
        "direction",
        s,
        &[
            ("inherit", Direction::Inherit),
            ("ltr", Direction::Ltr),
            ("rtl", Direction::Rtl),
        ],
    )
}

pub fn parse_flex_direction(s: &str) -> Result<FlexDirection, StyleParseError> {
    keyword(
        "flex-direction",
        s,
        &[
            ("row", FlexDirection::Row),
            ("row-reverse", FlexDirection::RowReverse),
            ("column", FlexDirection::Column),
            ("column-reverse", FlexDirection::ColumnReverse),
        ],
    )
}

pub fn parse_flex_wrap(s: &str) -> Result<FlexWrap, StyleParseError> {
    keyword(
        "flex-wrap",
        s,
        &[
            ("nowrap", FlexWrap::NoWrap),
            ("no-wrap", FlexWrap::NoWrap),
            ("wrap", FlexWrap::Wrap),
            ("wrap-reverse", FlexWrap::WrapReverse),
        ],
    )
}

pub fn parse_justify_content(s: &str) -> Result<JustifyContent, StyleParseError> {
    keyword(
        "justify-content",
        s,
        &[
            ("flex-start", JustifyContent::FlexStart),
            ("center", JustifyContent::Center),
            ("flex-end", JustifyContent::FlexEnd),
            ("space-between", JustifyContent::SpaceBetween),
            ("space-around", JustifyContent::SpaceAround),
            ("space-evenly", JustifyContent::SpaceEvenly),
        ],
    )
}

/// Parses an `align-*` keyword. `property` is only used for error messages.
pub fn parse_align(property: &str, s: &str) -> Result<Align, StyleParseError> {
    keyword(
        property,
        s,
        &[
            ("auto", Align::Auto),
            ("flex-start", Align::FlexStart),
            ("center", Align::Center),
            ("flex-end", Align::FlexEnd),
            ("stretch", Align::Stretch),
            ("baseline", Align::Baseline),
            ("space-between", Align::SpaceBetween),
            ("space-around", Align::SpaceAround),
        ],
    )
}

fn edge_from_suffix(suffix: &str) -> Option<Edge> {
    let edge = match suffix {
        "left" => Edge::Left,
        "top" => Edge::Top,
        "right" => Edge::Right,
        "bottom" => Edge::Bottom,
        "start" => Edge::Start,
        "end" => Edge::End,
        "horizontal" => Edge::Horizontal,
        "vertical" => Edge::Vertical,
        _ => return None,
    };
    Some(edge)
}

/// Applies a single `name: value` declaration to a style.
pub fn apply_style_property(
    style: &mut Style,
    attr_name: &str,
    value: &str,
) -> Result<(), StyleParseError> {
    match attr_name {
        "direction" => style.direction = parse_direction(value)?,
        "flex-direction" => style.flex_direction = parse_flex_direction(value)?,
        "flex-wrap" => style.flex_wrap = parse_flex_wrap(value)?,
        "justify-content" => style.justify_content = parse_justify_content(value)?,
        "align-items" => style.align_items = parse_align(attr_name, value)?,
        "align-self" => style.align_self = parse_align(attr_name, value)?,
        "align-content" => style.align_content = parse_align(attr_name, value)?,
        "position" => {
            style.position_type = keyword(
                attr_name,
                value,
                &[
                    ("relative", PositionType::Relative),
                    ("absolute", PositionType::Absolute),
                ],
            )?
        }
        "display" => {
            style.display = keyword(
                attr_name,
                value,
                &[("flex", Display::Flex), ("none", Display::None)],
            )?
        }
        "overflow" => {
            style.overflow = keyword(
                attr_name,
                value,
                &[
                    ("visible", Overflow::Visible),
                    ("hidden", Overflow::Hidden),
                    ("scroll", Overflow::Scroll),
                ],
            )?
        }
        "flex-grow" => style.flex_grow = run_parser(parse_f32, value)?,
        "flex-shrink" => style.flex_shrink = run_parser(parse_f32, value)?,
        "flex-basis" => style.flex_basis = run_parser(parse_dimension, value)?,
        "width" => style.width = run_parser(parse_dimension, value)?,
        "height" => style.height = run_parser(parse_dimension, value)?,
        "min-width" => style.min_width = run_parser(parse_dimension, value)?,
        "min-height" => style.min_height = run_parser(parse_dimension, value)?,
        "max-width" => style.max_width = run_parser(parse_dimension, value)?,
        "max-height" => style.max_height = run_parser(parse_dimension, value)?,
        "margin" => style.margin = parse_edges_shorthand(value)?,
        "padding" => style.padding = parse_edges_shorthand(value)?,
        "border-width" => style.border = parse_edges_shorthand(value)?,
        other => {
            let dimension = || run_parser(parse_dimension, value);
            if let Some(edge) = edge_from_suffix(other) {
                style.position.set(edge, dimension()?);
            } else if let Some(edge) = other.strip_prefix("margin-").and_then(edge_from_suffix) {
                style.margin.set(edge, dimension()?);
            } else if let Some(edge) = other.strip_prefix("padding-").and_then(edge_from_suffix) {
                style.padding.set(edge, dimension()?);
            } else if let Some(edge) = other
                .strip_prefix("border-")
                .and_then(|rest| rest.strip_suffix("-width"))
                .and_then(edge_from_suffix)
            {
                style.border.set(edge, dimension()?);
            } else {
                return Err(StyleParseError::UnknownProperty(other.to_string()));
            }
        }
    }
    Ok(())
}

/// Applies every declaration of an inline `name: value; ...` string on top of `base`.
pub fn parse_inline_css(css: &str, base: Style) -> Result<Style, StyleParseError> {
    let mut style = base;
    for declaration in css.split(';') {
        if let Some((key, value)) = declaration.split_once(':') {
            apply_style_property(&mut style, key.trim(), value.trim())?;
        }
    }
    Ok(style)
}
