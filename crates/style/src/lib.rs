pub mod dimension;
pub mod flex;
pub mod parsers;
pub mod style;

pub use dimension::{Dimension, Edges};
pub use flex::{
    Align, Direction, Display, FlexDirection, FlexWrap, JustifyContent, Overflow, PositionType,
};
pub use parsers::StyleParseError;
pub use style::Style;
