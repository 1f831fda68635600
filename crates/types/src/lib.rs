pub mod edge;
pub mod geometry;
pub mod measure;
pub mod number;

pub use edge::{Edge, PhysicalEdge};
pub use geometry::{Insets, Size};
pub use measure::MeasureMode;
pub use number::{UNDEFINED, float_max, float_min, floats_equal, is_defined, is_undefined};
