//! The contract between the engine and caller-supplied content providers.
use flexure_types::{MeasureMode, Size};
use std::any::Any;

/// Constraints handed to a measure function.
///
/// `width`/`height` are the content-box space available on each axis; their
/// meaning depends on the matching mode. Under [`MeasureMode::Undefined`] the
/// value is the undefined sentinel and the intrinsic size is wanted.
#[derive(Clone, Copy)]
pub struct MeasureInput<'a> {
    /// The opaque value attached with `LayoutTree::set_context`.
    pub context: Option<&'a dyn Any>,
    pub width: f32,
    pub width_mode: MeasureMode,
    pub height: f32,
    pub height_mode: MeasureMode,
}

impl<'a> MeasureInput<'a> {
    /// Downcasts the attached context.
    pub fn context<T: Any>(&self) -> Option<&'a T> {
        self.context.and_then(|c| c.downcast_ref::<T>())
    }

    /// Clamps an intrinsic size to these constraints: exact axes take the
    /// given value, at-most axes are capped by it.
    pub fn constrain(&self, intrinsic: Size) -> Size {
        Size::new(
            constrain_axis(intrinsic.width, self.width, self.width_mode),
            constrain_axis(intrinsic.height, self.height, self.height_mode),
        )
    }
}

fn constrain_axis(intrinsic: f32, available: f32, mode: MeasureMode) -> f32 {
    match mode {
        MeasureMode::Exactly => available,
        MeasureMode::AtMost => intrinsic.min(available),
        MeasureMode::Undefined => intrinsic,
    }
}

/// Computes the content size of a leaf.
///
/// Must be a pure function of its input: it may be called zero, one or two
/// times per pass depending on cache hits. Returned sizes must be
/// non-negative.
pub type MeasureFunc = Box<dyn Fn(MeasureInput<'_>) -> Size + Send + Sync>;

/// Returns the distance from the top of a node to its first baseline, given
/// the node's context and its laid-out width and height.
pub type BaselineFunc = Box<dyn Fn(Option<&dyn Any>, f32, f32) -> f32 + Send + Sync>;

pub(crate) fn is_valid_measurement(size: Size) -> bool {
    size.width >= 0.0 && size.height >= 0.0
}
