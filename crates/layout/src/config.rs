use serde::{Deserialize, Serialize};

/// Caller-owned knobs read by the layout engine. The engine never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Number of physical pixels per layout point, used as the rounding grid.
    ///
    /// - **1.0** (default): edges snap to whole points.
    /// - **2.0, 3.0**: edges snap to half or third points, for dense displays.
    /// - **0.0**: rounding is disabled and the public layout carries raw floats.
    pub point_scale_factor: f32,

    /// New nodes start from [`flexure_style::Style::web_defaults`] instead of
    /// [`flexure_style::Style::default`].
    pub use_web_defaults: bool,

    pub experimental: ExperimentalFeatures,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            point_scale_factor: 1.0,
            use_web_defaults: false,
            experimental: ExperimentalFeatures::default(),
        }
    }
}

impl LayoutConfig {
    pub fn rounding_enabled(&self) -> bool {
        self.point_scale_factor != 0.0
    }
}

/// Toggles for alternate algorithm branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperimentalFeatures {
    /// Recompute an explicit flex basis once per pass instead of keeping the
    /// value computed in an earlier pass.
    pub web_flex_basis: bool,
    /// Never round the size of a measured leaf down, so measured text is not
    /// clipped by the pixel grid.
    pub text_rounding: bool,
}

impl Default for ExperimentalFeatures {
    fn default() -> Self {
        Self {
            web_flex_basis: false,
            text_rounding: true,
        }
    }
}
