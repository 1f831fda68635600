use serde::{Deserialize, Serialize};

/// How an available size constrains a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureMode {
    /// No constraint; report the intrinsic size.
    #[default]
    Undefined,
    /// The result must be exactly the given size.
    Exactly,
    /// Report the intrinsic size, but never more than the given size.
    AtMost,
}
