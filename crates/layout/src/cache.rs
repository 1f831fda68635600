//! Per-node memo of recent (constraints -> size) results.
use crate::rounding::round_value_to_pixel_grid;
use flexure_types::{MeasureMode, floats_equal};

/// One remembered call: the constraints a node was laid out under and the
/// border-box size it produced.
///
/// `parent_width`/`parent_height` are the percentage reference sizes, kept
/// undefined for nodes whose own box values carry no percentages.
#[derive(Debug, Clone, Copy)]
pub struct CacheEntry {
    pub available_width: f32,
    pub width_mode: MeasureMode,
    pub available_height: f32,
    pub height_mode: MeasureMode,
    pub parent_width: f32,
    pub parent_height: f32,
    pub computed_width: f32,
    pub computed_height: f32,
}

/// The constraints of a lookup, plus the margins that were folded into them.
#[derive(Debug, Clone, Copy)]
pub struct CacheQuery {
    pub available_width: f32,
    pub width_mode: MeasureMode,
    pub available_height: f32,
    pub height_mode: MeasureMode,
    pub parent_width: f32,
    pub parent_height: f32,
    pub margin_row: f32,
    pub margin_column: f32,
}

impl PartialEq for CacheEntry {
    fn eq(&self, other: &Self) -> bool {
        self.width_mode == other.width_mode
            && self.height_mode == other.height_mode
            && floats_equal(self.available_width, other.available_width)
            && floats_equal(self.available_height, other.available_height)
            && floats_equal(self.parent_width, other.parent_width)
            && floats_equal(self.parent_height, other.parent_height)
            && floats_equal(self.computed_width, other.computed_width)
            && floats_equal(self.computed_height, other.computed_height)
    }
}

/// Two slots: the constraints of the last full layout, and the most recent
/// measure-only request.
#[derive(Debug, Clone, Default)]
pub struct MeasurementCache {
    layout: Option<CacheEntry>,
    measurement: Option<CacheEntry>,
}

impl MeasurementCache {
    pub fn clear(&mut self) {
        self.layout = None;
        self.measurement = None;
    }

    pub fn store(&mut self, entry: CacheEntry, perform_layout: bool) {
        if perform_layout {
            self.layout = Some(entry);
        } else {
            self.measurement = Some(entry);
        }
    }

    /// Looks up a result for a leaf with a measure function.
    ///
    /// Leaf content only depends on the constraints, so any slot may answer
    /// and compatible (not just identical) constraints qualify.
    pub fn get_for_leaf(&self, query: &CacheQuery, point_scale_factor: f32) -> Option<CacheEntry> {
        [self.layout, self.measurement]
            .into_iter()
            .flatten()
            .find(|entry| can_use_cached_measurement(query, entry, point_scale_factor))
    }

    /// Looks up a result for a container. A full layout can only be skipped
    /// when the previous full layout ran under identical constraints.
    pub fn get_for_container(&self, query: &CacheQuery, perform_layout: bool) -> Option<CacheEntry> {
        let candidates = if perform_layout {
            [self.layout, None]
        } else {
            [self.layout, self.measurement]
        };
        candidates
            .into_iter()
            .flatten()
            .find(|entry| has_same_constraints(query, entry))
    }
}

fn has_same_references(query: &CacheQuery, entry: &CacheEntry) -> bool {
    floats_equal(entry.parent_width, query.parent_width)
        && floats_equal(entry.parent_height, query.parent_height)
}

fn has_same_constraints(query: &CacheQuery, entry: &CacheEntry) -> bool {
    has_same_references(query, entry)
        && entry.width_mode == query.width_mode
        && entry.height_mode == query.height_mode
        && floats_equal(entry.available_width, query.available_width)
        && floats_equal(entry.available_height, query.available_height)
}

/// Decides whether a leaf result computed under `entry` answers `query`.
pub fn can_use_cached_measurement(
    query: &CacheQuery,
    entry: &CacheEntry,
    point_scale_factor: f32,
) -> bool {
    if entry.computed_width < 0.0 || entry.computed_height < 0.0 {
        return false;
    }
    if !has_same_references(query, entry) {
        return false;
    }

    let grid = |value: f32| {
        if point_scale_factor != 0.0 {
            round_value_to_pixel_grid(value, point_scale_factor, false, false)
        } else {
            value
        }
    };

    let same_width_spec = entry.width_mode == query.width_mode
        && floats_equal(grid(entry.available_width), grid(query.available_width));
    let same_height_spec = entry.height_mode == query.height_mode
        && floats_equal(grid(entry.available_height), grid(query.available_height));

    let width_compatible = same_width_spec
        || axis_compatible(
            query.width_mode,
            query.available_width - query.margin_row,
            entry.width_mode,
            entry.available_width,
            entry.computed_width,
        );
    let height_compatible = same_height_spec
        || axis_compatible(
            query.height_mode,
            query.available_height - query.margin_column,
            entry.height_mode,
            entry.available_height,
            entry.computed_height,
        );

    width_compatible && height_compatible
}

fn axis_compatible(
    mode: MeasureMode,
    size: f32,
    last_mode: MeasureMode,
    last_size: f32,
    last_computed: f32,
) -> bool {
    match (mode, last_mode) {
        // the requested exact size is what the node produced last time
        (MeasureMode::Exactly, _) => floats_equal(size, last_computed),
        // the unconstrained size already fits the new cap
        (MeasureMode::AtMost, MeasureMode::Undefined) => {
            size >= last_computed || floats_equal(size, last_computed)
        }
        // a tighter cap that the previous result still satisfies
        (MeasureMode::AtMost, MeasureMode::AtMost) => {
            last_size > size && (last_computed <= size || floats_equal(size, last_computed))
        }
        _ => false,
    }
}
