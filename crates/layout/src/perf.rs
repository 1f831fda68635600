/// Counters collected during one layout pass.
///
/// Reset at the start of every `compute_layout` call, so after a pass they
/// describe that pass only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    /// Calls into the cached per-node entry point.
    pub node_visits: usize,
    /// Visits that ran the algorithm with child positioning.
    pub layout_passes: usize,
    /// Visits that ran the algorithm only to obtain a size.
    pub measure_passes: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
    pub measure_calls: usize,
    pub baseline_calls: usize,
}

impl LayoutStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            return 0.0;
        }
        self.cache_hits as f64 / total as f64
    }

    pub fn log_summary(&self, generation: u32) {
        if self.node_visits == 0 {
            return;
        }

        log::debug!("=== Layout Summary (generation {}) ===", generation);
        log::debug!(
            "Visits: {} ({} layout, {} measure)",
            self.node_visits,
            self.layout_passes,
            self.measure_passes
        );
        log::debug!(
            "Cache Hits: {} ({:.1}%)",
            self.cache_hits,
            self.hit_rate() * 100.0
        );
        log::debug!(
            "Callbacks: {} measure, {} baseline",
            self.measure_calls,
            self.baseline_calls
        );
    }
}
