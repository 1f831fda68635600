//! Grow/shrink resolution for the items of one flex line.
use crate::node::NodeId;
use crate::{LayoutError, Result};
use flexure_types::floats_equal;

/// One flow child of a line, as seen by the distribution.
#[derive(Debug, Clone, Copy)]
pub(super) struct FlexItem {
    pub id: NodeId,
    /// Flex basis already clamped into the item's min/max sizes.
    pub basis: f32,
    pub grow: f32,
    pub shrink: f32,
    /// Resolved main size, valid after [`resolve_flexible_lengths`].
    pub target: f32,
}

impl FlexItem {
    pub fn new(id: NodeId, basis: f32, grow: f32, shrink: f32) -> Self {
        Self {
            id,
            basis,
            grow,
            shrink,
            target: basis,
        }
    }

    fn factor(&self, growing: bool) -> f32 {
        if growing {
            self.grow
        } else {
            self.shrink * self.basis
        }
    }
}

/// Distributes `free_space` over `items` and returns what is left of it.
///
/// Free space is shared in proportion to grow factors, or to shrink factors
/// scaled by the basis when negative. Each pass visits the unfrozen items in
/// order; every item whose share violates its min/max (as reported by
/// `bound`) is frozen at the bound, and the next pass redistributes among the
/// rest. The loop ends with a pass that freezes nothing.
///
/// A share that is not a finite number can never settle against the bounds,
/// so it fails the distribution instead of being frozen or dropped.
pub(super) fn resolve_flexible_lengths<F>(
    owner: NodeId,
    items: &mut [FlexItem],
    free_space: f32,
    bound: F,
) -> Result<f32>
where
    F: Fn(NodeId, f32) -> f32,
{
    for item in items.iter_mut() {
        item.target = item.basis;
    }
    if !(free_space > 0.0 || free_space < 0.0) {
        return Ok(free_space);
    }

    let growing = free_space > 0.0;
    let mut active: Vec<usize> = (0..items.len())
        .filter(|&i| items[i].factor(growing) != 0.0)
        .collect();
    let mut remaining = free_space;
    let mut passes = 0;

    while !active.is_empty() {
        passes += 1;

        let mut total: f32 = active.iter().map(|&i| items[i].factor(growing)).sum();
        if growing && total > 0.0 && total < 1.0 {
            total = 1.0;
        }

        let mut frozen = Vec::new();
        for &i in &active {
            let item = &mut items[i];
            let base = item.basis + remaining / total * item.factor(growing);
            if !base.is_finite() {
                return Err(LayoutError::FlexResolutionStalled(owner, passes));
            }
            let bounded = bound(item.id, base);
            item.target = bounded;
            if !floats_equal(base, bounded) {
                frozen.push(i);
            }
        }

        if frozen.is_empty() {
            break;
        }
        log::trace!("{}: {} item(s) hit a size limit in pass {}", owner, frozen.len(), passes);
        for &i in &frozen {
            remaining -= items[i].target - items[i].basis;
        }
        active.retain(|i| !frozen.contains(i));
    }

    let used: f32 = items.iter().map(|item| item.target - item.basis).sum();
    Ok(free_space - used)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(index: usize, basis: f32, grow: f32, shrink: f32) -> FlexItem {
        FlexItem::new(NodeId(index), basis, grow, shrink)
    }

    fn unbounded(_: NodeId, size: f32) -> f32 {
        size
    }

    #[test]
    fn test_grow_is_proportional() {
        let mut items = [item(0, 0.0, 1.0, 0.0), item(1, 0.0, 3.0, 0.0)];
        let left = resolve_flexible_lengths(NodeId(9), &mut items, 100.0, unbounded).unwrap();
        assert_eq!(items[0].target, 25.0);
        assert_eq!(items[1].target, 75.0);
        assert_eq!(left, 0.0);
    }

    #[test]
    fn test_fractional_total_grow_leaves_space() {
        let mut items = [item(0, 10.0, 0.25, 0.0), item(1, 10.0, 0.25, 0.0)];
        let left = resolve_flexible_lengths(NodeId(9), &mut items, 100.0, unbounded).unwrap();
        assert_eq!(items[0].target, 35.0);
        assert_eq!(items[1].target, 35.0);
        assert_eq!(left, 50.0);
    }

    #[test]
    fn test_shrink_weighted_by_basis() {
        let mut items = [item(0, 100.0, 0.0, 1.0), item(1, 300.0, 0.0, 1.0)];
        let left = resolve_flexible_lengths(NodeId(9), &mut items, -100.0, unbounded).unwrap();
        assert_eq!(items[0].target, 75.0);
        assert_eq!(items[1].target, 225.0);
        assert_eq!(left, 0.0);
    }

    #[test]
    fn test_frozen_item_space_goes_to_the_rest() {
        let mut items = [item(0, 0.0, 1.0, 0.0), item(1, 0.0, 1.0, 0.0)];
        let max_first = |id: NodeId, size: f32| if id == NodeId(0) { size.min(20.0) } else { size };
        let left = resolve_flexible_lengths(NodeId(9), &mut items, 100.0, max_first).unwrap();
        assert_eq!(items[0].target, 20.0);
        assert_eq!(items[1].target, 80.0);
        assert_eq!(left, 0.0);
    }

    #[test]
    fn test_all_frozen_leaves_remainder() {
        let mut items = [item(0, 0.0, 1.0, 0.0), item(1, 0.0, 1.0, 0.0)];
        let capped = |_: NodeId, size: f32| size.min(30.0);
        let left = resolve_flexible_lengths(NodeId(9), &mut items, 100.0, capped).unwrap();
        assert_eq!(items[0].target, 30.0);
        assert_eq!(items[1].target, 30.0);
        assert_eq!(left, 40.0);
    }

    #[test]
    fn test_inflexible_items_keep_basis() {
        let mut items = [item(0, 40.0, 0.0, 0.0), item(1, 10.0, 1.0, 0.0)];
        let left = resolve_flexible_lengths(NodeId(9), &mut items, 50.0, unbounded).unwrap();
        assert_eq!(items[0].target, 40.0);
        assert_eq!(items[1].target, 60.0);
        assert_eq!(left, 0.0);
    }

    #[test]
    fn test_shrink_respects_min_then_redistributes() {
        let mut items = [item(0, 100.0, 0.0, 1.0), item(1, 100.0, 0.0, 1.0)];
        let min_first = |id: NodeId, size: f32| if id == NodeId(0) { size.max(80.0) } else { size };
        let left = resolve_flexible_lengths(NodeId(9), &mut items, -100.0, min_first).unwrap();
        assert_eq!(items[0].target, 80.0);
        assert_eq!(items[1].target, 20.0);
        assert_eq!(left, 0.0);
    }

    #[test]
    fn test_non_finite_share_is_an_error() {
        let mut items = [item(0, 0.0, f32::INFINITY, 0.0), item(1, 0.0, 1.0, 0.0)];
        let result = resolve_flexible_lengths(NodeId(9), &mut items, 100.0, unbounded);
        assert_eq!(result, Err(LayoutError::FlexResolutionStalled(NodeId(9), 1)));
    }
}
