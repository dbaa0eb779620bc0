//! Collapsing long trails for display

use serde::Serialize;

use super::TrailItem;

/// Outcome of fitting a trail into a display budget
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TruncationResult {
    pub visible: Vec<TrailItem>,
    pub hidden: Vec<TrailItem>,
    pub collapsed: bool,
}

/// Fits `trail` into `max_items` slots
///
/// A trail that fits is returned unchanged. Otherwise the first and last
/// items are always kept, even when that exceeds `max_items`. The first
/// `max_items - 2` middle items fill the remaining slots and the rest are
/// hidden, all in their original order.
///
/// When the trail has no middle items (two items or fewer) but still does
/// not fit, the result is the first `max_items` items and nothing is
/// reported hidden. This does not preserve the tail anchor; existing
/// callers depend on it.
pub fn truncate(trail: &[TrailItem], max_items: usize) -> TruncationResult {
    if trail.len() <= max_items {
        return TruncationResult {
            visible: trail.to_vec(),
            hidden: Vec::new(),
            collapsed: false,
        };
    }

    let middle: &[TrailItem] = match trail {
        [_, middle @ .., _] => middle,
        _ => &[],
    };

    if middle.is_empty() {
        tracing::trace!(len = trail.len(), max_items, "no middle items, slicing head");
        return TruncationResult {
            visible: trail[..max_items].to_vec(),
            hidden: Vec::new(),
            collapsed: false,
        };
    }

    let middle_slots = max_items.saturating_sub(2).min(middle.len());
    let (kept, hidden) = middle.split_at(middle_slots);

    let mut visible = Vec::with_capacity(kept.len() + 2);
    visible.push(trail[0].clone());
    visible.extend_from_slice(kept);
    visible.push(trail[trail.len() - 1].clone());

    tracing::trace!(
        len = trail.len(),
        max_items,
        visible = visible.len(),
        hidden = hidden.len(),
        "collapsed trail"
    );

    TruncationResult {
        visible,
        collapsed: !hidden.is_empty(),
        hidden: hidden.to_vec(),
    }
}
