//! Invariant checks for trails supplied from outside the builder

use anyhow::Result;
use std::collections::HashSet;

use crate::trail::TrailItem;

/// Validates the structural invariants of a trail
///
/// Checks, in order: ids are unique within the trail, at most one item is
/// active, and an active item is the last one. Trails produced by the
/// builder always pass; this exists for trails assembled by callers.
pub fn validate_trail(trail: &[TrailItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(trail.len());
    for item in trail {
        if !seen.insert(item.id.as_str()) {
            return Err(anyhow::anyhow!("Duplicate trail item id: {}", item.id));
        }
    }

    let active: Vec<usize> = trail
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_active)
        .map(|(index, _)| index)
        .collect();

    match active.as_slice() {
        [] => Ok(()),
        [index] if *index + 1 == trail.len() => Ok(()),
        [index] => Err(anyhow::anyhow!(
            "Active item '{}' must be last (found at position {} of {})",
            trail[*index].id,
            index + 1,
            trail.len()
        )),
        many => Err(anyhow::anyhow!(
            "Trail has {} active items, expected at most one",
            many.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> TrailItem {
        TrailItem::new(id, id)
    }

    #[test]
    fn test_empty_trail_is_valid() {
        assert!(validate_trail(&[]).is_ok());
    }

    #[test]
    fn test_trailing_active_is_valid() {
        let trail = vec![item("home"), item("products").active()];
        assert!(validate_trail(&trail).is_ok());
    }

    #[test]
    fn test_no_active_is_valid() {
        let trail = vec![item("home"), item("products")];
        assert!(validate_trail(&trail).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let trail = vec![item("home"), item("home").active()];
        let err = validate_trail(&trail).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_active_not_last_rejected() {
        let trail = vec![item("home").active(), item("products")];
        let err = validate_trail(&trail).unwrap_err();
        assert!(err.to_string().contains("must be last"));
    }

    #[test]
    fn test_multiple_active_rejected() {
        let trail = vec![item("home").active(), item("products").active()];
        let err = validate_trail(&trail).unwrap_err();
        assert!(err.to_string().contains("2 active items"));
    }
}
