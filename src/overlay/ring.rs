//! Focus ring - snapshot of focusable elements inside an open overlay

use super::Direction;

/// Unique identifier for a focusable component
pub type ComponentId = String;

/// Ordered snapshot of the focusable elements inside an overlay
///
/// Captured once when the overlay opens and held for the duration of the
/// open episode. The snapshot is deliberately not live: tab order stays
/// stable even if overlay content mutates while open. Hosts that mutate
/// content can recapture explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    entries: Vec<ComponentId>,
}

impl FocusRing {
    /// Take a snapshot of the given focusable element ids, in tab order
    ///
    /// An empty snapshot is valid; it means "no focusable element".
    pub fn capture(entries: Vec<ComponentId>) -> Self {
        FocusRing { entries }
    }

    /// Check if the ring has no focus targets
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of focus targets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First element in ring order
    pub fn first(&self) -> Option<&ComponentId> {
        self.entries.first()
    }

    /// Last element in ring order
    pub fn last(&self) -> Option<&ComponentId> {
        self.entries.last()
    }

    /// Check if an element is part of the ring
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e == id)
    }

    /// Next element in ring order from `current`, wrapping at the ends
    ///
    /// With no current element this starts at the first (forward) or last
    /// (backward) entry; an element no longer in the ring restarts the
    /// same way. Returns `None` only when the ring is empty - callers
    /// must not attempt to focus in that case.
    pub fn cycle_from(&self, current: Option<&str>, direction: Direction) -> Option<&ComponentId> {
        if self.entries.is_empty() {
            return None;
        }

        let position = current.and_then(|id| self.entries.iter().position(|e| e == id));
        let idx = match (position, direction) {
            (Some(i), Direction::Next) => (i + 1) % self.entries.len(),
            (Some(i), Direction::Previous) => (i + self.entries.len() - 1) % self.entries.len(),
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => self.entries.len() - 1,
        };
        self.entries.get(idx)
    }

    /// Drop the snapshot
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(ids: &[&str]) -> FocusRing {
        FocusRing::capture(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_first_last() {
        let r = ring(&["a", "b", "c"]);
        assert_eq!(r.first().unwrap(), "a");
        assert_eq!(r.last().unwrap(), "c");

        let empty = FocusRing::default();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_cycle_forward_wraps() {
        let r = ring(&["a", "b", "c"]);

        assert_eq!(r.cycle_from(Some("a"), Direction::Next).unwrap(), "b");
        assert_eq!(r.cycle_from(Some("c"), Direction::Next).unwrap(), "a");
    }

    #[test]
    fn test_cycle_backward_wraps() {
        let r = ring(&["a", "b", "c"]);

        assert_eq!(r.cycle_from(Some("b"), Direction::Previous).unwrap(), "a");
        assert_eq!(r.cycle_from(Some("a"), Direction::Previous).unwrap(), "c");
    }

    #[test]
    fn test_cycle_without_current() {
        let r = ring(&["a", "b"]);

        assert_eq!(r.cycle_from(None, Direction::Next).unwrap(), "a");
        assert_eq!(r.cycle_from(None, Direction::Previous).unwrap(), "b");
    }

    #[test]
    fn test_cycle_unknown_current_restarts() {
        let r = ring(&["a", "b"]);
        assert_eq!(r.cycle_from(Some("gone"), Direction::Next).unwrap(), "a");
    }

    #[test]
    fn test_empty_ring_yields_nothing() {
        let r = FocusRing::default();
        assert_eq!(r.cycle_from(None, Direction::Next), None);
        assert_eq!(r.cycle_from(Some("a"), Direction::Previous), None);
    }

    #[test]
    fn test_single_element_cycles_to_itself() {
        let r = ring(&["only"]);
        assert_eq!(r.cycle_from(Some("only"), Direction::Next).unwrap(), "only");
        assert_eq!(
            r.cycle_from(Some("only"), Direction::Previous).unwrap(),
            "only"
        );
    }
}
