//! Traversal cursor over an overlay's selectable items

/// A cursor over an ordered list of selectable items (menu entries)
///
/// Wraps around both ends. `current` is `None` until the first move,
/// and navigation is inert while the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalIndex {
    count: usize,
    current: Option<usize>,
}

impl TraversalIndex {
    /// Create a cursor over `count` items, nothing highlighted
    pub fn new(count: usize) -> Self {
        TraversalIndex {
            count,
            current: None,
        }
    }

    /// Number of navigable items
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if there is nothing to navigate
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Currently highlighted index
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Move to the next item, wrapping past the end
    ///
    /// From no highlight this lands on the first item.
    pub fn next(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let idx = match self.current {
            Some(c) => (c + 1) % self.count,
            None => 0,
        };
        self.current = Some(idx);
        self.current
    }

    /// Move to the previous item, wrapping past the start
    ///
    /// From no highlight this lands on the last item.
    pub fn previous(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let idx = match self.current {
            Some(c) => (c + self.count - 1) % self.count,
            None => self.count - 1,
        };
        self.current = Some(idx);
        self.current
    }

    /// Highlight a specific index
    pub fn focus(&mut self, index: usize) -> bool {
        if index < self.count {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    /// Clear the highlight
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Change the item count while keeping a valid highlight
    ///
    /// A highlight past the new end is clamped to the last item, or
    /// cleared when the list becomes empty.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if let Some(c) = self.current {
            if count == 0 {
                self.current = None;
            } else if c >= count {
                self.current = Some(count - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut t = TraversalIndex::new(3);
        assert_eq!(t.current(), None);

        assert_eq!(t.next(), Some(0));
        assert_eq!(t.next(), Some(1));
        assert_eq!(t.next(), Some(2));
        assert_eq!(t.next(), Some(0)); // wrap
    }

    #[test]
    fn test_previous_wraps() {
        let mut t = TraversalIndex::new(3);

        // From no highlight, previous lands on the last item
        assert_eq!(t.previous(), Some(2));

        t.focus(0);
        assert_eq!(t.previous(), Some(2)); // wrap from the front
        assert_eq!(t.previous(), Some(1));
    }

    #[test]
    fn test_empty_is_inert() {
        let mut t = TraversalIndex::new(0);
        assert_eq!(t.next(), None);
        assert_eq!(t.previous(), None);
        assert_eq!(t.current(), None);
        assert!(!t.focus(0));
    }

    #[test]
    fn test_reset() {
        let mut t = TraversalIndex::new(2);
        t.next();
        assert_eq!(t.current(), Some(0));

        t.reset();
        assert_eq!(t.current(), None);
    }

    #[test]
    fn test_shrink_clamps() {
        let mut t = TraversalIndex::new(5);
        t.focus(4);

        t.set_count(3);
        assert_eq!(t.current(), Some(2));

        t.set_count(0);
        assert_eq!(t.current(), None);
    }

    #[test]
    fn test_grow_keeps_highlight() {
        let mut t = TraversalIndex::new(2);
        t.focus(1);

        t.set_count(6);
        assert_eq!(t.current(), Some(1));
        assert_eq!(t.len(), 6);
    }

    #[test]
    fn test_focus_out_of_range() {
        let mut t = TraversalIndex::new(2);
        assert!(!t.focus(2));
        assert_eq!(t.current(), None);
    }
}
