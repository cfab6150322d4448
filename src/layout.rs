//! Cell-based geometry - bounds and hit testing for widgets and overlays

/// Rectangle bounds in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering the whole terminal
    pub fn fullscreen(cols: u16, rows: u16) -> Self {
        Rect::new(0, 0, cols, rows)
    }

    /// Get right edge x-coordinate (exclusive)
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get bottom edge y-coordinate (exclusive)
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a cell lies inside the rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Create a subrect with uniform padding applied
    pub fn inner(&self, padding: u16) -> Self {
        let padding2 = padding.saturating_mul(2);
        Rect {
            x: self.x.saturating_add(padding),
            y: self.y.saturating_add(padding),
            width: self.width.saturating_sub(padding2),
            height: self.height.saturating_sub(padding2),
        }
    }

    /// Whether the rectangle has no visible cells
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 3)); // right edge is exclusive
        assert!(!r.contains(2, 5)); // bottom edge is exclusive
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn test_inner_padding() {
        let r = Rect::new(0, 0, 10, 6).inner(1);
        assert_eq!(r, Rect::new(1, 1, 8, 4));

        // Padding larger than the rect collapses to empty
        let tiny = Rect::new(0, 0, 1, 1).inner(2);
        assert!(tiny.is_empty());
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(1, 1, 3, 3);
        assert_eq!(r.right(), 4);
        assert_eq!(r.bottom(), 4);
    }
}
