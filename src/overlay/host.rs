//! Host binding - the thin adapter between a widget and its controller

use super::OverlayController;

/// Implemented by widgets that own an [`OverlayController`]
///
/// The provided methods translate controller state into the show/hide
/// and assistive-hint surface a widget renders from; widgets stay free
/// to expose richer accessors of their own.
pub trait OverlayHost {
    /// The widget's controller
    fn overlay(&self) -> &OverlayController;

    /// Mutable access to the widget's controller
    fn overlay_mut(&mut self) -> &mut OverlayController;

    /// Whether the overlay surface should be visible
    fn is_open(&self) -> bool {
        self.overlay().is_open()
    }

    /// Expanded state for assistive hints (the aria-expanded equivalent)
    fn expanded(&self) -> bool {
        self.is_open()
    }

    /// Highlighted item index while open
    fn focused_index(&self) -> Option<usize> {
        self.overlay().focused_index()
    }

    /// Programmatic dismissal
    fn dismiss(&mut self) {
        self.overlay_mut().close();
    }
}
