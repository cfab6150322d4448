//! Component system - trait and lifecycle for UI elements

use crate::event::EventHandler;
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;

/// Core component trait for all UI elements
///
/// Components keep their own state between frames and issue
/// immediate-mode drawing commands within their bounds each render.
pub trait Component: EventHandler {
    /// Render the component to the given rectangle
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, theme: &Theme) -> Result<()>;

    /// Calculate minimum size needed for this component
    fn min_size(&self) -> (u16, u16) {
        (0, 0)
    }

    /// Called when component is first mounted
    fn on_mount(&mut self) {}

    /// Called before component is unmounted
    ///
    /// Overlay-bearing components release their input subscriptions here;
    /// a component must be safe to drop right after unmounting.
    fn on_unmount(&mut self) {}

    /// Mark component as needing redraw
    fn mark_dirty(&mut self) {}

    /// Check if component needs redraw
    fn is_dirty(&self) -> bool {
        true
    }

    /// Get component name for debugging
    fn name(&self) -> &str {
        "Component"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestComponent {
        dirty: bool,
    }

    impl EventHandler for TestComponent {}

    impl Component for TestComponent {
        fn render(
            &mut self,
            _renderer: &mut Renderer,
            _bounds: Rect,
            _theme: &Theme,
        ) -> Result<()> {
            self.dirty = false;
            Ok(())
        }

        fn mark_dirty(&mut self) {
            self.dirty = true;
        }

        fn is_dirty(&self) -> bool {
            self.dirty
        }

        fn name(&self) -> &str {
            "TestComponent"
        }
    }

    #[test]
    fn test_component_dirty_tracking() {
        let mut comp = TestComponent { dirty: true };
        assert!(comp.is_dirty());

        let mut renderer = Renderer::headless();
        let theme = Theme::default();
        comp.render(&mut renderer, Rect::new(0, 0, 10, 10), &theme)
            .unwrap();
        assert!(!comp.is_dirty());

        comp.mark_dirty();
        assert!(comp.is_dirty());
    }
}
