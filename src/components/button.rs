//! Button component - a focusable, activatable label

use crate::component::Component;
use crate::event::{Event, EventHandler, Key};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;

use super::clip;

/// A push button activated with Enter or Space
///
/// Activation is consumed by polling:
///
/// ```
/// use tuft::components::Button;
/// use tuft::event::{Event, EventHandler, Key};
///
/// let mut button = Button::new("Save");
/// button.set_focused(true);
/// button.handle_event(&Event::Key(Key::Enter));
/// assert!(button.take_activation());
/// assert!(!button.take_activation());
/// ```
#[derive(Debug)]
pub struct Button {
    label: String,
    disabled: bool,
    focused: bool,
    pressed: bool,
    dirty: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Button {
            label: label.into(),
            disabled: false,
            focused: false,
            pressed: false,
            dirty: true,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.dirty = true;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            self.dirty = true;
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.dirty = true;
        }
    }

    /// Programmatic press; ignored while disabled
    pub fn press(&mut self) {
        if !self.disabled {
            self.pressed = true;
            self.dirty = true;
        }
    }

    /// Consume a pending activation
    pub fn take_activation(&mut self) -> bool {
        std::mem::take(&mut self.pressed)
    }
}

impl EventHandler for Button {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.focused || self.disabled {
            return false;
        }
        match event {
            Event::Key(Key::Enter) | Event::Key(Key::Char(' ')) => {
                self.press();
                true
            }
            _ => false,
        }
    }

    fn on_focus(&mut self) {
        self.set_focused(true);
    }

    fn on_blur(&mut self) {
        self.set_focused(false);
    }
}

impl Component for Button {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, theme: &Theme) -> Result<()> {
        if bounds.is_empty() {
            return Ok(());
        }

        let text = format!("[ {} ]", clip(&self.label, (bounds.width as usize).saturating_sub(4)));
        renderer.move_cursor(bounds.x, bounds.y)?;
        if self.disabled {
            renderer.write_styled(&text, &theme.disabled_style())?;
        } else if self.focused {
            renderer.write_styled(&text, &theme.highlight_style())?;
        } else {
            renderer.write_styled(&text, &theme.accent_style())?;
        }

        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        (self.label.chars().count() as u16 + 4, 1)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "Button"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation() {
        let mut b = Button::new("Go");
        b.set_focused(true);

        assert!(b.handle_event(&Event::Key(Key::Enter)));
        assert!(b.take_activation());
        assert!(!b.take_activation()); // consumed

        assert!(b.handle_event(&Event::Key(Key::Char(' '))));
        assert!(b.take_activation());
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut b = Button::new("Go").with_disabled(true);
        b.set_focused(true);

        assert!(!b.handle_event(&Event::Key(Key::Enter)));
        assert!(!b.take_activation());

        b.press();
        assert!(!b.take_activation());
    }

    #[test]
    fn test_unfocused_ignores_input() {
        let mut b = Button::new("Go");
        assert!(!b.handle_event(&Event::Key(Key::Enter)));
    }

    #[test]
    fn test_render_states() {
        let theme = Theme::default();
        let bounds = Rect::new(0, 0, 20, 1);

        let mut b = Button::new("Go");
        let mut r = Renderer::headless();
        b.render(&mut r, bounds, &theme).unwrap();
        assert!(r.captured_text().unwrap().contains("[ Go ]"));

        b.set_disabled(true);
        let mut r = Renderer::headless();
        b.render(&mut r, bounds, &theme).unwrap();
        assert!(r.captured_text().unwrap().contains("\x1b[2m"));
    }
}
