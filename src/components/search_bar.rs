//! Search bar - a single-line editable field with placeholder

use crate::component::Component;
use crate::event::{Event, EventHandler, Key};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;

use super::pad_clip;

/// Single-line text field with a magnifier prefix and placeholder
///
/// The cursor is tracked as a char index into the value; editing keys
/// (chars, Backspace, Delete, arrows, Home/End, paste, Ctrl-U) apply
/// while the field is focused. Hosts poll `value()` for the content.
#[derive(Debug)]
pub struct SearchBar {
    value: String,
    cursor: usize, // char index into value
    placeholder: String,
    focused: bool,
    dirty: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        SearchBar {
            value: String::new(),
            cursor: 0,
            placeholder: String::new(),
            focused: false,
            dirty: true,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
        self.dirty = true;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.dirty = true;
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

    /// Cursor position as a char index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_at(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
        self.dirty = true;
    }

    fn insert_str(&mut self, text: &str) {
        let at = self.byte_at(self.cursor);
        self.value.insert_str(at, text);
        self.cursor += text.chars().count();
        self.dirty = true;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_at(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
            self.dirty = true;
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_at(self.cursor);
            self.value.remove(at);
            self.dirty = true;
        }
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SearchBar {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.focused {
            return false;
        }
        match event {
            Event::Key(Key::Char(c)) => {
                self.insert(*c);
                true
            }
            Event::Key(Key::Backspace) => {
                self.backspace();
                true
            }
            Event::Key(Key::Delete) => {
                self.delete();
                true
            }
            Event::Key(Key::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
                self.dirty = true;
                true
            }
            Event::Key(Key::Right) => {
                if self.cursor < self.value.chars().count() {
                    self.cursor += 1;
                    self.dirty = true;
                }
                true
            }
            Event::Key(Key::Home) => {
                self.cursor = 0;
                self.dirty = true;
                true
            }
            Event::Key(Key::End) => {
                self.cursor = self.value.chars().count();
                self.dirty = true;
                true
            }
            Event::Key(Key::Ctrl('u')) => {
                self.clear();
                true
            }
            Event::Paste(text) => {
                self.insert_str(text);
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

impl Component for SearchBar {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, theme: &Theme) -> Result<()> {
        if bounds.is_empty() {
            return Ok(());
        }

        renderer.move_cursor(bounds.x, bounds.y)?;
        renderer.write_styled("⌕ ", &theme.muted_style())?;

        let field_width = (bounds.width as usize).saturating_sub(2);
        if self.value.is_empty() {
            let text = pad_clip(&self.placeholder, field_width);
            renderer.write_styled(&text, &theme.disabled_style())?;
        } else {
            let text = pad_clip(&self.value, field_width);
            let style = if self.focused {
                format!("{}{}", theme.text_style(), theme.focus_style())
            } else {
                theme.text_style()
            };
            renderer.write_styled(&text, &style)?;
        }

        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        (12, 1)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "SearchBar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(bar: &mut SearchBar, text: &str) {
        for c in text.chars() {
            bar.handle_event(&Event::Key(Key::Char(c)));
        }
    }

    #[test]
    fn test_typing() {
        let mut bar = SearchBar::new();
        bar.set_focused(true);

        typed(&mut bar, "hello");
        assert_eq!(bar.value(), "hello");
        assert_eq!(bar.cursor(), 5);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut bar = SearchBar::new().with_value("abc");
        bar.set_focused(true);

        bar.handle_event(&Event::Key(Key::Backspace));
        assert_eq!(bar.value(), "ab");

        bar.handle_event(&Event::Key(Key::Home));
        bar.handle_event(&Event::Key(Key::Delete));
        assert_eq!(bar.value(), "b");
    }

    #[test]
    fn test_cursor_insert_mid_string() {
        let mut bar = SearchBar::new().with_value("ac");
        bar.set_focused(true);

        bar.handle_event(&Event::Key(Key::Left));
        bar.handle_event(&Event::Key(Key::Char('b')));
        assert_eq!(bar.value(), "abc");
    }

    #[test]
    fn test_unicode_editing() {
        let mut bar = SearchBar::new().with_value("héllo");
        bar.set_focused(true);

        bar.handle_event(&Event::Key(Key::Home));
        bar.handle_event(&Event::Key(Key::Right));
        bar.handle_event(&Event::Key(Key::Delete));
        assert_eq!(bar.value(), "hllo");
    }

    #[test]
    fn test_clear_and_paste() {
        let mut bar = SearchBar::new().with_value("old");
        bar.set_focused(true);

        bar.handle_event(&Event::Key(Key::Ctrl('u')));
        assert!(bar.is_empty());

        bar.handle_event(&Event::Paste("https://".to_string()));
        assert_eq!(bar.value(), "https://");
        assert_eq!(bar.cursor(), 8);
    }

    #[test]
    fn test_unfocused_ignores_input() {
        let mut bar = SearchBar::new();
        assert!(!bar.handle_event(&Event::Key(Key::Char('x'))));
        assert!(bar.is_empty());
    }

    #[test]
    fn test_placeholder_rendered_when_empty() {
        let theme = Theme::default();
        let mut bar = SearchBar::new().with_placeholder("https://");
        let mut r = Renderer::headless();
        bar.render(&mut r, Rect::new(0, 0, 20, 1), &theme).unwrap();
        assert!(r.captured_text().unwrap().contains("https://"));
    }
}
