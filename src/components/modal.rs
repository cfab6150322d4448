//! Modal dialog - a centered panel that traps focus while open
//!
//! The dialog wraps any [`Component`] as its content and binds an
//! [`OverlayController`]: Escape and outside presses dismiss it, Tab
//! and Shift-Tab cycle through the focusable ids the host declares, and
//! every other input is swallowed while the dialog is up.

use crate::component::Component;
use crate::event::{Event, EventHandler, MouseButton, MouseEvent};
use crate::layout::Rect;
use crate::overlay::{ComponentId, OverlayController, OverlayHost};
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use unicode_width::UnicodeWidthStr;

use super::clip;

/// Dialog width presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn width(self) -> u16 {
        match self {
            ModalSize::Small => 32,
            ModalSize::Medium => 50,
            ModalSize::Large => 72,
        }
    }
}

/// Vertical placement on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPosition {
    #[default]
    Center,
    Top,
    Bottom,
}

/// Modal dialog widget
pub struct Modal {
    content: Box<dyn Component>,
    title: Option<String>,
    size: ModalSize,
    position: ModalPosition,
    show_close_button: bool,
    trap_focus: bool,
    controller: OverlayController,
    panel_bounds: Rc<Cell<Option<Rect>>>,
    close_button: Cell<Option<Rect>>,
    focusables: Rc<RefCell<Vec<ComponentId>>>,
    dirty: bool,
}

impl Modal {
    pub fn new(content: impl Component + 'static) -> Self {
        let panel_bounds = Rc::new(Cell::new(None));
        let focusables = Rc::new(RefCell::new(Vec::new()));

        let panel = Rc::clone(&panel_bounds);
        let ids = Rc::clone(&focusables);
        let controller = OverlayController::new(0)
            .with_content_region(move || panel.get())
            .with_focusables(move || ids.borrow().clone());

        Modal {
            content: Box::new(content),
            title: None,
            size: ModalSize::default(),
            position: ModalPosition::default(),
            show_close_button: true,
            trap_focus: true,
            controller,
            panel_bounds,
            close_button: Cell::new(None),
            focusables,
            dirty: true,
        }
    }

    /// Dialog showing a block of text
    pub fn message(title: impl Into<String>, text: impl Into<String>) -> Self {
        Modal::new(TextContent::new(text)).with_title(title)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_position(mut self, position: ModalPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    /// Whether input is swallowed while the dialog is open
    pub fn with_trap_focus(mut self, trap: bool) -> Self {
        self.trap_focus = trap;
        self
    }

    /// Ids of the focusable elements inside the dialog, in Tab order
    pub fn with_focusables(self, ids: Vec<ComponentId>) -> Self {
        *self.focusables.borrow_mut() = ids;
        self
    }

    pub fn with_on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.controller.set_on_close(f);
        self
    }

    /// Open the dialog within a screen area
    ///
    /// The area fixes where the panel will be drawn, so outside presses
    /// can be judged against it from the first event on.
    pub fn show(&mut self, screen: Rect) {
        self.panel_bounds.set(Some(self.calculate_bounds(screen)));
        self.controller.open();
        self.dirty = true;
    }

    pub fn close(&mut self) {
        self.controller.close();
        self.dirty = true;
    }

    /// Id of the element currently holding focus inside the dialog
    pub fn focused_child(&self) -> Option<&str> {
        self.controller.focused_element()
    }

    pub fn content(&self) -> &dyn Component {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> &mut dyn Component {
        self.content.as_mut()
    }

    fn calculate_bounds(&self, screen: Rect) -> Rect {
        let width = self.size.width().min(screen.width.saturating_sub(2)).max(4);
        let content_h = self.content.min_size().1;
        let height = (content_h + 2)
            .min(screen.height.saturating_sub(2))
            .max(3);

        let x = screen.x + (screen.width.saturating_sub(width)) / 2;
        let y = match self.position {
            ModalPosition::Center => screen.y + (screen.height.saturating_sub(height)) / 2,
            ModalPosition::Top => screen.y + 1,
            ModalPosition::Bottom => screen.bottom().saturating_sub(height + 1),
        };
        Rect::new(x, y, width, height)
    }
}

impl std::fmt::Debug for Modal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modal")
            .field("title", &self.title)
            .field("size", &self.size)
            .field("position", &self.position)
            .field("open", &self.controller.is_open())
            .finish()
    }
}

impl EventHandler for Modal {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.controller.is_open() {
            return false;
        }

        if let Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row)) = event {
            if self
                .close_button
                .get()
                .is_some_and(|r| r.contains(*col, *row))
            {
                self.close();
                return true;
            }
        }

        if self.controller.handle_event(event) {
            self.dirty = true;
            return true;
        }
        if self.content.handle_event(event) {
            self.dirty = true;
            return true;
        }

        // An open dialog swallows whatever remains.
        self.trap_focus
    }
}

impl Component for Modal {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, theme: &Theme) -> Result<()> {
        if !self.controller.is_open() {
            return Ok(());
        }

        let panel = self.calculate_bounds(bounds);
        self.panel_bounds.set(Some(panel));
        if panel.is_empty() {
            return Ok(());
        }

        let inner_w = panel.width.saturating_sub(2) as usize;
        if let Some(b) = theme.border_chars() {
            // Top border carries the title and the close button
            let mut top = String::new();
            top.push(b.top_left);
            let mut used = 0;
            if let Some(title) = &self.title {
                let text = clip(title, inner_w.saturating_sub(4));
                top.push(b.horizontal);
                top.push(' ');
                top.push_str(&text);
                top.push(' ');
                used = 3 + UnicodeWidthStr::width(text.as_str());
            }
            let tail = inner_w.saturating_sub(used);
            for _ in 0..tail {
                top.push(b.horizontal);
            }
            top.push(b.top_right);
            renderer.move_cursor(panel.x, panel.y)?;
            renderer.write_styled(&top, &theme.accent_style())?;

            for row in panel.y + 1..panel.bottom() - 1 {
                renderer.move_cursor(panel.x, row)?;
                renderer.write_styled(&b.vertical.to_string(), &theme.accent_style())?;
                renderer.write_repeated(' ', inner_w)?;
                renderer.write_styled(&b.vertical.to_string(), &theme.accent_style())?;
            }

            let mut bottom = String::new();
            bottom.push(b.bottom_left);
            for _ in 0..inner_w {
                bottom.push(b.horizontal);
            }
            bottom.push(b.bottom_right);
            renderer.move_cursor(panel.x, panel.bottom() - 1)?;
            renderer.write_styled(&bottom, &theme.accent_style())?;
        }

        if self.show_close_button && panel.width >= 4 {
            let button = Rect::new(panel.right() - 3, panel.y, 1, 1);
            renderer.move_cursor(button.x, button.y)?;
            renderer.write_styled("✕", &theme.muted_style())?;
            self.close_button.set(Some(button));
        } else {
            self.close_button.set(None);
        }

        self.content.render(renderer, panel.inner(1), theme)?;
        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        let (_, h) = self.content.min_size();
        (self.size.width(), h + 2)
    }

    fn on_unmount(&mut self) {
        // Tearing the dialog down releases its input capture.
        self.controller.close();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "Modal"
    }
}

impl OverlayHost for Modal {
    fn overlay(&self) -> &OverlayController {
        &self.controller
    }

    fn overlay_mut(&mut self) -> &mut OverlayController {
        &mut self.controller
    }
}

/// Plain multi-line text content for message dialogs
struct TextContent {
    lines: Vec<String>,
    dirty: bool,
}

impl TextContent {
    fn new(text: impl Into<String>) -> Self {
        TextContent {
            lines: text.into().lines().map(str::to_string).collect(),
            dirty: true,
        }
    }
}

impl EventHandler for TextContent {}

impl Component for TextContent {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, theme: &Theme) -> Result<()> {
        if bounds.is_empty() {
            return Ok(());
        }
        for (i, line) in self.lines.iter().take(bounds.height as usize).enumerate() {
            renderer.move_cursor(bounds.x, bounds.y + i as u16)?;
            renderer.write_styled(&clip(line, bounds.width as usize), &theme.text_style())?;
        }
        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        let width = self
            .lines
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0) as u16;
        (width, self.lines.len().max(1) as u16)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "TextContent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Key;
    use crate::overlay::CloseReason;
    use std::time::{Duration, Instant};

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn press(col: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row))
    }

    #[test]
    fn test_show_and_escape() {
        let mut modal = Modal::message("Hello", "body");
        assert!(!modal.is_open());

        modal.show(SCREEN);
        assert!(modal.is_open());

        assert!(modal.handle_event(&Event::Key(Key::Esc)));
        assert!(!modal.is_open());
        assert_eq!(
            modal.overlay().last_close_reason(),
            Some(CloseReason::Escape)
        );
    }

    #[test]
    fn test_on_close_fires_once() {
        use std::cell::Cell;
        use std::rc::Rc;

        let closes = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&closes);
        let mut modal =
            Modal::message("T", "b").with_on_close(move || counter.set(counter.get() + 1));

        modal.show(SCREEN);
        modal.close();
        modal.close();
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_outside_press_dismisses() {
        let mut modal = Modal::message("T", "b");
        modal.show(SCREEN);

        let later = Instant::now() + Duration::from_secs(1);
        assert!(modal.overlay_mut().handle_event_at(&press(0, 0), later));
        assert!(!modal.is_open());
        assert_eq!(
            modal.overlay().last_close_reason(),
            Some(CloseReason::OutsidePointer)
        );
    }

    #[test]
    fn test_inside_press_keeps_open() {
        let mut modal = Modal::message("T", "b");
        modal.show(SCREEN);
        let panel = modal.panel_bounds.get().unwrap();

        let later = Instant::now() + Duration::from_secs(1);
        let inside = press(panel.x + 2, panel.y + 1);
        assert!(!modal.overlay_mut().handle_event_at(&inside, later));
        assert!(modal.is_open());
    }

    #[test]
    fn test_tab_cycles_focusables() {
        let mut modal = Modal::message("T", "b")
            .with_focusables(vec!["ok".to_string(), "cancel".to_string()]);
        modal.show(SCREEN);
        assert_eq!(modal.focused_child(), Some("ok"));

        assert!(modal.handle_event(&Event::Key(Key::Tab)));
        assert_eq!(modal.focused_child(), Some("cancel"));
        assert!(modal.handle_event(&Event::Key(Key::Tab)));
        assert_eq!(modal.focused_child(), Some("ok")); // wrap

        assert!(modal.handle_event(&Event::Key(Key::BackTab)));
        assert_eq!(modal.focused_child(), Some("cancel"));
    }

    #[test]
    fn test_trap_swallows_unhandled_input() {
        let mut modal = Modal::message("T", "b");
        modal.show(SCREEN);
        assert!(modal.handle_event(&Event::Key(Key::Char('x'))));

        let mut open_gate = Modal::message("T", "b").with_trap_focus(false);
        open_gate.show(SCREEN);
        assert!(!open_gate.handle_event(&Event::Key(Key::Char('x'))));
    }

    #[test]
    fn test_closed_modal_ignores_input() {
        let mut modal = Modal::message("T", "b");
        assert!(!modal.handle_event(&Event::Key(Key::Esc)));
        assert!(!modal.handle_event(&Event::Key(Key::Char('x'))));
    }

    #[test]
    fn test_close_button_press() {
        let theme = Theme::default();
        let mut modal = Modal::message("T", "b");
        modal.show(SCREEN);

        let mut r = Renderer::headless();
        modal.render(&mut r, SCREEN, &theme).unwrap();
        let button = modal.close_button.get().unwrap();

        assert!(modal.handle_event(&press(button.x, button.y)));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_size_and_position() {
        let modal = Modal::message("T", "b").with_size(ModalSize::Small);
        let b = modal.calculate_bounds(SCREEN);
        assert_eq!(b.width, 32);
        assert_eq!(b.x, 24); // centered

        let top = Modal::message("T", "b").with_position(ModalPosition::Top);
        assert_eq!(top.calculate_bounds(SCREEN).y, 1);

        let bottom = Modal::message("T", "b").with_position(ModalPosition::Bottom);
        let bb = bottom.calculate_bounds(SCREEN);
        assert_eq!(bb.bottom(), 23);
    }

    #[test]
    fn test_render_title_and_body() {
        let theme = Theme::default();
        let mut modal = Modal::message("Confirm", "Delete the file?");
        modal.show(SCREEN);

        let mut r = Renderer::headless();
        modal.render(&mut r, SCREEN, &theme).unwrap();
        let out = r.captured_text().unwrap();
        assert!(out.contains("Confirm"));
        assert!(out.contains("Delete the file?"));
        assert!(out.contains('✕'));
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        let theme = Theme::default();
        let mut modal = Modal::message("T", "b");
        let mut r = Renderer::headless();
        modal.render(&mut r, SCREEN, &theme).unwrap();
        assert!(r.captured_text().unwrap().is_empty());
    }
}
