//! Dropdown menu - a trigger button that opens an item panel
//!
//! The menu binds an [`OverlayController`] for its whole lifecycle:
//! keyboard traversal, Escape, outside presses, and selection all go
//! through the controller, while this widget maps input coordinates to
//! item rows and draws the panel.

use crate::component::Component;
use crate::event::{Event, EventHandler, Key, MouseButton, MouseEvent};
use crate::layout::Rect;
use crate::overlay::{OverlayController, OverlayHost};
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;
use std::cell::Cell;
use std::rc::Rc;
use unicode_width::UnicodeWidthStr;

use super::pad_clip;

const MIN_PANEL_INNER: usize = 10;

/// One selectable entry, carrying an opaque value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<T> {
    pub value: T,
    pub label: String,
    pub icon: Option<String>,
}

impl<T> MenuItem<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        MenuItem {
            value,
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Dropdown menu widget
///
/// Closed, it renders as a trigger button. Enter, Space, Down, or a
/// press on the trigger opens the panel; the controller then owns
/// navigation and dismissal. Selections are consumed by polling:
///
/// ```
/// use tuft::components::{DropdownMenu, MenuItem};
/// use tuft::event::{Event, EventHandler, Key};
///
/// let mut menu = DropdownMenu::new(
///     "Menu",
///     vec![MenuItem::new(1, "Dashboard"), MenuItem::new(2, "Settings")],
/// );
/// menu.set_focused(true);
/// menu.handle_event(&Event::Key(Key::Enter)); // open
/// menu.handle_event(&Event::Key(Key::Down));
/// menu.handle_event(&Event::Key(Key::Down));
/// menu.handle_event(&Event::Key(Key::Enter)); // pick "Settings"
/// assert_eq!(menu.take_selection(), Some(1));
/// ```
pub struct DropdownMenu<T> {
    label: String,
    items: Vec<MenuItem<T>>,
    controller: OverlayController,
    trigger_bounds: Rc<Cell<Option<Rect>>>,
    content_bounds: Rc<Cell<Option<Rect>>>,
    pending: Option<usize>,
    focused: bool,
    dirty: bool,
}

impl<T> DropdownMenu<T> {
    pub fn new(label: impl Into<String>, items: Vec<MenuItem<T>>) -> Self {
        let trigger_bounds = Rc::new(Cell::new(None));
        let content_bounds = Rc::new(Cell::new(None));

        let trigger = Rc::clone(&trigger_bounds);
        let content = Rc::clone(&content_bounds);
        let controller = OverlayController::new(items.len())
            .with_trigger_id("dropdown-trigger")
            .with_trigger_region(move || trigger.get())
            .with_content_region(move || content.get());

        DropdownMenu {
            label: label.into(),
            items,
            controller,
            trigger_bounds,
            content_bounds,
            pending: None,
            focused: false,
            dirty: true,
        }
    }

    /// Forward selections to a callback as well as the polling API
    pub fn with_on_select(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.controller.set_on_select(f);
        self
    }

    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    /// Replace the items, keeping the controller's count in sync
    pub fn set_items(&mut self, items: Vec<MenuItem<T>>) {
        self.controller.set_item_count(items.len());
        self.items = items;
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

    /// Consume the index of the last selection
    pub fn take_selection(&mut self) -> Option<usize> {
        self.pending.take()
    }

    /// Consume the last selection as its item
    pub fn take_selected(&mut self) -> Option<&MenuItem<T>> {
        let index = self.pending.take()?;
        self.items.get(index)
    }

    /// Panel rectangle below the trigger, from the last rendered trigger
    fn panel_rect(&self) -> Option<Rect> {
        let trigger = self.trigger_bounds.get()?;
        let inner = self
            .items
            .iter()
            .map(|item| {
                let icon = item
                    .icon
                    .as_deref()
                    .map(|i| UnicodeWidthStr::width(i) + 1)
                    .unwrap_or(0);
                UnicodeWidthStr::width(item.label.as_str()) + icon
            })
            .max()
            .unwrap_or(0)
            .max(MIN_PANEL_INNER);
        Some(Rect::new(
            trigger.x,
            trigger.y.saturating_add(1),
            inner as u16 + 2,
            self.items.len() as u16 + 2,
        ))
    }

    fn open_menu(&mut self) {
        // Arm with the panel position so outside presses are judged
        // against where the panel will be drawn.
        self.content_bounds.set(self.panel_rect());
        self.controller.open();
        self.dirty = true;
    }

    /// Map a cell position to an item row inside the open panel
    fn row_at(&self, col: u16, row: u16) -> Option<usize> {
        let panel = self.content_bounds.get()?;
        if col <= panel.x || col + 1 >= panel.right() {
            return None;
        }
        let first = panel.y + 1;
        if row < first {
            return None;
        }
        let index = (row - first) as usize;
        (index < self.items.len()).then_some(index)
    }
}

impl<T> std::fmt::Debug for DropdownMenu<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownMenu")
            .field("label", &self.label)
            .field("items", &self.items.len())
            .field("open", &self.controller.is_open())
            .finish()
    }
}

impl<T> EventHandler for DropdownMenu<T> {
    fn handle_event(&mut self, event: &Event) -> bool {
        // Trigger presses toggle regardless of state; the controller
        // never treats them as outside interaction.
        if let Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row)) = event {
            if self
                .trigger_bounds
                .get()
                .is_some_and(|r| r.contains(*col, *row))
            {
                if self.controller.is_open() {
                    self.controller.close();
                } else {
                    self.open_menu();
                }
                self.dirty = true;
                return true;
            }
        }

        if !self.controller.is_open() {
            if !self.focused {
                return false;
            }
            return match event {
                Event::Key(Key::Enter) | Event::Key(Key::Char(' ')) | Event::Key(Key::Down) => {
                    self.open_menu();
                    true
                }
                _ => false,
            };
        }

        match event {
            Event::Key(Key::Enter) => {
                if let Some(index) = self.controller.activate_current() {
                    self.pending = Some(index);
                }
                self.dirty = true;
                true
            }
            Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row)) => {
                if let Some(index) = self.row_at(*col, *row) {
                    if let Some(picked) = self.controller.select(index) {
                        self.pending = Some(picked);
                    }
                    self.dirty = true;
                    return true;
                }
                let consumed = self.controller.handle_event(event);
                if consumed {
                    self.dirty = true;
                }
                consumed
            }
            Event::Mouse(MouseEvent::Hold(col, row)) => {
                if let Some(index) = self.row_at(*col, *row) {
                    if self.controller.highlight(index) {
                        self.dirty = true;
                    }
                    return true;
                }
                false
            }
            _ => {
                let consumed = self.controller.handle_event(event);
                if consumed {
                    self.dirty = true;
                }
                consumed
            }
        }
    }

    fn on_focus(&mut self) {
        self.set_focused(true);
    }

    fn on_blur(&mut self) {
        self.set_focused(false);
    }
}

impl<T> Component for DropdownMenu<T> {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, theme: &Theme) -> Result<()> {
        if bounds.is_empty() {
            return Ok(());
        }

        // Trigger
        let text = format!("{} ▼", self.label);
        let trigger = Rect::new(
            bounds.x,
            bounds.y,
            (UnicodeWidthStr::width(text.as_str()) as u16).min(bounds.width),
            1,
        );
        self.trigger_bounds.set(Some(trigger));

        let style = if self.focused && !self.controller.is_open() {
            format!("{}{}", theme.accent_style(), theme.focus_style())
        } else {
            theme.accent_style()
        };
        renderer.move_cursor(trigger.x, trigger.y)?;
        renderer.write_styled(&text, &style)?;

        if !self.controller.is_open() {
            self.content_bounds.set(None);
            self.dirty = false;
            return Ok(());
        }

        // Panel
        let Some(panel) = self.panel_rect() else {
            self.dirty = false;
            return Ok(());
        };
        self.content_bounds.set(Some(panel));

        let border = theme.border_chars();
        let inner = panel.width as usize - 2;
        if let Some(b) = border {
            let mut top = String::new();
            top.push(b.top_left);
            for _ in 0..inner {
                top.push(b.horizontal);
            }
            top.push(b.top_right);
            renderer.move_cursor(panel.x, panel.y)?;
            renderer.write_styled(&top, &theme.muted_style())?;
        }

        for (i, item) in self.items.iter().enumerate() {
            let row = panel.y + 1 + i as u16;
            renderer.move_cursor(panel.x, row)?;
            if let Some(b) = border {
                renderer.write_styled(&b.vertical.to_string(), &theme.muted_style())?;
            }

            let icon_width = item
                .icon
                .as_deref()
                .map(|i| UnicodeWidthStr::width(i) + 1)
                .unwrap_or(0);
            let label = pad_clip(&item.label, inner.saturating_sub(icon_width));
            let style = if self.controller.focused_index() == Some(i) {
                theme.highlight_style()
            } else {
                theme.text_style()
            };
            renderer.write_styled(&label, &style)?;
            if let Some(icon) = &item.icon {
                renderer.write_styled(&format!(" {}", icon), &theme.muted_style())?;
            }

            if let Some(b) = border {
                renderer.write_styled(&b.vertical.to_string(), &theme.muted_style())?;
            }
        }

        if let Some(b) = border {
            let mut bottom = String::new();
            bottom.push(b.bottom_left);
            for _ in 0..inner {
                bottom.push(b.horizontal);
            }
            bottom.push(b.bottom_right);
            renderer.move_cursor(panel.x, panel.y + panel.height - 1)?;
            renderer.write_styled(&bottom, &theme.muted_style())?;
        }

        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        (self.label.chars().count() as u16 + 2, 1)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "DropdownMenu"
    }
}

impl<T> OverlayHost for DropdownMenu<T> {
    fn overlay(&self) -> &OverlayController {
        &self.controller
    }

    fn overlay_mut(&mut self) -> &mut OverlayController {
        &mut self.controller
    }
}
