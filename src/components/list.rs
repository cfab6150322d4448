//! Paginated list component
//!
//! Parametric over an opaque item type: the host supplies a label
//! renderer and, optionally, an icon renderer. Items are shown one page
//! at a time with a page indicator footer.

use crate::component::Component;
use crate::event::{Event, EventHandler, Key};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use super::{clip, pad_clip};

const DEFAULT_PER_PAGE: usize = 10;

/// Marker drawn before each item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMarker {
    /// Bullet point
    #[default]
    Bullet,
    /// 1-based item number
    Numbered,
}

type LabelFn<T> = Box<dyn Fn(&T) -> String>;
type IconFn<T> = Box<dyn Fn(&T) -> String>;

/// Paginated list over items of any type
pub struct List<T> {
    items: Vec<T>,
    render_label: LabelFn<T>,
    render_icon: Option<IconFn<T>>,
    marker: ListMarker,
    per_page: usize,
    page: usize, // 0-based
    focused: bool,
    dirty: bool,
}

impl<T> List<T> {
    /// Create a list with a label renderer
    pub fn new(items: Vec<T>, render_label: impl Fn(&T) -> String + 'static) -> Self {
        List {
            items,
            render_label: Box::new(render_label),
            render_icon: None,
            marker: ListMarker::Bullet,
            per_page: DEFAULT_PER_PAGE,
            page: 0,
            focused: false,
            dirty: true,
        }
    }

    /// Icon renderer, drawn right-aligned on each row
    pub fn with_icon(mut self, render_icon: impl Fn(&T) -> String + 'static) -> Self {
        self.render_icon = Some(Box::new(render_icon));
        self
    }

    pub fn with_marker(mut self, marker: ListMarker) -> Self {
        self.marker = marker;
        self
    }

    /// Items per page; zero is treated as one
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace items, clamping the current page into range
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = self.page.min(self.page_count() - 1);
        self.dirty = true;
    }

    /// Current page, 0-based
    pub fn page(&self) -> usize {
        self.page
    }

    /// Total number of pages, at least one
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.per_page).max(1)
    }

    /// Jump to a page, clamped into range
    pub fn set_page(&mut self, page: usize) {
        let clamped = page.min(self.page_count() - 1);
        if clamped != self.page {
            self.page = clamped;
            self.dirty = true;
        }
    }

    /// Advance one page; false when already on the last
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            self.dirty = true;
            true
        } else {
            false
        }
    }

    /// Go back one page; false when already on the first
    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            self.dirty = true;
            true
        } else {
            false
        }
    }

    /// Index range of the items on the current page
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.page * self.per_page;
        let end = (start + self.per_page).min(self.items.len());
        start.min(end)..end
    }

    /// Items on the current page
    pub fn visible(&self) -> &[T] {
        &self.items[self.visible_range()]
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
}

impl<T> std::fmt::Debug for List<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("List")
            .field("len", &self.items.len())
            .field("marker", &self.marker)
            .field("per_page", &self.per_page)
            .field("page", &self.page)
            .finish()
    }
}

impl<T> EventHandler for List<T> {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.focused {
            return false;
        }
        match event {
            Event::Key(Key::PageDown) | Event::Key(Key::Right) => self.next_page(),
            Event::Key(Key::PageUp) | Event::Key(Key::Left) => self.prev_page(),
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

impl<T> Component for List<T> {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, theme: &Theme) -> Result<()> {
        if bounds.is_empty() {
            return Ok(());
        }

        if self.items.is_empty() {
            renderer.move_cursor(bounds.x, bounds.y)?;
            renderer.write_styled("(empty)", &theme.muted_style())?;
            return Ok(());
        }

        let range = self.visible_range();
        let width = bounds.width as usize;
        let footer_rows = usize::from(self.page_count() > 1);
        let item_rows = (bounds.height as usize).saturating_sub(footer_rows);

        for (row, idx) in range.clone().enumerate().take(item_rows) {
            let item = &self.items[idx];
            renderer.move_cursor(bounds.x, bounds.y + row as u16)?;

            let marker = match self.marker {
                ListMarker::Bullet => "• ".to_string(),
                ListMarker::Numbered => format!("{:>2}. ", idx + 1),
            };
            renderer.write_styled(&marker, &theme.muted_style())?;

            let icon = self.render_icon.as_ref().map(|f| f(item));
            let icon_width = icon
                .as_deref()
                .map(|i| UnicodeWidthStr::width(i) + 1)
                .unwrap_or(0);
            let label_width = width
                .saturating_sub(UnicodeWidthStr::width(marker.as_str()))
                .saturating_sub(icon_width);
            let label = (self.render_label)(item);
            renderer.write_styled(&pad_clip(&label, label_width), &theme.text_style())?;

            if let Some(icon) = icon {
                renderer.write_text(" ")?;
                renderer.write_styled(&icon, &theme.muted_style())?;
            }
        }

        if footer_rows > 0 {
            let mut footer = String::new();
            for p in 0..self.page_count() {
                if p == self.page {
                    footer.push_str(&format!("[{}] ", p + 1));
                } else {
                    footer.push_str(&format!(" {}  ", p + 1));
                }
            }
            renderer.move_cursor(bounds.x, bounds.y + bounds.height - 1)?;
            renderer.write_styled(&clip(footer.trim_end(), width), &theme.accent_style())?;
        }

        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        (16, 2)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "List"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> List<u32> {
        List::new((0..n as u32).collect(), |i| format!("item {}", i))
    }

    #[test]
    fn test_page_count() {
        assert_eq!(numbers(0).page_count(), 1);
        assert_eq!(numbers(10).page_count(), 1);
        assert_eq!(numbers(11).page_count(), 2);
        assert_eq!(numbers(25).with_per_page(5).page_count(), 5);
    }

    #[test]
    fn test_pagination_navigation() {
        let mut list = numbers(25).with_per_page(10);
        assert_eq!(list.page(), 0);
        assert_eq!(list.visible_range(), 0..10);

        assert!(list.next_page());
        assert_eq!(list.visible_range(), 10..20);

        assert!(list.next_page());
        assert_eq!(list.visible_range(), 20..25);
        assert!(!list.next_page()); // last page

        assert!(list.prev_page());
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut list = numbers(25).with_per_page(10);
        list.set_page(99);
        assert_eq!(list.page(), 2);
    }

    #[test]
    fn test_set_items_reclamps_page() {
        let mut list = numbers(30).with_per_page(10);
        list.set_page(2);

        list.set_items(vec![1, 2, 3]);
        assert_eq!(list.page(), 0);
    }

    #[test]
    fn test_keyboard_paging() {
        let mut list = numbers(15).with_per_page(10);
        list.set_focused(true);

        assert!(list.handle_event(&Event::Key(Key::PageDown)));
        assert_eq!(list.page(), 1);
        assert!(list.handle_event(&Event::Key(Key::Left)));
        assert_eq!(list.page(), 0);
        assert!(!list.handle_event(&Event::Key(Key::PageUp)));
    }

    #[test]
    fn test_render_markers_and_footer() {
        let theme = Theme::default();
        let mut list = numbers(12).with_per_page(10).with_marker(ListMarker::Numbered);
        let mut r = Renderer::headless();
        list.render(&mut r, Rect::new(0, 0, 30, 12), &theme).unwrap();

        let out = r.captured_text().unwrap();
        assert!(out.contains(" 1. "));
        assert!(out.contains("[1]"));
        assert!(out.contains("2")); // second page indicator
    }

    #[test]
    fn test_render_icons() {
        let theme = Theme::default();
        let mut list = List::new(vec!["a"], |s| s.to_string()).with_icon(|_| "★".to_string());
        let mut r = Renderer::headless();
        list.render(&mut r, Rect::new(0, 0, 20, 3), &theme).unwrap();
        assert!(r.captured_text().unwrap().contains('★'));
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let theme = Theme::default();
        let mut list: List<u32> = List::new(Vec::new(), |i| i.to_string());
        let mut r = Renderer::headless();
        list.render(&mut r, Rect::new(0, 0, 20, 3), &theme).unwrap();
        assert!(r.captured_text().unwrap().contains("(empty)"));
    }
}
