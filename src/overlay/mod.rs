//! Overlay interaction core
//!
//! Every popover-style widget (dropdown menu, modal dialog) binds to one
//! [`OverlayController`], which owns the open/closed lifecycle, keyboard
//! traversal over the overlay's items, Tab cycling around its focusable
//! elements, and dismissal on escape or outside pointer interaction.
//!
//! The controller is created once per widget instance and toggled for the
//! widget's whole life. All transitions run synchronously inside the
//! handler of the input event that caused them; instances are fully
//! independent of each other.
//!
//! # Example
//!
//! ```
//! use tuft::overlay::{Direction, OverlayController};
//!
//! let mut ctrl = OverlayController::new(3);
//! ctrl.open();
//! ctrl.navigate(Direction::Next);
//! ctrl.navigate(Direction::Next);
//! assert_eq!(ctrl.focused_index(), Some(1));
//!
//! let picked = ctrl.activate_current();
//! assert_eq!(picked, Some(1));
//! assert!(!ctrl.is_open());
//! ```

mod dismiss;
mod host;
mod ring;
mod traversal;

pub use dismiss::{DismissSignal, DismissalWatcher};
pub use host::OverlayHost;
pub use ring::{ComponentId, FocusRing};
pub use traversal::TraversalIndex;

use crate::event::{Event, Key};
use crate::layout::Rect;
use std::time::Instant;

/// Traversal and focus-cycling direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Why an overlay transitioned to closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Host called `close()` or `toggle()`
    Explicit,
    /// Escape key
    Escape,
    /// Pointer interaction outside trigger and content
    OutsidePointer,
    /// An item was activated or selected
    Selection,
}

type RegionFn = Box<dyn Fn() -> Option<Rect>>;
type FocusablesFn = Box<dyn Fn() -> Vec<ComponentId>>;
type SelectFn = Box<dyn FnMut(usize)>;
type CloseFn = Box<dyn FnMut()>;
type FocusFn = Box<dyn FnMut(&str)>;

/// The open/closed state machine every popover widget binds to
///
/// Composes a [`TraversalIndex`] (item highlight), a [`FocusRing`]
/// (Tab order snapshot), and a [`DismissalWatcher`] (escape and
/// outside-press detection). Trigger and content positions are read
/// through provider closures each time they are needed, so the host can
/// relayout freely; a provider that is missing or returns `None` simply
/// disables the features depending on it for that episode.
pub struct OverlayController {
    open: bool,
    traversal: TraversalIndex,
    ring: FocusRing,
    focused_element: Option<ComponentId>,
    watcher: DismissalWatcher,
    trigger_id: Option<ComponentId>,
    trigger_region: Option<RegionFn>,
    content_region: Option<RegionFn>,
    focusables: Option<FocusablesFn>,
    on_select: Option<SelectFn>,
    on_close: Option<CloseFn>,
    on_focus: Option<FocusFn>,
    last_close: Option<CloseReason>,
}

impl std::fmt::Debug for OverlayController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayController")
            .field("open", &self.open)
            .field("traversal", &self.traversal)
            .field("ring", &self.ring)
            .field("focused_element", &self.focused_element)
            .field("last_close", &self.last_close)
            .finish()
    }
}

impl OverlayController {
    /// Create a closed controller over `item_count` navigable items
    pub fn new(item_count: usize) -> Self {
        OverlayController {
            open: false,
            traversal: TraversalIndex::new(item_count),
            ring: FocusRing::default(),
            focused_element: None,
            watcher: DismissalWatcher::new(),
            trigger_id: None,
            trigger_region: None,
            content_region: None,
            focusables: None,
            on_select: None,
            on_close: None,
            on_focus: None,
            last_close: None,
        }
    }

    /// Provider for the trigger element's current screen region
    pub fn with_trigger_region(mut self, f: impl Fn() -> Option<Rect> + 'static) -> Self {
        self.trigger_region = Some(Box::new(f));
        self
    }

    /// Provider for the overlay content's current screen region
    pub fn with_content_region(mut self, f: impl Fn() -> Option<Rect> + 'static) -> Self {
        self.content_region = Some(Box::new(f));
        self
    }

    /// Identifier focus returns to when the overlay closes
    pub fn with_trigger_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.trigger_id = Some(id.into());
        self
    }

    /// Provider for the focusable element ids inside the content,
    /// snapshotted into the [`FocusRing`] each time the overlay opens
    pub fn with_focusables(mut self, f: impl Fn() -> Vec<ComponentId> + 'static) -> Self {
        self.focusables = Some(Box::new(f));
        self
    }

    /// Callback invoked exactly once per successful activate/select
    pub fn with_on_select(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.set_on_select(f);
        self
    }

    /// Callback invoked on every transition to closed, whatever the cause
    pub fn with_on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.set_on_close(f);
        self
    }

    /// Callback invoked when focus should move to an element
    pub fn with_on_focus(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.set_on_focus(f);
        self
    }

    pub fn set_on_select(&mut self, f: impl FnMut(usize) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    pub fn set_on_close(&mut self, f: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(f));
    }

    pub fn set_on_focus(&mut self, f: impl FnMut(&str) + 'static) {
        self.on_focus = Some(Box::new(f));
    }

    /// Current lifecycle state
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Highlighted item index; always `None` while closed
    pub fn focused_index(&self) -> Option<usize> {
        if self.open {
            self.traversal.current()
        } else {
            None
        }
    }

    /// Element currently holding focus within the ring
    pub fn focused_element(&self) -> Option<&str> {
        self.focused_element.as_deref()
    }

    /// Number of navigable items
    pub fn item_count(&self) -> usize {
        self.traversal.len()
    }

    /// Update the navigable item count (lists may change while open)
    pub fn set_item_count(&mut self, count: usize) {
        self.traversal.set_count(count);
    }

    /// Whether the open overlay captured any focusable element
    ///
    /// An empty ring is a benign state, not an error; the host may keep
    /// default focus on the trigger.
    pub fn has_focus_targets(&self) -> bool {
        !self.ring.is_empty()
    }

    /// Why the overlay last closed
    pub fn last_close_reason(&self) -> Option<CloseReason> {
        self.last_close
    }

    /// Open the overlay; no-op if already open
    pub fn open(&mut self) {
        self.open_at(Instant::now());
    }

    /// Open at an explicit timestamp (deterministic hosts and tests)
    pub fn open_at(&mut self, now: Instant) {
        if self.open {
            return;
        }

        self.traversal.reset();
        self.ring = match &self.focusables {
            Some(f) => FocusRing::capture(f()),
            None => FocusRing::default(),
        };
        self.focused_element = self.ring.first().cloned();
        if let Some(id) = self.focused_element.clone() {
            self.emit_focus(&id);
        }

        let trigger = self.trigger_region.as_ref().and_then(|f| f());
        let content = self.content_region.as_ref().and_then(|f| f());
        self.watcher.arm(now, trigger, content);
        self.open = true;
    }

    /// Close the overlay; no-op if already closed
    pub fn close(&mut self) {
        self.close_with(CloseReason::Explicit);
    }

    /// Toggle between open and closed
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Re-snapshot the focus ring while open
    ///
    /// The ring is deliberately a snapshot; hosts that mutate overlay
    /// content call this to pick up the new tab order.
    pub fn refresh_focusables(&mut self) {
        if !self.open {
            return;
        }
        self.ring = match &self.focusables {
            Some(f) => FocusRing::capture(f()),
            None => FocusRing::default(),
        };
        let still_present = self
            .focused_element
            .as_deref()
            .is_some_and(|id| self.ring.contains(id));
        if !still_present {
            self.focused_element = self.ring.first().cloned();
            if let Some(id) = self.focused_element.clone() {
                self.emit_focus(&id);
            }
        }
    }

    /// Move the item highlight; wraps at both ends, inert when empty or closed
    pub fn navigate(&mut self, direction: Direction) {
        if !self.open {
            return;
        }
        match direction {
            Direction::Next => self.traversal.next(),
            Direction::Previous => self.traversal.previous(),
        };
    }

    /// Highlight a specific item (pointer hover); inert when out of range
    pub fn highlight(&mut self, index: usize) -> bool {
        self.open && self.traversal.focus(index)
    }

    /// Move ring focus forward or backward, wrapping; false on an empty ring
    pub fn cycle_focus(&mut self, direction: Direction) -> bool {
        if !self.open {
            return false;
        }
        let next = self
            .ring
            .cycle_from(self.focused_element.as_deref(), direction)
            .cloned();
        match next {
            Some(id) => {
                self.focused_element = Some(id.clone());
                self.emit_focus(&id);
                true
            }
            None => false,
        }
    }

    /// Report the highlighted item to the host and close
    ///
    /// No-op (stays open, no callback) when nothing is highlighted.
    pub fn activate_current(&mut self) -> Option<usize> {
        if !self.open {
            return None;
        }
        let index = self.traversal.current()?;
        if let Some(cb) = self.on_select.as_mut() {
            cb(index);
        }
        self.close_with(CloseReason::Selection);
        Some(index)
    }

    /// Pointer-driven direct selection, bypassing traversal
    ///
    /// Out-of-range indices are tolerated as no-ops.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if !self.open || index >= self.traversal.len() {
            return None;
        }
        if let Some(cb) = self.on_select.as_mut() {
            cb(index);
        }
        self.close_with(CloseReason::Selection);
        Some(index)
    }

    /// Feed a global input event; returns whether it was consumed
    ///
    /// Always false while closed - a closed controller reacts to nothing.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.handle_event_at(event, Instant::now())
    }

    /// Deterministic variant of [`handle_event`](Self::handle_event)
    pub fn handle_event_at(&mut self, event: &Event, now: Instant) -> bool {
        if !self.open {
            return false;
        }

        match self.watcher.observe(event, now) {
            Some(DismissSignal::EscapeRequested) => {
                self.close_with(CloseReason::Escape);
                return true;
            }
            Some(DismissSignal::OutsideInteraction) => {
                self.close_with(CloseReason::OutsidePointer);
                return true;
            }
            None => {}
        }

        match event {
            Event::Key(Key::Down) => {
                if self.traversal.is_empty() {
                    false
                } else {
                    self.navigate(Direction::Next);
                    true
                }
            }
            Event::Key(Key::Up) => {
                if self.traversal.is_empty() {
                    false
                } else {
                    self.navigate(Direction::Previous);
                    true
                }
            }
            Event::Key(Key::Tab) => self.cycle_focus(Direction::Next),
            Event::Key(Key::BackTab) => self.cycle_focus(Direction::Previous),
            Event::Key(Key::Enter) => self.activate_current().is_some(),
            _ => false,
        }
    }

    fn close_with(&mut self, reason: CloseReason) {
        if !self.open {
            return;
        }
        // Flip first so callbacks re-entering close() are no-ops.
        self.open = false;
        self.watcher.disarm();
        self.ring.clear();
        self.traversal.reset();
        self.focused_element = None;

        // Return focus to the trigger if it is still attached.
        let attached = match &self.trigger_region {
            Some(region) => region().is_some(),
            None => true,
        };
        if attached {
            if let Some(id) = self.trigger_id.clone() {
                self.emit_focus(&id);
            }
        }

        self.last_close = Some(reason);
        if let Some(cb) = self.on_close.as_mut() {
            cb();
        }
    }

    fn emit_focus(&mut self, id: &str) {
        if let Some(cb) = self.on_focus.as_mut() {
            cb(id);
        }
    }
}

impl Drop for OverlayController {
    fn drop(&mut self) {
        // One disarm per arm, even on abrupt teardown.
        self.watcher.disarm();
    }
}
