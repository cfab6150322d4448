//! tuft - a small terminal UI widget library
//!
//! Reusable widgets (buttons, search fields, paginated lists, dynamic
//! forms) built around one shared piece of real machinery: the
//! [`overlay::OverlayController`], which gives every popover-style widget
//! (dropdown menus, modal dialogs) the same open/close lifecycle,
//! keyboard traversal, focus cycling, and dismissal behavior without
//! leaking input subscriptions.

pub mod component;
pub mod components;
pub mod event;
pub mod layout;
pub mod overlay;
pub mod render;
pub mod theme;

// Re-export commonly used types
pub use component::Component;
pub use components::{
    Button, DropdownMenu, FieldKind, FieldValue, Form, FormField, List, ListMarker, MenuItem,
    Modal, ModalPosition, ModalSize, SearchBar, SelectOption,
};
pub use event::{Event, EventHandler, EventPoller, Key, MouseButton, MouseEvent};
pub use layout::Rect;
pub use overlay::{
    CloseReason, ComponentId, DismissSignal, DismissalWatcher, Direction, FocusRing,
    OverlayController, OverlayHost, TraversalIndex,
};
pub use render::Renderer;
pub use theme::{BorderChars, BorderStyle, Color, Theme};
