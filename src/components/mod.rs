//! Built-in widgets
//!
//! Presentational widgets (Button, SearchBar, List, Form) map
//! configuration into output and forward user events; DropdownMenu and
//! Modal additionally bind an overlay controller.

mod button;
mod dropdown;
mod form;
mod list;
mod modal;
mod search_bar;

pub use button::Button;
pub use dropdown::{DropdownMenu, MenuItem};
pub use form::{FieldKind, FieldValue, Form, FormField, SelectOption};
pub use list::{List, ListMarker};
pub use modal::{Modal, ModalPosition, ModalSize};
pub use search_bar::SearchBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Clip text to a display width, appending an ellipsis when truncated
pub(crate) fn clip(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Clip then pad with spaces to exactly `max` display columns
pub(crate) fn pad_clip(text: &str, max: usize) -> String {
    let mut out = clip(text, max);
    let used = UnicodeWidthStr::width(out.as_str());
    for _ in used..max {
        out.push(' ');
    }
    out
}
