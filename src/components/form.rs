//! Dynamic form - declarative fields with required-field validation

use crate::component::Component;
use crate::event::{Event, EventHandler, Key};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;
use std::collections::HashMap;

use super::pad_clip;

/// An option of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        SelectOption {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Input kind of a form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Date,
    TextArea,
    Checkbox,
    Select(Vec<SelectOption>),
}

/// Declarative description of one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        FormField {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Current value of a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Blank values fail required-field validation
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(b) => !b,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

/// A form built from a field list
///
/// Tab/Shift-Tab move between fields; characters edit the active text
/// field, Space toggles checkboxes, Left/Right cycle select options,
/// Enter submits. Submission validates required fields and either
/// records per-field errors or makes the values available through
/// `take_submission()`.
#[derive(Debug)]
pub struct Form {
    fields: Vec<FormField>,
    values: HashMap<String, FieldValue>,
    errors: HashMap<String, String>,
    active: usize,
    submitted: Option<HashMap<String, FieldValue>>,
    focused: bool,
    dirty: bool,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        let values = fields
            .iter()
            .map(|f| {
                let initial = match f.kind {
                    FieldKind::Checkbox => FieldValue::Flag(false),
                    FieldKind::Number => FieldValue::Text("0".to_string()),
                    _ => FieldValue::Text(String::new()),
                };
                (f.name.clone(), initial)
            })
            .collect();
        Form {
            fields,
            values,
            errors: HashMap::new(),
            active: 0,
            submitted: None,
            focused: false,
            dirty: true,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn values(&self) -> &HashMap<String, FieldValue> {
        &self.values
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Name of the field currently being edited
    pub fn active_field(&self) -> Option<&str> {
        self.fields.get(self.active).map(|f| f.name.as_str())
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

    /// Set a text-like field's value, clearing its error
    pub fn set_text(&mut self, name: &str, text: impl Into<String>) {
        if let Some(v) = self.values.get_mut(name) {
            *v = FieldValue::Text(text.into());
            self.errors.remove(name);
            self.dirty = true;
        }
    }

    /// Toggle a checkbox field, clearing its error
    pub fn toggle(&mut self, name: &str) {
        if let Some(FieldValue::Flag(b)) = self.values.get_mut(name) {
            *b = !*b;
            self.errors.remove(name);
            self.dirty = true;
        }
    }

    /// Move to the next field, wrapping
    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
            self.dirty = true;
        }
    }

    /// Move to the previous field, wrapping
    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + self.fields.len() - 1) % self.fields.len();
            self.dirty = true;
        }
    }

    /// Cycle a select field's value through its options
    fn cycle_option(&mut self, name: &str, forward: bool) {
        let Some(field) = self.fields.iter().find(|f| f.name == name) else {
            return;
        };
        let FieldKind::Select(options) = &field.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }

        let current = self
            .values
            .get(name)
            .and_then(FieldValue::as_text)
            .and_then(|v| options.iter().position(|o| o.value == v));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
            (None, true) => 0,
            (None, false) => options.len() - 1,
        };
        let value = options[next].value.clone();
        self.set_text(name, value);
    }

    /// Validate and record a submission; true when valid
    ///
    /// Each blank required field gets a "<label> is required." error.
    pub fn submit(&mut self) -> bool {
        self.errors.clear();
        for field in &self.fields {
            let blank = self
                .values
                .get(&field.name)
                .map(FieldValue::is_blank)
                .unwrap_or(true);
            if field.required && blank {
                self.errors
                    .insert(field.name.clone(), format!("{} is required.", field.label));
            }
        }
        self.dirty = true;
        if self.errors.is_empty() {
            self.submitted = Some(self.values.clone());
            true
        } else {
            false
        }
    }

    /// Consume the values of the last valid submission
    pub fn take_submission(&mut self) -> Option<HashMap<String, FieldValue>> {
        self.submitted.take()
    }

    fn edit_active(&mut self, event: &Event) -> bool {
        let Some(field) = self.fields.get(self.active).cloned() else {
            return false;
        };
        match (&field.kind, event) {
            (FieldKind::Checkbox, Event::Key(Key::Char(' '))) => {
                self.toggle(&field.name);
                true
            }
            (FieldKind::Select(_), Event::Key(Key::Right)) => {
                self.cycle_option(&field.name, true);
                true
            }
            (FieldKind::Select(_), Event::Key(Key::Left)) => {
                self.cycle_option(&field.name, false);
                true
            }
            (FieldKind::Checkbox, _) | (FieldKind::Select(_), _) => false,
            (_, Event::Key(Key::Char(c))) => {
                let mut text = self
                    .values
                    .get(&field.name)
                    .and_then(FieldValue::as_text)
                    .unwrap_or("")
                    .to_string();
                text.push(*c);
                self.set_text(&field.name, text);
                true
            }
            (_, Event::Key(Key::Backspace)) => {
                let mut text = self
                    .values
                    .get(&field.name)
                    .and_then(FieldValue::as_text)
                    .unwrap_or("")
                    .to_string();
                text.pop();
                self.set_text(&field.name, text);
                true
            }
            _ => false,
        }
    }

    fn display_value(&self, field: &FormField) -> String {
        let value = self.values.get(&field.name);
        match &field.kind {
            FieldKind::Checkbox => {
                let checked = value.and_then(FieldValue::as_flag).unwrap_or(false);
                if checked { "[x]".to_string() } else { "[ ]".to_string() }
            }
            FieldKind::Password => {
                let len = value
                    .and_then(FieldValue::as_text)
                    .map(|t| t.chars().count())
                    .unwrap_or(0);
                "•".repeat(len)
            }
            FieldKind::Select(options) => {
                let current = value.and_then(FieldValue::as_text).unwrap_or("");
                let label = options
                    .iter()
                    .find(|o| o.value == current)
                    .map(|o| o.label.as_str());
                match label {
                    Some(l) => format!("< {} >", l),
                    None => format!("< Select {} >", field.label),
                }
            }
            _ => {
                let text = value.and_then(FieldValue::as_text).unwrap_or("");
                if text.is_empty() {
                    field.placeholder.clone().unwrap_or_default()
                } else {
                    text.to_string()
                }
            }
        }
    }
}

impl EventHandler for Form {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.focused {
            return false;
        }
        match event {
            Event::Key(Key::Tab) => {
                self.next_field();
                true
            }
            Event::Key(Key::BackTab) => {
                self.prev_field();
                true
            }
            Event::Key(Key::Enter) => {
                self.submit();
                true
            }
            _ => self.edit_active(event),
        }
    }

    fn on_focus(&mut self) {
        self.set_focused(true);
    }

    fn on_blur(&mut self) {
        self.set_focused(false);
    }
}

impl Component for Form {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, theme: &Theme) -> Result<()> {
        if bounds.is_empty() {
            return Ok(());
        }

        let width = bounds.width as usize;
        let mut row = 0u16;
        for (i, field) in self.fields.clone().iter().enumerate() {
            if row >= bounds.height {
                break;
            }

            // Label line, with a required marker
            renderer.move_cursor(bounds.x, bounds.y + row)?;
            renderer.write_styled(&pad_clip(&field.label, width.saturating_sub(2)), &theme.text_style())?;
            if field.required {
                renderer.write_styled(" *", &theme.error_style())?;
            }
            row += 1;
            if row >= bounds.height {
                break;
            }

            // Value line; the active field is underlined
            let value = self.display_value(field);
            let style = if self.focused && i == self.active {
                format!("{}{}", theme.text_style(), theme.focus_style())
            } else if value.is_empty() || self.values.get(&field.name).map(FieldValue::is_blank).unwrap_or(true)
            {
                theme.disabled_style()
            } else {
                theme.text_style()
            };
            renderer.move_cursor(bounds.x + 2, bounds.y + row)?;
            renderer.write_styled(&pad_clip(&value, width.saturating_sub(2)), &style)?;
            row += 1;

            // Error line, only when present
            if let Some(error) = self.errors.get(&field.name) {
                if row < bounds.height {
                    renderer.move_cursor(bounds.x + 2, bounds.y + row)?;
                    renderer.write_styled(&pad_clip(error, width.saturating_sub(2)), &theme.error_style())?;
                    row += 1;
                }
            }
        }

        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        (20, (self.fields.len() as u16).saturating_mul(2))
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "Form"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> Form {
        Form::new(vec![
            FormField::new("name", "Name", FieldKind::Text).required(),
            FormField::new("admin", "Administrator", FieldKind::Checkbox),
            FormField::new(
                "role",
                "Role",
                FieldKind::Select(vec![
                    SelectOption::new("Viewer", "viewer"),
                    SelectOption::new("Editor", "editor"),
                ]),
            ),
        ])
    }

    #[test]
    fn test_initial_values() {
        let form = sample_form();
        assert_eq!(form.value("name"), Some(&FieldValue::Text(String::new())));
        assert_eq!(form.value("admin"), Some(&FieldValue::Flag(false)));

        let numeric = Form::new(vec![FormField::new("age", "Age", FieldKind::Number)]);
        assert_eq!(
            numeric.value("age"),
            Some(&FieldValue::Text("0".to_string()))
        );
    }

    #[test]
    fn test_required_validation() {
        let mut form = sample_form();
        assert!(!form.submit());
        assert_eq!(form.error("name"), Some("Name is required."));
        assert_eq!(form.error("admin"), None); // not required

        form.set_text("name", "Ada");
        assert!(form.submit());
        assert!(form.errors().is_empty());

        let values = form.take_submission().unwrap();
        assert_eq!(values["name"], FieldValue::Text("Ada".to_string()));
        assert!(form.take_submission().is_none()); // consumed
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = sample_form();
        form.submit();
        assert!(form.error("name").is_some());

        form.set_text("name", "A");
        assert_eq!(form.error("name"), None);
    }

    #[test]
    fn test_checkbox_toggle() {
        let mut form = sample_form();
        form.toggle("admin");
        assert_eq!(form.value("admin"), Some(&FieldValue::Flag(true)));
        form.toggle("admin");
        assert_eq!(form.value("admin"), Some(&FieldValue::Flag(false)));
    }

    #[test]
    fn test_select_cycling() {
        let mut form = sample_form();
        form.cycle_option("role", true);
        assert_eq!(form.value("role").unwrap().as_text(), Some("viewer"));
        form.cycle_option("role", true);
        assert_eq!(form.value("role").unwrap().as_text(), Some("editor"));
        form.cycle_option("role", true);
        assert_eq!(form.value("role").unwrap().as_text(), Some("viewer")); // wrap
    }

    #[test]
    fn test_keyboard_flow() {
        let mut form = sample_form();
        form.set_focused(true);

        // Type into the first field
        assert!(form.handle_event(&Event::Key(Key::Char('A'))));
        assert!(form.handle_event(&Event::Key(Key::Char('d'))));
        assert_eq!(form.value("name").unwrap().as_text(), Some("Ad"));

        assert!(form.handle_event(&Event::Key(Key::Backspace)));
        assert_eq!(form.value("name").unwrap().as_text(), Some("A"));

        // Tab to the checkbox and toggle it
        assert!(form.handle_event(&Event::Key(Key::Tab)));
        assert_eq!(form.active_field(), Some("admin"));
        assert!(form.handle_event(&Event::Key(Key::Char(' '))));
        assert_eq!(form.value("admin"), Some(&FieldValue::Flag(true)));

        // Tab to the select and cycle it
        assert!(form.handle_event(&Event::Key(Key::Tab)));
        assert!(form.handle_event(&Event::Key(Key::Right)));
        assert_eq!(form.value("role").unwrap().as_text(), Some("viewer"));

        // Submit
        assert!(form.handle_event(&Event::Key(Key::Enter)));
        assert!(form.take_submission().is_some());
    }

    #[test]
    fn test_field_wrap_navigation() {
        let mut form = sample_form();
        form.prev_field();
        assert_eq!(form.active_field(), Some("role"));
        form.next_field();
        assert_eq!(form.active_field(), Some("name"));
    }

    #[test]
    fn test_password_masked_in_render() {
        let theme = Theme::default();
        let mut form = Form::new(vec![FormField::new(
            "pw",
            "Password",
            FieldKind::Password,
        )]);
        form.set_text("pw", "secret");

        let mut r = Renderer::headless();
        form.render(&mut r, Rect::new(0, 0, 30, 4), &theme).unwrap();
        let out = r.captured_text().unwrap();
        assert!(!out.contains("secret"));
        assert!(out.contains("••••••"));
    }
}
