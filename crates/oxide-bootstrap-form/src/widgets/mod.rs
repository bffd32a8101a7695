//! Raw control renderers.
//!
//! Widgets produce the bare `<input>`, `<select>` and `<textarea>` tags.
//! They know nothing about labels, errors or the grid; the composer wraps
//! their output.

mod choice;
mod date;

pub use choice::{Checkbox, RadioButton, Select};
pub use date::{DateSelect, DateSelectKind};

use indexmap::IndexMap;

use crate::classes::ClassList;

/// Attributes handed to a raw control, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: IndexMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self {
            attrs: IndexMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Sets an attribute unless it is already present.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Removes an attribute, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.shift_remove(key)
    }

    /// Returns whether an attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Returns whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Appends CSS classes to the `class` attribute.
    pub fn add_class(&mut self, class: &str) {
        let mut classes = ClassList::parse(self.get("class").unwrap_or_default());
        classes.push(class);
        self.store_classes(&classes);
    }

    /// Removes a CSS class from the `class` attribute.
    pub fn remove_class(&mut self, class: &str) {
        let mut classes = ClassList::parse(self.get("class").unwrap_or_default());
        classes.remove(class);
        self.store_classes(&classes);
    }

    /// Returns whether the `class` attribute holds `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.get("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    fn store_classes(&mut self, classes: &ClassList) {
        match classes.finish() {
            Some(value) => self.set("class", value),
            None => {
                self.remove("class");
            }
        }
    }

    /// Renders attributes as an HTML attribute string, values escaped.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to append CSS classes.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    // Leading space included, empty when there is nothing to render.
    fn to_suffix(&self) -> String {
        if self.attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", self.to_html())
        }
    }

    fn without(&self, keys: &[&str]) -> Self {
        let mut attrs = self.clone();
        for key in keys {
            attrs.remove(key);
        }
        attrs
    }
}

/// Trait for raw controls.
pub trait Widget: Send + Sync {
    /// Renders the bare control named `name`, showing `value` when the
    /// control displays one.
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;
}

/// A single `<input>` of any text-like type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// The HTML input type.
    pub input_type: String,
}

impl Default for Input {
    fn default() -> Self {
        Self::of_type("text")
    }
}

impl Input {
    /// Creates an input of the given type.
    pub fn of_type(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
        }
    }

    /// Creates a text input.
    pub fn text() -> Self {
        Self::default()
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self::of_type("email")
    }

    /// Creates a password input.
    pub fn password() -> Self {
        Self::of_type("password")
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self::of_type("number")
    }

    /// Creates a file input.
    pub fn file() -> Self {
        Self::of_type("file")
    }
}

impl Widget for Input {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        // Browsers never prefill file and password inputs.
        let value_attr = value
            .filter(|_| !matches!(self.input_type.as_str(), "file" | "password"))
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let extra_attrs = attrs.without(&["type", "name", "value"]).to_suffix();
        format!(
            r#"<input type="{}" name="{}"{value_attr}{extra_attrs}>"#,
            html_escape(&self.input_type),
            html_escape(name)
        )
    }
}

/// A multi-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Textarea;

impl Widget for Textarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let content = value.map(html_escape).unwrap_or_default();
        let extra_attrs = attrs.without(&["name"]).to_suffix();
        format!(
            r#"<textarea name="{}"{extra_attrs}>{content}</textarea>"#,
            html_escape(name)
        )
    }
}

/// A hidden input widget.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let extra_attrs = attrs.without(&["type", "name", "value"]).to_suffix();
        format!(
            r#"<input type="hidden" name="{}"{value_attr}{extra_attrs}>"#,
            html_escape(name)
        )
    }
}

/// A submit button rendered as `<input type="submit">`.
///
/// The button disables itself while the form submits, through
/// `data-disable-with`.
#[derive(Debug, Clone, Default)]
pub struct SubmitInput;

impl Widget for SubmitInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value = value.unwrap_or_default();
        let mut attrs = attrs.without(&["type", "name", "value"]);
        attrs.set_default("data-disable-with", value);
        format!(
            r#"<input type="submit" name="{}" value="{}"{}>"#,
            html_escape(name),
            html_escape(value),
            attrs.to_suffix()
        )
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
