//! Selects, checkboxes and radio buttons.

use super::{html_escape, Widget, WidgetAttrs};

/// Select widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Select {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
    /// Label of a leading empty option, if any.
    pub blank: Option<String>,
}

impl Select {
    /// Creates a new select with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            blank: None,
        }
    }

    /// Creates a select whose option values are also their labels.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: values
                .into_iter()
                .map(|v| {
                    let v = v.into();
                    (v.clone(), v)
                })
                .collect(),
            blank: None,
        }
    }

    /// Adds a leading empty option.
    #[must_use]
    pub fn include_blank(mut self, label: impl Into<String>) -> Self {
        self.blank = Some(label.into());
        self
    }

    /// Renders the `<option>` list, marking `selected`.
    pub fn render_options(&self, selected: Option<&str>) -> String {
        let mut options = String::new();
        if let Some(blank) = &self.blank {
            options.push_str(&format!(
                r#"<option value="">{}</option>"#,
                html_escape(blank)
            ));
        }
        for (value, label) in &self.choices {
            let selected_attr = if selected == Some(value.as_str()) {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(value),
                html_escape(label)
            ));
        }
        options
    }
}

impl Widget for Select {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        format!(
            r#"<select name="{}"{}>{}</select>"#,
            html_escape(name),
            attrs.without(&["name"]).to_suffix(),
            self.render_options(value)
        )
    }
}

/// Checkbox widget.
///
/// With `include_hidden` a hidden input carrying the unchecked value
/// precedes the box, so an unchecked box still submits a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    /// Value submitted when checked.
    pub checked_value: String,
    /// Value submitted through the hidden input when unchecked.
    pub unchecked_value: String,
    /// Whether to render the hidden input.
    pub include_hidden: bool,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self {
            checked_value: "1".to_string(),
            unchecked_value: "0".to_string(),
            include_hidden: true,
        }
    }
}

impl Checkbox {
    /// Creates a checkbox submitting `1` or `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates one checkbox of a collection: it submits `value` and has no
    /// hidden input.
    pub fn for_value(value: impl Into<String>) -> Self {
        Self {
            checked_value: value.into(),
            unchecked_value: String::new(),
            include_hidden: false,
        }
    }

    /// Sets the checked and unchecked values.
    #[must_use]
    pub fn values(mut self, checked: impl Into<String>, unchecked: impl Into<String>) -> Self {
        self.checked_value = checked.into();
        self.unchecked_value = unchecked.into();
        self
    }

    /// Sets whether the hidden input is rendered.
    #[must_use]
    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}

impl Widget for Checkbox {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let name = html_escape(name);
        let hidden = if self.include_hidden {
            format!(
                r#"<input type="hidden" name="{name}" value="{}">"#,
                html_escape(&self.unchecked_value)
            )
        } else {
            String::new()
        };
        let checked = value == Some(self.checked_value.as_str()) && !attrs.contains("checked");
        let checked_attr = if checked { r#" checked="checked""# } else { "" };
        format!(
            r#"{hidden}<input type="checkbox" name="{name}" value="{}"{}{checked_attr}>"#,
            html_escape(&self.checked_value),
            attrs.without(&["type", "name", "value"]).to_suffix()
        )
    }
}

/// Radio button widget for one value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioButton {
    /// Value submitted when selected.
    pub value: String,
}

impl RadioButton {
    /// Creates a radio button for `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Widget for RadioButton {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let checked = value == Some(self.value.as_str()) && !attrs.contains("checked");
        let checked_attr = if checked { r#" checked="checked""# } else { "" };
        format!(
            r#"<input type="radio" name="{}" value="{}"{}{checked_attr}>"#,
            html_escape(name),
            html_escape(&self.value),
            attrs.without(&["type", "name", "value"]).to_suffix()
        )
    }
}
