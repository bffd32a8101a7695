//! Form builder: field helpers bound to one form object.

use std::collections::HashMap;

use tracing::debug;

use crate::classes::ClassList;
use crate::compose::{div, label_tag, ChoiceKind, Composer};
use crate::context::{strip_association_suffix, ErrorKeyFallback, ErrorSource, Humanize, LabelText};
use crate::error::Result;
use crate::naming::{humanize, FieldName};
use crate::options::{BootstrapOptions, BootstrapOverrides};
use crate::widgets::{
    Checkbox, DateSelect, HiddenInput, Input, RadioButton, Select, SubmitInput, Textarea, Widget,
    WidgetAttrs,
};

/// How raw controls of fields with errors are decorated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldErrorWrapping {
    /// Raw controls are rendered as is. Bootstrap markup carries the error
    /// state on its own.
    #[default]
    Suppressed,
    /// Raw controls of fields with errors are wrapped in
    /// `<div class="field_with_errors">`.
    Wrapped,
}

/// Per-call options of a field helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOptions {
    /// HTML attributes of the raw control.
    pub attrs: WidgetAttrs,
    /// Bootstrap overrides for this field only.
    pub bootstrap: BootstrapOverrides,
    /// Render the hidden input of checkboxes.
    pub include_hidden: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            attrs: WidgetAttrs::new(),
            bootstrap: BootstrapOverrides::new(),
            include_hidden: true,
        }
    }
}

impl FieldOptions {
    /// Creates empty field options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute of the raw control.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Adds CSS classes to the raw control.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.add_class(class);
        self
    }

    /// Overrides the id of the raw control.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Sets the placeholder of the raw control.
    #[must_use]
    pub fn placeholder(self, text: impl Into<String>) -> Self {
        self.attr("placeholder", text)
    }

    /// Sets the Bootstrap overrides of this field.
    #[must_use]
    pub fn bootstrap(mut self, overrides: BootstrapOverrides) -> Self {
        self.bootstrap = overrides;
        self
    }

    /// Sets whether checkboxes render their hidden input.
    #[must_use]
    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}

impl From<BootstrapOverrides> for FieldOptions {
    fn from(overrides: BootstrapOverrides) -> Self {
        Self::new().bootstrap(overrides)
    }
}

impl From<WidgetAttrs> for FieldOptions {
    fn from(attrs: WidgetAttrs) -> Self {
        Self {
            attrs,
            ..Self::default()
        }
    }
}

macro_rules! input_helpers {
    ($($(#[$meta:meta])* $name:ident => $input_type:literal,)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, method: &str, options: FieldOptions) -> String {
                self.input_field(method, &Input::of_type($input_type), options)
            }
        )*
    };
}

/// Renders the fields of one form object with Bootstrap markup.
///
/// The builder owns the form level [`BootstrapOptions`]. Every helper call
/// scopes them with its own [`FieldOptions::bootstrap`] overrides, so one
/// field can never change the options of the next.
pub struct FormBuilder<'a> {
    object_name: Option<&'a str>,
    errors: Option<&'a dyn ErrorSource>,
    labels: &'a dyn LabelText,
    error_key_fallback: ErrorKeyFallback,
    values: Option<&'a HashMap<String, String>>,
    field_error_wrapping: FieldErrorWrapping,
    persisted: bool,
    /// Bootstrap options of the whole form.
    pub form_bootstrap: BootstrapOptions,
}

impl std::fmt::Debug for FormBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBuilder")
            .field("object_name", &self.object_name)
            .field("field_error_wrapping", &self.field_error_wrapping)
            .field("persisted", &self.persisted)
            .field("form_bootstrap", &self.form_bootstrap)
            .finish_non_exhaustive()
    }
}

impl<'a> FormBuilder<'a> {
    /// Creates a builder for `object_name`, e.g. `user` for `user[email]`
    /// field names. `None` names fields after their method only.
    pub fn new(object_name: Option<&'a str>, form_bootstrap: BootstrapOptions) -> Self {
        debug!(
            object_name = object_name.unwrap_or_default(),
            layout = %form_bootstrap.layout,
            "creating bootstrap form builder"
        );
        Self {
            object_name,
            errors: None,
            labels: &Humanize,
            error_key_fallback: strip_association_suffix,
            values: None,
            field_error_wrapping: FieldErrorWrapping::default(),
            persisted: false,
            form_bootstrap,
        }
    }

    /// Looks field errors up in `errors`.
    #[must_use]
    pub fn with_errors(mut self, errors: &'a dyn ErrorSource) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Replaces the label text provider.
    #[must_use]
    pub fn with_labels(mut self, labels: &'a dyn LabelText) -> Self {
        self.labels = labels;
        self
    }

    /// Replaces the second error key derivation.
    #[must_use]
    pub fn with_error_key_fallback(mut self, fallback: ErrorKeyFallback) -> Self {
        self.error_key_fallback = fallback;
        self
    }

    /// Fills controls from `values`, keyed by method.
    #[must_use]
    pub fn with_values(mut self, values: &'a HashMap<String, String>) -> Self {
        self.values = Some(values);
        self
    }

    /// Sets how raw controls of fields with errors are decorated.
    #[must_use]
    pub fn field_error_wrapping(mut self, wrapping: FieldErrorWrapping) -> Self {
        self.field_error_wrapping = wrapping;
        self
    }

    /// Marks the form object as already saved, which turns the default
    /// submit label into `Update ...`.
    #[must_use]
    pub fn persisted(mut self, persisted: bool) -> Self {
        self.persisted = persisted;
        self
    }

    /// Returns the name of the form object.
    pub fn object_name(&self) -> Option<&'a str> {
        self.object_name
    }

    /// Returns the composer drawing the fields of this form.
    pub fn composer(&self) -> Composer<'a> {
        let composer = Composer::new(self.object_name, self.labels)
            .with_error_key_fallback(self.error_key_fallback);
        match self.errors {
            Some(errors) => composer.with_errors(errors),
            None => composer,
        }
    }

    fn field<'m>(&self, method: &'m str) -> FieldName<'m>
    where
        'a: 'm,
    {
        FieldName::new(self.object_name, method)
    }

    fn value_of(&self, method: &str) -> Option<&'a str> {
        self.values
            .and_then(|values| values.get(method))
            .map(String::as_str)
    }

    // Host level decoration of a raw control.
    fn decorate(&self, method: &str, control: String) -> String {
        let has_errors = self
            .errors
            .is_some_and(|errors| !errors.errors_for(method).is_empty());
        match self.field_error_wrapping {
            FieldErrorWrapping::Wrapped if has_errors => {
                div(&ClassList::parse("field_with_errors"), &control)
            }
            _ => control,
        }
    }

    fn input_field(&self, method: &str, input: &Input, options: FieldOptions) -> String {
        self.input_field_with_value(method, input, options, self.value_of(method))
    }

    fn input_field_with_value(
        &self,
        method: &str,
        input: &Input,
        options: FieldOptions,
        value: Option<&str>,
    ) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let mut attrs = options.attrs;
        attrs.set_default("id", field.id());

        self.composer().form_group(&bootstrap, method, attrs, |attrs| {
            self.decorate(method, input.render(&field.name(), value, attrs))
        })
    }

    input_helpers! {
        /// `<input type="text">` in a form group.
        text_field => "text",
        /// `<input type="email">` in a form group.
        email_field => "email",
        /// `<input type="password">` in a form group.
        password_field => "password",
        /// `<input type="date">` in a form group.
        date_field => "date",
        /// `<input type="datetime-local">` in a form group.
        datetime_field => "datetime-local",
        /// `<input type="month">` in a form group.
        month_field => "month",
        /// `<input type="week">` in a form group.
        week_field => "week",
        /// `<input type="time">` in a form group.
        time_field => "time",
        /// `<input type="tel">` in a form group.
        phone_field => "tel",
        /// `<input type="range">` in a form group.
        range_field => "range",
        /// `<input type="search">` in a form group.
        search_field => "search",
        /// `<input type="url">` in a form group.
        url_field => "url",
    }

    /// `<input type="color">` in a form group, black unless a value is set.
    pub fn color_field(&self, method: &str, options: FieldOptions) -> String {
        let value = self
            .value_of(method)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("#000000");
        self.input_field_with_value(method, &Input::of_type("color"), options, Some(value))
    }

    /// `<input type="number">` in a form group. `step` defaults to `any`
    /// so decimal numbers validate.
    pub fn number_field(&self, method: &str, options: FieldOptions) -> String {
        let mut options = options;
        options.attrs.set_default("step", "any");
        self.input_field(method, &Input::number(), options)
    }

    /// `<textarea>` in a form group.
    pub fn text_area(&self, method: &str, options: FieldOptions) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let value = self.value_of(method);
        let mut attrs = options.attrs;
        attrs.set_default("id", field.id());

        self.composer().form_group(&bootstrap, method, attrs, |attrs| {
            self.decorate(method, Textarea.render(&field.name(), value, attrs))
        })
    }

    /// `<input type="file">` in a form group.
    ///
    /// With the custom skin the input sits in a `custom-file` container
    /// together with a `custom-file-label`, whose text is the placeholder or
    /// the field label.
    pub fn file_field(&self, method: &str, options: FieldOptions) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let composer = self.composer();
        let mut attrs = options.attrs;
        attrs.set_default("id", field.id());

        composer.form_group(&bootstrap, method, attrs, |attrs| {
            if bootstrap.disabled || !bootstrap.custom_control {
                return self.decorate(method, Input::file().render(&field.name(), None, attrs));
            }
            let mut attrs = attrs.clone();
            attrs.add_class("custom-file-input");
            attrs.remove_class("form-control");
            let text = attrs
                .remove("placeholder")
                .unwrap_or_else(|| composer.label_text(&bootstrap, method));
            let target = attrs.get("id").map(str::to_string);

            let mut content = self.decorate(method, Input::file().render(&field.name(), None, &attrs));
            content.push_str(&label_tag(
                &text,
                &ClassList::parse("custom-file-label"),
                target.as_deref(),
            ));
            div(&ClassList::parse("custom-file"), &content)
        })
    }

    /// `<select>` in a form group, `custom-select` under the custom skin.
    pub fn select(&self, method: &str, select: &Select, options: FieldOptions) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let value = self.value_of(method);
        let mut attrs = options.attrs;
        attrs.set_default("id", field.id());
        if !bootstrap.disabled && bootstrap.custom_control {
            attrs.add_class("custom-select");
        }

        self.composer().form_group(&bootstrap, method, attrs, |attrs| {
            self.decorate(method, select.render(&field.name(), value, attrs))
        })
    }

    /// Read-only value shown as plain text, in a form group.
    pub fn plaintext(&self, method: &str, options: FieldOptions) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let value = self.value_of(method);
        let mut attrs = options.attrs;
        attrs.set_default("id", field.id());

        self.composer().form_group(&bootstrap, method, attrs, |attrs| {
            if bootstrap.disabled {
                return Input::text().render(&field.name(), value, attrs);
            }
            let mut attrs = attrs.clone();
            attrs.remove_class("form-control");
            attrs.add_class("form-control-plaintext");
            attrs.set("readonly", "readonly");
            Input::text().render(&field.name(), value, &attrs)
        })
    }

    /// `<input type="hidden">`, never wrapped.
    pub fn hidden_field(&self, method: &str, attrs: WidgetAttrs) -> String {
        let field = self.field(method);
        let mut attrs = attrs;
        attrs.set_default("id", field.id());
        let value = attrs
            .remove("value")
            .or_else(|| self.value_of(method).map(str::to_string));
        HiddenInput.render(&field.name(), value.as_deref(), &attrs)
    }

    /// A checkbox submitting `1`, preceded by a hidden input submitting `0`
    /// unless [`FieldOptions::include_hidden`] is off.
    pub fn check_box(&self, method: &str, options: FieldOptions) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let value = self.value_of(method);
        let checkbox = Checkbox::new().include_hidden(options.include_hidden);
        let mut attrs = options.attrs;
        attrs.set_default("id", field.id());

        self.composer()
            .toggle(&bootstrap, method, ChoiceKind::Checkbox, None, attrs, |attrs| {
                self.decorate(method, checkbox.render(&field.name(), value, attrs))
            })
    }

    /// A radio button for one `tag_value` of the field.
    pub fn radio_button(&self, method: &str, tag_value: &str, options: FieldOptions) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let value = self.value_of(method);
        let radio = RadioButton::new(tag_value);
        let mut attrs = options.attrs;
        attrs.set_default("id", field.id_for_value(tag_value));

        self.composer().toggle(
            &bootstrap,
            method,
            ChoiceKind::Radio,
            Some(tag_value),
            attrs,
            |attrs| self.decorate(method, radio.render(&field.name(), value, attrs)),
        )
    }

    /// One radio button per `(value, text)` item, in a fieldset. Disabled
    /// collections lead with an empty hidden input instead.
    pub fn collection_radio_buttons(
        &self,
        method: &str,
        collection: &[(String, String)],
        options: FieldOptions,
    ) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let value = self.value_of(method);

        // Raw radio collections submit an empty value when nothing is picked.
        let mut html = String::new();
        if bootstrap.disabled && options.include_hidden {
            html.push_str(&HiddenInput.render(&field.name(), Some(""), &WidgetAttrs::new()));
        }

        html.push_str(&self.composer().choice_group(
            &bootstrap,
            method,
            ChoiceKind::Radio,
            collection,
            options.attrs,
            |item, attrs| {
                let attrs = attrs.clone().with("id", field.id_for_value(item));
                self.decorate(method, RadioButton::new(item).render(&field.name(), value, &attrs))
            },
        ));
        html
    }

    /// One checkbox per `(value, text)` item, in a fieldset.
    ///
    /// A hidden empty `user[field][]` input precedes the fieldset, so
    /// clearing every box still submits the field, unless
    /// [`FieldOptions::include_hidden`] is off. The stored value is read as
    /// a comma separated list of checked values.
    pub fn collection_check_boxes(
        &self,
        method: &str,
        collection: &[(String, String)],
        options: FieldOptions,
    ) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let checked: Vec<&str> = self
            .value_of(method)
            .map(|v| v.split(',').map(str::trim).collect())
            .unwrap_or_default();

        let mut html = String::new();
        if options.include_hidden {
            let hidden = if bootstrap.disabled {
                WidgetAttrs::new()
            } else {
                WidgetAttrs::new()
                    .with("id", field.id())
                    .with("multiple", "multiple")
            };
            html.push_str(&HiddenInput.render(&field.multiple_name(), Some(""), &hidden));
        }

        html.push_str(&self.composer().choice_group(
            &bootstrap,
            method,
            ChoiceKind::Checkbox,
            collection,
            options.attrs,
            |item, attrs| {
                let attrs = attrs.clone().with("id", field.id_for_value(item));
                let current = checked.contains(&item).then_some(item);
                self.decorate(
                    method,
                    Checkbox::for_value(item).render(&field.multiple_name(), current, &attrs),
                )
            },
        ));
        html
    }

    /// Submit button in its own form group, followed by `trailing`.
    ///
    /// Without `value` the label is `Create <Model>`, `Update <Model>` for
    /// a persisted object, or `Save` without a form object.
    pub fn submit(&self, value: Option<&str>, options: FieldOptions, trailing: Option<&str>) -> String {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let value = value.map_or_else(|| self.default_submit_value(), str::to_string);

        self.composer().submit(
            &bootstrap,
            options.attrs,
            |attrs| SubmitInput.render("commit", Some(&value), attrs),
            trailing,
        )
    }

    /// Same as [`FormBuilder::submit`] with `btn-primary` added.
    pub fn primary(&self, value: Option<&str>, options: FieldOptions, trailing: Option<&str>) -> String {
        self.submit(value, options.class("btn-primary"), trailing)
    }

    fn default_submit_value(&self) -> String {
        match self.object_name {
            Some(object) => {
                let action = if self.persisted { "Update" } else { "Create" };
                format!("{action} {}", humanize(object))
            }
            None => "Save".to_string(),
        }
    }

    /// Arbitrary content in a form group, labelled when the overrides set
    /// a label text.
    pub fn form_group<F>(&self, overrides: &BootstrapOverrides, content: F) -> String
    where
        F: FnOnce() -> String,
    {
        let bootstrap = self.form_bootstrap.scoped(overrides);
        self.composer().free_group(&bootstrap, &content())
    }

    /// Year, month and day selects in a form group.
    ///
    /// Fails when the stored value is not a date.
    pub fn date_select(&self, method: &str, options: FieldOptions) -> Result<String> {
        self.date_select_field(method, &DateSelect::date(), options)
    }

    /// Date and time selects in a form group.
    pub fn datetime_select(&self, method: &str, options: FieldOptions) -> Result<String> {
        self.date_select_field(method, &DateSelect::datetime(), options)
    }

    /// Hour and minute selects in a form group.
    pub fn time_select(&self, method: &str, options: FieldOptions) -> Result<String> {
        self.date_select_field(method, &DateSelect::time(), options)
    }

    fn date_select_field(&self, method: &str, select: &DateSelect, options: FieldOptions) -> Result<String> {
        let bootstrap = self.form_bootstrap.scoped(&options.bootstrap);
        let field = self.field(method);
        let value = match self.value_of(method).filter(|v| !v.trim().is_empty()) {
            Some(stored) => DateSelect::parse_value(method, stored)?,
            None => chrono::Utc::now().naive_utc(),
        };

        let mut attrs = options.attrs;
        if bootstrap.disabled {
            return Ok(self.decorate(method, select.render(&field, value, &attrs)));
        }
        attrs.add_class("d-inline-block w-auto");
        if bootstrap.custom_control {
            attrs.add_class("custom-select");
        }

        Ok(self.composer().form_group(&bootstrap, method, attrs, |attrs| {
            let parts = self.decorate(method, select.render(&field, value, attrs));
            div(&ClassList::parse(select.kind.wrapper_class()), &parts)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldErrors;
    use crate::options::Layout;

    fn builder<'a>() -> FormBuilder<'a> {
        FormBuilder::new(Some("user"), BootstrapOptions::new())
    }

    #[test]
    fn test_text_field() {
        let html = builder().text_field("email", FieldOptions::new());
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group"><label for="user_email">Email</label>"#,
                r#"<input type="text" name="user[email]" id="user_email" class="form-control"></div>"#
            )
        );
    }

    #[test]
    fn test_field_scope_does_not_leak_into_form() {
        let builder = builder();
        let first = builder.text_field(
            "email",
            BootstrapOverrides::new().layout(Layout::Horizontal).into(),
        );
        let second = builder.text_field("email", FieldOptions::new());
        assert!(first.contains("form-group row"));
        assert!(!second.contains("row"));
        assert_eq!(builder.form_bootstrap, BootstrapOptions::new());
    }

    #[test]
    fn test_value_is_filled() {
        let mut values = HashMap::new();
        values.insert("email".to_string(), "a@b.c".to_string());
        let builder = builder().with_values(&values);
        assert!(builder
            .email_field("email", FieldOptions::new())
            .contains(r#"value="a@b.c""#));
    }

    #[test]
    fn test_number_field_step() {
        let builder = builder();
        assert!(builder.number_field("age", FieldOptions::new()).contains(r#"step="any""#));
        assert!(builder
            .number_field("age", FieldOptions::new().attr("step", "5"))
            .contains(r#"step="5""#));
    }

    #[test]
    fn test_color_field_default() {
        assert!(builder()
            .color_field("shade", FieldOptions::new())
            .contains(r##"value="#000000""##));
    }

    #[test]
    fn test_field_error_wrapping() {
        let errors = FieldErrors::new().with("email", "is invalid");
        let builder = builder().with_errors(&errors);
        assert!(!builder.text_field("email", FieldOptions::new()).contains("field_with_errors"));

        let builder = builder.field_error_wrapping(FieldErrorWrapping::Wrapped);
        let html = builder.text_field("email", FieldOptions::new());
        assert!(html.contains(r#"<div class="field_with_errors"><input"#));
        assert!(!builder.text_field("name", FieldOptions::new()).contains("field_with_errors"));
    }

    #[test]
    fn test_submit_default_values() {
        assert!(builder()
            .submit(None, FieldOptions::new(), None)
            .contains(r#"value="Create User""#));
        assert!(builder()
            .persisted(true)
            .submit(None, FieldOptions::new(), None)
            .contains(r#"value="Update User""#));
        assert!(FormBuilder::new(None, BootstrapOptions::new())
            .submit(None, FieldOptions::new(), None)
            .contains(r#"value="Save""#));
    }

    #[test]
    fn test_primary() {
        let html = builder().primary(Some("Go"), FieldOptions::new(), None);
        assert!(html.contains(r#"class="btn-primary btn""#));
        assert!(html.contains(r#"name="commit" value="Go""#));
        assert!(html.contains(r#"data-disable-with="Go""#));
    }

    #[test]
    fn test_hidden_field() {
        let html = builder().hidden_field("token", WidgetAttrs::new().with("value", "abc"));
        assert_eq!(
            html,
            r#"<input type="hidden" name="user[token]" value="abc" id="user_token">"#
        );
    }

    #[test]
    fn test_date_select_rejects_invalid_value() {
        let mut values = HashMap::new();
        values.insert("born_at".to_string(), "someday".to_string());
        let builder = builder().with_values(&values);
        assert!(builder.date_select("born_at", FieldOptions::new()).is_err());
    }
}
