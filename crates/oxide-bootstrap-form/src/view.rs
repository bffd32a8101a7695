//! `<form>` helpers handing a [`FormBuilder`] to a rendering closure.

use std::collections::HashMap;

use tracing::debug;

use crate::builder::{FieldErrorWrapping, FormBuilder};
use crate::classes::ClassList;
use crate::context::ErrorSource;
use crate::options::{BootstrapOptions, BootstrapOverrides};
use crate::widgets::{HiddenInput, Widget, WidgetAttrs};

/// Options of a rendered `<form>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    /// The `action` attribute.
    pub url: Option<String>,
    /// HTTP method. Methods other than `get` and `post` travel in a
    /// hidden `_method` input of a `post` form.
    pub method: String,
    /// CSS class of the form.
    pub class: Option<String>,
    /// The `id` attribute.
    pub id: Option<String>,
    /// Object name of the fields, as in `scope[field]`.
    pub scope: Option<String>,
    /// Form level Bootstrap options.
    pub bootstrap: BootstrapOverrides,
    /// Whether the object behind the form is already saved.
    pub persisted: bool,
    /// Current field values, keyed by method.
    pub values: HashMap<String, String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            url: None,
            method: "post".to_string(),
            class: None,
            id: None,
            scope: None,
            bootstrap: BootstrapOverrides::new(),
            persisted: false,
            values: HashMap::new(),
        }
    }
}

impl FormOptions {
    /// Creates options for a form posting to `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into().to_lowercase();
        self
    }

    /// Sets the CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Names fields `scope[field]`.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the form level Bootstrap options.
    #[must_use]
    pub fn bootstrap(mut self, overrides: BootstrapOverrides) -> Self {
        self.bootstrap = overrides;
        self
    }

    /// Marks the object behind the form as already saved.
    #[must_use]
    pub fn persisted(mut self, persisted: bool) -> Self {
        self.persisted = persisted;
        self
    }

    /// Sets the current value of a field.
    #[must_use]
    pub fn value(mut self, method: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(method.into(), value.into());
        self
    }
}

/// Renders a `<form>` whose content comes from `content`, which receives a
/// Bootstrap [`FormBuilder`] for [`FormOptions::scope`].
///
/// ```rust
/// use oxide_bootstrap_form::{bootstrap_form_with, FieldOptions, FormOptions};
///
/// let html = bootstrap_form_with(&FormOptions::new("/search").method("get"), |form| {
///     form.search_field("q", FieldOptions::new())
/// });
/// assert!(html.contains(r#"name="q""#));
/// ```
pub fn bootstrap_form_with<F>(options: &FormOptions, content: F) -> String
where
    F: FnOnce(&FormBuilder<'_>) -> String,
{
    let builder = form_builder(options.scope.as_deref(), options);
    render_form(options, &builder, content)
}

/// Renders a `<form>` for the object `object_name`, whose field errors come
/// from `errors`.
pub fn bootstrap_form_for<F>(
    object_name: &str,
    errors: &dyn ErrorSource,
    options: &FormOptions,
    content: F,
) -> String
where
    F: FnOnce(&FormBuilder<'_>) -> String,
{
    let builder = form_builder(Some(object_name), options).with_errors(errors);
    render_form(options, &builder, content)
}

fn form_builder<'a>(object_name: Option<&'a str>, options: &'a FormOptions) -> FormBuilder<'a> {
    FormBuilder::new(object_name, BootstrapOptions::create(&options.bootstrap))
        .with_values(&options.values)
        .persisted(options.persisted)
        .field_error_wrapping(FieldErrorWrapping::Suppressed)
}

fn render_form<F>(options: &FormOptions, builder: &FormBuilder<'_>, content: F) -> String
where
    F: FnOnce(&FormBuilder<'_>) -> String,
{
    let mut classes = ClassList::new();
    classes
        .push_opt(options.class.as_deref())
        .push_if(builder.form_bootstrap.is_inline(), "form-inline");
    let class = classes.finish();

    let (form_method, method_override) = match options.method.as_str() {
        "get" => ("get", None),
        "post" => ("post", None),
        other => ("post", Some(other)),
    };
    debug!(method = %options.method, layout = %builder.form_bootstrap.layout, "rendering bootstrap form");

    let mut body = String::new();
    if let Some(method) = method_override {
        body.push_str(&HiddenInput.render("_method", Some(method), &WidgetAttrs::new()));
    }
    body.push_str(&content(builder));

    let mut attrs = WidgetAttrs::new();
    if let Some(id) = &options.id {
        attrs.set("id", id);
    }
    if let Some(class) = class {
        attrs.set("class", class);
    }
    if let Some(url) = &options.url {
        attrs.set("action", url);
    }
    attrs.set("accept-charset", "UTF-8");
    attrs.set("method", form_method);

    format!(r#"<form {}>{body}</form>"#, attrs.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FieldOptions;
    use crate::error::FieldErrors;
    use crate::options::Layout;

    #[test]
    fn test_form_tag() {
        let html = bootstrap_form_with(&FormOptions::new("/users"), |_| String::new());
        assert!(html.starts_with("<form"));
        assert!(html.contains(r#"action="/users""#));
        assert!(html.contains(r#"accept-charset="UTF-8""#));
        assert!(html.contains(r#"method="post""#));
        assert!(!html.contains("class="));
        assert!(html.ends_with("</form>"));
    }

    #[test]
    fn test_inline_form_class() {
        let options = FormOptions::new("/users")
            .class("search")
            .bootstrap(BootstrapOverrides::new().layout(Layout::Inline));
        let html = bootstrap_form_with(&options, |_| String::new());
        assert!(html.contains(r#"class="search form-inline""#));
    }

    #[test]
    fn test_method_override() {
        let html = bootstrap_form_with(&FormOptions::new("/users/1").method("PATCH"), |_| String::new());
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"<input type="hidden" name="_method" value="patch">"#));
    }

    #[test]
    fn test_scope_names_fields() {
        let options = FormOptions::new("/users").scope("user");
        let html = bootstrap_form_with(&options, |form| form.text_field("email", FieldOptions::new()));
        assert!(html.contains(r#"name="user[email]""#));
    }

    #[test]
    fn test_form_for_suppresses_field_error_wrapping() {
        let errors = FieldErrors::new().with("email", "is invalid");
        let html = bootstrap_form_for("user", &errors, &FormOptions::new("/users"), |form| {
            form.text_field("email", FieldOptions::new())
        });
        assert!(html.contains("is-invalid"));
        assert!(html.contains(r#"<div class="invalid-feedback">is invalid</div>"#));
        assert!(!html.contains("field_with_errors"));
    }

    #[test]
    fn test_form_for_persisted_submit() {
        let options = FormOptions::new("/users/1").persisted(true);
        let html = bootstrap_form_for("user", &(), &options, |form| {
            form.submit(None, FieldOptions::new(), None)
        });
        assert!(html.contains(r#"value="Update User""#));
    }
}
