//! Form groups around single controls, buttons and free content.

use ironhtml::typed::Element;
use ironhtml_elements::Div;
use tracing::trace;

use super::{label_classes, label_tag, Composer};
use crate::classes::ClassList;
use crate::options::BootstrapOptions;
use crate::widgets::WidgetAttrs;

impl Composer<'_> {
    /// Draws the form group of one control: label, then the control with
    /// its errors and help inside the control column.
    ///
    /// `render` receives `attrs` with `form-control` (and `is-invalid` for
    /// a field with errors) added. With `disabled` set it receives `attrs`
    /// untouched and its output is returned as is.
    pub fn form_group<F>(
        &self,
        options: &BootstrapOptions,
        method: &str,
        attrs: WidgetAttrs,
        render: F,
    ) -> String
    where
        F: FnOnce(&WidgetAttrs) -> String,
    {
        if options.disabled {
            trace!(method, "bootstrap markup disabled");
            return render(&attrs);
        }

        let label = self.label(options, method, attrs.get("id"));
        let errors = self.errors(options, method);

        let mut attrs = attrs;
        attrs.add_class("form-control");
        if errors.is_some() {
            attrs.add_class("is-invalid");
        }
        let control = render(&attrs);

        let grouped = self.input_group(options, errors.as_deref(), &control);
        let column = self.control_column(options, options.label.hide, &grouped);

        Element::<Div>::new()
            .class(group_classes(options, true).to_string().as_str())
            .raw(&label)
            .raw(&column)
            .render()
    }

    /// Draws a submit button followed by `trailing`, e.g. a cancel link.
    ///
    /// `btn` is added to `attrs`. Buttons carry no error or help markup.
    pub fn submit<F>(
        &self,
        options: &BootstrapOptions,
        attrs: WidgetAttrs,
        render: F,
        trailing: Option<&str>,
    ) -> String
    where
        F: FnOnce(&WidgetAttrs) -> String,
    {
        if options.disabled {
            return render(&attrs);
        }

        let mut attrs = attrs;
        attrs.add_class("btn");
        let mut content = render(&attrs);
        content.push_str(trailing.unwrap_or_default());

        Element::<Div>::new()
            .class(group_classes(options, false).to_string().as_str())
            .raw(&self.control_column(options, true, &content))
            .render()
    }

    /// Draws a form group around arbitrary content.
    ///
    /// A label is rendered only when `label.text` is set; it is not bound
    /// to any control. Without a label the content is offset in horizontal
    /// forms.
    pub fn free_group(&self, options: &BootstrapOptions, content: &str) -> String {
        let label = options
            .label
            .visible_text()
            .map(|text| label_tag(text, &label_classes(options), None));

        let column = self.control_column(options, label.is_none(), content);

        Element::<Div>::new()
            .class(group_classes(options, true).to_string().as_str())
            .raw(label.as_deref().unwrap_or_default())
            .raw(&column)
            .render()
    }
}

/// `form-group`, then `row` for horizontal forms and the inline margin
/// class for inline forms when `inline_margin` is set.
pub(super) fn group_classes(options: &BootstrapOptions, inline_margin: bool) -> ClassList {
    let mut classes = ClassList::parse("form-group");
    classes
        .push_if(options.is_horizontal(), "row")
        .push_if(inline_margin && options.is_inline(), &options.inline_margin_class);
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Humanize;
    use crate::error::FieldErrors;
    use crate::options::{BootstrapOverrides, Layout};
    use crate::widgets::{Input, SubmitInput, Widget};

    fn options(overrides: BootstrapOverrides) -> BootstrapOptions {
        BootstrapOptions::create(&overrides)
    }

    fn text_field(composer: &Composer<'_>, options: &BootstrapOptions) -> String {
        let attrs = WidgetAttrs::new().with("id", "user_email");
        composer.form_group(options, "email", attrs, |attrs| {
            Input::text().render("user[email]", None, attrs)
        })
    }

    #[test]
    fn test_form_group_vertical() {
        let composer = Composer::new(Some("user"), &Humanize);
        let html = text_field(&composer, &BootstrapOptions::new());
        assert!(html.starts_with(r#"<div class="form-group"><label"#));
        assert!(html.contains(
            r#"<input type="text" name="user[email]" id="user_email" class="form-control"></div>"#
        ));
    }

    #[test]
    fn test_form_group_label_before_control() {
        let composer = Composer::new(Some("user"), &Humanize);
        let html = text_field(&composer, &BootstrapOptions::new());
        assert!(html.find("<label").unwrap() < html.find("<input").unwrap());
    }

    #[test]
    fn test_form_group_with_errors() {
        let errors = FieldErrors::new().with("email", "is invalid");
        let composer = Composer::new(Some("user"), &Humanize).with_errors(&errors);
        let html = text_field(&composer, &BootstrapOptions::new());
        assert!(html.contains("form-control is-invalid"));
        assert!(html.find("<input").unwrap() < html.find("invalid-feedback").unwrap());
        assert_eq!(html.matches("invalid-feedback").count(), 1);
    }

    #[test]
    fn test_form_group_without_errors_has_no_feedback() {
        let composer = Composer::new(Some("user"), &Humanize).with_errors(&());
        let html = text_field(&composer, &BootstrapOptions::new());
        assert!(!html.contains("invalid-feedback"));
        assert!(!html.contains("is-invalid"));
    }

    #[test]
    fn test_form_group_horizontal_hidden_label() {
        let composer = Composer::new(Some("user"), &Humanize);
        let options = options(BootstrapOverrides::new().layout(Layout::Horizontal).hide_label());
        let html = text_field(&composer, &options);
        assert!(html.starts_with(r#"<div class="form-group row">"#));
        assert!(html.contains(r#"class="sr-only col-form-label col-sm-2 text-sm-right""#));
        assert!(html.contains(r#"<div class="col-sm-10 offset-sm-2"><input"#));
    }

    #[test]
    fn test_form_group_inline() {
        let composer = Composer::new(Some("user"), &Humanize);
        let html = text_field(&composer, &options(BootstrapOverrides::new().layout(Layout::Inline)));
        assert!(html.starts_with(r#"<div class="form-group mr-sm-2">"#));
        assert!(html.contains(r#"<label class="mr-sm-2""#));
    }

    #[test]
    fn test_form_group_disabled_is_raw_control() {
        let errors = FieldErrors::new().with("email", "is invalid");
        let composer = Composer::new(Some("user"), &Humanize).with_errors(&errors);
        let html = text_field(&composer, &options(BootstrapOverrides::new().disabled(true)));
        assert_eq!(html, r#"<input type="text" name="user[email]" id="user_email">"#);
    }

    #[test]
    fn test_submit() {
        let composer = Composer::new(Some("user"), &Humanize);
        let html = composer.submit(
            &BootstrapOptions::new(),
            WidgetAttrs::new(),
            |attrs| SubmitInput.render("commit", Some("Create User"), attrs),
            None,
        );
        assert!(html.starts_with(r#"<div class="form-group"><input type="submit""#));
        assert!(html.contains(r#"class="btn""#));
        assert!(!html.contains("invalid-feedback"));
    }

    #[test]
    fn test_submit_horizontal_with_trailing_block() {
        let composer = Composer::new(Some("user"), &Humanize);
        let html = composer.submit(
            &options(BootstrapOverrides::new().layout(Layout::Horizontal)),
            WidgetAttrs::new().with("class", "btn-primary"),
            |attrs| SubmitInput.render("commit", Some("Save"), attrs),
            Some(r#"<a href="/">Cancel</a>"#),
        );
        assert!(html.starts_with(r#"<div class="form-group row"><div class="col-sm-10 offset-sm-2">"#));
        assert!(html.contains(r#"class="btn-primary btn""#));
        assert!(html.contains(r#"><a href="/">Cancel</a></div></div>"#));
    }

    #[test]
    fn test_submit_inline_has_no_margin_class() {
        let composer = Composer::new(Some("user"), &Humanize);
        let html = composer.submit(
            &options(BootstrapOverrides::new().layout(Layout::Inline)),
            WidgetAttrs::new(),
            |attrs| SubmitInput.render("commit", Some("Save"), attrs),
            None,
        );
        assert!(html.starts_with(r#"<div class="form-group">"#));
    }

    #[test]
    fn test_free_group() {
        let composer = Composer::new(Some("user"), &Humanize);
        let html = composer.free_group(&BootstrapOptions::new(), "test");
        assert_eq!(html, r#"<div class="form-group">test</div>"#);
    }

    #[test]
    fn test_free_group_horizontal_with_label() {
        let composer = Composer::new(Some("user"), &Humanize);
        let options = options(
            BootstrapOverrides::new()
                .layout(Layout::Horizontal)
                .label("Label"),
        );
        let html = composer.free_group(&options, "test");
        assert!(html.contains(r#"<label class="col-form-label col-sm-2 text-sm-right">Label</label>"#));
        assert!(html.contains(r#"<div class="col-sm-10">test</div>"#));
        assert!(!html.contains("for="));
    }

    #[test]
    fn test_free_group_horizontal_without_label_is_offset() {
        let composer = Composer::new(Some("user"), &Humanize);
        let options = options(BootstrapOverrides::new().layout(Layout::Horizontal));
        let html = composer.free_group(&options, "test");
        assert_eq!(
            html,
            r#"<div class="form-group row"><div class="col-sm-10 offset-sm-2">test</div></div>"#
        );
    }
}
