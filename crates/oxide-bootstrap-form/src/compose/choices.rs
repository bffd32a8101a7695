//! Checkboxes and radio buttons, alone or as a collection.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Legend};
use tracing::trace;

use super::group::group_classes;
use super::{div, label_tag, Composer};
use crate::classes::ClassList;
use crate::options::BootstrapOptions;
use crate::widgets::{html_escape, WidgetAttrs};

/// Kind of a choice control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceKind {
    /// `<input type="radio">`
    Radio,
    /// `<input type="checkbox">`
    Checkbox,
}

impl ChoiceKind {
    fn custom_class(self) -> &'static str {
        match self {
            Self::Radio => "custom-radio",
            Self::Checkbox => "custom-checkbox",
        }
    }
}

/// Classes of one choice: its wrapper, its control and its label.
struct Skin {
    wrapper: ClassList,
    input: &'static str,
    label: &'static str,
}

impl Skin {
    fn new(options: &BootstrapOptions, kind: ChoiceKind) -> Self {
        if options.custom_control {
            let mut wrapper = ClassList::parse("custom-control");
            wrapper
                .push(kind.custom_class())
                .push_if(options.check_inline, "custom-control-inline");
            Self {
                wrapper,
                input: "custom-control-input",
                label: "custom-control-label",
            }
        } else {
            let mut wrapper = ClassList::parse("form-check");
            wrapper.push_if(options.check_inline, "form-check-inline");
            Self {
                wrapper,
                input: "form-check-input",
                label: "form-check-label",
            }
        }
    }
}

impl Composer<'_> {
    /// Draws a collection of radio buttons or checkboxes inside a
    /// `<fieldset>`, with the field label as its `<legend>`.
    ///
    /// `render_item` renders the raw control of one `(value, text)` item of
    /// `collection`. Errors and help text go inside the last item's wrapper,
    /// or once after the whole collection when `check_inline` is set.
    pub fn choice_group<F>(
        &self,
        options: &BootstrapOptions,
        method: &str,
        kind: ChoiceKind,
        collection: &[(String, String)],
        attrs: WidgetAttrs,
        mut render_item: F,
    ) -> String
    where
        F: FnMut(&str, &WidgetAttrs) -> String,
    {
        let field = self.field(method);

        if options.disabled {
            trace!(method, "bootstrap markup disabled");
            return collection
                .iter()
                .map(|(value, text)| {
                    let label = label_tag(text, &ClassList::new(), Some(&field.id_for_value(value)));
                    render_item(value, &attrs) + &label
                })
                .collect();
        }

        let skin = Skin::new(options, kind);
        let errors = self.errors(options, method);
        let help = self.help(options);

        let mut attrs = attrs;
        attrs.add_class(skin.input);
        if errors.is_some() {
            attrs.add_class("is-invalid");
        }

        // Without items to carry them, errors and help follow the collection.
        let trailing = options.check_inline || collection.is_empty();
        let last = collection.len().saturating_sub(1);

        let mut items = String::new();
        for (index, (value, text)) in collection.iter().enumerate() {
            let mut item = render_item(value, &attrs);
            item.push_str(&label_tag(
                text,
                &ClassList::parse(skin.label),
                Some(&field.id_for_value(value)),
            ));
            if !trailing && index == last {
                item.push_str(errors.as_deref().unwrap_or_default());
                item.push_str(help.as_deref().unwrap_or_default());
            }
            items.push_str(&div(&skin.wrapper, &item));
        }
        if trailing {
            items.push_str(errors.as_deref().unwrap_or_default());
            items.push_str(help.as_deref().unwrap_or_default());
        }

        self.fieldset(options, method, &items)
    }

    // Legend and control column, in a row for horizontal forms.
    fn fieldset(&self, options: &BootstrapOptions, method: &str, content: &str) -> String {
        let mut body = String::new();
        if !options.label.hide {
            let mut classes = ClassList::parse("col-form-label pt-0");
            classes.push_opt(options.label.class.as_deref());
            if options.is_horizontal() {
                classes
                    .push(&options.label_col_class)
                    .push(&options.label_align_class);
            }
            let legend = Element::<Legend>::new()
                .class(classes.to_string().as_str())
                .text(self.label_text(options, method).as_str())
                .render();
            body.push_str(&legend);
        }
        body.push_str(&self.control_column(options, options.label.hide, content));

        let body = if options.is_horizontal() {
            Element::<Div>::new().class("row").raw(&body).render()
        } else {
            body
        };
        fieldset_tag(&ClassList::parse("form-group"), &body)
    }

    /// Draws a single checkbox or radio button with its own label.
    ///
    /// `value` is the radio button value, which is part of the default
    /// label target. `render` receives `attrs` with the skin class (and
    /// `is-invalid` for a field with errors) added.
    pub fn toggle<F>(
        &self,
        options: &BootstrapOptions,
        method: &str,
        kind: ChoiceKind,
        value: Option<&str>,
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

        let field = self.field(method);
        let skin = Skin::new(options, kind);
        let errors = self.errors(options, method);
        let help = self.help(options);

        let target = match (attrs.get("id"), value) {
            (Some(id), _) => id.to_string(),
            (None, Some(value)) => field.id_for_value(value),
            (None, None) => field.id(),
        };

        let mut attrs = attrs;
        attrs.add_class(skin.input);
        if errors.is_some() {
            attrs.add_class("is-invalid");
        }

        let mut item = render(&attrs);
        item.push_str(&label_tag(
            &self.label_text(options, method),
            &ClassList::parse(skin.label),
            Some(&target),
        ));
        item.push_str(errors.as_deref().unwrap_or_default());
        item.push_str(help.as_deref().unwrap_or_default());

        let column = self.control_column(options, true, &div(&skin.wrapper, &item));
        fieldset_tag(&group_classes(options, true), &column)
    }
}

// Fieldsets take flow content only, so the body is written as is.
fn fieldset_tag(classes: &ClassList, body: &str) -> String {
    format!(
        r#"<fieldset class="{}">{body}</fieldset>"#,
        html_escape(&classes.to_string())
    )
}
