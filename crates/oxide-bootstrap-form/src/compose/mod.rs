//! Bootstrap markup composition.
//!
//! The [`Composer`] turns resolved [`BootstrapOptions`] and the error and
//! help state of one field into nested markup around a raw control. It
//! never renders `<input>` or `<select>` tags itself: every draw operation
//! takes a closure that does.

mod choices;
mod group;

pub use choices::ChoiceKind;

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Label, Small, Span};
use tracing::trace;

use crate::classes::ClassList;
use crate::context::{strip_association_suffix, ErrorKeyFallback, ErrorSource, LabelText};
use crate::naming::FieldName;
use crate::options::{Addon, BootstrapOptions};

/// Composes Bootstrap markup for the fields of one form object.
#[derive(Clone, Copy)]
pub struct Composer<'a> {
    object_name: Option<&'a str>,
    errors: Option<&'a dyn ErrorSource>,
    labels: &'a dyn LabelText,
    error_key_fallback: ErrorKeyFallback,
}

impl std::fmt::Debug for Composer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer")
            .field("object_name", &self.object_name)
            .field("has_errors", &self.errors.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> Composer<'a> {
    /// Creates a composer without an error source.
    pub fn new(object_name: Option<&'a str>, labels: &'a dyn LabelText) -> Self {
        Self {
            object_name,
            errors: None,
            labels,
            error_key_fallback: strip_association_suffix,
        }
    }

    /// Looks field errors up in `errors`.
    #[must_use]
    pub fn with_errors(mut self, errors: &'a dyn ErrorSource) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Replaces the second error key derivation.
    #[must_use]
    pub fn with_error_key_fallback(mut self, fallback: ErrorKeyFallback) -> Self {
        self.error_key_fallback = fallback;
        self
    }

    /// Returns the name of the form object.
    pub fn object_name(&self) -> Option<&'a str> {
        self.object_name
    }

    /// Returns the naming of `method` on the form object.
    pub fn field<'m>(&self, method: &'m str) -> FieldName<'m>
    where
        'a: 'm,
    {
        FieldName::new(self.object_name, method)
    }

    /// Returns the configured label text, or the provider's text for
    /// `method`.
    pub fn label_text(&self, options: &BootstrapOptions, method: &str) -> String {
        options
            .label
            .visible_text()
            .map_or_else(|| self.labels.label_text(self.object_name, method), str::to_string)
    }

    /// Renders the `<label>` of a field.
    ///
    /// `for_attr` overrides the field id the label points at.
    pub fn label(&self, options: &BootstrapOptions, method: &str, for_attr: Option<&str>) -> String {
        let target = for_attr.map_or_else(|| self.field(method).id(), str::to_string);
        let classes = label_classes(options);
        label_tag(&self.label_text(options, method), &classes, Some(&target))
    }

    /// Returns the error messages of a field: the manual `error` option, or
    /// the error source lookup with its fallback key.
    pub fn error_messages(&self, options: &BootstrapOptions, method: &str) -> Vec<String> {
        if let Some(error) = options.error.as_deref().filter(|e| !e.trim().is_empty()) {
            return vec![error.to_string()];
        }
        let Some(source) = self.errors else {
            return Vec::new();
        };
        let messages = source.errors_for(method);
        if !messages.is_empty() {
            return messages;
        }
        match (self.error_key_fallback)(method) {
            Some(key) if key != method => {
                trace!(method, fallback = %key, "looking up errors under fallback key");
                source.errors_for(&key)
            }
            _ => Vec::new(),
        }
    }

    /// Renders the validation feedback of a field, `None` when it is
    /// valid.
    pub fn errors(&self, options: &BootstrapOptions, method: &str) -> Option<String> {
        let messages = self.error_messages(options, method);
        if messages.is_empty() {
            return None;
        }
        Some(
            Element::<Div>::new()
                .class("invalid-feedback")
                .text(messages.join(", ").as_str())
                .render(),
        )
    }

    /// Renders the help text, `None` when it is blank.
    pub fn help(&self, options: &BootstrapOptions) -> Option<String> {
        let text = options.help.as_deref().filter(|h| !h.trim().is_empty())?;
        Some(
            Element::<Small>::new()
                .class("form-text text-muted")
                .text(text)
                .render(),
        )
    }

    /// Wraps `content` in the control column of horizontal forms. Other
    /// layouts get `content` back unchanged.
    pub fn control_column(&self, options: &BootstrapOptions, offset: bool, content: &str) -> String {
        if !options.is_horizontal() {
            return content.to_string();
        }
        let mut classes = ClassList::parse(&options.control_col_class);
        if offset {
            classes.push(&options.offset_col_class());
        }
        div(&classes, content)
    }

    /// Places the prepend and append addons around `content`.
    ///
    /// Without addons this is `content`, then `errors`, then the help text.
    /// With addons the errors move inside the `input-group` container and
    /// the help text follows it.
    pub fn input_group(&self, options: &BootstrapOptions, errors: Option<&str>, content: &str) -> String {
        let prepend = addon(options.prepend.as_ref(), "input-group-prepend");
        let append = addon(options.append.as_ref(), "input-group-append");
        let help = self.help(options);

        let mut html = String::new();
        if prepend.is_none() && append.is_none() {
            html.push_str(content);
            html.push_str(errors.unwrap_or_default());
        } else {
            let mut group = String::new();
            group.push_str(prepend.as_deref().unwrap_or_default());
            group.push_str(content);
            group.push_str(append.as_deref().unwrap_or_default());
            group.push_str(errors.unwrap_or_default());
            html.push_str(&div(&ClassList::parse("input-group"), &group));
        }
        html.push_str(help.as_deref().unwrap_or_default());
        html
    }
}

/// Label classes shared by field labels and free form groups.
fn label_classes(options: &BootstrapOptions) -> ClassList {
    let mut classes = ClassList::new();
    classes
        .push_opt(options.label.class.as_deref())
        .push_if(options.label.hide, "sr-only")
        .push_if(options.is_inline(), &options.inline_margin_class);
    if options.is_horizontal() {
        classes
            .push("col-form-label")
            .push(&options.label_col_class)
            .push(&options.label_align_class);
    }
    classes
}

pub(crate) fn label_tag(text: &str, classes: &ClassList, for_attr: Option<&str>) -> String {
    let mut label = Element::<Label>::new();
    if let Some(class) = classes.finish() {
        label = label.class(class.as_str());
    }
    if let Some(target) = for_attr {
        label = label.attr("for", target);
    }
    label.text(text).render()
}

pub(crate) fn div(classes: &ClassList, content: &str) -> String {
    let class = classes.to_string();
    Element::<Div>::new().class(class.as_str()).raw(content).render()
}

fn addon(addon: Option<&Addon>, wrapper_class: &str) -> Option<String> {
    let addon = addon.filter(|a| !a.is_blank())?;
    let inner = match addon {
        Addon::Text(text) => Element::<Span>::new()
            .class("input-group-text")
            .text(text.as_str())
            .render(),
        Addon::Html { html } => html.clone(),
    };
    Some(div(&ClassList::parse(wrapper_class), &inner))
}
