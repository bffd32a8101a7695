//! Bootstrap rendering options.
//!
//! [`BootstrapOptions`] controls form layout, grid sizing and the
//! decoration of a single field. One value is created per form and every
//! field call derives its own copy through [`BootstrapOptions::scoped`], so
//! per-field settings never leak back into the form:
//!
//! ```rust
//! use oxide_bootstrap_form::{BootstrapOptions, BootstrapOverrides, Layout};
//!
//! let form = BootstrapOptions::create(&BootstrapOverrides::new().layout(Layout::Horizontal));
//! let field = form.scoped(&BootstrapOverrides::new().label_col_class("col-md-4"));
//!
//! assert_eq!(field.offset_col_class(), "offset-md-4");
//! assert_eq!(form.offset_col_class(), "offset-sm-2");
//! ```
//!
//! The untyped boundary is JSON. Unknown keys are rejected there, never
//! silently accepted:
//!
//! ```rust
//! use oxide_bootstrap_form::BootstrapOptions;
//! use serde_json::json;
//!
//! assert!(BootstrapOptions::from_json(&json!({"layout": "inline"})).is_ok());
//! assert!(BootstrapOptions::from_json(&json!({"layuot": "inline"})).is_err());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use crate::error::{FormError, Result};

/// Default for [`BootstrapOptions::custom_control`].
pub const DEFAULT_CUSTOM_CONTROL: bool = true;

static COL_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"col-(\w+)-(\d+)").expect("column class pattern is valid"));

/// Form layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Labels above controls.
    #[default]
    Vertical,
    /// Labels and controls side by side on the grid.
    Horizontal,
    /// All groups on one line.
    Inline,
}

impl Layout {
    /// Returns the layout name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Inline => "inline",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            "inline" => Ok(Self::Inline),
            other => Err(FormError::UnknownLayout(other.to_string())),
        }
    }
}

/// Label specific options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelOptions {
    /// Overrides the generated label text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Extra CSS class on the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Label is only visible to screen readers.
    pub hide: bool,
}

impl LabelOptions {
    /// Creates an empty label record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the extra label class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Hides the label for everything but screen readers.
    #[must_use]
    pub fn hide(mut self) -> Self {
        self.hide = true;
        self
    }

    /// Returns the label text when it is set and not blank.
    pub fn visible_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

impl From<&str> for LabelOptions {
    fn from(text: &str) -> Self {
        Self::new().text(text)
    }
}

impl From<String> for LabelOptions {
    fn from(text: String) -> Self {
        Self::new().text(text)
    }
}

/// Content prepended or appended to a control inside an input group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Addon {
    /// Plain text, escaped and wrapped in `span.input-group-text`.
    Text(String),
    /// Trusted markup, written verbatim.
    Html {
        /// The markup.
        html: String,
    },
}

impl Addon {
    /// Creates a text addon.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a trusted markup addon.
    pub fn html(html: impl Into<String>) -> Self {
        Self::Html { html: html.into() }
    }

    /// Returns whether the addon carries nothing to render.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Html { html } => html.trim().is_empty(),
        }
    }
}

/// Resolved Bootstrap options for a form or a single field.
///
/// This is a closed record: the fields below are the complete set of
/// recognized options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BootstrapOverrides")]
pub struct BootstrapOptions {
    /// Form layout.
    pub layout: Layout,
    /// Label column class of horizontal forms.
    pub label_col_class: String,
    /// Control column class of horizontal forms.
    pub control_col_class: String,
    /// Label alignment class of horizontal forms.
    pub label_align_class: String,
    /// Spacing class between form groups of inline forms.
    pub inline_margin_class: String,
    /// Label options.
    pub label: LabelOptions,
    /// Input group content before the control.
    pub prepend: Option<Addon>,
    /// Input group content after the control.
    pub append: Option<Addon>,
    /// Help text under the control.
    pub help: Option<String>,
    /// Render checkboxes and radio buttons side by side.
    pub check_inline: bool,
    /// Use the custom control skin for file inputs, selects, checkboxes and
    /// radio buttons.
    pub custom_control: bool,
    /// Manual error message, bypassing the error source.
    pub error: Option<String>,
    /// Render the raw control only.
    pub disabled: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Vertical,
            label_col_class: "col-sm-2".to_string(),
            control_col_class: "col-sm-10".to_string(),
            label_align_class: "text-sm-right".to_string(),
            inline_margin_class: "mr-sm-2".to_string(),
            label: LabelOptions::default(),
            prepend: None,
            append: None,
            help: None,
            check_inline: false,
            custom_control: DEFAULT_CUSTOM_CONTROL,
            error: None,
            disabled: false,
        }
    }
}

impl BootstrapOptions {
    /// Creates options with every default set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates defaulted options, then applies `overrides`.
    pub fn create(overrides: &BootstrapOverrides) -> Self {
        let mut options = Self::default();
        options.apply(overrides);
        options
    }

    /// Creates options from an untyped JSON map.
    ///
    /// `null` and `{}` yield the defaults. Unknown keys and ill-typed values
    /// fail with [`FormError::InvalidOptions`].
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        BootstrapOverrides::from_json(value).map(|overrides| Self::create(&overrides))
    }

    /// Creates options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Returns whether the layout is horizontal.
    pub fn is_horizontal(&self) -> bool {
        self.layout == Layout::Horizontal
    }

    /// Returns whether the layout is inline.
    pub fn is_inline(&self) -> bool {
        self.layout == Layout::Inline
    }

    /// Derives the offset class from the label column class, turning
    /// `col-sm-2` into `offset-sm-2`. A class that does not follow the
    /// `col-<breakpoint>-<n>` pattern is returned as is.
    pub fn offset_col_class(&self) -> String {
        COL_CLASS
            .replace_all(&self.label_col_class, "offset-$1-$2")
            .into_owned()
    }

    /// Returns an independent copy of these options with `overrides`
    /// applied. The receiver is left untouched.
    #[must_use]
    pub fn scoped(&self, overrides: &BootstrapOverrides) -> Self {
        let mut scope = self.clone();
        scope.apply(overrides);
        trace!(layout = %scope.layout, disabled = scope.disabled, "scoped bootstrap options");
        scope
    }

    /// Like [`BootstrapOptions::scoped`], with overrides read from JSON.
    pub fn scoped_json(&self, value: &serde_json::Value) -> Result<Self> {
        BootstrapOverrides::from_json(value).map(|overrides| self.scoped(&overrides))
    }

    fn apply(&mut self, overrides: &BootstrapOverrides) {
        if let Some(layout) = overrides.layout {
            self.layout = layout;
        }
        if let Some(class) = &overrides.label_col_class {
            self.label_col_class.clone_from(class);
        }
        if let Some(class) = &overrides.control_col_class {
            self.control_col_class.clone_from(class);
        }
        if let Some(class) = &overrides.label_align_class {
            self.label_align_class.clone_from(class);
        }
        if let Some(class) = &overrides.inline_margin_class {
            self.inline_margin_class.clone_from(class);
        }
        if let Some(label) = &overrides.label {
            self.label = label.clone();
        }
        if let Some(prepend) = &overrides.prepend {
            self.prepend.clone_from(prepend);
        }
        if let Some(append) = &overrides.append {
            self.append.clone_from(append);
        }
        if let Some(help) = &overrides.help {
            self.help.clone_from(help);
        }
        if let Some(error) = &overrides.error {
            self.error.clone_from(error);
        }
        if let Some(check_inline) = overrides.check_inline {
            self.check_inline = check_inline;
        }
        if let Some(custom_control) = overrides.custom_control {
            self.custom_control = custom_control;
        }
        if let Some(disabled) = overrides.disabled {
            self.disabled = disabled;
        }
    }
}

impl From<BootstrapOverrides> for BootstrapOptions {
    fn from(overrides: BootstrapOverrides) -> Self {
        Self::create(&overrides)
    }
}

/// A partial set of [`BootstrapOptions`], applied on top of a form's
/// options for one field.
///
/// `None` leaves an option untouched. The nullable options (`prepend`,
/// `append`, `help`, `error`) use `Some(None)` to clear an inherited value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapOverrides {
    /// Form layout.
    pub layout: Option<Layout>,
    /// Label column class.
    pub label_col_class: Option<String>,
    /// Control column class.
    pub control_col_class: Option<String>,
    /// Label alignment class.
    pub label_align_class: Option<String>,
    /// Inline spacing class.
    pub inline_margin_class: Option<String>,
    /// Replacement label record. Plain text is accepted and normalized.
    #[serde(deserialize_with = "label_override")]
    pub label: Option<LabelOptions>,
    /// Input group prepend.
    #[serde(deserialize_with = "explicit")]
    pub prepend: Option<Option<Addon>>,
    /// Input group append.
    #[serde(deserialize_with = "explicit")]
    pub append: Option<Option<Addon>>,
    /// Help text.
    #[serde(deserialize_with = "explicit")]
    pub help: Option<Option<String>>,
    /// Manual error message.
    #[serde(deserialize_with = "explicit")]
    pub error: Option<Option<String>>,
    /// Inline checkboxes and radio buttons.
    pub check_inline: Option<bool>,
    /// Custom control skin.
    pub custom_control: Option<bool>,
    /// Raw control only.
    pub disabled: Option<bool>,
}

impl BootstrapOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from an untyped JSON map, rejecting unknown keys.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(value).map_err(|err| {
            debug!(error = %err, "rejected bootstrap options");
            FormError::from(err)
        })
    }

    /// Returns whether no option is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Sets the layout.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Sets the label column class.
    #[must_use]
    pub fn label_col_class(mut self, class: impl Into<String>) -> Self {
        self.label_col_class = Some(class.into());
        self
    }

    /// Sets the control column class.
    #[must_use]
    pub fn control_col_class(mut self, class: impl Into<String>) -> Self {
        self.control_col_class = Some(class.into());
        self
    }

    /// Sets the label alignment class.
    #[must_use]
    pub fn label_align_class(mut self, class: impl Into<String>) -> Self {
        self.label_align_class = Some(class.into());
        self
    }

    /// Sets the inline spacing class.
    #[must_use]
    pub fn inline_margin_class(mut self, class: impl Into<String>) -> Self {
        self.inline_margin_class = Some(class.into());
        self
    }

    /// Replaces the label record. A plain string becomes the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<LabelOptions>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the label text of the replacement label record.
    #[must_use]
    pub fn label_text(mut self, text: impl Into<String>) -> Self {
        self.label.get_or_insert_with(LabelOptions::default).text = Some(text.into());
        self
    }

    /// Sets the class of the replacement label record.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label.get_or_insert_with(LabelOptions::default).class = Some(class.into());
        self
    }

    /// Hides the label of the replacement label record.
    #[must_use]
    pub fn hide_label(mut self) -> Self {
        self.label.get_or_insert_with(LabelOptions::default).hide = true;
        self
    }

    /// Prepends text to the control.
    #[must_use]
    pub fn prepend(mut self, text: impl Into<String>) -> Self {
        self.prepend = Some(Some(Addon::text(text)));
        self
    }

    /// Prepends trusted markup to the control.
    #[must_use]
    pub fn prepend_html(mut self, html: impl Into<String>) -> Self {
        self.prepend = Some(Some(Addon::html(html)));
        self
    }

    /// Appends text to the control.
    #[must_use]
    pub fn append(mut self, text: impl Into<String>) -> Self {
        self.append = Some(Some(Addon::text(text)));
        self
    }

    /// Appends trusted markup to the control.
    #[must_use]
    pub fn append_html(mut self, html: impl Into<String>) -> Self {
        self.append = Some(Some(Addon::html(html)));
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(Some(text.into()));
        self
    }

    /// Clears an inherited help text.
    #[must_use]
    pub fn no_help(mut self) -> Self {
        self.help = Some(None);
        self
    }

    /// Sets a manual error message.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(Some(message.into()));
        self
    }

    /// Renders checkboxes and radio buttons inline.
    #[must_use]
    pub fn check_inline(mut self, check_inline: bool) -> Self {
        self.check_inline = Some(check_inline);
        self
    }

    /// Switches the control skin.
    #[must_use]
    pub fn custom_control(mut self, custom_control: bool) -> Self {
        self.custom_control = Some(custom_control);
        self
    }

    /// Bypasses Bootstrap markup entirely.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelValue {
    Text(String),
    Options(LabelOptions),
}

impl From<LabelValue> for LabelOptions {
    fn from(value: LabelValue) -> Self {
        match value {
            LabelValue::Text(text) => Self::from(text),
            LabelValue::Options(options) => options,
        }
    }
}

// `null` resets the label to an empty record.
fn label_override<'de, D>(deserializer: D) -> std::result::Result<Option<LabelOptions>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LabelValue>::deserialize(deserializer)?;
    Ok(Some(value.map(LabelOptions::from).unwrap_or_default()))
}

// A present key is an override even when its value is `null`.
fn explicit<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
