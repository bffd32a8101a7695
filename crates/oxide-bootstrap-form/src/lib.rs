//! # oxide-bootstrap-form
//!
//! Bootstrap 4 form markup: labels, controls, validation feedback, help
//! text and grid wrappers for vertical, horizontal and inline forms.
//!
//! This crate provides:
//! - Layered Bootstrap options with non-destructive per-field scoping
//! - A markup composer wrapping raw controls in form groups, fieldsets and
//!   input groups
//! - A form builder with helpers for every common field type
//! - `<form>` helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_bootstrap_form::{
//!     BootstrapOptions, BootstrapOverrides, FieldErrors, FieldOptions, FormBuilder, Layout,
//! };
//!
//! let errors = FieldErrors::new().with("email", "is required");
//! let form = FormBuilder::new(
//!     Some("user"),
//!     BootstrapOptions::create(&BootstrapOverrides::new().layout(Layout::Horizontal)),
//! )
//! .with_errors(&errors);
//!
//! let html = form.email_field(
//!     "email",
//!     FieldOptions::new().bootstrap(BootstrapOverrides::new().help("We never share it")),
//! );
//!
//! assert!(html.starts_with(r#"<div class="form-group row">"#));
//! assert!(html.contains("is-invalid"));
//! assert!(html.contains(r#"<div class="invalid-feedback">is required</div>"#));
//! ```
//!
//! ## Composing Around Your Own Controls
//!
//! ```rust
//! use oxide_bootstrap_form::{BootstrapOptions, BootstrapOverrides, Composer, Humanize, WidgetAttrs};
//!
//! let composer = Composer::new(Some("user"), &Humanize);
//! let options = BootstrapOptions::new().scoped(&BootstrapOverrides::new().prepend("@"));
//! let html = composer.form_group(&options, "handle", WidgetAttrs::new(), |attrs| {
//!     format!(r#"<input name="user[handle]" class="{}">"#, attrs.get("class").unwrap_or_default())
//! });
//!
//! assert!(html.contains(r#"<div class="input-group"><div class="input-group-prepend">"#));
//! ```

mod builder;
mod classes;
pub mod compose;
pub mod context;
mod error;
pub mod naming;
mod options;
mod view;
pub mod widgets;

pub use builder::{FieldErrorWrapping, FieldOptions, FormBuilder};
pub use classes::ClassList;
pub use compose::{ChoiceKind, Composer};
pub use context::{strip_association_suffix, ErrorKeyFallback, ErrorSource, Humanize, LabelText};
pub use error::{FieldErrors, FormError, Result};
pub use options::{
    Addon, BootstrapOptions, BootstrapOverrides, LabelOptions, Layout, DEFAULT_CUSTOM_CONTROL,
};
pub use view::{bootstrap_form_for, bootstrap_form_with, FormOptions};
pub use widgets::{Widget, WidgetAttrs};
