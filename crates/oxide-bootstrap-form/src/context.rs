//! Collaborator seams: error-state lookup and label text.

use std::collections::HashMap;

use crate::error::FieldErrors;
use crate::naming::humanize;

/// Error-state lookup for the fields of one form object.
pub trait ErrorSource {
    /// Returns the messages for `method`, in order. Empty when the field
    /// is valid.
    fn errors_for(&self, method: &str) -> Vec<String>;
}

impl ErrorSource for FieldErrors {
    fn errors_for(&self, method: &str) -> Vec<String> {
        self.messages(method).to_vec()
    }
}

impl ErrorSource for HashMap<String, Vec<String>> {
    fn errors_for(&self, method: &str) -> Vec<String> {
        self.get(method).cloned().unwrap_or_default()
    }
}

/// No errors at all.
impl ErrorSource for () {
    fn errors_for(&self, _method: &str) -> Vec<String> {
        Vec::new()
    }
}

impl<T: ErrorSource + ?Sized> ErrorSource for &T {
    fn errors_for(&self, method: &str) -> Vec<String> {
        (**self).errors_for(method)
    }
}

/// Display text for a field label.
pub trait LabelText {
    /// Returns the label text of `method` on `object_name`.
    fn label_text(&self, object_name: Option<&str>, method: &str) -> String;
}

/// Derives label text from the method name: `first_name` becomes
/// `First name`, `author_id` becomes `Author`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Humanize;

impl LabelText for Humanize {
    fn label_text(&self, _object_name: Option<&str>, method: &str) -> String {
        humanize(method)
    }
}

impl<F> LabelText for F
where
    F: Fn(Option<&str>, &str) -> String,
{
    fn label_text(&self, object_name: Option<&str>, method: &str) -> String {
        self(object_name, method)
    }
}

/// Derives a second error key from a field whose own lookup came back
/// empty.
pub type ErrorKeyFallback = fn(&str) -> Option<String>;

/// Default [`ErrorKeyFallback`]: `author_id` falls back to `author`.
pub fn strip_association_suffix(method: &str) -> Option<String> {
    method
        .strip_suffix("_id")
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}
