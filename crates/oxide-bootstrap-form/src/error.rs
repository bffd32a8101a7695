//! Error types for the form builder.

use indexmap::IndexMap;
use thiserror::Error;

/// Form builder errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// An option map was rejected at the configuration boundary.
    #[error("invalid bootstrap options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// Layout name outside of `vertical`, `horizontal` and `inline`.
    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    /// Invalid field value handed to a raw control.
    #[error("invalid value for field {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Messages of invalid fields, keyed by method in the order they were
/// reported.
///
/// The lookup shipped with the crate; other sources plug in through
/// [`crate::ErrorSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: IndexMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `method`.
    pub fn add(&mut self, method: &str, message: impl Into<String>) {
        self.messages
            .entry(method.to_string())
            .or_default()
            .push(message.into());
    }

    /// Chaining form of [`FieldErrors::add`].
    #[must_use]
    pub fn with(mut self, method: &str, message: impl Into<String>) -> Self {
        self.add(method, message);
        self
    }

    /// Messages recorded against `method`, empty when it is valid.
    pub fn messages(&self, method: &str) -> &[String] {
        self.messages.get(method).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Result type alias for form builder operations.
pub type Result<T> = std::result::Result<T, FormError>;
