//! Ordered CSS class accumulation.

use std::fmt;

/// An ordered, de-duplicated list of CSS classes.
///
/// Classes are collected while a fragment is being composed and joined
/// once, when the `class` attribute is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a class list from a space separated `class` attribute value.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        list.push(value);
        list
    }

    /// Appends one or more space separated classes, skipping duplicates.
    pub fn push(&mut self, value: &str) -> &mut Self {
        for class in value.split_whitespace() {
            if !self.contains(class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    /// Appends classes when `condition` holds.
    pub fn push_if(&mut self, condition: bool, value: &str) -> &mut Self {
        if condition {
            self.push(value);
        }
        self
    }

    /// Appends classes from an optional value.
    pub fn push_opt(&mut self, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.push(value);
        }
        self
    }

    /// Builder variant of [`ClassList::push`].
    #[must_use]
    pub fn with(mut self, value: &str) -> Self {
        self.push(value);
        self
    }

    /// Removes a class if present.
    pub fn remove(&mut self, class: &str) -> &mut Self {
        self.classes.retain(|c| c != class);
        self
    }

    /// Returns whether `class` is part of the list.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns whether the list holds no class at all.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Joins the list into an attribute value, `None` when empty.
    pub fn finish(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.join(" "))
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}
