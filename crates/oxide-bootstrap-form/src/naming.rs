//! Field naming conventions: `user[email]` names and `user_email` ids.

use std::sync::LazyLock;

use regex::Regex;

static ID_UNSAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\[|[^-a-zA-Z0-9:.]").expect("id pattern is valid"));
static VALUE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s.]").expect("separator pattern is valid"));
static VALUE_UNSAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-\w]").expect("value pattern is valid"));

/// A field of a form object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName<'a> {
    /// Name of the form object, `user` in `user[email]`.
    pub object_name: Option<&'a str>,
    /// Field method, `email` in `user[email]`.
    pub method: &'a str,
}

impl<'a> FieldName<'a> {
    /// Creates a field name.
    pub const fn new(object_name: Option<&'a str>, method: &'a str) -> Self {
        Self {
            object_name,
            method,
        }
    }

    /// The `name` attribute: `user[email]`, or `email` without an object.
    pub fn name(&self) -> String {
        match self.object_name {
            Some(object) => format!("{object}[{}]", self.method),
            None => self.method.to_string(),
        }
    }

    /// The `name` attribute of a multi-valued field: `user[tags][]`.
    pub fn multiple_name(&self) -> String {
        format!("{}[]", self.name())
    }

    /// The `id` attribute: `user_email`.
    pub fn id(&self) -> String {
        let method = self.method.trim_end_matches('?');
        match self.object_name {
            Some(object) => {
                let object = ID_UNSAFE.replace_all(object, "_");
                format!("{}_{method}", object.trim_end_matches('_'))
            }
            None => method.to_string(),
        }
    }

    /// The `id` of one choice of the field: `user_color_dark_blue` for the
    /// value `Dark Blue`.
    pub fn id_for_value(&self, value: &str) -> String {
        format!("{}_{}", self.id(), sanitize_value(value))
    }

    /// The `name` attribute of one part of a multi-parameter field:
    /// `user[born_at(1i)]`.
    pub fn part_name(&self, position: u8) -> String {
        let method = format!("{}({position}i)", self.method);
        FieldName::new(self.object_name, &method).name()
    }

    /// The `id` attribute of one part of a multi-parameter field:
    /// `user_born_at_1i`.
    pub fn part_id(&self, position: u8) -> String {
        format!("{}_{position}i", self.id())
    }
}

/// Turns a choice value into an id fragment.
pub fn sanitize_value(value: &str) -> String {
    let separated = VALUE_SEPARATOR.replace_all(value, "_");
    VALUE_UNSAFE.replace_all(&separated, "").to_lowercase()
}

/// Turns a method name into display text: `first_name` becomes
/// `First name`.
pub fn humanize(method: &str) -> String {
    let trimmed = method.trim_start_matches('_');
    let stem = trimmed.strip_suffix("_id").unwrap_or(trimmed);
    let words = stem.replace('_', " ").to_lowercase();
    let mut chars = words.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_id() {
        let field = FieldName::new(Some("user"), "email");
        assert_eq!(field.name(), "user[email]");
        assert_eq!(field.multiple_name(), "user[email][]");
        assert_eq!(field.id(), "user_email");
    }

    #[test]
    fn test_name_without_object() {
        let field = FieldName::new(None, "query");
        assert_eq!(field.name(), "query");
        assert_eq!(field.id(), "query");
    }

    #[test]
    fn test_nested_object_id() {
        let field = FieldName::new(Some("user[address]"), "city");
        assert_eq!(field.name(), "user[address][city]");
        assert_eq!(field.id(), "user_address_city");
    }

    #[test]
    fn test_id_for_value() {
        let field = FieldName::new(Some("user"), "test");
        assert_eq!(field.id_for_value("a"), "user_test_a");
        assert_eq!(field.id_for_value("Dark Blue"), "user_test_dark_blue");
        assert_eq!(field.id_for_value("v1.2/x"), "user_test_v1_2x");
    }

    #[test]
    fn test_part_names() {
        let field = FieldName::new(Some("user"), "test");
        assert_eq!(field.part_name(1), "user[test(1i)]");
        assert_eq!(field.part_id(5), "user_test_5i");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("email"), "Email");
        assert_eq!(humanize("first_name"), "First name");
        assert_eq!(humanize("author_id"), "Author");
        assert_eq!(humanize("URL"), "Url");
        assert_eq!(humanize(""), "");
    }
}
