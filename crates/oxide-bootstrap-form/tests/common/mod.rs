#![allow(dead_code)]

use oxide_bootstrap_form::{BootstrapOptions, BootstrapOverrides, FormBuilder, Layout};

/// Builder for a `user` form with the given form level options.
pub fn form<'a>(overrides: BootstrapOverrides) -> FormBuilder<'a> {
    FormBuilder::new(Some("user"), BootstrapOptions::create(&overrides))
}

/// Builder for a `user` form with the plain control skin.
pub fn plain_form<'a>() -> FormBuilder<'a> {
    form(BootstrapOverrides::new().custom_control(false))
}

pub fn horizontal_form<'a>() -> FormBuilder<'a> {
    form(BootstrapOverrides::new().layout(Layout::Horizontal))
}

pub fn inline_form<'a>() -> FormBuilder<'a> {
    form(BootstrapOverrides::new().layout(Layout::Inline))
}

/// Two `(value, text)` choices.
pub fn choices() -> Vec<(String, String)> {
    vec![
        ("a".to_string(), "a".to_string()),
        ("b".to_string(), "b".to_string()),
    ]
}

/// Class attribute of the first `<tag` in `html`.
pub fn class_of(html: &str, tag: &str) -> String {
    let open = format!("<{tag}");
    let start = html
        .find(&open)
        .unwrap_or_else(|| panic!("no <{tag}> in {html}"));
    let element = &html[start..];
    let end = element.find('>').unwrap_or(element.len());
    let element = &element[..end];
    element
        .find("class=\"")
        .map(|at| {
            let value = &element[at + 7..];
            value[..value.find('"').unwrap_or(value.len())].to_string()
        })
        .unwrap_or_default()
}

/// Asserts that `first` occurs in `html` before `second`.
pub fn assert_before(html: &str, first: &str, second: &str) {
    let a = html
        .find(first)
        .unwrap_or_else(|| panic!("`{first}` not found in {html}"));
    let b = html
        .find(second)
        .unwrap_or_else(|| panic!("`{second}` not found in {html}"));
    assert!(a < b, "expected `{first}` before `{second}` in {html}");
}
