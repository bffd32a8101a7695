//! Tests for inline form markup.

mod common;

use common::*;
use oxide_bootstrap_form::{BootstrapOverrides, FieldOptions};

#[test]
fn group_and_label_carry_the_margin() {
    let html = inline_form().text_field("email", FieldOptions::new());
    assert_eq!(
        html,
        concat!(
            r#"<div class="form-group mr-sm-2">"#,
            r#"<label class="mr-sm-2" for="user_email">Email</label>"#,
            r#"<input type="text" name="user[email]" id="user_email" class="form-control"></div>"#
        )
    );
}

#[test]
fn margin_class_override() {
    let html = inline_form().text_field(
        "email",
        BootstrapOverrides::new().inline_margin_class("mr-md-4").into(),
    );
    assert_eq!(class_of(&html, "div"), "form-group mr-md-4");
    assert_eq!(class_of(&html, "label"), "mr-md-4");
}

#[test]
fn hidden_label() {
    let html = inline_form().text_field("email", BootstrapOverrides::new().hide_label().into());
    assert_eq!(class_of(&html, "label"), "sr-only mr-sm-2");
    assert!(!html.contains("offset"));
}

#[test]
fn no_grid_columns() {
    let html = inline_form().text_field("email", FieldOptions::new());
    assert!(!html.contains("col-"));
    assert!(!html.contains("row"));
}

#[test]
fn submit_group_has_no_margin() {
    let html = inline_form().submit(Some("Go"), FieldOptions::new(), None);
    assert!(html.starts_with(r#"<div class="form-group"><input type="submit""#));
}

#[test]
fn free_group_carries_the_margin() {
    let html = inline_form().form_group(&BootstrapOverrides::new().label_text("Note"), || {
        "x".to_string()
    });
    assert_eq!(
        html,
        r#"<div class="form-group mr-sm-2"><label class="mr-sm-2">Note</label>x</div>"#
    );
}
