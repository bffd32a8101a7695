//! Multi-part date and time selects.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::{HiddenInput, Select, Widget, WidgetAttrs};
use crate::error::{FormError, Result};
use crate::naming::FieldName;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Which parts a [`DateSelect`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSelectKind {
    /// Year, month and day.
    Date,
    /// Year, month, day, hour and minute.
    DateTime,
    /// Hour and minute, the date travelling in hidden inputs.
    Time,
}

impl DateSelectKind {
    /// Class of the `<div>` wrapping the parts inside a form group.
    pub fn wrapper_class(self) -> &'static str {
        match self {
            Self::Date => "date_select",
            Self::DateTime => "datetime_select",
            Self::Time => "time_select",
        }
    }
}

/// A date and/or time split into one `<select>` per part, named
/// `user[born_at(1i)]` through `user[born_at(5i)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSelect {
    /// Rendered parts.
    pub kind: DateSelectKind,
    /// Years offered on either side of the selected one.
    pub year_radius: i32,
}

impl DateSelect {
    /// Creates a select of the given kind.
    pub const fn new(kind: DateSelectKind) -> Self {
        Self {
            kind,
            year_radius: 5,
        }
    }

    /// Year, month and day selects.
    pub const fn date() -> Self {
        Self::new(DateSelectKind::Date)
    }

    /// Date and time selects.
    pub const fn datetime() -> Self {
        Self::new(DateSelectKind::DateTime)
    }

    /// Hour and minute selects.
    pub const fn time() -> Self {
        Self::new(DateSelectKind::Time)
    }

    /// Parses a stored field value.
    ///
    /// Accepts `2012-02-03 12:00:00`, `2012-02-03T12:00`, `2012-02-03` and
    /// `12:00`. A bare time is placed on today's date.
    pub fn parse_value(field: &str, value: &str) -> Result<NaiveDateTime> {
        const FORMATS: [&str; 4] = [
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ];

        let value = value.trim();
        for format in FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(parsed);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(date.and_time(NaiveTime::MIN));
        }
        if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M") {
            return Ok(chrono::Utc::now().date_naive().and_time(time));
        }
        Err(FormError::InvalidValue {
            field: field.to_string(),
            message: format!("`{value}` is not a date or time"),
        })
    }

    /// Renders every part of `field` with `value` selected. `attrs` apply
    /// to each `<select>`; ids and names are derived per part.
    pub fn render(&self, field: &FieldName<'_>, value: NaiveDateTime, attrs: &WidgetAttrs) -> String {
        let mut html = String::new();
        match self.kind {
            DateSelectKind::Date => self.render_date(field, value, attrs, &mut html),
            DateSelectKind::DateTime => {
                self.render_date(field, value, attrs, &mut html);
                render_time(field, value, attrs, &mut html);
            }
            DateSelectKind::Time => {
                let parts = [
                    value.year().to_string(),
                    value.month().to_string(),
                    value.day().to_string(),
                ];
                for (position, part) in (1..).zip(parts) {
                    let hidden = WidgetAttrs::new().with("id", field.part_id(position));
                    html.push_str(&HiddenInput.render(&field.part_name(position), Some(&part), &hidden));
                }
                render_time(field, value, attrs, &mut html);
            }
        }
        html
    }

    fn render_date(
        &self,
        field: &FieldName<'_>,
        value: NaiveDateTime,
        attrs: &WidgetAttrs,
        html: &mut String,
    ) {
        let year = value.year();
        let years = ((year - self.year_radius)..=(year + self.year_radius)).map(|y| {
            let y = y.to_string();
            (y.clone(), y)
        });
        let months = (1..=12).zip(MONTHS).map(|(m, name)| (m.to_string(), name.to_string()));
        let days = (1..=31).map(|d: u32| (d.to_string(), d.to_string()));

        render_part(field, 1, years.collect(), &year.to_string(), attrs, html);
        render_part(field, 2, months.collect(), &value.month().to_string(), attrs, html);
        render_part(field, 3, days.collect(), &value.day().to_string(), attrs, html);
    }
}

fn render_time(field: &FieldName<'_>, value: NaiveDateTime, attrs: &WidgetAttrs, html: &mut String) {
    let padded = |n: u32| (format!("{n:02}"), format!("{n:02}"));
    let hour = format!("{:02}", value.hour());
    let minute = format!("{:02}", value.minute());

    render_part(field, 4, (0..24).map(padded).collect(), &hour, attrs, html);
    html.push_str(" : ");
    render_part(field, 5, (0..60).map(padded).collect(), &minute, attrs, html);
}

fn render_part(
    field: &FieldName<'_>,
    position: u8,
    choices: Vec<(String, String)>,
    selected: &str,
    attrs: &WidgetAttrs,
    html: &mut String,
) {
    let mut part_attrs = attrs.without(&["id", "name"]);
    part_attrs.set("id", field.part_id(position));
    let select = Select {
        choices,
        blank: None,
    };
    html.push_str(&select.render(&field.part_name(position), Some(selected), &part_attrs));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment() -> NaiveDateTime {
        DateSelect::parse_value("test", "2012-02-03 12:00:00").unwrap()
    }

    #[test]
    fn test_date_parts() {
        let field = FieldName::new(Some("user"), "test");
        let attrs = WidgetAttrs::new().with("class", "d-inline-block w-auto");
        let html = DateSelect::date().render(&field, moment(), &attrs);

        assert!(html.contains(r#"<select name="user[test(1i)]" class="d-inline-block w-auto" id="user_test_1i">"#));
        assert!(html.contains(r#"<option value="2007">2007</option>"#));
        assert!(html.contains(r#"<option value="2012" selected>2012</option>"#));
        assert!(html.contains(r#"<option value="2017">2017</option>"#));
        assert!(!html.contains(r#"value="2018""#));
        assert!(html.contains(r#"<option value="2" selected>February</option>"#));
        assert!(html.contains(r#"<option value="3" selected>3</option>"#));
        assert!(html.contains(r#"<option value="31">31</option>"#));
        assert!(!html.contains("user_test_4i"));
    }

    #[test]
    fn test_datetime_parts() {
        let field = FieldName::new(Some("user"), "test");
        let html = DateSelect::datetime().render(&field, moment(), &WidgetAttrs::new());

        let minute_at = html.find(r#"name="user[test(5i)]""#).unwrap();
        let separator_at = html.find(" : ").unwrap();
        let hour_at = html.find(r#"name="user[test(4i)]""#).unwrap();
        assert!(hour_at < separator_at && separator_at < minute_at);
        assert!(html.contains(r#"<option value="12" selected>12</option>"#));
        assert!(html.contains(r#"<option value="00" selected>00</option>"#));
        assert!(html.contains(r#"<option value="59">59</option>"#));
    }

    #[test]
    fn test_time_parts_carry_date_in_hidden_inputs() {
        let field = FieldName::new(Some("user"), "test");
        let html = DateSelect::time().render(&field, moment(), &WidgetAttrs::new());

        assert!(html.starts_with(
            r#"<input type="hidden" name="user[test(1i)]" value="2012" id="user_test_1i"><input type="hidden" name="user[test(2i)]" value="2" id="user_test_2i">"#
        ));
        assert!(html.contains(r#"<select name="user[test(4i)]" id="user_test_4i">"#));
        assert!(!html.contains("<select name=\"user[test(1i)]\""));
    }

    #[test]
    fn test_parse_value() {
        let date = DateSelect::parse_value("test", "2012-02-03").unwrap();
        assert_eq!(date.hour(), 0);
        let datetime = DateSelect::parse_value("test", "2012-02-03T08:30").unwrap();
        assert_eq!(datetime.minute(), 30);
        assert_eq!(DateSelect::parse_value("test", "08:15").unwrap().hour(), 8);
    }

    #[test]
    fn test_parse_invalid_value() {
        let err = DateSelect::parse_value("born_at", "yesterday").unwrap_err();
        assert!(matches!(err, FormError::InvalidValue { ref field, .. } if field == "born_at"));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_wrapper_class() {
        assert_eq!(DateSelectKind::Date.wrapper_class(), "date_select");
        assert_eq!(DateSelectKind::DateTime.wrapper_class(), "datetime_select");
        assert_eq!(DateSelectKind::Time.wrapper_class(), "time_select");
    }
}
