use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field name -> messages, in the shape the UI highlights from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

/// Recorded for a form field that arrived as a number, bool, array or object.
pub const NOT_TEXT: &str = "Isian harus berupa teks.";

/// A raw form field, trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// Absent, `null` or blank.
    Missing,
    Text(&'a str),
    NotText,
}

pub fn field(raw: Option<&serde_json::Value>) -> Field<'_> {
    match raw {
        None | Some(serde_json::Value::Null) => Field::Missing,
        Some(serde_json::Value::String(s)) => match s.trim() {
            "" => Field::Missing,
            t => Field::Text(t),
        },
        Some(_) => Field::NotText,
    }
}

pub struct TextRule {
    pub field: &'static str,
    pub max_chars: usize,
    pub required: &'static str,
    pub too_long: &'static str,
}

/// Trims `value` and checks it against `rule`. Returns the trimmed text only
/// when it passed, recording a message otherwise.
pub fn text(
    errors: &mut FieldErrors,
    value: Option<&serde_json::Value>,
    rule: &TextRule,
) -> Option<String> {
    let trimmed = match field(value) {
        Field::Missing => {
            errors.add(rule.field, rule.required);
            return None;
        }
        Field::NotText => {
            errors.add(rule.field, NOT_TEXT);
            return None;
        }
        Field::Text(t) => t,
    };
    if trimmed.chars().count() > rule.max_chars {
        errors.add(rule.field, rule.too_long);
        return None;
    }
    Some(trimmed.to_string())
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part which is ignored.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    if raw.len() > 10 && !matches!(raw.as_bytes()[10], b'T' | b' ') {
        return None;
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
