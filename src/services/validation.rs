use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const MSG_INVALID: &str = "is invalid";
pub const MSG_TAKEN: &str = "has already been taken";
pub const MSG_EXACT_LENGTH: &str = "must be exactly 2 characters";

/// Error messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: &str, message: &str) -> bool {
        self.get(field).iter().any(|m| m == message)
    }

    /// Messages prefixed with their field, e.g. `slug is invalid`.
    pub fn full_messages(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{} {}", field, m)))
            .collect()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

/// Fails unless `value` is present and exactly two characters long.
pub fn validate_exact_length(field: &str, value: Option<&str>, errors: &mut ValidationErrors) {
    match value {
        Some(v) if v.chars().count() == 2 => {}
        _ => errors.add(field, MSG_EXACT_LENGTH),
    }
}
