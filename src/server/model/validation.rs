//! Field-level validation of request bodies.
//!
//! Request DTOs implement [`Validate`] to turn themselves into the parameter models used by
//! the service layer. Every failing field is collected into [`ValidationErrors`] rather than
//! stopping at the first problem, so the client receives the complete error map in one response.

use std::collections::BTreeMap;
use std::fmt;

/// Fallback text for an error that was recorded without a message.
pub const INVALID_VALUE_MESSAGE: &str = "Invalid value";

/// Validation failures keyed by the JSON field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error map holding a single message for `field`.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records a message for `field`, substituting [`INVALID_VALUE_MESSAGE`] for blank text.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        let message = if message.trim().is_empty() {
            INVALID_VALUE_MESSAGE.to_string()
        } else {
            message
        };

        self.errors.entry(field.into()).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Converts a bound request body into its validated parameter model.
pub trait Validate {
    type Validated;

    fn validate(self) -> Result<Self::Validated, ValidationErrors>;
}

/// Checks a required string field is present, non-blank and within `max_length` characters.
///
/// Records any failure under `field` and returns the value only when it passed.
pub fn required_string(
    errors: &mut ValidationErrors,
    field: &str,
    label: &str,
    value: Option<String>,
    max_length: usize,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => {
            check_max_length(errors, field, label, value, max_length)
        }
        _ => {
            errors.add(field, format!("The {} field is required.", label));
            None
        }
    }
}

/// Checks an optional string field: absent is fine, present must be non-blank and within
/// `max_length` characters.
///
/// Returns the value only when it was supplied and passed; failures are recorded under `field`.
pub fn optional_string(
    errors: &mut ValidationErrors,
    field: &str,
    label: &str,
    value: Option<String>,
    max_length: usize,
) -> Option<String> {
    match value {
        None => None,
        Some(value) if value.trim().is_empty() => {
            errors.add(field, format!("The {} field cannot be empty.", label));
            None
        }
        Some(value) => check_max_length(errors, field, label, value, max_length),
    }
}

/// Records a failure when a required non-string field is missing.
pub fn required<T>(
    errors: &mut ValidationErrors,
    field: &str,
    label: &str,
    value: Option<T>,
) -> Option<T> {
    if value.is_none() {
        errors.add(field, format!("The {} field is required.", label));
    }
    value
}

fn check_max_length(
    errors: &mut ValidationErrors,
    field: &str,
    label: &str,
    value: String,
    max_length: usize,
) -> Option<String> {
    if value.chars().count() > max_length {
        errors.add(
            field,
            format!(
                "The field {} must be a string with a maximum length of {}.",
                label, max_length
            ),
        );
        return None;
    }

    Some(value)
}
