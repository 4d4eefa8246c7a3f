//! Field rules shared by the insertable shapes.

use crate::error::{FieldError, ValidationError};

/// Accumulates field errors so every failing field is reported at once.
#[derive(Debug, Default)]
pub(crate) struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    /// Require a value to be present, returning it when it is. The default
    /// placeholder returned otherwise is discarded by [`Checks::finish`].
    pub(crate) fn required<T: Default>(&mut self, field: &'static str, value: Option<T>) -> T {
        if let Some(value) = value {
            value
        } else {
            self.errors.push(FieldError::Required(field));
            T::default()
        }
    }

    /// Require a present, non-blank value.
    pub(crate) fn non_empty(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                self.errors.push(FieldError::Required(field));
                String::new()
            }
        }
    }

    /// Check a minimum character count, whitespace included. Missing values
    /// were already reported.
    pub(crate) fn min_chars(&mut self, field: &'static str, value: &str, min: usize) {
        if self.reported(field) {
            return;
        }
        if value.chars().count() < min {
            self.errors.push(FieldError::TooShort { field, min });
        }
    }

    pub(crate) fn email(&mut self, field: &'static str, value: &str) {
        if self.reported(field) {
            return;
        }
        if !is_email(value) {
            self.errors.push(FieldError::InvalidEmail(field));
        }
    }

    fn reported(&self, field: &'static str) -> bool {
        self.errors.iter().any(|err| err.field() == field)
    }

    /// Turn the collected errors into a result.
    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Fields(self.errors))
        }
    }
}

/// Loose structural email check: one `@`, a non-empty local part, and a
/// dotted domain with no empty labels and no whitespace anywhere.
pub(crate) fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
