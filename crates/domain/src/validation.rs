// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation rules.
//!
//! Rules come in two flavours that share the same predicates and messages:
//!
//! - [`ValidatorRules`] collects the first violation and keeps chaining.
//!   Entities use it together with a [`Notification`](crate::Notification).
//! - [`StrictValidatorRules`] stops at the first violation and returns it
//!   as a [`ValidationError`].

use serde_json::Value;
use thiserror::Error;

/// A single rule violation raised by strict rule evaluation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// The rendered rule message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error from a rendered message.
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self { message }
    }
}

// Rule predicates. Each returns the message when the rule is violated.

fn check_required(value: &Value, field: &str) -> Option<String> {
    let empty: bool = match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    empty.then(|| format!("The {field} is required"))
}

fn check_string(value: &Value, field: &str) -> Option<String> {
    (!value.is_null() && !value.is_string()).then(|| format!("The {field} must be a string"))
}

fn check_max_length(value: &Value, field: &str, max_length: usize) -> Option<String> {
    let length: Option<usize> = match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        // Scalars without a length are left to the type rules.
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    };
    length
        .filter(|len| *len > max_length)
        .map(|_| format!("The {field} length must be smaller than {max_length}"))
}

fn check_boolean(value: &Value, field: &str) -> Option<String> {
    (!value.is_null() && !value.is_boolean()).then(|| format!("The {field} must be boolean"))
}

/// Collecting rule chain over one value.
///
/// Every rule is a no-op once an error has been recorded, so a chain keeps
/// at most the first violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRules {
    value: Value,
    field: String,
    error: Option<String>,
}

impl ValidatorRules {
    /// Starts a collecting chain for `value`, reported under `field`.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to validate
    /// * `field` - The field name used in messages
    #[must_use]
    pub fn values(value: impl Into<Value>, field: &str) -> Self {
        Self {
            value: value.into(),
            field: field.to_string(),
            error: None,
        }
    }

    fn evaluate(mut self, check: impl FnOnce(&Value, &str) -> Option<String>) -> Self {
        if self.has_error() {
            return self;
        }
        self.error = check(&self.value, &self.field);
        self
    }

    /// Fails if the value is null or an empty string.
    #[must_use]
    pub fn required(self) -> Self {
        self.evaluate(check_required)
    }

    /// Fails if the value is present and not a string.
    #[must_use]
    pub fn string(self) -> Self {
        self.evaluate(check_string)
    }

    /// Fails if the value is present and longer than `max_length`.
    #[must_use]
    pub fn max_length(self, max_length: usize) -> Self {
        self.evaluate(|value, field| check_max_length(value, field, max_length))
    }

    /// Fails if the value is present and not strictly `true` or `false`.
    #[must_use]
    pub fn boolean(self) -> Self {
        self.evaluate(check_boolean)
    }

    /// Returns whether a non-empty error has been recorded.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Returns the recorded error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the field name this chain reports under.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Strict rule chain over one value.
///
/// Each rule returns the first violation as an error instead of recording it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictValidatorRules {
    value: Value,
    field: String,
}

impl StrictValidatorRules {
    /// Starts a strict chain for `value`, reported under `field`.
    #[must_use]
    pub fn values(value: impl Into<Value>, field: &str) -> Self {
        Self {
            value: value.into(),
            field: field.to_string(),
        }
    }

    fn evaluate(
        self,
        check: impl FnOnce(&Value, &str) -> Option<String>,
    ) -> Result<Self, ValidationError> {
        match check(&self.value, &self.field) {
            Some(message) => Err(ValidationError::new(message)),
            None => Ok(self),
        }
    }

    /// Fails if the value is null or an empty string.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the rule is violated.
    pub fn required(self) -> Result<Self, ValidationError> {
        self.evaluate(check_required)
    }

    /// Fails if the value is present and not a string.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the rule is violated.
    pub fn string(self) -> Result<Self, ValidationError> {
        self.evaluate(check_string)
    }

    /// Fails if the value is present and longer than `max_length`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the rule is violated.
    pub fn max_length(self, max_length: usize) -> Result<Self, ValidationError> {
        self.evaluate(|value, field| check_max_length(value, field, max_length))
    }

    /// Fails if the value is present and not strictly `true` or `false`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the rule is violated.
    pub fn boolean(self) -> Result<Self, ValidationError> {
        self.evaluate(check_boolean)
    }
}
