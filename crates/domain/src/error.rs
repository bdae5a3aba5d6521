// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::notification::ErrorFields;
use crate::validation::ValidationError;

/// Errors that can occur during domain construction and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The identifier is not a syntactically valid UUID.
    InvalidIdentifier(String),
    /// A single rule was violated while evaluating rules in strict mode.
    Validation(ValidationError),
    /// An entity failed validation.
    EntityValidation {
        /// The rendered notification message (`field:msg1,msg2;`).
        message: String,
        /// The raw field to messages mapping.
        errors: ErrorFields,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier(id) => {
                write!(f, "ID must be a valid UUID, got '{id}'")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::EntityValidation { message, .. } => {
                write!(f, "Entity validation failed: {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
