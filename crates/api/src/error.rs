// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use admin_catalog::CoreError;
use admin_catalog_domain::{DomainError, ErrorFields};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An entity rejected the submitted values.
    EntityValidation {
        /// The rendered error summary (`field:msg1,msg2;`).
        message: String,
        /// Messages per field, in field order.
        errors: ErrorFields,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::EntityValidation { message, .. } => {
                write!(f, "Entity validation failed: {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidIdentifier(_) => ApiError::InvalidInput {
            field: String::from("id"),
            message: err.to_string(),
        },
        DomainError::Validation(validation) => ApiError::EntityValidation {
            message: validation.message,
            errors: ErrorFields::new(),
        },
        DomainError::EntityValidation { message, errors } => {
            ApiError::EntityValidation { message, errors }
        }
    }
}

/// Translates a core error into an API error.
///
/// `resource_type` names the entity a `NotFound` refers to.
#[must_use]
pub fn translate_core_error(err: CoreError, resource_type: &str) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::NotFound { .. } => ApiError::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message: err.to_string(),
        },
        CoreError::Internal(msg) => ApiError::Internal { message: msg },
    }
}
