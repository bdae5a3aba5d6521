// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use admin_catalog_domain::{
    Category, DEFAULT_IS_ACTIVE, Entity, Notification, RawSearchParams, SearchResult,
    ValidatorRules,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;

use crate::error::ApiError;

/// Body submitted to create or replace a category.
///
/// Fields are kept as raw JSON so wrongly typed values are reported per
/// field instead of failing deserialization. Missing fields are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub is_active: Value,
}

impl CategoryPayload {
    /// Converts the payload into a create request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::EntityValidation` if a field has the wrong type.
    pub fn into_create_request(self) -> Result<CreateCategoryRequest, ApiError> {
        let (name, description, is_active) = self.into_fields()?;
        Ok(CreateCategoryRequest {
            name,
            description,
            is_active,
        })
    }

    /// Converts the payload into an update request for `id`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::EntityValidation` if a field has the wrong type.
    pub fn into_update_request(self, id: String) -> Result<UpdateCategoryRequest, ApiError> {
        let (name, description, is_active) = self.into_fields()?;
        Ok(UpdateCategoryRequest {
            id,
            name,
            description,
            is_active,
        })
    }

    /// Checks field types, then unpacks them. `null` means absent.
    fn into_fields(self) -> Result<(String, Option<String>, Option<bool>), ApiError> {
        let rules: [ValidatorRules; 3] = [
            ValidatorRules::values(self.name.clone(), "name").string(),
            ValidatorRules::values(self.description.clone(), "description").string(),
            ValidatorRules::values(self.is_active.clone(), "is_active").boolean(),
        ];

        let mut notification: Notification = Notification::new();
        for rule in &rules {
            if let Some(message) = rule.error().filter(|_| rule.has_error()) {
                notification.add_error(rule.field(), message);
            }
        }
        if notification.has_errors() {
            return Err(ApiError::EntityValidation {
                message: notification.errors_msg(),
                errors: notification.into_errors(),
            });
        }

        let name: String = match self.name {
            Value::String(name) => name,
            _ => String::new(),
        };
        let description: Option<String> = match self.description {
            Value::String(description) => Some(description),
            _ => None,
        };
        Ok((name, description, self.is_active.as_bool()))
    }
}

/// API request to create a category.
///
/// An empty `name` is reported by the entity as required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to [`DEFAULT_IS_ACTIVE`] when absent.
    pub is_active: Option<bool>,
}

impl CreateCategoryRequest {
    /// Resolves the requested active flag against the shared default.
    #[must_use]
    pub fn is_active_or_default(&self) -> bool {
        self.is_active.unwrap_or(DEFAULT_IS_ACTIVE)
    }
}

/// API request to fetch one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCategoryRequest {
    pub id: String,
}

/// API request to list categories. Every field is normalized by the search layer.
pub type ListCategoriesRequest = RawSearchParams;

/// API request to change a category.
///
/// `is_active` of `Some(true)` activates, `Some(false)` deactivates and
/// `None` leaves the flag alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryRequest {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// API request to delete a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCategoryRequest {
    pub id: String,
}

/// A category as seen by API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// RFC 3339 creation time.
    pub created_at: String,
}

impl CategoryOutput {
    /// Converts a domain category into its API form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the creation time cannot be rendered.
    pub fn from_category(category: &Category) -> Result<Self, ApiError> {
        let created_at: String =
            category
                .created_at()
                .format(&Rfc3339)
                .map_err(|e| ApiError::Internal {
                    message: format!("Failed to format created_at: {e}"),
                })?;

        Ok(Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at,
        })
    }
}

/// One page of list output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOutput<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub last_page: usize,
}

impl<T> PaginationOutput<T> {
    /// Builds list output from a search result, converting each item.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error.
    pub fn try_from_result<E>(
        result: SearchResult<E>,
        convert: impl Fn(&E) -> Result<T, ApiError>,
    ) -> Result<Self, ApiError> {
        let total: usize = result.total();
        let current_page: usize = result.current_page();
        let per_page: usize = result.per_page();
        let last_page: usize = result.last_page();
        let items: Vec<T> = result
            .into_items()
            .iter()
            .map(convert)
            .collect::<Result<Vec<T>, ApiError>>()?;

        Ok(Self {
            items,
            total,
            current_page,
            per_page,
            last_page,
        })
    }
}
