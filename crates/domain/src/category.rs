// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::{Entity, EntityDict};
use crate::error::DomainError;
use crate::identity::UniqueEntityId;
use crate::notification::Notification;
use crate::validation::ValidatorRules;
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Whether a category is active when the caller does not say otherwise.
pub const DEFAULT_IS_ACTIVE: bool = true;

/// Maximum length of a category name, in characters.
pub const NAME_MAX_LENGTH: usize = 255;

/// Maximum length of a category description, in characters.
pub const DESCRIPTION_MAX_LENGTH: usize = 255;

/// A catalog category.
///
/// A `Category` value is always valid when it is first obtained from
/// [`Category::new`] or [`Category::restore`]. After a failed
/// [`Category::update`] the fields hold the rejected values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    unique_entity_id: UniqueEntityId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: OffsetDateTime,
}

impl Category {
    /// Creates a new category with a fresh identity and the current time.
    ///
    /// # Arguments
    ///
    /// * `name` - The category name
    /// * `description` - An optional description
    /// * `is_active` - Whether the category starts active
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EntityValidation` if any field is invalid.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        Self::restore(
            UniqueEntityId::new(),
            name,
            description,
            is_active,
            OffsetDateTime::now_utc(),
        )
    }

    /// Rebuilds a category from previously stored values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EntityValidation` if any field is invalid.
    pub fn restore(
        unique_entity_id: UniqueEntityId,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
        created_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        let category: Self = Self {
            unique_entity_id,
            name: name.into(),
            description,
            is_active,
            created_at,
        };
        category.validate()?;
        Ok(category)
    }

    /// Replaces name and description, then re-validates.
    ///
    /// The new values are kept even when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EntityValidation` if the new values are invalid.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), DomainError> {
        self.name = name.into();
        self.description = description;
        self.validate()
    }

    /// Marks the category active.
    pub const fn activate(&mut self) {
        self.is_active = true;
    }

    /// Marks the category inactive.
    pub const fn deactivate(&mut self) {
        self.is_active = false;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    fn validate(&self) -> Result<(), DomainError> {
        let rules: [ValidatorRules; 3] = [
            ValidatorRules::values(self.name.as_str(), "name")
                .required()
                .string()
                .max_length(NAME_MAX_LENGTH),
            ValidatorRules::values(self.description.clone(), "description")
                .string()
                .max_length(DESCRIPTION_MAX_LENGTH),
            ValidatorRules::values(self.is_active, "is_active").boolean(),
        ];

        let mut notification: Notification = Notification::new();
        for rule in &rules {
            if let Some(message) = rule.error().filter(|_| rule.has_error()) {
                notification.add_error(rule.field(), message);
            }
        }

        if notification.has_errors() {
            return Err(DomainError::EntityValidation {
                message: notification.errors_msg(),
                errors: notification.into_errors(),
            });
        }
        Ok(())
    }
}

impl Entity for Category {
    fn unique_entity_id(&self) -> &UniqueEntityId {
        &self.unique_entity_id
    }

    fn to_dict(&self) -> EntityDict {
        let created_at: Value = self
            .created_at
            .format(&Rfc3339)
            .map_or(Value::Null, Value::String);

        let mut dict: EntityDict = EntityDict::new();
        dict.insert(
            "id".to_string(),
            Value::String(self.unique_entity_id.value().to_string()),
        );
        dict.insert("name".to_string(), Value::String(self.name.clone()));
        dict.insert(
            "description".to_string(),
            self.description.clone().map_or(Value::Null, Value::String),
        );
        dict.insert("is_active".to_string(), Value::Bool(self.is_active));
        dict.insert("created_at".to_string(), created_at);
        dict
    }
}
