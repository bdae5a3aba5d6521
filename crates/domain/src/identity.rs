// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// The unique identifier of an entity.
///
/// The value is always a string that parses as a UUID. It is fixed at
/// construction; there is no way to change it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueEntityId {
    value: String,
}

impl UniqueEntityId {
    /// Generates a fresh random (v4) identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::from(Uuid::new_v4())
    }

    /// Builds an identifier from an existing string.
    ///
    /// The string is kept exactly as given when it is a valid UUID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentifier` if `raw` is not a UUID.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(raw).map_err(|_| DomainError::InvalidIdentifier(raw.to_string()))?;
        Ok(Self {
            value: raw.to_string(),
        })
    }

    /// Builds an identifier from an optional string, generating one when absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentifier` if `raw` is present and not a UUID.
    pub fn from_optional(raw: Option<&str>) -> Result<Self, DomainError> {
        raw.map_or_else(|| Ok(Self::new()), Self::parse)
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UniqueEntityId {
    fn from(uuid: Uuid) -> Self {
        Self {
            value: uuid.hyphenated().to_string(),
        }
    }
}

impl FromStr for UniqueEntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Uuid::parse_str(&value).map_err(|_| DomainError::InvalidIdentifier(value.clone()))?;
        Ok(Self { value })
    }
}

impl From<UniqueEntityId> for String {
    fn from(id: UniqueEntityId) -> Self {
        id.value
    }
}

impl std::fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
