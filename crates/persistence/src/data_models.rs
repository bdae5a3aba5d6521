// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use admin_catalog_domain::{Category, UniqueEntityId};
use diesel::prelude::*;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::diesel_schema::categories;
use crate::error::PersistenceError;

/// Fixed-width UTC storage format. Lexical order matches chronological order.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z");

/// Renders a timestamp in the storage format, normalised to UTC.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .to_offset(UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("cannot format timestamp: {e}")))
}

/// Parses a timestamp written by [`format_timestamp`].
///
/// # Errors
///
/// Returns `PersistenceError::CorruptRecord` if the text is not in the storage format.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    PrimitiveDateTime::parse(value, TIMESTAMP_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| PersistenceError::CorruptRecord(format!("invalid timestamp '{value}': {e}")))
}

/// Diesel Queryable struct for category rows.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = categories)]
pub struct CategoryRow {
    pub category_seq: i64,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: i32,
    pub created_at: String,
}

impl CategoryRow {
    /// Rebuilds the domain entity, re-running its validation.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CorruptRecord` if the row does not hold a valid category.
    pub fn into_category(self) -> Result<Category, PersistenceError> {
        let id: UniqueEntityId = UniqueEntityId::parse(&self.category_id)
            .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
        let created_at: OffsetDateTime = parse_timestamp(&self.created_at)?;

        Category::restore(
            id,
            self.name,
            self.description,
            self.is_active != 0,
            created_at,
        )
        .map_err(|e| {
            PersistenceError::CorruptRecord(format!(
                "category {} (seq {}): {e}",
                self.category_id, self.category_seq
            ))
        })
    }
}
