// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Category mutations.

use admin_catalog_domain::{Category, Entity};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::data_models::format_timestamp;
use crate::diesel_schema::categories;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new category row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `category` - The category to store
///
/// # Errors
///
/// Returns an error if the insert fails, including when the identifier
/// is already stored.
pub fn insert_category(conn: &mut _, category: &Category) -> Result<(), PersistenceError> {
    let created_at: String = format_timestamp(category.created_at())?;

    info!(
        category_id = category.id(),
        name = category.name(),
        "Inserting category"
    );

    diesel::insert_into(categories::table)
        .values((
            categories::category_id.eq(category.id()),
            categories::name.eq(category.name()),
            categories::description.eq(category.description()),
            categories::is_active.eq(i32::from(category.is_active())),
            categories::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Replaces every stored field of an existing category.
///
/// The row keeps its insertion position.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row has this category's identifier.
pub fn update_category(conn: &mut _, category: &Category) -> Result<(), PersistenceError> {
    let existing: i64 = categories::table
        .filter(categories::category_id.eq(category.id()))
        .count()
        .get_result(conn)?;
    if existing == 0 {
        return Err(PersistenceError::NotFound(category.id().to_string()));
    }

    let created_at: String = format_timestamp(category.created_at())?;

    debug!(category_id = category.id(), "Updating category");

    diesel::update(categories::table)
        .filter(categories::category_id.eq(category.id()))
        .set((
            categories::name.eq(category.name()),
            categories::description.eq(category.description()),
            categories::is_active.eq(i32::from(category.is_active())),
            categories::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a category row.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row has this identifier.
pub fn delete_category(conn: &mut _, category_id: &str) -> Result<(), PersistenceError> {
    info!(category_id, "Deleting category");

    let deleted: usize = diesel::delete(
        categories::table.filter(categories::category_id.eq(category_id)),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(category_id.to_string()));
    }
    Ok(())
}
}
