// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Category queries.
//!
//! All queries use Diesel DSL and work across all supported backends.

use admin_catalog_domain::Category;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::CategoryRow;
use crate::diesel_schema::categories;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a category by its identifier.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `category_id` - The category identifier
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is not a valid category.
/// Returns `Ok(None)` if no category has this identifier.
pub fn find_category(
    conn: &mut _,
    category_id: &str,
) -> Result<Option<Category>, PersistenceError> {
    debug!(category_id, "Looking up category");

    let row: Option<CategoryRow> = categories::table
        .filter(categories::category_id.eq(category_id))
        .select(CategoryRow::as_select())
        .first(conn)
        .optional()?;

    row.map(CategoryRow::into_category).transpose()
}
}

backend_fn! {
/// Retrieves every category in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or any stored row is not a valid category.
pub fn list_categories(conn: &mut _) -> Result<Vec<Category>, PersistenceError> {
    let rows: Vec<CategoryRow> = categories::table
        .order(categories::category_seq.asc())
        .select(CategoryRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded categories");

    rows.into_iter().map(CategoryRow::into_category).collect()
}
}

backend_fn! {
/// Counts stored categories.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_categories(conn: &mut _) -> Result<i64, PersistenceError> {
    let count: i64 = categories::table.count().get_result(conn)?;
    Ok(count)
}
}
