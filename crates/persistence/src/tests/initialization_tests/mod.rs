// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test calls `SqlitePersistence::new_in_memory()`,
//! so connection setup and migrations are exercised throughout. These tests
//! cover isolation and the file-backed constructor explicitly.

use std::path::{Path, PathBuf};

use admin_catalog::Repository;
use admin_catalog_domain::{Category, Entity};

use super::{create_test_category, create_test_persistence};
use crate::{PersistenceError, SqlitePersistence};

fn temp_database_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "admin_catalog_{label}_{}_{}.db",
        std::process::id(),
        time::OffsetDateTime::now_utc().unix_timestamp_nanos()
    ))
}

fn remove_database_files(path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.as_os_str().to_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, PersistenceError> = SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence: SqlitePersistence = create_test_persistence();

    let result: Result<i64, PersistenceError> = persistence.count_categories();

    assert_eq!(
        result,
        Ok(0),
        "Migrations must have applied for the categories table to exist"
    );
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: SqlitePersistence = create_test_persistence();
    let mut db2: SqlitePersistence = create_test_persistence();

    db1.insert(create_test_category("Movie", time::OffsetDateTime::now_utc()))
        .unwrap();

    assert_eq!(db1.count_categories().unwrap(), 1, "db1 should have 1 category");
    assert_eq!(
        db2.count_categories().unwrap(),
        0,
        "db2 should have 0 categories (isolated)"
    );
}

#[test]
fn test_file_database_survives_reopen() {
    let path: PathBuf = temp_database_path("reopen");
    let category: Category = create_test_category("Documentary", time::OffsetDateTime::now_utc());

    {
        let mut persistence: SqlitePersistence = SqlitePersistence::new_with_file(&path).unwrap();
        persistence.insert(category.clone()).unwrap();
    }

    let mut reopened: SqlitePersistence = SqlitePersistence::new_with_file(&path).unwrap();
    let found: Category = reopened.find_by_id(category.unique_entity_id()).unwrap();
    assert_eq!(found, category);

    drop(reopened);
    remove_database_files(&path);
}
