// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod category_repository_tests;
mod initialization_tests;

use admin_catalog_domain::{Category, RawSearchParams, SearchParams, UniqueEntityId};
use serde_json::Value;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::SqlitePersistence;

pub fn create_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("in-memory database")
}

pub fn create_test_category(name: &str, created_at: OffsetDateTime) -> Category {
    Category::restore(
        UniqueEntityId::new(),
        name,
        Some(format!("{name} description")),
        true,
        created_at,
    )
    .unwrap()
}

/// Categories one second apart, oldest first.
pub fn create_test_categories(names: &[&str]) -> Vec<Category> {
    let base: OffsetDateTime = datetime!(2024-01-01 00:00:00.000000001 UTC);
    names
        .iter()
        .zip(0_i64..)
        .map(|(name, offset)| create_test_category(name, base + Duration::seconds(offset)))
        .collect()
}

pub fn create_test_params(raw: Value) -> SearchParams {
    let raw: RawSearchParams = serde_json::from_value(raw).unwrap();
    SearchParams::new(&raw)
}
