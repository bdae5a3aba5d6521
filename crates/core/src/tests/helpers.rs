// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InMemorySearchableRepository, SearchPolicy, SortKey};
use admin_catalog_domain::{
    Category, Entity, EntityDict, RawSearchParams, SearchParams, UniqueEntityId,
};
use serde_json::{Value, json};
use time::{Duration, OffsetDateTime};
use time::macros::datetime;

/// Minimal entity for exercising the generic repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubEntity {
    pub unique_entity_id: UniqueEntityId,
    pub name: String,
    pub price: i64,
}

impl StubEntity {
    pub fn new(name: &str, price: i64) -> Self {
        Self {
            unique_entity_id: UniqueEntityId::new(),
            name: name.to_string(),
            price,
        }
    }
}

impl Entity for StubEntity {
    fn unique_entity_id(&self) -> &UniqueEntityId {
        &self.unique_entity_id
    }

    fn to_dict(&self) -> EntityDict {
        let mut dict: EntityDict = EntityDict::new();
        dict.insert("id".to_string(), Value::String(self.id().to_string()));
        dict.insert("name".to_string(), Value::String(self.name.clone()));
        dict.insert("price".to_string(), json!(self.price));
        dict
    }
}

/// Sorts by `name` only; the filter matches name exactly or price as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubSearchPolicy;

impl SearchPolicy<StubEntity> for StubSearchPolicy {
    fn sortable_fields(&self) -> &[&'static str] {
        &["name"]
    }

    fn matches(&self, entity: &StubEntity, filter: &str) -> bool {
        entity.name.to_lowercase().contains(&filter.to_lowercase())
            || entity.price.to_string() == filter
    }

    fn sort_key(&self, entity: &StubEntity, field: &str) -> Option<SortKey> {
        match field {
            "name" => Some(SortKey::Text(entity.name.clone())),
            "price" => Some(SortKey::Integer(entity.price)),
            _ => None,
        }
    }
}

/// Uses every default hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMatchPolicy;

impl SearchPolicy<StubEntity> for NoMatchPolicy {
    fn sortable_fields(&self) -> &[&'static str] {
        &[]
    }

    fn sort_key(&self, _entity: &StubEntity, _field: &str) -> Option<SortKey> {
        None
    }
}

pub type StubRepository = InMemorySearchableRepository<StubEntity, StubSearchPolicy>;

pub fn create_test_params(raw: Value) -> SearchParams {
    let raw: RawSearchParams = serde_json::from_value(raw).unwrap();
    SearchParams::new(&raw)
}

pub fn create_test_category(name: &str, created_at: OffsetDateTime) -> Category {
    Category::restore(UniqueEntityId::new(), name, None, true, created_at).unwrap()
}

/// Categories one second apart, oldest first.
pub fn create_test_categories(names: &[&str]) -> Vec<Category> {
    let base: OffsetDateTime = datetime!(2024-01-01 00:00:00 UTC);
    names
        .iter()
        .zip(0_i64..)
        .map(|(name, offset)| create_test_category(name, base + Duration::seconds(offset)))
        .collect()
}
