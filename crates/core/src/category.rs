// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::in_memory::InMemorySearchableRepository;
use crate::repository::SearchableRepository;
use crate::search::{SearchPolicy, SortKey};
use admin_catalog_domain::{Category, SortOrder};

/// Category fields that search can sort by.
pub const CATEGORY_SORTABLE_FIELDS: [&str; 2] = ["name", "created_at"];

/// Any searchable category store that can move between threads.
pub trait CategoryRepository: SearchableRepository<Category> + Send {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category> + Send + ?Sized {}

/// Category filtering and ordering.
///
/// - The filter matches names case-insensitively as a substring.
/// - Without a requested sort, newest categories come first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySearchPolicy;

impl SearchPolicy<Category> for CategorySearchPolicy {
    fn sortable_fields(&self) -> &[&'static str] {
        &CATEGORY_SORTABLE_FIELDS
    }

    fn matches(&self, entity: &Category, filter: &str) -> bool {
        entity
            .name()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }

    fn sort_key(&self, entity: &Category, field: &str) -> Option<SortKey> {
        match field {
            "name" => Some(SortKey::Text(entity.name().to_string())),
            "created_at" => Some(SortKey::Timestamp(entity.created_at())),
            _ => None,
        }
    }

    fn default_sort(&self) -> Option<(&'static str, SortOrder)> {
        Some(("created_at", SortOrder::Desc))
    }
}

/// In-memory category store.
pub type CategoryInMemoryRepository = InMemorySearchableRepository<Category, CategorySearchPolicy>;
