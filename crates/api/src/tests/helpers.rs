// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CategoryOutput, CreateCategoryRequest, create_category};
use admin_catalog::{CategoryInMemoryRepository, CategoryRepository};
use admin_catalog_persistence::SqlitePersistence;

pub fn create_test_repository() -> CategoryInMemoryRepository {
    CategoryInMemoryRepository::default()
}

pub fn create_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Both repository implementations, so each test can run against either.
pub fn create_test_repositories() -> Vec<Box<dyn CategoryRepository>> {
    let in_memory: Box<dyn CategoryRepository> = Box::new(create_test_repository());
    let persistent: Box<dyn CategoryRepository> = Box::new(create_test_persistence());
    vec![in_memory, persistent]
}

pub fn create_request(name: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
        description: None,
        is_active: None,
    }
}

pub fn create_test_category<R: CategoryRepository + ?Sized>(
    repository: &mut R,
    name: &str,
) -> CategoryOutput {
    create_category(repository, create_request(name)).expect("Failed to create category")
}
