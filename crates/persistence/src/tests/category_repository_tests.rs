// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persistent repository must answer exactly like the in-memory one.

use admin_catalog::{CategoryInMemoryRepository, CoreError, Repository, SearchableRepository};
use admin_catalog_domain::{Category, Entity, SearchParams, SearchResult, UniqueEntityId};
use serde_json::json;
use time::OffsetDateTime;
use time::macros::datetime;

use super::{
    create_test_categories, create_test_category, create_test_params, create_test_persistence,
};
use crate::SqlitePersistence;

fn names(result: &SearchResult<Category>) -> Vec<&str> {
    result.items().iter().map(Category::name).collect()
}

fn create_populated_persistence(names: &[&str]) -> SqlitePersistence {
    let mut persistence: SqlitePersistence = create_test_persistence();
    for category in create_test_categories(names) {
        persistence.insert(category).unwrap();
    }
    persistence
}

#[test]
fn test_insert_then_find_by_id_round_trips() {
    let mut persistence: SqlitePersistence = create_test_persistence();
    let category: Category = Category::restore(
        UniqueEntityId::new(),
        "Movie",
        None,
        false,
        datetime!(2024-03-01 10:20:30.123456789 UTC),
    )
    .unwrap();

    persistence.insert(category.clone()).unwrap();

    let found: Category = persistence.find_by_id(category.unique_entity_id()).unwrap();
    assert_eq!(found, category);
    assert_eq!(found.to_dict(), category.to_dict());
}

#[test]
fn test_insert_with_current_time_round_trips() {
    let mut persistence: SqlitePersistence = create_test_persistence();
    let category: Category = Category::new("Movie", Some(String::from("films")), true).unwrap();

    persistence.insert(category.clone()).unwrap();

    assert_eq!(
        persistence.find_by_id(category.unique_entity_id()).unwrap(),
        category
    );
}

#[test]
fn test_duplicate_identifier_is_rejected() {
    let mut persistence: SqlitePersistence = create_test_persistence();
    let category: Category = create_test_category("Movie", OffsetDateTime::now_utc());
    persistence.insert(category.clone()).unwrap();

    let result: Result<(), CoreError> = persistence.insert(category);

    assert!(matches!(result, Err(CoreError::Internal(_))));
}

#[test]
fn test_find_by_id_unknown_fails_with_not_found() {
    let mut persistence: SqlitePersistence = create_test_persistence();
    let id: UniqueEntityId = UniqueEntityId::new();

    let err: CoreError = persistence.find_by_id(&id).unwrap_err();

    assert_eq!(err, CoreError::NotFound { id: id.to_string() });
    assert_eq!(err.to_string(), format!("Entity not found using ID = {id}"));
}

#[test]
fn test_find_all_keeps_insertion_order() {
    let mut persistence: SqlitePersistence = create_test_persistence();
    let categories: Vec<Category> = create_test_categories(&["c", "a", "b"]);
    for category in &categories {
        persistence.insert(category.clone()).unwrap();
    }

    assert_eq!(persistence.find_all().unwrap(), categories);
}

#[test]
fn test_update_replaces_in_place() {
    let mut persistence: SqlitePersistence = create_test_persistence();
    let categories: Vec<Category> = create_test_categories(&["first", "second"]);
    for category in &categories {
        persistence.insert(category.clone()).unwrap();
    }

    let mut changed: Category = categories[0].clone();
    changed.update("first renamed", None).unwrap();
    changed.deactivate();
    persistence.update(changed.clone()).unwrap();

    let all: Vec<Category> = persistence.find_all().unwrap();
    assert_eq!(all, vec![changed, categories[1].clone()]);
}

#[test]
fn test_update_unknown_fails_with_not_found() {
    let mut persistence: SqlitePersistence = create_test_persistence();
    let stranger: Category = create_test_category("stranger", OffsetDateTime::now_utc());

    let result: Result<(), CoreError> = persistence.update(stranger.clone());

    assert_eq!(
        result,
        Err(CoreError::NotFound {
            id: stranger.id().to_string()
        })
    );
}

#[test]
fn test_delete_then_find_fails_with_not_found() {
    let mut persistence: SqlitePersistence = create_populated_persistence(&["doomed", "keeper"]);
    let all: Vec<Category> = persistence.find_all().unwrap();
    let doomed: &Category = &all[0];

    persistence.delete(doomed.unique_entity_id()).unwrap();

    let err: CoreError = persistence.find_by_id(doomed.unique_entity_id()).unwrap_err();
    assert!(err.to_string().contains(doomed.id()));
    assert_eq!(persistence.find_all().unwrap(), vec![all[1].clone()]);
}

#[test]
fn test_delete_unknown_fails_with_not_found() {
    let mut persistence: SqlitePersistence = create_test_persistence();
    let id: UniqueEntityId = UniqueEntityId::new();

    assert_eq!(
        persistence.delete(&id),
        Err(CoreError::NotFound { id: id.to_string() })
    );
}

#[test]
fn test_search_sorts_and_paginates() {
    let mut persistence: SqlitePersistence = create_populated_persistence(&["b", "a", "d", "e", "c"]);
    let params: SearchParams =
        create_test_params(json!({"page": 1, "per_page": 2, "sort": "name", "sort_order": "asc"}));

    let result: SearchResult<Category> = persistence.search(&params).unwrap();

    assert_eq!(names(&result), vec!["a", "b"]);
    assert_eq!(result.total(), 5);
    assert_eq!(result.last_page(), 3);
}

#[test]
fn test_search_default_order_is_newest_first() {
    let mut persistence: SqlitePersistence = create_populated_persistence(&["first", "second", "third"]);

    let result: SearchResult<Category> = persistence.search(&SearchParams::default()).unwrap();

    assert_eq!(names(&result), vec!["third", "second", "first"]);
}

#[test]
fn test_search_matches_in_memory_repository() {
    let categories: Vec<Category> =
        create_test_categories(&["test", "a", "TEST", "e", "TeSt", "Contest", "z"]);
    let mut persistence: SqlitePersistence = create_test_persistence();
    let mut in_memory: CategoryInMemoryRepository = CategoryInMemoryRepository::default();
    for category in &categories {
        persistence.insert(category.clone()).unwrap();
        in_memory.insert(category.clone()).unwrap();
    }

    let requests = [
        json!({}),
        json!({"filter": "TEST"}),
        json!({"sort": "name", "sort_order": "desc"}),
        json!({"sort": "created_at", "per_page": 3, "page": 2}),
        json!({"sort": "description"}),
        json!({"page": 2, "per_page": 2, "sort": "name", "filter": "test"}),
        json!({"page": 99}),
    ];
    for request in requests {
        let params: SearchParams = create_test_params(request.clone());
        assert_eq!(
            persistence.search(&params).unwrap(),
            in_memory.search(&params).unwrap(),
            "request {request}"
        );
    }
}

#[test]
fn test_sortable_fields() {
    let persistence: SqlitePersistence = create_test_persistence();
    assert_eq!(persistence.sortable_fields(), &["name", "created_at"]);
}
