// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{StubEntity, StubRepository};
use crate::{CoreError, Repository, SearchableRepository};
use admin_catalog_domain::{Entity, UniqueEntityId};

#[test]
fn test_insert_then_find_by_id_returns_equal_entity() {
    let mut repo: StubRepository = StubRepository::default();
    let entity: StubEntity = StubEntity::new("some name", 5);

    repo.insert(entity.clone()).unwrap();

    let found: StubEntity = repo.find_by_id(entity.unique_entity_id()).unwrap();
    assert_eq!(found, entity);
    assert_eq!(found.to_dict(), entity.to_dict());
}

#[test]
fn test_find_by_id_unknown_fails_with_not_found() {
    let mut repo: StubRepository = StubRepository::default();
    let id: UniqueEntityId = UniqueEntityId::new();

    let result: Result<StubEntity, CoreError> = repo.find_by_id(&id);

    let err: CoreError = result.unwrap_err();
    assert_eq!(err, CoreError::NotFound { id: id.to_string() });
    assert_eq!(err.to_string(), format!("Entity not found using ID = {id}"));
}

#[test]
fn test_find_all_keeps_insertion_order() {
    let mut repo: StubRepository = StubRepository::default();
    let entities: Vec<StubEntity> = vec![
        StubEntity::new("c", 1),
        StubEntity::new("a", 2),
        StubEntity::new("b", 3),
    ];
    for entity in &entities {
        repo.insert(entity.clone()).unwrap();
    }

    assert_eq!(repo.find_all().unwrap(), entities);
    assert_eq!(repo.items(), entities.as_slice());
}

#[test]
fn test_update_replaces_in_place() {
    let mut repo: StubRepository = StubRepository::default();
    let first: StubEntity = StubEntity::new("first", 1);
    let second: StubEntity = StubEntity::new("second", 2);
    repo.insert(first.clone()).unwrap();
    repo.insert(second.clone()).unwrap();

    let updated: StubEntity = StubEntity {
        name: String::from("first updated"),
        price: 10,
        ..first
    };
    repo.update(updated.clone()).unwrap();

    let all: Vec<StubEntity> = repo.find_all().unwrap();
    assert_eq!(all, vec![updated, second]);
}

#[test]
fn test_update_unknown_fails_with_not_found() {
    let mut repo: StubRepository = StubRepository::default();
    repo.insert(StubEntity::new("stored", 1)).unwrap();
    let stranger: StubEntity = StubEntity::new("stranger", 2);

    let result: Result<(), CoreError> = repo.update(stranger.clone());

    assert_eq!(
        result,
        Err(CoreError::NotFound {
            id: stranger.id().to_string()
        })
    );
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn test_delete_then_find_fails_with_not_found() {
    let mut repo: StubRepository = StubRepository::default();
    let entity: StubEntity = StubEntity::new("doomed", 1);
    let keeper: StubEntity = StubEntity::new("keeper", 2);
    repo.insert(entity.clone()).unwrap();
    repo.insert(keeper.clone()).unwrap();

    repo.delete(entity.unique_entity_id()).unwrap();

    let err: CoreError = repo.find_by_id(entity.unique_entity_id()).unwrap_err();
    assert!(err.to_string().contains(entity.id()));
    assert_eq!(repo.find_all().unwrap(), vec![keeper]);
}

#[test]
fn test_delete_unknown_fails_with_not_found() {
    let mut repo: StubRepository = StubRepository::default();
    let id: UniqueEntityId = UniqueEntityId::new();

    let result: Result<(), CoreError> = repo.delete(&id);

    assert_eq!(result, Err(CoreError::NotFound { id: id.to_string() }));
}

#[test]
fn test_sortable_fields_come_from_policy() {
    let repo: StubRepository = StubRepository::default();
    assert_eq!(repo.sortable_fields(), &["name"]);
}
