// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use admin_catalog_domain::{Entity, SearchParams, SearchResult, UniqueEntityId};

/// Storage capability set for one entity type.
///
/// Implementations are drop-in substitutes for each other: the in-memory
/// repository and the persistent one honour the same contract.
pub trait Repository<E: Entity> {
    /// Appends an entity to the store.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the backing store fails.
    fn insert(&mut self, entity: E) -> Result<(), CoreError>;

    /// Looks up an entity by identity.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no entity has this identity.
    fn find_by_id(&mut self, id: &UniqueEntityId) -> Result<E, CoreError>;

    /// Returns every stored entity in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the backing store fails.
    fn find_all(&mut self) -> Result<Vec<E>, CoreError>;

    /// Replaces the stored entity sharing this entity's identity, in place.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no entity has this identity.
    fn update(&mut self, entity: E) -> Result<(), CoreError>;

    /// Removes the entity with this identity.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no entity has this identity.
    fn delete(&mut self, id: &UniqueEntityId) -> Result<(), CoreError>;
}

/// A repository that can answer paginated search requests.
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Fields that `search` will sort by. Other sort requests are ignored.
    fn sortable_fields(&self) -> &[&'static str];

    /// Filters, sorts and paginates the stored entities.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the backing store fails.
    fn search(&mut self, params: &SearchParams) -> Result<SearchResult<E>, CoreError>;
}
