// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::{Repository, SearchableRepository};
use crate::search::{SearchPolicy, search_items};
use admin_catalog_domain::{Entity, SearchParams, SearchResult, UniqueEntityId};

/// A searchable repository backed by a `Vec`, in insertion order.
///
/// Not synchronised; callers sharing one instance across tasks must wrap it
/// in a lock.
#[derive(Debug, Clone)]
pub struct InMemorySearchableRepository<E, P> {
    items: Vec<E>,
    policy: P,
}

impl<E, P> InMemorySearchableRepository<E, P> {
    /// Creates an empty repository using `policy` for filtering and sorting.
    #[must_use]
    pub const fn new(policy: P) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    /// Borrows the stored entities in insertion order.
    #[must_use]
    pub fn items(&self) -> &[E] {
        &self.items
    }
}

impl<E, P: Default> Default for InMemorySearchableRepository<E, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<E: Entity, P> InMemorySearchableRepository<E, P> {
    fn position(&self, id: &UniqueEntityId) -> Result<usize, CoreError> {
        self.items
            .iter()
            .position(|item| item.unique_entity_id() == id)
            .ok_or_else(|| CoreError::NotFound {
                id: id.to_string(),
            })
    }
}

impl<E: Entity, P> Repository<E> for InMemorySearchableRepository<E, P> {
    fn insert(&mut self, entity: E) -> Result<(), CoreError> {
        self.items.push(entity);
        Ok(())
    }

    fn find_by_id(&mut self, id: &UniqueEntityId) -> Result<E, CoreError> {
        let index: usize = self.position(id)?;
        Ok(self.items[index].clone())
    }

    fn find_all(&mut self) -> Result<Vec<E>, CoreError> {
        Ok(self.items.clone())
    }

    fn update(&mut self, entity: E) -> Result<(), CoreError> {
        let index: usize = self.position(entity.unique_entity_id())?;
        self.items[index] = entity;
        Ok(())
    }

    fn delete(&mut self, id: &UniqueEntityId) -> Result<(), CoreError> {
        let index: usize = self.position(id)?;
        self.items.remove(index);
        Ok(())
    }
}

impl<E: Entity, P: SearchPolicy<E>> SearchableRepository<E> for InMemorySearchableRepository<E, P> {
    fn sortable_fields(&self) -> &[&'static str] {
        self.policy.sortable_fields()
    }

    fn search(&mut self, params: &SearchParams) -> Result<SearchResult<E>, CoreError> {
        Ok(search_items(&self.items, params, &self.policy))
    }
}
