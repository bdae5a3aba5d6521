// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::identity::UniqueEntityId;
use serde_json::{Map, Value};

/// Plain-data export of an entity: `id` as a string plus declared fields.
pub type EntityDict = Map<String, Value>;

/// An identity-bearing domain object.
///
/// Implementors expose no setters. Field changes go through methods defined
/// alongside the type, and those methods re-validate.
pub trait Entity: Clone {
    /// Returns the identity of this entity.
    fn unique_entity_id(&self) -> &UniqueEntityId;

    /// Returns the identity value as a plain string.
    fn id(&self) -> &str {
        self.unique_entity_id().value()
    }

    /// Exports the entity as a field map.
    ///
    /// The identity wrapper never appears in the map; `id` is a plain string.
    fn to_dict(&self) -> EntityDict;
}
