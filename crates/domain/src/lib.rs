// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod category;
mod entity;
mod error;
mod identity;
mod notification;
mod search;
mod validation;

#[cfg(test)]
mod tests;

pub use category::{Category, DEFAULT_IS_ACTIVE, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH};
pub use entity::{Entity, EntityDict};
pub use error::DomainError;
pub use identity::UniqueEntityId;
pub use notification::{ErrorFields, Notification};
pub use search::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, RawSearchParams, SearchParams, SearchResult, SortOrder,
};
pub use validation::{StrictValidatorRules, ValidationError, ValidatorRules};
