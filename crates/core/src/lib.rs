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
mod error;
mod in_memory;
mod repository;
mod search;

#[cfg(test)]
mod tests;

pub use category::{
    CATEGORY_SORTABLE_FIELDS, CategoryInMemoryRepository, CategoryRepository, CategorySearchPolicy,
};
pub use error::CoreError;
pub use in_memory::InMemorySearchableRepository;
pub use repository::{Repository, SearchableRepository};
pub use search::{SearchPolicy, SortKey, search_items};
