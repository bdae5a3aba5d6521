// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! All state-changing operations for the persistence layer. Mutations use
//! Diesel DSL only.

pub mod categories;

pub use categories::{
    delete_category_mysql, delete_category_sqlite, insert_category_mysql, insert_category_sqlite,
    update_category_mysql, update_category_sqlite,
};
