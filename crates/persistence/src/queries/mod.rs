// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic read queries.

pub mod categories;

pub use categories::{
    count_categories_mysql, count_categories_sqlite, find_category_mysql, find_category_sqlite,
    list_categories_mysql, list_categories_sqlite,
};
