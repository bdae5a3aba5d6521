// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates connection setup, migration execution and
//! backend configuration (PRAGMA, engine settings) that cannot be
//! expressed in backend-agnostic Diesel DSL.
//!
//! - `sqlite`: `SQLite` backend (default for development and testing)
//! - `mysql`: MySQL/MariaDB backend (validated via opt-in tests)
//!
//! Category queries and mutations live in `queries/` and `mutations/`
//! and must work on every supported backend.

pub mod mysql;
pub mod sqlite;
