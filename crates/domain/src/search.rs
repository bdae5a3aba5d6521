// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Search request normalization and paginated results.
//!
//! Callers hand in loosely typed values (query strings, JSON bodies) as
//! [`RawSearchParams`]. [`SearchParams`] normalizes them once; everything
//! downstream works with the canonical form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::num::IntErrorKind;

/// Page used when the requested page is missing or not positive.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the requested size is missing or below one.
pub const DEFAULT_PER_PAGE: usize = 15;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unnormalized search input.
///
/// Every field accepts any JSON value; missing fields are `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSearchParams {
    #[serde(default)]
    pub page: Value,
    #[serde(default)]
    pub per_page: Value,
    #[serde(default)]
    pub sort: Value,
    #[serde(default)]
    pub sort_order: Value,
    #[serde(default)]
    pub filter: Value,
}

/// Canonical search parameters.
///
/// Invariants:
/// - `page >= 1` and `per_page >= 1`
/// - `sort` and `filter` are never blank
/// - `sort_order` is set exactly when `sort` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    page: usize,
    per_page: usize,
    sort: Option<String>,
    sort_order: Option<SortOrder>,
    filter: Option<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            sort_order: None,
            filter: None,
        }
    }
}

impl SearchParams {
    /// Normalizes raw input.
    ///
    /// - `page` is coerced to an integer; anything not positive becomes [`DEFAULT_PAGE`].
    /// - `per_page` is coerced the same way; anything below one becomes [`DEFAULT_PER_PAGE`].
    /// - `sort` and `filter` are stringified; blank values become `None`.
    /// - `sort_order` is only read when `sort` is set. It is lower-cased and
    ///   trimmed; anything other than `asc` or `desc` becomes `asc`.
    #[must_use]
    pub fn new(raw: &RawSearchParams) -> Self {
        let page: usize = positive_or(&raw.page, DEFAULT_PAGE);
        let per_page: usize = positive_or(&raw.per_page, DEFAULT_PER_PAGE);
        let sort: Option<String> = stringify(&raw.sort);
        let sort_order: Option<SortOrder> = sort.as_ref().map(|_| {
            match stringify(&raw.sort_order)
                .map(|order| order.trim().to_lowercase())
                .as_deref()
            {
                Some("desc") => SortOrder::Desc,
                _ => SortOrder::Asc,
            }
        });
        let filter: Option<String> = stringify(&raw.filter);

        Self {
            page,
            per_page,
            sort,
            sort_order,
            filter,
        }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    #[must_use]
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    #[must_use]
    pub const fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Returns these parameters with `sort` and `sort_order` replaced.
    #[must_use]
    pub fn with_sort(mut self, sort: &str, sort_order: SortOrder) -> Self {
        self.sort = Some(sort.to_string());
        self.sort_order = Some(sort_order);
        self
    }
}

impl From<RawSearchParams> for SearchParams {
    fn from(raw: RawSearchParams) -> Self {
        Self::new(&raw)
    }
}

/// Integer coercion: booleans are 0/1, floats truncate, strings are parsed
/// after trimming. Out-of-range numbers saturate. Anything else yields 0.
#[allow(clippy::cast_possible_truncation)]
fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Bool(flag) => i64::from(*flag),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => parse_saturating(s.trim()),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// Parses a base-10 integer, clamping values outside `i64` to its bounds.
fn parse_saturating(text: &str) -> i64 {
    match text.parse::<i64>() {
        Ok(n) => n,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

fn positive_or(value: &Value, default: usize) -> usize {
    usize::try_from(coerce_int(value))
        .ok()
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

fn stringify(value: &Value) -> Option<String> {
    let text: String = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    (!text.trim().is_empty()).then_some(text)
}

/// One page of search output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: usize,
    current_page: usize,
    per_page: usize,
    last_page: usize,
    sort: Option<String>,
    sort_order: Option<SortOrder>,
    filter: Option<String>,
}

impl<E> SearchResult<E> {
    /// Builds a result page, echoing the request parameters.
    ///
    /// `total` is the filtered count before pagination. `last_page` is
    /// `ceil(total / per_page)`.
    #[must_use]
    pub fn new(items: Vec<E>, total: usize, params: &SearchParams) -> Self {
        let per_page: usize = params.per_page();
        Self {
            items,
            total,
            current_page: params.page(),
            per_page,
            last_page: if per_page == 0 {
                0
            } else {
                total.div_ceil(per_page)
            },
            sort: params.sort.clone(),
            sort_order: params.sort_order,
            filter: params.filter.clone(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[E] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    #[must_use]
    pub const fn last_page(&self) -> usize {
        self.last_page
    }

    #[must_use]
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    #[must_use]
    pub const fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Converts each item, keeping the pagination fields.
    #[must_use]
    pub fn map_items<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
            sort: self.sort,
            sort_order: self.sort_order,
            filter: self.filter,
        }
    }
}
