// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The filter, sort and paginate pipeline shared by every repository.

use admin_catalog_domain::{SearchParams, SearchResult, SortOrder};
use std::cmp::Ordering;
use time::OffsetDateTime;

/// A comparable value extracted from an entity field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Text(String),
    Integer(i64),
    Flag(bool),
    Timestamp(OffsetDateTime),
}

/// Entity-specific hooks of a searchable repository.
pub trait SearchPolicy<E> {
    /// Fields eligible for sorting.
    fn sortable_fields(&self) -> &[&'static str];

    /// Returns whether `entity` matches a non-empty `filter`.
    ///
    /// The default matches nothing.
    fn matches(&self, _entity: &E, _filter: &str) -> bool {
        false
    }

    /// Extracts the sort key of `field`, or `None` if the field has no key.
    fn sort_key(&self, entity: &E, field: &str) -> Option<SortKey>;

    /// Ordering applied when the request names no sort field.
    fn default_sort(&self) -> Option<(&'static str, SortOrder)> {
        None
    }
}

/// Runs filter, then sort, then paginate over `items`.
///
/// - Without a filter every item passes; otherwise only items the policy
///   matches are kept.
/// - A sort field outside the policy allow-list leaves the filtered order
///   untouched. Sorting is stable, so ties keep their filtered order.
/// - Pages past the end are empty. `total` counts filtered items.
pub fn search_items<E, P>(items: &[E], params: &SearchParams, policy: &P) -> SearchResult<E>
where
    E: Clone,
    P: SearchPolicy<E> + ?Sized,
{
    let filtered: Vec<&E> = match params.filter() {
        Some(filter) => items
            .iter()
            .filter(|item| policy.matches(item, filter))
            .collect(),
        None => items.iter().collect(),
    };
    let total: usize = filtered.len();

    let ordering: Option<(&str, SortOrder)> = match params.sort() {
        Some(field) => policy
            .sortable_fields()
            .iter()
            .any(|sortable| *sortable == field)
            .then(|| (field, params.sort_order().unwrap_or_default())),
        None => policy.default_sort(),
    };
    let sorted: Vec<&E> = match ordering {
        Some((field, order)) => sort_by_field(filtered, field, order, policy),
        None => filtered,
    };

    let offset: usize = params
        .page()
        .saturating_sub(1)
        .saturating_mul(params.per_page());
    let page: Vec<E> = sorted
        .into_iter()
        .skip(offset)
        .take(params.per_page())
        .cloned()
        .collect();

    SearchResult::new(page, total, params)
}

fn sort_by_field<'a, E, P>(
    items: Vec<&'a E>,
    field: &str,
    order: SortOrder,
    policy: &P,
) -> Vec<&'a E>
where
    P: SearchPolicy<E> + ?Sized,
{
    let mut keyed: Vec<(Option<SortKey>, &E)> = items
        .into_iter()
        .map(|item| (policy.sort_key(item, field), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| -> Ordering {
        match order {
            SortOrder::Asc => a.cmp(b),
            SortOrder::Desc => b.cmp(a),
        }
    });
    keyed.into_iter().map(|(_, item)| item).collect()
}
