//! Cached-CEP listing service
//!
//! Returns every cached record, optionally sorted. The sort uses one
//! fixed precedence chain regardless of which field the caller asked for:
//! city, then neighborhood, then state, then CEP. The `sortBy` parameter
//! only decides WHETHER to sort, never by what.

use std::cmp::Ordering;

use crate::cache::AddressCache;
use crate::models::{AddressRecord, SortDirection};

/// Serves the list of all cached address records.
#[derive(Clone)]
pub struct ListingService {
    cache: AddressCache,
}

impl ListingService {
    pub fn new(cache: AddressCache) -> Self {
        Self { cache }
    }

    /// All cached records, in insertion order when `sort_by` is absent or
    /// empty, otherwise ordered by the fixed precedence chain. `Desc`
    /// reverses the final comparison.
    pub fn list(&self, sort_by: Option<&str>, order: SortDirection) -> Vec<AddressRecord> {
        let mut records = self.cache.snapshot();

        let wants_sort = sort_by.is_some_and(|field| !field.is_empty());
        if wants_sort {
            records.sort_by(|a, b| {
                let ordering = fixed_precedence(a, b);
                match order {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        records
    }
}

/// Compare two records by city, neighborhood, state, then CEP.
fn fixed_precedence(a: &AddressRecord, b: &AddressRecord) -> Ordering {
    a.city
        .cmp(&b.city)
        .then_with(|| a.neighborhood.cmp(&b.neighborhood))
        .then_with(|| a.state.cmp(&b.state))
        .then_with(|| a.cep.cmp(&b.cep))
}
