//! Lookup routines over snapshot arrays
//!
//! `None` is the not-found result for every search.

use crate::records::{Product, ProductId, Supplier, SupplierId};
use std::cmp::Ordering;

/// Index of the first element whose key equals `target`
pub fn linear_search_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    items.iter().position(|item| key(item) == *target)
}

/// Bisection search for `target`.
///
/// `items` must already be sorted ascending by `key`; an unsorted slice gives
/// an unspecified answer.
pub fn binary_search_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let (mut low, mut high) = (0, items.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match key(&items[mid]).cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

pub fn linear_search_products(products: &[&Product], id: ProductId) -> Option<usize> {
    linear_search_by_key(products, &id, |p| p.id)
}

/// Requires `products` sorted ascending by id
pub fn binary_search_products(products: &[&Product], id: ProductId) -> Option<usize> {
    binary_search_by_key(products, &id, |p| p.id)
}

pub fn linear_search_suppliers(suppliers: &[&Supplier], id: SupplierId) -> Option<usize> {
    linear_search_by_key(suppliers, &id, |s| s.id)
}

/// Requires `suppliers` sorted ascending by id
pub fn binary_search_suppliers(suppliers: &[&Supplier], id: SupplierId) -> Option<usize> {
    binary_search_by_key(suppliers, &id, |s| s.id)
}
