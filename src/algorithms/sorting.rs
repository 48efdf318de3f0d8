//! Sorting routines over snapshot arrays
//!
//! Each routine reorders a slice of references in place. The containers the
//! references point into are never touched.

use crate::records::{Product, Stock, Supplier};

/// Bubble sort ascending by `key`, stopping after the first pass that makes
/// no swap. Returns the number of passes made.
pub fn bubble_sort_by_key<T, K, F>(items: &mut [T], key: F) -> usize
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let n = items.len();
    let mut passes = 0;
    for i in 0..n.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if key(&items[j]) > key(&items[j + 1]) {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    passes
}

/// Sort products ascending by id
pub fn bubble_sort_products(products: &mut [&Product]) -> usize {
    bubble_sort_by_key(products, |p| p.id)
}

/// Sort suppliers ascending by id
pub fn bubble_sort_suppliers(suppliers: &mut [&Supplier]) -> usize {
    bubble_sort_by_key(suppliers, |s| s.id)
}

/// Stable top-down merge sort, descending by `key`.
///
/// On equal keys the element from the left run is taken first, so equal
/// elements keep their original relative order.
pub fn merge_sort_desc_by_key<T, K, F>(items: &mut [T], key: &F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() < 2 {
        return;
    }
    let mid = (items.len() + 1) / 2;
    merge_sort_desc_by_key(&mut items[..mid], key);
    merge_sort_desc_by_key(&mut items[mid..], key);

    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && key(&left[i]) >= key(&right[j]));
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// Sort stock entries by quantity, highest first
pub fn merge_sort_stocks(stocks: &mut [&Stock]) {
    merge_sort_desc_by_key(stocks, &|s: &&Stock| s.quantity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sort_products() {
        let (a, b, c) = (
            Product::new(5, "e", 1.0, "x"),
            Product::new(1, "a", 1.0, "x"),
            Product::new(3, "c", 1.0, "x"),
        );
        let mut items = vec![&a, &b, &c];
        bubble_sort_products(&mut items);
        assert_eq!(items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_bubble_sort_early_exit() {
        let mut sorted = vec![1, 2, 3, 4, 5];
        assert_eq!(bubble_sort_by_key(&mut sorted, |v| *v), 1);

        let mut reversed = vec![5, 4, 3, 2, 1];
        assert_eq!(bubble_sort_by_key(&mut reversed, |v| *v), 4);
        assert_eq!(reversed, vec![1, 2, 3, 4, 5]);

        let mut single = vec![7];
        assert_eq!(bubble_sort_by_key(&mut single, |v| *v), 0);
        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(bubble_sort_by_key(&mut empty, |v| *v), 0);
    }

    #[test]
    fn test_bubble_sort_suppliers() {
        let suppliers = [
            Supplier::new(9, "i", "c"),
            Supplier::new(2, "b", "c"),
            Supplier::new(4, "d", "c"),
        ];
        let mut items: Vec<&Supplier> = suppliers.iter().collect();
        bubble_sort_suppliers(&mut items);
        assert_eq!(items.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 4, 9]);
    }

    #[test]
    fn test_merge_sort_stocks_is_stable_descending() {
        let stocks = [
            Stock::new(1, 1, 10),
            Stock::new(2, 1, 30),
            Stock::new(3, 1, 20),
            Stock::new(4, 1, 30),
        ];
        let mut items: Vec<&Stock> = stocks.iter().collect();
        merge_sort_stocks(&mut items);

        let quantities: Vec<_> = items.iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, vec![30, 30, 20, 10]);
        assert_eq!(items[0].product_id, 2);
        assert_eq!(items[1].product_id, 4);
    }

    #[test]
    fn test_merge_sort_odd_length_and_ties() {
        let mut values = vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
        merge_sort_desc_by_key(&mut values, &|v: &(i32, char)| v.0);
        assert_eq!(
            values,
            vec![(3, 'a'), (3, 'c'), (2, 'd'), (1, 'b'), (1, 'e')]
        );
    }
}
