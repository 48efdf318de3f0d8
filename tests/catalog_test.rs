// Integration tests for the containers and snapshot algorithms

use stockroom::algorithms::{
    binary_search_products, bubble_sort_products, linear_search_products, merge_sort_stocks,
};
use stockroom::catalog::{ProductIndex, StockLedger};
use stockroom::inventory::InventoryError;
use stockroom::records::{Product, RecordKind, Stock};

/// Deterministic id sequence with repeats (small LCG)
fn id_sequence(seed: u64, len: usize, modulus: u64) -> Vec<i32> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) % modulus) as i32
        })
        .collect()
}

fn inorder_ids(index: &ProductIndex) -> Vec<i32> {
    index.inorder().iter().map(|p| p.id).collect()
}

#[test]
fn test_random_inserts_and_removes_keep_bst_order() {
    for seed in 1..20 {
        let mut index = ProductIndex::new();
        let mut expected: Vec<i32> = Vec::new();

        for id in id_sequence(seed, 200, 150) {
            let result = index.insert(Product::new(id, "p", 1.0, "c"));
            if expected.contains(&id) {
                assert_eq!(
                    result,
                    Err(InventoryError::DuplicateKey {
                        kind: RecordKind::Product,
                        id
                    })
                );
            } else {
                assert!(result.is_ok());
                expected.push(id);
            }
        }
        expected.sort();
        assert_eq!(inorder_ids(&index), expected);

        for id in id_sequence(seed + 100, 120, 150) {
            let before = inorder_ids(&index);
            match index.remove(id) {
                Ok(removed) => {
                    assert_eq!(removed.id, id);
                    assert!(index.search(id).is_none());
                    expected.retain(|&e| e != id);
                }
                Err(err) => {
                    assert_eq!(
                        err,
                        InventoryError::NotFound {
                            kind: RecordKind::Product,
                            id
                        }
                    );
                    assert_eq!(inorder_ids(&index), before);
                }
            }
            assert_eq!(index.count(), index.inorder().len());
        }
        assert_eq!(inorder_ids(&index), expected);
    }
}

#[test]
fn test_degenerate_tree_is_usable_and_drops() {
    let mut index = ProductIndex::new();
    for id in 0..1_000 {
        index.insert(Product::new(id, "p", 0.0, "c")).unwrap();
    }
    assert_eq!(index.depth(), 1_000);
    assert_eq!(index.search(999).map(|p| p.id), Some(999));
    drop(index);
}

#[test]
fn test_snapshot_sort_then_binary_search() {
    let mut index = ProductIndex::new();
    for id in [40, 10, 30, 20, 50] {
        index.insert(Product::new(id, "p", 1.0, "c")).unwrap();
    }

    let mut snapshot = index.collect();
    // in-order snapshot is already sorted: one pass, no swaps
    assert_eq!(bubble_sort_products(&mut snapshot), 1);

    for id in [10, 20, 30, 40, 50] {
        let i = binary_search_products(&snapshot, id).unwrap();
        assert_eq!(snapshot[i].id, id);
        assert_eq!(linear_search_products(&snapshot, id), Some(i));
    }
    assert_eq!(binary_search_products(&snapshot, 35), None);

    // sorting the snapshot never touches the tree
    snapshot.reverse();
    bubble_sort_products(&mut snapshot);
    assert_eq!(inorder_ids(&index), vec![10, 20, 30, 40, 50]);
}

#[test]
fn test_ledger_merge_then_sort_by_quantity() {
    let mut ledger = StockLedger::new();
    ledger.add(Stock::new(1, 1, 10));
    ledger.add(Stock::new(2, 1, 30));
    ledger.add(Stock::new(3, 1, 20));
    ledger.add(Stock::new(4, 1, 30));
    ledger.add(Stock::new(1, 1, 5));

    assert_eq!(ledger.count(), 4);
    assert_eq!(ledger.find(1, 1).unwrap().quantity, 15);

    let mut snapshot = ledger.collect();
    merge_sort_stocks(&mut snapshot);
    let order: Vec<_> = snapshot.iter().map(|s| (s.product_id, s.quantity)).collect();
    // list order is 4, 3, 2, 1, so the two 30s keep 4 before 2
    assert_eq!(order, vec![(4, 30), (2, 30), (3, 20), (1, 15)]);
}
