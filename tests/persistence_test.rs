// Save / load round trips through the data files

use std::fs;

use stockroom::inventory::{DataFiles, Inventory, InventoryError};
use stockroom::records::{Product, RecordKind, Stock, Supplier};

fn populated(files: DataFiles) -> Inventory {
    let mut inventory = Inventory::new(files);
    for (id, name, price, category) in [
        (20, "Drill", 89.99, "Tools"),
        (5, "Screws", 4.5, "Parts"),
        (31, "Glue", 2.25, "Supplies"),
    ] {
        inventory
            .add_product(Product::new(id, name, price, category))
            .expect("add product");
    }
    inventory
        .add_supplier(Supplier::new(1, "Acme", "orders@acme.test"))
        .expect("add supplier");
    inventory
        .add_supplier(Supplier::new(2, "Globex", "555-0100"))
        .expect("add supplier");
    for stock in [
        Stock::new(20, 1, 3),
        Stock::new(5, 2, 500),
        Stock::new(5, 1, 250),
        Stock::new(20, 1, 2),
    ] {
        inventory.add_stock(stock).expect("add stock");
    }
    inventory
}

fn sorted<T: Clone, K: Ord>(items: Vec<&T>, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut owned: Vec<T> = items.into_iter().cloned().collect();
    owned.sort_by_key(|item| key(item));
    owned
}

#[test]
fn test_save_then_load_reproduces_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let original = populated(DataFiles::in_dir(dir.path()));
    let saved = original.save_all().expect("save");
    assert_eq!((saved.products, saved.suppliers, saved.stocks), (3, 2, 3));

    let mut reloaded = Inventory::new(DataFiles::in_dir(dir.path()));
    let summary = reloaded.load_all().expect("load");
    assert_eq!(summary.warnings().count(), 0);

    let products = |inv: &Inventory| sorted(inv.products().collect(), |p: &Product| p.id);
    assert_eq!(products(&reloaded), products(&original));

    let suppliers = |inv: &Inventory| sorted(inv.suppliers().collect(), |s: &Supplier| s.id);
    assert_eq!(suppliers(&reloaded), suppliers(&original));

    let stocks = |inv: &Inventory| sorted(inv.stocks().collect(), |s: &Stock| s.key());
    assert_eq!(stocks(&reloaded), stocks(&original));
    assert_eq!(reloaded.stocks().find(20, 1).unwrap().quantity, 5);

    // head insertion on reload inverts list order
    let original_order: Vec<_> = original.suppliers().iter().map(|s| s.id).collect();
    let reloaded_order: Vec<_> = reloaded.suppliers().iter().map(|s| s.id).collect();
    assert_eq!(original_order, vec![2, 1]);
    assert_eq!(reloaded_order, vec![1, 2]);
}

#[test]
fn test_load_discards_in_memory_state() {
    let dir = tempfile::tempdir().expect("temp dir");
    let files = DataFiles::in_dir(dir.path());
    fs::write(&files.products, "1,Only,1,x\n").unwrap();
    fs::write(&files.suppliers, "").unwrap();
    fs::write(&files.stocks, "").unwrap();

    let mut inventory = populated(files);
    inventory.load_all().expect("load");
    assert_eq!(inventory.products().count(), 1);
    assert!(inventory.suppliers().is_empty());
    assert!(inventory.stocks().is_empty());
}

#[test]
fn test_load_reports_duplicates_and_continues() {
    let dir = tempfile::tempdir().expect("temp dir");
    let files = DataFiles::in_dir(dir.path());
    fs::write(&files.products, "1,A,1,x\n1,B,2,y\n2,C,3,z\n").unwrap();
    fs::write(&files.suppliers, "7,S,c\n7,T,d\n").unwrap();
    fs::write(&files.stocks, "1,7,4\n1,7,6\n").unwrap();

    let mut inventory = Inventory::new(files);
    let summary = inventory.load_all().expect("load");
    let warnings: Vec<_> = summary.warnings().cloned().collect();
    assert_eq!(
        warnings,
        vec![
            InventoryError::DuplicateKey {
                kind: RecordKind::Product,
                id: 1
            },
            InventoryError::DuplicateKey {
                kind: RecordKind::Supplier,
                id: 7
            },
        ]
    );
    assert_eq!(inventory.products().count(), 2);
    assert_eq!(summary.stocks.merged, 1);
    assert_eq!(inventory.stocks().find(1, 7).unwrap().quantity, 10);
}

#[test]
fn test_malformed_file_aborts_remaining_loads() {
    let dir = tempfile::tempdir().expect("temp dir");
    let files = DataFiles::in_dir(dir.path());
    fs::write(&files.products, "1,A,1,x\n2,B,free,y\n").unwrap();
    fs::write(&files.suppliers, "7,S,c\n").unwrap();

    let mut inventory = Inventory::new(files);
    let err = inventory.load_all().unwrap_err();
    assert!(matches!(
        err,
        InventoryError::MalformedRecord {
            kind: RecordKind::Product,
            line: 2,
            field: "price",
            ..
        }
    ));
    assert_eq!(inventory.products().count(), 1);
    assert!(inventory.suppliers().is_empty());
}
