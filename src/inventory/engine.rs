//! The inventory: owner of the three containers
//!
//! [`Inventory`] is the layer the menu talks to. It forwards mutations and
//! point lookups to the containers, builds snapshot arrays for sorted views,
//! checks stock references before touching the ledger, and drives
//! save / load of all three data files.

use super::errors::InventoryError;
use super::persistence::{self, DataFiles, LoadReport};
use crate::algorithms::{
    binary_search_products, binary_search_suppliers, bubble_sort_products, bubble_sort_suppliers,
    merge_sort_stocks,
};
use crate::catalog::{ProductIndex, StockLedger, StockUpdate, SupplierRegistry};
use crate::records::{Product, ProductId, RecordKind, Stock, Supplier, SupplierId};
use log::info;

/// Record counts written by [`Inventory::save_all`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveSummary {
    pub products: usize,
    pub suppliers: usize,
    pub stocks: usize,
}

/// Per-file reports from [`Inventory::load_all`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSummary {
    pub products: LoadReport,
    pub suppliers: LoadReport,
    pub stocks: LoadReport,
}

impl LoadSummary {
    /// Every skipped duplicate, products first
    pub fn warnings(&self) -> impl Iterator<Item = &InventoryError> {
        self.products
            .warnings
            .iter()
            .chain(&self.suppliers.warnings)
            .chain(&self.stocks.warnings)
    }
}

/// Products, suppliers and stock plus the files they persist to
#[derive(Debug)]
pub struct Inventory {
    products: ProductIndex,
    suppliers: SupplierRegistry,
    stocks: StockLedger,
    files: DataFiles,
}

impl Inventory {
    /// Create an empty inventory persisting to `files`
    pub fn new(files: DataFiles) -> Self {
        Inventory {
            products: ProductIndex::new(),
            suppliers: SupplierRegistry::new(),
            stocks: StockLedger::new(),
            files,
        }
    }

    pub fn files(&self) -> &DataFiles {
        &self.files
    }

    pub fn products(&self) -> &ProductIndex {
        &self.products
    }

    pub fn suppliers(&self) -> &SupplierRegistry {
        &self.suppliers
    }

    pub fn stocks(&self) -> &StockLedger {
        &self.stocks
    }

    pub fn add_product(&mut self, product: Product) -> Result<(), InventoryError> {
        self.products.insert(product)
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.search(id)
    }

    pub fn remove_product(&mut self, id: ProductId) -> Result<Product, InventoryError> {
        self.products.remove(id)
    }

    pub fn add_supplier(&mut self, supplier: Supplier) -> Result<(), InventoryError> {
        self.suppliers.add(supplier)
    }

    pub fn find_supplier(&self, id: SupplierId) -> Option<&Supplier> {
        self.suppliers.find(id)
    }

    /// Add stock for an existing product and supplier.
    ///
    /// The product is checked before the supplier; the ledger is only touched
    /// once both exist.
    pub fn add_stock(&mut self, stock: Stock) -> Result<StockUpdate, InventoryError> {
        if !self.products.contains(stock.product_id) {
            return Err(InventoryError::NotFound {
                kind: RecordKind::Product,
                id: stock.product_id,
            });
        }
        if !self.suppliers.contains(stock.supplier_id) {
            return Err(InventoryError::NotFound {
                kind: RecordKind::Supplier,
                id: stock.supplier_id,
            });
        }
        Ok(self.stocks.add(stock))
    }

    /// Snapshot of all products bubble-sorted by id
    pub fn sorted_products(&self) -> Vec<&Product> {
        let mut snapshot = self.products.collect();
        bubble_sort_products(&mut snapshot);
        snapshot
    }

    /// Snapshot of all suppliers bubble-sorted by id
    pub fn sorted_suppliers(&self) -> Vec<&Supplier> {
        let mut snapshot = self.suppliers.collect();
        bubble_sort_suppliers(&mut snapshot);
        snapshot
    }

    /// Snapshot of all stock entries merge-sorted by quantity, highest first
    pub fn stocks_by_quantity(&self) -> Vec<&Stock> {
        let mut snapshot = self.stocks.collect();
        merge_sort_stocks(&mut snapshot);
        snapshot
    }

    /// 1-based position of a product in id order, with the total count
    pub fn product_rank(&self, id: ProductId) -> Option<(usize, usize)> {
        let sorted = self.sorted_products();
        binary_search_products(&sorted, id).map(|i| (i + 1, sorted.len()))
    }

    /// 1-based position of a supplier in id order, with the total count
    pub fn supplier_rank(&self, id: SupplierId) -> Option<(usize, usize)> {
        let sorted = self.sorted_suppliers();
        binary_search_suppliers(&sorted, id).map(|i| (i + 1, sorted.len()))
    }

    /// Write products, suppliers and stock, stopping at the first failure
    pub fn save_all(&self) -> Result<SaveSummary, InventoryError> {
        let summary = SaveSummary {
            products: persistence::save_products(&self.products, &self.files.products)?,
            suppliers: persistence::save_suppliers(&self.suppliers, &self.files.suppliers)?,
            stocks: persistence::save_stocks(&self.stocks, &self.files.stocks)?,
        };
        info!("saved inventory: {:?}", summary);
        Ok(summary)
    }

    /// Discard everything in memory, then load products, suppliers and stock.
    ///
    /// The first file that fails aborts the rest; whatever was loaded before
    /// the failure stays in memory.
    pub fn load_all(&mut self) -> Result<LoadSummary, InventoryError> {
        self.clear();
        let summary = LoadSummary {
            products: persistence::load_products(&mut self.products, &self.files.products)?,
            suppliers: persistence::load_suppliers(&mut self.suppliers, &self.files.suppliers)?,
            stocks: persistence::load_stocks(&mut self.stocks, &self.files.stocks)?,
        };
        info!(
            "loaded inventory: {} products, {} suppliers, {} stock entries",
            self.products.count(),
            self.suppliers.count(),
            self.stocks.count()
        );
        Ok(summary)
    }

    /// Replace all three containers with empty ones
    pub fn clear(&mut self) {
        self.products = ProductIndex::new();
        self.suppliers = SupplierRegistry::new();
        self.stocks = StockLedger::new();
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DataFiles::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked() -> Inventory {
        let mut inventory = Inventory::default();
        inventory.add_product(Product::new(10, "Hammer", 12.5, "Tools")).unwrap();
        inventory.add_product(Product::new(5, "Nails", 3.0, "Parts")).unwrap();
        inventory.add_supplier(Supplier::new(1, "Acme", "acme@example.com")).unwrap();
        inventory
    }

    #[test]
    fn test_add_stock_requires_product_then_supplier() {
        let mut inventory = stocked();
        assert_eq!(
            inventory.add_stock(Stock::new(99, 42, 1)),
            Err(InventoryError::NotFound {
                kind: RecordKind::Product,
                id: 99
            })
        );
        assert_eq!(
            inventory.add_stock(Stock::new(10, 42, 1)),
            Err(InventoryError::NotFound {
                kind: RecordKind::Supplier,
                id: 42
            })
        );
        assert!(inventory.stocks().is_empty());
    }

    #[test]
    fn test_add_stock_merges() {
        let mut inventory = stocked();
        assert_eq!(inventory.add_stock(Stock::new(10, 1, 4)), Ok(StockUpdate::Inserted));
        assert_eq!(
            inventory.add_stock(Stock::new(10, 1, 6)),
            Ok(StockUpdate::Merged { quantity: 10 })
        );
    }

    #[test]
    fn test_sorted_views() {
        let mut inventory = stocked();
        inventory.add_supplier(Supplier::new(0, "Zero", "z")).unwrap();
        inventory.add_stock(Stock::new(10, 1, 3)).unwrap();
        inventory.add_stock(Stock::new(5, 1, 8)).unwrap();
        inventory.add_stock(Stock::new(5, 0, 3)).unwrap();

        let products: Vec<_> = inventory.sorted_products().iter().map(|p| p.id).collect();
        assert_eq!(products, vec![5, 10]);
        let suppliers: Vec<_> = inventory.sorted_suppliers().iter().map(|s| s.id).collect();
        assert_eq!(suppliers, vec![0, 1]);
        let stocks: Vec<_> = inventory
            .stocks_by_quantity()
            .iter()
            .map(|s| s.key())
            .collect();
        // ties keep list order (head first)
        assert_eq!(stocks, vec![(5, 1), (5, 0), (10, 1)]);
    }

    #[test]
    fn test_ranks() {
        let inventory = stocked();
        assert_eq!(inventory.product_rank(10), Some((2, 2)));
        assert_eq!(inventory.product_rank(7), None);
        assert_eq!(inventory.supplier_rank(1), Some((1, 1)));
    }

    #[test]
    fn test_clear() {
        let mut inventory = stocked();
        inventory.clear();
        assert!(inventory.products().is_empty());
        assert!(inventory.suppliers().is_empty());
    }
}
