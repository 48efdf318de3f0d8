//! Stock ledger: a linked list of stock entries keyed by (product, supplier)
//!
//! Adding a pair that already exists adds to its quantity in place instead of
//! creating a second entry. The ledger does not check that the product or
//! supplier exist; callers that need that guarantee check it first (see
//! [`crate::inventory::engine::Inventory::add_stock`]).

use super::list::List;
use crate::records::{ProductId, Stock, SupplierId};
use log::debug;

/// Outcome of [`StockLedger::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockUpdate {
    /// A new entry was created at the head
    Inserted,
    /// An existing entry absorbed the quantity; carries the new total
    Merged { quantity: i32 },
}

/// Linked list of stock entries
#[derive(Debug, Default)]
pub struct StockLedger {
    entries: List<Stock>,
}

impl StockLedger {
    pub fn new() -> Self {
        StockLedger {
            entries: List::new(),
        }
    }

    /// Add stock, merging into an existing entry for the same pair
    pub fn add(&mut self, stock: Stock) -> StockUpdate {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.key() == stock.key())
        {
            entry.quantity = entry.quantity.saturating_add(stock.quantity);
            debug!(
                "stock {:?} merged, quantity now {}",
                stock.key(),
                entry.quantity
            );
            return StockUpdate::Merged {
                quantity: entry.quantity,
            };
        }

        debug!("stock {:?} inserted", stock.key());
        self.entries.push_front(stock);
        StockUpdate::Inserted
    }

    /// Linear scan for the entry of a (product, supplier) pair
    pub fn find(&self, product_id: ProductId, supplier_id: SupplierId) -> Option<&Stock> {
        self.entries
            .iter()
            .find(|entry| entry.key() == (product_id, supplier_id))
    }

    /// Iterate in list order (most recently inserted pair first)
    pub fn iter(&self) -> impl Iterator<Item = &Stock> {
        self.entries.iter()
    }

    /// Snapshot of every entry in list order
    pub fn collect(&self) -> Vec<&Stock> {
        self.entries.iter().collect()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
