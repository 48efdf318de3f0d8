//! Supplier registry: a linked list of suppliers with unique ids
//!
//! New suppliers go to the head, so iteration shows the most recently added
//! supplier first.

use super::list::List;
use crate::inventory::errors::InventoryError;
use crate::records::{RecordKind, Supplier, SupplierId};
use log::debug;

/// Linked list of suppliers keyed by supplier id
#[derive(Debug, Default)]
pub struct SupplierRegistry {
    suppliers: List<Supplier>,
}

impl SupplierRegistry {
    pub fn new() -> Self {
        SupplierRegistry {
            suppliers: List::new(),
        }
    }

    /// Add a supplier at the head; fails with `DuplicateKey` if the id exists
    pub fn add(&mut self, supplier: Supplier) -> Result<(), InventoryError> {
        if self.find(supplier.id).is_some() {
            return Err(InventoryError::DuplicateKey {
                kind: RecordKind::Supplier,
                id: supplier.id,
            });
        }
        debug!("supplier {} added", supplier.id);
        self.suppliers.push_front(supplier);
        Ok(())
    }

    /// Linear scan for the supplier with `id`
    pub fn find(&self, id: SupplierId) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SupplierId) -> bool {
        self.find(id).is_some()
    }

    /// Iterate in list order (most recent first)
    pub fn iter(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.iter()
    }

    /// Snapshot of every supplier in list order
    pub fn collect(&self) -> Vec<&Supplier> {
        self.suppliers.iter().collect()
    }

    pub fn count(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find() {
        let mut registry = SupplierRegistry::new();
        registry.add(Supplier::new(1, "Acme", "555-0100")).unwrap();
        registry.add(Supplier::new(2, "Globex", "555-0199")).unwrap();

        assert_eq!(registry.find(2).unwrap().name, "Globex");
        assert!(registry.find(3).is_none());
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_head_insertion_order() {
        let mut registry = SupplierRegistry::new();
        for id in [4, 9, 1] {
            registry.add(Supplier::new(id, "s", "c")).unwrap();
        }
        let ids: Vec<_> = registry.collect().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 9, 4]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = SupplierRegistry::new();
        registry.add(Supplier::new(1, "Acme", "a")).unwrap();
        let err = registry.add(Supplier::new(1, "Other", "b")).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.find(1).unwrap().name, "Acme");
    }
}
