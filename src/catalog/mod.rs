//! Containers that own the inventory records
//!
//! - [`product_index`]: [`ProductIndex`], an unbalanced binary search tree keyed
//!   by product id
//! - [`supplier_registry`]: [`SupplierRegistry`], a linked list with unique
//!   supplier ids
//! - [`stock_ledger`]: [`StockLedger`], a linked list keyed by
//!   (product id, supplier id) that merges quantities
//! - [`list`]: the owning singly-linked list both registries are built on
//!
//! # Snapshots
//!
//! None of the containers keep a sorted view. Each offers `collect()`, which
//! returns a fresh `Vec` of references for the sorting and searching routines
//! in [`crate::algorithms`] to reorder or scan.

pub mod list;
pub mod product_index;
pub mod stock_ledger;
pub mod supplier_registry;

pub use product_index::ProductIndex;
pub use stock_ledger::{StockLedger, StockUpdate};
pub use supplier_registry::SupplierRegistry;
