//! Inventory operations
//!
//! This module ties the containers and algorithms together:
//! - [`engine`]: [`Inventory`], which owns the containers and implements
//!   every menu command
//! - [`persistence`]: saving and loading the three data files
//! - [`errors`]: the [`InventoryError`] type
//! - [`constants`]: default file names
//!
//! # Referential Integrity
//!
//! Stock entries name a product and a supplier. [`Inventory::add_stock`]
//! refuses ids that do not exist; the stock ledger itself and the stock file
//! loader accept any pair.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod persistence;

pub use engine::{Inventory, LoadSummary, SaveSummary};
pub use errors::{FileAction, InventoryError};
pub use persistence::{DataFiles, LoadReport};
