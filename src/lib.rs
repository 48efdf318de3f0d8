//! # Introduction
//!
//! Stockroom keeps an inventory of products, suppliers and stock in memory,
//! drives it from a numbered menu in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), and persists it as comma-separated
//! text files.
//!
//! ## Layers
//!
//! ```text
//! Records → Containers → Algorithms → Inventory → TUI
//! ```
//!
//! 1. [`records`]: the [`records::Product`], [`records::Supplier`] and
//!    [`records::Stock`] value types and their line format.
//! 2. [`catalog`]: the containers that own the records: an unbalanced binary
//!    search tree of products and two singly-linked lists.
//! 3. [`algorithms`]: bubble sort, merge sort, linear and binary search over
//!    snapshot arrays of references taken from the containers.
//! 4. [`inventory`]: [`inventory::Inventory`] owns the containers, implements
//!    each menu command and saves / loads the data files.
//! 5. [`console`]: the captured output the menu prints.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod catalog;
pub mod console;
pub mod inventory;
pub mod records;
pub mod ui;
