//! Sorting and searching over snapshot arrays
//!
//! A snapshot array is a `Vec` of references collected from a container just
//! before it is needed (see [`crate::catalog`]). The routines here reorder or
//! scan that array only:
//!
//! - [`sorting`]: bubble sort by id (products, suppliers) and stable merge sort
//!   by quantity, descending (stock)
//! - [`searching`]: linear and binary search by id (products, suppliers)

pub mod searching;
pub mod sorting;

pub use searching::{
    binary_search_products, binary_search_suppliers, linear_search_products,
    linear_search_suppliers,
};
pub use sorting::{bubble_sort_products, bubble_sort_suppliers, merge_sort_stocks};
