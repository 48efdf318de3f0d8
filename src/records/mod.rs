//! Record types stored by the catalog
//!
//! This module defines the three plain value records:
//! - [`product`]: [`Product`], keyed by product id
//! - [`supplier`]: [`Supplier`], keyed by supplier id
//! - [`stock`]: [`Stock`], keyed by the (product id, supplier id) pair
//!
//! # Line Format
//!
//! Every record serializes to a single comma-separated line and parses back
//! from one. There is no quoting or escaping:
//!
//! ```text
//! Product:  id,name,price,category
//! Supplier: id,name,contactInfo
//! Stock:    productId,supplierId,quantity
//! ```
//!
//! A text field containing a comma will shift the remaining fields on reload.
//! Missing trailing text fields read as empty strings, extra fields are
//! ignored, and a numeric field that is missing or non-numeric is a
//! [`RecordParseError`].

pub mod product;
pub mod stock;
pub mod supplier;

pub use product::Product;
pub use stock::Stock;
pub use supplier::Supplier;

use std::fmt;
use std::str::{FromStr, Split};

/// Product identifier type
pub type ProductId = i32;

/// Supplier identifier type
pub type SupplierId = i32;

/// Which record kind an error or operation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Product,
    Supplier,
    Stock,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Product => write!(f, "Product"),
            RecordKind::Supplier => write!(f, "Supplier"),
            RecordKind::Stock => write!(f, "Stock"),
        }
    }
}

/// A field of a record line could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordParseError {
    pub field: &'static str,
    pub value: String,
}

impl fmt::Display for RecordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} '{}'", self.field, self.value)
    }
}

impl std::error::Error for RecordParseError {}

/// Reads the comma-separated fields of one record line in order
pub(crate) struct FieldReader<'a> {
    fields: Split<'a, char>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        FieldReader {
            fields: line.split(','),
        }
    }

    /// Next field as text; a missing field reads as empty
    pub(crate) fn text(&mut self) -> String {
        self.fields.next().unwrap_or("").to_string()
    }

    /// Next field parsed as a number (surrounding whitespace is ignored)
    pub(crate) fn number<T: FromStr>(
        &mut self,
        field: &'static str,
    ) -> Result<T, RecordParseError> {
        let raw = self.fields.next().unwrap_or("");
        raw.trim().parse().map_err(|_| RecordParseError {
            field,
            value: raw.to_string(),
        })
    }
}
