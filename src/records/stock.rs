//! Stock record

use super::{FieldReader, ProductId, RecordParseError, SupplierId};
use std::fmt;

/// Quantity of one product held from one supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock {
    pub product_id: ProductId,
    pub supplier_id: SupplierId,
    pub quantity: i32,
}

impl Stock {
    pub fn new(product_id: ProductId, supplier_id: SupplierId, quantity: i32) -> Self {
        Stock {
            product_id,
            supplier_id,
            quantity,
        }
    }

    /// The (product id, supplier id) pair this record is keyed on
    pub fn key(&self) -> (ProductId, SupplierId) {
        (self.product_id, self.supplier_id)
    }

    /// Serialize as `productId,supplierId,quantity`
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.product_id, self.supplier_id, self.quantity)
    }

    /// Parse a `productId,supplierId,quantity` line
    pub fn from_line(line: &str) -> Result<Self, RecordParseError> {
        let mut fields = FieldReader::new(line);
        Ok(Stock {
            product_id: fields.number("product id")?,
            supplier_id: fields.number("supplier id")?,
            quantity: fields.number("quantity")?,
        })
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product ID: {}, Supplier ID: {}, Quantity: {}",
            self.product_id, self.supplier_id, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let s = Stock::new(1, 2, 40);
        assert_eq!(s.to_line(), "1,2,40");
        assert_eq!(Stock::from_line("1,2,40").unwrap(), s);
    }

    #[test]
    fn test_from_line_missing_quantity() {
        let err = Stock::from_line("1,2").unwrap_err();
        assert_eq!(err.field, "quantity");
    }
}
