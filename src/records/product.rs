//! Product record

use super::{FieldReader, ProductId, RecordParseError};
use std::fmt;

/// A catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Serialize as `id,name,price,category`
    pub fn to_line(&self) -> String {
        format!("{},{},{},{}", self.id, self.name, self.price, self.category)
    }

    /// Parse an `id,name,price,category` line
    pub fn from_line(line: &str) -> Result<Self, RecordParseError> {
        let mut fields = FieldReader::new(line);
        let id = fields.number("product id")?;
        let name = fields.text();
        let price = fields.number("price")?;
        let category = fields.text();
        Ok(Product {
            id,
            name,
            price,
            category,
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product ID: {}, Name: {}, Price: ${}, Category: {}",
            self.id, self.name, self.price, self.category
        )
    }
}
