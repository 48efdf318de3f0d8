//! Supplier record

use super::{FieldReader, RecordParseError, SupplierId};
use std::fmt;

/// A supplier of products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_info: String,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Supplier {
            id,
            name: name.into(),
            contact_info: contact_info.into(),
        }
    }

    /// Serialize as `id,name,contactInfo`
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.id, self.name, self.contact_info)
    }

    /// Parse an `id,name,contactInfo` line
    pub fn from_line(line: &str) -> Result<Self, RecordParseError> {
        let mut fields = FieldReader::new(line);
        let id = fields.number("supplier id")?;
        let name = fields.text();
        let contact_info = fields.text();
        Ok(Supplier {
            id,
            name,
            contact_info,
        })
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Supplier ID: {}, Name: {}, Contact: {}",
            self.id, self.name, self.contact_info
        )
    }
}
