//! Menu commands and the fields each one prompts for

use crate::inventory::errors::InventoryError;

/// What kind of answer a prompt expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Decimal,
    Text,
}

/// One prompt of a command's input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub prompt: &'static str,
    pub kind: FieldKind,
}

impl Field {
    const fn integer(prompt: &'static str) -> Self {
        Field {
            prompt,
            kind: FieldKind::Integer,
        }
    }

    const fn decimal(prompt: &'static str) -> Self {
        Field {
            prompt,
            kind: FieldKind::Decimal,
        }
    }

    const fn text(prompt: &'static str) -> Self {
        Field {
            prompt,
            kind: FieldKind::Text,
        }
    }

    /// Check an answer against the field kind
    pub fn validate(&self, answer: &str) -> Result<(), InventoryError> {
        match self.kind {
            FieldKind::Integer => parse_integer(self.prompt, answer).map(|_| ()),
            FieldKind::Decimal => parse_decimal(self.prompt, answer).map(|_| ()),
            FieldKind::Text => Ok(()),
        }
    }
}

pub fn parse_integer(field: &str, answer: &str) -> Result<i32, InventoryError> {
    answer.trim().parse().map_err(|_| invalid(field, answer))
}

pub fn parse_decimal(field: &str, answer: &str) -> Result<f64, InventoryError> {
    answer.trim().parse().map_err(|_| invalid(field, answer))
}

fn invalid(field: &str, answer: &str) -> InventoryError {
    InventoryError::InvalidInput {
        field: field.to_string(),
        value: answer.to_string(),
    }
}

const PRODUCT_FIELDS: &[Field] = &[
    Field::integer("Enter Product ID"),
    Field::text("Enter Product Name"),
    Field::decimal("Enter Product Price"),
    Field::text("Enter Product Category"),
];

const SUPPLIER_FIELDS: &[Field] = &[
    Field::integer("Enter Supplier ID"),
    Field::text("Enter Supplier Name"),
    Field::text("Enter Supplier Contact Info"),
];

const STOCK_FIELDS: &[Field] = &[
    Field::integer("Enter Product ID"),
    Field::integer("Enter Supplier ID"),
    Field::integer("Enter Quantity"),
];

const SEARCH_PRODUCT_FIELDS: &[Field] = &[Field::integer("Enter Product ID to search")];
const REMOVE_PRODUCT_FIELDS: &[Field] = &[Field::integer("Enter Product ID to remove")];
const SEARCH_SUPPLIER_FIELDS: &[Field] = &[Field::integer("Enter Supplier ID to search")];

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddProduct,
    DisplayProducts,
    SearchProduct,
    RemoveProduct,
    AddSupplier,
    DisplaySuppliers,
    SearchSupplier,
    AddStock,
    DisplayStocks,
    SortProducts,
    SortStocks,
    SaveAll,
    LoadAll,
    SortSuppliers,
    Exit,
}

/// Menu entries in display order
pub const MENU: [MenuCommand; 15] = [
    MenuCommand::AddProduct,
    MenuCommand::DisplayProducts,
    MenuCommand::SearchProduct,
    MenuCommand::RemoveProduct,
    MenuCommand::AddSupplier,
    MenuCommand::DisplaySuppliers,
    MenuCommand::SearchSupplier,
    MenuCommand::AddStock,
    MenuCommand::DisplayStocks,
    MenuCommand::SortProducts,
    MenuCommand::SortStocks,
    MenuCommand::SaveAll,
    MenuCommand::LoadAll,
    MenuCommand::SortSuppliers,
    MenuCommand::Exit,
];

impl MenuCommand {
    /// The number typed to select this command
    pub fn number(self) -> u8 {
        match self {
            MenuCommand::AddProduct => 1,
            MenuCommand::DisplayProducts => 2,
            MenuCommand::SearchProduct => 3,
            MenuCommand::RemoveProduct => 4,
            MenuCommand::AddSupplier => 5,
            MenuCommand::DisplaySuppliers => 6,
            MenuCommand::SearchSupplier => 7,
            MenuCommand::AddStock => 8,
            MenuCommand::DisplayStocks => 9,
            MenuCommand::SortProducts => 10,
            MenuCommand::SortStocks => 11,
            MenuCommand::SaveAll => 12,
            MenuCommand::LoadAll => 13,
            MenuCommand::SortSuppliers => 14,
            MenuCommand::Exit => 0,
        }
    }

    pub fn from_choice(choice: i64) -> Option<Self> {
        MENU.iter().copied().find(|c| i64::from(c.number()) == choice)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::AddProduct => "Add Product",
            MenuCommand::DisplayProducts => "Display All Products",
            MenuCommand::SearchProduct => "Search Product by ID",
            MenuCommand::RemoveProduct => "Remove Product",
            MenuCommand::AddSupplier => "Add Supplier",
            MenuCommand::DisplaySuppliers => "Display All Suppliers",
            MenuCommand::SearchSupplier => "Search Supplier by ID",
            MenuCommand::AddStock => "Add Stock",
            MenuCommand::DisplayStocks => "Display All Stocks",
            MenuCommand::SortProducts => "Sort Products",
            MenuCommand::SortStocks => "Sort Stocks",
            MenuCommand::SaveAll => "Save All Data",
            MenuCommand::LoadAll => "Load All Data",
            MenuCommand::SortSuppliers => "Sort Suppliers",
            MenuCommand::Exit => "Exit",
        }
    }

    /// Prompts answered before the command runs
    pub fn fields(self) -> &'static [Field] {
        match self {
            MenuCommand::AddProduct => PRODUCT_FIELDS,
            MenuCommand::SearchProduct => SEARCH_PRODUCT_FIELDS,
            MenuCommand::RemoveProduct => REMOVE_PRODUCT_FIELDS,
            MenuCommand::AddSupplier => SUPPLIER_FIELDS,
            MenuCommand::SearchSupplier => SEARCH_SUPPLIER_FIELDS,
            MenuCommand::AddStock => STOCK_FIELDS,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice() {
        assert_eq!(MenuCommand::from_choice(1), Some(MenuCommand::AddProduct));
        assert_eq!(MenuCommand::from_choice(13), Some(MenuCommand::LoadAll));
        assert_eq!(MenuCommand::from_choice(0), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::from_choice(15), None);
        assert_eq!(MenuCommand::from_choice(-1), None);
    }

    #[test]
    fn test_numbers_are_unique() {
        for (i, a) in MENU.iter().enumerate() {
            for b in &MENU[i + 1..] {
                assert_ne!(a.number(), b.number());
            }
        }
    }

    #[test]
    fn test_field_validation() {
        let field = Field::decimal("Enter Product Price");
        assert!(field.validate(" 4.25 ").is_ok());
        assert_eq!(
            field.validate("free"),
            Err(InventoryError::InvalidInput {
                field: "Enter Product Price".to_string(),
                value: "free".to_string()
            })
        );
        assert!(Field::text("Name").validate("").is_ok());
        assert!(Field::integer("ID").validate("1.5").is_err());
    }
}
