// Constants for the inventory

/// Default product data file name
pub const PRODUCTS_FILE: &str = "products.txt";

/// Default supplier data file name
pub const SUPPLIERS_FILE: &str = "suppliers.txt";

/// Default stock data file name
pub const STOCKS_FILE: &str = "stocks.txt";

/// Log file written next to the data files while the UI runs
pub const LOG_FILE: &str = "stockroom.log";
