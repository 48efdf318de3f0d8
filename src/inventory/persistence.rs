//! Line-based persistence for the three containers
//!
//! Each container is saved to its own file, one record per line, in the
//! format described in [`crate::records`]. Files are opened for the duration
//! of one call and closed on every exit path.
//!
//! # Load Semantics
//!
//! - Blank lines are skipped.
//! - A duplicate product or supplier id is recorded as a warning in the
//!   [`LoadReport`] and the line is skipped.
//! - Duplicate stock pairs merge their quantities.
//! - A malformed numeric field stops the load with
//!   [`InventoryError::MalformedRecord`]; lines before it stay loaded.

use super::constants::{PRODUCTS_FILE, STOCKS_FILE, SUPPLIERS_FILE};
use super::errors::{FileAction, InventoryError};
use crate::catalog::{ProductIndex, StockLedger, StockUpdate, SupplierRegistry};
use crate::records::{Product, RecordKind, Stock, Supplier};
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Locations of the three data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub products: PathBuf,
    pub suppliers: PathBuf,
    pub stocks: PathBuf,
}

impl DataFiles {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        DataFiles {
            products: dir.join(PRODUCTS_FILE),
            suppliers: dir.join(SUPPLIERS_FILE),
            stocks: dir.join(STOCKS_FILE),
        }
    }
}

impl Default for DataFiles {
    /// Default file names relative to the working directory
    fn default() -> Self {
        DataFiles {
            products: PathBuf::from(PRODUCTS_FILE),
            suppliers: PathBuf::from(SUPPLIERS_FILE),
            stocks: PathBuf::from(STOCKS_FILE),
        }
    }
}

/// Result of loading one file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Lines that created a new record
    pub loaded: usize,
    /// Stock lines folded into an existing entry
    pub merged: usize,
    /// Duplicate ids that were skipped
    pub warnings: Vec<InventoryError>,
}

pub fn save_products(index: &ProductIndex, path: &Path) -> Result<usize, InventoryError> {
    let written = write_lines(path, index.collect().iter().map(|p| p.to_line()))?;
    info!("saved {} products to {}", written, path.display());
    Ok(written)
}

pub fn save_suppliers(registry: &SupplierRegistry, path: &Path) -> Result<usize, InventoryError> {
    let written = write_lines(path, registry.iter().map(Supplier::to_line))?;
    info!("saved {} suppliers to {}", written, path.display());
    Ok(written)
}

pub fn save_stocks(ledger: &StockLedger, path: &Path) -> Result<usize, InventoryError> {
    let written = write_lines(path, ledger.iter().map(Stock::to_line))?;
    info!("saved {} stock entries to {}", written, path.display());
    Ok(written)
}

pub fn load_products(index: &mut ProductIndex, path: &Path) -> Result<LoadReport, InventoryError> {
    let mut report = LoadReport::default();
    for_each_record(path, |line_number, line| {
        let product = Product::from_line(line)
            .map_err(|e| InventoryError::malformed(RecordKind::Product, path, line_number, e))?;
        match index.insert(product) {
            Ok(()) => report.loaded += 1,
            Err(err) if err.is_duplicate() => skip_duplicate(&mut report, path, err),
            Err(err) => return Err(err),
        }
        Ok(())
    })?;
    info!("loaded {} products from {}", report.loaded, path.display());
    Ok(report)
}

pub fn load_suppliers(
    registry: &mut SupplierRegistry,
    path: &Path,
) -> Result<LoadReport, InventoryError> {
    let mut report = LoadReport::default();
    for_each_record(path, |line_number, line| {
        let supplier = Supplier::from_line(line)
            .map_err(|e| InventoryError::malformed(RecordKind::Supplier, path, line_number, e))?;
        match registry.add(supplier) {
            Ok(()) => report.loaded += 1,
            Err(err) if err.is_duplicate() => skip_duplicate(&mut report, path, err),
            Err(err) => return Err(err),
        }
        Ok(())
    })?;
    info!("loaded {} suppliers from {}", report.loaded, path.display());
    Ok(report)
}

pub fn load_stocks(ledger: &mut StockLedger, path: &Path) -> Result<LoadReport, InventoryError> {
    let mut report = LoadReport::default();
    for_each_record(path, |line_number, line| {
        let stock = Stock::from_line(line)
            .map_err(|e| InventoryError::malformed(RecordKind::Stock, path, line_number, e))?;
        match ledger.add(stock) {
            StockUpdate::Inserted => report.loaded += 1,
            StockUpdate::Merged { .. } => report.merged += 1,
        }
        Ok(())
    })?;
    info!(
        "loaded {} stock entries ({} merged) from {}",
        report.loaded,
        report.merged,
        path.display()
    );
    Ok(report)
}

fn skip_duplicate(report: &mut LoadReport, path: &Path, err: InventoryError) {
    warn!("{}: skipping {}", path.display(), err);
    report.warnings.push(err);
}

/// Truncate `path` and write one line per item; returns the line count
fn write_lines<I>(path: &Path, lines: I) -> Result<usize, InventoryError>
where
    I: IntoIterator<Item = String>,
{
    let write_error = |e| InventoryError::file(path, FileAction::Write, e);
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    let mut written = 0;
    for line in lines {
        writeln!(writer, "{}", line).map_err(write_error)?;
        written += 1;
    }
    writer.flush().map_err(write_error)?;
    Ok(written)
}

/// Call `handle` with the 1-based line number and text of every non-blank line
fn for_each_record<F>(path: &Path, mut handle: F) -> Result<(), InventoryError>
where
    F: FnMut(usize, &str) -> Result<(), InventoryError>,
{
    let read_error = |e| InventoryError::file(path, FileAction::Read, e);
    let file = File::open(path).map_err(read_error)?;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(read_error)?;
        if line.trim().is_empty() {
            continue;
        }
        handle(index + 1, &line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_data_files_in_dir() {
        let files = DataFiles::in_dir("/data");
        assert_eq!(files.products, PathBuf::from("/data/products.txt"));
        assert_eq!(files.suppliers, PathBuf::from("/data/suppliers.txt"));
        assert_eq!(files.stocks, PathBuf::from("/data/stocks.txt"));
        assert_eq!(DataFiles::default().stocks, PathBuf::from("stocks.txt"));
    }

    #[test]
    fn test_save_products_in_id_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.txt");
        let mut index = ProductIndex::new();
        index.insert(Product::new(2, "B", 2.5, "x")).unwrap();
        index.insert(Product::new(1, "A", 1.0, "y")).unwrap();

        assert_eq!(save_products(&index, &path).unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1,A,1,y\n2,B,2.5,x\n");
    }

    #[test]
    fn test_load_skips_blank_lines_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.txt");
        fs::write(&path, "1,A,1,y\n\n   \n1,Again,3,z\n2,B,2,x\n").unwrap();

        let mut index = ProductIndex::new();
        let report = load_products(&mut index, &path).unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(
            report.warnings,
            vec![InventoryError::DuplicateKey {
                kind: RecordKind::Product,
                id: 1
            }]
        );
        assert_eq!(index.search(1).unwrap().name, "A");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let mut registry = SupplierRegistry::new();
        match load_suppliers(&mut registry, &path) {
            Err(InventoryError::FileError { action, .. }) => assert_eq!(action, FileAction::Read),
            other => panic!("expected file error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_stops_at_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stocks.txt");
        fs::write(&path, "1,1,5\n1,1,5\n2,x,3\n3,3,3\n").unwrap();

        let mut ledger = StockLedger::new();
        let err = load_stocks(&mut ledger, &path).unwrap_err();
        match err {
            InventoryError::MalformedRecord {
                kind, line, field, ..
            } => {
                assert_eq!(kind, RecordKind::Stock);
                assert_eq!(line, 3);
                assert_eq!(field, "supplier id");
            }
            other => panic!("expected malformed record, got {:?}", other),
        }
        assert_eq!(ledger.count(), 1);
        assert_eq!(ledger.find(1, 1).unwrap().quantity, 10);
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("stocks.txt");
        let err = save_stocks(&StockLedger::new(), &path).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::FileError {
                action: FileAction::Write,
                ..
            }
        ));
    }
}
