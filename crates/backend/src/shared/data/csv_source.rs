use contracts::domain::a001_order::{self, Order};
use contracts::domain::a002_order_item::{self, OrderItem};
use contracts::domain::a003_order_payment::{self, OrderPayment};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::error::LoadError;

/// Static description of one source table
#[derive(Debug, Clone, Copy)]
pub struct CsvTable {
    pub name: &'static str,
    pub required_columns: &'static [&'static str],
}

pub const ORDERS: CsvTable = CsvTable {
    name: "orders",
    required_columns: a001_order::aggregate::REQUIRED_COLUMNS,
};

pub const ORDER_ITEMS: CsvTable = CsvTable {
    name: "order items",
    required_columns: a002_order_item::aggregate::REQUIRED_COLUMNS,
};

pub const ORDER_PAYMENTS: CsvTable = CsvTable {
    name: "order payments",
    required_columns: a003_order_payment::aggregate::REQUIRED_COLUMNS,
};

/// Locations of the three source files
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub orders: PathBuf,
    pub order_items: PathBuf,
    pub order_payments: PathBuf,
}

/// Raw tables as loaded from disk
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub order_payments: Vec<OrderPayment>,
}

/// Load all three source files. The first failure aborts the load.
pub fn load_sources(paths: &SourcePaths) -> Result<SourceTables, LoadError> {
    let orders = read_table(&ORDERS, &paths.orders)?;
    let order_items = read_table(&ORDER_ITEMS, &paths.order_items)?;
    let order_payments = read_table(&ORDER_PAYMENTS, &paths.order_payments)?;

    tracing::info!(
        "Loaded sources: {} orders, {} order items, {} payments",
        orders.len(),
        order_items.len(),
        order_payments.len()
    );

    Ok(SourceTables {
        orders,
        order_items,
        order_payments,
    })
}

/// Read a CSV file into typed rows
pub fn read_table<T: DeserializeOwned>(table: &CsvTable, path: &Path) -> Result<Vec<T>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::MissingFile {
            table: table.name,
            path: path.to_path_buf(),
        });
    }

    tracing::debug!("Reading {} from {}", table.name, path.display());

    let file = File::open(path).map_err(|e| LoadError::Csv {
        table: table.name,
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;

    read_table_from_reader(table, path, file)
}

/// Read typed rows from any reader. `path` only labels errors.
///
/// Columns not listed in the table description are ignored, column order
/// does not matter.
pub fn read_table_from_reader<T, R>(table: &CsvTable, path: &Path, reader: R) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv {
            table: table.name,
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    for column in table.required_columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::Schema {
                table: table.name,
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<T>().enumerate() {
        let row = result.map_err(|e| row_error(table, path, index, e))?;
        rows.push(row);
    }

    tracing::debug!("{}: {} rows", table.name, rows.len());

    Ok(rows)
}

fn row_error(table: &CsvTable, path: &Path, index: usize, err: csv::Error) -> LoadError {
    // header is line 1
    let line = err
        .position()
        .map(|p| p.line())
        .unwrap_or(index as u64 + 2);

    let message = match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    };

    LoadError::Row {
        table: table.name,
        path: path.to_path_buf(),
        line,
        message,
    }
}
