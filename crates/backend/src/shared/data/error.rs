use std::path::PathBuf;
use thiserror::Error;

/// Ошибки загрузки исходных CSV-таблиц
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{table} file not found: {}", .path.display())]
    MissingFile { table: &'static str, path: PathBuf },

    #[error("{table} file {} has no '{column}' column", .path.display())]
    Schema {
        table: &'static str,
        path: PathBuf,
        column: String,
    },

    #[error("Failed to read {table} file {}: {source}", .path.display())]
    Csv {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{table} file {}, line {line}: {message}", .path.display())]
    Row {
        table: &'static str,
        path: PathBuf,
        line: u64,
        message: String,
    },
}
