use anyhow::bail;
use contracts::shared::date_range::{DateRange, EndBound};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shared::data::csv_source::SourcePaths;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Locations of the source CSV files
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_orders_path")]
    pub orders_path: String,
    #[serde(default = "default_order_items_path")]
    pub order_items_path: String,
    #[serde(default = "default_order_payments_path")]
    pub order_payments_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            orders_path: default_orders_path(),
            order_items_path: default_order_items_path(),
            order_payments_path: default_order_payments_path(),
        }
    }
}

fn default_orders_path() -> String {
    "data/orders_dataset_modified.csv".to_string()
}

fn default_order_items_path() -> String {
    "data/order_items_dataset_modified.csv".to_string()
}

fn default_order_payments_path() -> String {
    "data/order_payments_dataset_modified.csv".to_string()
}

/// Date picker bounds (`YYYY-MM-DD`), both or neither
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub end_bound: EndBound,
}

impl FilterConfig {
    /// `None` when no bounds are configured (the full data span is used)
    pub fn date_range(&self) -> anyhow::Result<Option<DateRange>> {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => Ok(Some(DateRange::parse(start, end)?)),
            (None, None) => Ok(None),
            _ => bail!("[filter] needs both start_date and end_date, or neither"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_top_sellers")]
    pub top_sellers: usize,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub format: ReportFormat,
    /// Print filtered rows in the text report
    #[serde(default)]
    pub show_rows: bool,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_sellers: default_top_sellers(),
            currency: default_currency(),
            format: ReportFormat::default(),
            show_rows: false,
            max_rows: default_max_rows(),
        }
    }
}

fn default_top_sellers() -> usize {
    10
}

fn default_currency() -> String {
    "IDR".to_string()
}

fn default_max_rows() -> usize {
    50
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]
orders_path = "data/orders_dataset_modified.csv"
order_items_path = "data/order_items_dataset_modified.csv"
order_payments_path = "data/order_payments_dataset_modified.csv"

[filter]
end_bound = "whole_day"

[report]
top_sellers = 10
currency = "IDR"
format = "text"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current directory
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    candidates.push(PathBuf::from("config.toml"));

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        } else {
            tracing::debug!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve a configured data path
///
/// Absolute paths are used as is. Relative paths are looked up next to the
/// executable first, then relative to the current directory.
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    PathBuf::from(path_str)
}

/// Get the source file locations from configuration
pub fn source_paths(config: &Config) -> SourcePaths {
    SourcePaths {
        orders: resolve_path(&config.data.orders_path),
        order_items: resolve_path(&config.data.order_items_path),
        order_payments: resolve_path(&config.data.order_payments_path),
    }
}
