pub mod dashboards;
pub mod projections;
pub mod shared;
pub mod system;

use anyhow::Context;
use contracts::dashboards::d400_sales_overview::SalesOverviewRequest;

use crate::dashboards::d400_sales_overview::{render, service};
use crate::projections::p900_order_ledger::OrderLedger;
use crate::shared::config::{load_config, source_paths, ReportFormat};
use crate::shared::data::csv_source;

fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    // Load configuration (config.toml next to the executable or embedded default)
    let config = load_config().context("failed to load config.toml")?;
    let date_range = config.filter.date_range()?;

    let paths = source_paths(&config);
    let tables = csv_source::load_sources(&paths).context("failed to load source tables")?;

    let ledger = OrderLedger::build(&tables.orders, &tables.order_items, &tables.order_payments);

    let request = SalesOverviewRequest {
        date_range,
        end_bound: config.filter.end_bound,
        top_sellers: config.report.top_sellers,
        currency: config.report.currency.clone(),
        include_rows: config.report.show_rows,
    };
    let overview = service::build_sales_overview(&ledger, &request)?;

    let output = match config.report.format {
        ReportFormat::Text => render::render_text(&overview, config.report.max_rows)?,
        ReportFormat::Json => render::render_json(&overview)?,
    };
    println!("{}", output);

    Ok(())
}
