use anyhow::Result;
use contracts::dashboards::d400_sales_overview::SalesOverviewResponse;
use std::fmt::Write;

use crate::shared::format::{format_amount, format_number};

const TITLE: &str = "E-Commerce Dashboard";
const SUBTITLE: &str = "Analyzing Seller Performance and Payment Methods";

/// Render the overview as JSON
pub fn render_json(overview: &SalesOverviewResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(overview)?)
}

/// Render the overview as a plain-text report.
///
/// Filtered rows are printed only when the response carries them, at most
/// `max_rows` of them.
pub fn render_text(overview: &SalesOverviewResponse, max_rows: usize) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", SUBTITLE)?;
    writeln!(out)?;

    match (&overview.date_range, &overview.data_bounds) {
        (Some(range), Some(bounds)) => writeln!(
            out,
            "Period: {} .. {} (data: {} .. {})",
            range.start, range.end, bounds.start, bounds.end
        )?,
        (Some(range), None) => writeln!(out, "Period: {} .. {}", range.start, range.end)?,
        _ => writeln!(out, "Period: -")?,
    }
    writeln!(out)?;

    section(&mut out, "Daily Orders")?;
    writeln!(out, "Total orders:  {}", format_number(overview.metrics.total_orders))?;
    writeln!(out, "Total revenue: {}", overview.metrics.total_revenue_display)?;
    writeln!(out)?;

    if overview.daily_orders.is_empty() {
        writeln!(out, "No data for the selected period")?;
        return Ok(out);
    }

    writeln!(out, "{:<12} {:>8} {:>16}", "Date", "Orders", "Revenue")?;
    for day in &overview.daily_orders {
        writeln!(
            out,
            "{:<12} {:>8} {:>16}",
            day.order_date.to_string(),
            format_number(day.order_count),
            format_amount(day.revenue)
        )?;
    }
    writeln!(out)?;

    section(
        &mut out,
        &format!("Top {} Sellers by Revenue", overview.top_sellers.len()),
    )?;
    let seller_width = overview
        .top_sellers
        .iter()
        .map(|s| s.seller_id.chars().count())
        .max()
        .unwrap_or(0)
        .max("Seller ID".len());
    writeln!(
        out,
        "{:>3}  {:<w$} {:>16} {:>8}",
        "#",
        "Seller ID",
        "Total Revenue",
        "Items",
        w = seller_width
    )?;
    for (i, seller) in overview.top_sellers.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<w$} {:>16} {:>8}",
            i + 1,
            seller.seller_id,
            format_amount(seller.total_revenue),
            format_number(seller.total_items),
            w = seller_width
        )?;
    }
    if overview.seller_performance.len() > overview.top_sellers.len() {
        writeln!(
            out,
            "     ... {} sellers in total",
            format_number(overview.seller_performance.len())
        )?;
    }
    writeln!(out)?;

    section(&mut out, "Payment Methods by Total Purchase Value")?;
    writeln!(out, "{:<14} {:>20} {:>10}", "Payment Type", "Total Purchase Value", "Count")?;
    for payment in &overview.payment_methods {
        writeln!(
            out,
            "{:<14} {:>20} {:>10}",
            payment.payment_type,
            format_amount(payment.total_purchase_value),
            format_number(payment.purchase_count)
        )?;
    }

    if !overview.rows.is_empty() {
        writeln!(out)?;
        let shown = overview.rows.len().min(max_rows);
        section(
            &mut out,
            &format!(
                "Filtered Data ({} of {} rows)",
                format_number(shown),
                format_number(overview.rows.len())
            ),
        )?;
        writeln!(
            out,
            "{:<34} {:<20} {:<34} {:>4} {:>10} {:>9} {:<12} {:>10}",
            "order_id", "purchased", "seller_id", "item", "price", "freight", "payment", "value"
        )?;
        for row in overview.rows.iter().take(shown) {
            writeln!(
                out,
                "{:<34} {:<20} {:<34} {:>4} {:>10} {:>9} {:<12} {:>10}",
                row.order_id,
                row.order_purchase_timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                row.seller_id,
                row.order_item_id,
                format_amount(row.price),
                format_amount(row.freight_value),
                row.payment_type,
                format_amount(row.payment_value)
            )?;
        }
    }

    Ok(out)
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}
