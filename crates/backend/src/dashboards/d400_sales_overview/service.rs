use anyhow::{bail, Result};
use contracts::dashboards::d400_sales_overview::{
    OverviewMetrics, SalesOverviewRequest, SalesOverviewResponse,
};
use contracts::shared::date_range::DateRange;

use super::aggregation::{analyze_payment_methods, analyze_seller_performance, daily_orders};
use crate::projections::p900_order_ledger::service::filter_by_window;
use crate::projections::p900_order_ledger::OrderLedger;
use crate::shared::format::format_currency;

/// Get sales overview data for the requested date range
pub fn build_sales_overview(
    ledger: &OrderLedger,
    request: &SalesOverviewRequest,
) -> Result<SalesOverviewResponse> {
    if let Some(range) = request.date_range {
        if !range.is_valid() {
            bail!("Invalid date range: start {} is after end {}", range.start, range.end);
        }
    }

    if ledger.is_empty() {
        tracing::warn!("Order ledger is empty");
    }

    let data_bounds = ledger.date_bounds();
    let date_range = resolve_date_range(request.date_range, data_bounds);

    let rows = match date_range {
        Some(range) => filter_by_window(ledger.rows(), &range.to_window(request.end_bound)),
        None => Vec::new(),
    };

    match date_range {
        Some(range) if rows.is_empty() => {
            tracing::warn!("No orders between {} and {}", range.start, range.end)
        }
        Some(range) => tracing::info!(
            "Filtered {} of {} rows between {} and {}",
            rows.len(),
            ledger.len(),
            range.start,
            range.end
        ),
        None => {}
    }

    let daily = daily_orders(rows.iter().copied());
    let seller_performance = analyze_seller_performance(rows.iter().copied());
    let payment_methods = analyze_payment_methods(rows.iter().copied());

    let total_orders: usize = daily.iter().map(|d| d.order_count).sum();
    let total_revenue: f64 = daily.iter().map(|d| d.revenue).sum();
    let metrics = OverviewMetrics {
        total_orders,
        total_revenue,
        total_revenue_display: format_currency(total_revenue, &request.currency),
    };

    let top_sellers = seller_performance
        .iter()
        .take(request.top_sellers)
        .cloned()
        .collect();

    let rows = if request.include_rows {
        rows.into_iter().cloned().collect()
    } else {
        Vec::new()
    };

    Ok(SalesOverviewResponse {
        date_range,
        data_bounds,
        metrics,
        daily_orders: daily,
        seller_performance,
        top_sellers,
        payment_methods,
        rows,
    })
}

/// Requested range clamped into the data span; the whole span when nothing
/// was requested. A range outside the data is kept as is and selects nothing.
fn resolve_date_range(requested: Option<DateRange>, bounds: Option<DateRange>) -> Option<DateRange> {
    match (requested, bounds) {
        (Some(range), Some(bounds)) => Some(range.clamp_to(&bounds).unwrap_or(range)),
        (Some(range), None) => Some(range),
        (None, bounds) => bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use contracts::projections::p900_order_ledger::OrderRecord;
    use contracts::shared::date_range::EndBound;

    fn record(order_id: &str, at: &str, seller_id: &str, price: f64, payment_type: &str) -> OrderRecord {
        OrderRecord {
            order_id: order_id.to_string(),
            order_purchase_timestamp: NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M:%S").unwrap(),
            seller_id: seller_id.to_string(),
            order_item_id: "1".to_string(),
            payment_type: payment_type.to_string(),
            price,
            freight_value: 0.0,
            payment_value: price,
        }
    }

    fn ledger() -> OrderLedger {
        OrderLedger::from_rows(vec![
            record("o1", "2018-01-01 08:00:00", "s1", 100.0, "credit_card"),
            record("o2", "2018-01-01 19:00:00", "s2", 40.0, "boleto"),
            record("o3", "2018-01-02 10:00:00", "s3", 70.0, "credit_card"),
            record("o4", "2018-01-03 10:00:00", "s1", 5.0, "voucher"),
            record("o5", "2018-01-05 23:00:00", "s4", 10.0, "voucher"),
        ])
    }

    #[test]
    fn test_full_span_by_default() {
        let ledger = ledger();
        let response = build_sales_overview(&ledger, &SalesOverviewRequest::default()).unwrap();

        let range = response.date_range.unwrap();
        assert_eq!(range.start.to_string(), "2018-01-01");
        assert_eq!(range.end.to_string(), "2018-01-05");
        assert_eq!(response.data_bounds, Some(range));

        assert_eq!(response.metrics.total_orders, 5);
        assert!((response.metrics.total_revenue - 225.0).abs() < 1e-9);
        assert_eq!(response.metrics.total_revenue_display, "Rp225,00");
        assert_eq!(response.daily_orders.len(), 4);
        assert_eq!(response.seller_performance[0].seller_id, "s1");
        assert!(response.rows.is_empty());
    }

    #[test]
    fn test_range_and_top_sellers() {
        let ledger = ledger();
        let request = SalesOverviewRequest {
            date_range: Some(DateRange::parse("2018-01-01", "2018-01-02").unwrap()),
            top_sellers: 2,
            include_rows: true,
            ..SalesOverviewRequest::default()
        };

        let response = build_sales_overview(&ledger, &request).unwrap();

        assert_eq!(response.metrics.total_orders, 3);
        assert_eq!(response.seller_performance.len(), 3);
        let top: Vec<&str> = response.top_sellers.iter().map(|s| s.seller_id.as_str()).collect();
        assert_eq!(top, vec!["s1", "s3"]);
        assert_eq!(response.payment_methods[0].payment_type, "credit_card");
        assert_eq!(response.payment_methods[0].purchase_count, 2);
        assert_eq!(response.rows.len(), 3);
    }

    #[test]
    fn test_instant_end_bound_drops_end_day() {
        let ledger = ledger();
        let request = SalesOverviewRequest {
            date_range: Some(DateRange::parse("2018-01-01", "2018-01-02").unwrap()),
            end_bound: EndBound::Instant,
            ..SalesOverviewRequest::default()
        };

        let response = build_sales_overview(&ledger, &request).unwrap();
        assert_eq!(response.metrics.total_orders, 2);
    }

    #[test]
    fn test_range_clamped_to_data() {
        let ledger = ledger();
        let request = SalesOverviewRequest {
            date_range: Some(DateRange::parse("2017-06-01", "2018-01-01").unwrap()),
            ..SalesOverviewRequest::default()
        };

        let response = build_sales_overview(&ledger, &request).unwrap();
        let range = response.date_range.unwrap();
        assert_eq!(range.start.to_string(), "2018-01-01");
        assert_eq!(response.metrics.total_orders, 2);
    }

    #[test]
    fn test_empty_window_degrades() {
        let ledger = ledger();
        let request = SalesOverviewRequest {
            date_range: Some(DateRange::parse("2018-01-04", "2018-01-04").unwrap()),
            ..SalesOverviewRequest::default()
        };

        let response = build_sales_overview(&ledger, &request).unwrap();
        assert_eq!(response.metrics.total_orders, 0);
        assert_eq!(response.metrics.total_revenue_display, "Rp0,00");
        assert!(response.daily_orders.is_empty());
        assert!(response.seller_performance.is_empty());
        assert!(response.top_sellers.is_empty());
        assert!(response.payment_methods.is_empty());
    }

    #[test]
    fn test_empty_ledger() {
        let response = build_sales_overview(&OrderLedger::default(), &SalesOverviewRequest::default()).unwrap();
        assert!(response.date_range.is_none());
        assert!(response.data_bounds.is_none());
        assert_eq!(response.metrics, OverviewMetrics {
            total_orders: 0,
            total_revenue: 0.0,
            total_revenue_display: "Rp0,00".to_string(),
        });
    }

    #[test]
    fn test_range_outside_data_selects_nothing() {
        let ledger = ledger();
        let requested = DateRange::parse("2019-01-01", "2019-02-01").unwrap();
        let request = SalesOverviewRequest {
            date_range: Some(requested),
            ..SalesOverviewRequest::default()
        };

        let response = build_sales_overview(&ledger, &request).unwrap();
        assert_eq!(response.date_range, Some(requested));
        assert_eq!(response.metrics.total_orders, 0);
        assert!(response.daily_orders.is_empty());
        assert!(response.seller_performance.is_empty());
    }

    #[test]
    fn test_reversed_range_is_error() {
        let ledger = ledger();
        let request = SalesOverviewRequest {
            date_range: Some(DateRange {
                start: chrono::NaiveDate::from_ymd_opt(2018, 1, 5).unwrap(),
                end: chrono::NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            }),
            ..SalesOverviewRequest::default()
        };

        let err = build_sales_overview(&ledger, &request).unwrap_err();
        assert!(err.to_string().contains("Invalid date range"));
    }

    #[test]
    fn test_reversed_range_rejected_in_request_json() {
        let parsed: Result<SalesOverviewRequest, _> =
            serde_json::from_str(r#"{"date_range":{"start":"2018-01-05","end":"2018-01-01"}}"#);
        assert!(parsed.is_err());
    }
}
