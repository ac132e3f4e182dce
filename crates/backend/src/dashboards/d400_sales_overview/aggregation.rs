use chrono::NaiveDate;
use contracts::dashboards::d400_sales_overview::{DailyOrders, PaymentSummary, SellerSummary};
use contracts::projections::p900_order_ledger::OrderRecord;
use std::collections::BTreeMap;

/// Revenue (price + freight) and item count per seller, revenue descending.
///
/// Groups are keyed in ascending `seller_id` order and the sort is stable,
/// so equal revenues keep that order.
pub fn analyze_seller_performance<'a, I>(rows: I) -> Vec<SellerSummary>
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    let mut by_seller: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = by_seller.entry(row.seller_id.as_str()).or_insert((0.0, 0));
        entry.0 += row.total_revenue();
        entry.1 += 1;
    }

    let mut sellers: Vec<SellerSummary> = by_seller
        .into_iter()
        .map(|(seller_id, (total_revenue, total_items))| SellerSummary {
            seller_id: seller_id.to_string(),
            total_revenue,
            total_items,
        })
        .collect();

    sellers.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    sellers
}

/// Total payment value and purchase count per payment type, value descending.
///
/// Ties keep ascending `payment_type` order.
pub fn analyze_payment_methods<'a, I>(rows: I) -> Vec<PaymentSummary>
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    let mut total_value: BTreeMap<&str, f64> = BTreeMap::new();
    let mut frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for row in rows {
        *total_value.entry(row.payment_type.as_str()).or_insert(0.0) += row.payment_value;
        *frequency.entry(row.payment_type.as_str()).or_insert(0) += 1;
    }

    // both maps share the same key set
    let mut payments: Vec<PaymentSummary> = total_value
        .into_iter()
        .filter_map(|(payment_type, total_purchase_value)| {
            frequency
                .get(payment_type)
                .map(|&purchase_count| PaymentSummary {
                    payment_type: payment_type.to_string(),
                    total_purchase_value,
                    purchase_count,
                })
        })
        .collect();

    payments.sort_by(|a, b| b.total_purchase_value.total_cmp(&a.total_purchase_value));
    payments
}

/// Row count and revenue per purchase day, date ascending
pub fn daily_orders<'a, I>(rows: I) -> Vec<DailyOrders>
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    let mut by_day: BTreeMap<NaiveDate, (usize, f64)> = BTreeMap::new();
    for row in rows {
        let entry = by_day.entry(row.purchase_date()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += row.total_revenue();
    }

    by_day
        .into_iter()
        .map(|(order_date, (order_count, revenue))| DailyOrders {
            order_date,
            order_count,
            revenue,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    const EPS: f64 = 1e-9;

    fn row(seller_id: &str, price: f64, freight_value: f64, payment_type: &str, payment_value: f64) -> OrderRecord {
        OrderRecord {
            order_id: format!("order-{}", seller_id),
            order_purchase_timestamp: NaiveDateTime::parse_from_str("2018-01-01 10:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            seller_id: seller_id.to_string(),
            order_item_id: "1".to_string(),
            payment_type: payment_type.to_string(),
            price,
            freight_value,
            payment_value,
        }
    }

    fn seller_row(seller_id: &str, price: f64, freight_value: f64) -> OrderRecord {
        row(seller_id, price, freight_value, "credit_card", 0.0)
    }

    fn payment_row(payment_type: &str, payment_value: f64) -> OrderRecord {
        row("s1", 0.0, 0.0, payment_type, payment_value)
    }

    fn mixed_rows() -> Vec<OrderRecord> {
        vec![
            row("7c67e144", 29.99, 8.72, "credit_card", 38.71),
            row("3504c0cb", 118.70, 22.76, "boleto", 141.46),
            row("7c67e144", 159.90, 19.22, "credit_card", 179.12),
            row("289cdb32", 45.00, 27.20, "voucher", 72.20),
            row("3504c0cb", 19.90, 8.72, "debit_card", 28.62),
            row("4869f7a5", 147.90, 27.36, "credit_card", 175.26),
            row("289cdb32", 49.90, 16.05, "boleto", 65.95),
        ]
    }

    #[test]
    fn test_seller_example() {
        let rows = vec![
            seller_row("A", 10.0, 2.0),
            seller_row("A", 5.0, 1.0),
            seller_row("B", 20.0, 0.0),
        ];

        let sellers = analyze_seller_performance(&rows);

        assert_eq!(
            sellers,
            vec![
                SellerSummary {
                    seller_id: "B".to_string(),
                    total_revenue: 20.0,
                    total_items: 1,
                },
                SellerSummary {
                    seller_id: "A".to_string(),
                    total_revenue: 18.0,
                    total_items: 2,
                },
            ]
        );
    }

    #[test]
    fn test_payment_example() {
        let rows = vec![
            payment_row("credit_card", 100.0),
            payment_row("voucher", 50.0),
            payment_row("credit_card", 20.0),
        ];

        let payments = analyze_payment_methods(&rows);

        assert_eq!(
            payments,
            vec![
                PaymentSummary {
                    payment_type: "credit_card".to_string(),
                    total_purchase_value: 120.0,
                    purchase_count: 2,
                },
                PaymentSummary {
                    payment_type: "voucher".to_string(),
                    total_purchase_value: 50.0,
                    purchase_count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_seller_sums_match_rows() {
        let rows = mixed_rows();
        let sellers = analyze_seller_performance(&rows);

        assert_eq!(sellers.len(), 4);
        for seller in &sellers {
            let own: Vec<_> = rows.iter().filter(|r| r.seller_id == seller.seller_id).collect();
            let expected: f64 = own.iter().map(|r| r.price + r.freight_value).sum();
            assert!((seller.total_revenue - expected).abs() < EPS);
            assert_eq!(seller.total_items, own.len());
        }
    }

    #[test]
    fn test_revenue_conserved() {
        let rows = mixed_rows();
        let sellers = analyze_seller_performance(&rows);

        let total: f64 = sellers.iter().map(|s| s.total_revenue).sum();
        let expected: f64 = rows.iter().map(|r| r.price + r.freight_value).sum();
        assert!((total - expected).abs() < 1e-6);

        let items: usize = sellers.iter().map(|s| s.total_items).sum();
        assert_eq!(items, rows.len());
    }

    #[test]
    fn test_purchase_count_conserved() {
        let rows = mixed_rows();
        let payments = analyze_payment_methods(&rows);

        let count: usize = payments.iter().map(|p| p.purchase_count).sum();
        assert_eq!(count, rows.len());

        let total: f64 = payments.iter().map(|p| p.total_purchase_value).sum();
        let expected: f64 = rows.iter().map(|r| r.payment_value).sum();
        assert!((total - expected).abs() < 1e-6);
    }

    #[test]
    fn test_outputs_sorted_descending() {
        let rows = mixed_rows();

        let sellers = analyze_seller_performance(&rows);
        for pair in sellers.windows(2) {
            assert!(pair[0].total_revenue >= pair[1].total_revenue);
        }

        let payments = analyze_payment_methods(&rows);
        for pair in payments.windows(2) {
            assert!(pair[0].total_purchase_value >= pair[1].total_purchase_value);
        }
    }

    #[test]
    fn test_ties_keep_key_order() {
        let rows = vec![
            seller_row("zeta", 5.0, 0.0),
            seller_row("alpha", 3.0, 2.0),
            seller_row("mid", 9.0, 0.0),
        ];
        let sellers = analyze_seller_performance(&rows);
        let order: Vec<&str> = sellers.iter().map(|s| s.seller_id.as_str()).collect();
        assert_eq!(order, vec!["mid", "alpha", "zeta"]);

        let rows = vec![payment_row("voucher", 10.0), payment_row("boleto", 10.0)];
        let payments = analyze_payment_methods(&rows);
        assert_eq!(payments[0].payment_type, "boleto");
        assert_eq!(payments[1].payment_type, "voucher");
    }

    #[test]
    fn test_empty_input_gives_empty_summaries() {
        let rows: Vec<OrderRecord> = Vec::new();
        assert!(analyze_seller_performance(&rows).is_empty());
        assert!(analyze_payment_methods(&rows).is_empty());
        assert!(daily_orders(&rows).is_empty());
    }

    #[test]
    fn test_daily_orders_grouped_by_date() {
        let mut rows = mixed_rows();
        rows[1].order_purchase_timestamp =
            NaiveDateTime::parse_from_str("2018-01-02 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        rows[4].order_purchase_timestamp =
            NaiveDateTime::parse_from_str("2017-12-31 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();

        let daily = daily_orders(&rows);

        let dates: Vec<String> = daily.iter().map(|d| d.order_date.to_string()).collect();
        assert_eq!(dates, vec!["2017-12-31", "2018-01-01", "2018-01-02"]);
        assert_eq!(daily[0].order_count, 1);
        assert!((daily[0].revenue - (19.90 + 8.72)).abs() < EPS);
        assert_eq!(daily[1].order_count, 5);
        assert_eq!(daily[2].order_count, 1);
        assert!((daily[2].revenue - (118.70 + 22.76)).abs() < EPS);
    }
}
