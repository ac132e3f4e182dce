use contracts::domain::a001_order::Order;
use contracts::domain::a002_order_item::OrderItem;
use contracts::domain::a003_order_payment::OrderPayment;
use contracts::projections::p900_order_ledger::OrderRecord;
use contracts::shared::date_range::DateRange;
use std::collections::{HashMap, HashSet};

/// Журнал заказов: заказы, соединённые с позициями и платежами.
///
/// Built once per run and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    rows: Vec<OrderRecord>,
}

impl OrderLedger {
    /// Inner join `orders ⋈ items ⋈ payments` on `order_id`.
    ///
    /// An order with k items and m payments produces k×m rows. Rows follow
    /// the orders file order, then items order, then payments order.
    /// Orders without items or payments and orphan items/payments are
    /// dropped.
    pub fn build(orders: &[Order], items: &[OrderItem], payments: &[OrderPayment]) -> Self {
        let mut items_by_order: HashMap<&str, Vec<&OrderItem>> = HashMap::new();
        for item in items {
            items_by_order
                .entry(item.order_id.as_str())
                .or_default()
                .push(item);
        }

        let mut payments_by_order: HashMap<&str, Vec<&OrderPayment>> = HashMap::new();
        for payment in payments {
            payments_by_order
                .entry(payment.order_id.as_str())
                .or_default()
                .push(payment);
        }

        let mut rows = Vec::new();
        let mut unmatched_orders = 0usize;

        for order in orders {
            let key = order.order_id.as_str();
            let (Some(order_items), Some(order_payments)) =
                (items_by_order.get(key), payments_by_order.get(key))
            else {
                unmatched_orders += 1;
                continue;
            };

            for item in order_items {
                for payment in order_payments {
                    rows.push(OrderRecord::from_parts(order, item, payment));
                }
            }
        }

        let order_ids: HashSet<&str> = orders.iter().map(|o| o.order_id.as_str()).collect();
        let orphan_items = items
            .iter()
            .filter(|i| !order_ids.contains(i.order_id.as_str()))
            .count();
        let orphan_payments = payments
            .iter()
            .filter(|p| !order_ids.contains(p.order_id.as_str()))
            .count();

        if unmatched_orders > 0 || orphan_items > 0 || orphan_payments > 0 {
            tracing::debug!(
                "Join dropped {} orders, {} orphan items, {} orphan payments",
                unmatched_orders,
                orphan_items,
                orphan_payments
            );
        }

        tracing::info!("Order ledger built: {} rows", rows.len());

        Self { rows }
    }

    pub fn from_rows(rows: Vec<OrderRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[OrderRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest and latest purchase dates, `None` for an empty ledger
    pub fn date_bounds(&self) -> Option<DateRange> {
        let min = self.rows.iter().map(|r| r.purchase_date()).min()?;
        let max = self.rows.iter().map(|r| r.purchase_date()).max()?;
        Some(DateRange { start: min, end: max })
    }
}
