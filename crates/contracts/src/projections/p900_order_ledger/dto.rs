use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::a001_order::Order;
use crate::domain::a002_order_item::OrderItem;
use crate::domain::a003_order_payment::OrderPayment;

/// Строка журнала заказов (P900): заказ × позиция × платёж
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    // Dimensions
    pub order_id: String,
    #[serde(deserialize_with = "crate::shared::timestamp::deserialize")]
    pub order_purchase_timestamp: NaiveDateTime,
    pub seller_id: String,
    pub order_item_id: String,
    pub payment_type: String,

    // Sums
    pub price: f64,
    pub freight_value: f64,
    pub payment_value: f64,
}

impl OrderRecord {
    /// Assemble a joined row. All three parts share the same `order_id`.
    pub fn from_parts(order: &Order, item: &OrderItem, payment: &OrderPayment) -> Self {
        Self {
            order_id: order.order_id.clone(),
            order_purchase_timestamp: order.order_purchase_timestamp,
            seller_id: item.seller_id.clone(),
            order_item_id: item.order_item_id.clone(),
            payment_type: payment.payment_type.clone(),
            price: item.price,
            freight_value: item.freight_value,
            payment_value: payment.payment_value,
        }
    }

    /// Revenue of the row: price plus freight
    pub fn total_revenue(&self) -> f64 {
        self.price + self.freight_value
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.order_purchase_timestamp.date()
    }
}
