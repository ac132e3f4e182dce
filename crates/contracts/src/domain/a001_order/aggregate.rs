use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ покупателя (одна строка файла orders)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,

    #[serde(deserialize_with = "crate::shared::timestamp::deserialize")]
    pub order_purchase_timestamp: NaiveDateTime,
}

impl Order {
    pub fn new(order_id: impl Into<String>, order_purchase_timestamp: NaiveDateTime) -> Self {
        Self {
            order_id: order_id.into(),
            order_purchase_timestamp,
        }
    }

    /// Calendar day of the purchase
    pub fn purchase_date(&self) -> NaiveDate {
        self.order_purchase_timestamp.date()
    }
}

/// Columns the orders file must carry
pub const REQUIRED_COLUMNS: &[&str] = &["order_id", "order_purchase_timestamp"];
